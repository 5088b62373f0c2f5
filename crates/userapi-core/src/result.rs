//! Result type aliases for the User API.

use crate::UserApiError;

/// A specialized `Result` type for User API operations.
pub type UserApiResult<T> = Result<T, UserApiError>;
