//! Unified error types for all layers of the application.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the User API.
///
/// Store failures keep the driver's message verbatim; it is what the
/// client sees in the `error` field of the response body.
#[derive(Error, Debug)]
pub enum UserApiError {
    // ============ Request Errors ============
    /// Malformed path id, request body, or date.
    #[error("{0}")]
    BadRequest(String),

    /// No row matched the requested id.
    #[error("{resource_type} not found")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    // ============ Store Errors ============
    /// Constraint violation reported by the store.
    #[error("{0}")]
    Conflict(String),

    /// Connection or query failure, including deadline expiry.
    #[error("{0}")]
    Database(String),

    // ============ Internal Errors ============
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Any other failure.
    #[error("{0}")]
    Internal(String),
}

impl UserApiError {
    /// Returns the HTTP status code for this error.
    ///
    /// Constraint violations are store failures and map to 500 like
    /// every other store error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::NotFound { .. } => 404,
            Self::Conflict(_) | Self::Database(_) | Self::Configuration(_) | Self::Internal(_) => {
                500
            }
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a bad request error.
    #[must_use]
    pub fn bad_request<T: Into<String>>(message: T) -> Self {
        Self::BadRequest(message.into())
    }

    /// Creates a database error.
    #[must_use]
    pub fn database<T: Into<String>>(message: T) -> Self {
        Self::Database(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for UserApiError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "record",
                id: "unknown".to_string(),
            },
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Self::Conflict(err.to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}

/// JSON error body: `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    /// Creates an error body with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }

    /// Creates an error body from a `UserApiError`.
    #[must_use]
    pub fn from_error(error: &UserApiError) -> Self {
        Self::new(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(UserApiError::bad_request("invalid user id").status_code(), 400);
        assert_eq!(UserApiError::not_found("user", 1).status_code(), 404);
        assert_eq!(UserApiError::database("connection refused").status_code(), 500);
        assert_eq!(UserApiError::Conflict("duplicate".to_string()).status_code(), 500);
        assert_eq!(UserApiError::internal("oops").status_code(), 500);
        assert_eq!(UserApiError::Configuration("bad".to_string()).status_code(), 500);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(UserApiError::bad_request("x").error_code(), "BAD_REQUEST");
        assert_eq!(UserApiError::not_found("user", 1).error_code(), "NOT_FOUND");
        assert_eq!(UserApiError::database("x").error_code(), "DATABASE_ERROR");
        assert_eq!(UserApiError::Conflict("x".to_string()).error_code(), "CONFLICT");
        assert_eq!(UserApiError::internal("x").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_not_found_message() {
        let err = UserApiError::not_found("user", 42);
        assert_eq!(err.to_string(), "user not found");
        match err {
            UserApiError::NotFound { id, .. } => assert_eq!(id, "42"),
            _ => panic!("Expected NotFound"),
        }
    }

    #[test]
    fn test_store_messages_are_verbatim() {
        let err = UserApiError::database("dial tcp 127.0.0.1:3306: connect: connection refused");
        assert_eq!(
            err.to_string(),
            "dial tcp 127.0.0.1:3306: connect: connection refused"
        );
        assert_eq!(err.status_code(), 500);
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err = UserApiError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.status_code(), 404);
    }

    #[cfg(feature = "sqlx")]
    #[test]
    fn test_pool_timeout_maps_to_database() {
        let err = UserApiError::from(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, UserApiError::Database(_)));
    }

    #[test]
    fn test_error_response_shape() {
        let response = ErrorResponse::from_error(&UserApiError::bad_request("invalid dob format"));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "invalid dob format" }));
    }
}
