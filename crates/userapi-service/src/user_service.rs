//! User service trait definition.

use crate::dto::User;
use async_trait::async_trait;
use chrono::NaiveDate;
use userapi_core::{Interface, RequestContext, UserApiResult, UserId};

/// User service trait.
#[async_trait]
pub trait UserService: Interface + Send + Sync {
    /// Lists all users with derived age.
    async fn list_users(&self, ctx: &RequestContext) -> UserApiResult<Vec<User>>;

    /// Gets a user by ID.
    async fn get_user(&self, ctx: &RequestContext, id: UserId) -> UserApiResult<User>;

    /// Creates a new user.
    async fn create_user(&self, ctx: &RequestContext, name: &str, dob: NaiveDate)
        -> UserApiResult<()>;

    /// Replaces a user's name and date of birth. Unknown ids succeed.
    async fn update_user(
        &self,
        ctx: &RequestContext,
        id: UserId,
        name: &str,
        dob: NaiveDate,
    ) -> UserApiResult<()>;

    /// Deletes a user. Unknown ids succeed.
    async fn delete_user(&self, ctx: &RequestContext, id: UserId) -> UserApiResult<()>;
}
