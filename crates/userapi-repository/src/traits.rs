//! Repository trait definitions.

use crate::UserRecord;
use async_trait::async_trait;
use chrono::NaiveDate;
use userapi_core::{Interface, RequestContext, UserApiResult, UserId};

/// Repository trait for the `users` table.
///
/// Each call takes the request's context and fails with a store error
/// once its deadline passes.
#[async_trait]
pub trait UserRepository: Interface + Send + Sync {
    /// Returns every row. Order is whatever the store yields.
    async fn list_users(&self, ctx: &RequestContext) -> UserApiResult<Vec<UserRecord>>;

    /// Returns one row, or `NotFound` when no row has this id.
    async fn get_user(&self, ctx: &RequestContext, id: UserId) -> UserApiResult<UserRecord>;

    /// Inserts a row. The store assigns the id.
    async fn create_user(&self, ctx: &RequestContext, name: &str, dob: NaiveDate)
        -> UserApiResult<()>;

    /// Replaces name and dob. Returns the number of rows affected,
    /// which is zero for an unknown id.
    async fn update_user(
        &self,
        ctx: &RequestContext,
        id: UserId,
        name: &str,
        dob: NaiveDate,
    ) -> UserApiResult<u64>;

    /// Removes the row if present.
    async fn delete_user(&self, ctx: &RequestContext, id: UserId) -> UserApiResult<()>;
}
