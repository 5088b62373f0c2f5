//! MySQL user repository implementation.

use crate::{traits::UserRepository, DatabasePoolInterface, UserRecord};
use async_trait::async_trait;
use chrono::NaiveDate;
use shaku::Component;
use std::sync::Arc;
use tracing::debug;
use userapi_core::{RequestContext, UserApiError, UserApiResult, UserId};

/// MySQL user repository implementation.
#[derive(Component, Clone)]
#[shaku(interface = UserRepository)]
pub struct MySqlUserRepository {
    #[shaku(inject)]
    pool: Arc<dyn DatabasePoolInterface>,
}

impl MySqlUserRepository {
    /// Creates a new MySQL user repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn list_users(&self, ctx: &RequestContext) -> UserApiResult<Vec<UserRecord>> {
        debug!(request_id = ?ctx.request_id(), "Listing users");

        let pool = self.pool.inner()?;
        ctx.run(async {
            sqlx::query_as::<_, UserRecord>("SELECT id, name, dob FROM users")
                .fetch_all(pool)
                .await
                .map_err(UserApiError::from)
        })
        .await
    }

    async fn get_user(&self, ctx: &RequestContext, id: UserId) -> UserApiResult<UserRecord> {
        debug!(request_id = ?ctx.request_id(), "Finding user by id: {}", id);

        let pool = self.pool.inner()?;
        let row = ctx
            .run(async {
                sqlx::query_as::<_, UserRecord>("SELECT id, name, dob FROM users WHERE id = ?")
                    .bind(id.into_inner())
                    .fetch_optional(pool)
                    .await
                    .map_err(UserApiError::from)
            })
            .await?;

        row.ok_or_else(|| UserApiError::not_found("user", id))
    }

    async fn create_user(
        &self,
        ctx: &RequestContext,
        name: &str,
        dob: NaiveDate,
    ) -> UserApiResult<()> {
        debug!(request_id = ?ctx.request_id(), "Creating user: {}", name);

        let pool = self.pool.inner()?;
        let result = ctx
            .run(async {
                sqlx::query("INSERT INTO users (name, dob) VALUES (?, ?)")
                    .bind(name)
                    .bind(dob)
                    .execute(pool)
                    .await
                    .map_err(UserApiError::from)
            })
            .await?;

        debug!("Inserted user with id {}", result.last_insert_id());
        Ok(())
    }

    async fn update_user(
        &self,
        ctx: &RequestContext,
        id: UserId,
        name: &str,
        dob: NaiveDate,
    ) -> UserApiResult<u64> {
        debug!(request_id = ?ctx.request_id(), "Updating user: {}", id);

        let pool = self.pool.inner()?;
        let result = ctx
            .run(async {
                sqlx::query("UPDATE users SET name = ?, dob = ? WHERE id = ?")
                    .bind(name)
                    .bind(dob)
                    .bind(id.into_inner())
                    .execute(pool)
                    .await
                    .map_err(UserApiError::from)
            })
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete_user(&self, ctx: &RequestContext, id: UserId) -> UserApiResult<()> {
        debug!(request_id = ?ctx.request_id(), "Deleting user: {}", id);

        let pool = self.pool.inner()?;
        let result = ctx
            .run(async {
                sqlx::query("DELETE FROM users WHERE id = ?")
                    .bind(id.into_inner())
                    .execute(pool)
                    .await
                    .map_err(UserApiError::from)
            })
            .await?;

        if result.rows_affected() == 0 {
            debug!("No user with id {} to delete", id);
        }
        Ok(())
    }
}
