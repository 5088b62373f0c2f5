//! User service implementations.

use crate::dto::User;
use crate::mappers::to_model;
use crate::user_service::UserService;
use async_trait::async_trait;
use chrono::NaiveDate;
use shaku::Component;
use std::sync::Arc;
use tracing::{debug, info};
use userapi_core::{RequestContext, UserApiResult, UserId};
use userapi_repository::UserRepository;

/// Generic user service implementation (non-DI).
pub struct UserServiceImpl<R: UserRepository> {
    user_repository: Arc<R>,
}

impl<R: UserRepository> UserServiceImpl<R> {
    /// Creates a new user service.
    pub fn new(user_repository: Arc<R>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl<R: UserRepository + 'static> UserService for UserServiceImpl<R> {
    async fn list_users(&self, ctx: &RequestContext) -> UserApiResult<Vec<User>> {
        list_users(self.user_repository.as_ref(), ctx).await
    }

    async fn get_user(&self, ctx: &RequestContext, id: UserId) -> UserApiResult<User> {
        get_user(self.user_repository.as_ref(), ctx, id).await
    }

    async fn create_user(
        &self,
        ctx: &RequestContext,
        name: &str,
        dob: NaiveDate,
    ) -> UserApiResult<()> {
        create_user(self.user_repository.as_ref(), ctx, name, dob).await
    }

    async fn update_user(
        &self,
        ctx: &RequestContext,
        id: UserId,
        name: &str,
        dob: NaiveDate,
    ) -> UserApiResult<()> {
        update_user(self.user_repository.as_ref(), ctx, id, name, dob).await
    }

    async fn delete_user(&self, ctx: &RequestContext, id: UserId) -> UserApiResult<()> {
        delete_user(self.user_repository.as_ref(), ctx, id).await
    }
}

/// User service component for Shaku DI.
#[derive(Component)]
#[shaku(interface = UserService)]
pub struct UserServiceComponent {
    #[shaku(inject)]
    user_repository: Arc<dyn UserRepository>,
}

#[async_trait]
impl UserService for UserServiceComponent {
    async fn list_users(&self, ctx: &RequestContext) -> UserApiResult<Vec<User>> {
        list_users(self.user_repository.as_ref(), ctx).await
    }

    async fn get_user(&self, ctx: &RequestContext, id: UserId) -> UserApiResult<User> {
        get_user(self.user_repository.as_ref(), ctx, id).await
    }

    async fn create_user(
        &self,
        ctx: &RequestContext,
        name: &str,
        dob: NaiveDate,
    ) -> UserApiResult<()> {
        create_user(self.user_repository.as_ref(), ctx, name, dob).await
    }

    async fn update_user(
        &self,
        ctx: &RequestContext,
        id: UserId,
        name: &str,
        dob: NaiveDate,
    ) -> UserApiResult<()> {
        update_user(self.user_repository.as_ref(), ctx, id, name, dob).await
    }

    async fn delete_user(&self, ctx: &RequestContext, id: UserId) -> UserApiResult<()> {
        delete_user(self.user_repository.as_ref(), ctx, id).await
    }
}

impl std::fmt::Debug for UserServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserServiceComponent").finish_non_exhaustive()
    }
}

// Shared by both implementations.

async fn list_users<R: UserRepository + ?Sized>(
    repo: &R,
    ctx: &RequestContext,
) -> UserApiResult<Vec<User>> {
    debug!("Listing users");

    let records = repo.list_users(ctx).await?;
    Ok(records.into_iter().map(to_model).collect())
}

async fn get_user<R: UserRepository + ?Sized>(
    repo: &R,
    ctx: &RequestContext,
    id: UserId,
) -> UserApiResult<User> {
    debug!("Getting user: {}", id);

    let record = repo.get_user(ctx, id).await?;
    Ok(to_model(record))
}

async fn create_user<R: UserRepository + ?Sized>(
    repo: &R,
    ctx: &RequestContext,
    name: &str,
    dob: NaiveDate,
) -> UserApiResult<()> {
    debug!("Creating user: {}", name);

    repo.create_user(ctx, name, dob).await?;

    info!("User created: {}", name);
    Ok(())
}

async fn update_user<R: UserRepository + ?Sized>(
    repo: &R,
    ctx: &RequestContext,
    id: UserId,
    name: &str,
    dob: NaiveDate,
) -> UserApiResult<()> {
    debug!("Updating user: {}", id);

    let affected = repo.update_user(ctx, id, name, dob).await?;
    if affected == 0 {
        debug!("Update matched no rows for user: {}", id);
    } else {
        info!("User updated: {}", id);
    }
    Ok(())
}

async fn delete_user<R: UserRepository + ?Sized>(
    repo: &R,
    ctx: &RequestContext,
    id: UserId,
) -> UserApiResult<()> {
    debug!("Deleting user: {}", id);

    repo.delete_user(ctx, id).await?;

    info!("User deleted: {}", id);
    Ok(())
}
