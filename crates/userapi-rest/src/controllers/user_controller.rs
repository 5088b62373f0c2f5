//! User management controller.

use crate::{
    extractors::{RequestScope, ValidatedJson},
    responses::{no_content, ok, status, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Router,
};
use tracing::{debug, warn};
use userapi_core::{UserApiError, UserId};
use userapi_service::{StatusResponse, User, UserRequest};

/// Message for ids that are not 32-bit integers.
pub const INVALID_USER_ID: &str = "invalid user id";

/// Creates the user router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// List all users.
async fn list_users(
    State(state): State<AppState>,
    RequestScope(ctx): RequestScope,
) -> ApiResult<Vec<User>> {
    debug!(request_id = ?ctx.request_id(), "List users request");

    let users = state.user_service.list_users(&ctx).await?;
    ok(users)
}

/// Get a user by ID.
///
/// Every lookup failure is answered as `user not found`.
async fn get_user(
    State(state): State<AppState>,
    RequestScope(ctx): RequestScope,
    Path(id): Path<String>,
) -> ApiResult<User> {
    debug!(request_id = ?ctx.request_id(), "Get user request: {}", id);

    let user_id = parse_user_id(&id)?;

    let user = state
        .user_service
        .get_user(&ctx, user_id)
        .await
        .map_err(|e| {
            if !matches!(e, UserApiError::NotFound { .. }) {
                warn!(request_id = ?ctx.request_id(), error = %e, "Get user failed: {}", user_id);
            }
            UserApiError::not_found("user", user_id)
        })?;
    ok(user)
}

/// Create a new user.
async fn create_user(
    State(state): State<AppState>,
    RequestScope(ctx): RequestScope,
    ValidatedJson(request): ValidatedJson<UserRequest>,
) -> ApiResult<StatusResponse> {
    debug!(request_id = ?ctx.request_id(), "Create user request: {}", request.name);

    let (name, dob) = request.into_parts()?;
    state.user_service.create_user(&ctx, &name, dob).await?;
    status("user created")
}

/// Replace a user's name and date of birth.
async fn update_user(
    State(state): State<AppState>,
    RequestScope(ctx): RequestScope,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UserRequest>,
) -> ApiResult<StatusResponse> {
    debug!(request_id = ?ctx.request_id(), "Update user request: {}", id);

    let user_id = parse_user_id(&id)?;
    let (name, dob) = request.into_parts()?;

    state
        .user_service
        .update_user(&ctx, user_id, &name, dob)
        .await?;
    status("user updated")
}

/// Delete a user.
async fn delete_user(
    State(state): State<AppState>,
    RequestScope(ctx): RequestScope,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    debug!(request_id = ?ctx.request_id(), "Delete user request: {}", id);

    let user_id = parse_user_id(&id)?;
    state.user_service.delete_user(&ctx, user_id).await?;

    Ok(no_content())
}

fn parse_user_id(id: &str) -> Result<UserId, AppError> {
    UserId::parse(id).map_err(|_| AppError(UserApiError::bad_request(INVALID_USER_ID)))
}
