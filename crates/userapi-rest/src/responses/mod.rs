//! API response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, error};
use userapi_core::{ErrorResponse, UserApiError};
use userapi_service::StatusResponse;

/// Application error type for Axum.
///
/// Renders as `{"error": "<message>"}` with the error's status code.
#[derive(Debug)]
pub struct AppError(pub UserApiError);

impl From<UserApiError> for AppError {
    fn from(err: UserApiError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(code = self.0.error_code(), "Request failed: {}", self.0);
        } else {
            debug!(code = self.0.error_code(), "Request rejected: {}", self.0);
        }

        (status, Json(ErrorResponse::from_error(&self.0))).into_response()
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Helper to create a 200 JSON response.
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}

/// Helper to create a `{"status": ...}` acknowledgement.
pub fn status(message: &str) -> ApiResult<StatusResponse> {
    ok(StatusResponse::new(message))
}

/// Helper to create a no content (204) response.
pub fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Builds an error body response with an explicit status.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}
