//! Main application router.

use crate::{
    controllers::{health_controller, user_controller},
    middleware::logging_middleware,
    responses::error_response,
    state::AppState,
};
use axum::{
    http::{Method, StatusCode, Uri},
    middleware,
    response::Response,
    Router,
};
use std::any::Any;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{error, info};

/// Body message for recovered panics.
pub const INTERNAL_SERVER_ERROR: &str = "Internal server error";

/// Creates the application router.
///
/// Layers, outermost first: request id assignment, request id
/// propagation, tracing, request logging, panic recovery.
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        .merge(health_controller::router())
        .merge(user_controller::router())
        .fallback(route_not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

    info!("Router created with /users and /health endpoints");
    router
}

/// Answers unknown routes with `Cannot <METHOD> <path>`.
async fn route_not_found(method: Method, uri: Uri) -> Response {
    error_response(
        StatusCode::NOT_FOUND,
        format!("Cannot {method} {}", uri.path()),
    )
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };
    error!(panic = %detail, "Handler panicked");

    error_response(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_SERVER_ERROR)
}
