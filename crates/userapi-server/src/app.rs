//! Server lifecycle: connect, wire, serve, drain.

use crate::di::{build_module, ComponentResolver};
use crate::startup::{print_startup_info, shutdown_signal};
use tracing::{info, warn};
use userapi_config::AppConfig;
use userapi_core::{UserApiError, UserApiResult};
use userapi_repository::create_pool;
use userapi_rest::{create_router, AppState};

/// Runs the server until a shutdown signal arrives.
///
/// A database that cannot be pinged at startup is fatal. After the
/// listener stops, the pool is closed within
/// `server.shutdown_timeout_secs`.
pub async fn run(config: AppConfig) -> UserApiResult<()> {
    let pool = create_pool(&config.database).await?;

    let module = build_module(pool);
    let database = module.database_pool();
    database.health_check().await?;
    info!("Database connection verified");

    let state = AppState::from_module(module.as_ref())
        .with_request_timeout(config.server.request_timeout());
    let router = create_router(state);

    let addr = config.server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| UserApiError::Internal(format!("Failed to bind {addr}: {e}")))?;
    info!("Starting REST server on http://{}", addr);
    print_startup_info(&addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| UserApiError::Internal(format!("REST server error: {e}")))?;

    info!("Shutting down server...");
    let shutdown_timeout = config.server.shutdown_timeout();
    if tokio::time::timeout(shutdown_timeout, database.close())
        .await
        .is_err()
    {
        warn!(
            "Database pool did not close within {}s",
            shutdown_timeout.as_secs()
        );
    }

    info!("Server gracefully stopped");
    Ok(())
}
