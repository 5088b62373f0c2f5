//! # User API Server
//!
//! Main entry point for the User API.

use std::process::ExitCode;
use tracing::{error, info};
use userapi_config::{ConfigLoader, ObservabilityConfig};
use userapi_server::{app, startup};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match ConfigLoader::from_default_location().load() {
        Ok(config) => config,
        Err(e) => {
            startup::init_logging(&ObservabilityConfig::default());
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    startup::init_logging(&config.observability);

    info!("Starting User API server...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    if let Err(e) = app::run(config).await {
        error!("Application error: {}", e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
