//! Configuration loader with layered sources.

use crate::AppConfig;
use config::{Config, ConfigError, Environment, File};
use std::path::PathBuf;
use tracing::{debug, info};
use userapi_core::{UserApiError, UserApiResult};

/// Environment variable prefix for overrides (`USER_API_DATABASE__HOST`).
pub const ENV_PREFIX: &str = "USER_API";

/// Environment variable selecting the environment-specific file.
pub const ENVIRONMENT_VAR: &str = "USER_API_ENVIRONMENT";

/// Configuration loader.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_dir: PathBuf,
}

impl ConfigLoader {
    /// Creates a loader reading from `config_dir`.
    ///
    /// Sources are applied in order, later ones overriding earlier ones:
    /// 1. `default.toml`
    /// 2. `{environment}.toml`
    /// 3. `local.toml`
    /// 4. Environment variables with the `USER_API` prefix
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    /// Creates a loader for the default location (`./config`).
    #[must_use]
    pub fn from_default_location() -> Self {
        Self::new("./config")
    }

    /// Loads and validates the configuration.
    pub fn load(&self) -> UserApiResult<AppConfig> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var(ENVIRONMENT_VAR).unwrap_or_else(|_| "development".to_string());
        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();
        for file in ["default", environment.as_str(), "local"] {
            let path = self.config_dir.join(format!("{file}.toml"));
            if path.exists() {
                debug!("Loading config from: {}", path.display());
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let app_config: AppConfig = builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(config_error_to_user_api_error)?;

        validate_config(&app_config)?;

        Ok(app_config)
    }
}

/// Rejects configurations the server cannot start with.
pub fn validate_config(config: &AppConfig) -> UserApiResult<()> {
    let database = &config.database;
    let required = [
        ("database.host", database.host.as_str()),
        ("database.user", database.user.as_str()),
        ("database.name", database.name.as_str()),
    ];
    for (key, value) in required {
        if value.trim().is_empty() {
            return Err(UserApiError::Configuration(format!("{key} is required")));
        }
    }

    if database.port == 0 {
        return Err(UserApiError::Configuration(
            "database.port must be non-zero".to_string(),
        ));
    }

    database.url().map(|_| ())
}

fn config_error_to_user_api_error(err: ConfigError) -> UserApiError {
    UserApiError::Configuration(err.to_string())
}
