//! Database connection pool management.

use async_trait::async_trait;
use shaku::Component;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use tracing::{info, warn};
use userapi_config::DatabaseConfig;
use userapi_core::{Interface, UserApiError, UserApiResult};

/// Interface for database pool operations.
///
/// This trait abstracts database pool functionality for dependency injection.
#[async_trait]
pub trait DatabasePoolInterface: Interface + Send + Sync {
    /// Returns the underlying MySQL pool.
    fn inner(&self) -> UserApiResult<&MySqlPool>;

    /// Pings the database with `SELECT 1`.
    async fn health_check(&self) -> UserApiResult<()>;

    /// Closes the pool, waiting for checked-out connections to return.
    async fn close(&self);
}

/// Shared MySQL pool.
///
/// The pool is a shaku parameter, so it is optional until the module is
/// built with [`DatabasePoolParameters`].
#[derive(Component)]
#[shaku(interface = DatabasePoolInterface)]
pub struct DatabasePool {
    pool: Option<MySqlPool>,
}

impl DatabasePool {
    /// Wraps an existing pool.
    #[must_use]
    pub fn with_pool(pool: MySqlPool) -> Self {
        Self { pool: Some(pool) }
    }
}

#[async_trait]
impl DatabasePoolInterface for DatabasePool {
    fn inner(&self) -> UserApiResult<&MySqlPool> {
        self.pool
            .as_ref()
            .ok_or_else(|| UserApiError::internal("database pool is not configured"))
    }

    async fn health_check(&self) -> UserApiResult<()> {
        sqlx::query("SELECT 1")
            .execute(self.inner()?)
            .await
            .map_err(|e| UserApiError::Database(format!("Health check failed: {e}")))?;
        Ok(())
    }

    async fn close(&self) {
        if let Some(pool) = &self.pool {
            info!("Closing database connection pool...");
            pool.close().await;
            info!("Database connection pool closed");
        }
    }
}

impl std::fmt::Debug for DatabasePool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("DatabasePool");
        match &self.pool {
            Some(pool) => s
                .field("size", &pool.size())
                .field("num_idle", &pool.num_idle()),
            None => s.field("pool", &"unconfigured"),
        };
        s.finish()
    }
}

/// Opens a MySQL pool from configuration.
///
/// Connections are opened lazily past `min_connections`; call
/// [`DatabasePoolInterface::health_check`] to verify reachability.
pub async fn create_pool(config: &DatabaseConfig) -> UserApiResult<MySqlPool> {
    info!(
        host = %config.host,
        port = config.port,
        database = %config.name,
        "Connecting to MySQL database..."
    );

    let pool = MySqlPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.connect_timeout())
        .idle_timeout(Some(config.idle_timeout()))
        .connect(&config.url()?)
        .await
        .map_err(|e| {
            warn!("Failed to connect to database: {}", e);
            UserApiError::Database(format!("Failed to connect: {e}"))
        })?;

    info!("MySQL connection pool established");
    Ok(pool)
}
