//! Common test infrastructure for database integration tests.

use std::sync::Arc;
use testcontainers::{runners::AsyncRunner, ContainerAsync, ImageExt};
use testcontainers_modules::mysql::Mysql;
use userapi_config::DatabaseConfig;
use userapi_repository::{create_pool, DatabasePool, DatabasePoolInterface};

const SCHEMA: &str = include_str!("../../../../db/schema.sql");

/// Test database container wrapper.
///
/// Manages a MySQL testcontainer lifecycle and provides a database pool
/// with the `users` table created.
pub struct TestDatabase {
    _container: ContainerAsync<Mysql>,
    pool: Arc<DatabasePool>,
}

impl TestDatabase {
    /// Starts a fresh MySQL container and applies the schema.
    pub async fn new() -> Self {
        let container = Mysql::default()
            .with_env_var("MYSQL_ROOT_PASSWORD", "testpass")
            .with_env_var("MYSQL_DATABASE", "userapi_test")
            .with_env_var("MYSQL_USER", "userapi")
            .with_env_var("MYSQL_PASSWORD", "userapi")
            .start()
            .await
            .expect("Failed to start MySQL container");

        let port = container
            .get_host_port_ipv4(3306)
            .await
            .expect("Failed to get MySQL port");

        let config = DatabaseConfig {
            host: "127.0.0.1".to_string(),
            port,
            user: "userapi".to_string(),
            password: "userapi".to_string(),
            name: "userapi_test".to_string(),
            min_connections: 1,
            max_connections: 5,
            connect_timeout_secs: 30,
            idle_timeout_secs: 600,
        };

        let pool = Self::connect_with_retry(&config, 30).await;

        sqlx::raw_sql(SCHEMA)
            .execute(pool.inner().expect("pool configured"))
            .await
            .expect("Failed to apply schema");

        Self {
            _container: container,
            pool: Arc::new(pool),
        }
    }

    /// Returns the shared pool.
    pub fn pool(&self) -> Arc<DatabasePool> {
        Arc::clone(&self.pool)
    }

    async fn connect_with_retry(config: &DatabaseConfig, max_attempts: u32) -> DatabasePool {
        let mut attempts = 0;
        loop {
            attempts += 1;
            match create_pool(config).await {
                Ok(pool) => return DatabasePool::with_pool(pool),
                Err(e) => {
                    if attempts >= max_attempts {
                        panic!("Failed to connect to database after {max_attempts} attempts: {e}");
                    }
                    tokio::time::sleep(std::time::Duration::from_secs(1)).await;
                }
            }
        }
    }
}
