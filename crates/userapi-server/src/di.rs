//! Dependency injection module using Shaku.
//!
//! The module wires the pool into the repository and the repository into
//! the user service:
//!
//! ```text
//! DatabasePool -> MySqlUserRepository -> UserServiceComponent
//! ```

use shaku::{module, HasComponent};
use sqlx::MySqlPool;
use std::sync::Arc;
use userapi_repository::{
    DatabasePool, DatabasePoolInterface, DatabasePoolParameters, MySqlUserRepository,
};
use userapi_service::UserServiceComponent;

module! {
    pub UserApiModule {
        components = [
            DatabasePool,
            MySqlUserRepository,
            UserServiceComponent,
        ],
        providers = [],
    }
}

/// Builds the module around an open pool.
#[must_use]
pub fn build_module(pool: MySqlPool) -> Arc<UserApiModule> {
    let module = UserApiModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters { pool: Some(pool) })
        .build();

    Arc::new(module)
}

/// Typed accessors over the module's components.
pub trait ComponentResolver {
    /// Resolves the shared database pool.
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface>;
}

impl ComponentResolver for UserApiModule {
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.resolve()
    }
}
