//! # User API Repository
//!
//! Persistence query layer for the `users` table.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn UserRepository>
//! MySqlUserRepository
//!   ↓  Arc<dyn DatabasePoolInterface>
//! MySQL
//! ```
//!
//! Every query runs under the caller's [`RequestContext`] deadline.
//!
//! [`RequestContext`]: userapi_core::RequestContext

pub mod mysql;
pub mod pool;
pub mod record;
pub mod traits;

pub use mysql::*;
pub use pool::*;
pub use record::*;
pub use traits::*;
