//! Custom Axum extractors.

mod request_scope;
mod validated;

pub use request_scope::*;
pub use validated::*;
