//! # User API REST
//!
//! REST API layer using Axum for the User API.
//! Provides the `/users` CRUD endpoints and a health check.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
