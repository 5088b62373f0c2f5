//! # User API Server Library
//!
//! Dependency injection wiring, logging setup and the serve loop for
//! the User API binary.

pub mod app;
pub mod di;
pub mod startup;
