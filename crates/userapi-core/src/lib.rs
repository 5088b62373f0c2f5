//! # User API Core
//!
//! Core types, traits, and error definitions for the User API.
//! This crate provides the foundational abstractions shared by the
//! repository, service, and REST layers.

pub mod context;
pub mod error;
pub mod id;
pub mod result;
pub mod validation;

pub use context::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use validation::*;

// Re-export shaku for dependency injection
pub use shaku::Interface;
