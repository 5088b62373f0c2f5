//! # User API Service
//!
//! Service layer for the User API: derives `age` from the stored date of
//! birth and maps persistence records into API models.

pub mod dto;
pub mod r#impl;
pub mod mappers;
pub mod user_service;

pub use dto::*;
pub use r#impl::{UserServiceComponent, UserServiceImpl};
pub use user_service::*;
