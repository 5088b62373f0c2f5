//! Application state for Axum handlers.

use shaku::{HasComponent, Module};
use std::sync::Arc;
use std::time::Duration;
use userapi_core::DEFAULT_REQUEST_TIMEOUT;
use userapi_service::UserService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    /// Deadline applied to every request's context.
    pub request_timeout: Duration,
}

impl AppState {
    /// Creates a new application state with the default request timeout.
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self {
            user_service,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Resolves the user service from a Shaku module.
    pub fn from_module<M>(module: &M) -> Self
    where
        M: Module + HasComponent<dyn UserService>,
    {
        Self::new(module.resolve())
    }

    /// Overrides the per-request deadline.
    #[must_use]
    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("request_timeout", &self.request_timeout)
            .finish_non_exhaustive()
    }
}
