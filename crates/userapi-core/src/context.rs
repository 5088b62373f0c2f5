//! Request-scoped context carried explicitly through service and
//! repository calls.

use crate::{UserApiError, UserApiResult};
use std::future::Future;
use std::time::Duration;
use tokio::time::Instant;

/// Message reported when a request outlives its deadline.
pub const DEADLINE_EXCEEDED: &str = "context deadline exceeded";

/// Default per-request deadline.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Per-request context: the request id and an optional deadline.
///
/// Handlers build one per request and pass it by reference down to the
/// store. Store calls run under [`RequestContext::run`], so an expired
/// deadline surfaces as a [`UserApiError::Database`] error.
#[derive(Debug, Clone)]
pub struct RequestContext {
    request_id: Option<String>,
    deadline: Option<Instant>,
}

impl RequestContext {
    /// Creates a context whose deadline is `timeout` from now.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            request_id: None,
            deadline: Some(Instant::now() + timeout),
        }
    }

    /// Creates a context without a deadline.
    #[must_use]
    pub const fn background() -> Self {
        Self {
            request_id: None,
            deadline: None,
        }
    }

    /// Attaches a request id.
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Returns the request id, if one was attached.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Returns the deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Returns true once the deadline has passed.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }

    /// Runs a store operation under this context's deadline.
    ///
    /// An already expired context fails without polling `operation`.
    pub async fn run<F, T>(&self, operation: F) -> UserApiResult<T>
    where
        F: Future<Output = UserApiResult<T>>,
    {
        if self.is_expired() {
            return Err(deadline_exceeded());
        }
        match self.deadline {
            Some(deadline) => tokio::time::timeout_at(deadline, operation)
                .await
                .map_err(|_| deadline_exceeded())?,
            None => operation.await,
        }
    }
}

fn deadline_exceeded() -> UserApiError {
    UserApiError::Database(DEADLINE_EXCEEDED.to_string())
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::with_timeout(DEFAULT_REQUEST_TIMEOUT)
    }
}
