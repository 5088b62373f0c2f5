//! Per-request context extractor.

use crate::state::AppState;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use std::convert::Infallible;
use userapi_core::RequestContext;

/// Header carrying the request id, set by `SetRequestIdLayer`.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Builds the [`RequestContext`] for the current request.
///
/// The deadline starts when the handler's extractors run.
#[derive(Debug, Clone)]
pub struct RequestScope(pub RequestContext);

impl std::ops::Deref for RequestScope {
    type Target = RequestContext;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl FromRequestParts<AppState> for RequestScope {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let mut ctx = RequestContext::with_timeout(state.request_timeout);
        if let Some(id) = parts
            .headers
            .get(REQUEST_ID_HEADER)
            .and_then(|value| value.to_str().ok())
        {
            ctx = ctx.with_request_id(id);
        }
        Ok(Self(ctx))
    }
}
