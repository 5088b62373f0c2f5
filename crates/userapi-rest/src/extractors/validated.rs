//! Validated JSON extractor for automatic request validation.
//!
//! Both malformed JSON and failed validation rules are answered with
//! 400 and `{"error": "<message>"}`.

use crate::responses::AppError;
use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use userapi_core::{UserApiError, ValidateExt};
use validator::Validate;

/// JSON extractor that validates the deserialized value.
///
/// ```ignore
/// async fn create_user(ValidatedJson(request): ValidatedJson<UserRequest>) {
///     // request.dob is a parsed date here
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T> std::ops::Deref for ValidatedJson<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError(UserApiError::BadRequest(rejection.body_text())))?;

        value.validate_request()?;

        Ok(ValidatedJson(value))
    }
}
