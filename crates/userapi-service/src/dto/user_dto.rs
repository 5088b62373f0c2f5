//! User-related DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use userapi_core::{parse_date, UserApiError, UserApiResult, INVALID_DATE_MESSAGE};
use validator::Validate;

/// API-facing user with derived age.
///
/// `dob` serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub dob: NaiveDate,
    pub age: i32,
}

/// Body for create and update.
///
/// Absent fields take their zero value. `dob` is parsed once while
/// deserializing; a missing, null or malformed date leaves it `None`,
/// which validation reports as `invalid dob format`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UserRequest {
    #[serde(default)]
    pub name: String,

    #[serde(default, deserialize_with = "lenient_date")]
    #[validate(required(message = "invalid dob format"))]
    pub dob: Option<NaiveDate>,
}

impl UserRequest {
    /// Splits a validated request into its name and date of birth.
    pub fn into_parts(self) -> UserApiResult<(String, NaiveDate)> {
        let dob = self
            .dob
            .ok_or_else(|| UserApiError::bad_request(INVALID_DATE_MESSAGE))?;
        Ok((self.name, dob))
    }
}

fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(|value| parse_date(value).ok()))
}

/// `{"status": "..."}` acknowledgement body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    #[must_use]
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}
