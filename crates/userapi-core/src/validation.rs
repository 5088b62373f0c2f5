//! Validation utilities.

use crate::{UserApiError, UserApiResult};
use chrono::NaiveDate;
use validator::{Validate, ValidationErrors};

/// Wire format for dates of birth.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Message returned for any date that is not exactly `YYYY-MM-DD`.
pub const INVALID_DATE_MESSAGE: &str = "invalid dob format";

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns a `BadRequest` on failure.
    fn validate_request(&self) -> UserApiResult<()> {
        self.validate().map_err(validation_errors_to_user_api_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` into a `BadRequest`.
///
/// Only the messages are kept, so a failed date rule reads exactly
/// `invalid dob format`.
#[must_use]
pub fn validation_errors_to_user_api_error(errors: ValidationErrors) -> UserApiError {
    let mut messages: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|errors| {
            errors.iter().map(|error| {
                error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string)
            })
        })
        .collect();
    messages.sort();
    messages.dedup();

    UserApiError::BadRequest(messages.join("; "))
}

/// Parses a calendar date in strict `YYYY-MM-DD` form.
///
/// chrono alone accepts unpadded fields such as `2020-1-1`, so the shape
/// is checked before parsing.
pub fn parse_date(value: &str) -> UserApiResult<NaiveDate> {
    if !has_iso_date_shape(value) {
        return Err(UserApiError::bad_request(INVALID_DATE_MESSAGE));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| UserApiError::bad_request(INVALID_DATE_MESSAGE))
}

fn has_iso_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
