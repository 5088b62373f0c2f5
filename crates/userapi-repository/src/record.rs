//! Row type for the `users` table.

use chrono::NaiveDate;
use sqlx::FromRow;
use userapi_core::UserId;

/// A raw row from the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct UserRecord {
    pub id: i32,
    pub name: String,
    pub dob: NaiveDate,
}

impl UserRecord {
    /// Creates a record.
    #[must_use]
    pub fn new(id: i32, name: impl Into<String>, dob: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            dob,
        }
    }

    /// Returns the typed id.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        UserId(self.id)
    }
}
