//! Record to model mapping.
//!
//! Age is the difference in calendar years, minus one when today's
//! day-of-year is earlier than the birth day-of-year. Around Feb 29 in
//! leap years this can be off by one day from the exact birthday.

use crate::dto::User;
use chrono::{Datelike, Local, NaiveDate};
use userapi_repository::UserRecord;

/// Computes age in whole years as of `today`.
#[must_use]
pub fn calculate_age_on(dob: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - dob.year();
    if today.ordinal() < dob.ordinal() {
        age -= 1;
    }
    age
}

/// Computes age in whole years as of the local date.
#[must_use]
pub fn calculate_age(dob: NaiveDate) -> i32 {
    calculate_age_on(dob, Local::now().date_naive())
}

/// Maps a record to the API model as of `today`.
#[must_use]
pub fn to_model_on(record: UserRecord, today: NaiveDate) -> User {
    let age = calculate_age_on(record.dob, today);
    User {
        id: record.id,
        name: record.name,
        dob: record.dob,
        age,
    }
}

/// Maps a record to the API model using the local date.
#[must_use]
pub fn to_model(record: UserRecord) -> User {
    to_model_on(record, Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_after_birthday() {
        assert_eq!(calculate_age_on(date(1990, 5, 10), date(2025, 6, 1)), 35);
    }

    #[test]
    fn test_age_on_birthday() {
        assert_eq!(calculate_age_on(date(1990, 5, 10), date(2025, 5, 10)), 35);
    }

    #[test]
    fn test_age_before_birthday() {
        assert_eq!(calculate_age_on(date(1990, 5, 10), date(2025, 5, 9)), 34);
    }

    #[test]
    fn test_age_day_of_year_boundary() {
        // Mar 1 last year, today Feb 1: naive difference is 1, age is 0.
        assert_eq!(calculate_age_on(date(2024, 3, 1), date(2025, 2, 1)), 0);
    }

    #[test]
    fn test_age_uses_day_of_year_across_leap_years() {
        // Mar 1 is day 61 in 2024 but day 60 in 2025, so the birthday
        // itself still counts as "before".
        assert_eq!(calculate_age_on(date(2024, 3, 1), date(2025, 3, 1)), 0);
        assert_eq!(calculate_age_on(date(2024, 3, 1), date(2025, 3, 2)), 1);
        // Feb 29 2024 is day 60, same as Mar 1 2023.
        assert_eq!(calculate_age_on(date(2023, 3, 1), date(2024, 2, 29)), 1);
    }

    #[test]
    fn test_to_model_on() {
        let record = UserRecord::new(7, "Bob", date(2000, 1, 1));
        let user = to_model_on(record, date(2025, 1, 1));
        assert_eq!(user.id, 7);
        assert_eq!(user.name, "Bob");
        assert_eq!(user.dob, date(2000, 1, 1));
        assert_eq!(user.age, 25);
    }

    #[test]
    fn test_to_model_uses_local_date() {
        let record = UserRecord::new(1, "Carol", date(1990, 5, 10));
        let expected = calculate_age(date(1990, 5, 10));
        assert_eq!(to_model(record).age, expected);
    }
}
