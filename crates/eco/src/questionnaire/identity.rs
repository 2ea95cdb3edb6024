use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Oldest plausible respondent, in completed years.
pub const MAX_AGE_YEARS: i32 = 120;

/// Respondent details captured before the questionnaire starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    full_name: String,
    date_of_birth: NaiveDate,
    age: u32,
}

impl Identity {
    /// Validate and build an identity. The name is trimmed; age is computed as of `today`.
    pub fn new(
        full_name: &str,
        date_of_birth: NaiveDate,
        today: NaiveDate,
    ) -> Result<Self, IdentityError> {
        let full_name = full_name.trim();
        if full_name.is_empty() {
            return Err(IdentityError::EmptyName);
        }

        if date_of_birth > today {
            return Err(IdentityError::BirthDateInFuture {
                date_of_birth,
                today,
            });
        }

        let age = age_on(date_of_birth, today);
        if !(0..=MAX_AGE_YEARS).contains(&age) {
            return Err(IdentityError::ImplausibleAge { age });
        }

        Ok(Self {
            full_name: full_name.to_string(),
            date_of_birth,
            age: age as u32,
        })
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}

/// Completed years between `date_of_birth` and `today`.
pub fn age_on(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }
    age
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentityError {
    #[error("full name must not be empty")]
    EmptyName,
    #[error("date of birth {date_of_birth} is after {today}")]
    BirthDateInFuture {
        date_of_birth: NaiveDate,
        today: NaiveDate,
    },
    #[error("age {age} is outside 0..=120; check the date of birth")]
    ImplausibleAge { age: i32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn age_counts_completed_years() {
        assert_eq!(age_on(date(1990, 6, 15), date(2025, 6, 14)), 34);
        assert_eq!(age_on(date(1990, 6, 15), date(2025, 6, 15)), 35);
        assert_eq!(age_on(date(2025, 1, 1), date(2025, 12, 31)), 0);
    }

    #[test]
    fn leap_day_birthdays_wait_for_march_in_common_years() {
        assert_eq!(age_on(date(2000, 2, 29), date(2023, 2, 28)), 22);
        assert_eq!(age_on(date(2000, 2, 29), date(2023, 3, 1)), 23);
    }

    #[test]
    fn trims_and_keeps_name() {
        let identity = Identity::new("  Ana Souza ", date(1988, 3, 2), date(2025, 10, 1))
            .expect("identity is valid");
        assert_eq!(identity.full_name(), "Ana Souza");
        assert_eq!(identity.age(), 37);
    }

    #[test]
    fn rejects_blank_names() {
        let err = Identity::new("   ", date(1988, 3, 2), date(2025, 10, 1)).unwrap_err();
        assert_eq!(err, IdentityError::EmptyName);
    }

    #[test]
    fn rejects_future_birth_dates() {
        let err = Identity::new("Ana", date(2026, 1, 1), date(2025, 10, 1)).unwrap_err();
        assert!(matches!(err, IdentityError::BirthDateInFuture { .. }));
    }

    #[test]
    fn rejects_ages_above_the_limit() {
        let today = date(2025, 10, 1);
        assert!(Identity::new("Ana", date(1905, 10, 1), today).is_ok());
        let err = Identity::new("Ana", date(1904, 9, 30), today).unwrap_err();
        assert_eq!(err, IdentityError::ImplausibleAge { age: 121 });
    }

    #[test]
    fn born_today_is_age_zero() {
        let today = date(2025, 10, 1);
        let identity = Identity::new("Bebê", today, today).expect("newborn is valid");
        assert_eq!(identity.age(), 0);
    }
}
