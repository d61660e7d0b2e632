//! Error types for the vana-calendar crate.

/// Error type for the fallible helpers in the vana-calendar crate.
///
/// The conversion functions themselves are total; these variants only
/// come from validating constructors and string parsing.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: i64,
    },

    /// Returned when a day number is outside the valid range 1..=30.
    #[error("invalid day: {day} (must be 1..=30)")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: i64,
    },

    /// Returned when a date string is not `YEAR-MM-DD` or `YEAR/MM/DD`.
    #[error("invalid date: {input:?} (expected YEAR-MM-DD)")]
    InvalidDateFormat {
        /// The string that failed to parse.
        input: String,
    },

    /// Returned when a weekday name matches none of the eight Vana'diel days.
    #[error("unknown weekday: {name:?}")]
    UnknownWeekday {
        /// The unrecognised name.
        name: String,
    },

    /// Returned when an Earth instant is neither epoch milliseconds nor RFC 3339.
    #[error("invalid earth instant: {input:?} (expected milliseconds or RFC 3339)")]
    InvalidInstant {
        /// The string that failed to parse.
        input: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_month() {
        let err = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_day() {
        let err = CalendarError::InvalidDay { day: 31 };
        assert_eq!(err.to_string(), "invalid day: 31 (must be 1..=30)");
    }

    #[test]
    fn error_invalid_date_format() {
        let err = CalendarError::InvalidDateFormat {
            input: "1495.3.13".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid date: \"1495.3.13\" (expected YEAR-MM-DD)"
        );
    }

    #[test]
    fn error_unknown_weekday() {
        let err = CalendarError::UnknownWeekday {
            name: "Sunday".to_string(),
        };
        assert_eq!(err.to_string(), "unknown weekday: \"Sunday\"");
    }

    #[test]
    fn error_invalid_instant() {
        let err = CalendarError::InvalidInstant {
            input: "yesterday".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid earth instant: \"yesterday\" (expected milliseconds or RFC 3339)"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_partial_eq() {
        let a = CalendarError::InvalidMonth { month: 0 };
        let b = CalendarError::InvalidMonth { month: 0 };
        assert_eq!(a, b);

        let c = CalendarError::InvalidMonth { month: 13 };
        assert_ne!(a, c);
    }
}
