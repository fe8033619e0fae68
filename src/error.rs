//! Error types.

/// Error type for the checked constructors and parsers of this crate.
///
/// The pillar calculators themselves are total and never return this.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The month or day does not exist in the proleptic Gregorian calendar.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: i32, day: i32 },

    /// The hour is outside `0..=23`.
    #[error("invalid hour: {hour} (must be 0..=23)")]
    InvalidHour { hour: u32 },

    /// The date falls before January 1, 4713 BC (proleptic Julian), the
    /// earliest date representable by [`Date`](crate::Date).
    #[error("date out of supported range: year {year}")]
    OutOfRange { year: i32 },

    /// The text is not one stem followed by one branch.
    #[error("invalid pillar: {text:?} (expected one stem and one branch)")]
    InvalidPillar { text: String },

    /// The text could not be parsed as a date or date-time.
    #[error("invalid date-time: {text:?}")]
    InvalidDateTime { text: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        for (std, err) in [
            (
                "invalid date: 2023-02-29",
                Error::InvalidDate {
                    year: 2023,
                    month: 2,
                    day: 29,
                },
            ),
            (
                "invalid hour: 24 (must be 0..=23)",
                Error::InvalidHour { hour: 24 },
            ),
            (
                "date out of supported range: year -5000",
                Error::OutOfRange { year: -5000 },
            ),
            (
                "invalid pillar: \"甲\" (expected one stem and one branch)",
                Error::InvalidPillar { text: "甲".into() },
            ),
        ] {
            assert_eq!(std, err.to_string());
        }
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<Error>();
    }
}
