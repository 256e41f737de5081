//! Error types for the gabbai-calendar crate.

/// Error type for all fallible operations in the gabbai-calendar crate.
///
/// This enum covers validation failures for Hebrew year, month, and day
/// values, and conversions that leave the supported range of the calendar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a Hebrew year is before the epoch (AM 1).
    #[error("invalid Hebrew year: {year} (must be >= 1)")]
    InvalidYear {
        /// The invalid year that was provided.
        year: i32,
    },

    /// Returned when a month number is outside the valid range 1..=13.
    #[error("invalid Hebrew month number: {month} (must be 1..=13)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a month does not exist in the given year
    /// (Adar II in a common year).
    #[error("month {month} does not exist in Hebrew year {year}")]
    MonthNotInYear {
        /// Name of the month that was requested.
        month: &'static str,
        /// The Hebrew year in question.
        year: i32,
    },

    /// Returned when a day number exceeds the length of the given month.
    #[error("invalid day: {day} for {month} {year} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// Name of the month for which the day is invalid.
        month: &'static str,
        /// The Hebrew year in question.
        year: i32,
        /// The maximum valid day for the given month in that year.
        max_day: u8,
    },

    /// Returned when a Gregorian date string is not a valid `YYYY-MM-DD`.
    #[error("invalid ISO date: {value:?} (expected YYYY-MM-DD)")]
    InvalidIsoDate {
        /// The rejected input.
        value: String,
    },

    /// Returned when a conversion falls outside the representable range
    /// (before 1 Tishrei AM 1, or beyond the Gregorian range of `chrono`).
    #[error("date out of supported calendar range: {what}")]
    OutOfRange {
        /// Description of the value that could not be represented.
        what: String,
    },
}
