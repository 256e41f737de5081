//! Error types for the gabbai-parasha crate.

use chrono::NaiveDate;
use gabbai_calendar::CalendarError;

/// Error type for all fallible operations in the gabbai-parasha crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParashaError {
    /// Returned when a date passed as a Sabbath is not a Saturday.
    #[error("{date} is not a Saturday")]
    NotSabbath {
        /// The offending date.
        date: NaiveDate,
    },

    /// Returned when advancing to the Sabbath leaves the Gregorian range.
    #[error("no Sabbath representable on or after {date}")]
    SabbathOutOfRange {
        /// The date that could not be advanced.
        date: NaiveDate,
    },

    /// Returned when an underlying calendar conversion fails.
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
