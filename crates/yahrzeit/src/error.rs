//! Error types for the gabbai-yahrzeit crate.

use gabbai_calendar::{CalendarError, HebrewDate};

/// Why a yahrzeit could not be evaluated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum YahrzeitError {
    /// The stored date string is not a valid `YYYY-MM-DD` date.
    #[error("malformed yahrzeit date {value:?}")]
    Malformed {
        /// The stored value.
        value: String,
    },

    /// A Gregorian date could not be converted to the Hebrew calendar.
    #[error("calendar conversion failed: {0}")]
    Conversion(#[source] CalendarError),

    /// The anniversary in the target year is not a real date.
    #[error("no anniversary of {original} in year {target_year}: {source}")]
    Impossible {
        /// Hebrew date of the original yahrzeit.
        original: HebrewDate,
        /// The Hebrew year being observed.
        target_year: i32,
        /// The underlying calendar error.
        #[source]
        source: CalendarError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_malformed() {
        let err = YahrzeitError::Malformed {
            value: "15.3.2020".to_string(),
        };
        assert_eq!(err.to_string(), "malformed yahrzeit date \"15.3.2020\"");
    }

    #[test]
    fn error_conversion() {
        let err = YahrzeitError::Conversion(CalendarError::OutOfRange {
            what: "fixed day -2000000".to_string(),
        });
        assert_eq!(
            err.to_string(),
            "calendar conversion failed: date out of supported calendar range: fixed day -2000000"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<YahrzeitError>();
    }
}
