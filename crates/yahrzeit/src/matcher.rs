//! Deciding whether a target date observes a stored yahrzeit.

use chrono::NaiveDate;
use gabbai_calendar::{parse_iso_date, to_hebrew};

use crate::anniversary::anniversary_in_year;
use crate::error::YahrzeitError;
use crate::policy::AdarPolicy;

/// Result of checking one yahrzeit against a target date.
#[derive(Debug, Clone, PartialEq)]
pub enum YahrzeitOutcome {
    /// The target date is the anniversary.
    Matched,
    /// The target date is some other day.
    NotMatched,
    /// The yahrzeit could not be evaluated.
    Skipped(YahrzeitError),
}

impl YahrzeitOutcome {
    /// Returns `true` only for [`YahrzeitOutcome::Matched`].
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Matched)
    }
}

/// Checks whether `target` observes the yahrzeit of `original`.
///
/// Both dates are converted to the Hebrew calendar. The anniversary in the
/// target's Hebrew year is computed with [`anniversary_in_year`] and compared
/// by month and day.
pub fn match_yahrzeit(
    original: NaiveDate,
    target: NaiveDate,
    policy: &AdarPolicy,
) -> YahrzeitOutcome {
    let evaluate = || -> Result<bool, YahrzeitError> {
        let death = to_hebrew(original).map_err(YahrzeitError::Conversion)?;
        let today = to_hebrew(target).map_err(YahrzeitError::Conversion)?;
        let observed = anniversary_in_year(death, today.year(), policy)?;
        Ok(observed.month_day() == today.month_day())
    };
    match evaluate() {
        Ok(true) => YahrzeitOutcome::Matched,
        Ok(false) => YahrzeitOutcome::NotMatched,
        Err(e) => YahrzeitOutcome::Skipped(e),
    }
}

/// Checks a yahrzeit stored as a `YYYY-MM-DD` string.
///
/// A value that does not parse yields
/// [`YahrzeitOutcome::Skipped`] with [`YahrzeitError::Malformed`].
pub fn match_stored(stored: &str, target: NaiveDate, policy: &AdarPolicy) -> YahrzeitOutcome {
    match parse_iso_date(stored) {
        Ok(original) => match_yahrzeit(original, target, policy),
        Err(_) => YahrzeitOutcome::Skipped(YahrzeitError::Malformed {
            value: stored.to_string(),
        }),
    }
}
