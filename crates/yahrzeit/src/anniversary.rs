//! Computing the Hebrew anniversary of a date in a later year.

use chrono::NaiveDate;
use gabbai_calendar::{HebrewDate, month_length, to_gregorian, to_hebrew};
use tracing::trace;

use crate::error::YahrzeitError;
use crate::policy::AdarPolicy;

/// Returns the date on which `original` is observed in Hebrew `target_year`.
///
/// The month is first remapped across leap and common years by `policy`,
/// then the day is clamped to the length of that month in the target year,
/// so 30 Cheshvan falls on 29 Cheshvan in a year where Cheshvan is short.
///
/// # Errors
///
/// Returns [`YahrzeitError::Impossible`] if no valid date results.
pub fn anniversary_in_year(
    original: HebrewDate,
    target_year: i32,
    policy: &AdarPolicy,
) -> Result<HebrewDate, YahrzeitError> {
    let impossible = |source| YahrzeitError::Impossible {
        original,
        target_year,
        source,
    };
    let (month, day) = policy.remap(original, target_year);
    let len = month_length(target_year, month).map_err(impossible)?;
    HebrewDate::new(target_year, month, day.min(len)).map_err(impossible)
}

/// Returns the Gregorian date of the first observance of `original` on or
/// after `on_or_after`.
///
/// Observances begin with the first anniversary; the date of death itself is
/// never returned.
///
/// # Errors
///
/// Returns [`YahrzeitError::Conversion`] if either date cannot be converted.
pub fn next_anniversary(
    original: NaiveDate,
    on_or_after: NaiveDate,
    policy: &AdarPolicy,
) -> Result<NaiveDate, YahrzeitError> {
    let death = to_hebrew(original).map_err(YahrzeitError::Conversion)?;
    let from = to_hebrew(on_or_after).map_err(YahrzeitError::Conversion)?;
    let mut year = from.year().max(death.year() + 1);
    loop {
        let observed = anniversary_in_year(death, year, policy)?;
        let date = to_gregorian(observed).map_err(YahrzeitError::Conversion)?;
        if date >= on_or_after {
            return Ok(date);
        }
        trace!(%observed, %on_or_after, "anniversary already passed");
        year += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gabbai_calendar::HebrewMonth;

    fn hdate(year: i32, month: HebrewMonth, day: u8) -> HebrewDate {
        HebrewDate::new(year, month, day).unwrap()
    }

    fn greg(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn same_month_and_day() {
        let original = hdate(5780, HebrewMonth::Adar, 19);
        let observed = anniversary_in_year(original, 5781, &AdarPolicy::default()).unwrap();
        assert_eq!(observed, hdate(5781, HebrewMonth::Adar, 19));
    }

    #[test]
    fn long_cheshvan_clamps_in_short_year() {
        // 5780 is complete, 5781 deficient.
        let original = hdate(5780, HebrewMonth::Cheshvan, 30);
        let observed = anniversary_in_year(original, 5781, &AdarPolicy::default()).unwrap();
        assert_eq!(observed, hdate(5781, HebrewMonth::Cheshvan, 29));
        let observed = anniversary_in_year(original, 5783, &AdarPolicy::default()).unwrap();
        assert_eq!(observed, hdate(5783, HebrewMonth::Cheshvan, 30));
    }

    #[test]
    fn thirtieth_of_adar_i_clamps() {
        let original = hdate(5784, HebrewMonth::Adar, 30);
        let observed = anniversary_in_year(original, 5785, &AdarPolicy::default()).unwrap();
        assert_eq!(observed, hdate(5785, HebrewMonth::Adar, 29));
    }

    #[test]
    fn next_anniversary_skips_past_dates() {
        let death = greg(2020, 3, 15); // 19 Adar 5780
        let policy = AdarPolicy::default();
        assert_eq!(
            next_anniversary(death, greg(2021, 1, 1), &policy).unwrap(),
            greg(2021, 3, 3)
        );
        assert_eq!(
            next_anniversary(death, greg(2021, 3, 3), &policy).unwrap(),
            greg(2021, 3, 3)
        );
        // Past this year's observance: the leap year 5782 keeps it in Adar I.
        assert_eq!(
            next_anniversary(death, greg(2021, 3, 4), &policy).unwrap(),
            greg(2022, 2, 20)
        );
    }

    #[test]
    fn next_anniversary_starts_after_death() {
        let death = greg(2020, 3, 15);
        assert_eq!(
            next_anniversary(death, death, &AdarPolicy::default()).unwrap(),
            greg(2021, 3, 3)
        );
    }
}
