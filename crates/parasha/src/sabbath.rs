//! Locating the Sabbath that a date belongs to.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::error::ParashaError;

/// Returns the Saturday on or after `date`.
///
/// With weekdays numbered Monday = 0 .. Sunday = 6, the offset is
/// `(5 - weekday) mod 7`; a Saturday maps to itself.
///
/// # Errors
///
/// Returns [`ParashaError::SabbathOutOfRange`] if the Saturday would fall
/// beyond the range `chrono` can represent.
pub fn sabbath_on_or_after(date: NaiveDate) -> Result<NaiveDate, ParashaError> {
    let weekday = date.weekday().num_days_from_monday();
    let ahead = (5 + 7 - weekday) % 7;
    date.checked_add_days(Days::new(u64::from(ahead)))
        .ok_or(ParashaError::SabbathOutOfRange { date })
}

/// Returns `true` if `date` is a Saturday.
pub fn is_sabbath(date: NaiveDate) -> bool {
    date.weekday() == Weekday::Sat
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greg(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn saturday_maps_to_itself() {
        let sat = greg(2024, 1, 6);
        assert!(is_sabbath(sat));
        assert_eq!(sabbath_on_or_after(sat).unwrap(), sat);
    }

    #[test]
    fn sunday_advances_six_days() {
        assert_eq!(sabbath_on_or_after(greg(2024, 1, 7)).unwrap(), greg(2024, 1, 13));
    }

    #[test]
    fn friday_advances_one_day() {
        assert_eq!(sabbath_on_or_after(greg(2024, 1, 5)).unwrap(), greg(2024, 1, 6));
    }

    #[test]
    fn crosses_year_boundary() {
        assert_eq!(sabbath_on_or_after(greg(2025, 12, 29)).unwrap(), greg(2026, 1, 3));
    }

    #[test]
    fn whole_week_lands_on_same_sabbath() {
        let sat = greg(2023, 10, 21);
        for back in 0..7u64 {
            let d = sat.checked_sub_days(Days::new(back)).unwrap();
            assert_eq!(sabbath_on_or_after(d).unwrap(), sat, "{d}");
        }
    }
}
