//! Year structure of the Hebrew calendar: leap years, year lengths, and
//! month lengths.

use crate::error::CalendarError;
use crate::month::HebrewMonth;

/// Fixed day number (R.D., 0001-01-01 = 1) of 1 Tishrei AM 1.
pub(crate) const HEBREW_EPOCH: i64 = -1_373_427;

/// Parts (1/1080 hour) in a day.
const PARTS_PER_DAY: i64 = 25_920;

/// Returns `true` if `year` has thirteen months.
///
/// Leap years are years 3, 6, 8, 11, 14, 17 and 19 of the 19-year cycle.
pub fn is_leap(year: i32) -> bool {
    (7 * i64::from(year) + 1).rem_euclid(19) < 7
}

/// Returns 12 or 13.
pub fn months_in_year(year: i32) -> u8 {
    if is_leap(year) { 13 } else { 12 }
}

/// Days from the epoch to the day of the molad of Tishrei of `year`,
/// after the molad-zaken and weekday postponements.
fn elapsed_days(year: i64) -> i64 {
    let months_elapsed = (235 * year - 234).div_euclid(19);
    let parts_elapsed = 12_084 + 13_753 * months_elapsed;
    let days = 29 * months_elapsed + parts_elapsed.div_euclid(PARTS_PER_DAY);
    // Rosh Hashana may not fall on Sunday, Wednesday or Friday.
    if (3 * (days + 1)).rem_euclid(7) < 3 {
        days + 1
    } else {
        days
    }
}

/// Extra delay needed to keep adjacent year lengths within the legal set.
fn year_length_correction(year: i64) -> i64 {
    let ny0 = elapsed_days(year - 1);
    let ny1 = elapsed_days(year);
    let ny2 = elapsed_days(year + 1);
    if ny2 - ny1 == 356 {
        2
    } else if ny1 - ny0 == 382 {
        1
    } else {
        0
    }
}

/// Fixed day number of 1 Tishrei of `year`.
pub(crate) fn new_year(year: i32) -> i64 {
    let y = i64::from(year);
    HEBREW_EPOCH + elapsed_days(y) + year_length_correction(y)
}

/// Returns the number of days in `year` (353..=355 or 383..=385).
pub fn year_length(year: i32) -> u16 {
    (new_year(year + 1) - new_year(year)) as u16
}

/// Classification of a Hebrew year by the lengths of Cheshvan and Kislev.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearKind {
    /// Cheshvan and Kislev both have 29 days (353 or 383 days).
    Deficient,
    /// Cheshvan has 29 days, Kislev 30 (354 or 384 days).
    Regular,
    /// Cheshvan and Kislev both have 30 days (355 or 385 days).
    Complete,
}

impl YearKind {
    /// Classifies `year`.
    pub fn of(year: i32) -> Self {
        match year_length(year) % 10 {
            3 => Self::Deficient,
            5 => Self::Complete,
            _ => Self::Regular,
        }
    }
}

/// Length of `month` in `year`, for a month known to exist that year.
pub(crate) fn days_in_month(year: i32, month: HebrewMonth) -> u8 {
    use HebrewMonth::*;
    match month {
        Iyar | Tammuz | Elul | Tevet | AdarII => 29,
        Adar if !is_leap(year) => 29,
        Cheshvan if YearKind::of(year) != YearKind::Complete => 29,
        Kislev if YearKind::of(year) == YearKind::Deficient => 29,
        _ => 30,
    }
}

/// Returns the number of days of `month` in `year`.
///
/// Adar has 30 days in a leap year (as Adar I) and 29 otherwise. Cheshvan and
/// Kislev vary with the [`YearKind`].
///
/// # Errors
///
/// Returns [`CalendarError::InvalidYear`] for years before AM 1 and
/// [`CalendarError::MonthNotInYear`] for Adar II in a common year.
pub fn month_length(year: i32, month: HebrewMonth) -> Result<u8, CalendarError> {
    if year < 1 {
        return Err(CalendarError::InvalidYear { year });
    }
    if !month.exists_in(year) {
        return Err(CalendarError::MonthNotInYear {
            month: month.name(),
            year,
        });
    }
    Ok(days_in_month(year, month))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years_in_cycle() {
        // Any 19 consecutive years hold exactly seven leap years.
        let leaps: Vec<i32> = (5764..=5782).filter(|&y| is_leap(y)).collect();
        assert_eq!(leaps, vec![5765, 5768, 5771, 5774, 5776, 5779, 5782]);
    }

    #[test]
    fn seven_leaps_per_cycle() {
        for start in [1, 5701, 5720, 6000] {
            let n = (start..start + 19).filter(|&y| is_leap(y)).count();
            assert_eq!(n, 7, "cycle starting {start}");
        }
    }

    #[test]
    fn known_year_lengths() {
        assert_eq!(year_length(5780), 355);
        assert_eq!(year_length(5781), 353);
        assert_eq!(year_length(5782), 384);
        assert_eq!(year_length(5784), 383);
        assert_eq!(year_length(5786), 354);
        assert_eq!(year_length(5787), 385);
    }

    #[test]
    fn year_kinds() {
        assert_eq!(YearKind::of(5781), YearKind::Deficient);
        assert_eq!(YearKind::of(5782), YearKind::Regular);
        assert_eq!(YearKind::of(5783), YearKind::Complete);
    }

    #[test]
    fn cheshvan_and_kislev_follow_year_kind() {
        assert_eq!(month_length(5781, HebrewMonth::Cheshvan).unwrap(), 29);
        assert_eq!(month_length(5781, HebrewMonth::Kislev).unwrap(), 29);
        assert_eq!(month_length(5782, HebrewMonth::Cheshvan).unwrap(), 29);
        assert_eq!(month_length(5782, HebrewMonth::Kislev).unwrap(), 30);
        assert_eq!(month_length(5783, HebrewMonth::Cheshvan).unwrap(), 30);
        assert_eq!(month_length(5783, HebrewMonth::Kislev).unwrap(), 30);
    }

    #[test]
    fn adar_lengths() {
        assert_eq!(month_length(5784, HebrewMonth::Adar).unwrap(), 30);
        assert_eq!(month_length(5784, HebrewMonth::AdarII).unwrap(), 29);
        assert_eq!(month_length(5785, HebrewMonth::Adar).unwrap(), 29);
    }

    #[test]
    fn adar_ii_rejected_in_common_year() {
        assert_eq!(
            month_length(5785, HebrewMonth::AdarII).unwrap_err(),
            CalendarError::MonthNotInYear {
                month: "Adar II",
                year: 5785,
            }
        );
    }

    #[test]
    fn year_zero_rejected() {
        assert_eq!(
            month_length(0, HebrewMonth::Nisan).unwrap_err(),
            CalendarError::InvalidYear { year: 0 }
        );
    }

    #[test]
    fn months_sum_to_year_length() {
        for year in 5700..5900 {
            let total: u16 = HebrewMonth::in_year(year)
                .into_iter()
                .map(|m| u16::from(month_length(year, m).unwrap()))
                .sum();
            assert_eq!(total, year_length(year), "year {year}");
        }
    }

    #[test]
    fn rosh_hashana_never_on_sunday_wednesday_friday() {
        for year in 5000..6500 {
            // R.D. weekday: 0 = Sunday.
            let weekday = new_year(year).rem_euclid(7);
            assert!(
                !matches!(weekday, 0 | 3 | 5),
                "year {year} starts on weekday {weekday}"
            );
        }
    }
}
