//! Hebrew calendar date and its conversion to and from the Gregorian
//! calendar.

use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;
use crate::month::HebrewMonth;
use crate::year::{HEBREW_EPOCH, days_in_month, months_in_year, new_year};

/// A validated date in the Hebrew calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HebrewDate {
    year: i32,
    month: HebrewMonth,
    day: u8,
}

impl PartialOrd for HebrewDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HebrewDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.fixed().cmp(&other.fixed())
    }
}

impl HebrewDate {
    /// Creates a new `HebrewDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError`] if the year is before AM 1, the month does
    /// not exist in that year, or the day exceeds the month's length.
    pub fn new(year: i32, month: HebrewMonth, day: u8) -> Result<Self, CalendarError> {
        let max_day = crate::year::month_length(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month: month.name_in(year),
                year,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the Hebrew year (Anno Mundi).
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month.
    pub fn month(self) -> HebrewMonth {
        self.month
    }

    /// Returns the day within the month (1..=30).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `(month, day)` as a tuple.
    pub fn month_day(self) -> (HebrewMonth, u8) {
        (self.month, self.day)
    }

    /// Renders the date with the Hebrew month name, e.g. "19 אדר 5780".
    ///
    /// [`Display`](fmt::Display) uses the English transliteration.
    pub fn hebrew_label(self) -> String {
        format!(
            "{} {} {}",
            self.day,
            self.month.hebrew_name_in(self.year),
            self.year
        )
    }

    /// Converts a Gregorian date to the Hebrew calendar.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] for dates before 1 Tishrei AM 1.
    pub fn from_gregorian(date: NaiveDate) -> Result<Self, CalendarError> {
        Self::from_fixed(i64::from(date.num_days_from_ce()))
    }

    /// Converts this date to the Gregorian calendar.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the date lies beyond the
    /// range `chrono` can represent.
    pub fn to_gregorian(self) -> Result<NaiveDate, CalendarError> {
        let fixed = self.fixed();
        i32::try_from(fixed)
            .ok()
            .and_then(NaiveDate::from_num_days_from_ce_opt)
            .ok_or_else(|| CalendarError::OutOfRange {
                what: self.to_string(),
            })
    }

    /// Fixed day number (R.D.) of this date.
    pub(crate) fn fixed(self) -> i64 {
        let mut days = new_year(self.year) + i64::from(self.day) - 1;
        let m = self.month.number();
        // Months of the civil year run Tishrei..=last, then Nisan..=Elul.
        let preceding = if m >= 7 {
            (7..m).chain(0..0)
        } else {
            (7..months_in_year(self.year) + 1).chain(1..m)
        };
        for n in preceding {
            let month = HebrewMonth::ALL[n as usize - 1];
            days += i64::from(days_in_month(self.year, month));
        }
        days
    }

    /// Builds the date for a fixed day number.
    pub(crate) fn from_fixed(fixed: i64) -> Result<Self, CalendarError> {
        // Mean year length is 35975351 / 98496 days.
        let approx = (fixed - HEBREW_EPOCH) * 98_496;
        let approx = approx.div_euclid(35_975_351) + 1;
        let mut year = i32::try_from(approx - 1).map_err(|_| CalendarError::OutOfRange {
            what: format!("fixed day {fixed}"),
        })?;
        while new_year(year + 1) <= fixed {
            year += 1;
        }
        if year < 1 {
            return Err(CalendarError::OutOfRange {
                what: format!("fixed day {fixed} precedes 1 Tishrei AM 1"),
            });
        }

        let nisan_first = Self {
            year,
            month: HebrewMonth::Nisan,
            day: 1,
        }
        .fixed();
        let mut n = if fixed < nisan_first { 7 } else { 1 };
        loop {
            let month = HebrewMonth::ALL[n - 1];
            let first = Self {
                year,
                month,
                day: 1,
            }
            .fixed();
            let len = days_in_month(year, month);
            if fixed < first + i64::from(len) {
                return Ok(Self {
                    year,
                    month,
                    day: (fixed - first + 1) as u8,
                });
            }
            n += 1;
        }
    }
}

impl fmt::Display for HebrewDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.day,
            self.month.name_in(self.year),
            self.year
        )
    }
}

/// Converts a Gregorian date to its Hebrew calendar equivalent.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] for dates before 1 Tishrei AM 1.
pub fn to_hebrew(date: NaiveDate) -> Result<HebrewDate, CalendarError> {
    HebrewDate::from_gregorian(date)
}

/// Converts a Hebrew date to its Gregorian equivalent.
///
/// # Errors
///
/// Returns [`CalendarError::OutOfRange`] if the result is beyond the range
/// `chrono` can represent.
pub fn to_gregorian(date: HebrewDate) -> Result<NaiveDate, CalendarError> {
    date.to_gregorian()
}
