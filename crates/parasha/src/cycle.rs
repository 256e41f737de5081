//! The annual reading cycle for one Hebrew year.
//!
//! The table is generated rather than stored. Starting at the first Sabbath
//! on or after Rosh Hashana, every Sabbath that is not a festival day takes
//! the next portion in order. Where the year has fewer free Sabbaths than
//! portions, pairs are read together according to the standard rules.

use std::collections::VecDeque;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use gabbai_calendar::{HebrewDate, HebrewMonth, is_leap, to_gregorian, to_hebrew};

use crate::config::Location;
use crate::error::ParashaError;
use crate::portion::{Parasha, Reading};
use crate::sabbath::{is_sabbath, sabbath_on_or_after};

/// One Sabbath of the year with its reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SabbathReading {
    /// Gregorian date of the Sabbath.
    pub date: NaiveDate,
    /// Hebrew date of the Sabbath.
    pub hebrew: HebrewDate,
    /// The weekly reading, or `None` when a festival reading displaces it.
    pub reading: Option<Reading>,
}

/// Returns `true` if a Sabbath on `date` carries a festival reading instead
/// of the weekly portion.
fn is_festival(date: HebrewDate, location: Location) -> bool {
    let day = date.day();
    match (date.month(), location) {
        // Rosh Hashana, Yom Kippur, Sukkot and Shemini Atzeret.
        (HebrewMonth::Tishrei, Location::Diaspora) => matches!(day, 1 | 2 | 10 | 15..=23),
        (HebrewMonth::Tishrei, Location::Israel) => matches!(day, 1 | 2 | 10 | 15..=22),
        (HebrewMonth::Nisan, Location::Diaspora) => (15..=22).contains(&day),
        (HebrewMonth::Nisan, Location::Israel) => (15..=21).contains(&day),
        (HebrewMonth::Sivan, Location::Diaspora) => matches!(day, 6 | 7),
        (HebrewMonth::Sivan, Location::Israel) => day == 6,
        _ => false,
    }
}

/// Whole weeks from `sabbath` until `target`.
fn weeks_until(sabbath: NaiveDate, target: NaiveDate) -> i64 {
    (target - sabbath).num_days().div_euclid(7)
}

/// Gregorian date of a Hebrew date known to be valid.
fn gregorian(year: i32, month: HebrewMonth, day: u8) -> Result<NaiveDate, ParashaError> {
    Ok(to_gregorian(HebrewDate::new(year, month, day)?)?)
}

/// Facts about a year that decide which portions are doubled.
struct YearShape {
    leap: bool,
    pesach_weekday: Weekday,
    erev_pesach: NaiveDate,
    tisha_bav: NaiveDate,
    next_rosh_hashana: NaiveDate,
}

impl YearShape {
    fn of(year: i32) -> Result<Self, ParashaError> {
        Ok(Self {
            leap: is_leap(year),
            pesach_weekday: gregorian(year, HebrewMonth::Nisan, 15)?.weekday(),
            erev_pesach: gregorian(year, HebrewMonth::Nisan, 14)?,
            tisha_bav: gregorian(year, HebrewMonth::Av, 9)?,
            next_rosh_hashana: gregorian(year + 1, HebrewMonth::Tishrei, 1)?,
        })
    }

    /// Returns `true` if `parasha`, read on `sabbath`, is joined with the
    /// portion that follows it.
    fn is_doubled(&self, parasha: Parasha, sabbath: NaiveDate, location: Location) -> bool {
        match parasha {
            Parasha::Vayakhel => weeks_until(sabbath, self.erev_pesach) < 3,
            Parasha::Tazria | Parasha::AchareiMot => !self.leap,
            Parasha::Behar => {
                !self.leap
                    && (location == Location::Diaspora || self.pesach_weekday != Weekday::Sat)
            }
            Parasha::Chukat => {
                location == Location::Diaspora && self.pesach_weekday == Weekday::Thu
            }
            Parasha::Matot => weeks_until(sabbath, self.tisha_bav) < 2,
            Parasha::Nitzavim => matches!(
                self.next_rosh_hashana.weekday(),
                Weekday::Thu | Weekday::Sat
            ),
            _ => false,
        }
    }
}

/// Generates the reading for every Sabbath of Hebrew `year`, from the first
/// Sabbath on or after 1 Tishrei to the last Sabbath of Elul.
///
/// # Errors
///
/// Returns [`ParashaError::Calendar`] if the year cannot be converted.
pub fn year_readings(year: i32, location: Location) -> Result<Vec<SabbathReading>, ParashaError> {
    let shape = YearShape::of(year)?;
    let rosh_hashana = gregorian(year, HebrewMonth::Tishrei, 1)?;

    // The year opens with Vayeilech and Ha'azinu left over from the previous
    // cycle; Vayeilech was already read with Nitzavim when Rosh Hashana falls
    // on Thursday or Sabbath.
    let mut queue: VecDeque<Parasha> = [Parasha::Vayeilech, Parasha::Haazinu]
        .into_iter()
        .chain(Parasha::ALL[..Parasha::VezotHaberakhah.index()].iter().copied())
        .collect();
    if matches!(rosh_hashana.weekday(), Weekday::Thu | Weekday::Sat) {
        queue.pop_front();
    }

    let mut readings = Vec::with_capacity(56);
    let mut sabbath = sabbath_on_or_after(rosh_hashana)?;
    while sabbath < shape.next_rosh_hashana {
        let hebrew = to_hebrew(sabbath)?;
        let reading = if is_festival(hebrew, location) {
            None
        } else if let Some(parasha) = queue.pop_front() {
            match queue.front().copied() {
                Some(next) if shape.is_doubled(parasha, sabbath, location) => {
                    queue.pop_front();
                    Some(Reading::Double(parasha, next))
                }
                _ => Some(Reading::Single(parasha)),
            }
        } else {
            None
        };
        readings.push(SabbathReading {
            date: sabbath,
            hebrew,
            reading,
        });
        sabbath = sabbath
            .checked_add_days(Days::new(7))
            .ok_or(ParashaError::SabbathOutOfRange { date: sabbath })?;
    }
    Ok(readings)
}

/// Returns the reading for the Sabbath on `sabbath`.
///
/// # Errors
///
/// Returns [`ParashaError::NotSabbath`] if `sabbath` is not a Saturday, or
/// [`ParashaError::Calendar`] if the date cannot be converted.
pub fn reading_for_sabbath(
    sabbath: NaiveDate,
    location: Location,
) -> Result<SabbathReading, ParashaError> {
    if !is_sabbath(sabbath) {
        return Err(ParashaError::NotSabbath { date: sabbath });
    }
    let year = to_hebrew(sabbath)?.year();
    year_readings(year, location)?
        .into_iter()
        .find(|r| r.date == sabbath)
        // Every Saturday of the year is in the table.
        .ok_or(ParashaError::NotSabbath { date: sabbath })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greg(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn festival_days_differ_by_location() {
        let shemini_atzeret_2 = HebrewDate::new(5784, HebrewMonth::Tishrei, 23).unwrap();
        assert!(is_festival(shemini_atzeret_2, Location::Diaspora));
        assert!(!is_festival(shemini_atzeret_2, Location::Israel));

        let pesach_8 = HebrewDate::new(5784, HebrewMonth::Nisan, 22).unwrap();
        assert!(is_festival(pesach_8, Location::Diaspora));
        assert!(!is_festival(pesach_8, Location::Israel));

        let shavuot_2 = HebrewDate::new(5784, HebrewMonth::Sivan, 7).unwrap();
        assert!(is_festival(shavuot_2, Location::Diaspora));
        assert!(!is_festival(shavuot_2, Location::Israel));

        let yom_kippur = HebrewDate::new(5784, HebrewMonth::Tishrei, 10).unwrap();
        assert!(is_festival(yom_kippur, Location::Israel));
    }

    #[test]
    fn weeks_until_floors() {
        assert_eq!(weeks_until(greg(2024, 1, 6), greg(2024, 1, 26)), 2);
        assert_eq!(weeks_until(greg(2024, 1, 6), greg(2024, 1, 27)), 3);
        assert_eq!(weeks_until(greg(2024, 1, 6), greg(2024, 1, 5)), -1);
    }

    #[test]
    fn year_ends_with_nitzavim() {
        for year in 5770..5800 {
            for location in [Location::Diaspora, Location::Israel] {
                let readings = year_readings(year, location).unwrap();
                let last = readings.iter().rev().find_map(|r| r.reading).unwrap();
                assert_eq!(last.first(), Parasha::Nitzavim, "{year} {location:?}");
            }
        }
    }

    #[test]
    fn not_a_saturday_is_rejected() {
        assert_eq!(
            reading_for_sabbath(greg(2023, 10, 20), Location::Diaspora).unwrap_err(),
            ParashaError::NotSabbath {
                date: greg(2023, 10, 20)
            }
        );
    }
}
