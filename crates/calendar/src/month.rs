//! Hebrew month identifiers and names.

use crate::error::CalendarError;
use crate::year::is_leap;

/// A month of the Hebrew calendar.
///
/// Numbering follows the biblical convention: Nisan is month 1 and the civil
/// year begins at Tishrei (month 7). `Adar` is month 12; in a leap year it is
/// the intercalary Adar I and is followed by `AdarII` (month 13).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HebrewMonth {
    Nisan = 1,
    Iyar = 2,
    Sivan = 3,
    Tammuz = 4,
    Av = 5,
    Elul = 6,
    Tishrei = 7,
    Cheshvan = 8,
    Kislev = 9,
    Tevet = 10,
    Shevat = 11,
    /// Adar of a common year, or Adar I of a leap year.
    Adar = 12,
    /// Adar II, present only in leap years.
    AdarII = 13,
}

impl HebrewMonth {
    /// All months in numeric order.
    pub(crate) const ALL: [HebrewMonth; 13] = [
        HebrewMonth::Nisan,
        HebrewMonth::Iyar,
        HebrewMonth::Sivan,
        HebrewMonth::Tammuz,
        HebrewMonth::Av,
        HebrewMonth::Elul,
        HebrewMonth::Tishrei,
        HebrewMonth::Cheshvan,
        HebrewMonth::Kislev,
        HebrewMonth::Tevet,
        HebrewMonth::Shevat,
        HebrewMonth::Adar,
        HebrewMonth::AdarII,
    ];

    /// Creates a month from its number (Nisan = 1 .. Adar II = 13).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] if `number` is not in 1..=13.
    pub fn from_number(number: u8) -> Result<Self, CalendarError> {
        if !(1..=13).contains(&number) {
            return Err(CalendarError::InvalidMonth { month: number });
        }
        Ok(Self::ALL[number as usize - 1])
    }

    /// Returns the month number (1..=13).
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Returns the English transliteration, without leap-year context.
    ///
    /// `Adar` is reported as "Adar"; use [`HebrewMonth::name_in`] to get
    /// "Adar I" in a leap year.
    pub fn name(self) -> &'static str {
        match self {
            Self::Nisan => "Nisan",
            Self::Iyar => "Iyar",
            Self::Sivan => "Sivan",
            Self::Tammuz => "Tammuz",
            Self::Av => "Av",
            Self::Elul => "Elul",
            Self::Tishrei => "Tishrei",
            Self::Cheshvan => "Cheshvan",
            Self::Kislev => "Kislev",
            Self::Tevet => "Tevet",
            Self::Shevat => "Shevat",
            Self::Adar => "Adar",
            Self::AdarII => "Adar II",
        }
    }

    /// Returns the English name as used in the given Hebrew year.
    pub fn name_in(self, year: i32) -> &'static str {
        match self {
            Self::Adar if is_leap(year) => "Adar I",
            other => other.name(),
        }
    }

    /// Returns the Hebrew name as used in the given Hebrew year.
    pub fn hebrew_name_in(self, year: i32) -> &'static str {
        match self {
            Self::Nisan => "ניסן",
            Self::Iyar => "אייר",
            Self::Sivan => "סיון",
            Self::Tammuz => "תמוז",
            Self::Av => "אב",
            Self::Elul => "אלול",
            Self::Tishrei => "תשרי",
            Self::Cheshvan => "חשון",
            Self::Kislev => "כסלו",
            Self::Tevet => "טבת",
            Self::Shevat => "שבט",
            Self::Adar if is_leap(year) => "אדר א׳",
            Self::Adar => "אדר",
            Self::AdarII => "אדר ב׳",
        }
    }

    /// Returns `true` if this month exists in the given Hebrew year.
    pub fn exists_in(self, year: i32) -> bool {
        self != Self::AdarII || is_leap(year)
    }

    /// Returns the months of `year` in civil order, Tishrei first.
    pub fn in_year(year: i32) -> Vec<Self> {
        let last = if is_leap(year) { 13 } else { 12 };
        (7..=last).chain(1..=6).map(|n| Self::ALL[n - 1]).collect()
    }
}
