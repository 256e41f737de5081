//! Conventions for observing Adar yahrzeits across leap and common years.
//!
//! | Death in | Observed in common year | Observed in leap year |
//! |----------|-------------------------|-----------------------|
//! | Adar (common year) | Adar | `leap_target` (Adar I by default) |
//! | Adar I | Adar (30 Adar I per `adar_i_thirtieth`) | Adar I |
//! | Adar II | Adar | Adar II |

use gabbai_calendar::{HebrewDate, HebrewMonth, is_leap};

/// Which Adar of a leap year observes a death from a common year's Adar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LeapAdar {
    /// Observe in Adar I.
    #[default]
    AdarI,
    /// Observe in Adar II.
    AdarII,
}

/// How 30 Adar I is observed in a common year, where Adar has 29 days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ThirtiethRule {
    /// Clamp to the last day of Adar (29 Adar).
    #[default]
    Clamp,
    /// Observe on 30 Shevat, the first day of Rosh Chodesh Adar.
    ShevatThirty,
}

/// Adar remapping policy for yahrzeit observance.
///
/// # Example
///
/// ```
/// use gabbai_yahrzeit::{AdarPolicy, LeapAdar, ThirtiethRule};
///
/// let policy = AdarPolicy::new()
///     .with_leap_target(LeapAdar::AdarII)
///     .with_adar_i_thirtieth(ThirtiethRule::ShevatThirty);
/// assert_eq!(policy.leap_target(), LeapAdar::AdarII);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdarPolicy {
    leap_target: LeapAdar,
    adar_i_thirtieth: ThirtiethRule,
}

impl AdarPolicy {
    /// Creates the default policy: Adar I for common-year Adar deaths, and
    /// 30 Adar I clamped to 29 Adar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets which Adar of a leap year observes a common-year Adar death.
    pub fn with_leap_target(mut self, leap_target: LeapAdar) -> Self {
        self.leap_target = leap_target;
        self
    }

    /// Sets how 30 Adar I is observed in a common year.
    pub fn with_adar_i_thirtieth(mut self, rule: ThirtiethRule) -> Self {
        self.adar_i_thirtieth = rule;
        self
    }

    /// Returns the leap-year target for common-year Adar deaths.
    pub fn leap_target(&self) -> LeapAdar {
        self.leap_target
    }

    /// Returns the rule for 30 Adar I in a common year.
    pub fn adar_i_thirtieth(&self) -> ThirtiethRule {
        self.adar_i_thirtieth
    }

    /// Maps the month and day of `original` into `target_year`, before the
    /// day is clamped to the month's length there.
    pub fn remap(&self, original: HebrewDate, target_year: i32) -> (HebrewMonth, u8) {
        let (month, day) = original.month_day();
        let source_leap = is_leap(original.year());
        let target_leap = is_leap(target_year);
        match month {
            HebrewMonth::Adar if !source_leap && target_leap => match self.leap_target {
                LeapAdar::AdarI => (HebrewMonth::Adar, day),
                LeapAdar::AdarII => (HebrewMonth::AdarII, day),
            },
            HebrewMonth::Adar
                if source_leap
                    && !target_leap
                    && day == 30
                    && self.adar_i_thirtieth == ThirtiethRule::ShevatThirty =>
            {
                (HebrewMonth::Shevat, 30)
            }
            HebrewMonth::AdarII if !target_leap => (HebrewMonth::Adar, day),
            _ => (month, day),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: HebrewMonth, day: u8) -> HebrewDate {
        HebrewDate::new(year, month, day).unwrap()
    }

    #[test]
    fn test_defaults() {
        let policy = AdarPolicy::default();
        assert_eq!(policy.leap_target(), LeapAdar::AdarI);
        assert_eq!(policy.adar_i_thirtieth(), ThirtiethRule::Clamp);
    }

    #[test]
    fn non_adar_months_pass_through() {
        let policy = AdarPolicy::default();
        let d = date(5780, HebrewMonth::Cheshvan, 30);
        assert_eq!(policy.remap(d, 5781), (HebrewMonth::Cheshvan, 30));
    }

    #[test]
    fn common_adar_into_leap_year() {
        let d = date(5780, HebrewMonth::Adar, 19);
        assert_eq!(AdarPolicy::new().remap(d, 5782), (HebrewMonth::Adar, 19));
        let policy = AdarPolicy::new().with_leap_target(LeapAdar::AdarII);
        assert_eq!(policy.remap(d, 5782), (HebrewMonth::AdarII, 19));
        // Common to common is unaffected by the leap target.
        assert_eq!(policy.remap(d, 5781), (HebrewMonth::Adar, 19));
    }

    #[test]
    fn adar_ii_into_common_year() {
        let d = date(5784, HebrewMonth::AdarII, 10);
        assert_eq!(AdarPolicy::new().remap(d, 5785), (HebrewMonth::Adar, 10));
        assert_eq!(AdarPolicy::new().remap(d, 5787), (HebrewMonth::AdarII, 10));
    }

    #[test]
    fn adar_i_into_common_year() {
        let d = date(5784, HebrewMonth::Adar, 10);
        assert_eq!(AdarPolicy::new().remap(d, 5785), (HebrewMonth::Adar, 10));
        assert_eq!(AdarPolicy::new().remap(d, 5787), (HebrewMonth::Adar, 10));
    }

    #[test]
    fn thirtieth_of_adar_i() {
        let d = date(5784, HebrewMonth::Adar, 30);
        assert_eq!(AdarPolicy::new().remap(d, 5785), (HebrewMonth::Adar, 30));
        let policy = AdarPolicy::new().with_adar_i_thirtieth(ThirtiethRule::ShevatThirty);
        assert_eq!(policy.remap(d, 5785), (HebrewMonth::Shevat, 30));
        // In a leap year Adar I has its 30th day.
        assert_eq!(policy.remap(d, 5787), (HebrewMonth::Adar, 30));
    }
}
