//! Weekly Torah portion resolution.
//!
//! Given any Gregorian date, this crate finds the Sabbath on or after it and
//! the portion (or pair of portions) read on that Sabbath in the annual
//! cycle. Sabbaths that coincide with a festival have no weekly reading.
//!
//! # Quick start
//!
//! ```
//! use chrono::NaiveDate;
//! use gabbai_parasha::{ParashaConfig, parasha_for_date};
//!
//! let date = NaiveDate::from_ymd_opt(2023, 10, 18).unwrap(); // a Wednesday
//! let label = parasha_for_date(date, &ParashaConfig::default()).unwrap();
//! assert_eq!(label.as_deref(), Some("Noach"));
//! ```
//!
//! # Architecture
//!
//! ```text
//! parasha_for_date()
//!   ├─ sabbath_on_or_after()     (sabbath.rs)
//!   └─ reading_for_sabbath()     (cycle.rs)
//!        └─ year_readings()      festival Sabbaths + doubling rules
//! ```

pub mod config;
pub mod cycle;
pub mod error;
pub mod portion;
pub mod sabbath;

pub use config::{Language, Location, ParashaConfig};
pub use cycle::{SabbathReading, reading_for_sabbath, year_readings};
pub use error::ParashaError;
pub use portion::{Parasha, Reading};
pub use sabbath::{is_sabbath, sabbath_on_or_after};

use chrono::NaiveDate;
use tracing::debug;

/// Resolves the Sabbath on or after `date` and its reading.
///
/// # Errors
///
/// Returns [`ParashaError`] if the date cannot be placed in the calendar.
pub fn resolve_sabbath(
    date: NaiveDate,
    config: &ParashaConfig,
) -> Result<SabbathReading, ParashaError> {
    let sabbath = sabbath_on_or_after(date)?;
    let resolved = reading_for_sabbath(sabbath, config.location())?;
    debug!(
        %date,
        sabbath = %resolved.date,
        hebrew = %resolved.hebrew,
        reading = ?resolved.reading,
        "resolved sabbath"
    );
    Ok(resolved)
}

/// Returns the label of the reading for the Sabbath on or after `date`.
///
/// The label is one portion name, or two names joined by a hyphen when the
/// portions are combined that week. `None` means the Sabbath has a festival
/// reading instead.
///
/// # Errors
///
/// Returns [`ParashaError`] if the date cannot be placed in the calendar.
pub fn parasha_for_date(
    date: NaiveDate,
    config: &ParashaConfig,
) -> Result<Option<String>, ParashaError> {
    let resolved = resolve_sabbath(date, config)?;
    Ok(resolved.reading.map(|r| r.label(config.language())))
}
