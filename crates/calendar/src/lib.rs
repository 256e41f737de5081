//! # gabbai-calendar
//!
//! Pure date arithmetic for the Hebrew calendar and its conversion to and
//! from the proleptic Gregorian calendar (`chrono::NaiveDate`).
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDate"] -->|"to_hebrew()"| B["HebrewDate"]
//!     B -->|"to_gregorian()"| A
//!     C["is_leap(year)"] --> D["month_length(year, month)"]
//!     E["year_length(year)"] --> F["YearKind"]
//!     F --> D
//!     D --> B
//! ```
//!
//! Conversions run through a fixed day count (R.D., 0001-01-01 = 1). The
//! start of each Hebrew year is derived from the molad of Tishrei and the
//! four postponement rules, which in turn fix the lengths of Cheshvan and
//! Kislev for that year.
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use gabbai_calendar::{HebrewMonth, is_leap, month_length, to_gregorian, to_hebrew};
//!
//! let date = NaiveDate::from_ymd_opt(2020, 3, 15).unwrap();
//! let hebrew = to_hebrew(date).unwrap();
//! assert_eq!(hebrew.to_string(), "19 Adar 5780");
//! assert_eq!(to_gregorian(hebrew).unwrap(), date);
//!
//! assert!(is_leap(5784));
//! assert_eq!(month_length(5784, HebrewMonth::Adar).unwrap(), 30);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month` | Month identifiers and names |
//! | `year` | Leap years, year and month lengths |
//! | `date` | Validated Hebrew date and Gregorian conversion |
//! | `iso` | Strict `YYYY-MM-DD` parsing |
//! | `error` | Error types |

mod date;
mod error;
mod iso;
mod month;
mod year;

pub use date::{HebrewDate, to_gregorian, to_hebrew};
pub use error::CalendarError;
pub use iso::parse_iso_date;
pub use month::HebrewMonth;
pub use year::{YearKind, is_leap, month_length, months_in_year, year_length};
