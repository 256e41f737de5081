//! Yahrzeit anniversary matching.
//!
//! A yahrzeit is observed on the Hebrew calendar date of a death, not the
//! Gregorian one. Because months vary in length from year to year and leap
//! years insert a second Adar, "the same date next year" needs two steps:
//!
//! 1. remap the month across leap and common years ([`AdarPolicy`]),
//! 2. clamp the day to that month's length in the target year.
//!
//! # Quick start
//!
//! ```
//! use chrono::NaiveDate;
//! use gabbai_yahrzeit::{AdarPolicy, match_yahrzeit};
//!
//! let death = NaiveDate::from_ymd_opt(2020, 3, 15).unwrap(); // 19 Adar 5780
//! let target = NaiveDate::from_ymd_opt(2021, 3, 3).unwrap(); // 19 Adar 5781
//! assert!(match_yahrzeit(death, target, &AdarPolicy::default()).is_match());
//! ```

pub mod anniversary;
pub mod error;
pub mod matcher;
pub mod policy;

pub use anniversary::{anniversary_in_year, next_anniversary};
pub use error::YahrzeitError;
pub use matcher::{YahrzeitOutcome, match_stored, match_yahrzeit};
pub use policy::{AdarPolicy, LeapAdar, ThirtiethRule};
