//! Olim selection for a Shabbat service.
//!
//! Given a snapshot of congregant records and a target date, this crate
//! returns the congregants to call up: those whose preferred portion is read
//! on the Sabbath of that date, and those whose yahrzeit falls on the date
//! itself. The computation is pure; records are borrowed and never modified.
//!
//! # Quick start
//!
//! ```
//! use gabbai_olim::{CongregantRecord, resolve};
//!
//! let records = vec![
//!     CongregantRecord::new("Cohen").with_parasha("Noach"),
//!     CongregantRecord::new("Levi").with_yahrzeit("2020-03-15"),
//! ];
//! let olim = resolve(&records, "2023-10-18").unwrap();
//! assert_eq!(olim.len(), 1);
//! assert_eq!(olim[0].reason.to_string(), "parasha match: Noach");
//! ```
//!
//! # Architecture
//!
//! ```text
//! resolve_with()
//!   ├─ parse_iso_date()             (gabbai-calendar)
//!   ├─ resolve_sabbath()            (gabbai-parasha, once per query)
//!   ├─ parasha pass                 normalize() against the week's names
//!   ├─ yahrzeit pass                match_stored() (gabbai-yahrzeit)
//!   └─ concatenate, stable sort by full_name
//! ```

pub mod config;
pub mod error;
pub mod normalize;
pub mod query;
pub mod record;
pub mod result;

pub use config::QueryConfig;
pub use error::QueryError;
pub use gabbai_calendar::parse_iso_date;
pub use normalize::normalize;
pub use query::{resolve, resolve_with};
pub use record::CongregantRecord;
pub use result::{Exclusion, ExclusionReason, MatchReason, MatchResult, QueryReport};
