//! Query output: matches, exclusions, and the full report.

use std::fmt;

use chrono::NaiveDate;
use gabbai_parasha::SabbathReading;
use gabbai_yahrzeit::YahrzeitError;
use serde::{Serialize, Serializer};

use crate::record::CongregantRecord;

/// Why a congregant was selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchReason {
    /// The congregant's preferred portion is read this Sabbath.
    Parasha {
        /// The week's reading label.
        label: String,
    },
    /// The target date is the congregant's yahrzeit.
    Yahrzeit,
}

impl fmt::Display for MatchReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parasha { label } => write!(f, "parasha match: {label}"),
            Self::Yahrzeit => f.write_str("yahrzeit"),
        }
    }
}

impl Serialize for MatchReason {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One selected congregant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// The congregant's full name, as stored.
    pub full_name: String,
    /// Father's name, if recorded.
    pub father_name: Option<String>,
    /// The congregant's stored portion preference.
    pub parasha: Option<String>,
    /// The stored yahrzeit date string, if any.
    pub yahrzeit_date: Option<String>,
    /// Which check selected the congregant.
    pub reason: MatchReason,
}

impl MatchResult {
    pub(crate) fn from_record(record: &CongregantRecord, reason: MatchReason) -> Self {
        Self {
            full_name: record.full_name.clone(),
            father_name: record.father_name.clone(),
            parasha: record.parasha_preference.clone(),
            yahrzeit_date: record.yahrzeit_date.clone(),
            reason,
        }
    }
}

/// Why a record took no part in a check.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExclusionReason {
    /// The record has an empty `full_name`.
    #[error("record has no name")]
    MissingName,
    /// The record's yahrzeit could not be evaluated.
    #[error(transparent)]
    Yahrzeit(#[from] YahrzeitError),
}

/// A record left out of a query, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct Exclusion {
    /// Position of the record in the input.
    pub index: usize,
    /// The record's full name, which may be empty.
    pub full_name: String,
    pub reason: ExclusionReason,
}

/// Everything a query resolved, for callers that need more than the list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryReport {
    /// The parsed target date, or `None` if it did not parse.
    pub target: Option<NaiveDate>,
    /// The Sabbath the target resolved to, with its reading.
    pub sabbath: Option<SabbathReading>,
    /// The reading label used for every parasha comparison.
    pub label: Option<String>,
    /// Matches sorted by `full_name`.
    pub matches: Vec<MatchResult>,
    /// Records skipped, in input order.
    pub exclusions: Vec<Exclusion>,
}
