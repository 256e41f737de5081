//! Congregant records as supplied by the storage layer.

use serde::{Deserialize, Serialize};

/// One congregant, already normalised by the storage layer.
///
/// Field names match the stored schema; `parasha` is accepted as an alias
/// for `parasha_preference`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CongregantRecord {
    /// Full name; required and non-empty.
    pub full_name: String,
    /// Father's name, for call-ups and memorial mentions.
    #[serde(default)]
    pub father_name: Option<String>,
    /// Preferred weekly portion.
    #[serde(default, alias = "parasha")]
    pub parasha_preference: Option<String>,
    /// Gregorian date of the yahrzeit as `YYYY-MM-DD`.
    #[serde(default)]
    pub yahrzeit_date: Option<String>,
    /// Free-form notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl CongregantRecord {
    /// Creates a record with only a name.
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            ..Self::default()
        }
    }

    /// Sets the father's name.
    pub fn with_father_name(mut self, father_name: impl Into<String>) -> Self {
        self.father_name = Some(father_name.into());
        self
    }

    /// Sets the preferred portion.
    pub fn with_parasha(mut self, parasha: impl Into<String>) -> Self {
        self.parasha_preference = Some(parasha.into());
        self
    }

    /// Sets the stored yahrzeit date.
    pub fn with_yahrzeit(mut self, date: impl Into<String>) -> Self {
        self.yahrzeit_date = Some(date.into());
        self
    }

    /// Sets the notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}
