//! Error types for the gabbai-olim crate.

use gabbai_parasha::ParashaError;

/// Failures that abort a whole query.
///
/// Per-record problems never surface here; they are reported as
/// [`crate::Exclusion`]s instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
    /// The week's reading could not be resolved for the target date.
    #[error("failed to resolve the Sabbath reading: {0}")]
    Parasha(#[from] ParashaError),
}
