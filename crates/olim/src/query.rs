//! The olim query: one Sabbath reading, one pass per check, sorted output.

use gabbai_calendar::parse_iso_date;
use gabbai_parasha::{Language, Reading, resolve_sabbath};
use gabbai_yahrzeit::{YahrzeitOutcome, match_stored};
use tracing::debug;

use crate::config::QueryConfig;
use crate::error::QueryError;
use crate::normalize::normalize;
use crate::record::CongregantRecord;
use crate::result::{Exclusion, ExclusionReason, MatchReason, MatchResult, QueryReport};

/// Normalised names under which a preference matches `reading`.
///
/// These are the full label and each portion's name, in both languages.
fn accepted_names(reading: &Reading) -> Vec<String> {
    let mut names = Vec::new();
    for language in [Language::English, Language::Hebrew] {
        names.push(normalize(&reading.label(language)));
        names.extend(
            reading
                .portions()
                .into_iter()
                .map(|p| normalize(p.name_in(language))),
        );
    }
    names.sort_unstable();
    names.dedup();
    names
}

/// Finds the olim for the Sabbath of `iso_target_date`, reporting what was
/// resolved and why any records were skipped.
///
/// A target date that is not `YYYY-MM-DD` yields an empty report. Records
/// whose yahrzeit cannot be evaluated are listed in
/// [`QueryReport::exclusions`] and do not affect the others.
///
/// # Errors
///
/// Returns [`QueryError::Parasha`] if the Sabbath reading cannot be resolved
/// for a parsed target date.
pub fn resolve_with(
    records: &[CongregantRecord],
    iso_target_date: &str,
    config: &QueryConfig,
) -> Result<QueryReport, QueryError> {
    let Ok(target) = parse_iso_date(iso_target_date) else {
        debug!(input = iso_target_date, "unparsable target date");
        return Ok(QueryReport::default());
    };

    let sabbath = resolve_sabbath(target, config.parasha())?;
    let label = sabbath
        .reading
        .map(|r| r.label(config.parasha().language()));

    let mut parasha_matches = Vec::new();
    let mut yahrzeit_matches = Vec::new();
    let mut exclusions = Vec::new();

    let mut named = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        if record.full_name.trim().is_empty() {
            exclusions.push(Exclusion {
                index,
                full_name: record.full_name.clone(),
                reason: ExclusionReason::MissingName,
            });
        } else {
            named.push((index, record));
        }
    }

    if let (Some(reading), Some(label)) = (sabbath.reading, label.as_ref()) {
        let accepted = accepted_names(&reading);
        for (_, record) in &named {
            let Some(preference) = record.parasha_preference.as_deref() else {
                continue;
            };
            if accepted.contains(&normalize(preference)) {
                parasha_matches.push(MatchResult::from_record(
                    record,
                    MatchReason::Parasha {
                        label: label.clone(),
                    },
                ));
            }
        }
    }

    for (index, record) in &named {
        let Some(stored) = record.yahrzeit_date.as_deref() else {
            continue;
        };
        match match_stored(stored, target, config.adar_policy()) {
            YahrzeitOutcome::Matched => {
                yahrzeit_matches.push(MatchResult::from_record(record, MatchReason::Yahrzeit));
            }
            YahrzeitOutcome::NotMatched => {}
            YahrzeitOutcome::Skipped(e) => {
                debug!(name = %record.full_name, error = %e, "skipping yahrzeit");
                exclusions.push(Exclusion {
                    index: *index,
                    full_name: record.full_name.clone(),
                    reason: e.into(),
                });
            }
        }
    }
    exclusions.sort_by_key(|e| e.index);

    let mut matches = parasha_matches;
    matches.append(&mut yahrzeit_matches);
    matches.sort_by(|a, b| a.full_name.cmp(&b.full_name));

    debug!(
        %target,
        sabbath = %sabbath.date,
        label = label.as_deref().unwrap_or("-"),
        n_records = records.len(),
        n_matches = matches.len(),
        n_excluded = exclusions.len(),
        "olim resolved"
    );

    Ok(QueryReport {
        target: Some(target),
        sabbath: Some(sabbath),
        label,
        matches,
        exclusions,
    })
}

/// Finds the olim for the Sabbath of `iso_target_date` with the default
/// configuration.
///
/// Parasha matches come first, then yahrzeit matches, and the combined list
/// is stably sorted by `full_name`; a record matching both ways appears
/// twice. An unparsable date gives an empty list.
///
/// A preference matches the full label or either half of a combined
/// reading, in English or Hebrew, not only the exact label.
///
/// # Errors
///
/// Returns [`QueryError::Parasha`] if the Sabbath reading cannot be resolved.
pub fn resolve(
    records: &[CongregantRecord],
    iso_target_date: &str,
) -> Result<Vec<MatchResult>, QueryError> {
    resolve_with(records, iso_target_date, &QueryConfig::default()).map(|r| r.matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gabbai_parasha::Parasha;

    #[test]
    fn accepted_names_single() {
        let names = accepted_names(&Reading::Single(Parasha::LechLecha));
        assert_eq!(names, vec!["lechlecha".to_string(), "לךלך".to_string()]);
    }

    #[test]
    fn accepted_names_double() {
        let names = accepted_names(&Reading::Double(Parasha::Vayakhel, Parasha::Pekudei));
        for expected in ["vayakhel-pekudei", "vayakhel", "pekudei", "ויקהל-פקודי", "ויקהל", "פקודי"] {
            assert!(names.contains(&expected.to_string()), "{expected}");
        }
    }

    #[test]
    fn missing_name_is_excluded() {
        let records = vec![CongregantRecord::new("  ").with_parasha("Noach")];
        let report = resolve_with(&records, "2023-10-18", &QueryConfig::default()).unwrap();
        assert!(report.matches.is_empty());
        assert_eq!(report.exclusions.len(), 1);
        assert_eq!(report.exclusions[0].reason, ExclusionReason::MissingName);
    }
}
