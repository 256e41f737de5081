//! Strict `YYYY-MM-DD` parsing for Gregorian dates.

use chrono::NaiveDate;

use crate::error::CalendarError;

/// Parses a Gregorian date written exactly as `YYYY-MM-DD`.
///
/// The string must consist of three hyphen-separated groups of ASCII digits
/// of widths 4, 2 and 2, naming a real calendar date. Surrounding whitespace,
/// signs, extra components and timestamps are all rejected.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidIsoDate`] if the string does not match the
/// format or names an impossible date such as `2023-02-29`.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, CalendarError> {
    let invalid = || CalendarError::InvalidIsoDate {
        value: value.to_string(),
    };
    // chrono's %Y also accepts signs and more digits, so pin the shape first.
    let bytes = value.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shape_ok {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| invalid())
}
