//! Hebrew-date command: convert one date in either direction.

use anyhow::{Context, Result, bail};
use tracing::info_span;

use gabbai_calendar::{HebrewDate, HebrewMonth, parse_iso_date, to_gregorian, to_hebrew};

use crate::cli::HebrewDateArgs;

/// Run the date conversion.
pub fn run(args: HebrewDateArgs) -> Result<()> {
    let _cmd = info_span!("hebrew_date").entered();
    match (args.date, args.to_gregorian) {
        (Some(date), _) => {
            let parsed =
                parse_iso_date(&date).with_context(|| format!("bad --date {date:?}"))?;
            let hebrew = to_hebrew(parsed).context("date precedes the Hebrew calendar")?;
            println!("{hebrew}");
        }
        (None, Some(parts)) => {
            let hebrew = hebrew_from_parts(&parts)?;
            let gregorian = to_gregorian(hebrew).context("date beyond the Gregorian range")?;
            println!("{gregorian}");
        }
        (None, None) => bail!("provide --date or --to-gregorian"),
    }
    Ok(())
}

/// Builds a Hebrew date from `[year, month, day]`.
fn hebrew_from_parts(parts: &[i32]) -> Result<HebrewDate> {
    let &[year, month, day] = parts else {
        bail!("expected YEAR MONTH DAY, got {} values", parts.len());
    };
    let month = u8::try_from(month)
        .ok()
        .and_then(|m| HebrewMonth::from_number(m).ok())
        .with_context(|| format!("month must be 1..=13, got {month}"))?;
    let day = u8::try_from(day).with_context(|| format!("bad day {day}"))?;
    Ok(HebrewDate::new(year, month, day)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_build_a_date() {
        let date = hebrew_from_parts(&[5784, 13, 1]).unwrap();
        assert_eq!(date.month(), HebrewMonth::AdarII);
        assert_eq!(to_gregorian(date).unwrap().to_string(), "2024-03-11");
    }

    #[test]
    fn bad_parts_are_rejected() {
        assert!(hebrew_from_parts(&[5785, 13, 1]).is_err());
        assert!(hebrew_from_parts(&[5784, 14, 1]).is_err());
        assert!(hebrew_from_parts(&[5784, 8, -1]).is_err());
        assert!(hebrew_from_parts(&[5784, 8]).is_err());
    }
}
