use gabbai_calendar::{
    CalendarError, HebrewMonth, YearKind, is_leap, month_length, months_in_year, year_length,
};

#[test]
fn fixed_length_months() {
    for year in 5700..5800 {
        for month in [
            HebrewMonth::Iyar,
            HebrewMonth::Tammuz,
            HebrewMonth::Elul,
            HebrewMonth::Tevet,
        ] {
            assert_eq!(month_length(year, month).unwrap(), 29, "{month:?} {year}");
        }
        for month in [
            HebrewMonth::Nisan,
            HebrewMonth::Sivan,
            HebrewMonth::Av,
            HebrewMonth::Tishrei,
            HebrewMonth::Shevat,
        ] {
            assert_eq!(month_length(year, month).unwrap(), 30, "{month:?} {year}");
        }
    }
}

#[test]
fn year_lengths_are_legal() {
    for year in 1..7000 {
        let len = year_length(year);
        if is_leap(year) {
            assert!((383..=385).contains(&len), "leap year {year} has {len} days");
        } else {
            assert!((353..=355).contains(&len), "common year {year} has {len} days");
        }
    }
}

#[test]
fn variable_months_match_year_kind() {
    for year in 5600..6000 {
        let cheshvan = month_length(year, HebrewMonth::Cheshvan).unwrap();
        let kislev = month_length(year, HebrewMonth::Kislev).unwrap();
        let expected = match YearKind::of(year) {
            YearKind::Deficient => (29, 29),
            YearKind::Regular => (29, 30),
            YearKind::Complete => (30, 30),
        };
        assert_eq!((cheshvan, kislev), expected, "year {year}");
    }
}

#[test]
fn adar_months_follow_leap_status() {
    for year in 5700..5800 {
        assert_eq!(months_in_year(year), if is_leap(year) { 13 } else { 12 });
        if is_leap(year) {
            assert_eq!(month_length(year, HebrewMonth::Adar).unwrap(), 30);
            assert_eq!(month_length(year, HebrewMonth::AdarII).unwrap(), 29);
        } else {
            assert_eq!(month_length(year, HebrewMonth::Adar).unwrap(), 29);
            assert_eq!(
                month_length(year, HebrewMonth::AdarII).unwrap_err(),
                CalendarError::MonthNotInYear {
                    month: "Adar II",
                    year,
                }
            );
        }
    }
}
