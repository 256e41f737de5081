use chrono::{Days, NaiveDate};
use gabbai_calendar::{HebrewMonth, month_length, to_gregorian, to_hebrew};
use gabbai_yahrzeit::{
    AdarPolicy, LeapAdar, ThirtiethRule, YahrzeitOutcome, anniversary_in_year, match_yahrzeit,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn greg(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn random_dates(seed: u64, n: usize) -> Vec<NaiveDate> {
    let mut rng = StdRng::seed_from_u64(seed);
    let start = greg(1950, 1, 1);
    (0..n)
        .map(|_| start + Days::new(rng.random_range(0..29_000)))
        .collect()
}

#[test]
fn anniversary_one_year_later_matches() {
    let policy = AdarPolicy::default();
    for original in random_dates(1, 3_000) {
        let death = to_hebrew(original).unwrap();
        let observed = anniversary_in_year(death, death.year() + 1, &policy).unwrap();
        let target = to_gregorian(observed).unwrap();
        assert_eq!(
            match_yahrzeit(original, target, &policy),
            YahrzeitOutcome::Matched,
            "{original} ({death}) -> {target} ({observed})"
        );

        if !matches!(death.month(), HebrewMonth::Adar | HebrewMonth::AdarII) {
            let len = month_length(death.year() + 1, death.month()).unwrap();
            assert_eq!(observed.month(), death.month());
            assert_eq!(observed.day(), death.day().min(len));
        }
    }
}

#[test]
fn neighbouring_days_match_only_on_same_hebrew_day() {
    let policy = AdarPolicy::default();
    for original in random_dates(2, 1_000) {
        let death = to_hebrew(original).unwrap();
        let observed = anniversary_in_year(death, death.year() + 3, &policy).unwrap();
        let target = to_gregorian(observed).unwrap();
        for shifted in [target - Days::new(1), target + Days::new(1)] {
            let shifted_hebrew = to_hebrew(shifted).unwrap();
            let expected = anniversary_in_year(death, shifted_hebrew.year(), &policy).unwrap();
            let outcome = match_yahrzeit(original, shifted, &policy);
            assert_eq!(
                outcome.is_match(),
                expected.month_day() == shifted_hebrew.month_day(),
                "{original} vs {shifted}"
            );
        }
    }
}

#[test]
fn adar_death_in_leap_year_follows_policy() {
    let death = greg(2020, 3, 15); // 19 Adar 5780
    let adar_i = greg(2022, 2, 20); // 19 Adar I 5782
    let adar_ii = greg(2022, 3, 22); // 19 Adar II 5782

    let default = AdarPolicy::default();
    assert!(match_yahrzeit(death, adar_i, &default).is_match());
    assert!(!match_yahrzeit(death, adar_ii, &default).is_match());

    let second = AdarPolicy::new().with_leap_target(LeapAdar::AdarII);
    assert!(!match_yahrzeit(death, adar_i, &second).is_match());
    assert!(match_yahrzeit(death, adar_ii, &second).is_match());
}

#[test]
fn adar_ii_death_observed_in_common_adar() {
    let death = greg(2024, 3, 20); // 10 Adar II 5784
    assert!(match_yahrzeit(death, greg(2025, 3, 10), &AdarPolicy::default()).is_match());
}

#[test]
fn adar_i_death_observed_in_common_adar() {
    let death = greg(2024, 2, 19); // 10 Adar I 5784
    assert!(match_yahrzeit(death, greg(2025, 3, 10), &AdarPolicy::default()).is_match());
}

#[test]
fn thirtieth_of_adar_i() {
    let death = greg(2024, 3, 10); // 30 Adar I 5784
    let clamp = AdarPolicy::default();
    assert!(match_yahrzeit(death, greg(2025, 3, 29), &clamp).is_match());
    assert!(!match_yahrzeit(death, greg(2025, 2, 28), &clamp).is_match());

    let shevat = AdarPolicy::new().with_adar_i_thirtieth(ThirtiethRule::ShevatThirty);
    assert!(match_yahrzeit(death, greg(2025, 2, 28), &shevat).is_match());
    assert!(!match_yahrzeit(death, greg(2025, 3, 29), &shevat).is_match());
}

#[test]
fn thirtieth_of_cheshvan_in_short_year() {
    let death = greg(2019, 11, 28); // 30 Cheshvan 5780
    let policy = AdarPolicy::default();
    assert!(match_yahrzeit(death, greg(2020, 11, 16), &policy).is_match());
    assert!(!match_yahrzeit(death, greg(2020, 11, 17), &policy).is_match());
    assert!(match_yahrzeit(death, greg(2021, 11, 4), &policy).is_match());
    assert!(match_yahrzeit(death, greg(2022, 11, 24), &policy).is_match());
}
