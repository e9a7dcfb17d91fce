use chrono::NaiveDate;
use hometools::core::cycle::{
    CyclePattern, LOOKAHEAD_DAYS, MAX_LOOKAHEAD_DAYS, describe, is_off_day, parse_start_date,
};
use hometools::errors::AppError;
use hometools::models::phase::CyclePhase;
use predicates::str::contains;

mod common;
use common::{ht, test_home};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_first_four_days_are_off() {
    let start = d(2024, 1, 1);
    for offset in 0..8 {
        let date = start + chrono::Duration::days(offset);
        assert_eq!(is_off_day(date, start), offset < 4, "offset {offset}");
    }
    // the pattern repeats every 8 days
    assert!(is_off_day(d(2024, 1, 9), start));
    assert!(!is_off_day(d(2024, 1, 13), start));
}

#[test]
fn test_dates_before_start_wrap_backwards() {
    let p = CyclePattern::default();
    let start = d(2024, 1, 1);

    assert_eq!(p.position(d(2023, 12, 31), start), 7);
    assert_eq!(p.phase_of(d(2023, 12, 31), start), CyclePhase::On);
    assert_eq!(p.phase_of(d(2023, 12, 24), start), CyclePhase::Off);
    assert!(is_off_day(d(2023, 12, 25), start));
}

#[test]
fn test_lookahead_lines() {
    let p = CyclePattern::default();
    let days = p.lookahead(d(2024, 1, 1), LOOKAHEAD_DAYS).unwrap();

    assert_eq!(days.len(), 8);
    assert_eq!(describe(&days[0]), "Monday, Jan 01, 2024 – Off day 1");
    assert_eq!(describe(&days[3]), "Thursday, Jan 04, 2024 – Off day 4");
    assert_eq!(describe(&days[4]), "Friday, Jan 05, 2024 – On day 1");
    assert_eq!(describe(&days[7]), "Monday, Jan 08, 2024 – On day 4");
}

#[test]
fn test_next_off_start() {
    let p = CyclePattern::default();
    let start = d(2024, 1, 1);

    assert_eq!(p.next_off_start(d(2024, 1, 1), start).unwrap(), d(2024, 1, 1));
    assert_eq!(p.next_off_start(d(2024, 1, 2), start).unwrap(), d(2024, 1, 9));
    assert_eq!(p.next_off_start(d(2024, 1, 6), start).unwrap(), d(2024, 1, 9));
}

#[test]
fn test_custom_pattern() {
    let p = CyclePattern::new(2, 3).expect("valid pattern");
    let start = d(2024, 1, 1);

    assert_eq!(p.period(), 5);
    let phases: Vec<CyclePhase> = p.lookahead(start, 6).unwrap().iter().map(|c| c.phase).collect();
    assert_eq!(
        phases,
        vec![
            CyclePhase::Off,
            CyclePhase::Off,
            CyclePhase::On,
            CyclePhase::On,
            CyclePhase::On,
            CyclePhase::Off
        ]
    );
    assert!(CyclePattern::new(0, 4).is_err());
}

#[test]
fn test_parse_start_date_formats() {
    assert_eq!(parse_start_date("2024-01-01").unwrap(), d(2024, 1, 1));
    assert_eq!(parse_start_date("01/15/2024").unwrap(), d(2024, 1, 15));
    assert!(parse_start_date("15.01.2024").is_err());
    assert!(parse_start_date("").is_err());
}

#[test]
fn test_cli_cycle_lookahead() {
    let home = test_home("cli_cycle_lookahead");

    ht(&home)
        .args(["cycle", "--start", "2024-01-01"])
        .assert()
        .success()
        .stdout(contains("Monday, Jan 01, 2024 – Off day 1"))
        .stdout(contains("Monday, Jan 08, 2024 – On day 4"));
}

#[test]
fn test_cli_cycle_single_date() {
    let home = test_home("cli_cycle_single_date");

    ht(&home)
        .args(["cycle", "--start", "01/01/2024", "--on", "2024-01-05"])
        .assert()
        .success()
        .stdout(contains("Friday, Jan 05, 2024 – On day 1"));
}

#[test]
fn test_cli_cycle_uses_planner_start() {
    let home = test_home("cli_cycle_planner_start");

    ht(&home)
        .args(["schedule", "start", "2024-01-03"])
        .assert()
        .success();

    ht(&home)
        .args(["cycle", "--days", "1"])
        .assert()
        .success()
        .stdout(contains("Wednesday, Jan 03, 2024 – Off day 1"));
}

#[test]
fn test_cli_cycle_invalid_start() {
    let home = test_home("cli_cycle_invalid_start");

    ht(&home)
        .args(["cycle", "--start", "not-a-date"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_period_of_eight_for_many_starts() {
    let starts = [
        d(2024, 1, 1),
        d(2024, 2, 28),
        d(2024, 2, 29),
        d(2024, 3, 1),
        d(2023, 2, 28),
        d(2023, 3, 1),
        d(1999, 12, 31),
        d(2100, 2, 27),
    ];

    for s in starts {
        assert!(is_off_day(s, s), "start {s}");
        assert!(!is_off_day(s + chrono::Duration::days(4), s), "start {s}");

        for k in -40i64..=40 {
            let date = s + chrono::Duration::days(k);
            let later = date + chrono::Duration::days(8);
            assert_eq!(is_off_day(date, s), is_off_day(later, s), "start {s}, offset {k}");
            assert_eq!(is_off_day(date, s), k.rem_euclid(8) < 4, "start {s}, offset {k}");
        }
    }
}

#[test]
fn test_lookahead_limits() {
    let p = CyclePattern::default();

    let err = p.lookahead(d(2024, 1, 1), MAX_LOOKAHEAD_DAYS + 1).unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    assert_eq!(p.lookahead(d(2024, 1, 1), MAX_LOOKAHEAD_DAYS).unwrap().len(), 3660);

    let near_end = NaiveDate::MAX - chrono::Duration::days(2);
    let err = p.lookahead(near_end, 8).unwrap_err();
    assert!(matches!(err, AppError::InvalidDate(_)));

    let err = p.next_off_start(NaiveDate::MAX, near_end).unwrap_err();
    assert!(matches!(err, AppError::InvalidDate(_)));
}

#[test]
fn test_cli_cycle_rejects_huge_day_count() {
    let home = test_home("cli_cycle_huge_days");

    ht(&home)
        .args(["cycle", "--start", "2024-01-01", "--days", "4000000000"])
        .assert()
        .failure()
        .stderr(contains("--days"));

    ht(&home)
        .args(["cycle", "--start", "2024-01-01", "--days", "0"])
        .assert()
        .failure();
}
