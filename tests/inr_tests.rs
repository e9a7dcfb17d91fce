use chrono::NaiveDate;
use hometools::config::InrConfig;
use hometools::core::inr::{InrLogic, chart, chart_limits, parse_reading_date, parse_value, stats};
use hometools::db::pool::DbPool;
use hometools::models::reading::{InrStatus, TimeRange};
use predicates::str::contains;

mod common;
use common::{ht, init_with_readings, test_home};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn seeded() -> DbPool {
    let pool = DbPool::in_memory().expect("memory db");
    let range = InrConfig::default();
    for (date, value, notes) in [
        (d(2024, 1, 10), 2.5, "steady"),
        (d(2024, 4, 2), 1.8, "missed dose"),
        (d(2024, 5, 20), 3.4, ""),
        (d(2024, 6, 1), 2.0, ""),
    ] {
        InrLogic::add(&pool, &range, date, value, notes).unwrap();
    }
    pool
}

#[test]
fn test_classification_is_inclusive() {
    assert_eq!(InrStatus::classify(1.99, 2.0, 3.0), InrStatus::Low);
    assert_eq!(InrStatus::classify(2.0, 2.0, 3.0), InrStatus::Normal);
    assert_eq!(InrStatus::classify(3.0, 2.0, 3.0), InrStatus::Normal);
    assert_eq!(InrStatus::classify(3.01, 2.0, 3.0), InrStatus::High);
}

#[test]
fn test_add_returns_status() {
    let pool = DbPool::in_memory().unwrap();
    let range = InrConfig::default();

    let (_, s) = InrLogic::add(&pool, &range, d(2024, 1, 1), 1.5, "").unwrap();
    assert_eq!(s, InrStatus::Low);
    let (_, s) = InrLogic::add(&pool, &range, d(2024, 1, 2), 3.5, "").unwrap();
    assert_eq!(s, InrStatus::High);
}

#[test]
fn test_input_validation() {
    assert_eq!(parse_value(" 2.4 ").unwrap(), 2.4);
    assert!(parse_value("abc").is_err());
    assert!(parse_value("NaN").is_err());
    assert!(parse_value("-1").is_err());

    assert_eq!(parse_reading_date(Some("2024-02-29")).unwrap(), d(2024, 2, 29));
    assert!(parse_reading_date(Some("02/29/2024")).is_err());
    assert!(parse_reading_date(None).is_ok());
}

#[test]
fn test_list_newest_first() {
    let pool = seeded();
    let rows = InrLogic::list(&pool, TimeRange::All, d(2024, 6, 30)).unwrap();
    let dates: Vec<NaiveDate> = rows.iter().map(|r| r.date).collect();
    assert_eq!(
        dates,
        vec![d(2024, 6, 1), d(2024, 5, 20), d(2024, 4, 2), d(2024, 1, 10)]
    );
    assert_eq!(rows[3].notes, "steady");
}

#[test]
fn test_range_cutoff_is_exclusive() {
    let pool = seeded();

    // three months before 2024-07-02 is 2024-04-02, which is not included
    let rows = InrLogic::list(&pool, TimeRange::ThreeMonths, d(2024, 7, 2)).unwrap();
    assert_eq!(rows.len(), 2);

    let rows = InrLogic::list(&pool, TimeRange::OneMonth, d(2024, 6, 30)).unwrap();
    assert_eq!(rows.len(), 1);

    assert_eq!(TimeRange::All.cutoff(d(2024, 6, 30)), None);
    assert_eq!(TimeRange::OneYear.cutoff(d(2024, 2, 29)), Some(d(2023, 2, 28)));
}

#[test]
fn test_delete_matching_and_by_id() {
    let pool = seeded();

    assert_eq!(InrLogic::delete_matching(&pool, d(2024, 4, 2), 1.8).unwrap(), 1);
    assert_eq!(InrLogic::delete_matching(&pool, d(2024, 4, 2), 1.8).unwrap(), 0);

    let rows = InrLogic::list(&pool, TimeRange::All, d(2024, 6, 30)).unwrap();
    let id = rows[0].id;
    assert_eq!(InrLogic::delete_by_id(&pool, id).unwrap(), 1);
    assert!(InrLogic::delete_by_id(&pool, id).is_err());
}

#[test]
fn test_stats_summary() {
    let pool = seeded();
    let rows = InrLogic::list(&pool, TimeRange::All, d(2024, 6, 30)).unwrap();
    let s = stats(&rows, &InrConfig::default());

    assert_eq!(s.count, 4);
    assert_eq!(s.min, 1.8);
    assert_eq!(s.max, 3.4);
    assert!((s.mean - 2.425).abs() < 1e-9);
    assert_eq!(s.in_range, 2);
    assert_eq!(s.in_range_pct(), 50.0);
    assert_eq!(s.latest.unwrap().date, d(2024, 6, 1));

    let empty = stats(&[], &InrConfig::default());
    assert_eq!(empty.count, 0);
    assert!(empty.latest.is_none());
}

#[test]
fn test_chart_limits_include_range() {
    let pool = seeded();
    let rows = InrLogic::list_asc(&pool, TimeRange::All, d(2024, 6, 30)).unwrap();
    let range = InrConfig::default();

    let (lo, hi) = chart_limits(&rows, &range);
    assert!((lo - 1.3).abs() < 1e-9);
    assert!((hi - 3.9).abs() < 1e-9);

    // values inside the range still show the whole range
    let (lo, hi) = chart_limits(&rows[..1], &range);
    assert!((lo - 1.5).abs() < 1e-9);
    assert!((hi - 3.5).abs() < 1e-9);

    let out = chart(&rows, &range);
    assert_eq!(out.matches('●').count(), 4);
    assert!(out.contains("high 3.0"));
    assert!(out.contains("low 2.0"));
    assert!(out.contains("2024-01-10 → 2024-06-01"));
    assert_eq!(chart(&[], &range), "No readings to chart.");
}

#[test]
fn test_cli_inr_add_alerts() {
    let home = test_home("cli_inr_add_alerts");
    ht(&home).args(["--test", "init"]).assert().success();

    ht(&home)
        .args(["inr", "add", "1.7", "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(contains("below the therapeutic range (2.0-3.0)"));

    ht(&home)
        .args(["inr", "add", "2.5", "--date", "2024-01-08"])
        .assert()
        .success()
        .stdout(contains("within the therapeutic range"));

    ht(&home)
        .args(["inr", "add", "abc"])
        .assert()
        .failure()
        .stderr(contains("is not a number"));

    ht(&home)
        .args(["inr", "add", "2.5", "--date", "01/08/2024"])
        .assert()
        .failure()
        .stderr(contains("expected YYYY-MM-DD"));
}

#[test]
fn test_cli_inr_list_and_delete() {
    let home = test_home("cli_inr_list_delete");
    init_with_readings(&home);

    ht(&home)
        .args(["inr", "list"])
        .assert()
        .success()
        .stdout(contains("2024-03-10"))
        .stdout(contains("missed dose"));

    ht(&home)
        .args(["inr", "delete", "--date", "2024-02-10", "--value", "1.8"])
        .assert()
        .success()
        .stdout(contains("Deleted 1 reading(s)"));

    ht(&home)
        .args(["inr", "stats"])
        .assert()
        .success()
        .stdout(contains("Readings : 2"));
}

#[test]
fn test_cli_inr_delete_needs_selection() {
    let home = test_home("cli_inr_delete_selection");
    init_with_readings(&home);

    ht(&home)
        .args(["inr", "delete"])
        .assert()
        .success()
        .stdout(contains("Please select a record to delete"));
}
