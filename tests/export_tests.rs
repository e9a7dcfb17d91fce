use predicates::str::contains;
use serde_json::Value;
use std::fs;

mod common;
use common::{ht, init_with_readings, temp_out, test_home};

#[test]
fn test_export_csv_oldest_first() {
    let home = test_home("export_csv");
    init_with_readings(&home);
    let out = temp_out("export_csv", "csv");

    ht(&home)
        .args(["inr", "export", "--format", "csv", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let text = fs::read_to_string(&out).expect("read csv");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Date,INR Value,Notes");
    assert_eq!(lines[1], "2024-01-10,2.5,steady");
    assert_eq!(lines[2], "2024-02-10,1.8,missed dose");
    assert_eq!(lines[3], "2024-03-10,3.4,");
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_export_json_fields() {
    let home = test_home("export_json");
    init_with_readings(&home);
    let out = temp_out("export_json", "json");

    ht(&home)
        .args(["inr", "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let rows: Value = serde_json::from_str(&fs::read_to_string(&out).expect("read json"))
        .expect("valid json");
    let rows = rows.as_array().expect("array of readings");
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["Date"], "2024-01-10");
    assert_eq!(rows[1]["INR Value"], 1.8);
    assert_eq!(rows[1]["Notes"], "missed dose");
}

#[test]
fn test_export_xlsx_is_zip_container() {
    let home = test_home("export_xlsx");
    init_with_readings(&home);
    let out = temp_out("export_xlsx", "xlsx");

    ht(&home)
        .args(["inr", "export", "--format", "xlsx", "--file", &out, "-f"])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let bytes = fs::read(&out).expect("read xlsx");
    assert!(bytes.len() > 100);
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_export_range_can_be_empty() {
    let home = test_home("export_empty_range");
    init_with_readings(&home);
    let out = temp_out("export_empty_range", "csv");

    ht(&home)
        .args(["inr", "export", "--file", &out, "--range", "1m"])
        .assert()
        .success()
        .stdout(contains("No readings in the selected range"));

    let text = fs::read_to_string(&out).expect("read csv");
    assert_eq!(text.trim(), "Date,INR Value,Notes");
}

#[test]
fn test_export_declined_overwrite_keeps_file() {
    let home = test_home("export_declined");
    init_with_readings(&home);
    let out = temp_out("export_declined", "csv");
    fs::write(&out, "keep me").unwrap();

    ht(&home)
        .args(["inr", "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("cancelled"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");
}

#[test]
fn test_export_confirmed_overwrite() {
    let home = test_home("export_confirmed");
    init_with_readings(&home);
    let out = temp_out("export_confirmed", "csv");
    fs::write(&out, "old").unwrap();

    ht(&home)
        .args(["inr", "export", "--file", &out])
        .write_stdin("y\n")
        .assert()
        .success();

    assert!(fs::read_to_string(&out).unwrap().starts_with("Date,INR Value,Notes"));
}
