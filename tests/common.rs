#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, isolated in its own config/data directory and with no
/// weather API key from the environment.
pub fn ht(home: &PathBuf) -> Command {
    let mut cmd = cargo_bin_cmd!("hometools");
    cmd.env("HOMETOOLS_CONFIG_DIR", home);
    cmd.env_remove("OPENWEATHER_API_KEY");
    cmd
}

/// Fresh, empty directory inside the system temp dir.
pub fn test_home(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hometools", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path
}

/// Temporary output file path inside tempdir; any previous file is removed.
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a home in test mode and add a few INR readings.
pub fn init_with_readings(home: &PathBuf) {
    ht(home).args(["--test", "init"]).assert().success();

    for (date, value, notes) in [
        ("2024-01-10", "2.5", "steady"),
        ("2024-02-10", "1.8", "missed dose"),
        ("2024-03-10", "3.4", ""),
    ] {
        ht(home)
            .args(["inr", "add", value, "--date", date, "--notes", notes])
            .assert()
            .success();
    }
}
