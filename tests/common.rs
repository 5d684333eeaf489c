#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ops() -> Command {
    cargo_bin_cmd!("opstrack")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_opstrack.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn today_str() -> String {
    opstrack::utils::date::today().to_string()
}

pub fn days_ago_str(days: i64) -> String {
    (opstrack::utils::date::today() - chrono::Duration::days(days)).to_string()
}

/// Initialize the DB schema (uses --test to skip config file writes)
pub fn init_db(db_path: &str) {
    ops()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and add a couple of activity entries for today
pub fn init_db_with_report(db_path: &str, user: &str) {
    init_db(db_path);

    let today = today_str();

    ops()
        .args([
            "--db", db_path, "--user", user, "report", "add", &today,
            "--category", "training", "--from", "09:00", "--to", "11:00",
        ])
        .assert()
        .success();

    ops()
        .args([
            "--db", db_path, "--user", user, "report", "add", &today,
            "--category", "meeting", "--from", "11:00", "--to", "12:00",
        ])
        .assert()
        .success();
}
