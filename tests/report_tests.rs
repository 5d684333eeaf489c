mod common;

use common::*;
use predicates::prelude::*;
use std::fs;

#[test]
fn add_entry_prints_quantized_total() {
    let db = setup_test_db("report_add_quantized");
    init_db(&db);
    let today = today_str();

    ops()
        .args([
            "--db", &db, "--user", "alice", "report", "add", &today,
            "--category", "training", "--from", "09:00", "--to", "09:40",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 0.75 hours for Training. Total: 0.75h"));
}

#[test]
fn add_rejects_inverted_time_pair() {
    let db = setup_test_db("report_add_inverted");
    init_db(&db);
    let today = today_str();

    ops()
        .args([
            "--db", &db, "--user", "alice", "report", "add", &today,
            "--category", "training", "--from", "11:00", "--to", "10:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("End time must be after start time"));
}

#[test]
fn add_rejects_unknown_category() {
    let db = setup_test_db("report_add_badcat");
    init_db(&db);
    let today = today_str();

    ops()
        .args([
            "--db", &db, "--user", "alice", "report", "add", &today,
            "--category", "gardening", "--from", "09:00", "--to", "10:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid activity category: gardening"));
}

#[test]
fn show_prints_totals_and_productivity() {
    let db = setup_test_db("report_show_totals");
    init_db_with_report(&db, "alice");
    let today = today_str();

    ops()
        .args(["--db", &db, "--user", "alice", "report", "show", &today])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total hours:        3.00"))
        .stdout(predicate::str::contains("Billable hours:     2.00"))
        .stdout(predicate::str::contains("Non-billable hours: 1.00"))
        .stdout(predicate::str::contains("Productivity:       66.7%"))
        .stdout(predicate::str::contains("(Billable)"))
        .stdout(predicate::str::contains("(Non-Billable)"));
}

#[test]
fn demo_entry_creates_a_sales_lead() {
    let db = setup_test_db("report_demo_lead");
    init_db(&db);
    let today = today_str();

    ops()
        .args([
            "--db", &db, "--user", "alice", "report", "add", &today,
            "--category", "demo", "--from", "10:00", "--to", "11:00",
            "--notes", "Product demo for Acme.",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sales lead created: Acme"));

    ops()
        .args(["--db", &db, "leads"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme  [demo-given]"))
        .stdout(predicate::str::contains("Product demo for Acme."));
}

#[test]
fn draft_then_submit_then_locked() {
    let db = setup_test_db("report_draft_submit");
    init_db_with_report(&db, "alice");
    let today = today_str();

    ops()
        .args(["--db", &db, "--user", "alice", "report", "draft", &today])
        .assert()
        .success()
        .stdout(predicate::str::contains("saved as draft with 3.00 total hours"));

    ops()
        .args([
            "--db", &db, "--user", "alice", "report", "submit", &today,
            "--attendance", "present",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("submitted successfully with 3.00 total hours"));

    // submission freezes the report even inside the editing window
    ops()
        .args([
            "--db", &db, "--user", "alice", "report", "add", &today,
            "--category", "misc", "--from", "14:00", "--to", "15:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already been submitted"));
}

#[test]
fn draft_requires_an_existing_report() {
    let db = setup_test_db("report_draft_missing");
    init_db(&db);
    let today = today_str();

    ops()
        .args(["--db", &db, "--user", "alice", "report", "draft", &today])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No daily report found"));
}

#[test]
fn two_days_back_is_still_editable() {
    let db = setup_test_db("report_window_inside");
    init_db(&db);
    let date = days_ago_str(2);

    ops()
        .args([
            "--db", &db, "--user", "alice", "report", "add", &date,
            "--category", "project", "--from", "09:00", "--to", "10:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 1.00 hours for Project"));
}

#[test]
fn three_days_back_is_locked() {
    let db = setup_test_db("report_window_outside");
    init_db(&db);
    let date = days_ago_str(3);

    ops()
        .args([
            "--db", &db, "--user", "alice", "report", "add", &date,
            "--category", "project", "--from", "09:00", "--to", "10:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("outside the 2-day editing window"));
}

#[test]
fn rm_deletes_by_one_based_index() {
    let db = setup_test_db("report_rm_entry");
    init_db_with_report(&db, "alice");
    let today = today_str();

    ops()
        .args(["--db", &db, "--user", "alice", "report", "rm", &today, "--entry", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 2.00 hours from Training"));

    // index 0 never exists
    ops()
        .args(["--db", &db, "--user", "alice", "report", "rm", &today, "--entry", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn configured_daily_cap_limits_the_day() {
    let db = setup_test_db("report_daily_cap");
    init_db(&db);
    let today = today_str();

    // a config home with an 8-hour ceiling
    let home = std::env::temp_dir().join("report_daily_cap_home");
    fs::create_dir_all(home.join(".opstrack")).unwrap();
    fs::write(
        home.join(".opstrack/opstrack.conf"),
        format!(
            "database: {}\ndefault_user: alice\ndaily_cap_hours: 8.0\nedit_window_days: 2\n",
            db
        ),
    )
    .unwrap();

    ops()
        .env("HOME", &home)
        .args([
            "--db", &db, "--user", "alice", "report", "add", &today,
            "--category", "project", "--from", "09:00", "--to", "16:30",
        ])
        .assert()
        .success();

    // 7.5h logged: one more hour would cross the ceiling
    ops()
        .env("HOME", &home)
        .args([
            "--db", &db, "--user", "alice", "report", "add", &today,
            "--category", "training", "--from", "17:00", "--to", "18:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("would exceed the 8-hour daily limit"));

    // half an hour still fits exactly
    ops()
        .env("HOME", &home)
        .args([
            "--db", &db, "--user", "alice", "report", "add", &today,
            "--category", "training", "--from", "17:00", "--to", "17:30",
        ])
        .assert()
        .success();
}

#[test]
fn reports_are_isolated_per_user() {
    let db = setup_test_db("report_per_user");
    init_db_with_report(&db, "alice");
    let today = today_str();

    ops()
        .args(["--db", &db, "--user", "bob", "report", "show", &today])
        .assert()
        .success()
        .stdout(predicate::str::contains("No report for bob"));
}
