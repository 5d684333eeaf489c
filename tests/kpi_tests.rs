mod common;

use common::*;
use predicates::prelude::*;

#[test]
fn add_with_explicit_dcr_records_the_entry() {
    let db = setup_test_db("kpi_add_explicit");
    init_db(&db);
    let today = today_str();

    ops()
        .args([
            "--db", &db, "--user", "alice", "kpi", "add", &today,
            "--satisfaction", "4", "--delivery", "5", "--dcr", "4.5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "KPI entry recorded for alice on {} (DCR 4.5).",
            today
        )));
}

#[test]
fn omitted_dcr_is_scored_from_task_outcomes() {
    let db = setup_test_db("kpi_add_auto");
    init_db(&db);
    let today = today_str();

    // no tasks worked today: inactivity scores 1.0
    ops()
        .args(["--db", &db, "--user", "alice", "kpi", "add", &today])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "DCR maintenance auto-computed from task outcomes: 1.0",
        ))
        .stdout(predicate::str::contains("(DCR 1.0)."));
}

#[test]
fn auto_dcr_reflects_completed_work() {
    let db = setup_test_db("kpi_auto_completed");
    init_db(&db);
    let today = today_str();

    ops()
        .args([
            "--db", &db, "--user", "alice", "task", "add", "Prepare deck",
            "--due-date", &today,
        ])
        .assert()
        .success();
    ops().args(["--db", &db, "task", "start", "1"]).assert().success();
    ops().args(["--db", &db, "task", "done", "1"]).assert().success();

    // one task, completed on time: full score
    ops()
        .args(["--db", &db, "--user", "alice", "kpi", "add", &today])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "DCR maintenance auto-computed from task outcomes: 5.0",
        ));
}

#[test]
fn ratings_outside_one_to_five_are_rejected() {
    let db = setup_test_db("kpi_bad_rating");
    init_db(&db);
    let today = today_str();

    ops()
        .args(["--db", &db, "--user", "alice", "kpi", "add", &today, "--satisfaction", "6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("customer satisfaction must be between 1 and 5"));

    ops()
        .args(["--db", &db, "--user", "alice", "kpi", "add", &today, "--delivery", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("timely delivery must be between 1 and 5"));

    ops()
        .args(["--db", &db, "--user", "alice", "kpi", "add", &today, "--dcr", "5.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("DCR maintenance must be between 1 and 5"));
}

#[test]
fn summary_averages_and_sums_the_window() {
    let db = setup_test_db("kpi_summary");
    init_db(&db);

    ops()
        .args([
            "--db", &db, "--user", "alice", "kpi", "add", &days_ago_str(1),
            "--satisfaction", "4", "--delivery", "4", "--dcr", "4.0",
            "--leads", "2", "--certifications", "AWS SAA",
        ])
        .assert()
        .success();

    ops()
        .args([
            "--db", &db, "--user", "alice", "kpi", "add", &today_str(),
            "--satisfaction", "5", "--delivery", "4", "--dcr", "3.0",
            "--leads", "3", "--escalations", "1",
        ])
        .assert()
        .success();

    ops()
        .args(["--db", &db, "--user", "alice", "kpi", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("KPI summary for alice (2 entries)"))
        .stdout(predicate::str::contains("Avg customer satisfaction: 4.50"))
        .stdout(predicate::str::contains("Avg timely delivery:       4.00"))
        .stdout(predicate::str::contains("Avg DCR maintenance:       3.50"))
        .stdout(predicate::str::contains("Leads generated:           5"))
        .stdout(predicate::str::contains("Technical escalations:     1"))
        .stdout(predicate::str::contains("Entries with certifications: 1"));
}

#[test]
fn second_add_for_a_date_replaces_the_first() {
    let db = setup_test_db("kpi_upsert");
    init_db(&db);
    let today = today_str();

    ops()
        .args(["--db", &db, "--user", "alice", "kpi", "add", &today, "--satisfaction", "2", "--dcr", "2.0"])
        .assert()
        .success();
    ops()
        .args(["--db", &db, "--user", "alice", "kpi", "add", &today, "--satisfaction", "5", "--dcr", "2.0"])
        .assert()
        .success();

    ops()
        .args(["--db", &db, "--user", "alice", "kpi", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(1 entries)"))
        .stdout(predicate::str::contains("Avg customer satisfaction: 5.00"));
}

#[test]
fn reversed_summary_period_is_rejected() {
    let db = setup_test_db("kpi_reversed_period");
    init_db(&db);

    ops()
        .args([
            "--db", &db, "--user", "alice", "kpi", "summary",
            "--period", "2025-06:2025-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid period range"));
}

#[test]
fn summary_for_unknown_user_is_empty() {
    let db = setup_test_db("kpi_summary_empty");
    init_db(&db);

    ops()
        .args(["--db", &db, "--user", "bob", "kpi", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No KPI entries found for bob."));
}

#[test]
fn dcr_command_scores_an_empty_day_as_one() {
    let db = setup_test_db("dcr_empty_day");
    init_db(&db);
    let today = today_str();

    ops()
        .args(["--db", &db, "--user", "alice", "dcr", &today])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("DCR score for alice on {}", today)))
        .stdout(predicate::str::contains("1.0"))
        .stdout(predicate::str::contains(
            "Performance needs improvement. Consider better time management.",
        ));
}

#[test]
fn dcr_command_reports_completed_counters() {
    let db = setup_test_db("dcr_completed_day");
    init_db(&db);
    let today = today_str();

    ops()
        .args([
            "--db", &db, "--user", "alice", "task", "add", "Prepare deck",
            "--due-date", &today,
        ])
        .assert()
        .success();
    ops().args(["--db", &db, "task", "start", "1"]).assert().success();
    ops().args(["--db", &db, "task", "done", "1"]).assert().success();

    ops()
        .args(["--db", &db, "--user", "alice", "dcr", &today])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tasks worked:   1"))
        .stdout(predicate::str::contains("Completed:      1"))
        .stdout(predicate::str::contains("Excellent performance! Keep up the great work."));
}
