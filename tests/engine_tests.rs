//! Library-level tests for the pure computation core.

use chrono::{NaiveDate, NaiveTime};
use opstrack::core::aggregator::{self, DailyCap};
use opstrack::core::{dcr, kpi, lifecycle, normalizer, report, sales};
use opstrack::models::category::{ActivityCategory, billable_for};
use opstrack::models::kpi::KpiEntry;
use opstrack::models::task::{Priority, Task, TaskStatus};
use opstrack::models::time_entry::TimeEntry;
use opstrack::utils::date;

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn sample_task(category: ActivityCategory, due_time: Option<NaiveTime>) -> Task {
    Task::new(
        "Prepare client workshop",
        "",
        "alice",
        "bob",
        Priority::Medium,
        category,
        None,
        d(2025, 6, 10),
        due_time,
        2.0,
        Vec::new(),
    )
}

// ---------------------------------------------------------------
// Time-Entry Normalizer
// ---------------------------------------------------------------

#[test]
fn duration_quantizes_to_quarter_hours() {
    // 40 minutes rounds up to 0.75h
    assert_eq!(normalizer::quantize_hours(t(9, 0), t(9, 40)), 0.75);
    assert_eq!(normalizer::quantize_hours(t(9, 0), t(11, 0)), 2.0);
    assert_eq!(normalizer::quantize_hours(t(9, 0), t(9, 7)), 0.0);
    assert_eq!(normalizer::quantize_hours(t(9, 0), t(9, 8)), 0.25);
}

#[test]
fn inverted_or_equal_pairs_yield_zero() {
    assert_eq!(normalizer::quantize_hours(t(10, 0), t(9, 0)), 0.0);
    assert_eq!(normalizer::quantize_hours(t(10, 0), t(10, 0)), 0.0);
}

#[test]
fn positive_durations_are_at_least_a_quarter() {
    for mins in 1..=600 {
        let q = normalizer::quantize_minutes(mins);
        if q > 0.0 {
            assert!(q >= 0.25);
        }
        // always a multiple of 0.25
        assert_eq!((q * 4.0).fract(), 0.0);
    }
}

#[test]
fn billability_comes_from_the_category_table() {
    assert!(ActivityCategory::Demo.is_billable());
    assert!(!ActivityCategory::Meeting.is_billable());
    assert!(!ActivityCategory::Misc.is_billable());
    assert!(billable_for("techSupport"));
    // unknown categories default to non-billable
    assert!(!billable_for("somethingElse"));
}

// ---------------------------------------------------------------
// Daily Aggregator
// ---------------------------------------------------------------

#[test]
fn day_totals_split_billable_and_non_billable() {
    let entries = vec![
        TimeEntry::new(ActivityCategory::Demo, t(9, 0), t(11, 0), ""),
        TimeEntry::new(ActivityCategory::Meeting, t(11, 0), t(12, 0), ""),
    ];
    let totals = aggregator::day_totals(&entries);

    assert_eq!(totals.total_hours, 3.0);
    assert_eq!(totals.billable_hours, 2.0);
    assert_eq!(totals.non_billable_hours, 1.0);
    assert!((totals.productivity_pct - 66.7).abs() < 1e-9);
}

#[test]
fn totals_are_additive() {
    let entries = vec![
        TimeEntry::new(ActivityCategory::Project, t(8, 0), t(10, 30), ""),
        TimeEntry::new(ActivityCategory::Misc, t(10, 30), t(11, 0), ""),
        TimeEntry::new(ActivityCategory::TechSupport, t(13, 0), t(16, 45), ""),
    ];
    let totals = aggregator::day_totals(&entries);
    assert_eq!(totals.total_hours, totals.billable_hours + totals.non_billable_hours);
}

#[test]
fn empty_day_has_zero_productivity() {
    let totals = aggregator::day_totals(&[]);
    assert_eq!(totals.total_hours, 0.0);
    assert_eq!(totals.productivity_pct, 0.0);
}

#[test]
fn daily_cap_refuses_overflow() {
    let entries = vec![TimeEntry::new(ActivityCategory::Project, t(9, 0), t(16, 30), "")];
    assert_eq!(entries[0].hours, 7.5);

    // unlimited: anything goes
    assert!(aggregator::check_cap(DailyCap::Unlimited, &entries, 4.0).is_ok());

    // 8h ceiling: 0.5h fits, 1.0h does not
    assert!(aggregator::check_cap(DailyCap::Hours(8.0), &entries, 0.5).is_ok());
    assert!(aggregator::check_cap(DailyCap::Hours(8.0), &entries, 1.0).is_err());
}

// ---------------------------------------------------------------
// Editability window
// ---------------------------------------------------------------

#[test]
fn trailing_window_allows_two_days_back() {
    let today = d(2025, 6, 10);
    assert!(report::is_date_editable(d(2025, 6, 10), today, 2));
    assert!(report::is_date_editable(d(2025, 6, 9), today, 2));
    assert!(report::is_date_editable(d(2025, 6, 8), today, 2));
    assert!(!report::is_date_editable(d(2025, 6, 7), today, 2));
    // future dates are not editable
    assert!(!report::is_date_editable(d(2025, 6, 11), today, 2));
}

// ---------------------------------------------------------------
// Task Lifecycle Tracker
// ---------------------------------------------------------------

#[test]
fn start_requires_pending() {
    let mut task = sample_task(ActivityCategory::Project, None);
    let now = d(2025, 6, 10).and_hms_opt(9, 0, 0).unwrap();

    assert!(lifecycle::start(&mut task, now).is_ok());
    assert_eq!(task.status, TaskStatus::InProgress);
    assert_eq!(task.started_at, Some(now));

    // a second start is rejected
    assert!(lifecycle::start(&mut task, now).is_err());
}

#[test]
fn complete_quantizes_actual_hours() {
    let mut task = sample_task(ActivityCategory::Project, None);
    let start = d(2025, 6, 10).and_hms_opt(9, 0, 0).unwrap();
    let end = d(2025, 6, 10).and_hms_opt(10, 40, 0).unwrap();

    lifecycle::start(&mut task, start).unwrap();
    lifecycle::complete(&mut task, end).unwrap();

    assert_eq!(task.status, TaskStatus::Completed);
    assert_eq!(task.actual_hours, 1.75);
    assert!(!task.is_overdue);
}

#[test]
fn completion_after_due_time_is_overdue() {
    let mut task = sample_task(ActivityCategory::Project, Some(t(15, 0)));
    let start = d(2025, 6, 10).and_hms_opt(14, 0, 0).unwrap();

    lifecycle::start(&mut task, start).unwrap();
    lifecycle::complete(&mut task, d(2025, 6, 10).and_hms_opt(15, 1, 0).unwrap()).unwrap();

    assert!(task.is_overdue);
    assert_eq!(task.overdue_minutes, 1);
}

#[test]
fn completion_before_due_time_is_on_time() {
    let mut task = sample_task(ActivityCategory::Project, Some(t(15, 0)));
    let start = d(2025, 6, 10).and_hms_opt(14, 0, 0).unwrap();

    lifecycle::start(&mut task, start).unwrap();
    lifecycle::complete(&mut task, d(2025, 6, 10).and_hms_opt(14, 59, 0).unwrap()).unwrap();

    assert!(!task.is_overdue);
    assert_eq!(task.overdue_minutes, 0);
}

#[test]
fn date_based_tasks_are_never_overdue() {
    let mut task = sample_task(ActivityCategory::Project, None);
    let start = d(2025, 6, 10).and_hms_opt(9, 0, 0).unwrap();

    lifecycle::start(&mut task, start).unwrap();
    lifecycle::complete(&mut task, d(2025, 6, 10).and_hms_opt(23, 0, 0).unwrap()).unwrap();

    assert!(!task.is_overdue);
}

#[test]
fn escalation_requires_a_reason() {
    let mut task = sample_task(ActivityCategory::Project, None);
    assert!(lifecycle::escalate(&mut task, "  ", None).is_err());
    assert_eq!(task.status, TaskStatus::Pending);

    // without a reassignee the assignee is unchanged
    assert!(lifecycle::escalate(&mut task, "blocked on customer input", None).is_ok());
    assert_eq!(task.status, TaskStatus::Escalated);
    assert_eq!(task.assignee, "alice");
}

#[test]
fn escalation_with_reassignee_swaps_assignee() {
    let mut task = sample_task(ActivityCategory::Project, None);
    lifecycle::escalate(&mut task, "resource conflict", Some("carol")).unwrap();
    assert_eq!(task.status, TaskStatus::Escalated);
    assert_eq!(task.assignee, "carol");

    // escalated is terminal
    let now = d(2025, 6, 10).and_hms_opt(9, 0, 0).unwrap();
    assert!(lifecycle::start(&mut task, now).is_err());
    assert!(lifecycle::escalate(&mut task, "again", None).is_err());
}

#[test]
fn comments_need_text() {
    let mut task = sample_task(ActivityCategory::Project, None);
    let now = d(2025, 6, 10).and_hms_opt(9, 0, 0).unwrap();

    assert!(lifecycle::add_comment(&mut task, "bob", "", now).is_err());
    let c = lifecycle::add_comment(&mut task, "bob", "looks good", now).unwrap();
    assert_eq!(c.author, "bob");
    assert_eq!(task.comments.len(), 1);
}

#[test]
fn feedback_prompt_only_for_completed_trainer_facing_work() {
    let mut demo = sample_task(ActivityCategory::Demo, None);
    assert!(!lifecycle::wants_customer_feedback(&demo));

    let start = d(2025, 6, 10).and_hms_opt(9, 0, 0).unwrap();
    lifecycle::start(&mut demo, start).unwrap();
    lifecycle::complete(&mut demo, d(2025, 6, 10).and_hms_opt(10, 0, 0).unwrap()).unwrap();
    assert!(lifecycle::wants_customer_feedback(&demo));

    let mut project = sample_task(ActivityCategory::Project, None);
    lifecycle::start(&mut project, start).unwrap();
    lifecycle::complete(&mut project, d(2025, 6, 10).and_hms_opt(10, 0, 0).unwrap()).unwrap();
    assert!(!lifecycle::wants_customer_feedback(&project));
}

// ---------------------------------------------------------------
// DCR Score Engine
// ---------------------------------------------------------------

fn completed_task(overdue_minutes: i64) -> Task {
    let mut task = sample_task(ActivityCategory::Project, None);
    task.status = TaskStatus::Completed;
    if overdue_minutes > 0 {
        task.is_overdue = true;
        task.overdue_minutes = overdue_minutes;
    }
    task
}

#[test]
fn empty_day_scores_one() {
    assert_eq!(dcr::compute_score(&[]), 1.0);
    let i = dcr::insights(&[]);
    assert_eq!(i.score, 1.0);
    assert_eq!(i.message, "Performance needs improvement. Consider better time management.");
}

#[test]
fn full_completion_on_time_scores_five() {
    let tasks: Vec<Task> = (0..4).map(|_| completed_task(0)).collect();
    assert_eq!(dcr::compute_score(&tasks), 5.0);
    assert_eq!(dcr::insights(&tasks).message, "Excellent performance! Keep up the great work.");
}

#[test]
fn half_completion_loses_one_point() {
    let mut tasks: Vec<Task> = (0..2).map(|_| completed_task(0)).collect();
    tasks.push(sample_task(ActivityCategory::Project, None));
    tasks.push(sample_task(ActivityCategory::Project, None));

    // completionRate 0.5 → penalty (1 - 0.5) * 2 = 1.0
    assert_eq!(dcr::compute_score(&tasks), 4.0);
}

#[test]
fn three_hours_late_loses_one_and_a_half() {
    let mut tasks: Vec<Task> = (0..3).map(|_| completed_task(0)).collect();
    tasks.push(completed_task(180));

    // penalty min(3h * 0.5, 2) = 1.5
    let score = dcr::compute_score(&tasks);
    assert_eq!(score, 3.5);
    assert_eq!(dcr::message_for(score), "Good performance with room for improvement.");
}

#[test]
fn score_is_always_clamped_to_bounds() {
    // nothing completed and massively late: both penalties max out
    let mut tasks: Vec<Task> = (0..5).map(|_| sample_task(ActivityCategory::Project, None)).collect();
    tasks.push(completed_task(10_000));
    let score = dcr::compute_score(&tasks);
    assert!((1.0..=5.0).contains(&score));
}

#[test]
fn insights_count_overdue_minutes() {
    let tasks = vec![completed_task(30), completed_task(45), completed_task(0)];
    let i = dcr::insights(&tasks);
    assert_eq!(i.total_tasks, 3);
    assert_eq!(i.completed, 3);
    assert_eq!(i.overdue, 2);
    assert_eq!(i.total_overdue_minutes, 75);
}

// ---------------------------------------------------------------
// KPI Roll-up
// ---------------------------------------------------------------

#[test]
fn kpi_summary_averages_and_sums() {
    let entries = vec![
        KpiEntry::new("alice", d(2025, 6, 9), 4, 5, "AWS SAA", 2, 4.5, 1, ""),
        KpiEntry::new("alice", d(2025, 6, 10), 5, 4, "", 3, 3.5, 0, ""),
    ];
    let s = kpi::summarize(&entries);

    assert_eq!(s.entries, 2);
    assert!((s.avg_customer_satisfaction - 4.5).abs() < 1e-9);
    assert!((s.avg_timely_delivery - 4.5).abs() < 1e-9);
    assert!((s.avg_dcr_maintenance - 4.0).abs() < 1e-9);
    assert_eq!(s.lead_generation_total, 5);
    assert_eq!(s.technical_escalations_total, 1);
    assert_eq!(s.certified_entries, 1);
}

#[test]
fn empty_window_summarizes_to_zero() {
    let s = kpi::summarize(&[]);
    assert_eq!(s.entries, 0);
    assert_eq!(s.avg_customer_satisfaction, 0.0);
    assert_eq!(s.lead_generation_total, 0);
}

#[test]
fn ratings_outside_bounds_are_rejected() {
    assert!(kpi::validate_rating("customer satisfaction", 0).is_err());
    assert!(kpi::validate_rating("customer satisfaction", 6).is_err());
    assert!(kpi::validate_rating("customer satisfaction", 3).is_ok());
}

// ---------------------------------------------------------------
// Period expressions
// ---------------------------------------------------------------

#[test]
fn period_expands_day_month_and_year() {
    assert_eq!(date::generate_from_period("2025-06-10").unwrap(), vec![d(2025, 6, 10)]);
    assert_eq!(date::generate_from_period("2025-06").unwrap().len(), 30);
    assert_eq!(date::generate_from_period("2025").unwrap().len(), 365);
}

#[test]
fn period_range_expands_between_endpoints() {
    let days = date::generate_from_period("2025-06-28:2025-07-02").unwrap();
    assert_eq!(days.first(), Some(&d(2025, 6, 28)));
    assert_eq!(days.last(), Some(&d(2025, 7, 2)));
    assert_eq!(days.len(), 5);
}

#[test]
fn reversed_period_range_is_an_error() {
    assert!(date::generate_from_period("2025-06:2025-01").is_err());
    assert!(date::generate_from_period("2025-06-10:2025-06-09").is_err());
}

#[test]
fn unrepresentable_year_is_an_error() {
    assert!(date::generate_from_period("300000").is_err());
    assert!(date::generate_from_period("nonsense").is_err());
}

// ---------------------------------------------------------------
// Sales hook
// ---------------------------------------------------------------

#[test]
fn company_name_extracted_from_demo_notes() {
    assert_eq!(sales::extract_company_name("Product demo for Acme."), Some("Acme".to_string()));
    assert_eq!(sales::extract_company_name("nothing interesting here"), None);
}

#[test]
fn demo_entry_spawns_a_lead() {
    let entry = TimeEntry::new(ActivityCategory::Demo, t(10, 0), t(11, 0), "Session with Initech.");
    let lead = sales::lead_from_demo_entry(&entry, "alice", d(2025, 6, 10));

    assert_eq!(lead.company_name, "Initech");
    assert_eq!(lead.status, "demo-given");
    assert_eq!(lead.lead_source, "Demo Report");
    assert_eq!(lead.assigned_to, "alice");
}

#[test]
fn lead_without_company_gets_dated_placeholder() {
    let entry = TimeEntry::new(ActivityCategory::Demo, t(10, 0), t(11, 0), "walkthrough session");
    let lead = sales::lead_from_demo_entry(&entry, "alice", d(2025, 6, 10));
    assert_eq!(lead.company_name, "Demo Client - 2025-06-10");
}
