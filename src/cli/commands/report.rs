use crate::cli::commands::{open_db, resolve_user};
use crate::cli::parser::{Cli, ReportCmd};
use crate::config::Config;
use crate::core::{aggregator, report as report_rules, sales};
use crate::db::{leads, log, reports};
use crate::errors::{AppError, AppResult};
use crate::models::attendance::AttendanceStatus;
use crate::models::category::ActivityCategory;
use crate::models::report::DailyReport;
use crate::models::time_entry::TimeEntry;
use crate::ui::messages::{info, success, warning};
use crate::utils::{date, time};
use chrono::Local;

pub fn handle(cmd: &ReportCmd, cli: &Cli, cfg: &Config) -> AppResult<()> {
    match cmd {
        ReportCmd::Add {
            date: date_str,
            category,
            from,
            to,
            notes,
        } => add(cli, cfg, date_str, category, from, to, notes),
        ReportCmd::Rm { date: date_str, entry } => remove(cli, cfg, date_str, *entry),
        ReportCmd::Draft { date: date_str, notes } => draft(cli, cfg, date_str, notes.as_deref()),
        ReportCmd::Submit {
            date: date_str,
            attendance,
            notes,
        } => submit(cli, cfg, date_str, attendance, notes.as_deref()),
        ReportCmd::Show { date: date_str } => show(cli, cfg, date_str),
    }
}

fn add(cli: &Cli, cfg: &Config, date_str: &str, category: &str, from: &str, to: &str, notes: &str) -> AppResult<()> {
    let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;
    let cat = ActivityCategory::from_code(category)
        .ok_or_else(|| AppError::InvalidCategory(category.into()))?;
    let from_t = time::parse_time_or_err(from)?;
    let to_t = time::parse_time_or_err(to)?;
    let user = resolve_user(cli, cfg);

    //
    // Normalize before touching the store: zero duration means the pair
    // was invalid and the entry is refused.
    //
    let entry = TimeEntry::new(cat, from_t, to_t, notes);
    if entry.hours <= 0.0 {
        return Err(AppError::Validation(
            "End time must be after start time; the entry was not added.".into(),
        ));
    }

    let pool = open_db(cfg)?;

    let mut report = reports::get_report(&pool.conn, &user, &d)?
        .unwrap_or_else(|| DailyReport::new(&user, d));

    report_rules::ensure_editable(&report, date::today(), cfg.edit_window_days)?;
    aggregator::check_cap(cfg.daily_cap(), &report.entries, entry.hours)?;

    let report_id = reports::upsert_report(&pool.conn, &report)?;
    reports::insert_activity(&pool.conn, report_id, &entry)?;

    report.entries.push(entry.clone());
    let totals = aggregator::day_totals(&report.entries);

    success(format!(
        "Added {:.2} hours for {}. Total: {:.2}h",
        entry.hours,
        cat.label(),
        totals.total_hours
    ));

    //
    // Demo entries feed the sales pipeline.
    //
    if cat == ActivityCategory::Demo {
        let lead = sales::lead_from_demo_entry(&entry, &user, d);
        leads::insert_lead(&pool.conn, &lead)?;
        info(format!("Sales lead created: {}", lead.company_name));
    }

    log::oplog(
        &pool.conn,
        "report_add",
        &format!("{}/{}", user, d),
        &format!("Added {:.2}h {} entry", entry.hours, cat.to_db_str()),
    )?;

    Ok(())
}

fn remove(cli: &Cli, cfg: &Config, date_str: &str, entry_index: usize) -> AppResult<()> {
    let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;
    let user = resolve_user(cli, cfg);

    let pool = open_db(cfg)?;

    let report = reports::get_report(&pool.conn, &user, &d)?
        .ok_or_else(|| AppError::NoReportForDate(date_str.into()))?;

    report_rules::ensure_editable(&report, date::today(), cfg.edit_window_days)?;

    if entry_index == 0 || entry_index > report.entries.len() {
        return Err(AppError::Validation(format!(
            "Entry {} does not exist; the report has {} entries.",
            entry_index,
            report.entries.len()
        )));
    }

    let removed = &report.entries[entry_index - 1];
    reports::delete_activity(&pool.conn, removed.id)?;

    success(format!(
        "Removed {:.2} hours from {}",
        removed.hours,
        removed.category.label()
    ));
    Ok(())
}

fn draft(cli: &Cli, cfg: &Config, date_str: &str, notes: Option<&str>) -> AppResult<()> {
    let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;
    let user = resolve_user(cli, cfg);

    let pool = open_db(cfg)?;

    let mut report = reports::get_report(&pool.conn, &user, &d)?
        .ok_or_else(|| AppError::NoReportForDate(date_str.into()))?;

    report_rules::ensure_editable(&report, date::today(), cfg.edit_window_days)?;
    report_rules::validate_draft(&report)?;

    if let Some(n) = notes {
        report.general_notes = n.to_string();
    }
    reports::upsert_report(&pool.conn, &report)?;

    let totals = aggregator::day_totals(&report.entries);
    success(format!(
        "Your daily report has been saved as draft with {:.2} total hours.",
        totals.total_hours
    ));
    Ok(())
}

fn submit(cli: &Cli, cfg: &Config, date_str: &str, attendance: &str, notes: Option<&str>) -> AppResult<()> {
    let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;
    let att = AttendanceStatus::from_code(attendance)
        .ok_or_else(|| AppError::InvalidAttendance(attendance.into()))?;
    let user = resolve_user(cli, cfg);

    let pool = open_db(cfg)?;

    let mut report = reports::get_report(&pool.conn, &user, &d)?
        .ok_or_else(|| AppError::NoReportForDate(date_str.into()))?;

    report_rules::ensure_editable(&report, date::today(), cfg.edit_window_days)?;
    report_rules::validate_submit(&report, Some(att))?;

    report.attendance = Some(att);
    if let Some(n) = notes {
        report.general_notes = n.to_string();
    }
    report.submitted_at = Some(Local::now().to_rfc3339());
    reports::upsert_report(&pool.conn, &report)?;

    let totals = aggregator::day_totals(&report.entries);
    success(format!(
        "Your daily report has been submitted successfully with {:.2} total hours.",
        totals.total_hours
    ));

    log::oplog(
        &pool.conn,
        "report_submit",
        &format!("{}/{}", user, d),
        &format!("Submitted with {:.2} total hours", totals.total_hours),
    )?;
    Ok(())
}

fn show(cli: &Cli, cfg: &Config, date_str: &str) -> AppResult<()> {
    let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;
    let user = resolve_user(cli, cfg);

    let pool = open_db(cfg)?;

    let Some(report) = reports::get_report(&pool.conn, &user, &d)? else {
        info(format!("No report for {} on {}.", user, d));
        return Ok(());
    };

    let totals = aggregator::day_totals(&report.entries);
    let status = if report.is_submitted() { "Submitted" } else { "Draft" };

    println!();
    println!("📅 Daily report for {} — {} [{}]", user, report.date_str(), status);
    if let Some(att) = report.attendance {
        println!("   Attendance: {}", att.to_db_str());
    }
    if !report.general_notes.is_empty() {
        println!("   Notes: {}", report.general_notes);
    }
    println!();

    for (i, entry) in report.entries.iter().enumerate() {
        println!(
            "   {:>2}. {} - {}  {:>5.2}h  {}  {}{}",
            i + 1,
            entry.from_str(),
            entry.to_str(),
            entry.hours,
            if entry.is_billable { "(Billable)" } else { "(Non-Billable)" },
            entry.category.label(),
            if entry.notes.is_empty() {
                String::new()
            } else {
                format!(" — {}", entry.notes)
            }
        );
    }

    println!();
    println!("   Total hours:        {:.2}", totals.total_hours);
    println!("   Billable hours:     {:.2}", totals.billable_hours);
    println!("   Non-billable hours: {:.2}", totals.non_billable_hours);
    println!("   Productivity:       {:.1}%", totals.productivity_pct);

    if !report_rules::is_report_editable(&report, date::today(), cfg.edit_window_days) {
        warning(format!(
            "This report is read-only (submitted, or older than {} days).",
            cfg.edit_window_days
        ));
    }
    Ok(())
}
