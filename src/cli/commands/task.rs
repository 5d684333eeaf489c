use crate::cli::commands::{open_db, resolve_user};
use crate::cli::parser::{Cli, TaskCmd};
use crate::config::Config;
use crate::core::{aggregator, lifecycle};
use crate::db::{log, reports, tasks};
use crate::errors::{AppError, AppResult};
use crate::models::category::ActivityCategory;
use crate::models::report::DailyReport;
use crate::models::task::{Priority, Task};
use crate::models::time_entry::TimeEntry;
use crate::ui::messages::{info, success, warning};
use crate::utils::{date, time};
use chrono::Local;
use rusqlite::Connection;

pub fn handle(cmd: &TaskCmd, cli: &Cli, cfg: &Config) -> AppResult<()> {
    match cmd {
        TaskCmd::Add {
            title,
            description,
            assignee,
            priority,
            category,
            client,
            due_date,
            due_time,
            estimated_hours,
            tags,
        } => add(
            cli,
            cfg,
            title,
            description,
            assignee.as_deref(),
            priority,
            category,
            client.clone(),
            due_date,
            due_time.as_ref(),
            *estimated_hours,
            tags.as_deref(),
        ),
        TaskCmd::List { assignee } => list(cfg, assignee.as_deref()),
        TaskCmd::Start { id } => start(cfg, *id),
        TaskCmd::Done { id } => done(cfg, *id),
        TaskCmd::Escalate { id, reason, reassign } => escalate(cfg, *id, reason, reassign.as_deref()),
        TaskCmd::Comment { id, author, text } => comment(cli, cfg, *id, author.as_deref(), text),
    }
}

#[allow(clippy::too_many_arguments)]
fn add(
    cli: &Cli,
    cfg: &Config,
    title: &str,
    description: &str,
    assignee: Option<&str>,
    priority: &str,
    category: &str,
    client: Option<String>,
    due_date: &str,
    due_time: Option<&String>,
    estimated_hours: f64,
    tags: Option<&str>,
) -> AppResult<()> {
    if title.trim().is_empty() {
        return Err(AppError::Validation("Task title cannot be empty.".into()));
    }

    let prio = Priority::from_db_str(&priority.to_lowercase())
        .ok_or_else(|| AppError::InvalidPriority(priority.into()))?;
    let cat = ActivityCategory::from_code(category)
        .ok_or_else(|| AppError::InvalidCategory(category.into()))?;
    let due = date::parse_date(due_date).ok_or_else(|| AppError::InvalidDate(due_date.into()))?;
    let due_t = time::parse_optional_time(due_time)?;

    let assigner = resolve_user(cli, cfg);
    let assignee = assignee.map(str::to_string).unwrap_or_else(|| assigner.clone());

    let tag_list: Vec<String> = tags
        .map(|t| t.split(',').map(|s| s.trim().to_string()).filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();

    let task = Task::new(
        title.trim(),
        description,
        &assignee,
        &assigner,
        prio,
        cat,
        client,
        due,
        due_t,
        estimated_hours,
        tag_list,
    );

    let pool = open_db(cfg)?;
    let id = tasks::insert_task(&pool.conn, &task)?;

    success(format!("Task #{} created and assigned to {}.", id, assignee));
    Ok(())
}

fn list(cfg: &Config, assignee: Option<&str>) -> AppResult<()> {
    let pool = open_db(cfg)?;
    let all = tasks::list_tasks(&pool.conn, assignee)?;

    if all.is_empty() {
        info("No tasks found.");
        return Ok(());
    }

    println!();
    for task in &all {
        let due = match task.due_time {
            Some(t) => format!("{} {}", task.due_date, t.format("%H:%M")),
            None => task.due_date.to_string(),
        };
        println!(
            "   #{:<4} [{}] {:<6} {}  → {}  (due {}){}",
            task.id,
            task.status.to_db_str(),
            task.priority.to_db_str(),
            task.title,
            task.assignee,
            due,
            if task.is_overdue {
                format!("  ⏰ overdue by {} min", task.overdue_minutes)
            } else {
                String::new()
            }
        );
    }
    println!();
    Ok(())
}

/// Make sure the assignee has a report row for the day the task touches.
fn ensure_report(conn: &Connection, user: &str, d: chrono::NaiveDate) -> AppResult<DailyReport> {
    match reports::get_report(conn, user, &d)? {
        Some(r) => Ok(r),
        None => {
            let report = DailyReport::new(user, d);
            let id = reports::upsert_report(conn, &report)?;
            let mut report = report;
            report.id = id;
            Ok(report)
        }
    }
}

fn start(cfg: &Config, id: i64) -> AppResult<()> {
    let pool = open_db(cfg)?;
    let mut task = tasks::get_task(&pool.conn, id)?;

    let now = Local::now().naive_local();
    lifecycle::start(&mut task, now)?;
    tasks::update_task(&pool.conn, &task)?;

    // Side effect: a running entry is registered against the assignee's
    // daily report for today.
    ensure_report(&pool.conn, &task.assignee, now.date())?;

    success(format!("Task #{} \"{}\" started.", task.id, task.title));
    info(format!("Tracking time against {}'s daily report for {}.", task.assignee, now.date()));

    log::oplog(
        &pool.conn,
        "task_start",
        &format!("task/{}", task.id),
        &format!("Started by {}", task.assignee),
    )?;
    Ok(())
}

fn done(cfg: &Config, id: i64) -> AppResult<()> {
    let pool = open_db(cfg)?;
    let mut task = tasks::get_task(&pool.conn, id)?;

    let now = Local::now().naive_local();
    lifecycle::complete(&mut task, now)?;
    tasks::update_task(&pool.conn, &task)?;

    //
    // Mirror the worked span into the daily report, when it fits inside
    // one calendar day. The configured daily cap applies to the mirrored
    // entry too; a span that would blow past it is reported, not inserted.
    //
    if let Some(started) = task.started_at {
        if started.date() == now.date() {
            let entry = TimeEntry::new(task.category, started.time(), now.time(), &task.title);
            if entry.hours > 0.0 {
                let report = ensure_report(&pool.conn, &task.assignee, now.date())?;
                match aggregator::check_cap(cfg.daily_cap(), &report.entries, entry.hours) {
                    Ok(()) => {
                        reports::insert_activity(&pool.conn, report.id, &entry)?;
                    }
                    Err(e) => warning(format!("Worked span not mirrored: {}", e)),
                }
            }
        }
    }

    success(format!(
        "Task #{} \"{}\" completed ({:.2}h actual).",
        task.id, task.title, task.actual_hours
    ));

    if task.is_overdue {
        warning(format!("Task finished {} minutes past its due time.", task.overdue_minutes));
    }
    if lifecycle::wants_customer_feedback(&task) {
        info("This was customer-facing work — consider requesting customer feedback.");
    }

    log::oplog(
        &pool.conn,
        "task_done",
        &format!("task/{}", task.id),
        &format!("Completed with {:.2}h actual", task.actual_hours),
    )?;
    Ok(())
}

fn escalate(cfg: &Config, id: i64, reason: &str, reassign: Option<&str>) -> AppResult<()> {
    let pool = open_db(cfg)?;
    let mut task = tasks::get_task(&pool.conn, id)?;

    lifecycle::escalate(&mut task, reason, reassign)?;
    tasks::update_task(&pool.conn, &task)?;

    match reassign {
        Some(person) => success(format!(
            "Task #{} \"{}\" has been escalated and reassigned to {}.",
            task.id, task.title, person
        )),
        None => success(format!("Task #{} \"{}\" has been escalated.", task.id, task.title)),
    }

    log::oplog(
        &pool.conn,
        "task_escalate",
        &format!("task/{}", task.id),
        reason,
    )?;
    Ok(())
}

fn comment(cli: &Cli, cfg: &Config, id: i64, author: Option<&str>, text: &str) -> AppResult<()> {
    let pool = open_db(cfg)?;
    let mut task = tasks::get_task(&pool.conn, id)?;

    let author = author.map(str::to_string).unwrap_or_else(|| resolve_user(cli, cfg));
    let now = Local::now().naive_local();
    let comment = lifecycle::add_comment(&mut task, &author, text, now)?;
    tasks::insert_comment(&pool.conn, &comment)?;

    success(format!("Comment added to task #{}.", task.id));
    Ok(())
}
