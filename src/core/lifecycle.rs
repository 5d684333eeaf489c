//! Task lifecycle: Pending → InProgress → Completed, with escalation from
//! either non-terminal state. Escalated is terminal.

use crate::core::normalizer;
use crate::errors::{AppError, AppResult};
use crate::models::task::{Task, TaskComment, TaskStatus};
use chrono::NaiveDateTime;

/// Begin work on a pending task. Stamps started_at and moves to InProgress.
/// The caller registers the running entry against the assignee's daily
/// report for the day.
pub fn start(task: &mut Task, now: NaiveDateTime) -> AppResult<()> {
    if task.status != TaskStatus::Pending {
        return Err(AppError::TaskTransition(format!(
            "task {} cannot be started from status '{}'",
            task.id,
            task.status.to_db_str()
        )));
    }
    task.status = TaskStatus::InProgress;
    task.started_at = Some(now);
    Ok(())
}

/// Finish an in-progress task.
///
/// actual_hours is the started→completed span quantized to 0.25. For
/// time-based tasks the due instant is the completion date plus the due
/// time-of-day; finishing past it marks the task overdue with the floor of
/// the delta in minutes. Date-based tasks are never marked overdue.
pub fn complete(task: &mut Task, now: NaiveDateTime) -> AppResult<()> {
    if task.status != TaskStatus::InProgress {
        return Err(AppError::TaskTransition(format!(
            "task {} cannot be completed from status '{}'",
            task.id,
            task.status.to_db_str()
        )));
    }

    let started = task.started_at.ok_or_else(|| {
        AppError::Other(format!("task {} is in progress but has no start timestamp", task.id))
    })?;

    task.status = TaskStatus::Completed;
    task.completed_at = Some(now);
    task.actual_hours = normalizer::quantize_minutes((now - started).num_minutes());

    if let Some(due_time) = task.due_time {
        let due_instant = now.date().and_time(due_time);
        if now > due_instant {
            task.is_overdue = true;
            task.overdue_minutes = (now - due_instant).num_minutes();
        } else {
            task.is_overdue = false;
            task.overdue_minutes = 0;
        }
    }

    Ok(())
}

/// Escalate a pending or in-progress task. Requires a non-empty reason;
/// an optional reassignee replaces the current assignee.
pub fn escalate(task: &mut Task, reason: &str, reassignee: Option<&str>) -> AppResult<()> {
    if !matches!(task.status, TaskStatus::Pending | TaskStatus::InProgress) {
        return Err(AppError::TaskTransition(format!(
            "task {} cannot be escalated from status '{}'",
            task.id,
            task.status.to_db_str()
        )));
    }
    if reason.trim().is_empty() {
        return Err(AppError::Validation("Please provide an escalation reason.".into()));
    }

    task.status = TaskStatus::Escalated;
    task.escalation_reason = Some(reason.trim().to_string());
    if let Some(person) = reassignee {
        task.assignee = person.to_string();
    }
    Ok(())
}

/// Append a comment. The only validation is non-empty text.
pub fn add_comment(task: &mut Task, author: &str, text: &str, now: NaiveDateTime) -> AppResult<TaskComment> {
    if text.trim().is_empty() {
        return Err(AppError::Validation("Comment text cannot be empty.".into()));
    }
    let comment = TaskComment {
        id: 0,
        task_id: task.id,
        author: author.to_string(),
        text: text.trim().to_string(),
        created_at: now.format(crate::models::task::DATETIME_FMT).to_string(),
    };
    task.comments.push(comment.clone());
    Ok(comment)
}

/// Completed trainer-facing work (demo or corporate training) prompts the
/// shell to request customer feedback.
pub fn wants_customer_feedback(task: &Task) -> bool {
    task.status == TaskStatus::Completed && task.category.is_trainer_facing()
}
