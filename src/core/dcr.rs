//! DCR score engine: a day's task outcomes → bounded 1–5 score.

use crate::models::task::{Task, TaskStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct DcrInsights {
    pub score: f64,
    pub total_tasks: usize,
    pub completed: usize,
    pub overdue: usize,
    pub total_overdue_minutes: i64,
    pub message: &'static str,
}

/// Score the given day's task entries.
///
/// Start at 5; lose up to 2 points for incomplete work
/// ((1 - completionRate) * 2) and up to 2 for lateness
/// (min(overdueHours * 0.5, 2)). Clamp to [1, 5], one decimal.
/// Zero entries score 1: inactivity is penalized.
pub fn compute_score(tasks: &[Task]) -> f64 {
    if tasks.is_empty() {
        return 1.0;
    }

    let mut score = 5.0;
    let mut completed = 0usize;
    let mut total_overdue_minutes = 0i64;

    for task in tasks {
        if task.status == TaskStatus::Completed {
            completed += 1;
            if task.is_overdue {
                total_overdue_minutes += task.overdue_minutes;
            }
        }
    }

    let completion_rate = completed as f64 / tasks.len() as f64;
    if completion_rate < 1.0 {
        score -= (1.0 - completion_rate) * 2.0;
    }

    if total_overdue_minutes > 0 {
        let overdue_hours = total_overdue_minutes as f64 / 60.0;
        score -= (overdue_hours * 0.5).min(2.0);
    }

    ((score * 10.0).round() / 10.0).clamp(1.0, 5.0)
}

pub fn message_for(score: f64) -> &'static str {
    if score >= 4.5 {
        "Excellent performance! Keep up the great work."
    } else if score >= 3.5 {
        "Good performance with room for improvement."
    } else if score >= 2.5 {
        "Average performance. Focus on completing tasks on time."
    } else {
        "Performance needs improvement. Consider better time management."
    }
}

/// Score plus the counters behind it, for display.
pub fn insights(tasks: &[Task]) -> DcrInsights {
    let score = compute_score(tasks);
    let completed = tasks.iter().filter(|t| t.status == TaskStatus::Completed).count();
    let overdue = tasks.iter().filter(|t| t.is_overdue).count();
    let total_overdue_minutes = tasks.iter().filter(|t| t.is_overdue).map(|t| t.overdue_minutes).sum();

    DcrInsights {
        score,
        total_tasks: tasks.len(),
        completed,
        overdue,
        total_overdue_minutes,
        message: message_for(score),
    }
}
