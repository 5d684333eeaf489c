use super::category::ActivityCategory;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

pub const DATETIME_FMT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
    Escalated,
}

impl TaskStatus {
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "in-progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            "escalated" => Some(Self::Escalated),
            _ => None,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Escalated => "escalated",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            _ => None,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskComment {
    pub id: i64,
    pub task_id: i64,
    pub author: String,
    pub text: String,
    pub created_at: String,
}

/// An assignable unit of work.
///
/// Tasks carrying a due time-of-day are "time-based" and participate in
/// overdue detection; date-based tasks (no due time) are never overdue.
#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub assignee: String,
    pub assigned_by: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub billable: bool,
    pub category: ActivityCategory,
    pub client: Option<String>,
    pub due_date: NaiveDate,
    pub due_time: Option<NaiveTime>,
    pub estimated_hours: f64,
    pub actual_hours: f64, // meaningful only once status = Completed
    pub tags: Vec<String>, // stored as JSON text
    pub started_at: Option<NaiveDateTime>,
    pub completed_at: Option<NaiveDateTime>,
    pub is_overdue: bool,
    pub overdue_minutes: i64,
    pub escalation_reason: Option<String>,
    pub comments: Vec<TaskComment>,
    pub created_at: String,
    pub updated_at: String,
}

impl Task {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: &str,
        description: &str,
        assignee: &str,
        assigned_by: &str,
        priority: Priority,
        category: ActivityCategory,
        client: Option<String>,
        due_date: NaiveDate,
        due_time: Option<NaiveTime>,
        estimated_hours: f64,
        tags: Vec<String>,
    ) -> Self {
        let now = Local::now().to_rfc3339();
        Self {
            id: 0,
            title: title.to_string(),
            description: description.to_string(),
            assignee: assignee.to_string(),
            assigned_by: assigned_by.to_string(),
            priority,
            status: TaskStatus::Pending,
            billable: category.is_billable(),
            category,
            client,
            due_date,
            due_time,
            estimated_hours,
            actual_hours: 0.0,
            tags,
            started_at: None,
            completed_at: None,
            is_overdue: false,
            overdue_minutes: 0,
            escalation_reason: None,
            comments: Vec::new(),
            created_at: now.clone(),
            updated_at: now,
        }
    }
}
