use super::attendance::AttendanceStatus;
use super::time_entry::TimeEntry;
use chrono::{Local, NaiveDate};
use serde::Serialize;

/// One person's record for one calendar date.
/// At most one report exists per (user_id, date); writes are upserts.
#[derive(Debug, Clone, Serialize)]
pub struct DailyReport {
    pub id: i64,
    pub user_id: String,
    pub date: NaiveDate,
    pub attendance: Option<AttendanceStatus>,
    pub general_notes: String,
    pub submitted_at: Option<String>, // absent = draft
    pub entries: Vec<TimeEntry>,
    pub created_at: String,
    pub updated_at: String,
}

impl DailyReport {
    pub fn new(user_id: &str, date: NaiveDate) -> Self {
        let now = Local::now().to_rfc3339();
        Self {
            id: 0,
            user_id: user_id.to_string(),
            date,
            attendance: None,
            general_notes: String::new(),
            submitted_at: None,
            entries: Vec::new(),
            created_at: now.clone(),
            updated_at: now,
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted_at.is_some()
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
