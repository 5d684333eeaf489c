use super::category::ActivityCategory;
use crate::core::normalizer;
use chrono::{Local, NaiveTime};
use serde::Serialize;

/// One block of logged work inside a daily report.
///
/// Hours and billability are derived once at construction and stored;
/// entries are immutable after creation (delete + re-add to change).
#[derive(Debug, Clone, Serialize)]
pub struct TimeEntry {
    pub id: i64,
    pub report_id: i64,
    pub category: ActivityCategory,
    pub from_time: NaiveTime, // ⇔ report_activities.from_time (TEXT "HH:MM")
    pub to_time: NaiveTime,   // ⇔ report_activities.to_time (TEXT "HH:MM")
    pub hours: f64,           // quantized to 0.25
    pub notes: String,
    pub is_billable: bool,
    pub created_at: String, // ISO8601
}

impl TimeEntry {
    /// Build an entry from a wall-clock pair; hours come out quantized and
    /// billability is resolved from the category table. A zero-hour result
    /// means the pair was invalid and the entry must not be added.
    pub fn new(category: ActivityCategory, from_time: NaiveTime, to_time: NaiveTime, notes: &str) -> Self {
        Self {
            id: 0,
            report_id: 0,
            category,
            from_time,
            to_time,
            hours: normalizer::quantize_hours(from_time, to_time),
            notes: notes.to_string(),
            is_billable: category.is_billable(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn from_str(&self) -> String {
        self.from_time.format("%H:%M").to_string()
    }

    pub fn to_str(&self) -> String {
        self.to_time.format("%H:%M").to_string()
    }
}
