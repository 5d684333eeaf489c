use chrono::{Local, NaiveDate};
use serde::Serialize;

/// One person's periodic performance snapshot.
/// At most one entry exists per (user_id, date); writes are full replaces.
#[derive(Debug, Clone, Serialize)]
pub struct KpiEntry {
    pub id: i64,
    pub user_id: String,
    pub date: NaiveDate,
    pub customer_satisfaction: i32, // 1–5
    pub timely_delivery: i32,       // 1–5
    pub certifications: String,
    pub lead_generation: i32,
    pub dcr_maintenance: f64, // 1–5, auto-populated from the DCR engine
    pub technical_escalations: i32,
    pub notes: String,
    pub created_at: String,
}

impl KpiEntry {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_id: &str,
        date: NaiveDate,
        customer_satisfaction: i32,
        timely_delivery: i32,
        certifications: &str,
        lead_generation: i32,
        dcr_maintenance: f64,
        technical_escalations: i32,
        notes: &str,
    ) -> Self {
        Self {
            id: 0,
            user_id: user_id.to_string(),
            date,
            customer_satisfaction,
            timely_delivery,
            certifications: certifications.to_string(),
            lead_generation,
            dcr_maintenance,
            technical_escalations,
            notes: notes.to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }
}
