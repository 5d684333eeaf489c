use chrono::NaiveDate;
use serde::Serialize;

/// A sales lead spawned from a demo activity. Plain record; the lead
/// pipeline itself carries no engine logic.
#[derive(Debug, Clone, Serialize)]
pub struct SalesLead {
    pub id: i64,
    pub company_name: String,
    pub contact_person: String,
    pub lead_source: String,
    pub assigned_to: String,
    pub status: String,
    pub demo_date: NaiveDate,
    pub demo_notes: String,
    pub notes: String,
    pub created_at: String,
}
