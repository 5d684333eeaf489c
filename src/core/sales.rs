//! Side-effect hook: a demo time entry spawns a sales lead.

use crate::models::lead::SalesLead;
use crate::models::time_entry::TimeEntry;
use chrono::{Local, NaiveDate};
use regex::Regex;

/// Build a lead record from a demo activity. The company name is guessed
/// from the entry notes; when nothing matches, a dated placeholder is used.
pub fn lead_from_demo_entry(entry: &TimeEntry, user: &str, date: NaiveDate) -> SalesLead {
    let company_name = extract_company_name(&entry.notes)
        .unwrap_or_else(|| format!("Demo Client - {}", date.format("%Y-%m-%d")));

    SalesLead {
        id: 0,
        company_name,
        contact_person: "TBD".to_string(),
        lead_source: "Demo Report".to_string(),
        assigned_to: user.to_string(),
        status: "demo-given".to_string(),
        demo_date: date,
        demo_notes: entry.notes.clone(),
        notes: format!(
            "Auto-generated from daily report demo entry. Demo conducted by {} on {} - {}",
            user,
            entry.from_str(),
            entry.to_str()
        ),
        created_at: Local::now().to_rfc3339(),
    }
}

/// Look for common "for/with/at Company" patterns in free-text notes.
pub fn extract_company_name(notes: &str) -> Option<String> {
    let patterns = [
        r"(?i)for\s+([A-Z][a-zA-Z\s&]+?)(?:\s|$|\.)",
        r"(?i)with\s+([A-Z][a-zA-Z\s&]+?)(?:\s|$|\.)",
        r"(?i)at\s+([A-Z][a-zA-Z\s&]+?)(?:\s|$|\.)",
        r"(?i)([A-Z][a-zA-Z\s&]{2,20})\s+(?:demo|presentation|training)",
    ];

    for pattern in patterns {
        let re = Regex::new(pattern).ok()?;
        if let Some(caps) = re.captures(notes) {
            if let Some(m) = caps.get(1) {
                let name = m.as_str().trim();
                if !name.is_empty() {
                    return Some(name.to_string());
                }
            }
        }
    }

    None
}
