//! KPI roll-up: summary statistics over a reporting window.

use crate::models::kpi::KpiEntry;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KpiSummary {
    pub entries: usize,
    pub avg_customer_satisfaction: f64,
    pub avg_timely_delivery: f64,
    pub avg_dcr_maintenance: f64,
    pub lead_generation_total: i64,
    pub technical_escalations_total: i64,
    pub certified_entries: usize,
}

/// Merge a window of KPI entries into averages and sums. Averages are 0.0
/// for an empty window.
pub fn summarize(entries: &[KpiEntry]) -> KpiSummary {
    if entries.is_empty() {
        return KpiSummary::default();
    }

    let n = entries.len() as f64;

    KpiSummary {
        entries: entries.len(),
        avg_customer_satisfaction: entries.iter().map(|e| e.customer_satisfaction as f64).sum::<f64>() / n,
        avg_timely_delivery: entries.iter().map(|e| e.timely_delivery as f64).sum::<f64>() / n,
        avg_dcr_maintenance: entries.iter().map(|e| e.dcr_maintenance).sum::<f64>() / n,
        lead_generation_total: entries.iter().map(|e| e.lead_generation as i64).sum(),
        technical_escalations_total: entries.iter().map(|e| e.technical_escalations as i64).sum(),
        certified_entries: entries.iter().filter(|e| !e.certifications.trim().is_empty()).count(),
    }
}

/// Ratings outside 1–5 are rejected before any write.
pub fn validate_rating(field: &str, value: i32) -> crate::errors::AppResult<()> {
    if !(1..=5).contains(&value) {
        return Err(crate::errors::AppError::Validation(format!(
            "{} must be between 1 and 5 (got {}).",
            field, value
        )));
    }
    Ok(())
}
