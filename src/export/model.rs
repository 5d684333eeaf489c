use crate::core::aggregator;
use crate::models::report::DailyReport;
use serde::Serialize;

/// Flat row for export: one line per activity, with the day's aggregates
/// repeated on each line.
#[derive(Serialize, Clone, Debug)]
pub struct ReportExportRow {
    pub user: String,
    pub date: String,
    pub attendance: String,
    pub status: String,
    pub category: String,
    pub from_time: String,
    pub to_time: String,
    pub hours: f64,
    pub billable: bool,
    pub notes: String,
    pub day_total_hours: f64,
    pub day_billable_hours: f64,
    pub day_productivity_pct: f64,
}

pub(crate) fn flatten_reports(reports: &[DailyReport]) -> Vec<ReportExportRow> {
    let mut rows = Vec::new();

    for report in reports {
        let totals = aggregator::day_totals(&report.entries);
        let status = if report.is_submitted() { "submitted" } else { "draft" };
        let attendance = report
            .attendance
            .map(|a| a.to_db_str().to_string())
            .unwrap_or_default();

        for entry in &report.entries {
            rows.push(ReportExportRow {
                user: report.user_id.clone(),
                date: report.date_str(),
                attendance: attendance.clone(),
                status: status.to_string(),
                category: entry.category.to_db_str().to_string(),
                from_time: entry.from_str(),
                to_time: entry.to_str(),
                hours: entry.hours,
                billable: entry.is_billable,
                notes: entry.notes.clone(),
                day_total_hours: totals.total_hours,
                day_billable_hours: totals.billable_hours,
                day_productivity_pct: totals.productivity_pct,
            });
        }
    }

    rows
}
