//! Draft/submit rules and the trailing editability window.

use crate::errors::{AppError, AppResult};
use crate::models::attendance::AttendanceStatus;
use crate::models::report::DailyReport;
use chrono::NaiveDate;

/// A date is editable if it falls within [today - window_days, today].
/// Future dates are not editable.
pub fn is_date_editable(date: NaiveDate, today: NaiveDate, window_days: i64) -> bool {
    let diff_days = (today - date).num_days();
    diff_days >= 0 && diff_days <= window_days
}

/// A report is editable only if NOT submitted AND within the trailing
/// window. Submission freezes a report even inside the window.
pub fn is_report_editable(report: &DailyReport, today: NaiveDate, window_days: i64) -> bool {
    !report.is_submitted() && is_date_editable(report.date, today, window_days)
}

/// Reject mutation of a locked report before any persistence call.
pub fn ensure_editable(report: &DailyReport, today: NaiveDate, window_days: i64) -> AppResult<()> {
    if report.is_submitted() {
        return Err(AppError::ReportLocked(
            report.date_str(),
            "report has already been submitted".into(),
        ));
    }
    if !is_date_editable(report.date, today, window_days) {
        return Err(AppError::ReportLocked(
            report.date_str(),
            format!("date is outside the {}-day editing window", window_days),
        ));
    }
    Ok(())
}

/// saveDraft requires at least one entry.
pub fn validate_draft(report: &DailyReport) -> AppResult<()> {
    if report.entries.is_empty() {
        return Err(AppError::Validation(
            "Cannot save a draft with no activity entries.".into(),
        ));
    }
    Ok(())
}

/// submitFinal additionally requires an attendance status.
pub fn validate_submit(report: &DailyReport, attendance: Option<AttendanceStatus>) -> AppResult<()> {
    validate_draft(report)?;
    if attendance.or(report.attendance).is_none() {
        return Err(AppError::Validation(
            "Please select an attendance status before submitting.".into(),
        ));
    }
    Ok(())
}
