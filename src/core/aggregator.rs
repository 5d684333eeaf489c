//! Daily aggregation: fold a report's time entries into day totals.

use crate::errors::{AppError, AppResult};
use crate::models::time_entry::TimeEntry;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DayTotals {
    pub total_hours: f64,
    pub billable_hours: f64,
    pub non_billable_hours: f64,
    pub productivity_pct: f64,
}

/// Re-derive the four aggregates from the current entry set.
/// Invariant: total_hours == billable_hours + non_billable_hours.
pub fn day_totals(entries: &[TimeEntry]) -> DayTotals {
    let total_hours: f64 = entries.iter().map(|e| e.hours).sum();
    let billable_hours: f64 = entries.iter().filter(|e| e.is_billable).map(|e| e.hours).sum();

    let productivity_pct = if total_hours > 0.0 {
        (billable_hours / total_hours * 100.0 * 10.0).round() / 10.0
    } else {
        0.0
    };

    DayTotals {
        total_hours,
        billable_hours,
        non_billable_hours: total_hours - billable_hours,
        productivity_pct,
    }
}

/// Ceiling on logged hours per day. The trainer profile runs with an
/// 8-hour cap; the general report is unlimited.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DailyCap {
    Unlimited,
    Hours(f64),
}

impl Default for DailyCap {
    fn default() -> Self {
        Self::Unlimited
    }
}

/// Refuse an entry that would push the day's total above the cap.
pub fn check_cap(cap: DailyCap, entries: &[TimeEntry], adding_hours: f64) -> AppResult<()> {
    if let DailyCap::Hours(limit) = cap {
        let logged = day_totals(entries).total_hours;
        if logged + adding_hours > limit {
            return Err(AppError::Validation(format!(
                "Adding {:.2} hours would exceed the {:.0}-hour daily limit. You have {:.2} hours remaining.",
                adding_hours,
                limit,
                (limit - logged).max(0.0)
            )));
        }
    }
    Ok(())
}
