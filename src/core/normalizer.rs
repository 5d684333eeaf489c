//! Time-entry normalization: wall-clock pair → quarter-hour duration.

use chrono::NaiveTime;

/// Duration in hours between two times of the same calendar day, quantized
/// to the nearest 0.25.
///
/// end ≤ start yields 0.0; the caller must treat 0 as invalid and refuse
/// to add the entry. Entries crossing midnight are unsupported.
pub fn quantize_hours(from: NaiveTime, to: NaiveTime) -> f64 {
    let minutes = (to - from).num_minutes();
    if minutes <= 0 {
        return 0.0;
    }
    quantize_minutes(minutes)
}

/// Quantize an already-computed span in minutes to quarter-hour units.
/// Negative spans clamp to 0.
pub fn quantize_minutes(minutes: i64) -> f64 {
    if minutes <= 0 {
        return 0.0;
    }
    (minutes as f64 / 60.0 * 4.0).round() / 4.0
}
