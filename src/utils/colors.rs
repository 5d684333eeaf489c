/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Score color for DCR / KPI ratings:
/// ≥4.5 → green, ≥2.5 → yellow, else red.
pub fn color_for_score(score: f64) -> &'static str {
    if score >= 4.5 {
        GREEN
    } else if score >= 2.5 {
        YELLOW
    } else {
        RED
    }
}
