//! Formatted output lines for the CLI.
//!
//! Formatting lives in one place so the estimation code stays clean and the
//! output is easy to change without touching any arithmetic.

use crate::duration::format_duration;
use crate::estimate::EstimateResult;

pub fn average_per_chapter_line(avg_minutes: f64) -> String {
    format!(
        "Average per chapter: {} (pauses not included)",
        format_duration(avg_minutes)
    )
}

pub fn speed_per_page_line(speed_min_per_page: f64) -> String {
    format!(
        "Average speed: {:.2} min/page (pauses not included)",
        speed_min_per_page
    )
}

/// The three result lines: point estimate, uncertainty range, projection.
pub fn summary(estimate: &EstimateResult, uncertainty_pct: f64, minutes_per_day: f64) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "Estimated time: {}",
        format_duration(estimate.point_minutes)
    ));
    lines.push(format!(
        "Range (±{:.0}%): {} to {}",
        uncertainty_pct,
        format_duration(estimate.low_minutes),
        format_duration(estimate.high_minutes)
    ));
    lines.push(projection_line(estimate, minutes_per_day));
    lines.join("\n")
}

/// A zero daily budget has no finite projection and must not print as a
/// bare "inf".
pub fn projection_line(estimate: &EstimateResult, minutes_per_day: f64) -> String {
    if estimate.days.is_finite() {
        format!(
            "At {:.0} min/day: about {:.1} days (~{:.1} weeks)",
            minutes_per_day, estimate.days, estimate.weeks
        )
    } else {
        format!("At {:.0} min/day: no finite projection", minutes_per_day)
    }
}
