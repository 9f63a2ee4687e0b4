//! Human-readable rendering of minute counts.

/// Converts a minute count to an (hours, minutes, seconds) triple.
///
/// Rounds `total_min * 60` to the nearest whole second first, so values like
/// 89.999 land on 1h30m rather than 1h29m59s. Callers must pass a
/// non-negative value.
pub fn to_hms(total_min: f64) -> (u64, u64, u64) {
    let total_sec = (total_min * 60.0).round() as u64;
    let h = total_sec / 3600;
    let m = (total_sec % 3600) / 60;
    let s = total_sec % 60;
    (h, m, s)
}

/// Formats a minute count as "2 h 15 min", "45 min", or "30 s".
///
/// Seconds only appear when both hours and minutes are zero; "1 h 0 min 30 s"
/// renders as "1 h". Readability over precision.
pub fn format_duration(total_min: f64) -> String {
    let (h, m, s) = to_hms(total_min);
    let mut parts = Vec::new();
    if h > 0 {
        parts.push(format!("{} h", h));
    }
    if m > 0 {
        parts.push(format!("{} min", m));
    }
    if h == 0 && m == 0 {
        parts.push(format!("{} s", s));
    }
    parts.join(" ")
}
