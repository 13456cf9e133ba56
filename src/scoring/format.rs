/// Formats a distance for display, switching precision with magnitude.
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{} m", meters.round() as i64)
    } else if meters < 10_000.0 {
        format!("{:.2} km", meters / 1000.0)
    } else if meters < 100_000.0 {
        format!("{:.1} km", meters / 1000.0)
    } else {
        format!("{} km", (meters / 1000.0).round() as i64)
    }
}

/// Formats elapsed whole seconds as `M:SS`.
pub fn format_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
