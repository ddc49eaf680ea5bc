use std::time::Duration;

/// Format a wall-clock duration as `HH:MM:SS.ss`
pub fn format_elapsed(elapsed: Duration) -> String {
    let total = elapsed.as_secs_f64();
    let hours = (total / 3600.0).floor();
    let remainder = total - hours * 3600.0;
    let minutes = (remainder / 60.0).floor();
    let seconds = remainder - minutes * 60.0;

    format!("{:02}:{:02}:{:05.2}", hours as u64, minutes as u64, seconds)
}
