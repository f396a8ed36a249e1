//! Formatting utilities

use chrono::{DateTime, Duration, Local};

/// Format remaining seconds as `MM:SS`.
///
/// Negative values only exist for the instant before a rollover and are shown
/// as `00:00`.
pub fn clock(seconds: i64) -> String {
    let seconds = seconds.max(0);
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Format a timestamp as HH:MM
pub fn time(dt: DateTime<Local>) -> String {
    dt.format("%H:%M").to_string()
}

/// Wall-clock time at which `remaining` seconds will have elapsed after `now`
pub fn ends_at(now: DateTime<Local>, remaining: i64) -> DateTime<Local> {
    now + Duration::seconds(remaining.max(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_clock() {
        assert_eq!(clock(25 * 60), "25:00");
        assert_eq!(clock(61), "01:01");
        assert_eq!(clock(0), "00:00");
        assert_eq!(clock(-1), "00:00");
        assert_eq!(clock(3600), "60:00");
    }

    #[test]
    fn test_ends_at() {
        let now = Local.with_ymd_and_hms(2024, 3, 1, 9, 50, 0).unwrap();
        assert_eq!(time(ends_at(now, 25 * 60)), "10:15");
        assert_eq!(ends_at(now, -5), now);
    }
}
