// Display formatting helpers.
// Pure conversions from counts and timestamps to the strings shown in the UI.

use chrono::{DateTime, Utc};

/// Placeholder shown when a count is missing altogether.
pub const MISSING_COUNT: &str = "Undefined";

/// Largest unit first; the first one that fits at least once wins.
const UNITS: [(&str, i64); 7] = [
    ("year", 31_536_000),
    ("month", 2_592_000),
    ("week", 604_800),
    ("day", 86_400),
    ("hour", 3_600),
    ("minute", 60),
    ("second", 1),
];

/// Format a count with US thousands separators (e.g., "1,234").
pub fn format_count(count: Option<u64>) -> String {
    let Some(count) = count else {
        return MISSING_COUNT.to_string();
    };

    let digits = count.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format a timestamp as relative time (e.g., "3 days ago").
pub fn format_relative_time(dt: &DateTime<Utc>) -> String {
    relative_time_since(dt, Utc::now())
}

/// Relative time of `dt` as seen from `now`.
/// Timestamps in the future read as "Just now".
pub fn relative_time_since(dt: &DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(*dt).num_seconds();

    for (label, seconds) in UNITS {
        let value = elapsed / seconds;
        if value >= 1 {
            let plural = if value > 1 { "s" } else { "" };
            return format!("{} {}{} ago", value, label, plural);
        }
    }

    "Just now".to_string()
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn ago(now: DateTime<Utc>, seconds: i64) -> String {
        relative_time_since(&(now - Duration::seconds(seconds)), now)
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(Some(0)), "0");
        assert_eq!(format_count(Some(999)), "999");
        assert_eq!(format_count(Some(1234)), "1,234");
        assert_eq!(format_count(Some(100_000)), "100,000");
        assert_eq!(format_count(Some(1_234_567)), "1,234,567");
        assert_eq!(format_count(None), "Undefined");
    }

    #[test]
    fn test_relative_time_units() {
        let now = Utc::now();

        assert_eq!(ago(now, 0), "Just now");
        assert_eq!(ago(now, 1), "1 second ago");
        assert_eq!(ago(now, 45), "45 seconds ago");
        assert_eq!(ago(now, 60), "1 minute ago");
        assert_eq!(ago(now, 7_200), "2 hours ago");
        assert_eq!(ago(now, 90_000), "1 day ago");
        assert_eq!(ago(now, 2 * 86_400), "2 days ago");
        assert_eq!(ago(now, 604_800), "1 week ago");
        assert_eq!(ago(now, 3 * 2_592_000), "3 months ago");
        assert_eq!(ago(now, 31_536_000), "1 year ago");
    }

    #[test]
    fn test_relative_time_largest_unit_wins() {
        let now = Utc::now();

        // 13 days is under two weeks but more than one
        assert_eq!(ago(now, 13 * 86_400), "1 week ago");
        // 364 days is under a year
        assert_eq!(ago(now, 364 * 86_400), "12 months ago");
    }

    #[test]
    fn test_relative_time_future_is_just_now() {
        let now = Utc::now();
        assert_eq!(ago(now, -30), "Just now");
    }

    #[test]
    fn test_format_relative_time_uses_clock() {
        let earlier = Utc::now() - Duration::seconds(120);
        assert_eq!(format_relative_time(&earlier), "2 minutes ago");
    }
}
