//! Tests for relative timestamp formatting.

use chrono::{Duration, TimeZone, Utc};

use crate::client::util::time::format_time_ago;

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

/// Expect sub-minute intervals to read as "just now".
#[test]
fn formats_recent_as_just_now() {
    assert_eq!(format_time_ago(now() - Duration::seconds(30), now()), "just now");
}

/// Expect minute and hour intervals with singular/plural handling.
#[test]
fn formats_minutes_and_hours() {
    assert_eq!(
        format_time_ago(now() - Duration::minutes(1), now()),
        "1 minute ago"
    );
    assert_eq!(
        format_time_ago(now() - Duration::minutes(5), now()),
        "5 minutes ago"
    );
    assert_eq!(format_time_ago(now() - Duration::hours(1), now()), "1 hour ago");
    assert_eq!(
        format_time_ago(now() - Duration::hours(23), now()),
        "23 hours ago"
    );
}

/// Expect day, week, month, and year buckets.
#[test]
fn formats_longer_intervals() {
    assert_eq!(format_time_ago(now() - Duration::days(3), now()), "3 days ago");
    assert_eq!(format_time_ago(now() - Duration::days(14), now()), "2 weeks ago");
    assert_eq!(format_time_ago(now() - Duration::days(90), now()), "3 months ago");
    assert_eq!(format_time_ago(now() - Duration::days(730), now()), "2 years ago");
}

/// Expect future timestamps (clock skew) to read as "just now" rather than
/// a negative interval.
#[test]
fn clamps_future_timestamps() {
    assert_eq!(format_time_ago(now() + Duration::minutes(5), now()), "just now");
}
