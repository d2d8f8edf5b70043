//! Time utilities: minute truncation and rounding.

use chrono::{NaiveDateTime, NaiveTime, TimeDelta, Timelike};

/// Wall-clock time at minute precision (seconds and sub-seconds dropped).
pub fn truncate_to_minute(t: NaiveTime) -> NaiveTime {
    t.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(t)
}

/// Whole minutes in `delta`, rounding half-up on the seconds remainder:
/// 29s rounds down, 30s rounds up. Negative deltas are mirrored (-90s → -2).
pub fn round_minutes(delta: TimeDelta) -> i64 {
    let secs = delta.num_seconds();
    if secs >= 0 {
        (secs + 30) / 60
    } else {
        -((-secs + 30) / 60)
    }
}

pub fn minutes_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    round_minutes(end - start)
}
