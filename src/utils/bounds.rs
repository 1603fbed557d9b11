//! Timestamp arithmetic helpers

/// Apply clock skew to a timestamp, saturating at the `i64` bounds
pub(crate) fn apply_clock_skew(timestamp: i64, skew_seconds: u64, add: bool) -> i64 {
    let skew = i64::try_from(skew_seconds).unwrap_or(i64::MAX);
    if add {
        timestamp.saturating_add(skew)
    } else {
        timestamp.saturating_sub(skew)
    }
}
