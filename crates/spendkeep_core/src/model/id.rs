//! Timestamp-derived record identifiers.

/// Returns the first epoch-millisecond value `>= now_ms` that `is_taken`
/// does not report as used.
///
/// Records created within the same millisecond would otherwise collide.
pub fn next_timestamp_id(now_ms: i64, is_taken: impl Fn(i64) -> bool) -> i64 {
    let mut candidate = now_ms;
    while is_taken(candidate) {
        candidate = candidate.saturating_add(1);
    }
    candidate
}

#[cfg(test)]
mod tests {
    use super::next_timestamp_id;

    #[test]
    fn free_timestamp_is_used_as_is() {
        assert_eq!(next_timestamp_id(1_700_000_000_000, |_| false), 1_700_000_000_000);
    }

    #[test]
    fn taken_timestamps_bump_forward() {
        let taken = [10_i64, 11, 12];
        assert_eq!(next_timestamp_id(10, |value| taken.contains(&value)), 13);
    }
}
