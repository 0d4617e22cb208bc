//! Elapsed-time formatting for the mount timer display.

/// Format a second count as compact `1h 2m 3s` text.
///
/// Durations under a minute show seconds only; under an hour, minutes and
/// seconds. Larger units never appear as zero-valued prefixes.
pub fn format_elapsed(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, secs)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, secs)
    } else {
        format!("{}s", secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_seconds_only() {
        assert_eq!(format_elapsed(0), "0s");
        assert_eq!(format_elapsed(45), "45s");
        assert_eq!(format_elapsed(59), "59s");
    }

    #[test]
    fn test_minutes_and_seconds() {
        assert_eq!(format_elapsed(60), "1m 0s");
        assert_eq!(format_elapsed(125), "2m 5s");
        assert_eq!(format_elapsed(3599), "59m 59s");
    }

    #[test]
    fn test_hours_minutes_seconds() {
        assert_eq!(format_elapsed(3600), "1h 0m 0s");
        assert_eq!(format_elapsed(3661), "1h 1m 1s");
        assert_eq!(format_elapsed(7322), "2h 2m 2s");
    }

    #[test]
    fn test_hour_boundary_keeps_zero_minutes() {
        // 1h 0m 1s, not 1h 1s
        assert_eq!(format_elapsed(3601), "1h 0m 1s");
    }

    proptest! {
        #[test]
        fn prop_sub_minute_is_bare_seconds(s in 0u64..60) {
            prop_assert_eq!(format_elapsed(s), format!("{}s", s));
        }

        #[test]
        fn prop_sub_hour_splits_on_sixty(s in 60u64..3600) {
            prop_assert_eq!(format_elapsed(s), format!("{}m {}s", s / 60, s % 60));
        }

        #[test]
        fn prop_hours_split_on_thirty_six_hundred(s in 3600u64..1_000_000) {
            prop_assert_eq!(
                format_elapsed(s),
                format!("{}h {}m {}s", s / 3600, (s % 3600) / 60, s % 60)
            );
        }
    }
}
