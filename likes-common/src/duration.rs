/// Format a duration in milliseconds as M:SS.
///
/// Seconds are rounded to the nearest whole second and a rounded-up 60
/// carries into the minutes, so the seconds field is always below 60.
pub fn format_duration(duration_ms: u64) -> String {
    let total_seconds = duration_ms / 1000 + u64::from(duration_ms % 1000 >= 500);
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{}:{:02}", minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_values() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(59_000), "0:59");
        assert_eq!(format_duration(65_000), "1:05");
        assert_eq!(format_duration(600_000), "10:00");
    }

    #[test]
    fn rounds_to_nearest_second() {
        assert_eq!(format_duration(65_499), "1:05");
        assert_eq!(format_duration(65_500), "1:06");
        assert_eq!(format_duration(212_345), "3:32");
    }

    #[test]
    fn rounding_carries_into_minutes() {
        assert_eq!(format_duration(119_600), "2:00");
        assert_eq!(format_duration(59_500), "1:00");
    }

    #[test]
    fn largest_duration_does_not_overflow() {
        let secs = u64::MAX / 1000 + 1;
        assert_eq!(
            format_duration(u64::MAX),
            format!("{}:{:02}", secs / 60, secs % 60)
        );
        assert_eq!(format_duration(u64::MAX - 115), format_duration(u64::MAX));
    }

    #[test]
    fn seconds_never_reach_sixty() {
        for ms in (0..7_200_000u64).step_by(100) {
            let formatted = format_duration(ms);
            let (_, secs) = formatted.split_once(':').unwrap();
            assert_eq!(secs.len(), 2, "{formatted}");
            assert!(secs.parse::<u32>().unwrap() < 60, "{ms} ms -> {formatted}");
        }
    }
}
