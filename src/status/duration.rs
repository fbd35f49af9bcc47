/// Compact countdown string: "1h 1m 1s", "2m", "59s".
///
/// Zero components are omitted; anything at or below zero is "0s".
pub fn format_duration(secs: i64) -> String {
    if secs <= 0 {
        return "0s".to_string();
    }

    let hours = secs / 3600;
    let mins = (secs % 3600) / 60;
    let rest = secs % 60;

    let parts: Vec<String> = [(hours, 'h'), (mins, 'm'), (rest, 's')]
        .into_iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, unit)| format!("{}{}", value, unit))
        .collect();

    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_zero_and_negative() {
        assert_eq!(format_duration(0), "0s");
        assert_eq!(format_duration(-5), "0s");
        assert_eq!(format_duration(i64::MIN), "0s");
    }

    #[test]
    fn test_format_duration_all_components() {
        assert_eq!(format_duration(3661), "1h 1m 1s");
    }

    #[test]
    fn test_format_duration_single_components() {
        assert_eq!(format_duration(59), "59s");
        assert_eq!(format_duration(60), "1m");
        assert_eq!(format_duration(3600), "1h");
    }

    #[test]
    fn test_format_duration_skips_middle_zero() {
        assert_eq!(format_duration(3605), "1h 5s");
        assert_eq!(format_duration(7260), "2h 1m");
    }

    #[test]
    fn test_format_duration_hours_unit_threshold() {
        for secs in [0, 1, 59, 60, 3599, 3600, 3601, 86_399, 90_000] {
            let formatted = format_duration(secs);
            assert_eq!(formatted.contains('h'), secs >= 3600, "{} -> {}", secs, formatted);
        }
    }

    #[test]
    fn test_format_duration_large_value() {
        assert_eq!(format_duration(100 * 3600 + 1), "100h 1s");
    }
}
