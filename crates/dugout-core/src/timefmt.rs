//! Time-of-day parsing and formatting.
//!
//! Task and game times arrive from user input and legacy rows in a mix of
//! 24-hour (`"14:30"`, `"14:30:00"`) and 12-hour (`"2:30 PM"`) forms. All
//! of them are validated into [`chrono::NaiveTime`] at this boundary; a
//! string that matches none of the accepted shapes is rejected with
//! [`CoreError::MalformedTime`] instead of flowing onward as garbage.

use crate::error::CoreError;
use chrono::{NaiveTime, Timelike};

const ACCEPTED_FORMATS: [&str; 4] = [
    "%H:%M:%S", // 14:30:00
    "%H:%M",    // 14:30
    "%I:%M:%S %p", // 2:30:00 PM
    "%I:%M %p", // 2:30 PM
];

/// Parses a wall-clock time-of-day string.
pub fn parse_time_of_day(input: &str) -> Result<NaiveTime, CoreError> {
    let trimmed = input.trim();
    // %p only matches upper-case meridiems; normalize once up front
    let upper = trimmed.to_uppercase();

    for format in ACCEPTED_FORMATS {
        if let Ok(time) = NaiveTime::parse_from_str(&upper, format) {
            return Ok(time);
        }
    }

    Err(CoreError::MalformedTime(input.to_string()))
}

/// Formats a time for display, e.g. `7:05 PM`.
pub fn format_12h(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Zero-padded 24-hour form, e.g. `19:05`.
pub fn format_24h(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Minutes elapsed since local midnight.
pub fn minutes_since_midnight(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("14:30", 14, 30)]
    #[case("09:00", 9, 0)]
    #[case("9:00 AM", 9, 0)]
    #[case("2:30 PM", 14, 30)]
    #[case("2:30 pm", 14, 30)]
    #[case("12:00 AM", 0, 0)]
    #[case("12:00 PM", 12, 0)]
    #[case("19:05:00", 19, 5)]
    #[case("  7:15 PM ", 19, 15)]
    fn test_parse_accepted_forms(#[case] input: &str, #[case] hour: u32, #[case] minute: u32) {
        let time = parse_time_of_day(input).unwrap();
        assert_eq!(time, NaiveTime::from_hms_opt(hour, minute, 0).unwrap());
    }

    #[rstest]
    #[case("")]
    #[case("noonish")]
    #[case("25:00")]
    #[case("14:61")]
    #[case("14.30")]
    #[case("7 PM-ish")]
    fn test_parse_rejects_malformed(#[case] input: &str) {
        assert!(matches!(
            parse_time_of_day(input),
            Err(CoreError::MalformedTime(_))
        ));
    }

    #[test]
    fn test_format_12h() {
        assert_eq!(format_12h(NaiveTime::from_hms_opt(19, 5, 0).unwrap()), "7:05 PM");
        assert_eq!(format_12h(NaiveTime::from_hms_opt(0, 30, 0).unwrap()), "12:30 AM");
    }

    #[test]
    fn test_minutes_since_midnight() {
        assert_eq!(minutes_since_midnight(NaiveTime::from_hms_opt(0, 0, 0).unwrap()), 0);
        assert_eq!(minutes_since_midnight(NaiveTime::from_hms_opt(12, 0, 0).unwrap()), 720);
        assert_eq!(minutes_since_midnight(NaiveTime::from_hms_opt(19, 0, 0).unwrap()), 1140);
    }
}
