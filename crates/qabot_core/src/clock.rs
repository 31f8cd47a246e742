//! 12-hour clock labels for chat timestamps.
//!
//! Every message carries the wall-clock time it was rendered at. The label is
//! `"{hour}:{minute} {AM|PM}"` with the hour in 1..=12 and the minute padded to
//! two digits, e.g. `9:05 AM`, `12:00 PM`.

use std::sync::Arc;

use chrono::{NaiveTime, Timelike};

/// Source of "now" for new messages. Injected so tests can pin the time.
pub type Clock = Arc<dyn Fn() -> NaiveTime + Send + Sync>;

/// Local wall-clock time.
pub fn system_clock() -> Clock {
    Arc::new(|| chrono::Local::now().time())
}

/// Clock that always returns `time`.
pub fn fixed_clock(time: NaiveTime) -> Clock {
    Arc::new(move || time)
}

/// Format a 24h `hour` and `minute` as a 12-hour label.
///
/// Hour 0 maps to 12 AM and hour 12 to 12 PM.
pub fn format_clock(hour: u32, minute: u32) -> String {
    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    let hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", hour, minute, meridiem)
}

/// [format_clock] for anything with an hour and minute.
pub fn format_time<T: Timelike>(time: &T) -> String {
    format_clock(time.hour(), time.minute())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midnight_is_twelve_am() {
        assert_eq!(format_clock(0, 0), "12:00 AM");
    }

    #[test]
    fn afternoon_pads_minutes() {
        assert_eq!(format_clock(13, 5), "1:05 PM");
    }

    #[test]
    fn last_minute_of_day() {
        assert_eq!(format_clock(23, 59), "11:59 PM");
    }

    #[test]
    fn noon_is_twelve_pm() {
        assert_eq!(format_clock(12, 0), "12:00 PM");
    }

    #[test]
    fn morning_single_digit_hour() {
        assert_eq!(format_clock(9, 5), "9:05 AM");
        assert_eq!(format_clock(11, 30), "11:30 AM");
    }

    #[test]
    fn format_time_uses_hour_and_minute_only() {
        let t = NaiveTime::from_hms_opt(0, 7, 59).unwrap();
        assert_eq!(format_time(&t), "12:07 AM");
    }

    #[test]
    fn fixed_clock_is_stable() {
        let t = NaiveTime::from_hms_opt(18, 45, 0).unwrap();
        let clock = fixed_clock(t);
        assert_eq!(clock(), t);
        assert_eq!(format_time(&clock()), "6:45 PM");
    }
}
