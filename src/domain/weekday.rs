//! Weekday names recognized in task data

use crate::error::{WeekplanError, Result};
use chrono::Weekday;

/// Recognized weekday keys in Monday-first order
pub const WEEKDAY_NAMES: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Map a lowercase English weekday name to a chrono weekday.
///
/// Matching is case-sensitive: `"Monday"` is rejected.
pub fn parse_weekday(name: &str) -> Result<Weekday> {
    match name {
        "monday" => Ok(Weekday::Mon),
        "tuesday" => Ok(Weekday::Tue),
        "wednesday" => Ok(Weekday::Wed),
        "thursday" => Ok(Weekday::Thu),
        "friday" => Ok(Weekday::Fri),
        "saturday" => Ok(Weekday::Sat),
        "sunday" => Ok(Weekday::Sun),
        _ => Err(WeekplanError::UnknownWeekday(name.to_string())),
    }
}

/// Monday-first ordinal of a weekday name (monday=0 .. sunday=6)
pub fn weekday_ordinal(name: &str) -> Result<u32> {
    parse_weekday(name).map(|day| day.num_days_from_monday())
}
