//! Localized display dates
//!
//! Locale names come from chrono's bundled locale tables, so formatting
//! never touches process-wide locale state.

use crate::error::{WeekplanError, Result};
use chrono::{Locale, NaiveDate, NaiveTime, TimeZone, Utc};

/// Display pattern, e.g. "Monday, 1 January"
const DATE_PATTERN: &str = "%A, %-d %B";

/// Resolve a locale identifier such as `es_ES.UTF-8`, `es-ES` or `en_US`.
///
/// The encoding suffix after `.` is ignored and `-` is accepted as the
/// language/territory separator. A `@modifier` becomes a `_modifier` suffix
/// (e.g. `ca_ES@valencia`).
pub fn resolve_locale(identifier: &str) -> Result<Locale> {
    let normalized = normalize_identifier(identifier);

    Locale::try_from(normalized.as_str())
        .map_err(|_| WeekplanError::LocaleUnavailable(identifier.to_string()))
}

fn normalize_identifier(identifier: &str) -> String {
    let trimmed = identifier.trim();
    let (base, modifier) = match trimmed.split_once('@') {
        Some((base, modifier)) => (base, Some(modifier)),
        None => (trimmed, None),
    };
    let base = base.split('.').next().unwrap_or(base).replace('-', "_");

    let base = match base.as_str() {
        "C" | "" => "POSIX".to_string(),
        _ => base,
    };

    match modifier {
        Some(modifier) if !modifier.is_empty() => format!("{}_{}", base, modifier),
        _ => base,
    }
}

/// Format `date` as "<weekday>, <day> <month>" in the given locale, with the
/// first character uppercased.
pub fn format_date(date: NaiveDate, locale: Locale) -> String {
    let midnight = Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN));
    let text = midnight.format_localized(DATE_PATTERN, locale).to_string();
    capitalize_first(&text)
}

/// Uppercase the first character and leave the rest unchanged.
///
/// Uses full Unicode case mapping, so a multi-byte initial such as `é`
/// becomes `É` and `ß` becomes `SS`.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
