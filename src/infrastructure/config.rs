//! Render configuration
//!
//! Settings resolve from command-line flags first, then environment
//! variables, then built-in defaults.

use crate::domain::Today;
use crate::error::{WeekplanError, Result};
use chrono::NaiveDate;

/// Locale used by the command-line tool when neither flag nor env var is set
pub const CLI_DEFAULT_LOCALE: &str = "es_ES.UTF-8";

pub const LOCALE_ENV: &str = "WEEKPLAN_LOCALE";
pub const OFFSET_ENV: &str = "WEEKPLAN_OFFSET";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub locale: String,
    pub week_offset: i64,
    pub today: Today,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            locale: CLI_DEFAULT_LOCALE.to_string(),
            week_offset: 0,
            today: Today::System,
        }
    }
}

impl RenderConfig {
    /// Resolve settings from flags and the process environment
    pub fn resolve(
        locale: Option<String>,
        week_offset: Option<i64>,
        today: Option<&str>,
    ) -> Result<Self> {
        Self::resolve_with(locale, week_offset, today, |key| std::env::var(key).ok())
    }

    /// Resolve settings using `env` to look up environment variables
    pub fn resolve_with<F>(
        locale: Option<String>,
        week_offset: Option<i64>,
        today: Option<&str>,
        env: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let locale = locale
            .or_else(|| env(LOCALE_ENV).filter(|value| !value.trim().is_empty()))
            .unwrap_or_else(|| CLI_DEFAULT_LOCALE.to_string());

        let week_offset = match week_offset {
            Some(offset) => offset,
            None => match env(OFFSET_ENV) {
                Some(value) => value.trim().parse().map_err(|_| {
                    WeekplanError::Config(format!(
                        "Invalid {}: '{}' (expected an integer)",
                        OFFSET_ENV, value
                    ))
                })?,
                None => 0,
            },
        };

        let today = match today {
            Some(text) => Today::Fixed(parse_date(text)?),
            None => Today::System,
        };

        Ok(RenderConfig {
            locale,
            week_offset,
            today,
        })
    }
}

/// Parse a DD-MM-YYYY date
fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%d-%m-%Y").map_err(|_| {
        WeekplanError::Config(format!(
            "Invalid date format: '{}' (expected DD-MM-YYYY)",
            text
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = RenderConfig::resolve_with(None, None, None, env_from(&[])).unwrap();
        assert_eq!(config, RenderConfig::default());
        assert_eq!(config.locale, "es_ES.UTF-8");
    }

    #[test]
    fn test_env_overrides_defaults() {
        let env = env_from(&[(LOCALE_ENV, "fr_FR"), (OFFSET_ENV, "-2")]);
        let config = RenderConfig::resolve_with(None, None, None, env).unwrap();
        assert_eq!(config.locale, "fr_FR");
        assert_eq!(config.week_offset, -2);
    }

    #[test]
    fn test_flags_override_env() {
        let env = env_from(&[(LOCALE_ENV, "fr_FR"), (OFFSET_ENV, "-2")]);
        let config =
            RenderConfig::resolve_with(Some("en_US".to_string()), Some(3), None, env).unwrap();
        assert_eq!(config.locale, "en_US");
        assert_eq!(config.week_offset, 3);
    }

    #[test]
    fn test_blank_locale_env_ignored() {
        let env = env_from(&[(LOCALE_ENV, "  ")]);
        let config = RenderConfig::resolve_with(None, None, None, env).unwrap();
        assert_eq!(config.locale, CLI_DEFAULT_LOCALE);
    }

    #[test]
    fn test_invalid_offset_env() {
        let env = env_from(&[(OFFSET_ENV, "next")]);
        let result = RenderConfig::resolve_with(None, None, None, env);
        match result {
            Err(WeekplanError::Config(msg)) => assert!(msg.contains(OFFSET_ENV)),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_fixed_today() {
        let config =
            RenderConfig::resolve_with(None, None, Some("14-10-2026"), env_from(&[])).unwrap();
        assert_eq!(
            config.today,
            Today::Fixed(NaiveDate::from_ymd_opt(2026, 10, 14).unwrap())
        );
    }

    #[test]
    fn test_invalid_today() {
        let result = RenderConfig::resolve_with(None, None, Some("2026-10-14"), env_from(&[]));
        match result {
            Err(WeekplanError::Config(msg)) => assert!(msg.contains("DD-MM-YYYY")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
