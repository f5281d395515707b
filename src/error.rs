//! Error types for weekplan

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for weekplan
#[derive(Debug, Error)]
pub enum WeekplanError {
    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Unknown weekday: {0}")]
    UnknownWeekday(String),

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Locale unavailable: {0}")]
    LocaleUnavailable(String),

    #[error("Template syntax error: {0}")]
    TemplateSyntax(String),

    #[error("Template render error: {0}")]
    TemplateRender(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl WeekplanError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            WeekplanError::MissingField(_)
            | WeekplanError::InvalidDocument(_)
            | WeekplanError::Yaml(_) => 3,
            WeekplanError::UnknownWeekday(_) => 4,
            WeekplanError::KeyNotFound(_) => 5,
            WeekplanError::LocaleUnavailable(_) => 6,
            WeekplanError::TemplateSyntax(_) | WeekplanError::TemplateRender(_) => 7,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            WeekplanError::MissingField(field) => {
                format!(
                    "Missing field: '{}'\n\n\
                    The data file needs both top-level keys:\n\
                    variables:\n  \
                      title: My week\n\
                    week_tasks:\n  \
                      monday:\n    \
                        start_time: \"09:00\"",
                    field
                )
            }
            WeekplanError::UnknownWeekday(name) => {
                format!(
                    "Unknown weekday: '{}'\n\n\
                    Valid weekday keys (lowercase):\n\
                    • monday, tuesday, wednesday, thursday\n\
                    • friday, saturday, sunday",
                    name
                )
            }
            WeekplanError::KeyNotFound(key) => {
                format!(
                    "Key not found: {}\n\n\
                    Suggestions:\n\
                    • Define the variable under the task's 'variables'\n\
                    • Or define a default under the top-level 'variables'\n\
                    • Use '{{% if name is defined %}}' for optional values",
                    key
                )
            }
            WeekplanError::LocaleUnavailable(locale) => {
                format!(
                    "Locale unavailable: '{}'\n\n\
                    Suggestions:\n\
                    • Use a POSIX locale name such as en_US, es_ES or fr_FR\n\
                    • An encoding suffix is accepted (e.g., es_ES.UTF-8)\n\
                    • Set WEEKPLAN_LOCALE to change the default",
                    locale
                )
            }
            WeekplanError::Config(msg) if msg.contains("date format") => {
                format!(
                    "{}\n\n\
                    Expected format: DD-MM-YYYY\n\
                    Example: weekplan -t week.j2 -d week.yaml --today 14-10-2026",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using WeekplanError
pub type Result<T> = std::result::Result<T, WeekplanError>;
