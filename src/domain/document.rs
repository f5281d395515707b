//! Parsed weekly task data

use crate::error::{WeekplanError, Result};
use serde_yaml::{Mapping, Value};
use std::sync::Arc;

/// Time used when a descriptor omits `start_time` or `end_time`
pub const DEFAULT_TIME: &str = "00:00";

/// One entry under `week_tasks`
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDescriptor {
    pub start_time: String,
    pub end_time: String,
    pub variables: Mapping,
}

impl Default for TaskDescriptor {
    fn default() -> Self {
        TaskDescriptor {
            start_time: DEFAULT_TIME.to_string(),
            end_time: DEFAULT_TIME.to_string(),
            variables: Mapping::new(),
        }
    }
}

impl TaskDescriptor {
    /// Build a descriptor from the YAML value under a weekday key.
    /// `null` yields all defaults.
    pub fn from_value(weekday: &str, value: &Value) -> Result<Self> {
        let map = match value {
            Value::Null => return Ok(TaskDescriptor::default()),
            Value::Mapping(map) => map,
            _ => {
                return Err(WeekplanError::InvalidDocument(format!(
                    "week_tasks.{} must be a mapping",
                    weekday
                )))
            }
        };

        let start_time = time_field(weekday, map, "start_time")?;
        let end_time = time_field(weekday, map, "end_time")?;

        let variables = match map.get("variables") {
            None | Some(Value::Null) => Mapping::new(),
            Some(Value::Mapping(vars)) => vars.clone(),
            Some(_) => {
                return Err(WeekplanError::InvalidDocument(format!(
                    "week_tasks.{}.variables must be a mapping",
                    weekday
                )))
            }
        };

        Ok(TaskDescriptor {
            start_time,
            end_time,
            variables,
        })
    }
}

/// Read a time field verbatim. Scalars keep their YAML text form.
fn time_field(weekday: &str, map: &Mapping, field: &str) -> Result<String> {
    match map.get(field) {
        None | Some(Value::Null) => Ok(DEFAULT_TIME.to_string()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        Some(_) => Err(WeekplanError::InvalidDocument(format!(
            "week_tasks.{}.{} must be a scalar",
            weekday, field
        ))),
    }
}

/// Top-level input: shared variables plus per-weekday task descriptors
#[derive(Debug, Clone)]
pub struct Document {
    variables: Arc<Mapping>,
    week_tasks: Vec<(String, TaskDescriptor)>,
}

impl Document {
    /// Parse a document from YAML text
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(text)?;
        Self::from_value(&value)
    }

    /// Build a document from an already parsed YAML value.
    ///
    /// `week_tasks` keeps the order in which the weekdays were declared.
    pub fn from_value(value: &Value) -> Result<Self> {
        let root = value.as_mapping().ok_or_else(|| {
            WeekplanError::InvalidDocument("top level must be a mapping".to_string())
        })?;

        let tasks_value = root
            .get("week_tasks")
            .ok_or_else(|| WeekplanError::MissingField("week_tasks".to_string()))?;
        let variables_value = root
            .get("variables")
            .ok_or_else(|| WeekplanError::MissingField("variables".to_string()))?;

        let variables = match variables_value {
            Value::Mapping(vars) => vars.clone(),
            _ => {
                return Err(WeekplanError::InvalidDocument(
                    "variables must be a mapping".to_string(),
                ))
            }
        };

        let tasks_map = tasks_value.as_mapping().ok_or_else(|| {
            WeekplanError::InvalidDocument("week_tasks must be a mapping".to_string())
        })?;

        let mut week_tasks = Vec::with_capacity(tasks_map.len());
        for (key, value) in tasks_map {
            let weekday = match key {
                Value::String(name) => name.clone(),
                other => {
                    let text = serde_yaml::to_string(other)?;
                    return Err(WeekplanError::UnknownWeekday(text.trim().to_string()));
                }
            };
            let descriptor = TaskDescriptor::from_value(&weekday, value)?;
            week_tasks.push((weekday, descriptor));
        }

        Ok(Document {
            variables: Arc::new(variables),
            week_tasks,
        })
    }

    /// Document-level variables shared by every task
    pub fn variables(&self) -> &Arc<Mapping> {
        &self.variables
    }

    /// Task descriptors in declaration order
    pub fn week_tasks(&self) -> &[(String, TaskDescriptor)] {
        &self.week_tasks
    }
}
