//! Two-level variable lookup with fallback

use crate::error::{WeekplanError, Result};
use serde_yaml::{Mapping, Value};
use std::sync::Arc;

/// Read-only view over task-local variables that falls back to the
/// document-level variables when a key is missing locally.
#[derive(Debug, Clone)]
pub struct DeferredMap {
    primary: Mapping,
    fallback: Arc<Mapping>,
}

impl DeferredMap {
    /// Create a lookup view over `primary` with `fallback` as the enclosing scope
    pub fn new(primary: Mapping, fallback: Arc<Mapping>) -> Self {
        DeferredMap { primary, fallback }
    }

    /// Look up a key, checking the task-local scope first
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.primary
            .get(key)
            .or_else(|| self.fallback.get(key))
            .ok_or_else(|| WeekplanError::KeyNotFound(key.to_string()))
    }

    /// Look up a key of any YAML type, e.g. an integer key such as `1`
    pub fn lookup(&self, key: &Value) -> Result<&Value> {
        self.primary
            .get(key)
            .or_else(|| self.fallback.get(key))
            .ok_or_else(|| WeekplanError::KeyNotFound(key_text(key)))
    }

    /// True if either scope defines `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.primary.contains_key(key) || self.fallback.contains_key(key)
    }

    /// Keys visible through this view: local keys first, then inherited
    /// keys that are not shadowed.
    pub fn keys(&self) -> Vec<&Value> {
        let mut keys: Vec<&Value> = self.primary.keys().collect();
        keys.extend(
            self.fallback
                .keys()
                .filter(|key| !self.primary.contains_key(*key)),
        );
        keys
    }
}

/// Display form of a mapping key for error messages
fn key_text(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|text| text.trim().to_string())
            .unwrap_or_else(|_| format!("{:?}", other)),
    }
}
