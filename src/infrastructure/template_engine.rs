//! Template engine adapter backed by minijinja
//!
//! minijinja only sees "undefined" when an object lookup fails, so the
//! objects below record the domain error for the current render and
//! [`MiniJinjaEngine::render`] reports that error instead of the engine's.

use crate::domain::{DeferredMap, WeekdayTask};
use crate::error::{WeekplanError, Result};
use log::debug;
use minijinja::value::{Enumerator, Object, Value};
use minijinja::{Environment, Error, ErrorKind, UndefinedBehavior};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Named values made visible to a template
pub type Bindings = BTreeMap<String, Value>;

/// Renders template source text against a set of bindings
pub trait TemplateEngine {
    fn render(&self, source: &str, bindings: &Bindings) -> Result<String>;
}

/// Errors seen by template objects during one render on this thread
#[derive(Debug, Default)]
struct RenderState {
    /// First domain failure; aborts the render even if the template
    /// only tested the value with `is defined`
    failure: Option<WeekplanError>,
    /// Most recent lookup that found no such key
    missing_key: Option<String>,
}

thread_local! {
    static RENDER_STATE: RefCell<RenderState> = RefCell::new(RenderState::default());
}

fn take_state() -> RenderState {
    RENDER_STATE.with(|state| std::mem::take(&mut *state.borrow_mut()))
}

fn record_failure(err: WeekplanError) {
    RENDER_STATE.with(|state| {
        let mut state = state.borrow_mut();
        if state.failure.is_none() {
            state.failure = Some(err);
        }
    });
}

fn record_missing(key: String) {
    RENDER_STATE.with(|state| state.borrow_mut().missing_key = Some(key));
}

/// An undefined value was handled by the template, so it no longer
/// explains a later error.
fn clear_missing() {
    RENDER_STATE.with(|state| state.borrow_mut().missing_key = None);
}

/// Jinja-syntax engine. Undefined values are errors, and a `len` function
/// is available to every template.
pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_function("len", len);
        env.add_test("defined", is_defined);
        env.add_test("undefined", is_undefined);
        env.add_filter("default", default_filter);
        env.add_filter("d", default_filter);
        MiniJinjaEngine { env }
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn render(&self, source: &str, bindings: &Bindings) -> Result<String> {
        debug!(
            "MiniJinjaEngine::render: {} bytes of source, bindings {:?}",
            source.len(),
            bindings.keys().collect::<Vec<_>>()
        );

        take_state();
        let result = self.env.render_str(source, bindings);
        let state = take_state();

        if let Some(err) = state.failure {
            return Err(err);
        }
        result.map_err(|err| classify_error(err, state.missing_key))
    }
}

/// Length of a sequence, mapping or string
fn len(value: Value) -> std::result::Result<usize, Error> {
    value.len().ok_or_else(|| {
        Error::new(
            ErrorKind::InvalidOperation,
            format!("len() is not defined for {:?} values", value.kind()),
        )
    })
}

fn is_defined(value: &Value) -> bool {
    !is_undefined(value)
}

fn is_undefined(value: &Value) -> bool {
    let undefined = value.is_undefined();
    if undefined {
        clear_missing();
    }
    undefined
}

/// `default(value, other='')`
fn default_filter(value: &Value, other: Option<Value>) -> Value {
    if is_undefined(value) {
        other.unwrap_or_else(|| Value::from(""))
    } else {
        value.clone()
    }
}

fn classify_error(err: Error, missing_key: Option<String>) -> WeekplanError {
    match err.kind() {
        ErrorKind::SyntaxError => WeekplanError::TemplateSyntax(err.to_string()),
        ErrorKind::UndefinedError => {
            WeekplanError::KeyNotFound(missing_key.unwrap_or_else(|| err.to_string()))
        }
        _ => WeekplanError::TemplateRender(err.to_string()),
    }
}

const TASK_FIELDS: [&str; 8] = [
    "weekday",
    "start_time",
    "end_time",
    "variables",
    "formatted_date",
    "date",
    "week_offset",
    "locale",
];

impl Object for WeekdayTask {
    fn get_value(self: &Arc<Self>, key: &Value) -> Option<Value> {
        let field = key.as_str()?;
        let value = match field {
            "weekday" => Value::from(self.weekday.as_str()),
            "start_time" => Value::from(self.start_time.as_str()),
            "end_time" => Value::from(self.end_time.as_str()),
            "variables" => Value::from_object(self.variables.clone()),
            "formatted_date" => match self.formatted_date() {
                Ok(text) => Value::from(text),
                Err(err) => {
                    record_failure(err);
                    return None;
                }
            },
            "date" => match self.date() {
                Ok(date) => Value::from(date.format("%Y-%m-%d").to_string()),
                Err(err) => {
                    record_failure(err);
                    return None;
                }
            },
            "week_offset" => Value::from(self.week_offset),
            "locale" => Value::from(self.locale.as_str()),
            _ => {
                record_missing(field.to_string());
                return None;
            }
        };
        Some(value)
    }

    fn enumerate(self: &Arc<Self>) -> Enumerator {
        Enumerator::Str(&TASK_FIELDS)
    }
}

impl Object for DeferredMap {
    fn get_value(self: &Arc<Self>, key: &Value) -> Option<Value> {
        let key = serde_yaml::to_value(key).ok()?;
        match self.lookup(&key) {
            Ok(value) => Some(Value::from_serialize(value)),
            Err(WeekplanError::KeyNotFound(name)) => {
                record_missing(name);
                None
            }
            Err(err) => {
                record_failure(err);
                None
            }
        }
    }

    fn enumerate(self: &Arc<Self>) -> Enumerator {
        Enumerator::Values(self.keys().into_iter().map(Value::from_serialize).collect())
    }
}
