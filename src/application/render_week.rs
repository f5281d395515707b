//! Render week use case

use crate::domain::date_format::resolve_locale;
use crate::domain::{weekday_ordinal, DeferredMap, Document, Today, WeekdayTask};
use crate::error::Result;
use crate::infrastructure::{Bindings, MiniJinjaEngine, TemplateEngine};
use log::debug;
use minijinja::value::Value;
use serde_yaml::Mapping;

/// Service that turns a document and a template into rendered text
pub struct RenderService<E = MiniJinjaEngine> {
    engine: E,
    today: Today,
}

impl RenderService<MiniJinjaEngine> {
    /// Create a render service using the minijinja engine and the system clock
    pub fn new() -> Self {
        Self::with_engine(MiniJinjaEngine::new())
    }
}

impl Default for RenderService<MiniJinjaEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: TemplateEngine> RenderService<E> {
    pub fn with_engine(engine: E) -> Self {
        RenderService {
            engine,
            today: Today::System,
        }
    }

    /// Pin the reference date used for every task's display date
    pub fn with_today(mut self, today: Today) -> Self {
        self.today = today;
        self
    }

    /// Build one task per `week_tasks` entry, in declaration order.
    ///
    /// Fails on the first unknown weekday name or on a week offset that
    /// leaves the supported date range.
    pub fn build_tasks(
        &self,
        document: &Document,
        locale: &str,
        week_offset: i64,
    ) -> Result<Vec<WeekdayTask>> {
        document
            .week_tasks()
            .iter()
            .map(|(weekday, descriptor)| -> Result<WeekdayTask> {
                weekday_ordinal(weekday)?;
                let task = WeekdayTask::new(weekday, descriptor, document.variables().clone())
                    .with_week_offset(week_offset)
                    .with_locale(locale)
                    .with_today(self.today);
                task.date()?;
                Ok(task)
            })
            .collect()
    }

    /// Render `template` with the tasks of `document`.
    ///
    /// The template sees `week_tasks`, `variables` and `len`. Nothing is
    /// returned unless the whole template renders.
    pub fn render(
        &self,
        template: &str,
        document: &Document,
        locale: &str,
        week_offset: i64,
    ) -> Result<String> {
        // 1. Check the locale before any template evaluation
        resolve_locale(locale)?;

        // 2. Build tasks
        let tasks = self.build_tasks(document, locale, week_offset)?;
        debug!(
            "RenderService::render: {} tasks, locale {}, week offset {}",
            tasks.len(),
            locale,
            week_offset
        );

        // 3. Bind and render
        let mut bindings = Bindings::new();
        bindings.insert(
            "week_tasks".to_string(),
            Value::from(tasks.into_iter().map(Value::from_object).collect::<Vec<_>>()),
        );
        bindings.insert(
            "variables".to_string(),
            Value::from_object(DeferredMap::new(
                Mapping::new(),
                document.variables().clone(),
            )),
        );

        self.engine.render(template, &bindings)
    }

    /// Parse YAML data text, then render as [`RenderService::render`] does
    pub fn render_yaml(
        &self,
        template: &str,
        data: &str,
        locale: &str,
        week_offset: i64,
    ) -> Result<String> {
        let document = Document::from_yaml_str(data)?;
        self.render(template, &document, locale, week_offset)
    }
}

/// Render with the default engine and the system clock
pub fn render(
    template: &str,
    document: &Document,
    locale: &str,
    week_offset: i64,
) -> Result<String> {
    RenderService::new().render(template, document, locale, week_offset)
}
