//! Weekday tasks with computed display dates

use crate::domain::date_format::{format_date, resolve_locale};
use crate::domain::document::TaskDescriptor;
use crate::domain::lookup::DeferredMap;
use crate::domain::weekday::weekday_ordinal;
use crate::error::{WeekplanError, Result};
use chrono::{Datelike, Days, Duration, Local, NaiveDate};
use log::trace;
use serde_yaml::Mapping;
use std::sync::Arc;

/// Locale used when none is given
pub const DEFAULT_LOCALE: &str = "en_US";

/// Where a task reads "today" from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Today {
    /// Local date from the system clock, read on every access
    #[default]
    System,
    /// A pinned reference date
    Fixed(NaiveDate),
}

impl Today {
    /// The reference date this source stands for right now
    pub fn resolve(&self) -> NaiveDate {
        match self {
            Today::System => Local::now().date_naive(),
            Today::Fixed(date) => *date,
        }
    }
}

/// One scheduled item on a weekday, ready for rendering
#[derive(Debug, Clone)]
pub struct WeekdayTask {
    pub weekday: String,
    pub start_time: String,
    pub end_time: String,
    pub variables: DeferredMap,
    pub week_offset: i64,
    pub locale: String,
    today: Today,
}

impl WeekdayTask {
    /// Create a task for `weekday` whose variables fall back to `shared`.
    ///
    /// The weekday name is not checked here; [`WeekdayTask::date_on`] rejects
    /// unknown names.
    pub fn new(weekday: &str, descriptor: &TaskDescriptor, shared: Arc<Mapping>) -> Self {
        WeekdayTask {
            weekday: weekday.to_string(),
            start_time: descriptor.start_time.clone(),
            end_time: descriptor.end_time.clone(),
            variables: DeferredMap::new(descriptor.variables.clone(), shared),
            week_offset: 0,
            locale: DEFAULT_LOCALE.to_string(),
            today: Today::System,
        }
    }

    /// Shift the task into the week `week_offset` weeks from the current one
    pub fn with_week_offset(mut self, week_offset: i64) -> Self {
        self.week_offset = week_offset;
        self
    }

    /// Locale identifier used for the display date
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Source of "today" for [`WeekdayTask::date`] and [`WeekdayTask::formatted_date`]
    pub fn with_today(mut self, today: Today) -> Self {
        self.today = today;
        self
    }

    /// Calendar date of this task in the week `week_offset` weeks from `today`
    pub fn date_on(&self, today: NaiveDate) -> Result<NaiveDate> {
        let ordinal = weekday_ordinal(&self.weekday)?;
        let out_of_range =
            || WeekplanError::Config(format!("Week offset out of range: {}", self.week_offset));

        let anchor = Duration::try_weeks(self.week_offset)
            .and_then(|delta| today.checked_add_signed(delta))
            .ok_or_else(out_of_range)?;
        let first_day = anchor
            .checked_sub_days(Days::new(u64::from(anchor.weekday().num_days_from_monday())))
            .ok_or_else(out_of_range)?;
        let date = first_day
            .checked_add_days(Days::new(u64::from(ordinal)))
            .ok_or_else(out_of_range)?;

        trace!(
            "WeekdayTask::date_on: {} offset {} from {} -> {}",
            self.weekday,
            self.week_offset,
            today,
            date
        );
        Ok(date)
    }

    /// Task date relative to the configured "today"
    pub fn date(&self) -> Result<NaiveDate> {
        self.date_on(self.today.resolve())
    }

    /// Display date relative to `today`, e.g. "Monday, 6 January"
    pub fn formatted_date_on(&self, today: NaiveDate) -> Result<String> {
        let date = self.date_on(today)?;
        let locale = resolve_locale(&self.locale)?;
        Ok(format_date(date, locale))
    }

    /// Display date, recomputed from the configured "today" on every call
    pub fn formatted_date(&self) -> Result<String> {
        self.formatted_date_on(self.today.resolve())
    }
}
