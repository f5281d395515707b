//! Domain layer - Weekly task model, variable lookup and date computation

pub mod date_format;
pub mod document;
pub mod lookup;
pub mod task;
pub mod weekday;

pub use document::{Document, TaskDescriptor};
pub use lookup::DeferredMap;
pub use task::{Today, WeekdayTask, DEFAULT_LOCALE};
pub use weekday::{parse_weekday, weekday_ordinal, WEEKDAY_NAMES};
