//! weekplan - Weekly planner renderer
//!
//! Merges weekly task data (YAML) with a Jinja template. Each task's
//! variables fall back to document-level defaults, and each weekday gets a
//! localized display date relative to a configurable week offset.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::render;
pub use error::WeekplanError;
