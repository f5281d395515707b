//! Application layer - Use cases and orchestration

pub mod render_week;

pub use render_week::{render, RenderService};
