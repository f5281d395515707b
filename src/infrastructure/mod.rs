//! Infrastructure layer - File input, configuration and the template engine

pub mod config;
pub mod loader;
pub mod template_engine;

pub use config::RenderConfig;
pub use loader::{load_document, load_template};
pub use template_engine::{Bindings, MiniJinjaEngine, TemplateEngine};
