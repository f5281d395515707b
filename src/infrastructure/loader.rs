//! Reading template and data files

use crate::domain::Document;
use crate::error::{WeekplanError, Result};
use log::debug;
use std::fs;
use std::path::Path;

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| WeekplanError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Read template source text
pub fn load_template(path: &Path) -> Result<String> {
    let source = read_text(path)?;
    debug!("load_template: {} ({} bytes)", path.display(), source.len());
    Ok(source)
}

/// Read and parse a YAML data file
pub fn load_document(path: &Path) -> Result<Document> {
    let text = read_text(path)?;
    let document = Document::from_yaml_str(&text)?;
    debug!(
        "load_document: {} ({} tasks)",
        path.display(),
        document.week_tasks().len()
    );
    Ok(document)
}
