//! Rendering and writing of the Kotlin drawable lookup snippet.

use crate::config::DRAWABLE_PREFIX;
use crate::error::{AppError, Result};
use std::fs;
use std::path::Path;

/// Renders identifiers into a Kotlin `hashMapOf(...)` literal.
///
/// Each entry maps the quoted identifier to `R.drawable.<identifier>`.
/// Entries are joined explicitly, so the empty list renders as a well-formed
/// empty-map literal rather than relying on trailing-separator trimming.
pub fn render_drawable_map(identifiers: &[String]) -> String {
    if identifiers.is_empty() {
        return "hashMapOf()".to_string();
    }

    let body: Vec<String> = identifiers
        .iter()
        .map(|id| format!("    \"{}\" to {}.{}", id, DRAWABLE_PREFIX, id))
        .collect();

    format!("hashMapOf(\n{})", body.join(", \n"))
}

/// Writes the document to `path`, truncating any existing file.
pub fn write_output(path: &Path, document: &str) -> Result<()> {
    fs::write(path, document).map_err(|err| AppError::OutputWrite(err.to_string()))
}
