//! Loading raw documents for textmine.
//!
//! Three input shapes are supported:
//!
//! - `.json`: an array of objects (a single object is one document)
//! - `.jsonl` / `.ndjson`: one object per line
//! - a directory: every `*.txt` file below it is one document, its content in the
//!   [`TEXT_FIELD`] text field
//!
//! JSON objects map onto [`RawDocument`]s: the configured identifier field (string or
//! number) becomes the id, other string values become text fields and arrays of strings
//! become tag fields. Everything else is ignored.

#![warn(missing_docs)]

mod error;
mod json;
mod text;

use std::{fs, path::Path};

use log::info;
use textmine_core::RawDocument;

pub use error::SourceError;
pub use json::{parse_json, parse_json_lines};
pub use text::{TEXT_FIELD, load_text_dir};

/// Field names used when mapping input onto raw documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOptions {
    /// JSON key holding the document identifier.
    pub id_field: String,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            id_field: String::from("id"),
        }
    }
}

/// Input shape, chosen from the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// A JSON array of objects.
    Json,
    /// One JSON object per line.
    JsonLines,
    /// A directory of `*.txt` files.
    TextDirectory,
}

impl Format {
    /// Detects the format of an existing path.
    pub fn detect(path: &Path) -> Result<Self, SourceError> {
        if !path.exists() {
            return Err(SourceError::NotFound {
                path: path.to_path_buf(),
            });
        }
        if path.is_dir() {
            return Ok(Self::TextDirectory);
        }
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("jsonl" | "ndjson") => Ok(Self::JsonLines),
            _ => Err(SourceError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Loads raw documents from a file or directory.
pub fn load(path: &Path, options: &SourceOptions) -> Result<Vec<RawDocument>, SourceError> {
    let format = Format::detect(path)?;
    let documents = match format {
        Format::TextDirectory => load_text_dir(path)?,
        Format::Json => parse_json(&read(path)?, path, options)?,
        Format::JsonLines => parse_json_lines(&read(path)?, path, options)?,
    };
    info!(
        "loaded {} raw documents from {} ({:?})",
        documents.len(),
        path.display(),
        format
    );
    Ok(documents)
}

/// Reads a whole input file.
fn read(path: &Path) -> Result<String, SourceError> {
    fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })
}
