//! Error types for document loading.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur while loading raw documents.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The input path does not exist.
    #[error("input does not exist: {path}")]
    NotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// Failed to read an input file or directory.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Path that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Input is not valid JSON.
    #[error("invalid JSON in {}{}: {source}", path.display(), line_suffix(*line))]
    Json {
        /// File containing the bad JSON.
        path: PathBuf,
        /// One-based line number, for JSON Lines input.
        line: Option<usize>,
        /// Underlying parse error.
        source: serde_json::Error,
    },

    /// The path has an extension no loader handles.
    #[error("unsupported input format: {path} (expected .json, .jsonl, .ndjson, or a directory)")]
    UnsupportedFormat {
        /// The unrecognized path.
        path: PathBuf,
    },
}

/// Formats the optional line number of a JSON error.
fn line_suffix(line: Option<usize>) -> String {
    line.map(|l| format!(" line {l}")).unwrap_or_default()
}
