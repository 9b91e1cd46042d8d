//! Error types for textmine configuration.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use toml::de;

/// Errors that can occur when loading or processing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to parse TOML configuration.
    #[error("failed to parse config file {path}: {source}")]
    ParseToml {
        /// Path to the file that could not be parsed.
        path: PathBuf,
        /// Underlying TOML parse error.
        source: de::Error,
    },

    /// Failed to read a stop-word list file.
    #[error("failed to read stop-word file {path}: {source}")]
    ReadStopwordFile {
        /// Path to the word list.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The configured stop-word language is not known.
    #[error("{message}")]
    UnknownLanguage {
        /// Description including the accepted names.
        message: String,
    },

    /// Failed to determine home directory.
    #[error("could not determine home directory")]
    NoHomeDirectory,
}
