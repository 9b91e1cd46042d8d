//! Configuration file parsing.
//!
//! Parses individual `.textmine.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
/// This mirrors the TOML schema exactly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// Input field mapping section.
    pub input: Option<RawInputSettings>,
    /// Tokenizer noise rules section.
    pub tokenize: Option<RawTokenizeSettings>,
    /// Stop-word section.
    pub stopwords: Option<RawStopwordSettings>,
    /// Output section.
    pub output: Option<RawOutputSettings>,
}

/// Raw input field mapping.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawInputSettings {
    /// JSON key holding document identifiers.
    pub id_field: Option<String>,
    /// Default text field.
    pub text_field: Option<String>,
    /// Default tag field.
    pub tag_field: Option<String>,
}

/// Raw tokenizer noise rules.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawTokenizeSettings {
    /// Minimum token length in characters.
    pub min_word_length: Option<usize>,
    /// Discard purely numeric tokens.
    pub drop_numeric: Option<bool>,
    /// Discard version artifacts such as `v1`.
    pub drop_versions: Option<bool>,
}

/// Raw stop-word settings.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawStopwordSettings {
    /// Base list language.
    pub language: Option<String>,
    /// Custom stop words. Accepts either a single string or an array of strings.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub custom: Option<Vec<String>>,
    /// Word-list files. Accepts either a single string or an array of strings.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub files: Option<Vec<String>>,
}

/// Raw output settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawOutputSettings {
    /// Maximum rows displayed.
    pub limit: Option<usize>,
    /// Minimum co-occurrence count for pair tables.
    pub min_pair_count: Option<u64>,
}

/// Parses a configuration file from disk.
///
/// Returns a `RawConfig` with all fields as optionals, ready for merging.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Checks if a config file has `root = true` set.
///
/// This is used during discovery to stop traversal at root configs.
/// Returns false if the file cannot be read or parsed.
pub fn is_root_config(path: &Path) -> bool {
    let Ok(contents) = fs::read_to_string(path) else {
        return false;
    };
    let Ok(config) = toml::from_str::<RawConfig>(&contents) else {
        return false;
    };
    config.root == Some(true)
}
