//! Configuration system for textmine.
//!
//! textmine uses TOML configuration files named `.textmine.toml`. Configuration is resolved
//! by walking up the directory tree from the current working directory, collecting any
//! `.textmine.toml` files found, then loading `~/.textmine.toml` as the global config with
//! lowest precedence.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::{
    fs,
    path::{Path, PathBuf},
};

pub use discovery::{
    CONFIG_FILENAME, ConfigFile, ConfigScope, discover_config_files, find_config_files,
    global_config_path,
};
pub use error::ConfigError;
pub use merge::{ParsedConfig, merge_configs};
pub use parse::{
    RawConfig, RawInputSettings, RawOutputSettings, RawStopwordSettings, RawTokenizeSettings,
    parse_config_file, parse_config_str,
};
pub use resolve::{format_path_for_display, resolve_config_path};
use serde::{Deserialize, Serialize};
pub use templates::{global_template, local_template};
use textmine_core::{StopwordLanguage, Stopwords, TokenizerOptions, parse_word_list};
pub use validate::ConfigWarning;
use validate::validate_config;

/// Default maximum number of rows shown in terminal tables.
pub const DEFAULT_LIMIT: usize = 20;

/// Default minimum co-occurrence count for pair and correlation tables.
pub const DEFAULT_MIN_PAIR_COUNT: u64 = 1;

/// Top-level merged configuration for textmine.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.textmine.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Input field mapping.
    pub input: InputSettings,
    /// Tokenizer noise rules.
    pub tokenize: TokenizeSettings,
    /// Stop-word sources.
    pub stopwords: StopwordSettings,
    /// Output defaults.
    pub output: OutputSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.textmine.toml` files.
    ///
    /// This is the main entry point for loading configuration. It:
    /// 1. Discovers all `.textmine.toml` files from `cwd` up to the filesystem root
    /// 2. Appends `~/.textmine.toml` if it exists
    /// 3. Parses each file
    /// 4. Merges them according to precedence rules (closest to `cwd` wins)
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        let config_files = discover_config_files(cwd);
        Self::load_from_files(&config_files)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    ///
    /// Returns `Ok(Config::default())` if the list is empty.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed: Vec<ParsedConfig> = files
            .iter()
            .map(|path| {
                let config = parse_config_file(path)?;
                Ok(ParsedConfig {
                    path: path.clone(),
                    config,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks for:
    /// - An unknown stop-word language
    /// - Custom stop words that can never match a token
    /// - Stop-word files that don't exist
    /// - A `min_word_length` of zero
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Returns the tokenizer noise rules.
    pub fn tokenizer_options(&self) -> TokenizerOptions {
        TokenizerOptions {
            min_word_length: self.tokenize.min_word_length,
            drop_numeric: self.tokenize.drop_numeric,
            drop_versions: self.tokenize.drop_versions,
        }
    }

    /// Parses the configured base stop-word language.
    pub fn stopword_language(&self) -> Result<StopwordLanguage, ConfigError> {
        self.stopwords
            .language
            .parse()
            .map_err(|message| ConfigError::UnknownLanguage { message })
    }

    /// Builds the effective stop-word set: base list, custom words, then word-list files.
    pub fn build_stopwords(&self) -> Result<Stopwords, ConfigError> {
        let mut stopwords = Stopwords::for_language(self.stopword_language()?);
        stopwords.merge(&self.custom_stopwords()?);
        Ok(stopwords)
    }

    /// Builds the set of corpus-specific stop words only, without the base list.
    pub fn custom_stopwords(&self) -> Result<Stopwords, ConfigError> {
        let mut stopwords: Stopwords = self.stopwords.custom.iter().collect();
        for path in &self.stopwords.files {
            let contents =
                fs::read_to_string(path).map_err(|source| ConfigError::ReadStopwordFile {
                    path: path.clone(),
                    source,
                })?;
            stopwords.extend(parse_word_list(&contents));
        }
        Ok(stopwords)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// This outputs the merged configuration settings in the same format as a
    /// `.textmine.toml` file, making it easy to see the effective configuration. Stop-word
    /// file paths are shown resolved.
    pub fn settings_to_toml(&self) -> String {
        let serializable = SerializableSettings {
            input: self.input.clone(),
            tokenize: self.tokenize.clone(),
            stopwords: SerializableStopwordSettings::from(&self.stopwords),
            output: self.output.clone(),
        };
        toml::to_string_pretty(&serializable).expect("settings serialization should not fail")
    }
}

/// Field names used to read input documents.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct InputSettings {
    /// JSON key holding document identifiers.
    pub id_field: String,
    /// Text field used when no `--field` is given.
    pub text_field: String,
    /// Tag field used when `--tags` is given without a name.
    pub tag_field: String,
}

impl Default for InputSettings {
    fn default() -> Self {
        Self {
            id_field: String::from("id"),
            text_field: String::from("description"),
            tag_field: String::from("keyword"),
        }
    }
}

/// Tokenizer noise rules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TokenizeSettings {
    /// Tokens shorter than this many characters are discarded.
    pub min_word_length: usize,
    /// Discard purely numeric tokens.
    pub drop_numeric: bool,
    /// Discard version artifacts such as `v1`.
    pub drop_versions: bool,
}

impl Default for TokenizeSettings {
    fn default() -> Self {
        let options = TokenizerOptions::default();
        Self {
            min_word_length: options.min_word_length,
            drop_numeric: options.drop_numeric,
            drop_versions: options.drop_versions,
        }
    }
}

/// Stop-word sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordSettings {
    /// Base list language name, or `none`.
    pub language: String,
    /// Custom words, unioned across all config files.
    pub custom: Vec<String>,
    /// Resolved word-list files, unioned across all config files.
    pub files: Vec<PathBuf>,
}

impl Default for StopwordSettings {
    fn default() -> Self {
        Self {
            language: StopwordLanguage::default().to_string(),
            custom: Vec::new(),
            files: Vec::new(),
        }
    }
}

/// Output defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Maximum rows displayed (0 = all).
    pub limit: usize,
    /// Minimum co-occurrence count for pair and correlation tables.
    pub min_pair_count: u64,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            min_pair_count: DEFAULT_MIN_PAIR_COUNT,
        }
    }
}

/// Internal struct for TOML serialization of settings.
#[derive(Serialize)]
struct SerializableSettings {
    /// Input field mapping.
    input: InputSettings,
    /// Tokenizer noise rules.
    tokenize: TokenizeSettings,
    /// Stop-word sources.
    stopwords: SerializableStopwordSettings,
    /// Output defaults.
    output: OutputSettings,
}

/// Stop-word settings with file paths rendered as strings.
#[derive(Serialize)]
struct SerializableStopwordSettings {
    /// Base list language.
    language: String,
    /// Custom words.
    custom: Vec<String>,
    /// Resolved word-list files.
    files: Vec<String>,
}

impl From<&StopwordSettings> for SerializableStopwordSettings {
    fn from(settings: &StopwordSettings) -> Self {
        Self {
            language: settings.language.clone(),
            custom: settings.custom.clone(),
            files: settings
                .files
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
        }
    }
}
