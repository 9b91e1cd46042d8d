//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::fmt;

use textmine_core::{StopwordLanguage, split_words};

use crate::Config;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The stop-word language is not recognized.
    UnknownLanguage {
        /// The configured language.
        language: String,
    },
    /// A custom stop word can never equal a normalized token.
    UnmatchableStopword {
        /// The configured word.
        word: String,
    },
    /// A stop-word file does not exist.
    StopwordFileMissing {
        /// Path that doesn't exist.
        path: String,
    },
    /// `min_word_length` is zero, which keeps every token.
    ZeroMinWordLength,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownLanguage { language } => {
                write!(
                    f,
                    "unknown stop-word language '{language}' (expected one of: {})",
                    StopwordLanguage::NAMES.join(", ")
                )
            }
            Self::UnmatchableStopword { word } => {
                write!(
                    f,
                    "custom stop word '{word}' never matches a token (tokens are lowercase words)"
                )
            }
            Self::StopwordFileMissing { path } => {
                write!(f, "stop-word file does not exist: {path}")
            }
            Self::ZeroMinWordLength => {
                write!(f, "min_word_length = 0 has no effect, use 1")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config
        .stopwords
        .language
        .parse::<StopwordLanguage>()
        .is_err()
    {
        warnings.push(ConfigWarning::UnknownLanguage {
            language: config.stopwords.language.clone(),
        });
    }

    for word in &config.stopwords.custom {
        if !matches_a_token(word) {
            warnings.push(ConfigWarning::UnmatchableStopword { word: word.clone() });
        }
    }

    for path in &config.stopwords.files {
        if !path.is_file() {
            warnings.push(ConfigWarning::StopwordFileMissing {
                path: path.display().to_string(),
            });
        }
    }

    if config.tokenize.min_word_length == 0 {
        warnings.push(ConfigWarning::ZeroMinWordLength);
    }

    warnings
}

/// True if the word survives tokenization unchanged as a single token.
fn matches_a_token(word: &str) -> bool {
    matches!(split_words(word).as_slice(), [only] if only == word)
}
