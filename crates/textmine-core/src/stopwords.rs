//! Stop-word sets.
//!
//! A stop-word set combines:
//! - A base linguistic list from the `stop-words` crate (Stopwords ISO)
//! - Corpus-specific custom words (from configuration or word-list files)
//!
//! Stop words are low-information terms that are discarded during tokenization. The set
//! is plain data: sets built from different sources merge without duplication.

use std::{collections::HashSet, fmt, str};

use stop_words::LANGUAGE;

/// Base linguistic list a stop-word set starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopwordLanguage {
    /// No base list; only custom words.
    None,
    /// English.
    #[default]
    English,
    /// French.
    French,
    /// German.
    German,
    /// Spanish.
    Spanish,
    /// Italian.
    Italian,
    /// Portuguese.
    Portuguese,
    /// Dutch.
    Dutch,
    /// Russian.
    Russian,
}

impl StopwordLanguage {
    /// Every accepted language name, in display order.
    pub const NAMES: &'static [&'static str] = &[
        "none",
        "english",
        "french",
        "german",
        "spanish",
        "italian",
        "portuguese",
        "dutch",
        "russian",
    ];

    /// Adds the words of the base list to a set.
    fn load_into(self, set: &mut Stopwords) {
        let language = match self {
            Self::None => return,
            Self::English => LANGUAGE::English,
            Self::French => LANGUAGE::French,
            Self::German => LANGUAGE::German,
            Self::Spanish => LANGUAGE::Spanish,
            Self::Italian => LANGUAGE::Italian,
            Self::Portuguese => LANGUAGE::Portuguese,
            Self::Dutch => LANGUAGE::Dutch,
            Self::Russian => LANGUAGE::Russian,
        };
        set.extend(stop_words::get(language));
    }
}

impl fmt::Display for StopwordLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::English => "english",
            Self::French => "french",
            Self::German => "german",
            Self::Spanish => "spanish",
            Self::Italian => "italian",
            Self::Portuguese => "portuguese",
            Self::Dutch => "dutch",
            Self::Russian => "russian",
        };
        f.write_str(name)
    }
}

impl str::FromStr for StopwordLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "" => Ok(Self::None),
            "english" | "en" => Ok(Self::English),
            "french" | "fr" => Ok(Self::French),
            "german" | "de" => Ok(Self::German),
            "spanish" | "es" => Ok(Self::Spanish),
            "italian" | "it" => Ok(Self::Italian),
            "portuguese" | "pt" => Ok(Self::Portuguese),
            "dutch" | "nl" => Ok(Self::Dutch),
            "russian" | "ru" => Ok(Self::Russian),
            _ => Err(format!(
                "unknown stop-word language '{}', expected one of: {}",
                s,
                Self::NAMES.join(", ")
            )),
        }
    }
}

/// A set of normalized stop words.
///
/// Uses a `HashSet` for O(1) lookup. All words are stored lowercased, so membership is
/// case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stopwords {
    /// Normalized words.
    words: HashSet<String>,
}

impl Stopwords {
    /// Creates a stop-word set from the English base list.
    pub fn new() -> Self {
        Self::for_language(StopwordLanguage::English)
    }

    /// Creates an empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a set from a base language list.
    pub fn for_language(language: StopwordLanguage) -> Self {
        let mut set = Self::empty();
        language.load_into(&mut set);
        set
    }

    /// Adds one word, returning true if it was not already present.
    pub fn insert(&mut self, word: &str) -> bool {
        let normalized = normalize_word(word);
        if normalized.is_empty() {
            return false;
        }
        self.words.insert(normalized)
    }

    /// Adds every word from an iterator.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.insert(word.as_ref());
        }
    }

    /// Adds every word of another set.
    pub fn merge(&mut self, other: &Self) {
        self.words.extend(other.words.iter().cloned());
    }

    /// Checks if a term is a stop word, ignoring case.
    pub fn contains(&self, term: &str) -> bool {
        self.words.contains(term) || self.words.contains(&normalize_word(term))
    }

    /// Checks an already-normalized token without allocating.
    pub(crate) fn contains_normalized(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Returns the total number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no stop words are configured.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns all words in ascending order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }
}

impl<S: AsRef<str>> FromIterator<S> for Stopwords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::empty();
        set.extend(iter);
        set
    }
}

/// Normalizes a stop word the same way tokens are normalized.
fn normalize_word(word: &str) -> String {
    word.trim().replace('\u{2019}', "'").to_lowercase()
}

/// Parses a word-list file: one word per line, `#` starts a comment, blank lines ignored.
pub fn parse_word_list(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(|line| line.split('#').next().unwrap_or("").trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
