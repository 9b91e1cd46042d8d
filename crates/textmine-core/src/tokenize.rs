//! Tokenization and normalization.
//!
//! Text fields are lowercased and split into words. Every character that is not
//! alphanumeric acts as a separator, except an apostrophe between two word characters
//! (`don't` stays one word). Tokens are then filtered against the stop-word set and the
//! noise rules in [`TokenizerOptions`].
//!
//! Tag fields are not split: each tag is one token after whitespace and case
//! normalization.

use std::mem;

use log::debug;
use rayon::prelude::*;
use serde::Serialize;

use crate::{Corpus, DocId, Field, Stopwords};

/// Noise rules applied after stop-word removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// Tokens shorter than this many characters are discarded.
    pub min_word_length: usize,
    /// Discard tokens made only of digits.
    pub drop_numeric: bool,
    /// Discard version artifacts such as `v1` or `v03`.
    pub drop_versions: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            min_word_length: 1,
            drop_numeric: true,
            drop_versions: true,
        }
    }
}

/// Splits text fields into normalized, filtered tokens.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    /// Words to discard.
    stopwords: Stopwords,
    /// Noise rules.
    options: TokenizerOptions,
}

impl Tokenizer {
    /// Creates a tokenizer with default noise rules.
    pub fn new(stopwords: Stopwords) -> Self {
        Self::with_options(stopwords, TokenizerOptions::default())
    }

    /// Creates a tokenizer with explicit noise rules.
    pub fn with_options(stopwords: Stopwords, options: TokenizerOptions) -> Self {
        Self { stopwords, options }
    }

    /// Returns the stop-word set in use.
    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    /// Returns the noise rules in use.
    pub fn options(&self) -> TokenizerOptions {
        self.options
    }

    /// Tokenizes one text field, in text order.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        split_words(text)
            .into_iter()
            .filter(|word| self.keep(word))
            .collect()
    }

    /// Returns true if a normalized word survives filtering.
    fn keep(&self, word: &str) -> bool {
        if word.chars().count() < self.options.min_word_length {
            return false;
        }
        if self.options.drop_numeric && is_numeric(word) {
            return false;
        }
        if self.options.drop_versions && is_version(word) {
            return false;
        }
        !self.stopwords.contains_normalized(word)
    }

    /// Builds the token table for one field of every document.
    ///
    /// Documents lacking the field, or whose tokens are all filtered out, are kept with an
    /// empty token list so that they still count towards the corpus size.
    pub fn tokenize_field(&self, corpus: &Corpus, field: &Field) -> TokenTable {
        let documents: Vec<DocumentTokens> = corpus
            .documents()
            .par_iter()
            .map(|doc| {
                let tokens = match field {
                    Field::Text(name) => doc.text(name).map(|t| self.tokenize(t)),
                    Field::Tags(name) => doc
                        .tags(name)
                        .map(|tags| tags.iter().filter_map(|t| normalize_tag(t)).collect()),
                };
                DocumentTokens {
                    id: doc.id().clone(),
                    tokens: tokens.unwrap_or_default(),
                }
            })
            .collect();

        let table = TokenTable {
            field: field.clone(),
            documents,
        };
        debug!(
            "tokenized {}: {} documents, {} tokens",
            field,
            table.document_count(),
            table.token_count()
        );
        table
    }
}

/// Lowercases text and splits it into words without any filtering.
pub fn split_words(text: &str) -> Vec<String> {
    let chars: Vec<char> = text
        .to_lowercase()
        .chars()
        .map(|c| if c == '\u{2019}' { '\'' } else { c })
        .collect();

    let mut words = Vec::new();
    let mut current = String::new();
    for (i, &c) in chars.iter().enumerate() {
        if c.is_alphanumeric() {
            current.push(c);
        } else if c == '\''
            && !current.is_empty()
            && chars.get(i + 1).is_some_and(|next| next.is_alphanumeric())
        {
            current.push(c);
        } else if !current.is_empty() {
            words.push(mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

/// Normalizes one tag: trims, collapses inner whitespace, lowercases.
///
/// Returns `None` for blank tags.
pub fn normalize_tag(tag: &str) -> Option<String> {
    let collapsed = tag.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed.to_lowercase())
    }
}

/// True for tokens made only of digits.
fn is_numeric(word: &str) -> bool {
    word.chars().all(char::is_numeric)
}

/// True for version artifacts: `v` followed by one or more ASCII digits.
fn is_version(word: &str) -> bool {
    word.strip_prefix('v')
        .is_some_and(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()))
}

/// Tokens of one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTokens {
    /// Document identifier.
    pub id: DocId,
    /// Tokens in text order, repeats included.
    pub tokens: Vec<String>,
}

/// One `(document_id, token)` occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenRecord {
    /// Document identifier.
    pub document_id: DocId,
    /// Normalized token.
    pub token: String,
}

/// Token occurrences of one field across the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenTable {
    /// Field the tokens came from.
    field: Field,
    /// Every corpus document in order, including those with no tokens.
    documents: Vec<DocumentTokens>,
}

impl TokenTable {
    /// Builds a table from pre-tokenized documents.
    pub fn from_documents(field: Field, documents: Vec<DocumentTokens>) -> Self {
        Self { field, documents }
    }

    /// Returns the field the tokens came from.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Returns per-document tokens in corpus order.
    pub fn documents(&self) -> &[DocumentTokens] {
        &self.documents
    }

    /// Returns the number of documents, including those without tokens.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Returns the total number of token occurrences.
    pub fn token_count(&self) -> usize {
        self.documents.iter().map(|d| d.tokens.len()).sum()
    }

    /// Returns one record per token occurrence, in corpus then text order.
    pub fn records(&self) -> Vec<TokenRecord> {
        self.documents
            .iter()
            .flat_map(|doc| {
                doc.tokens.iter().map(|token| TokenRecord {
                    document_id: doc.id.clone(),
                    token: token.clone(),
                })
            })
            .collect()
    }
}
