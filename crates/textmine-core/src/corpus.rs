//! Document model and tolerant ingestion.
//!
//! Raw input rows are validated into [`Document`]s once per run. Rows without a usable
//! identifier are excluded and reported rather than aborting the run.

use std::{
    collections::{BTreeMap, HashSet},
    fmt,
};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{MalformedDocument, normalize_tag};

/// Identifier of a document, unique within a corpus.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocId(String);

impl DocId {
    /// Creates an identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// An input row before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawDocument {
    /// Identifier, if the row had one.
    pub id: Option<String>,
    /// Free-text fields by name (e.g. `title`, `description`).
    pub text: BTreeMap<String, String>,
    /// Multi-valued tag fields by name (e.g. `keyword`).
    pub tags: BTreeMap<String, Vec<String>>,
}

impl RawDocument {
    /// Creates a raw document with the given identifier and no fields.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Adds a text field.
    pub fn with_text(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.text.insert(field.into(), value.into());
        self
    }

    /// Adds a tag field.
    pub fn with_tags<I, S>(mut self, field: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags
            .insert(field.into(), tags.into_iter().map(Into::into).collect());
        self
    }
}

/// A validated, immutable document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Unique identifier.
    id: DocId,
    /// Free-text fields by name.
    text: BTreeMap<String, String>,
    /// Tag fields by name.
    tags: BTreeMap<String, Vec<String>>,
}

impl Document {
    /// Returns the document identifier.
    pub fn id(&self) -> &DocId {
        &self.id
    }

    /// Returns a text field, if present.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.text.get(field).map(String::as_str)
    }

    /// Returns a tag field, if present.
    pub fn tags(&self, field: &str) -> Option<&[String]> {
        self.tags.get(field).map(Vec::as_slice)
    }
}

/// Selects the single field a token table is built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    /// A free-text field, split into words.
    Text(String),
    /// A multi-valued tag field; each tag is one token.
    Tags(String),
}

impl Field {
    /// Returns the field name.
    pub fn name(&self) -> &str {
        match self {
            Self::Text(name) | Self::Tags(name) => name,
        }
    }

    /// Normalizes a query term the way tokens of this field are normalized.
    ///
    /// Text terms are trimmed and lowercased; tags also get their inner whitespace
    /// collapsed.
    pub fn normalize_term(&self, term: &str) -> String {
        match self {
            Self::Text(_) => term.trim().to_lowercase(),
            Self::Tags(_) => normalize_tag(term).unwrap_or_default(),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(name) => write!(f, "text:{name}"),
            Self::Tags(name) => write!(f, "tags:{name}"),
        }
    }
}

/// What happened during ingestion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestReport {
    /// Number of documents accepted.
    pub accepted: usize,
    /// Documents excluded, in input order.
    pub skipped: Vec<MalformedDocument>,
}

impl IngestReport {
    /// Returns the number of skipped documents.
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// An ordered collection of documents with unique identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    /// Documents in input order.
    documents: Vec<Document>,
}

impl Corpus {
    /// Validates raw rows into a corpus.
    ///
    /// Rows with a missing or blank identifier, and rows repeating an earlier identifier,
    /// are excluded and listed in the returned report. A warning is logged with the count
    /// of skipped rows.
    pub fn ingest<I>(raw: I) -> (Self, IngestReport)
    where
        I: IntoIterator<Item = RawDocument>,
    {
        let mut documents = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut report = IngestReport::default();

        for (index, row) in raw.into_iter().enumerate() {
            let id = match row.id.as_deref().map(str::trim) {
                Some(id) if !id.is_empty() => id.to_string(),
                _ => {
                    report.skipped.push(MalformedDocument::MissingId { index });
                    continue;
                }
            };

            if !seen.insert(id.clone()) {
                report
                    .skipped
                    .push(MalformedDocument::DuplicateId { index, id });
                continue;
            }

            documents.push(Document {
                id: DocId(id),
                text: row.text,
                tags: row.tags,
            });
        }

        report.accepted = documents.len();
        if !report.skipped.is_empty() {
            warn!(
                "skipped {} malformed document(s) during ingestion",
                report.skipped_count()
            );
        }

        (Self { documents }, report)
    }

    /// Returns the number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns true if the corpus has no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Returns the documents in input order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Looks up a document by identifier.
    pub fn get(&self, id: &str) -> Option<&Document> {
        self.documents.iter().find(|d| d.id.as_str() == id)
    }

    /// Returns the document identifiers in input order.
    pub fn ids(&self) -> impl Iterator<Item = &DocId> {
        self.documents.iter().map(|d| &d.id)
    }

    /// Returns a corpus restricted to documents matching the predicate.
    ///
    /// Records are recomputed from scratch on each run, so filtering the corpus is the
    /// only way to drop documents.
    pub fn filter<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&Document) -> bool,
    {
        Self {
            documents: self
                .documents
                .iter()
                .filter(|d| keep(d))
                .cloned()
                .collect(),
        }
    }
}
