//! Error types for textmine-core.

use thiserror::Error;

/// Terminating failures of the corpus computations.
///
/// When one of these is returned no partial table is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    /// The corpus has no documents, so document frequency and the document count are
    /// undefined.
    #[error("corpus contains no documents")]
    EmptyCorpus,

    /// Term tallies disagree with document totals. This indicates a bug in the aggregation
    /// step and is never corrected silently.
    #[error("internal consistency violation in document '{document_id}': {detail}")]
    InternalConsistency {
        /// Document whose records disagree.
        document_id: String,
        /// Description of the disagreement.
        detail: String,
    },
}

/// Why an input document was excluded from the corpus.
///
/// Malformed documents are not fatal: ingestion skips them and reports them in an
/// [`IngestReport`](crate::IngestReport).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedDocument {
    /// The document has no identifier, or the identifier is blank.
    #[error("document at position {index} has no identifier")]
    MissingId {
        /// Zero-based position of the document in the input.
        index: usize,
    },

    /// The identifier was already used by an earlier document.
    #[error("document at position {index} reuses identifier '{id}'")]
    DuplicateId {
        /// Zero-based position of the document in the input.
        index: usize,
        /// The repeated identifier.
        id: String,
    },
}

impl MalformedDocument {
    /// Returns the input position of the skipped document.
    pub fn index(&self) -> usize {
        match self {
            Self::MissingId { index } | Self::DuplicateId { index, .. } => *index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_document() {
        let err = TextError::InternalConsistency {
            document_id: "doc1".into(),
            detail: "total 0 with 2 counted tokens".into(),
        };
        assert_eq!(
            err.to_string(),
            "internal consistency violation in document 'doc1': total 0 with 2 counted tokens"
        );
        assert_eq!(
            TextError::EmptyCorpus.to_string(),
            "corpus contains no documents"
        );
    }

    #[test]
    fn malformed_index() {
        assert_eq!(MalformedDocument::MissingId { index: 3 }.index(), 3);
        let dup = MalformedDocument::DuplicateId {
            index: 7,
            id: "a".into(),
        };
        assert_eq!(dup.index(), 7);
        assert_eq!(
            dup.to_string(),
            "document at position 7 reuses identifier 'a'"
        );
    }
}
