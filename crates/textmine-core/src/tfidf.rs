//! TF-IDF scoring.
//!
//! For every counted `(document, term)`:
//!
//! - `tf = raw_count / document_total`
//! - `df(term)` = number of documents containing the term at least once
//! - `idf(term) = ln(N / df(term))`, with `N` the number of documents in the corpus
//! - `tfidf = tf × idf`
//!
//! Documents without tokens have no records but still count towards `N`. A term present
//! in every document scores zero.

use std::{cmp::Ordering, collections::HashMap};

use log::debug;
use serde::Serialize;

use crate::{DocId, TermCounts, TextError};

/// A term count extended with its tf-idf components.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TfIdf {
    /// Document identifier.
    pub document_id: DocId,
    /// Normalized term.
    pub term: String,
    /// Occurrences of the term in the document.
    pub raw_count: u64,
    /// Total tokens in the document.
    pub document_total: u64,
    /// `raw_count / document_total`.
    pub term_frequency: f64,
    /// `ln(N / df)`.
    pub inverse_document_frequency: f64,
    /// `term_frequency × inverse_document_frequency`.
    pub tfidf_score: f64,
}

/// TF-IDF records for every counted term of a corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct TfIdfTable {
    /// Records in the order of the source counts.
    records: Vec<TfIdf>,
    /// Document frequency of every term.
    document_frequency: HashMap<String, u64>,
    /// Number of documents in the corpus.
    document_count: u64,
}

impl TfIdfTable {
    /// Scores every record of a count table.
    ///
    /// Fails with [`TextError::EmptyCorpus`] when there are no documents, and with
    /// [`TextError::InternalConsistency`] when counts and totals disagree.
    pub fn score(counts: &TermCounts) -> Result<Self, TextError> {
        if counts.document_count() == 0 {
            return Err(TextError::EmptyCorpus);
        }
        counts.verify()?;

        let document_count = counts.document_count() as u64;
        let mut document_frequency: HashMap<String, u64> = HashMap::new();
        for record in counts.records() {
            *document_frequency.entry(record.term.clone()).or_insert(0) += 1;
        }

        let records = counts
            .records()
            .iter()
            .map(|record| {
                let df = document_frequency[&record.term];
                let term_frequency = record.raw_count as f64 / record.document_total as f64;
                let inverse_document_frequency = idf(document_count, df);
                TfIdf {
                    document_id: record.document_id.clone(),
                    term: record.term.clone(),
                    raw_count: record.raw_count,
                    document_total: record.document_total,
                    term_frequency,
                    inverse_document_frequency,
                    tfidf_score: term_frequency * inverse_document_frequency,
                }
            })
            .collect();

        debug!(
            "scored {} terms over {} documents ({} distinct terms)",
            counts.records().len(),
            document_count,
            document_frequency.len()
        );

        Ok(Self {
            records,
            document_frequency,
            document_count,
        })
    }

    /// Returns the records in count-table order.
    pub fn records(&self) -> &[TfIdf] {
        &self.records
    }

    /// Returns the number of documents in the corpus.
    pub fn document_count(&self) -> u64 {
        self.document_count
    }

    /// Returns the number of documents containing a term, if the term occurs at all.
    pub fn document_frequency(&self, term: &str) -> Option<u64> {
        self.document_frequency.get(term).copied()
    }

    /// Returns the inverse document frequency of a term, if the term occurs at all.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.document_frequency(term)
            .map(|df| idf(self.document_count, df))
    }

    /// Returns the record for one document and term.
    pub fn get(&self, document_id: &str, term: &str) -> Option<&TfIdf> {
        self.records
            .iter()
            .find(|r| r.document_id.as_str() == document_id && r.term == term)
    }

    /// Returns all records, highest score first.
    ///
    /// Ties are broken by document identifier, then term.
    pub fn ranked(&self) -> Vec<&TfIdf> {
        let mut ranked: Vec<&TfIdf> = self.records.iter().collect();
        ranked.sort_by(|a, b| {
            score_desc(a, b)
                .then_with(|| a.document_id.cmp(&b.document_id))
                .then_with(|| a.term.cmp(&b.term))
        });
        ranked
    }

    /// Returns the `n` highest-scoring records of each document, in corpus order.
    ///
    /// Ties within a document are broken by term.
    pub fn top_per_document(&self, n: usize) -> Vec<&TfIdf> {
        let mut out = Vec::new();
        let mut start = 0;
        while start < self.records.len() {
            let id = &self.records[start].document_id;
            let end = self.records[start..]
                .iter()
                .position(|r| &r.document_id != id)
                .map_or(self.records.len(), |offset| start + offset);

            let mut group: Vec<&TfIdf> = self.records[start..end].iter().collect();
            group.sort_by(|a, b| by_score_desc(a, b));
            out.extend(group.into_iter().take(n));
            start = end;
        }
        out
    }
}

/// `ln(N / df)`.
fn idf(document_count: u64, document_frequency: u64) -> f64 {
    (document_count as f64 / document_frequency as f64).ln()
}

/// Orders by descending score.
fn score_desc(a: &TfIdf, b: &TfIdf) -> Ordering {
    b.tfidf_score
        .partial_cmp(&a.tfidf_score)
        .unwrap_or(Ordering::Equal)
}

/// Orders by descending score, then ascending term.
fn by_score_desc(a: &TfIdf, b: &TfIdf) -> Ordering {
    score_desc(a, b).then_with(|| a.term.cmp(&b.term))
}
