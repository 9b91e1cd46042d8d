//! Per-document term counts.
//!
//! Tallies each `(document, term)` pair of a [`TokenTable`] and each document's total token
//! count. Counts are exact integers and deterministic for a given token table.

use std::collections::{BTreeMap, HashMap, HashSet};

use serde::Serialize;

use crate::{DocId, TextError, TokenTable};

/// Occurrences of one term in one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TermCount {
    /// Document identifier.
    pub document_id: DocId,
    /// Normalized term.
    pub term: String,
    /// Occurrences of the term in the document (always at least 1).
    pub raw_count: u64,
    /// Total tokens in the document.
    pub document_total: u64,
}

/// Corpus-wide occurrences of one term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordFrequency {
    /// Normalized term.
    pub term: String,
    /// Occurrences across all documents.
    pub count: u64,
    /// Number of documents containing the term.
    pub document_frequency: u64,
}

/// Term counts for every document of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermCounts {
    /// Records ordered by corpus document order, then term.
    records: Vec<TermCount>,
    /// Document identifiers and totals in corpus order, including zero-token documents.
    totals: Vec<(DocId, u64)>,
}

impl TermCounts {
    /// Counts the tokens of a table.
    pub fn from_tokens(table: &TokenTable) -> Self {
        let mut records = Vec::new();
        let mut totals = Vec::with_capacity(table.document_count());

        for doc in table.documents() {
            let mut per_term: BTreeMap<&str, u64> = BTreeMap::new();
            for token in &doc.tokens {
                *per_term.entry(token.as_str()).or_insert(0) += 1;
            }

            let total = doc.tokens.len() as u64;
            records.extend(per_term.into_iter().map(|(term, raw_count)| TermCount {
                document_id: doc.id.clone(),
                term: term.to_string(),
                raw_count,
                document_total: total,
            }));
            totals.push((doc.id.clone(), total));
        }

        Self { records, totals }
    }

    /// Builds counts from precomputed parts.
    ///
    /// No validation is done here; call [`verify`](Self::verify) before trusting the data.
    pub fn from_parts(records: Vec<TermCount>, totals: Vec<(DocId, u64)>) -> Self {
        Self { records, totals }
    }

    /// Returns the count records.
    pub fn records(&self) -> &[TermCount] {
        &self.records
    }

    /// Returns each document's total token count, in corpus order.
    pub fn totals(&self) -> &[(DocId, u64)] {
        &self.totals
    }

    /// Returns the total token count of one document.
    pub fn document_total(&self, id: &str) -> Option<u64> {
        self.totals
            .iter()
            .find(|(doc, _)| doc.as_str() == id)
            .map(|(_, total)| *total)
    }

    /// Returns the number of documents in the corpus, including those without tokens.
    pub fn document_count(&self) -> usize {
        self.totals.len()
    }

    /// Returns the count of one term in one document, zero if absent.
    pub fn raw_count(&self, id: &str, term: &str) -> u64 {
        self.records
            .iter()
            .find(|r| r.document_id.as_str() == id && r.term == term)
            .map_or(0, |r| r.raw_count)
    }

    /// Checks that counts and totals agree.
    ///
    /// Each `(document, term)` is counted once, every record carries its document's stored
    /// total, and every document's counted terms add up to that total.
    pub fn verify(&self) -> Result<(), TextError> {
        let totals: HashMap<&DocId, u64> = self.totals.iter().map(|(id, t)| (id, *t)).collect();
        let mut seen: HashSet<(&DocId, &str)> = HashSet::new();
        let mut sums: HashMap<&DocId, u64> = HashMap::new();
        for record in &self.records {
            if !seen.insert((&record.document_id, record.term.as_str())) {
                return Err(TextError::InternalConsistency {
                    document_id: record.document_id.to_string(),
                    detail: format!("term '{}' is counted more than once", record.term),
                });
            }
            if record.raw_count == 0 {
                return Err(TextError::InternalConsistency {
                    document_id: record.document_id.to_string(),
                    detail: format!("term '{}' has a zero count", record.term),
                });
            }
            if record.document_total == 0 {
                return Err(TextError::InternalConsistency {
                    document_id: record.document_id.to_string(),
                    detail: format!(
                        "term '{}' counted {} time(s) but document total is 0",
                        record.term, record.raw_count
                    ),
                });
            }
            if let Some(&total) = totals.get(&record.document_id)
                && total != record.document_total
            {
                return Err(TextError::InternalConsistency {
                    document_id: record.document_id.to_string(),
                    detail: format!(
                        "term '{}' carries document total {}, stored total is {total}",
                        record.term, record.document_total
                    ),
                });
            }
            *sums.entry(&record.document_id).or_insert(0) += record.raw_count;
        }

        for (id, total) in &self.totals {
            let counted = sums.remove(id).unwrap_or(0);
            if counted != *total {
                return Err(TextError::InternalConsistency {
                    document_id: id.to_string(),
                    detail: format!("term counts sum to {counted}, document total is {total}"),
                });
            }
        }

        if let Some(id) = sums.into_keys().next() {
            return Err(TextError::InternalConsistency {
                document_id: id.to_string(),
                detail: "terms counted for a document outside the corpus".to_string(),
            });
        }

        Ok(())
    }

    /// Returns corpus-wide term totals, most frequent first, ties broken by term.
    pub fn word_frequencies(&self) -> Vec<WordFrequency> {
        let mut by_term: HashMap<&str, (u64, u64)> = HashMap::new();
        for record in &self.records {
            let entry = by_term.entry(record.term.as_str()).or_insert((0, 0));
            entry.0 += record.raw_count;
            entry.1 += 1;
        }

        let mut words: Vec<WordFrequency> = by_term
            .into_iter()
            .map(|(term, (count, document_frequency))| WordFrequency {
                term: term.to_string(),
                count,
                document_frequency,
            })
            .collect();
        words.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.term.cmp(&b.term)));
        words
    }
}
