//! Pairwise term co-occurrence.
//!
//! Two terms co-occur when they both appear in the same document. Each document
//! contributes at most once per pair, however often either term repeats in it.

use std::collections::{BTreeSet, HashMap};

use log::debug;
use rayon::prelude::*;
use serde::Serialize;

use crate::TokenTable;

/// Number of documents in which two terms appear together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoOccurrence {
    /// Lexicographically smaller term.
    pub term_a: String,
    /// Lexicographically larger term.
    pub term_b: String,
    /// Documents containing both terms.
    pub pair_count: u64,
}

impl CoOccurrence {
    /// Returns true if either side of the pair is `term`.
    pub fn involves(&self, term: &str) -> bool {
        self.term_a == term || self.term_b == term
    }
}

/// Accumulator keyed by canonical `(smaller, larger)` pairs.
type PairMap = HashMap<(String, String), u64>;

/// Co-occurrence counts of one field, most frequent pairs first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PairCounts {
    /// Records sorted by descending count, then `term_a`, then `term_b`.
    records: Vec<CoOccurrence>,
}

impl PairCounts {
    /// Counts every unordered pair of distinct terms per document.
    ///
    /// Work per document is quadratic in its number of distinct terms, so long free-text
    /// fields with large vocabularies get expensive. Documents are processed in parallel
    /// and the partial counts summed.
    pub fn from_tokens(table: &TokenTable) -> Self {
        let counts: PairMap = table
            .documents()
            .par_iter()
            .fold(PairMap::new, |mut acc, doc| {
                let distinct: BTreeSet<&str> = doc.tokens.iter().map(String::as_str).collect();
                let terms: Vec<&str> = distinct.into_iter().collect();
                for (i, a) in terms.iter().enumerate() {
                    for b in &terms[i + 1..] {
                        *acc.entry((a.to_string(), b.to_string())).or_insert(0) += 1;
                    }
                }
                acc
            })
            .reduce(PairMap::new, merge);

        let mut records: Vec<CoOccurrence> = counts
            .into_iter()
            .map(|((term_a, term_b), pair_count)| CoOccurrence {
                term_a,
                term_b,
                pair_count,
            })
            .collect();
        sort_records(&mut records);

        debug!(
            "counted {} co-occurring pairs over {} documents",
            records.len(),
            table.document_count()
        );
        Self { records }
    }

    /// Returns all pairs, most frequent first.
    pub fn records(&self) -> &[CoOccurrence] {
        &self.records
    }

    /// Returns the number of distinct pairs.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no pair co-occurs.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Keeps only pairs seen in at least `min_count` documents.
    pub fn with_min_count(mut self, min_count: u64) -> Self {
        self.records.retain(|r| r.pair_count >= min_count);
        self
    }

    /// Keeps only pairs that include `term`.
    pub fn involving(mut self, term: &str) -> Self {
        self.records.retain(|r| r.involves(term));
        self
    }

    /// Looks up a pair in either order.
    pub fn get(&self, a: &str, b: &str) -> Option<&CoOccurrence> {
        let (a, b) = canonical(a, b);
        self.records
            .iter()
            .find(|r| r.term_a == a && r.term_b == b)
    }

    /// Returns the count of a pair in either order, zero if absent.
    pub fn count(&self, a: &str, b: &str) -> u64 {
        self.get(a, b).map_or(0, |r| r.pair_count)
    }
}

/// Orders two terms so the smaller comes first.
fn canonical<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Sums two partial accumulators.
fn merge(mut left: PairMap, right: PairMap) -> PairMap {
    if left.len() < right.len() {
        return merge(right, left);
    }
    for (key, count) in right {
        *left.entry(key).or_insert(0) += count;
    }
    left
}

/// Sorts by descending count, then ascending terms.
fn sort_records(records: &mut [CoOccurrence]) {
    records.sort_by(|x, y| {
        y.pair_count
            .cmp(&x.pair_count)
            .then_with(|| x.term_a.cmp(&y.term_a))
            .then_with(|| x.term_b.cmp(&y.term_b))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DocId, DocumentTokens, Field};

    fn table(docs: &[(&str, Vec<&str>)]) -> TokenTable {
        TokenTable::from_documents(
            Field::Tags("keyword".into()),
            docs.iter()
                .map(|(id, tokens)| DocumentTokens {
                    id: DocId::new(*id),
                    tokens: tokens.iter().map(|t| (*t).to_string()).collect(),
                })
                .collect(),
        )
    }

    fn summary(pairs: &PairCounts) -> Vec<(&str, &str, u64)> {
        pairs
            .records()
            .iter()
            .map(|r| (r.term_a.as_str(), r.term_b.as_str(), r.pair_count))
            .collect()
    }

    #[test]
    fn cat_and_dog() {
        let pairs = PairCounts::from_tokens(&table(&[
            ("doc1", vec!["cat", "sat"]),
            ("doc2", vec!["dog", "sat"]),
        ]));
        assert_eq!(summary(&pairs), vec![("cat", "sat", 1), ("dog", "sat", 1)]);
        assert_eq!(pairs.count("sat", "cat"), 1);
        assert!(pairs.get("cat", "dog").is_none());
    }

    #[test]
    fn repeats_count_once_per_document() {
        let pairs = PairCounts::from_tokens(&table(&[("d", vec!["x", "y", "x", "y", "x"])]));
        assert_eq!(summary(&pairs), vec![("x", "y", 1)]);
    }

    #[test]
    fn no_self_pairs_and_canonical_keys() {
        let pairs = PairCounts::from_tokens(&table(&[
            ("d1", vec!["zeta", "alpha", "zeta"]),
            ("d2", vec!["alpha", "zeta", "mid"]),
        ]));
        for r in pairs.records() {
            assert!(r.term_a < r.term_b);
        }
        assert_eq!(pairs.count("alpha", "zeta"), 2);
        assert_eq!(pairs.count("zeta", "zeta"), 0);
    }

    #[test]
    fn sorted_by_count_then_terms() {
        let pairs = PairCounts::from_tokens(&table(&[
            ("d1", vec!["a", "b", "c"]),
            ("d2", vec!["b", "c"]),
            ("d3", vec!["b", "c", "d"]),
        ]));
        assert_eq!(
            summary(&pairs),
            vec![
                ("b", "c", 3),
                ("a", "b", 1),
                ("a", "c", 1),
                ("b", "d", 1),
                ("c", "d", 1),
            ]
        );
    }

    #[test]
    fn single_term_and_empty_documents_contribute_nothing() {
        let pairs = PairCounts::from_tokens(&table(&[("a", vec!["solo"]), ("b", vec![])]));
        assert!(pairs.is_empty());
    }

    #[test]
    fn filters() {
        let pairs = PairCounts::from_tokens(&table(&[
            ("d1", vec!["a", "b", "c"]),
            ("d2", vec!["b", "c"]),
        ]));
        assert_eq!(summary(&pairs.clone().with_min_count(2)), vec![("b", "c", 2)]);

        let with_a = pairs.involving("a");
        assert_eq!(summary(&with_a), vec![("a", "b", 1), ("a", "c", 1)]);
    }

    #[test]
    fn parallel_counting_matches_sequential_expectation() {
        let docs: Vec<(String, Vec<&str>)> = (0..500)
            .map(|i| (format!("d{i}"), if i % 2 == 0 { vec!["p", "q"] } else { vec!["q", "r"] }))
            .collect();
        let borrowed: Vec<(&str, Vec<&str>)> =
            docs.iter().map(|(id, t)| (id.as_str(), t.clone())).collect();
        let pairs = PairCounts::from_tokens(&table(&borrowed));
        assert_eq!(summary(&pairs), vec![("p", "q", 250), ("q", "r", 250)]);
    }
}
