//! Pairwise term correlation.
//!
//! Ranks co-occurring pairs by the phi coefficient of document co-presence. With `N`
//! documents, `n11` containing both terms, `n1x` containing `a` and `nx1` containing `b`:
//!
//! ```text
//! phi = (n11·n00 − n10·n01) / sqrt(n1x·n0x·nx1·nx0)
//! ```
//!
//! Only pairs that co-occur at least once are considered. A term present in every
//! document has no variance, so its pairs are left out.

use std::{
    cmp::Ordering,
    collections::{BTreeSet, HashMap},
};

use serde::Serialize;

use crate::{PairCounts, TextError, TokenTable};

/// Phi coefficient of one term pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Correlation {
    /// Lexicographically smaller term.
    pub term_a: String,
    /// Lexicographically larger term.
    pub term_b: String,
    /// Documents containing both terms.
    pub pair_count: u64,
    /// Phi coefficient in `[-1, 1]`.
    pub phi: f64,
}

/// Correlations of one field, strongest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Correlations {
    /// Records sorted by descending phi, then terms.
    records: Vec<Correlation>,
}

impl Correlations {
    /// Correlates every pair co-occurring in at least `min_count` documents.
    pub fn from_tokens(table: &TokenTable, min_count: u64) -> Result<Self, TextError> {
        if table.document_count() == 0 {
            return Err(TextError::EmptyCorpus);
        }
        let n = table.document_count() as f64;

        let mut document_frequency: HashMap<&str, u64> = HashMap::new();
        for doc in table.documents() {
            let distinct: BTreeSet<&str> = doc.tokens.iter().map(String::as_str).collect();
            for term in distinct {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        let pairs = PairCounts::from_tokens(table).with_min_count(min_count);
        let mut records = Vec::with_capacity(pairs.len());
        for pair in pairs.records() {
            let df_a = document_frequency
                .get(pair.term_a.as_str())
                .copied()
                .unwrap_or(0) as f64;
            let df_b = document_frequency
                .get(pair.term_b.as_str())
                .copied()
                .unwrap_or(0) as f64;
            if let Some(phi) = phi(n, df_a, df_b, pair.pair_count as f64) {
                records.push(Correlation {
                    term_a: pair.term_a.clone(),
                    term_b: pair.term_b.clone(),
                    pair_count: pair.pair_count,
                    phi,
                });
            }
        }

        records.sort_by(|x, y| {
            y.phi
                .partial_cmp(&x.phi)
                .unwrap_or(Ordering::Equal)
                .then_with(|| x.term_a.cmp(&y.term_a))
                .then_with(|| x.term_b.cmp(&y.term_b))
        });
        Ok(Self { records })
    }

    /// Returns all correlations, strongest first.
    pub fn records(&self) -> &[Correlation] {
        &self.records
    }

    /// Returns the number of correlated pairs.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no pair could be correlated.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Keeps only pairs that include `term`.
    pub fn involving(mut self, term: &str) -> Self {
        self.records
            .retain(|r| r.term_a == term || r.term_b == term);
        self
    }

    /// Looks up a pair in either order.
    pub fn get(&self, a: &str, b: &str) -> Option<&Correlation> {
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        self.records
            .iter()
            .find(|r| r.term_a == a && r.term_b == b)
    }
}

/// Phi coefficient from a 2×2 contingency table, `None` when a margin is empty.
fn phi(n: f64, n1x: f64, nx1: f64, n11: f64) -> Option<f64> {
    let n10 = n1x - n11;
    let n01 = nx1 - n11;
    let n00 = n - n1x - nx1 + n11;
    let denominator = (n1x * (n - n1x) * nx1 * (n - nx1)).sqrt();
    if denominator == 0.0 {
        return None;
    }
    Some((n11 * n00 - n10 * n01) / denominator)
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

    #[test]
    fn perfectly_correlated_pair() {
        let corr = Correlations::from_tokens(
            &table(&[
                ("d1", vec!["ice", "snow"]),
                ("d2", vec!["ice", "snow"]),
                ("d3", vec!["rain"]),
                ("d4", vec!["sun"]),
            ]),
            1,
        )
        .unwrap();
        let pair = corr.get("snow", "ice").unwrap();
        assert_eq!(pair.pair_count, 2);
        assert!((pair.phi - 1.0).abs() < 1e-12);
    }

    #[test]
    fn known_phi_value() {
        // n11 = 1, n1x = 2, nx1 = 2, N = 4: (1·1 − 1·1) / sqrt(2·2·2·2) = 0
        let corr = Correlations::from_tokens(
            &table(&[
                ("d1", vec!["a", "b"]),
                ("d2", vec!["a"]),
                ("d3", vec!["b"]),
                ("d4", vec!["c"]),
            ]),
            1,
        )
        .unwrap();
        assert_eq!(corr.get("a", "b").unwrap().phi, 0.0);
    }

    #[test]
    fn terms_in_every_document_are_left_out() {
        let corr = Correlations::from_tokens(
            &table(&[("doc1", vec!["cat", "sat"]), ("doc2", vec!["dog", "sat"])]),
            1,
        )
        .unwrap();
        assert!(corr.is_empty());
    }

    #[test]
    fn ordering_and_min_count() {
        let docs = table(&[
            ("d1", vec!["a", "b", "c"]),
            ("d2", vec!["a", "b"]),
            ("d3", vec!["c", "d"]),
            ("d4", vec!["d"]),
            ("d5", vec!["e"]),
        ]);
        let corr = Correlations::from_tokens(&docs, 1).unwrap();
        let phis: Vec<f64> = corr.records().iter().map(|r| r.phi).collect();
        assert!(phis.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(corr.records()[0].term_a, "a");
        assert_eq!(corr.records()[0].term_b, "b");

        let frequent = Correlations::from_tokens(&docs, 2).unwrap();
        assert_eq!(frequent.len(), 1);
        assert_eq!(frequent.involving("c").len(), 0);
    }

    #[test]
    fn empty_corpus_is_refused() {
        assert_eq!(
            Correlations::from_tokens(&table(&[]), 1).unwrap_err(),
            TextError::EmptyCorpus
        );
    }
}
