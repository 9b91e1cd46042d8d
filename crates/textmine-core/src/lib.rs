//! Corpus text mining: tokenization, term counts, tf-idf and co-occurrence.
//!
//! Every computation is a stateless batch transform over an in-memory [`Corpus`]:
//!
//! 1. **Ingestion**: raw rows are validated into documents; rows without a usable
//!    identifier are skipped and reported ([`Corpus::ingest`])
//! 2. **Tokenization**: one field is lowercased, split into words and filtered against a
//!    [`Stopwords`] set ([`Tokenizer::tokenize_field`])
//! 3. **Counting**: per-document term tallies and totals ([`TermCounts`])
//! 4. **Scoring**: tf-idf per `(document, term)` ([`TfIdfTable`])
//! 5. **Pairs**: document co-occurrence of term pairs ([`PairCounts`]) and their phi
//!    correlation ([`Correlations`])
//!
//! ```
//! use textmine_core::{Corpus, Field, PairCounts, RawDocument, TermCounts, TfIdfTable, Tokenizer};
//!
//! let (corpus, _) = Corpus::ingest(vec![
//!     RawDocument::new("doc1").with_text("text", "the cat sat"),
//!     RawDocument::new("doc2").with_text("text", "the dog sat"),
//! ]);
//! let tokenizer = Tokenizer::new(["the"].into_iter().collect());
//! let tokens = tokenizer.tokenize_field(&corpus, &Field::Text("text".into()));
//!
//! let scores = TfIdfTable::score(&TermCounts::from_tokens(&tokens)).unwrap();
//! assert_eq!(scores.idf("sat"), Some(0.0));
//!
//! let pairs = PairCounts::from_tokens(&tokens);
//! assert_eq!(pairs.count("cat", "sat"), 1);
//! assert_eq!(pairs.count("cat", "dog"), 0);
//! ```

#![warn(missing_docs)]

mod cooccur;
mod corpus;
mod correlate;
mod counts;
mod error;
mod stopwords;
mod tfidf;
mod tokenize;

pub use cooccur::{CoOccurrence, PairCounts};
pub use corpus::{Corpus, DocId, Document, Field, IngestReport, RawDocument};
pub use correlate::{Correlation, Correlations};
pub use counts::{TermCount, TermCounts, WordFrequency};
pub use error::{MalformedDocument, TextError};
pub use stopwords::{StopwordLanguage, Stopwords, parse_word_list};
pub use tfidf::{TfIdf, TfIdfTable};
pub use tokenize::{
    DocumentTokens, TokenRecord, TokenTable, Tokenizer, TokenizerOptions, normalize_tag,
    split_words,
};
