//! Corpus indexing and keyword-frequency search.
//!
//! The engine ingests a batch of plain-text documents, precomputes two text
//! views per document (raw-lowercased and lemmatized), and answers repeated
//! keyword-frequency queries against either view. Results come back as a
//! typed document-by-keyword table with deterministic row and column order.
//!
//! The pipeline, leaf-first:
//!
//! - [`analyzer`]: lowercasing/whitespace folding, the streaming space
//!   tokenizer, and the [`Lemmatize`] collaborator seam
//! - [`arena`]: contiguous storage for all document text of one corpus
//!   generation
//! - [`corpus`]: the [`Concordance`] session - ingest, search, table
//!   building, statistics

pub mod analyzer;
pub mod arena;
pub mod corpus;

pub use analyzer::lemmatizer::{DictionaryLemmatizer, Lemmatize};
pub use analyzer::normalizer::TextNormalizer;
pub use analyzer::tokenizer::word_count;
pub use corpus::search::{count_occurrences, sanitize_keywords};
pub use corpus::table::build_table;
pub use corpus::{ArchiveEntry, Concordance, Corpus, CorpusStats, FrequencyResults, SessionMetrics};
