//! Session and corpus types.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use concordance_types::CorpusMode;

use crate::analyzer::lemmatizer::Lemmatize;
use crate::analyzer::normalizer::TextNormalizer;
use crate::arena::{Span, TextArena};

/// One ingested document.
///
/// The text itself lives in the corpus arena; the document only carries
/// spans into it.
#[derive(Debug)]
pub struct Document {
    pub(crate) name: Box<str>,
    pub(crate) raw: Span,
    pub(crate) normalized: Span,
    pub(crate) word_count: u32,
}

impl Document {
    /// The document identifier (base filename of the archive entry).
    #[inline(always)]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of whitespace-delimited words in the original text.
    #[inline(always)]
    #[must_use]
    pub fn word_count(&self) -> u32 {
        self.word_count
    }
}

/// An immutable corpus generation.
///
/// Built in one piece by ingest and never mutated afterwards; the session
/// swaps whole generations. Documents keep their ingest traversal order.
#[derive(Default)]
pub struct Corpus {
    pub(crate) docs: Vec<Document>,
    pub(crate) by_name: FxHashMap<Box<str>, u32>,
    pub(crate) arena: TextArena,
}

impl Corpus {
    /// Returns the number of documents.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.docs.len()
    }

    /// Returns `true` if the corpus holds no documents.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    /// The documents in ingest order.
    #[inline(always)]
    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.docs
    }

    /// The selected text view of a document.
    #[inline(always)]
    #[must_use]
    pub fn text(&self, doc: &Document, mode: CorpusMode) -> &str {
        match mode {
            CorpusMode::Raw => self.arena.get(doc.raw),
            CorpusMode::Normalized => self.arena.get(doc.normalized),
        }
    }

    /// Looks a document's text up by identifier.
    #[must_use]
    pub fn text_by_name(&self, name: &str, mode: CorpusMode) -> Option<&str> {
        let idx = *self.by_name.get(name)? as usize;
        Some(self.text(&self.docs[idx], mode))
    }

    /// `(identifier, word count)` pairs in ingest order.
    pub fn metadata(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.docs.iter().map(|d| (d.name(), d.word_count))
    }

    /// `(identifier, text)` pairs of the selected view, in ingest order.
    pub fn texts(&self, mode: CorpusMode) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.docs.iter().map(move |d| (d.name(), self.text(d, mode)))
    }
}

/// One entry handed over by an archive source.
///
/// The engine consumes only entries with `is_text` set (by convention,
/// filenames ending in `.txt`); everything else is skipped silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Path of the entry relative to the archive root.
    pub relative_path: String,
    /// Raw bytes of the entry.
    pub content: Vec<u8>,
    /// Whether the producer classified this entry as a text document.
    pub is_text: bool,
}

/// The keyword-frequency session.
///
/// Owns the live corpus and the analysis pipeline; there is no ambient
/// global state. Ingest builds a complete replacement corpus and then swaps
/// a single `Arc`, so a reader holding a [`snapshot`](Concordance::snapshot)
/// never observes a mix of old and new documents, and slow lemmatization
/// never blocks reads of the previous generation.
pub struct Concordance {
    pub(crate) corpus: Arc<Corpus>,
    pub(crate) normalizer: TextNormalizer,
    pub(crate) lemmatizer: Box<dyn Lemmatize>,
    pub(crate) ingest_count: u64,
    pub(crate) query_count: u64,
}

impl Concordance {
    /// Creates a session around a lemmatizer.
    ///
    /// The lemmatizer is mandatory: building it is where a broken deployment
    /// fails, before any corpus work starts.
    pub fn new(lemmatizer: Box<dyn Lemmatize>) -> Self {
        Self {
            corpus: Arc::new(Corpus::default()),
            normalizer: TextNormalizer::new(),
            lemmatizer,
            ingest_count: 0,
            query_count: 0,
        }
    }

    /// The current corpus generation.
    ///
    /// The snapshot stays valid and unchanged across later ingests.
    #[inline(always)]
    #[must_use]
    pub fn snapshot(&self) -> Arc<Corpus> {
        Arc::clone(&self.corpus)
    }

    /// Normalizes raw text the way ingest does: lowercase, collapse
    /// whitespace, lemmatize every token.
    ///
    /// Pure over its input; repeated calls with the same text always return
    /// the same string.
    #[must_use]
    pub fn normalize(&self, raw: &str) -> String {
        self.lemmatizer.lemmatize(&self.normalizer.fold(raw))
    }

    /// Number of documents in the live corpus.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    /// Returns `true` if the live corpus is empty.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }

    /// Drops the live corpus and resets the session counters.
    pub fn clear(&mut self) {
        self.corpus = Arc::new(Corpus::default());
        self.ingest_count = 0;
        self.query_count = 0;
    }

    /// Returns basic metrics about the session's operation.
    #[inline(always)]
    #[must_use]
    pub fn metrics(&self) -> SessionMetrics {
        SessionMetrics {
            ingests_completed: self.ingest_count,
            queries_executed: self.query_count,
            current_doc_count: self.corpus.len() as u64,
        }
    }
}

/// Basic operational metrics for a session.
#[derive(Debug, Clone, Copy)]
pub struct SessionMetrics {
    /// Number of successful ingests since the session started.
    pub ingests_completed: u64,
    /// Number of search queries executed.
    pub queries_executed: u64,
    /// Number of documents in the live corpus.
    pub current_doc_count: u64,
}
