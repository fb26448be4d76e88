//! Corpus construction and replacement.
//!
//! Ingest is all-or-nothing: the replacement corpus is built completely off
//! to the side (word counts, both text views, arena storage) and only then
//! swapped in. Any failure leaves the previously live corpus untouched.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use concordance_types::IngestError;

use crate::analyzer::tokenizer::word_count;
use crate::analyzer::{Lemmatize, TextNormalizer};
use crate::arena::TextArena;

use super::types::{ArchiveEntry, Concordance, Corpus, Document};

/// Strips any directory components from an archive-relative path.
///
/// Zip entries use `/`; directory walks on Windows may produce `\`.
pub(crate) fn base_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

impl Concordance {
    /// Replaces the corpus with the given `(identifier, raw text)` batch.
    ///
    /// Word counts and both text views are computed per entry. Duplicate
    /// identifiers keep their first row position but take the last content
    /// seen. An empty batch yields a valid empty corpus.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::TooLarge`] if the combined text exceeds the
    /// arena's addressing range. The live corpus is unchanged on error.
    pub fn ingest(&mut self, documents: Vec<(String, String)>) -> Result<(), IngestError> {
        let corpus = Corpus::build(documents, &self.normalizer, self.lemmatizer.as_ref())?;
        self.corpus = Arc::new(corpus);
        self.ingest_count += 1;
        Ok(())
    }

    /// Replaces the corpus from an archive entry batch.
    ///
    /// Only entries flagged `is_text` are consumed; the entry's base
    /// filename becomes the document identifier (directory structure is
    /// discarded, so same-named files collide last-write-wins).
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::InvalidText`] if any text entry is not valid
    /// UTF-8; the whole batch is rejected and the live corpus stays as it
    /// was.
    pub fn ingest_archive(&mut self, entries: Vec<ArchiveEntry>) -> Result<(), IngestError> {
        let mut documents = Vec::with_capacity(entries.len());

        for entry in entries {
            let ArchiveEntry {
                relative_path,
                content,
                is_text,
            } = entry;
            if !is_text {
                continue;
            }
            let text = String::from_utf8(content).map_err(|_| IngestError::InvalidText {
                name: relative_path.clone(),
            })?;
            documents.push((base_name(&relative_path).to_string(), text));
        }

        self.ingest(documents)
    }
}

impl Corpus {
    /// Builds one corpus generation.
    pub(crate) fn build(
        documents: Vec<(String, String)>,
        normalizer: &TextNormalizer,
        lemmatizer: &dyn Lemmatize,
    ) -> Result<Self, IngestError> {
        // Resolve duplicate identifiers first: first-seen row position,
        // last-seen content, matching the reference tool's dict semantics.
        let mut slots: FxHashMap<Box<str>, usize> = FxHashMap::default();
        let mut ordered: Vec<(String, String)> = Vec::with_capacity(documents.len());
        for (name, text) in documents {
            match slots.get(name.as_str()) {
                Some(&i) => ordered[i].1 = text,
                None => {
                    slots.insert(name.as_str().into(), ordered.len());
                    ordered.push((name, text));
                }
            }
        }

        let text_bytes: usize = ordered.iter().map(|(_, t)| t.len()).sum();
        let mut arena = TextArena::with_capacity(text_bytes * 2);
        let mut docs = Vec::with_capacity(ordered.len());
        let mut by_name: FxHashMap<Box<str>, u32> = FxHashMap::default();

        let mut raw_buf = String::new();
        let mut fold_buf = String::new();

        for (i, (name, text)) in ordered.into_iter().enumerate() {
            let words = word_count(&text);

            normalizer.lowercase_into(&text, &mut raw_buf);
            normalizer.fold_into(&text, &mut fold_buf);
            let normalized = lemmatizer.lemmatize(&fold_buf);

            let attempted = (arena.len_bytes() + raw_buf.len() + normalized.len()) as u64;
            let too_large = IngestError::TooLarge { bytes: attempted };
            let raw_span = arena.push(&raw_buf).ok_or_else(|| too_large.clone())?;
            let normalized_span = arena.push(&normalized).ok_or(too_large)?;

            let name: Box<str> = name.into();
            by_name.insert(name.clone(), i as u32);
            docs.push(Document {
                name,
                raw: raw_span,
                normalized: normalized_span,
                word_count: words,
            });
        }

        Ok(Self {
            docs,
            by_name,
            arena,
        })
    }
}
