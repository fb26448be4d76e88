//! Corpus statistics.

use super::types::Concordance;

/// A snapshot of corpus-level statistics.
#[derive(Debug, Clone, Copy)]
pub struct CorpusStats {
    /// Number of documents in the live corpus.
    pub documents: usize,
    /// Sum of the per-document word counts.
    pub total_words: u64,
    /// Bytes of stored text across both views.
    pub text_bytes: usize,
}

impl Concordance {
    /// Returns statistics for the live corpus.
    pub fn stats(&self) -> CorpusStats {
        CorpusStats {
            documents: self.corpus.len(),
            total_words: self
                .corpus
                .documents()
                .iter()
                .map(|d| u64::from(d.word_count()))
                .sum(),
            text_bytes: self.corpus.arena.len_bytes(),
        }
    }
}

impl core::fmt::Display for CorpusStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} documents, {} words, {} text bytes",
            self.documents, self.total_words, self.text_bytes
        )
    }
}
