//! Keyword-frequency search.
//!
//! The counting kernel is deliberately explicit: a keyword matches as a
//! literal byte substring of the selected text view, and matches never
//! overlap - each scan resumes after the end of the previous match, so
//! `count_occurrences("aa", "aaa")` is 1, not 2. Case insensitivity comes
//! from construction: both the stored views and the sanitized keywords are
//! lowercased, so the scan itself is exact.
//!
//! One [`memmem::Finder`] is built per unique keyword and reused across all
//! documents; each (document, keyword) pair costs exactly one scan of the
//! document text.

use memchr::memmem;
use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use concordance_types::CorpusMode;

use super::types::Concordance;

/// Frequency counts for one query.
#[derive(Debug, Clone, Default)]
pub struct FrequencyResults {
    /// The sanitized keyword list in input order, duplicates preserved.
    ///
    /// This is the column order for table building; the builder collapses
    /// duplicates to the first occurrence.
    pub keywords: Vec<String>,
    /// Per-document keyword hits, keyed by document identifier.
    ///
    /// Every document of the searched corpus has an entry; the inner map
    /// only holds keywords with at least one occurrence.
    pub per_doc: FxHashMap<String, FxHashMap<String, u32>>,
}

/// Trims and lowercases keyword phrases, dropping entries that are empty
/// after trimming. Duplicates are kept as given.
pub fn sanitize_keywords<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter()
        .filter_map(|s| {
            let trimmed = s.as_ref().trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect()
}

/// Counts non-overlapping occurrences of `keyword` in `text`.
///
/// Both sides are expected to be lowercased already. An empty keyword
/// counts zero (empty phrases are discarded before they reach a query).
#[must_use]
pub fn count_occurrences(keyword: &str, text: &str) -> u32 {
    if keyword.is_empty() {
        return 0;
    }
    memmem::find_iter(text.as_bytes(), keyword.as_bytes()).count() as u32
}

impl Concordance {
    /// Counts keyword occurrences across the live corpus.
    ///
    /// Deterministic: the same corpus, keyword list and mode always produce
    /// the same counts. An empty keyword list yields an entry with no hits
    /// for every document; an empty corpus yields no entries at all.
    /// Neither is an error.
    pub fn search<S: AsRef<str>>(&mut self, keywords: &[S], mode: CorpusMode) -> FrequencyResults {
        self.query_count += 1;

        let sanitized = sanitize_keywords(keywords);
        let corpus = &self.corpus;
        let mut per_doc =
            FxHashMap::with_capacity_and_hasher(corpus.len(), Default::default());

        {
            // Duplicate phrases would count identically; scan each unique
            // phrase once.
            let mut seen = FxHashSet::default();
            let mut finders: SmallVec<[(&str, memmem::Finder); 16]> = SmallVec::new();
            for keyword in &sanitized {
                if seen.insert(keyword.as_str()) {
                    finders.push((keyword.as_str(), memmem::Finder::new(keyword.as_bytes())));
                }
            }

            for doc in corpus.documents() {
                let text = corpus.text(doc, mode);
                let mut hits = FxHashMap::default();
                for (keyword, finder) in &finders {
                    let n = finder.find_iter(text.as_bytes()).count() as u32;
                    if n > 0 {
                        hits.insert((*keyword).to_string(), n);
                    }
                }
                per_doc.insert(doc.name().to_string(), hits);
            }
        }

        FrequencyResults {
            keywords: sanitized,
            per_doc,
        }
    }
}
