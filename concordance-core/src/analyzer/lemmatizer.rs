//! The lemmatizer collaborator seam.
//!
//! Normalized-mode search runs against lemmatized text, so every token must
//! be reduced to its dictionary base form at ingest time. Lemmatization
//! itself is a black box behind the [`Lemmatize`] trait; the engine only
//! requires that it is deterministic and always available once the session
//! exists. There is no silent fallback: a session cannot be built without a
//! working lemmatizer, which makes a missing lexicon a startup failure
//! instead of a wrong-answers-at-query-time bug.

use std::io::BufRead;

use rustc_hash::FxHashMap;

use concordance_types::LexiconError;

use crate::analyzer::tokenizer::Tokenizer;

/// Maps text to its lemmatized form.
///
/// Implementations must be deterministic: identical input yields identical
/// output for the lifetime of the value. Input is folded text (lowercased,
/// single-spaced); output must be folded as well.
pub trait Lemmatize {
    /// Lemmatizes folded text, token by token, re-joined with single spaces.
    fn lemmatize(&self, text: &str) -> String;
}

/// Lexicon-backed lemmatizer.
///
/// The lexicon is a tab-separated table of `form<TAB>lemma` lines (extra
/// columns, as in the Lefff-style morphological lexicons, are ignored).
/// Tokens absent from the lexicon pass through unchanged - a lemma lexicon
/// never covers proper nouns or typos, and dropping those tokens would
/// corrupt the occurrence counts.
///
/// Whitespace tokens carry their punctuation ("dort.", "«chat»"), but
/// lexicon forms do not. Each token is therefore split into punctuation
/// affixes and an alphanumeric core; only the core is looked up and the
/// affixes are re-attached around the lemma.
#[derive(Debug)]
pub struct DictionaryLemmatizer {
    lexicon: FxHashMap<Box<str>, Box<str>>,
    tokenizer: Tokenizer,
}

/// Splits a token into (leading punctuation, core, trailing punctuation).
///
/// The core runs from the first to the last alphanumeric character, so
/// inner punctuation ("aujourd'hui") stays part of the core.
fn split_affixes(token: &str) -> (&str, &str, &str) {
    let Some(start) = token.find(|c: char| c.is_alphanumeric()) else {
        return (token, "", "");
    };
    let end = token
        .char_indices()
        .filter(|(_, c)| c.is_alphanumeric())
        .last()
        .map_or(token.len(), |(i, c)| i + c.len_utf8());
    (&token[..start], &token[start..end], &token[end..])
}

impl DictionaryLemmatizer {
    /// Parses a lexicon from a reader.
    ///
    /// Blank lines and lines starting with `#` are skipped, as are lines
    /// without a tab separator.
    ///
    /// # Errors
    ///
    /// Returns [`LexiconError::Io`] if the reader fails and
    /// [`LexiconError::Empty`] if no usable entry was found.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, LexiconError> {
        let mut lexicon: FxHashMap<Box<str>, Box<str>> = FxHashMap::default();

        for line in reader.lines() {
            let line = line.map_err(|e| LexiconError::Io {
                reason: e.to_string(),
            })?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split('\t');
            let form = match fields.next() {
                Some(f) if !f.is_empty() => f,
                _ => continue,
            };
            let lemma = match fields.next() {
                Some(l) if !l.is_empty() => l,
                _ => continue,
            };
            lexicon.insert(form.into(), lemma.into());
        }

        if lexicon.is_empty() {
            return Err(LexiconError::Empty);
        }

        Ok(Self {
            lexicon,
            tokenizer: Tokenizer::new(),
        })
    }

    /// Returns the number of lexicon entries.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    /// Returns `true` if the lexicon holds no entries.
    ///
    /// Cannot happen for a value built through [`from_reader`], which
    /// rejects empty lexicons.
    ///
    /// [`from_reader`]: DictionaryLemmatizer::from_reader
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }
}

impl Lemmatize for DictionaryLemmatizer {
    fn lemmatize(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        self.tokenizer.tokenize(text, |token, _pos| {
            if !out.is_empty() {
                out.push(' ');
            }
            let (prefix, core, suffix) = split_affixes(token);
            out.push_str(prefix);
            match self.lexicon.get(core) {
                Some(lemma) => out.push_str(lemma),
                None => out.push_str(core),
            }
            out.push_str(suffix);
        });
        out
    }
}
