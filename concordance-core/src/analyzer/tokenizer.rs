//! Streaming tokenizer and word counting.
//!
//! Two tokenization contexts exist in the pipeline and they are not the
//! same:
//!
//! - [`Tokenizer::tokenize`] walks **folded** text (output of
//!   [`fold_into`](crate::analyzer::normalizer::TextNormalizer::fold_into)):
//!   a single forward scan for ASCII space bytes, emitting each token as a
//!   zero-allocation slice of the input. The dictionary lemmatizer is built
//!   on this.
//! - [`word_count`] counts maximal Unicode-whitespace-delimited tokens in
//!   **raw** text. `"a  b\tc"` counts 3 words.
//!
//! ## The Input Contract
//!
//! `tokenize` expects pre-folded input: no leading or trailing space, no
//! consecutive spaces, whitespace already collapsed to ASCII spaces. The
//! contract is checked with debug assertions; violating it in release mode
//! merely yields odd token boundaries.

use core::str;
use memchr::memchr_iter;

/// Counts the words of raw (unfolded) text.
///
/// A word is a maximal run of non-whitespace characters, the same notion as
/// splitting on whitespace runs and discarding empty pieces.
///
/// # Examples
///
/// ```
/// use concordance_core::analyzer::tokenizer::word_count;
///
/// assert_eq!(word_count("a  b\tc"), 3);
/// assert_eq!(word_count("   "), 0);
/// ```
#[inline]
#[must_use]
pub fn word_count(text: &str) -> u32 {
    text.split_whitespace().count() as u32
}

/// Streaming space-tokenizer for folded text.
///
/// Tokens are emitted through a callback as slices of the original input:
/// no intermediate collection, no per-token allocation.
///
/// # Examples
///
/// ```
/// use concordance_core::analyzer::tokenizer::Tokenizer;
///
/// let mut tokens = Vec::new();
/// Tokenizer::new().tokenize("le chat dort", |text, pos| {
///     tokens.push((text, pos));
/// });
/// assert_eq!(tokens, vec![("le", 0), ("chat", 1), ("dort", 2)]);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a new tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Tokenizes folded input and emits `(text, position)` per token.
    #[inline(always)]
    pub fn tokenize<'n, F>(&self, folded: &'n str, mut emit: F)
    where
        F: FnMut(&'n str, u32),
    {
        let bytes = folded.as_bytes();

        debug_assert!(
            bytes.first() != Some(&b' '),
            "tokenizer: leading space - fold contract violated"
        );
        debug_assert!(
            bytes.last() != Some(&b' '),
            "tokenizer: trailing space - fold contract violated"
        );
        debug_assert!(
            !folded.contains("  "),
            "tokenizer: consecutive spaces - fold contract violated"
        );

        if bytes.is_empty() {
            return;
        }

        let mut start = 0usize;
        let mut pos = 0u32;

        for i in memchr_iter(b' ', bytes) {
            if start < i {
                // SAFETY: `folded` is valid UTF-8. We split only on ASCII space
                // (0x20), which is never a continuation byte, so
                // `bytes[start..i]` is always a valid UTF-8 subslice.
                let text = unsafe { str::from_utf8_unchecked(&bytes[start..i]) };
                emit(text, pos);
                if pos == u32::MAX {
                    return;
                }
                pos += 1;
            }
            start = i + 1;
        }

        if start < bytes.len() {
            // SAFETY: same invariants as above - `start` follows an ASCII
            // space byte, so `bytes[start..]` is a valid UTF-8 subslice.
            let text = unsafe { str::from_utf8_unchecked(&bytes[start..]) };
            emit(text, pos);
        }
    }
}
