//! Case folding and whitespace folding.
//!
//! Two distinct operations feed the two corpus views:
//!
//! - [`TextNormalizer::lowercase_into`] lowercases and keeps whitespace
//!   byte-for-byte. This is the Raw search view: multi-word keywords must
//!   see the document's original spacing.
//! - [`TextNormalizer::fold_into`] lowercases, collapses whitespace runs to
//!   single spaces and trims the ends. This is the lemmatizer input; the
//!   space tokenizer's contract depends on it.
//!
//! Both are pure over their input and reuse the caller's output buffer.

#[rustfmt::skip]
const ASCII_LOWER: [u8; 128] = [
    0x00,0x01,0x02,0x03,0x04,0x05,0x06,0x07,0x08,0x09,0x0a,0x0b,0x0c,0x0d,0x0e,0x0f,
    0x10,0x11,0x12,0x13,0x14,0x15,0x16,0x17,0x18,0x19,0x1a,0x1b,0x1c,0x1d,0x1e,0x1f,
    0x20,0x21,0x22,0x23,0x24,0x25,0x26,0x27,0x28,0x29,0x2a,0x2b,0x2c,0x2d,0x2e,0x2f,
    0x30,0x31,0x32,0x33,0x34,0x35,0x36,0x37,0x38,0x39,0x3a,0x3b,0x3c,0x3d,0x3e,0x3f,
    0x40,0x61,0x62,0x63,0x64,0x65,0x66,0x67,0x68,0x69,0x6a,0x6b,0x6c,0x6d,0x6e,0x6f,
    0x70,0x71,0x72,0x73,0x74,0x75,0x76,0x77,0x78,0x79,0x7a,0x5b,0x5c,0x5d,0x5e,0x5f,
    0x60,0x61,0x62,0x63,0x64,0x65,0x66,0x67,0x68,0x69,0x6a,0x6b,0x6c,0x6d,0x6e,0x6f,
    0x70,0x71,0x72,0x73,0x74,0x75,0x76,0x77,0x78,0x79,0x7a,0x7b,0x7c,0x7d,0x7e,0x7f,
];

/// Unicode-aware text normalizer.
///
/// ASCII characters go through a lookup table; everything else falls back to
/// [`char::to_lowercase`], so accented French forms ("É" → "é") survive with
/// their diacritics intact - the lemma lexicon is keyed on accented forms.
///
/// # Examples
///
/// ```
/// use concordance_core::analyzer::normalizer::TextNormalizer;
///
/// let normalizer = TextNormalizer::default();
/// assert_eq!(normalizer.lowercase("Le  Chat"), "le  chat");
/// assert_eq!(normalizer.fold("  Le  Chat\t dort "), "le chat dort");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct TextNormalizer;

impl TextNormalizer {
    /// Creates a new normalizer.
    pub const fn new() -> Self {
        Self
    }

    /// Lowercases `input` into `out`, preserving whitespace exactly.
    ///
    /// Clears `out` first and reuses its capacity.
    #[inline]
    pub fn lowercase_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        for ch in input.chars() {
            if ch.is_ascii() {
                out.push(ASCII_LOWER[ch as usize] as char);
            } else {
                for lowered in ch.to_lowercase() {
                    out.push(lowered);
                }
            }
        }
    }

    /// Lowercases `input` and returns a new `String`, whitespace preserved.
    #[inline]
    #[must_use]
    pub fn lowercase(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.lowercase_into(input, &mut out);
        out
    }

    /// Lowercases `input` into `out`, collapsing Unicode whitespace runs to
    /// single ASCII spaces and trimming both ends.
    ///
    /// Output upholds the tokenizer contract: no leading or trailing space,
    /// no consecutive spaces.
    #[inline]
    pub fn fold_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        let mut pending_space = false;
        for ch in input.chars() {
            if ch.is_whitespace() {
                pending_space = true;
                continue;
            }
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            if ch.is_ascii() {
                out.push(ASCII_LOWER[ch as usize] as char);
            } else {
                for lowered in ch.to_lowercase() {
                    out.push(lowered);
                }
            }
        }
    }

    /// Folds `input` and returns a new `String`.
    #[inline]
    #[must_use]
    pub fn fold(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.fold_into(input, &mut out);
        out
    }
}
