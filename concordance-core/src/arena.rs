//! Bump storage for corpus text.
//!
//! Every document contributes two strings to a corpus generation (the
//! raw-lowercased view and the normalized view). Storing them all in one
//! contiguous buffer eliminates per-document allocations and keeps the hot
//! counting loop walking sequential memory. Documents reference their text
//! by (offset, length) spans.
//!
//! A corpus generation is immutable once built, so the arena only ever
//! appends; replacing the corpus replaces the arena wholesale.

/// Reference to one stored string - 8 bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Span {
    offset: u32,
    len: u32,
}

impl Span {
    /// Byte offset into the arena buffer.
    #[inline(always)]
    pub const fn offset(self) -> usize {
        self.offset as usize
    }

    /// Byte length of the stored string.
    #[inline(always)]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    /// Returns `true` if the span references an empty string.
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }
}

/// Append-only storage for the text of one corpus generation.
#[derive(Debug, Default)]
pub struct TextArena {
    buffer: Vec<u8>,
}

impl TextArena {
    /// Creates a new empty arena.
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    /// Creates an arena with pre-allocated capacity.
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(bytes),
        }
    }

    /// Total stored bytes.
    #[inline(always)]
    #[must_use]
    pub fn len_bytes(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if nothing has been stored.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Appends a string and returns its span.
    ///
    /// Returns `None` if the arena would grow past the u32 addressing range
    /// (4 GiB of corpus text); the caller turns that into an ingest error.
    #[inline]
    pub fn push(&mut self, text: &str) -> Option<Span> {
        let offset = self.buffer.len();
        let len = text.len();
        if offset + len > u32::MAX as usize {
            return None;
        }

        self.buffer.extend_from_slice(text.as_bytes());
        Some(Span {
            offset: offset as u32,
            len: len as u32,
        })
    }

    /// Retrieves a stored string.
    ///
    /// # Panics
    ///
    /// Panics if `span` does not come from this arena and reaches past the
    /// buffer end.
    #[inline(always)]
    #[must_use]
    pub fn get(&self, span: Span) -> &str {
        let bytes = &self.buffer[span.offset()..span.offset() + span.len()];
        // SAFETY: spans are only created by `push`, which stores whole `&str`
        // values, so every span covers exactly the bytes of one valid UTF-8
        // string and never straddles another string's bytes.
        unsafe { std::str::from_utf8_unchecked(bytes) }
    }
}
