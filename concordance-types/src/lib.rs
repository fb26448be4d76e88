//! Core types for the Concordance keyword-frequency engine.
//!
//! This crate provides the types shared across the Concordance workspace.
//! Keeping them in a leaf crate ensures:
//!
//! - **Clean boundaries**: the engine and the CLI exchange tables and errors
//!   without depending on each other
//! - **Stable output contract**: column headers and the blank-for-zero cell
//!   convention live in one place
//! - **No circular dependencies** between crates

#![warn(missing_docs)]

use core::fmt;

/// Column header for the document-name column.
///
/// The header strings are the original tool's French labels and are part of
/// the export contract: spreadsheets produced by Concordance must be
/// byte-compatible with the reference output.
pub const DOC_NAME_HEADER: &str = "Nom du document";

/// Column header for the word-count column.
pub const WORD_COUNT_HEADER: &str = "N. mots";

/// Which text view of the corpus a search runs against.
///
/// Both views are computed at ingest time; selecting a mode never triggers
/// re-analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CorpusMode {
    /// The lowercased original text, whitespace preserved.
    Raw,
    /// The lemmatized text: lowercased, whitespace-collapsed, every token
    /// replaced by its lemma.
    Normalized,
}

impl fmt::Display for CorpusMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusMode::Raw => write!(f, "raw"),
            CorpusMode::Normalized => write!(f, "normalized"),
        }
    }
}

/// The semantic kind of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Free text (document names).
    Text,
    /// An integer that is always present (word counts).
    Integer,
    /// An occurrence count that renders blank when zero.
    Count,
}

/// An ordered column descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Header text, written verbatim to the first exported row.
    pub header: String,
    /// Semantic kind of every cell in this column.
    pub kind: ColumnKind,
}

/// A single typed cell.
///
/// Zero occurrence counts are `Count(None)` internally; they become the
/// empty string only at the render/export boundary. Downstream code must
/// never see the numeral 0 for an absent match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    /// A text cell.
    Text(String),
    /// An always-present integer cell.
    Integer(u64),
    /// An occurrence count; `None` means zero and renders blank.
    Count(Option<u32>),
}

impl Cell {
    /// Renders the cell for display or export.
    ///
    /// This is the only place the blank-for-zero convention is applied.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Integer(n) => n.to_string(),
            Cell::Count(Some(n)) => n.to_string(),
            Cell::Count(None) => String::new(),
        }
    }
}

/// The document-by-keyword frequency matrix.
///
/// Rows are documents in ingest order; columns are
/// `[document name, word count, one per unique keyword in first-seen order]`.
/// Every row holds exactly `columns.len()` cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    /// Ordered column descriptors.
    pub columns: Vec<Column>,
    /// Ordered rows of typed cells.
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Returns the header strings in column order.
    #[must_use]
    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.header.as_str()).collect()
    }

    /// Returns the number of rows.
    #[inline(always)]
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of columns.
    #[inline(always)]
    #[must_use]
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the table has no rows.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Pad every column to its widest rendered cell.
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.header.len()).collect();
        let rendered: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(Cell::render).collect())
            .collect();
        for row in &rendered {
            for (i, cell) in row.iter().enumerate() {
                if cell.len() > widths[i] {
                    widths[i] = cell.len();
                }
            }
        }

        for (i, col) in self.columns.iter().enumerate() {
            if i > 0 {
                write!(f, "  ")?;
            }
            write!(f, "{:<width$}", col.header, width = widths[i])?;
        }
        writeln!(f)?;

        for row in &rendered {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:<width$}", cell, width = widths[i])?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Errors that can occur while ingesting an archive into the corpus.
///
/// Any ingest error aborts the whole batch; the previously live corpus is
/// left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestError {
    /// The archive itself could not be read.
    Archive {
        /// Short description of what went wrong.
        reason: String,
    },
    /// An entry flagged as text could not be decoded as UTF-8.
    InvalidText {
        /// Archive-relative path of the offending entry.
        name: String,
    },
    /// The combined document text exceeds the addressable arena range.
    TooLarge {
        /// Total text bytes the ingest attempted to store.
        bytes: u64,
    },
}

impl fmt::Display for IngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngestError::Archive { reason } => write!(f, "invalid archive: {}", reason),
            IngestError::InvalidText { name } => {
                write!(f, "unreadable file (not valid UTF-8 text): {}", name)
            }
            IngestError::TooLarge { bytes } => {
                write!(f, "corpus too large: {} bytes of text", bytes)
            }
        }
    }
}

impl core::error::Error for IngestError {}

/// Errors raised while building the lemma lexicon.
///
/// The lemmatizer is required at session construction; these errors are
/// fatal startup conditions, not per-call failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconError {
    /// The lexicon source could not be read.
    Io {
        /// Short description of the underlying I/O failure.
        reason: String,
    },
    /// The lexicon parsed to zero entries.
    Empty,
}

impl fmt::Display for LexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexiconError::Io { reason } => write!(f, "cannot read lexicon: {}", reason),
            LexiconError::Empty => write!(f, "lexicon contains no entries"),
        }
    }
}

impl core::error::Error for LexiconError {}

/// Errors raised while exporting a result table.
///
/// Export failures are local to the export; the live corpus and prior
/// search results are unaffected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// Writing the output file failed.
    Io {
        /// Short description of the underlying I/O failure.
        reason: String,
    },
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Io { reason } => write!(f, "export I/O error: {}", reason),
        }
    }
}

impl core::error::Error for ExportError {}
