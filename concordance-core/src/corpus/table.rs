//! Result table assembly.

use rustc_hash::{FxHashMap, FxHashSet};

use concordance_types::{
    Cell, Column, ColumnKind, CorpusMode, Table, DOC_NAME_HEADER, WORD_COUNT_HEADER,
};

use super::types::Concordance;

/// Assembles the document-by-keyword frequency table.
///
/// Rows follow `metadata` order; columns are the two metadata columns
/// followed by one column per unique keyword in `keyword_order`, first-seen.
/// `metadata` is authoritative for row existence: documents missing from
/// `frequencies` get all-blank count cells, identifiers present only in
/// `frequencies` are dropped.
pub fn build_table<'a, M>(
    metadata: M,
    frequencies: &FxHashMap<String, FxHashMap<String, u32>>,
    keyword_order: &[String],
) -> Table
where
    M: IntoIterator<Item = (&'a str, u32)>,
{
    let mut columns = vec![
        Column {
            header: DOC_NAME_HEADER.to_string(),
            kind: ColumnKind::Text,
        },
        Column {
            header: WORD_COUNT_HEADER.to_string(),
            kind: ColumnKind::Integer,
        },
    ];

    let mut unique: Vec<&str> = Vec::with_capacity(keyword_order.len());
    let mut seen = FxHashSet::default();
    for keyword in keyword_order {
        if seen.insert(keyword.as_str()) {
            unique.push(keyword.as_str());
            columns.push(Column {
                header: keyword.clone(),
                kind: ColumnKind::Count,
            });
        }
    }

    let mut rows = Vec::new();
    for (name, words) in metadata {
        let mut row = Vec::with_capacity(2 + unique.len());
        row.push(Cell::Text(name.to_string()));
        row.push(Cell::Integer(u64::from(words)));

        let hits = frequencies.get(name);
        for keyword in &unique {
            let n = hits.and_then(|h| h.get(*keyword)).copied().unwrap_or(0);
            row.push(Cell::Count(if n > 0 { Some(n) } else { None }));
        }
        rows.push(row);
    }

    Table { columns, rows }
}

impl Concordance {
    /// Searches the live corpus and builds the result table in one step.
    pub fn results_table<S: AsRef<str>>(&mut self, keywords: &[S], mode: CorpusMode) -> Table {
        let results = self.search(keywords, mode);
        let corpus = self.snapshot();
        build_table(corpus.metadata(), &results.per_doc, &results.keywords)
    }
}
