//! CSV export of result tables.
//!
//! One header row in exact column order, one record per table row, every
//! cell rendered through [`Cell::render`] so the blank-for-zero convention
//! lands in the file verbatim.
//!
//! [`Cell::render`]: concordance_types::Cell::render

use std::path::Path;

use concordance_types::{ExportError, Table};

fn io_err(e: impl ToString) -> ExportError {
    ExportError::Io {
        reason: e.to_string(),
    }
}

/// Writes `table` as a CSV file at `path`.
///
/// # Errors
///
/// Returns [`ExportError::Io`] on any write failure; the caller's corpus
/// and search results are unaffected.
pub fn write_csv(table: &Table, path: &Path) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path).map_err(io_err)?;

    writer.write_record(table.headers()).map_err(io_err)?;
    for row in &table.rows {
        let record: Vec<String> = row.iter().map(|cell| cell.render()).collect();
        writer.write_record(&record).map_err(io_err)?;
    }

    writer.flush().map_err(io_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use concordance_types::{
        Cell, Column, ColumnKind, DOC_NAME_HEADER, WORD_COUNT_HEADER,
    };

    fn sample_table() -> Table {
        Table {
            columns: vec![
                Column {
                    header: DOC_NAME_HEADER.to_string(),
                    kind: ColumnKind::Text,
                },
                Column {
                    header: WORD_COUNT_HEADER.to_string(),
                    kind: ColumnKind::Integer,
                },
                Column {
                    header: "chat".to_string(),
                    kind: ColumnKind::Count,
                },
            ],
            rows: vec![
                vec![
                    Cell::Text("a.txt".to_string()),
                    Cell::Integer(8),
                    Cell::Count(Some(3)),
                ],
                vec![
                    Cell::Text("b.txt".to_string()),
                    Cell::Integer(3),
                    Cell::Count(None),
                ],
            ],
        }
    }

    #[test]
    fn header_row_matches_column_order() {
        let dir = tempfile::tempdir().expect("should create tempdir");
        let path = dir.path().join("out.csv");
        write_csv(&sample_table(), &path).expect("should export");

        let content = std::fs::read_to_string(&path).expect("should read back");
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("Nom du document,N. mots,chat"));
    }

    #[test]
    fn blank_cells_export_as_empty_not_zero() {
        let dir = tempfile::tempdir().expect("should create tempdir");
        let path = dir.path().join("out.csv");
        write_csv(&sample_table(), &path).expect("should export");

        let content = std::fs::read_to_string(&path).expect("should read back");
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[1], "a.txt,8,3");
        assert_eq!(lines[2], "b.txt,3,");
    }

    #[test]
    fn export_failure_is_an_io_error() {
        let missing_dir = Path::new("/nonexistent-dir-for-export/out.csv");
        let err = write_csv(&sample_table(), missing_dir).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }));
    }
}
