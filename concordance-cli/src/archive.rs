//! Archive sources.
//!
//! Produces the `(relative path, bytes, is_text)` entry batches the engine
//! ingests. Two sources exist: `.zip` archives (the reference tool's upload
//! format) and plain directory trees, walked recursively in sorted order so
//! ingest traversal is deterministic.

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use walkdir::WalkDir;
use zip::ZipArchive;

use concordance_core::ArchiveEntry;
use concordance_types::IngestError;

fn is_text_file(name: &str) -> bool {
    name.ends_with(".txt")
}

/// Reads entries from `path`: a directory tree or a zip archive.
pub fn read_entries(path: &Path) -> Result<Vec<ArchiveEntry>> {
    if path.is_dir() {
        read_dir_tree(path)
    } else {
        read_zip(path)
    }
}

/// Reads every entry of a zip archive.
///
/// All file entries are returned with their text classification; the engine
/// skips the non-text ones.
pub fn read_zip(path: &Path) -> Result<Vec<ArchiveEntry>> {
    let file = File::open(path)
        .with_context(|| format!("cannot open archive {}", path.display()))?;
    let mut archive = ZipArchive::new(file).map_err(|e| IngestError::Archive {
        reason: e.to_string(),
    })?;

    let mut entries = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let mut entry = archive.by_index(i).map_err(|e| IngestError::Archive {
            reason: e.to_string(),
        })?;
        if entry.is_dir() {
            continue;
        }

        let relative_path = entry.name().to_string();
        let mut content = Vec::with_capacity(entry.size() as usize);
        entry
            .read_to_end(&mut content)
            .map_err(|e| IngestError::Archive {
                reason: e.to_string(),
            })?;

        let is_text = is_text_file(&relative_path);
        entries.push(ArchiveEntry {
            relative_path,
            content,
            is_text,
        });
    }

    Ok(entries)
}

/// Collects the `.txt` files of a directory tree.
pub fn read_dir_tree(root: &Path) -> Result<Vec<ArchiveEntry>> {
    let mut entries = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| IngestError::Archive {
            reason: e.to_string(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let relative_path = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .replace('\\', "/");
        if !is_text_file(&relative_path) {
            continue;
        }

        let content = fs::read(entry.path())
            .with_context(|| format!("cannot read {}", entry.path().display()))?;
        entries.push(ArchiveEntry {
            relative_path,
            content,
            is_text: true,
        });
    }

    Ok(entries)
}
