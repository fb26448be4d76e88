//! Command-line driver for the Concordance engine.
//!
//! Stands in for the original interactive front end: load the lemma
//! lexicon, ingest an archive of `.txt` documents, count the keyword
//! phrases from a file (one per line), print the frequency table and
//! optionally export it as CSV.

mod archive;
mod export;

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use concordance_core::{ArchiveEntry, Concordance, DictionaryLemmatizer};
use concordance_types::CorpusMode;

#[derive(Parser, Debug)]
#[command(
    name = "concordance",
    version,
    about = "Keyword-frequency search over a corpus of text documents"
)]
struct Args {
    /// A .zip archive or a directory of .txt documents
    archive: PathBuf,

    /// File with one keyword phrase per line (phrases may contain spaces)
    #[arg(long)]
    keywords: Option<PathBuf>,

    /// Which corpus view to search
    #[arg(long, value_enum, default_value_t = Mode::Raw)]
    mode: Mode,

    /// Lemma lexicon, tab-separated form/lemma lines
    #[arg(long)]
    lexicon: PathBuf,

    /// Write the result table to this CSV file
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    Raw,
    Normalized,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Raw => write!(f, "raw"),
            Mode::Normalized => write!(f, "normalized"),
        }
    }
}

impl From<Mode> for CorpusMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Raw => CorpusMode::Raw,
            Mode::Normalized => CorpusMode::Normalized,
        }
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let args = Args::parse();

    // A missing or unusable lexicon is fatal before any corpus work starts;
    // normalized mode must never silently run on unlemmatized text.
    let lexicon = File::open(&args.lexicon)
        .with_context(|| format!("cannot open lexicon {}", args.lexicon.display()))?;
    let lemmatizer = DictionaryLemmatizer::from_reader(BufReader::new(lexicon))
        .with_context(|| format!("cannot load lexicon {}", args.lexicon.display()))?;
    info!("lexicon loaded: {} entries", lemmatizer.len());

    let mut session = Concordance::new(Box::new(lemmatizer));

    let entries = archive::read_entries(&args.archive)?;
    warn_on_collisions(&entries);
    session
        .ingest_archive(entries)
        .with_context(|| format!("cannot ingest {}", args.archive.display()))?;
    info!("corpus ready: {}", session.stats());

    let keywords: Vec<String> = match &args.keywords {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("cannot read keywords file {}", path.display()))?
            .lines()
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    };

    let table = session.results_table(&keywords, args.mode.into());
    print!("{table}");

    if let Some(out) = &args.out {
        export::write_csv(&table, out)
            .with_context(|| format!("cannot export to {}", out.display()))?;
        info!("wrote {}", out.display());
    }

    Ok(())
}

/// Surfaces the lossy same-name collision behavior: the engine keeps the
/// last content for a duplicated base filename, so tell the user which
/// entry won.
fn warn_on_collisions(entries: &[ArchiveEntry]) {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for entry in entries.iter().filter(|e| e.is_text) {
        let base = entry
            .relative_path
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(entry.relative_path.as_str());
        if let Some(previous) = seen.insert(base, entry.relative_path.as_str()) {
            warn!(
                "duplicate document name {base}: {} replaces {previous}",
                entry.relative_path
            );
        }
    }
}
