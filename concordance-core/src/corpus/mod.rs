//! The keyword-frequency session.
//!
//! [`Concordance`] owns the live corpus between an ingest and the queries
//! that follow. Ingest computes everything up front (word counts, the
//! raw-lowercased view, the lemmatized view) so that repeated searches are
//! pure scans over precomputed text.
//!
//! State model:
//! - Exactly one corpus generation is live per session.
//! - Ingest replaces the generation wholesale through a single `Arc` swap;
//!   a snapshot taken before the swap keeps reading the old generation.
//! - Failed ingests never publish a partial generation.

mod ingest;
pub mod search;
mod stats;
pub mod table;
mod types;

pub use search::FrequencyResults;
pub use stats::CorpusStats;
pub use types::{ArchiveEntry, Concordance, Corpus, Document, SessionMetrics};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::lemmatizer::DictionaryLemmatizer;
    use concordance_types::{Cell, CorpusMode, DOC_NAME_HEADER, WORD_COUNT_HEADER};

    const LEXICON: &str =
        "chats\tchat\nmange\tmanger\ndort\tdormir\njouent\tjouer\nsouris\tsouris\n";

    fn session() -> Concordance {
        let lemmatizer =
            DictionaryLemmatizer::from_reader(LEXICON.as_bytes()).expect("lexicon should parse");
        Concordance::new(Box::new(lemmatizer))
    }

    fn doc(name: &str, text: &str) -> (String, String) {
        (name.to_string(), text.to_string())
    }

    fn french_pair() -> Vec<(String, String)> {
        vec![
            doc("a.txt", "Le chat mange la souris. Le chat dort."),
            doc("b.txt", "Les chats jouent."),
        ]
    }

    #[test]
    fn round_trip_raw_search() {
        let mut session = session();
        session.ingest(french_pair()).expect("should ingest");

        let corpus = session.snapshot();
        let metadata: Vec<(String, u32)> = corpus
            .metadata()
            .map(|(n, w)| (n.to_string(), w))
            .collect();
        assert_eq!(
            metadata,
            vec![("a.txt".to_string(), 8), ("b.txt".to_string(), 3)]
        );

        let results = session.search(&["chat"], CorpusMode::Raw);
        assert_eq!(results.per_doc["a.txt"]["chat"], 2);
        assert_eq!(results.per_doc["b.txt"]["chat"], 1);
    }

    #[test]
    fn round_trip_empty_keywords_degrades_to_metadata() {
        let mut session = session();
        session.ingest(french_pair()).expect("should ingest");

        let empty: [&str; 0] = [];
        let table = session.results_table(&empty, CorpusMode::Raw);
        assert_eq!(table.headers(), vec![DOC_NAME_HEADER, WORD_COUNT_HEADER]);
        assert_eq!(table.n_rows(), 2);
        assert_eq!(table.rows[0][1], Cell::Integer(8));
        assert_eq!(table.rows[1][1], Cell::Integer(3));
    }

    #[test]
    fn results_table_counts_and_blanks() {
        let mut session = session();
        session.ingest(french_pair()).expect("should ingest");

        let table = session.results_table(&["chat", "mange"], CorpusMode::Raw);
        assert_eq!(
            table.headers(),
            vec![DOC_NAME_HEADER, WORD_COUNT_HEADER, "chat", "mange"]
        );
        // a.txt: chat=2, mange=1; b.txt: chat=1 (inside "chats"), mange blank.
        assert_eq!(table.rows[0][2], Cell::Count(Some(2)));
        assert_eq!(table.rows[0][3], Cell::Count(Some(1)));
        assert_eq!(table.rows[1][2], Cell::Count(Some(1)));
        assert_eq!(table.rows[1][3], Cell::Count(None));
    }

    #[test]
    fn normalized_mode_matches_lemmas() {
        let mut session = session();
        session.ingest(french_pair()).expect("should ingest");

        // "jouent" lemmatizes to "jouer"; the inflected raw form does not
        // contain the lemma as a substring.
        let raw = session.search(&["jouer"], CorpusMode::Raw);
        assert!(raw.per_doc["b.txt"].is_empty());

        let normalized = session.search(&["jouer"], CorpusMode::Normalized);
        assert_eq!(normalized.per_doc["b.txt"]["jouer"], 1);
        assert!(normalized.per_doc["a.txt"].is_empty());

        let manger = session.search(&["manger"], CorpusMode::Normalized);
        assert_eq!(manger.per_doc["a.txt"]["manger"], 1);
    }

    #[test]
    fn search_is_idempotent() {
        let mut session = session();
        session.ingest(french_pair()).expect("should ingest");

        let first = session.search(&["chat", "souris"], CorpusMode::Raw);
        let second = session.search(&["chat", "souris"], CorpusMode::Raw);
        assert_eq!(first.keywords, second.keywords);
        assert_eq!(first.per_doc, second.per_doc);
    }

    #[test]
    fn reingest_replaces_wholesale() {
        let mut session = session();
        session
            .ingest(vec![doc("old.txt", "le hibou chasse")])
            .expect("should ingest");
        session.ingest(french_pair()).expect("should ingest");

        let results = session.search(&["hibou"], CorpusMode::Raw);
        assert!(!results.per_doc.contains_key("old.txt"));
        assert!(results.per_doc["a.txt"].is_empty());
        assert!(results.per_doc["b.txt"].is_empty());

        let table = session.results_table(&["hibou"], CorpusMode::Raw);
        let names: Vec<String> = table.rows.iter().map(|r| r[0].render()).collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn snapshot_survives_reingest() {
        let mut session = session();
        session.ingest(french_pair()).expect("should ingest");
        let snapshot = session.snapshot();

        session
            .ingest(vec![doc("only.txt", "un seul document")])
            .expect("should ingest");

        assert_eq!(snapshot.len(), 2);
        assert_eq!(session.len(), 1);
        assert!(snapshot.text_by_name("a.txt", CorpusMode::Raw).is_some());
    }

    #[test]
    fn empty_corpus_queries_are_not_errors() {
        let mut session = session();
        session.ingest(Vec::new()).expect("empty corpus is valid");
        assert!(session.is_empty());

        let table = session.results_table(&["chat"], CorpusMode::Raw);
        assert_eq!(table.n_rows(), 0);
        assert_eq!(table.n_columns(), 3);
    }

    #[test]
    fn archive_ingest_filters_and_strips_directories() {
        let mut session = session();
        let entries = vec![
            ArchiveEntry {
                relative_path: "dossier/a.txt".to_string(),
                content: b"Le chat dort.".to_vec(),
                is_text: true,
            },
            ArchiveEntry {
                relative_path: "notes.md".to_string(),
                content: b"pas un document".to_vec(),
                is_text: false,
            },
        ];
        session.ingest_archive(entries).expect("should ingest");

        assert_eq!(session.len(), 1);
        let corpus = session.snapshot();
        assert_eq!(
            corpus.text_by_name("a.txt", CorpusMode::Raw),
            Some("le chat dort.")
        );
        assert!(corpus.text_by_name("notes.md", CorpusMode::Raw).is_none());
    }

    #[test]
    fn same_name_collision_is_last_write_wins() {
        let mut session = session();
        let entries = vec![
            ArchiveEntry {
                relative_path: "sub1/a.txt".to_string(),
                content: b"premier".to_vec(),
                is_text: true,
            },
            ArchiveEntry {
                relative_path: "sub2/b.txt".to_string(),
                content: b"autre".to_vec(),
                is_text: true,
            },
            ArchiveEntry {
                relative_path: "sub3/a.txt".to_string(),
                content: b"deuxieme contenu".to_vec(),
                is_text: true,
            },
        ];
        session.ingest_archive(entries).expect("should ingest");

        assert_eq!(session.len(), 2);
        let corpus = session.snapshot();
        // First-seen row position, last-seen content.
        let names: Vec<&str> = corpus.metadata().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
        assert_eq!(
            corpus.text_by_name("a.txt", CorpusMode::Raw),
            Some("deuxieme contenu")
        );
        let words: Vec<u32> = corpus.metadata().map(|(_, w)| w).collect();
        assert_eq!(words, vec![2, 1]);
    }

    #[test]
    fn invalid_utf8_aborts_and_preserves_previous_corpus() {
        let mut session = session();
        session.ingest(french_pair()).expect("should ingest");

        let entries = vec![
            ArchiveEntry {
                relative_path: "ok.txt".to_string(),
                content: b"du texte".to_vec(),
                is_text: true,
            },
            ArchiveEntry {
                relative_path: "broken.txt".to_string(),
                content: vec![0xff, 0xfe, 0x00],
                is_text: true,
            },
        ];
        let err = session.ingest_archive(entries).unwrap_err();
        assert!(format!("{err}").contains("broken.txt"));

        // The previous corpus is still fully live.
        assert_eq!(session.len(), 2);
        let results = session.search(&["chat"], CorpusMode::Raw);
        assert_eq!(results.per_doc["a.txt"]["chat"], 2);
    }

    #[test]
    fn metrics_track_operations() {
        let mut session = session();
        let metrics = session.metrics();
        assert_eq!(metrics.ingests_completed, 0);
        assert_eq!(metrics.queries_executed, 0);
        assert_eq!(metrics.current_doc_count, 0);

        session.ingest(french_pair()).expect("should ingest");
        session.search(&["chat"], CorpusMode::Raw);
        session.search(&["souris"], CorpusMode::Raw);

        let metrics = session.metrics();
        assert_eq!(metrics.ingests_completed, 1);
        assert_eq!(metrics.queries_executed, 2);
        assert_eq!(metrics.current_doc_count, 2);

        session.clear();
        let metrics = session.metrics();
        assert_eq!(metrics.ingests_completed, 0);
        assert_eq!(metrics.queries_executed, 0);
        assert_eq!(metrics.current_doc_count, 0);
    }

    #[test]
    fn stats_summarize_the_live_corpus() {
        let mut session = session();
        session.ingest(french_pair()).expect("should ingest");

        let stats = session.stats();
        assert_eq!(stats.documents, 2);
        assert_eq!(stats.total_words, 11);
        assert!(stats.text_bytes > 0);
        assert!(format!("{stats}").contains("2 documents"));
    }

    #[test]
    fn duplicate_keywords_count_once_per_column() {
        let mut session = session();
        session.ingest(french_pair()).expect("should ingest");

        let table = session.results_table(&["chat", "chat"], CorpusMode::Raw);
        assert_eq!(table.n_columns(), 3);
        assert_eq!(table.rows[0][2], Cell::Count(Some(2)));
    }

    #[test]
    fn normalize_matches_the_stored_view() {
        let mut session = session();
        let raw = "Les  Chats\tjouent.";
        session.ingest(vec![doc("b.txt", raw)]).expect("should ingest");

        let normalized = session.normalize(raw);
        assert_eq!(normalized, "les chat jouer.");
        let corpus = session.snapshot();
        assert_eq!(
            corpus.text_by_name("b.txt", CorpusMode::Normalized),
            Some(normalized.as_str())
        );
    }

    #[test]
    fn texts_view_follows_ingest_order() {
        let mut session = session();
        session.ingest(french_pair()).expect("should ingest");

        let corpus = session.snapshot();
        let raw: Vec<(&str, &str)> = corpus.texts(CorpusMode::Raw).collect();
        assert_eq!(raw[0].0, "a.txt");
        assert_eq!(raw[1], ("b.txt", "les chats jouent."));

        let normalized: Vec<(&str, &str)> = corpus.texts(CorpusMode::Normalized).collect();
        assert_eq!(normalized[1], ("b.txt", "les chat jouer."));
    }

    #[test]
    fn keywords_are_case_insensitive() {
        let mut session = session();
        session.ingest(french_pair()).expect("should ingest");

        let results = session.search(&["  CHAT "], CorpusMode::Raw);
        assert_eq!(results.per_doc["a.txt"]["chat"], 2);
    }
}
