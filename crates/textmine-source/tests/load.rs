//! Loading inputs from disk and ingesting them into a corpus.

#![allow(clippy::tests_outside_test_module)]

use std::fs;

use tempfile::TempDir;
use textmine_core::{Corpus, Field, MalformedDocument, Stopwords, Tokenizer};
use textmine_source::{Format, SourceError, SourceOptions, load};

#[test]
fn detects_formats() {
    let dir = TempDir::new().unwrap();
    for name in ["a.json", "b.jsonl", "c.NDJSON", "d.csv"] {
        fs::write(dir.path().join(name), "").unwrap();
    }

    assert_eq!(Format::detect(&dir.path().join("a.json")).unwrap(), Format::Json);
    assert_eq!(Format::detect(&dir.path().join("b.jsonl")).unwrap(), Format::JsonLines);
    assert_eq!(Format::detect(&dir.path().join("c.NDJSON")).unwrap(), Format::JsonLines);
    assert_eq!(Format::detect(dir.path()).unwrap(), Format::TextDirectory);
    assert!(matches!(
        Format::detect(&dir.path().join("d.csv")),
        Err(SourceError::UnsupportedFormat { .. })
    ));
    assert!(matches!(
        Format::detect(&dir.path().join("missing.json")),
        Err(SourceError::NotFound { .. })
    ));
}

#[test]
fn metadata_records_to_corpus() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("metadata.json");
    fs::write(
        &path,
        r#"[
            {"id": "ds1", "title": "Ozone profiles", "description": "Global ozone from satellite", "keyword": ["ATMOSPHERE", "OZONE"]},
            {"title": "No identifier"},
            {"id": "ds2", "title": "Sea ice", "description": "Sea ice extent", "keyword": ["CRYOSPHERE", "SEA ICE"]},
            {"id": "ds1", "title": "Duplicate"}
        ]"#,
    )
    .unwrap();

    let raw = load(&path, &SourceOptions::default()).unwrap();
    assert_eq!(raw.len(), 4);

    let (corpus, report) = Corpus::ingest(raw);
    assert_eq!(corpus.len(), 2);
    assert_eq!(
        report.skipped,
        vec![
            MalformedDocument::MissingId { index: 1 },
            MalformedDocument::DuplicateId {
                index: 3,
                id: "ds1".into()
            },
        ]
    );

    let tokens = Tokenizer::new(Stopwords::new())
        .tokenize_field(&corpus, &Field::Tags("keyword".into()));
    assert_eq!(tokens.documents()[1].tokens, vec!["cryosphere", "sea ice"]);
}

#[test]
fn json_lines_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("docs.jsonl");
    fs::write(&path, "{\"id\": 1, \"text\": \"one\"}\n{\"id\": 2, \"text\": \"two\"}\n").unwrap();

    let raw = load(&path, &SourceOptions::default()).unwrap();
    let ids: Vec<_> = raw.iter().map(|d| d.id.clone().unwrap()).collect();
    assert_eq!(ids, vec!["1", "2"]);
}

#[test]
fn text_directory() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("books")).unwrap();
    fs::write(dir.path().join("books/emma.txt"), "Emma Woodhouse, handsome").unwrap();
    fs::write(dir.path().join("books/persuasion.txt"), "Sir Walter Elliot").unwrap();

    let raw = load(dir.path(), &SourceOptions::default()).unwrap();
    let (corpus, report) = Corpus::ingest(raw);
    assert_eq!(report.skipped_count(), 0);
    let ids: Vec<&str> = corpus.ids().map(|id| id.as_str()).collect();
    assert_eq!(ids, vec!["books/emma", "books/persuasion"]);
    assert_eq!(
        corpus.get("books/emma").unwrap().text("text"),
        Some("Emma Woodhouse, handsome")
    );
}

#[test]
fn invalid_json_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "[{\"id\": ").unwrap();
    let err = load(&path, &SourceOptions::default()).unwrap_err();
    assert!(matches!(err, SourceError::Json { .. }));
    assert!(err.to_string().contains("bad.json"));
}
