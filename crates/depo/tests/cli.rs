//! CLI integration tests for depo commands.
//!
//! These tests focus on exit codes and basic behavioral verification,
//! not specific output formatting which may change.

// Integration tests live outside cfg(test) by design
#![allow(clippy::tests_outside_test_module)]

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to create a temp directory for tests.
fn temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().unwrap()
}

/// Helper to get a depo command.
fn depo() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("depo").unwrap()
}

/// A minimal witness corpus file.
const WITNESS_JSON: &str = r#"{
    "name": "deposition",
    "children": [
        {"name": "question-number", "text": "4"},
        {"name": "question", "text": "Where were you on the day in question?"},
        {"name": "question-answer", "text": "At the mill, all afternoon. See chapter12 of the record."},
        {"name": "question-number", "text": "5"},
        {"name": "question-answer", "text": "The quick brown fox story again."}
    ]
}"#;

/// Writes a corpus with one witness file and returns the corpus dir.
fn write_corpus(root: &Path) -> std::path::PathBuf {
    let corpus = root.join("corpus");
    fs::create_dir_all(&corpus).unwrap();
    fs::write(corpus.join("00_Jane Roe.json"), WITNESS_JSON).unwrap();
    // Overview files are skipped during indexing.
    fs::write(corpus.join("99_Overview.json"), r#"{"name": "overview"}"#).unwrap();
    corpus
}

/// Runs `depo index` into a data directory laid out for `depo search`.
fn build_data_dir(root: &Path) -> std::path::PathBuf {
    let corpus = write_corpus(root);
    let data = root.join("data");
    fs::create_dir_all(data.join("witnesses")).unwrap();

    depo()
        .arg("index")
        .arg("--corpus")
        .arg(&corpus)
        .arg("--out")
        .arg(data.join("witnesses/full-index.bin"))
        .assert()
        .success()
        .stdout(predicate::str::contains("3 passages"));

    data
}

mod extract {
    use super::*;

    #[test]
    fn prints_extracted_items() {
        let dir = temp_dir();
        let corpus = write_corpus(dir.path());

        depo()
            .arg("extract")
            .arg(corpus.join("00_Jane Roe.json"))
            .assert()
            .success()
            .stdout(predicate::str::contains("Jane Roe (witness #1): 3 items"))
            .stdout(predicate::str::contains("question-answer[1]"));
    }

    #[test]
    fn json_output_parses() {
        let dir = temp_dir();
        let corpus = write_corpus(dir.path());

        let output = depo()
            .arg("extract")
            .arg(corpus.join("00_Jane Roe.json"))
            .arg("--json")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let items: serde_json::Value = serde_json::from_slice(&output).unwrap();
        let items = items.as_array().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["question"], 4);
        assert_eq!(items[2]["question"], 5);
    }

    #[test]
    fn bad_file_stem_fails() {
        let dir = temp_dir();
        let file = dir.path().join("noprefix.json");
        fs::write(&file, WITNESS_JSON).unwrap();

        depo()
            .arg("extract")
            .arg(&file)
            .assert()
            .failure()
            .stderr(predicate::str::contains("witness file stem"));
    }
}

mod index {
    use super::*;

    #[test]
    fn builds_packed_blob() {
        let dir = temp_dir();
        let data = build_data_dir(dir.path());

        let blob = data.join("witnesses/full-index.bin");
        assert!(blob.exists());
        assert!(fs::metadata(&blob).unwrap().len() > 0);
        // The scratch build directory is cleaned up.
        assert!(!data.join("witnesses/full-index.build").exists());
    }

    #[test]
    fn missing_corpus_fails() {
        let dir = temp_dir();

        depo()
            .arg("index")
            .arg("--corpus")
            .arg(dir.path().join("absent"))
            .arg("--out")
            .arg(dir.path().join("out.bin"))
            .assert()
            .failure()
            .stderr(predicate::str::contains("error:"));
    }
}

mod search {
    use super::*;

    fn search_in(data: &Path, query: &str) -> Command {
        let mut cmd = depo();
        cmd.arg("search").arg(query).arg("--data").arg(data);
        cmd
    }

    #[test]
    fn phrase_query_finds_passage() {
        let dir = temp_dir();
        let data = build_data_dir(dir.path());

        search_in(&data, "mill afternoon")
            .assert()
            .success()
            .stdout(predicate::str::contains("Jane Roe"))
            .stdout(predicate::str::contains("<b>mill</b>"));
    }

    #[test]
    fn exact_query_respects_order() {
        let dir = temp_dir();
        let data = build_data_dir(dir.path());

        search_in(&data, "\"quick brown\"")
            .assert()
            .success()
            .stdout(predicate::str::contains("<b>quick</b> <b>brown</b>"));

        search_in(&data, "\"brown quick\"")
            .assert()
            .success()
            .stdout(predicate::str::contains("no matches"));
    }

    #[test]
    fn glued_numbers_are_searchable() {
        let dir = temp_dir();
        let data = build_data_dir(dir.path());

        search_in(&data, "12")
            .assert()
            .success()
            .stdout(predicate::str::contains("chapter"));
    }

    #[test]
    fn json_output_parses() {
        let dir = temp_dir();
        let data = build_data_dir(dir.path());

        let output = search_in(&data, "fox")
            .arg("--json")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let matches: serde_json::Value = serde_json::from_slice(&output).unwrap();
        let matches = matches.as_array().unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0]["witness"], "Jane Roe");
        assert_eq!(matches[0]["question"], 5);
    }

    #[test]
    fn missing_blob_fails() {
        let dir = temp_dir();
        fs::create_dir_all(dir.path().join("data")).unwrap();

        search_in(&dir.path().join("data"), "fox")
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to load index blob"));
    }
}
