//! CLI integration tests for lector.
//!
//! Each test drives the real binary with piped stdin, so the whole
//! load -> vectorize -> menu -> choose -> re-rank loop is exercised.

#![allow(clippy::unwrap_used)] // Tests can use unwrap

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

/// Create a lector command
fn lector() -> Command {
    Command::cargo_bin("lector").expect("Failed to find lector binary")
}

/// Six articles in two topic clusters plus a shared-vocabulary pair, so
/// the default min_df=2 configuration keeps a usable vocabulary.
const ARTICLES_JSON: &str = r#"[
  {"title": "Rust Ownership", "text": "rust ownership borrow checker memory safety"},
  {"title": "Rust Lifetimes", "text": "rust lifetimes borrow checker compiler"},
  {"title": "Sourdough", "text": "sourdough bread baking yeast flour"},
  {"title": "Pastry", "text": "pastry baking butter flour oven"},
  {"title": "Gardening", "text": "tomato garden soil compost water"},
  {"title": "Composting", "text": "compost garden soil organic waste"}
]"#;

fn json_corpus() -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("create temp file");
    file.write_all(ARTICLES_JSON.as_bytes()).expect("write corpus");
    file
}

fn csv_corpus() -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp file");
    writeln!(file, "title,text").unwrap();
    writeln!(file, "Rust Ownership,rust ownership borrow checker").unwrap();
    writeln!(file, "Rust Lifetimes,rust lifetimes borrow checker").unwrap();
    writeln!(file, "Sourdough,sourdough bread baking flour").unwrap();
    writeln!(file, "Pastry,pastry baking butter flour").unwrap();
    file
}

#[test]
fn test_help_mentions_usage() {
    lector()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("article"));
}

#[test]
fn test_missing_file_exits_with_code_3() {
    lector()
        .arg("no-such-file.json")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_directory_is_not_a_file() {
    let dir = tempfile::tempdir().unwrap();
    lector()
        .arg(dir.path())
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Not a file"));
}

#[test]
fn test_unknown_format_exits_with_code_2() {
    let file = json_corpus();
    lector()
        .arg(file.path())
        .args(["--format", "xml"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unsupported format"));
}

#[test]
fn test_empty_corpus_exits_with_code_1() {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .unwrap();
    file.write_all(b"[]").unwrap();

    lector()
        .arg(file.path())
        .write_stdin("")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("empty corpus"));
}

#[test]
fn test_count_must_exceed_different() {
    let file = json_corpus();
    lector()
        .arg(file.path())
        .args(["--count", "2", "--different", "2"])
        .write_stdin("")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("must exceed"));
}

#[test]
fn test_invalid_choice_exits_cleanly() {
    let file = json_corpus();
    lector()
        .arg(file.path())
        .args(["--count", "4", "--seed", "1"])
        .write_stdin("99\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("6 articles loaded"))
        .stdout(predicate::str::contains(
            "Here are some new recommendations for you:",
        ))
        .stdout(predicate::str::contains("Invalid choice. Goodbye!"));
}

#[test]
fn test_full_session_reranks_after_reading() {
    let file = json_corpus();
    lector()
        .arg(file.path())
        .args(["--count", "4", "--seed", "1"])
        .write_stdin("1\n\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Press Enter to continue"))
        .stdout(predicate::str::contains(
            "Or if you want something different, how about:",
        ))
        .stdout(predicate::str::contains("Invalid choice. Goodbye!"));
}

#[test]
fn test_csv_corpus_loads() {
    let file = csv_corpus();
    lector()
        .arg(file.path())
        .args(["--count", "3", "--different", "1", "--seed", "1"])
        .write_stdin("99\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("4 articles loaded"));
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let file = json_corpus();

    let run = || {
        lector()
            .arg(file.path())
            .args(["--count", "4", "--seed", "7"])
            .write_stdin("99\n")
            .output()
            .expect("run lector")
    };

    let first = run();
    let second = run();
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_sample_shrinks_corpus() {
    let file = json_corpus();
    lector()
        .arg(file.path())
        .args([
            "--sample", "4", "--count", "3", "--different", "1", "--seed", "5",
        ])
        .write_stdin("99\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("4 articles loaded"));
}
