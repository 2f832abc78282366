use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_temp(contents: &str, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn test_from_csv_path() {
    let file = write_temp(
        "title,text\nFirst,Some body text here\nSecond,Another body\n",
        ".csv",
    );
    let corpus = Corpus::from_csv_path(file.path()).unwrap();
    assert_eq!(corpus.len(), 2);
    assert_eq!(corpus.get(0).unwrap().title, "First");
    assert_eq!(corpus.get(1).unwrap().text, "Another body");
}

#[test]
fn test_from_json_path() {
    let file = write_temp(
        r#"[{"title": "First", "text": "Some body"}, {"title": "Second", "text": "More body"}]"#,
        ".json",
    );
    let corpus = Corpus::from_json_path(file.path()).unwrap();
    assert_eq!(corpus.len(), 2);
    assert_eq!(corpus.get(1).unwrap().title, "Second");
}

#[test]
fn test_title_fallback_uses_first_30_chars() {
    let file = write_temp(
        r#"[{"title": null, "text": "abcdefghijklmnopqrstuvwxyz0123456789"}]"#,
        ".json",
    );
    let corpus = Corpus::from_json_path(file.path()).unwrap();
    assert_eq!(
        corpus.get(0).unwrap().title,
        "abcdefghijklmnopqrstuvwxyz0123"
    );
}

#[test]
fn test_title_fallback_is_char_safe() {
    // Multibyte characters must not be split mid-codepoint.
    let text = "é".repeat(40);
    let corpus = Corpus::from_articles(vec![(None, text)]).unwrap();
    assert_eq!(corpus.get(0).unwrap().title.chars().count(), 30);
}

#[test]
fn test_empty_csv_title_falls_back() {
    let file = write_temp("title,text\n,Body without a title\n", ".csv");
    let corpus = Corpus::from_csv_path(file.path()).unwrap();
    assert_eq!(corpus.get(0).unwrap().title, "Body without a title");
}

#[test]
fn test_missing_text_is_rejected() {
    let file = write_temp(r#"[{"title": "Only a title"}]"#, ".json");
    let err = Corpus::from_json_path(file.path()).unwrap_err();
    assert!(err.to_string().contains("has no text"));
}

#[test]
fn test_blank_text_is_rejected() {
    let err = Corpus::from_articles(vec![(Some("T".to_string()), "   ".to_string())])
        .unwrap_err();
    assert!(matches!(err, LectorError::MissingText { index: 0 }));
}

#[test]
fn test_empty_input_is_rejected() {
    let file = write_temp("[]", ".json");
    let err = Corpus::from_json_path(file.path()).unwrap_err();
    assert!(err.to_string().contains("empty corpus"));
}

#[test]
fn test_load_dispatches_on_extension() {
    let file = write_temp(r#"[{"title": "T", "text": "Body"}]"#, ".json");
    let corpus = Corpus::load(file.path(), None).unwrap();
    assert_eq!(corpus.len(), 1);
}

#[test]
fn test_load_explicit_format_wins() {
    // JSON contents behind a .txt extension still load with an override.
    let file = write_temp(r#"[{"title": "T", "text": "Body"}]"#, ".txt");
    assert!(Corpus::load(file.path(), None).is_err());
    let corpus = Corpus::load(file.path(), Some(Format::Json)).unwrap();
    assert_eq!(corpus.len(), 1);
}

#[test]
fn test_load_missing_file() {
    let err = Corpus::load("does-not-exist.json", None).unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_malformed_json_reports_path() {
    let file = write_temp("not json at all", ".json");
    let err = Corpus::from_json_path(file.path()).unwrap_err();
    assert!(matches!(err, LectorError::Parse { .. }));
}

#[test]
fn test_format_from_str() {
    assert_eq!("csv".parse::<Format>().unwrap(), Format::Csv);
    assert_eq!("JSON".parse::<Format>().unwrap(), Format::Json);
    assert!("xml".parse::<Format>().is_err());
}

#[test]
fn test_sample_truncates_and_is_seeded() {
    let articles: Vec<(Option<String>, String)> = (0..20)
        .map(|i| (Some(format!("t{i}")), format!("body {i}")))
        .collect();

    let mut a = Corpus::from_articles(articles.clone()).unwrap();
    let mut b = Corpus::from_articles(articles).unwrap();

    a.sample(5, Some(7));
    b.sample(5, Some(7));

    assert_eq!(a.len(), 5);
    assert_eq!(a.articles(), b.articles());
}

#[test]
fn test_sample_larger_than_corpus_is_noop() {
    let mut corpus =
        Corpus::from_articles(vec![(Some("t".to_string()), "body".to_string())]).unwrap();
    corpus.sample(10, Some(1));
    assert_eq!(corpus.len(), 1);
}

#[test]
fn test_texts_in_load_order() {
    let corpus = Corpus::from_articles(vec![
        (Some("a".to_string()), "first".to_string()),
        (Some("b".to_string()), "second".to_string()),
    ])
    .unwrap();
    assert_eq!(corpus.texts(), vec!["first", "second"]);
}
