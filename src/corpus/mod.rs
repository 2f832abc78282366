//! Article corpus loading.
//!
//! A corpus is an ordered list of articles read from a CSV or JSON file.
//! Each article must have text; a missing title is backfilled from the
//! opening characters of the text.

use crate::error::{LectorError, Result};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Number of leading text characters used when a title is missing.
const TITLE_PREVIEW_CHARS: usize = 30;

/// A single article with a display title and body text.
///
/// After loading, `title` is always non-empty: articles without one get
/// the first [`TITLE_PREVIEW_CHARS`] characters of their text instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    /// Display title
    pub title: String,
    /// Full body text
    pub text: String,
}

/// Raw input record before normalization. Both fields are optional so a
/// sparse CSV row or JSON object deserializes without error; validation
/// happens in [`Corpus::from_articles`].
#[derive(Debug, Deserialize)]
struct RawArticle {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    text: Option<String>,
}

/// Supported input file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Comma-separated values with a header row containing `title` and `text`
    Csv,
    /// A JSON array of objects with `title` and `text` fields
    Json,
}

impl FromStr for Format {
    type Err = LectorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Format::Csv),
            "json" => Ok(Format::Json),
            other => Err(LectorError::Other(format!(
                "unsupported format '{other}'; use csv or json"
            ))),
        }
    }
}

impl Format {
    /// Infer the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is neither `csv` nor `json`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        ext.parse().map_err(|_| {
            LectorError::Other(format!(
                "cannot infer format of {}; pass an explicit format",
                path.display()
            ))
        })
    }
}

/// An ordered, validated collection of articles.
///
/// # Examples
///
/// ```
/// use lector::corpus::{Article, Corpus};
///
/// let corpus = Corpus::from_articles(vec![
///     (Some("Title".to_string()), "Body text".to_string()),
///     (None, "An article whose opening line becomes its title".to_string()),
/// ]).unwrap();
///
/// assert_eq!(corpus.len(), 2);
/// assert_eq!(corpus.get(1).unwrap().title, "An article whose opening line ");
/// ```
#[derive(Debug, Clone)]
pub struct Corpus {
    articles: Vec<Article>,
}

impl Corpus {
    /// Build a corpus from (title, text) pairs, applying normalization.
    ///
    /// # Errors
    ///
    /// Returns an error if any article has empty text, or if the input is
    /// empty.
    pub fn from_articles(raw: Vec<(Option<String>, String)>) -> Result<Self> {
        let raw = raw
            .into_iter()
            .map(|(title, text)| RawArticle {
                title,
                text: Some(text),
            })
            .collect();
        Self::normalize(raw, "article list")
    }

    fn normalize(raw: Vec<RawArticle>, context: &str) -> Result<Self> {
        if raw.is_empty() {
            return Err(LectorError::empty_corpus(context));
        }

        let mut articles = Vec::with_capacity(raw.len());
        for (index, record) in raw.into_iter().enumerate() {
            let text = match record.text {
                Some(text) if !text.trim().is_empty() => text,
                _ => return Err(LectorError::MissingText { index }),
            };

            let title = match record.title {
                Some(title) if !title.trim().is_empty() => title,
                _ => text.chars().take(TITLE_PREVIEW_CHARS).collect(),
            };

            articles.push(Article { title, text });
        }

        Ok(Self { articles })
    }

    /// Load a corpus from a CSV file with `title` and `text` columns.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if any
    /// row fails validation.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut reader =
            csv::Reader::from_path(path).map_err(|e| LectorError::parse(path, e))?;

        let mut raw = Vec::new();
        for record in reader.deserialize::<RawArticle>() {
            raw.push(record.map_err(|e| LectorError::parse(path, e))?);
        }

        Self::normalize(raw, &path.display().to_string())
    }

    /// Load a corpus from a JSON array of `{title, text}` objects.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if any
    /// entry fails validation.
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let raw: Vec<RawArticle> =
            serde_json::from_str(&contents).map_err(|e| LectorError::parse(path, e))?;

        Self::normalize(raw, &path.display().to_string())
    }

    /// Load a corpus, inferring the format from the file extension unless
    /// an explicit format is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the format cannot be determined or loading
    /// fails.
    pub fn load<P: AsRef<Path>>(path: P, format: Option<Format>) -> Result<Self> {
        let path = path.as_ref();
        let format = match format {
            Some(f) => f,
            None => Format::from_path(path)?,
        };
        match format {
            Format::Csv => Self::from_csv_path(path),
            Format::Json => Self::from_json_path(path),
        }
    }

    /// Down-sample the corpus to at most `n` articles, chosen uniformly at
    /// random. A seed makes the selection reproducible. No-op when `n`
    /// covers the whole corpus.
    pub fn sample(&mut self, n: usize, seed: Option<u64>) {
        if n >= self.articles.len() {
            return;
        }

        if let Some(seed) = seed {
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
            self.articles.shuffle(&mut rng);
        } else {
            let mut rng = rand::thread_rng();
            self.articles.shuffle(&mut rng);
        }
        self.articles.truncate(n);
    }

    /// Number of articles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// True if the corpus has no articles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Get an article by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Article> {
        self.articles.get(index)
    }

    /// All articles in load order.
    #[must_use]
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Article bodies in load order, for vectorization.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.articles.iter().map(|a| a.text.as_str()).collect()
    }
}

#[cfg(test)]
#[path = "corpus_tests.rs"]
mod tests;
