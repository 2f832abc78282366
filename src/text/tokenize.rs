//! Tokenization for the TF-IDF pipeline.
//!
//! Two strategies are provided:
//! - [`WordTokenizer`]: alphanumeric runs of at least two characters
//! - [`WhitespaceTokenizer`]: plain Unicode whitespace splitting

use crate::error::Result;
use crate::text::Tokenizer;

/// Word tokenizer that extracts alphanumeric runs.
///
/// Splits on any non-alphanumeric character and discards tokens shorter
/// than two characters, so punctuation and single letters never reach the
/// vocabulary.
///
/// # Examples
///
/// ```
/// use lector::text::{Tokenizer, tokenize::WordTokenizer};
///
/// let tokenizer = WordTokenizer::new();
///
/// let tokens = tokenizer.tokenize("Hello, world!").unwrap();
/// assert_eq!(tokens, vec!["Hello", "world"]);
///
/// // Single characters are dropped
/// let tokens = tokenizer.tokenize("a cat on a mat").unwrap();
/// assert_eq!(tokens, vec!["cat", "on", "mat"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WordTokenizer {
    min_token_len: usize,
}

impl WordTokenizer {
    /// Create a new word tokenizer with the default minimum token length (2).
    #[must_use]
    pub fn new() -> Self {
        Self { min_token_len: 2 }
    }

    /// Set the minimum token length in characters.
    #[must_use]
    pub fn with_min_token_len(mut self, min_token_len: usize) -> Self {
        self.min_token_len = min_token_len;
        self
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let tokens = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| t.chars().count() >= self.min_token_len)
            .map(ToString::to_string)
            .collect();

        Ok(tokens)
    }
}

/// Whitespace tokenizer that splits text on Unicode whitespace characters.
///
/// Preserves punctuation attached to words.
///
/// # Examples
///
/// ```
/// use lector::text::{Tokenizer, tokenize::WhitespaceTokenizer};
///
/// let tokenizer = WhitespaceTokenizer::new();
/// let tokens = tokenizer.tokenize("foo   bar\nbaz").unwrap();
/// assert_eq!(tokens, vec!["foo", "bar", "baz"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let tokens = text.split_whitespace().map(ToString::to_string).collect();
        Ok(tokens)
    }
}

#[cfg(test)]
#[path = "tokenize_tests.rs"]
mod tests;
