//! Text processing pipeline.
//!
//! This module provides the pieces that turn raw article text into
//! comparable vectors:
//! - Tokenization ([`tokenize`])
//! - Stop word filtering ([`stopwords`])
//! - TF-IDF vectorization ([`vectorize`])
//! - Cosine similarity ([`similarity`])

pub mod similarity;
pub mod stopwords;
pub mod tokenize;
pub mod vectorize;

use crate::error::Result;

/// Trait for text tokenizers.
///
/// Tokenizers split raw text into string tokens. Case folding and stop
/// word removal are the vectorizer's job, not the tokenizer's.
///
/// # Examples
///
/// ```
/// use lector::text::{Tokenizer, tokenize::WordTokenizer};
///
/// let tokenizer = WordTokenizer::new();
/// let tokens = tokenizer.tokenize("Hello, world!").unwrap();
/// assert_eq!(tokens, vec!["Hello", "world"]);
/// ```
pub trait Tokenizer {
    /// Split text into tokens.
    ///
    /// # Errors
    ///
    /// Returns an error if tokenization fails.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}
