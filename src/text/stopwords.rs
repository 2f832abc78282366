//! Stop word filtering for text preprocessing.
//!
//! Stop words are common words ("the", "is", "at") that carry little
//! signal for content similarity and are removed before vectorization.

use crate::error::Result;
use std::collections::HashSet;

/// Stop word filter with case-insensitive membership.
///
/// # Examples
///
/// ```
/// use lector::text::stopwords::StopWordsFilter;
///
/// let filter = StopWordsFilter::english();
/// assert!(filter.is_stop_word("The"));
/// assert!(!filter.is_stop_word("tomato"));
///
/// let custom = StopWordsFilter::new(["foo", "bar"]);
/// assert!(custom.is_stop_word("FOO"));
/// ```
#[derive(Debug, Clone)]
pub struct StopWordsFilter {
    /// Stored lowercase for case-insensitive lookup
    stop_words: HashSet<String>,
}

impl StopWordsFilter {
    /// Create a filter from a custom word list.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let stop_words = words
            .into_iter()
            .map(|s| s.as_ref().to_lowercase())
            .collect();

        Self { stop_words }
    }

    /// Create a filter with the built-in English stop word list.
    ///
    /// # Examples
    ///
    /// ```
    /// use lector::text::stopwords::StopWordsFilter;
    ///
    /// let filter = StopWordsFilter::english();
    /// let tokens = vec!["the".to_string(), "cat".to_string(), "is".to_string()];
    /// let kept = filter.filter(tokens).unwrap();
    /// assert_eq!(kept, vec!["cat"]);
    /// ```
    #[must_use]
    pub fn english() -> Self {
        Self::new(ENGLISH_STOP_WORDS)
    }

    /// Check if a word is a stop word (case-insensitive).
    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(&word.to_lowercase())
    }

    /// Remove stop words from a token list, preserving order and case.
    ///
    /// # Errors
    ///
    /// Never fails today; the `Result` keeps the signature uniform with the
    /// rest of the pipeline.
    pub fn filter(&self, tokens: Vec<String>) -> Result<Vec<String>> {
        Ok(tokens
            .into_iter()
            .filter(|t| !self.is_stop_word(t))
            .collect())
    }

    /// Number of stop words in the filter.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the filter is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

/// Built-in English stop word list.
///
/// Covers articles, pronouns, prepositions, conjunctions, auxiliary verbs,
/// and the most frequent adverbs, in the tradition of the NLTK and
/// scikit-learn lists.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "again", "against", "all", "almost", "alone",
    "along", "already", "also", "although", "always", "am", "among", "an", "and", "another",
    "any", "anybody", "anyone", "anything", "anywhere", "are", "around", "as", "at", "back",
    "be", "became", "because", "become", "becomes", "been", "before", "behind", "being",
    "below", "between", "beyond", "both", "but", "by", "can", "cannot", "could", "did", "do",
    "does", "doing", "done", "down", "during", "each", "either", "else", "enough", "even",
    "ever", "every", "everybody", "everyone", "everything", "everywhere", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "however", "i", "if", "in", "indeed",
    "instead", "into", "is", "it", "its", "itself", "just", "last", "least", "less", "like",
    "made", "many", "may", "me", "might", "more", "most", "much", "must", "my", "myself",
    "neither", "never", "nevertheless", "next", "no", "nobody", "none", "nor", "not",
    "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto",
    "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own",
    "per", "perhaps", "rather", "same", "several", "she", "should", "since", "so", "some",
    "somebody", "someone", "something", "somewhere", "still", "such", "than", "that", "the",
    "their", "theirs", "them", "themselves", "then", "there", "therefore", "these", "they",
    "this", "those", "though", "through", "throughout", "thus", "to", "together", "too",
    "toward", "under", "until", "up", "upon", "us", "very", "was", "we", "well", "were",
    "what", "whatever", "when", "whenever", "where", "wherever", "whether", "which",
    "while", "who", "whoever", "whole", "whom", "whose", "why", "will", "with", "within",
    "without", "would", "yet", "you", "your", "yours", "yourself", "yourselves",
];

#[cfg(test)]
#[path = "stopwords_tests.rs"]
mod tests;
