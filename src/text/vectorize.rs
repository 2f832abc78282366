//! TF-IDF vectorization of text documents.
//!
//! Converts a document collection into a weighted term matrix where
//! frequent-in-document but rare-in-corpus terms score highest.
//!
//! **Formula:**
//! ```text
//! tfidf(t, d) = tf(t, d) × idf(t)
//! tf(t, d)    = count of term t in document d
//! idf(t)      = ln((1 + N) / (1 + df(t))) + 1
//! where N = total documents, df(t) = documents containing term t
//! ```
//!
//! The smoothed idf keeps every weight strictly positive, so a term shared
//! by all documents still contributes to similarity.

use crate::error::{LectorError, Result};
use crate::primitives::Matrix;
use crate::text::stopwords::StopWordsFilter;
use crate::text::tokenize::WordTokenizer;
use crate::text::Tokenizer;
use std::collections::{HashMap, HashSet};

/// TF-IDF vectorizer with document-frequency pruning.
///
/// Configuration follows the builder pattern; `fit` learns the vocabulary
/// and idf weights, `transform` maps documents onto them.
///
/// # Examples
///
/// ```
/// use lector::text::vectorize::TfidfVectorizer;
///
/// let docs = vec![
///     "the cat sat on the mat",
///     "the dog sat on the log",
/// ];
///
/// let mut vectorizer = TfidfVectorizer::new();
/// let matrix = vectorizer.fit_transform(&docs).unwrap();
/// assert_eq!(matrix.n_rows(), 2);
/// ```
#[allow(missing_debug_implementations)]
pub struct TfidfVectorizer {
    tokenizer: Box<dyn Tokenizer>,
    lowercase: bool,
    min_df: usize,
    max_df: f64,
    max_features: Option<usize>,
    stop_words: Option<StopWordsFilter>,
    /// Term -> column index, assigned alphabetically at fit time
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequencies, indexed by column
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Create a vectorizer with default settings: word tokenization,
    /// lowercasing, no document-frequency pruning, no stop words.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokenizer: Box::new(WordTokenizer::new()),
            lowercase: true,
            min_df: 1,
            max_df: 1.0,
            max_features: None,
            stop_words: None,
            vocabulary: HashMap::new(),
            idf: Vec::new(),
        }
    }

    /// Set the tokenizer to use.
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Set whether tokens are lowercased before counting.
    #[must_use]
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Ignore terms appearing in fewer than `min_df` documents.
    #[must_use]
    pub fn with_min_df(mut self, min_df: usize) -> Self {
        self.min_df = min_df;
        self
    }

    /// Ignore terms appearing in more than `max_df` fraction of documents
    /// (clamped to 0.0..=1.0).
    #[must_use]
    pub fn with_max_df(mut self, max_df: f64) -> Self {
        self.max_df = max_df.clamp(0.0, 1.0);
        self
    }

    /// Keep only the `max_features` terms with the highest document
    /// frequency.
    #[must_use]
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = Some(max_features);
        self
    }

    /// Remove English stop words before counting.
    #[must_use]
    pub fn with_stop_words_english(mut self) -> Self {
        self.stop_words = Some(StopWordsFilter::english());
        self
    }

    /// Remove a custom stop word list before counting.
    #[must_use]
    pub fn with_stop_words(mut self, words: &[&str]) -> Self {
        self.stop_words = Some(StopWordsFilter::new(words));
        self
    }

    /// Tokenize one document and apply lowercasing and stop word removal.
    fn preprocess(&self, text: &str) -> Result<Vec<String>> {
        let mut tokens = self.tokenizer.tokenize(text)?;
        if self.lowercase {
            for token in &mut tokens {
                *token = token.to_lowercase();
            }
        }
        match &self.stop_words {
            Some(filter) => filter.filter(tokens),
            None => Ok(tokens),
        }
    }

    /// Learn the vocabulary and idf weights from `documents`.
    ///
    /// Terms are kept when their document frequency lies in
    /// `min_df..=ceil(max_df * n_docs)`; column indices are assigned in
    /// alphabetical order so repeated fits over the same corpus produce
    /// identical matrices.
    ///
    /// # Errors
    ///
    /// Returns an error if `documents` is empty or if no term survives the
    /// document-frequency pruning.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        if documents.is_empty() {
            return Err(LectorError::empty_corpus("cannot fit on zero documents"));
        }

        let n_docs = documents.len();
        let mut doc_freq: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let tokens = self.preprocess(doc.as_ref())?;
            let unique: HashSet<String> = tokens.into_iter().collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let max_df_count = (self.max_df * n_docs as f64).ceil() as usize;
        let mut kept: Vec<(String, usize)> = doc_freq
            .into_iter()
            .filter(|(_, df)| *df >= self.min_df && *df <= max_df_count)
            .collect();

        if let Some(limit) = self.max_features {
            kept.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
            kept.truncate(limit);
        }

        kept.sort_by(|a, b| a.0.cmp(&b.0));

        if kept.is_empty() {
            return Err(LectorError::Other(format!(
                "empty vocabulary: no term satisfied min_df={} and max_df={}",
                self.min_df, self.max_df
            )));
        }

        self.idf = kept
            .iter()
            .map(|(_, df)| ((1.0 + n_docs as f64) / (1.0 + *df as f64)).ln() + 1.0)
            .collect();
        self.vocabulary = kept
            .into_iter()
            .enumerate()
            .map(|(idx, (term, _))| (term, idx))
            .collect();

        Ok(())
    }

    /// Transform documents into a TF-IDF matrix using the fitted vocabulary.
    ///
    /// Returns a matrix with one row per document and one column per
    /// vocabulary term. Out-of-vocabulary terms are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if `documents` is empty or `fit` has not been
    /// called.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<Matrix<f64>> {
        if documents.is_empty() {
            return Err(LectorError::empty_corpus(
                "cannot transform zero documents",
            ));
        }
        if self.vocabulary.is_empty() {
            return Err(LectorError::NotFitted {
                component: "TfidfVectorizer".to_string(),
            });
        }

        let vocab_size = self.vocabulary.len();
        let mut matrix = Matrix::zeros(documents.len(), vocab_size);

        for (doc_idx, doc) in documents.iter().enumerate() {
            let tokens = self.preprocess(doc.as_ref())?;

            let mut counts: HashMap<usize, f64> = HashMap::new();
            for token in tokens {
                if let Some(&col) = self.vocabulary.get(&token) {
                    *counts.entry(col).or_insert(0.0) += 1.0;
                }
            }

            for (col, count) in counts {
                matrix.set(doc_idx, col, count * self.idf[col]);
            }
        }

        Ok(matrix)
    }

    /// Learn the vocabulary and transform in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting or transformation fails.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<Matrix<f64>> {
        self.fit(documents)?;
        self.transform(documents)
    }

    /// Get the learned vocabulary (term -> column index).
    #[must_use]
    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocabulary
    }

    /// Get the vocabulary size.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Get the inverse document frequencies, indexed by column.
    #[must_use]
    pub fn idf_values(&self) -> &[f64] {
        &self.idf
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "vectorize_tests.rs"]
mod tests;
