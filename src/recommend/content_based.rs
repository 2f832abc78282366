//! Item-to-item recommendation over TF-IDF vectors.

use crate::error::{LectorError, Result};
use crate::primitives::Matrix;
use crate::text::similarity::similarity_to_all;
use crate::text::vectorize::TfidfVectorizer;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Default number of dissimilar picks mixed into each recommendation set.
pub const DEFAULT_LESS_SIMILAR: usize = 2;

/// Content-based article recommender.
///
/// Vectorizes a corpus with TF-IDF (by default: English stop words,
/// `min_df = 2`, `max_df = 0.8`), then ranks articles by cosine similarity
/// to the last one read. Each recommendation set holds the most similar
/// articles followed by the least similar ones, never repeating the
/// article just read.
///
/// # Examples
///
/// ```
/// use lector::recommend::ContentRecommender;
///
/// let texts = vec![
///     "rust borrow checker ownership",
///     "rust lifetimes and ownership",
///     "sourdough bread baking",
///     "baking pastry in a home oven",
/// ];
///
/// let mut recommender = ContentRecommender::new()
///     .with_less_similar(1)
///     .with_seed(9);
/// recommender.fit(&texts).unwrap();
///
/// // Article 1 shares its vocabulary with article 0.
/// let recs = recommender.after_reading(0, 3).unwrap();
/// assert_eq!(recs[0], 1);
/// ```
#[allow(missing_debug_implementations)]
pub struct ContentRecommender {
    vectorizer: TfidfVectorizer,
    vectors: Option<Matrix<f64>>,
    less_similar: usize,
    seed: Option<u64>,
}

impl ContentRecommender {
    /// Create a recommender with the default TF-IDF configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vectorizer: TfidfVectorizer::new()
                .with_min_df(2)
                .with_max_df(0.8)
                .with_stop_words_english(),
            vectors: None,
            less_similar: DEFAULT_LESS_SIMILAR,
            seed: None,
        }
    }

    /// Set how many dissimilar picks each recommendation set carries.
    #[must_use]
    pub fn with_less_similar(mut self, less_similar: usize) -> Self {
        self.less_similar = less_similar;
        self
    }

    /// Seed the random number generator used for the initial picks.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the TF-IDF configuration entirely.
    #[must_use]
    pub fn with_vectorizer(mut self, vectorizer: TfidfVectorizer) -> Self {
        self.vectorizer = vectorizer;
        self
    }

    /// Vectorize the corpus. Must be called before any recommendation.
    ///
    /// # Errors
    ///
    /// Returns an error if vectorization fails (empty corpus, empty
    /// vocabulary).
    pub fn fit<S: AsRef<str>>(&mut self, texts: &[S]) -> Result<()> {
        self.vectors = Some(self.vectorizer.fit_transform(texts)?);
        Ok(())
    }

    /// Number of articles the recommender was fitted on.
    #[must_use]
    pub fn n_articles(&self) -> usize {
        self.vectors.as_ref().map_or(0, Matrix::n_rows)
    }

    fn fitted_vectors(&self) -> Result<&Matrix<f64>> {
        self.vectors.as_ref().ok_or_else(|| LectorError::NotFitted {
            component: "ContentRecommender".to_string(),
        })
    }

    /// Draw `n` distinct article indices uniformly at random.
    ///
    /// With a seed set, repeated calls return the same picks.
    ///
    /// # Errors
    ///
    /// Returns an error if the recommender is not fitted, `n` is zero, or
    /// `n` exceeds the corpus size.
    pub fn initial(&self, n: usize) -> Result<Vec<usize>> {
        let n_articles = self.fitted_vectors()?.n_rows();

        if n == 0 || n > n_articles {
            return Err(LectorError::InvalidHyperparameter {
                param: "n".to_string(),
                value: n.to_string(),
                constraint: format!("1..={n_articles}"),
            });
        }

        let mut indices: Vec<usize> = (0..n_articles).collect();
        if let Some(seed) = self.seed {
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
            indices.shuffle(&mut rng);
        } else {
            let mut rng = rand::thread_rng();
            indices.shuffle(&mut rng);
        }
        indices.truncate(n);

        Ok(indices)
    }

    /// Recommend `n` articles after the reader finished `last_choice`.
    ///
    /// Articles are ranked by cosine similarity to `last_choice`
    /// (descending, ties broken by ascending index) with `last_choice`
    /// itself excluded. The result holds the top `n - less_similar`
    /// entries followed by the `less_similar` least similar ones. When
    /// fewer than `n` other articles exist, all of them are returned in
    /// ranked order.
    ///
    /// # Errors
    ///
    /// Returns an error if the recommender is not fitted, `last_choice`
    /// is out of bounds, or `n` is not larger than the configured number
    /// of dissimilar picks.
    pub fn after_reading(&self, last_choice: usize, n: usize) -> Result<Vec<usize>> {
        let vectors = self.fitted_vectors()?;
        let n_articles = vectors.n_rows();

        if last_choice >= n_articles {
            return Err(LectorError::index_out_of_bounds(last_choice, n_articles));
        }
        if n <= self.less_similar {
            return Err(LectorError::InvalidHyperparameter {
                param: "n".to_string(),
                value: n.to_string(),
                constraint: format!("> less_similar ({})", self.less_similar),
            });
        }

        let scores = similarity_to_all(vectors, last_choice)?;

        let mut ranked: Vec<(usize, f64)> = scores
            .into_iter()
            .enumerate()
            .filter(|(idx, _)| *idx != last_choice)
            .collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });

        let pool: Vec<usize> = ranked.into_iter().map(|(idx, _)| idx).collect();
        if pool.len() <= n {
            return Ok(pool);
        }

        let similar_count = n - self.less_similar;
        let mut recommendations = pool[..similar_count].to_vec();
        recommendations.extend_from_slice(&pool[pool.len() - self.less_similar..]);

        Ok(recommendations)
    }

    /// How many of the entries returned by [`Self::after_reading`] are the
    /// deliberately dissimilar picks.
    #[must_use]
    pub fn less_similar(&self) -> usize {
        self.less_similar
    }
}

impl Default for ContentRecommender {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "content_based_tests.rs"]
mod tests;
