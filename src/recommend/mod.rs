//! Content-based recommendation.
//!
//! Ranks articles by TF-IDF cosine similarity to the one just read, with a
//! fixed top/bottom selection policy: mostly similar picks, plus a couple
//! of deliberately dissimilar ones for variety.
//!
//! # Quick Start
//!
//! ```
//! use lector::recommend::ContentRecommender;
//!
//! let texts = vec![
//!     "machine learning algorithms",
//!     "deep learning neural networks",
//!     "growing tomatoes at home",
//! ];
//!
//! let mut recommender = ContentRecommender::new().with_less_similar(1);
//! recommender.fit(&texts).unwrap();
//!
//! let recs = recommender.after_reading(0, 2).unwrap();
//! assert_eq!(recs.len(), 2);
//! assert!(!recs.contains(&0));
//! ```

mod content_based;

pub use content_based::ContentRecommender;
