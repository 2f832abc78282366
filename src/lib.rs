//! Lector: content-based article recommendation in pure Rust.
//!
//! Lector turns a corpus of text articles into TF-IDF vectors and ranks
//! articles by cosine similarity to the one a reader just finished, mixing
//! in a few deliberately dissimilar picks for variety.
//!
//! # Quick Start
//!
//! ```
//! use lector::prelude::*;
//!
//! let texts = vec![
//!     "rust systems programming with ownership and borrowing",
//!     "gardening tips for growing tomatoes in raised beds",
//!     "memory safety in systems programming languages",
//! ];
//!
//! let mut recommender = ContentRecommender::new()
//!     .with_less_similar(1)
//!     .with_seed(42);
//! recommender.fit(&texts).unwrap();
//!
//! // After reading article 0, the most similar article comes first.
//! let recs = recommender.after_reading(0, 2).unwrap();
//! assert_eq!(recs[0], 2);
//! assert!(!recs.contains(&0));
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`corpus`]: Article loading from CSV and JSON files
//! - [`text`]: Tokenization, stop words, TF-IDF vectorization, similarity
//! - [`recommend`]: Content-based recommendation policy

pub mod corpus;
pub mod error;
pub mod prelude;
pub mod primitives;
pub mod recommend;
pub mod text;

pub use error::{LectorError, Result};
pub use primitives::{Matrix, Vector};
