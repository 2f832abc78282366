//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use lector::prelude::*;
//! ```

pub use crate::corpus::{Article, Corpus, Format};
pub use crate::error::{LectorError, Result};
pub use crate::primitives::{Matrix, Vector};
pub use crate::recommend::ContentRecommender;
pub use crate::text::similarity::cosine_similarity;
pub use crate::text::stopwords::StopWordsFilter;
pub use crate::text::vectorize::TfidfVectorizer;
pub use crate::text::Tokenizer;
