//! Cosine similarity between document vectors.
//!
//! # Quick Start
//!
//! ```
//! use lector::text::similarity::cosine_similarity;
//! use lector::primitives::Vector;
//!
//! let v1 = Vector::from_slice(&[1.0, 2.0, 3.0]);
//! let v2 = Vector::from_slice(&[2.0, 3.0, 4.0]);
//!
//! let sim = cosine_similarity(&v1, &v2).unwrap();
//! assert!(sim > 0.9);
//! ```

use crate::error::{LectorError, Result};
use crate::primitives::{Matrix, Vector};

/// Compute cosine similarity between two vectors.
///
/// Measures the angle between the vectors, ignoring magnitude:
/// 1 means identical direction, 0 orthogonal, -1 opposite.
///
/// # Formula
/// ```text
/// cosine_sim(A, B) = (A · B) / (||A|| * ||B||)
/// ```
///
/// A zero vector is treated as orthogonal to everything (similarity 0).
///
/// # Errors
///
/// Returns an error if the vectors are empty or have different lengths.
pub fn cosine_similarity(a: &Vector<f64>, b: &Vector<f64>) -> Result<f64> {
    if a.len() != b.len() {
        return Err(LectorError::DimensionMismatch {
            expected: format!("len={}", a.len()),
            actual: format!("len={}", b.len()),
        });
    }
    if a.is_empty() {
        return Err(LectorError::Other("vectors cannot be empty".to_string()));
    }

    let dot = a.dot(b);
    let norm_a = a.norm();
    let norm_b = b.norm();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }

    Ok(dot / (norm_a * norm_b))
}

/// Compute the cosine similarity of one matrix row against every row.
///
/// Returns one score per row; the score at `row_idx` itself is 1 for a
/// non-zero row and 0 for a zero row.
///
/// # Errors
///
/// Returns an error if `row_idx` is out of bounds or the matrix has zero
/// columns.
///
/// # Examples
///
/// ```
/// use lector::primitives::Matrix;
/// use lector::text::similarity::similarity_to_all;
///
/// let m = Matrix::from_vec(3, 2, vec![
///     1.0, 0.0,
///     0.0, 1.0,
///     2.0, 0.0,
/// ]).unwrap();
///
/// let scores = similarity_to_all(&m, 0).unwrap();
/// assert_eq!(scores.len(), 3);
/// assert!((scores[2] - 1.0).abs() < 1e-12); // same direction
/// assert!(scores[1].abs() < 1e-12);         // orthogonal
/// ```
pub fn similarity_to_all(matrix: &Matrix<f64>, row_idx: usize) -> Result<Vec<f64>> {
    if row_idx >= matrix.n_rows() {
        return Err(LectorError::index_out_of_bounds(row_idx, matrix.n_rows()));
    }

    let query = matrix.row(row_idx);
    (0..matrix.n_rows())
        .map(|i| cosine_similarity(&query, &matrix.row(i)))
        .collect()
}

#[cfg(test)]
#[path = "similarity_tests.rs"]
mod tests;
