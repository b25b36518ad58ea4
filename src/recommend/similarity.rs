//! Cosine similarity tables.
//!
//! A zero vector is similar to nothing, itself included: its cosine with any
//! vector is `0.0`. Every other row has `1.0` on the diagonal.

use super::ScoreMatrix;
use crate::error::{RecommendError, Result};
use crate::primitives::{dot, l2_norm, Matrix};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Cosine similarity of two vectors (`0.0` when either has zero norm).
///
/// ```
/// use subject_recommender::recommend::cosine_similarity;
///
/// assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 3.0]), 0.0);
/// assert!((cosine_similarity(&[2.0, 4.0], &[2.0, 4.0]) - 1.0).abs() < 1e-12);
/// assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
/// ```
#[must_use]
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let norm_a = l2_norm(a);
    let norm_b = l2_norm(b);
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot(a, b) / (norm_a * norm_b)).min(1.0)
}

/// Row-by-row cosine similarity of `m`, as an `n_rows × n_rows` matrix.
#[must_use]
pub fn pairwise_cosine(m: &Matrix<f64>) -> Matrix<f64> {
    let n = m.n_rows();
    let norms: Vec<f64> = (0..n).map(|i| l2_norm(m.row_slice(i))).collect();

    let similarity_row = |i: usize| -> Vec<f64> {
        (0..n)
            .map(|j| {
                if norms[i] == 0.0 || norms[j] == 0.0 {
                    0.0
                } else if i == j {
                    1.0
                } else {
                    (dot(m.row_slice(i), m.row_slice(j)) / (norms[i] * norms[j])).min(1.0)
                }
            })
            .collect()
    };

    #[cfg(feature = "parallel")]
    let rows: Vec<Vec<f64>> = (0..n).into_par_iter().map(similarity_row).collect();

    #[cfg(not(feature = "parallel"))]
    let rows: Vec<Vec<f64>> = (0..n).map(similarity_row).collect();

    let mut out = Matrix::zeros(n, n);
    for (i, row) in rows.into_iter().enumerate() {
        out.as_mut_slice()[i * n..(i + 1) * n].copy_from_slice(&row);
    }
    out
}

/// Square, symmetric, labelled similarity table.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    labels: Vec<String>,
    values: Matrix<f64>,
}

impl SimilarityMatrix {
    /// Learner × learner similarity over score-matrix rows.
    #[must_use]
    pub fn learners(scores: &ScoreMatrix) -> Self {
        Self {
            labels: scores.learners().to_vec(),
            values: pairwise_cosine(scores.matrix()),
        }
    }

    /// Subject × subject similarity over score-matrix columns.
    #[must_use]
    pub fn subjects(scores: &ScoreMatrix) -> Self {
        Self {
            labels: scores.subjects().to_vec(),
            values: pairwise_cosine(&scores.matrix().transpose()),
        }
    }

    /// Row-wise cosine of `features`, labelled by `labels`.
    ///
    /// # Errors
    ///
    /// Fails if the label count differs from the row count.
    pub fn from_features(labels: Vec<String>, features: &Matrix<f64>) -> Result<Self> {
        Self::from_parts(labels, pairwise_cosine(features))
    }

    /// Wraps a precomputed table.
    ///
    /// # Errors
    ///
    /// Fails unless `values` is square with one row per label.
    pub fn from_parts(labels: Vec<String>, values: Matrix<f64>) -> Result<Self> {
        let (rows, cols) = values.shape();
        if rows != cols {
            return Err(RecommendError::dimension_mismatch("square columns", rows, cols));
        }
        if labels.len() != rows {
            return Err(RecommendError::dimension_mismatch("labels", rows, labels.len()));
        }
        Ok(Self { labels, values })
    }

    /// Axis labels.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Position of a label.
    #[must_use]
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    /// Similarity of two labels.
    #[must_use]
    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        Some(self.values.get(self.index_of(a)?, self.index_of(b)?))
    }

    /// One label's similarities, in label order.
    #[must_use]
    pub fn row(&self, label: &str) -> Option<&[f64]> {
        self.index_of(label).map(|idx| self.values.row_slice(idx))
    }

    /// Number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The underlying numeric table.
    #[must_use]
    pub fn values(&self) -> &Matrix<f64> {
        &self.values
    }
}

#[cfg(test)]
#[path = "similarity_tests.rs"]
mod tests;
