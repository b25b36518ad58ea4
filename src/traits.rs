//! Core traits for fitted matrix transformers.

use crate::error::Result;
use crate::primitives::Matrix;

/// A model that learns from a matrix and then maps matrices into its space.
///
/// Implemented by [`crate::decomposition::Nmf`], which maps a score matrix
/// onto its latent factors.
///
/// ```
/// use subject_recommender::prelude::*;
///
/// let scores = Matrix::from_vec(3, 2, vec![90.0, 40.0, 85.0, 45.0, 20.0, 95.0])
///     .expect("valid shape");
/// let mut nmf = Nmf::new(2);
/// let weights = nmf.fit_transform(&scores).expect("non-negative input");
/// assert_eq!(weights.shape(), (3, 2));
/// ```
pub trait Transformer {
    /// Fits the transformer to data.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails.
    fn fit(&mut self, x: &Matrix<f64>) -> Result<()>;

    /// Transforms data using fitted parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if the transformer is not fitted or `x` has the
    /// wrong shape.
    fn transform(&self, x: &Matrix<f64>) -> Result<Matrix<f64>>;

    /// Fits and transforms in one step.
    ///
    /// # Errors
    ///
    /// Returns an error if fitting fails.
    fn fit_transform(&mut self, x: &Matrix<f64>) -> Result<Matrix<f64>> {
        self.fit(x)?;
        self.transform(x)
    }
}
