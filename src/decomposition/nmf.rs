//! Non-negative matrix factorization (Lee & Seung multiplicative updates).

use crate::error::{RecommendError, Result};
use crate::primitives::Matrix;
use crate::traits::Transformer;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

const EPSILON: f64 = 1e-10;

/// Non-negative matrix factorization `X ≈ W·H` with `W, H ≥ 0`.
///
/// Minimizes the Frobenius reconstruction error with multiplicative updates:
///
/// ```text
/// H ← H ⊙ (WᵀX) ⊘ (WᵀWH)
/// W ← W ⊙ (XHᵀ) ⊘ (WHHᵀ)
/// ```
///
/// Both factors start from seeded uniform noise scaled by `sqrt(mean(X) / k)`,
/// so a fixed `random_state` makes fitting reproducible.
///
/// # Examples
///
/// ```
/// use subject_recommender::prelude::*;
///
/// let scores = Matrix::from_vec(3, 3, vec![
///     90.0, 85.0, 10.0,
///     88.0, 80.0, 15.0,
///     12.0, 20.0, 95.0,
/// ]).expect("valid shape");
///
/// let mut nmf = Nmf::new(2);
/// nmf.fit(&scores).expect("scores are non-negative");
/// assert_eq!(nmf.components().expect("fitted").shape(), (2, 3));
/// let baseline = scores.frobenius_distance(&Matrix::zeros(3, 3)).expect("same shape");
/// assert!(nmf.reconstruction_err() < baseline);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Nmf {
    /// Rank of the factorization.
    n_components: usize,
    /// Maximum update rounds.
    max_iter: usize,
    /// Stop once an update round improves the error by less than
    /// `tol × initial error`.
    tol: f64,
    /// Seed for factor initialization.
    random_state: Option<u64>,
    /// `H`, components × features.
    components: Option<Matrix<f64>>,
    /// `W`, samples × components, for the fitted matrix.
    weights: Option<Matrix<f64>>,
    reconstruction_err: f64,
    n_iter: usize,
}

/// Fit outcome without the factors themselves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NmfSummary {
    /// Rank of the factorization.
    pub n_components: usize,
    /// `‖X − WH‖_F` after fitting.
    pub reconstruction_err: f64,
    /// Update rounds performed.
    pub n_iter: usize,
}

impl Default for Nmf {
    fn default() -> Self {
        Self::new(10)
    }
}

impl Nmf {
    /// Creates an unfitted factorization of rank `n_components`, seeded
    /// with 42.
    #[must_use]
    pub fn new(n_components: usize) -> Self {
        Self {
            n_components,
            max_iter: 200,
            tol: 1e-4,
            random_state: Some(42),
            components: None,
            weights: None,
            reconstruction_err: 0.0,
            n_iter: 0,
        }
    }

    /// Sets the maximum number of update rounds.
    #[must_use]
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Sets the relative convergence tolerance.
    #[must_use]
    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    /// Sets the initialization seed.
    #[must_use]
    pub fn with_random_state(mut self, seed: u64) -> Self {
        self.random_state = Some(seed);
        self
    }

    /// Rank of the factorization.
    #[must_use]
    pub fn n_components(&self) -> usize {
        self.n_components
    }

    /// `H` (components × features), once fitted.
    #[must_use]
    pub fn components(&self) -> Option<&Matrix<f64>> {
        self.components.as_ref()
    }

    /// `W` (samples × components) of the fitted matrix.
    #[must_use]
    pub fn weights(&self) -> Option<&Matrix<f64>> {
        self.weights.as_ref()
    }

    /// Frobenius reconstruction error of the fitted matrix.
    #[must_use]
    pub fn reconstruction_err(&self) -> f64 {
        self.reconstruction_err
    }

    /// Update rounds performed by the last fit.
    #[must_use]
    pub fn n_iter(&self) -> usize {
        self.n_iter
    }

    /// Whether `fit` has completed.
    #[must_use]
    pub fn is_fitted(&self) -> bool {
        self.components.is_some()
    }

    /// Summary of the last fit, if any.
    #[must_use]
    pub fn summary(&self) -> Option<NmfSummary> {
        self.is_fitted().then(|| NmfSummary {
            n_components: self.n_components,
            reconstruction_err: self.reconstruction_err,
            n_iter: self.n_iter,
        })
    }

    fn rng(&self) -> StdRng {
        match self.random_state {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    fn validate_input(&self, x: &Matrix<f64>) -> Result<()> {
        if self.n_components == 0 {
            return Err(RecommendError::invalid_param("n_components", 0, ">= 1"));
        }
        if x.n_rows() == 0 || x.n_cols() == 0 {
            return Err(RecommendError::empty_input("matrix to factorize"));
        }
        if !x.is_non_negative() {
            return Err("NMF requires finite, non-negative input".into());
        }
        Ok(())
    }
}

fn random_factor(rng: &mut StdRng, rows: usize, cols: usize, scale: f64) -> Result<Matrix<f64>> {
    let data = (0..rows * cols)
        .map(|_| scale * rng.gen_range(0.0..1.0))
        .collect();
    Matrix::from_vec(rows, cols, data)
}

/// `target ← target ⊙ numerator ⊘ denominator`, elementwise.
fn multiplicative_step(
    target: &mut Matrix<f64>,
    numerator: &Matrix<f64>,
    denominator: &Matrix<f64>,
) {
    for ((t, &n), &d) in target
        .as_mut_slice()
        .iter_mut()
        .zip(numerator.as_slice())
        .zip(denominator.as_slice())
    {
        *t *= n / (d + EPSILON);
    }
}

fn update_h(x: &Matrix<f64>, w: &Matrix<f64>, h: &mut Matrix<f64>) -> Result<()> {
    let wt = w.transpose();
    let numerator = wt.matmul(x)?;
    let denominator = wt.matmul(w)?.matmul(h)?;
    multiplicative_step(h, &numerator, &denominator);
    Ok(())
}

fn update_w(x: &Matrix<f64>, w: &mut Matrix<f64>, h: &Matrix<f64>) -> Result<()> {
    let ht = h.transpose();
    let numerator = x.matmul(&ht)?;
    let denominator = w.matmul(&h.matmul(&ht)?)?;
    multiplicative_step(w, &numerator, &denominator);
    Ok(())
}

impl Transformer for Nmf {
    /// Fits `W` and `H` to `x`.
    ///
    /// # Errors
    ///
    /// Fails when `n_components` is zero, `x` is empty, or `x` holds a
    /// negative or non-finite value.
    fn fit(&mut self, x: &Matrix<f64>) -> Result<()> {
        self.validate_input(x)?;
        let (n_samples, n_features) = x.shape();
        let k = self.n_components;

        let scale = (x.mean() / k as f64).sqrt();
        let mut rng = self.rng();
        let mut w = random_factor(&mut rng, n_samples, k, scale)?;
        let mut h = random_factor(&mut rng, k, n_features, scale)?;

        let initial_err = x.frobenius_distance(&w.matmul(&h)?)?;
        let mut prev_err = initial_err;
        let mut n_iter = 0;

        for iter in 1..=self.max_iter {
            update_h(x, &w, &mut h)?;
            update_w(x, &mut w, &h)?;
            n_iter = iter;

            let err = x.frobenius_distance(&w.matmul(&h)?)?;
            let converged = err == 0.0 || (prev_err - err) < self.tol * initial_err;
            prev_err = err;
            if converged {
                break;
            }
        }

        self.reconstruction_err = prev_err;
        self.n_iter = n_iter;
        self.weights = Some(w);
        self.components = Some(h);
        Ok(())
    }

    /// Projects rows of `x` onto the fitted components, holding `H` fixed.
    ///
    /// # Errors
    ///
    /// Fails before `fit`, on a feature-count mismatch, or on invalid input.
    fn transform(&self, x: &Matrix<f64>) -> Result<Matrix<f64>> {
        let h = self
            .components
            .as_ref()
            .ok_or("NMF not fitted. Call fit() first")?;
        self.validate_input(x)?;
        if x.n_cols() != h.n_cols() {
            return Err(RecommendError::dimension_mismatch(
                "n_features",
                h.n_cols(),
                x.n_cols(),
            ));
        }

        let scale = (x.mean() / self.n_components as f64).sqrt();
        let mut w = random_factor(&mut self.rng(), x.n_rows(), self.n_components, scale)?;
        for _ in 0..self.max_iter {
            update_w(x, &mut w, h)?;
        }
        Ok(w)
    }
}

#[cfg(test)]
#[path = "nmf_tests.rs"]
mod tests;
