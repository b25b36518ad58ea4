//! Performance-optimality scoring of a submitted solution.
//!
//! ```text
//! time_score  = min(1, (t_opt / t_sub)^α)
//! space_score = min(1, (m_opt / m_sub)^β)
//! overall     = w_time · time_score + w_space · space_score
//! ```
//!
//! A submission that used zero time (or memory) scores `1.0` on that axis
//! when the optimum is also zero, and `0.0` otherwise.

use crate::error::{RecommendError, Result};
use serde::{Deserialize, Serialize};

/// Resource usage of one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Running time, any consistent unit.
    pub time: f64,
    /// Peak memory, any consistent unit.
    pub memory: f64,
}

impl Measurement {
    /// Creates a measurement.
    #[must_use]
    pub fn new(time: f64, memory: f64) -> Self {
        Self { time, memory }
    }
}

/// Per-axis and combined scores, each in `[0, w]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimalityScore {
    /// Time axis score in `[0, 1]`.
    pub time_score: f64,
    /// Memory axis score in `[0, 1]`.
    pub space_score: f64,
    /// Weighted sum of both axes.
    pub overall: f64,
}

/// Stateless scorer holding the exponents and weights.
///
/// # Examples
///
/// ```
/// use subject_recommender::scoring::{Measurement, OptimalityScorer};
///
/// let scorer = OptimalityScorer::new();
/// let score = scorer
///     .score(Measurement::new(10.0, 64.0), Measurement::new(20.0, 64.0))
///     .expect("valid measurements");
/// assert_eq!(score.time_score, 0.5);
/// assert_eq!(score.space_score, 1.0);
/// assert_eq!(score.overall, 0.75);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimalityScorer {
    alpha: f64,
    beta: f64,
    w_time: f64,
    w_space: f64,
}

impl Default for OptimalityScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl OptimalityScorer {
    /// Linear exponents, equal weights.
    #[must_use]
    pub fn new() -> Self {
        Self {
            alpha: 1.0,
            beta: 1.0,
            w_time: 0.5,
            w_space: 0.5,
        }
    }

    /// Sets the time (`alpha`) and memory (`beta`) exponents.
    #[must_use]
    pub fn with_exponents(mut self, alpha: f64, beta: f64) -> Self {
        self.alpha = alpha;
        self.beta = beta;
        self
    }

    /// Sets the axis weights.
    #[must_use]
    pub fn with_weights(mut self, w_time: f64, w_space: f64) -> Self {
        self.w_time = w_time;
        self.w_space = w_space;
        self
    }

    fn check(param: &str, value: f64) -> Result<()> {
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(RecommendError::invalid_param(param, value, "finite and >= 0"))
        }
    }

    /// Scores `submitted` against `optimal`.
    ///
    /// # Errors
    ///
    /// `InvalidHyperparameter` if any measurement, exponent or weight is
    /// negative or not finite.
    pub fn score(&self, optimal: Measurement, submitted: Measurement) -> Result<OptimalityScore> {
        for (param, value) in [
            ("optimal_time", optimal.time),
            ("optimal_memory", optimal.memory),
            ("submitted_time", submitted.time),
            ("submitted_memory", submitted.memory),
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("w_time", self.w_time),
            ("w_space", self.w_space),
        ] {
            Self::check(param, value)?;
        }

        let time_score = axis_score(optimal.time, submitted.time, self.alpha);
        let space_score = axis_score(optimal.memory, submitted.memory, self.beta);
        Ok(OptimalityScore {
            time_score,
            space_score,
            overall: self.w_time * time_score + self.w_space * space_score,
        })
    }
}

fn axis_score(optimal: f64, submitted: f64, exponent: f64) -> f64 {
    if submitted == 0.0 {
        return if optimal == 0.0 { 1.0 } else { 0.0 };
    }
    (optimal / submitted).powf(exponent).min(1.0)
}

#[cfg(test)]
#[path = "optimality_tests.rs"]
mod tests;
