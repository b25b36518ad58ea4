//! Merging collaborative and content-based results into one ranking.

use super::Recommendation;
use crate::error::{RecommendError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How the two sources enter the combined score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HybridMode {
    /// Both sources contribute their weighted ranking scores.
    #[default]
    Blended,
    /// Only collaborative entries contribute; the content list and weight
    /// are accepted but ignored. Kept for callers that depend on the older
    /// ranking.
    CollaborativeOnly,
}

/// Source weights of a hybrid ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HybridWeights {
    /// Multiplies collaborative improvement potential.
    pub collaborative: f64,
    /// Multiplies content recommendation score.
    pub content_based: f64,
}

impl Default for HybridWeights {
    fn default() -> Self {
        Self {
            collaborative: 0.5,
            content_based: 0.5,
        }
    }
}

impl HybridWeights {
    /// Creates validated weights.
    ///
    /// # Errors
    ///
    /// Fails if either weight is negative or not finite.
    pub fn new(collaborative: f64, content_based: f64) -> Result<Self> {
        let weights = Self {
            collaborative,
            content_based,
        };
        weights.validate()?;
        Ok(weights)
    }

    /// Checks both weights are finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHyperparameter` naming the offending weight.
    pub fn validate(&self) -> Result<()> {
        for (param, value) in [
            ("collaborative_weight", self.collaborative),
            ("content_weight", self.content_based),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(RecommendError::invalid_param(param, value, "finite and >= 0"));
            }
        }
        Ok(())
    }
}

/// A hybrid ranking and the weights that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HybridRecommendations {
    /// Combined results, best first.
    pub recommendations: Vec<Recommendation>,
    /// Weights used.
    pub weights: HybridWeights,
}

/// Accumulates weighted source scores per subject.
///
/// ```
/// use subject_recommender::recommend::{HybridCombiner, HybridWeights, Recommendation};
///
/// let collaborative = vec![Recommendation::collaborative("Math", 90.0, 60.0)];
/// let content = vec![Recommendation::content_based("Physics", 8.0)];
///
/// let combiner = HybridCombiner::new(HybridWeights::default());
/// let hybrid = combiner.combine(&collaborative, &content, 5);
/// assert_eq!(hybrid.recommendations[0].subject, "Math");
/// assert_eq!(hybrid.recommendations[0].hybrid_score, Some(15.0));
/// assert_eq!(hybrid.recommendations[1].hybrid_score, Some(4.0));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HybridCombiner {
    weights: HybridWeights,
    mode: HybridMode,
}

impl HybridCombiner {
    /// Blends both sources with `weights`.
    #[must_use]
    pub fn new(weights: HybridWeights) -> Self {
        Self {
            weights,
            mode: HybridMode::Blended,
        }
    }

    /// Sets the combination mode.
    #[must_use]
    pub fn with_mode(mut self, mode: HybridMode) -> Self {
        self.mode = mode;
        self
    }

    /// Weights in use.
    #[must_use]
    pub fn weights(&self) -> HybridWeights {
        self.weights
    }

    /// Combination mode.
    #[must_use]
    pub fn mode(&self) -> HybridMode {
        self.mode
    }

    /// Top `n` subjects by combined score; ties keep first-appearance order
    /// (collaborative entries first).
    #[must_use]
    pub fn combine(
        &self,
        collaborative: &[Recommendation],
        content: &[Recommendation],
        n: usize,
    ) -> HybridRecommendations {
        let mut order: Vec<&str> = Vec::new();
        let mut totals: HashMap<&str, f64> = HashMap::new();
        let blended = self.mode == HybridMode::Blended;
        let weighted = collaborative
            .iter()
            .map(|rec| (rec, self.weights.collaborative))
            .chain(
                content
                    .iter()
                    .filter(|_| blended)
                    .map(|rec| (rec, self.weights.content_based)),
            );

        for (rec, weight) in weighted {
            let subject = rec.subject.as_str();
            let total = totals.entry(subject).or_insert_with(|| {
                order.push(subject);
                0.0
            });
            *total += weight * rec.ranking_score();
        }

        let mut recommendations: Vec<Recommendation> = order
            .iter()
            .map(|subject| Recommendation::hybrid(*subject, totals[subject]))
            .collect();
        recommendations.sort_by(|a, b| b.ranking_score().total_cmp(&a.ranking_score()));
        recommendations.truncate(n);

        HybridRecommendations {
            recommendations,
            weights: self.weights,
        }
    }
}

#[cfg(test)]
#[path = "hybrid_tests.rs"]
mod tests;
