//! Engine configuration.
//!
//! Every field has a default, so a TOML file only needs the values it
//! overrides:
//!
//! ```toml
//! record_limit = 500
//!
//! [collaborative]
//! neighbors = 10
//!
//! [hybrid]
//! mode = "collaborative_only"
//! ```

use crate::error::{RecommendError, Result};
use crate::recommend::{HybridMode, HybridWeights, DEFAULT_MAX_FEATURES};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum result documents fetched per request.
    pub record_limit: usize,
    /// Collaborative filtering settings.
    pub collaborative: CollaborativeConfig,
    /// Content-based settings.
    pub content: ContentConfig,
    /// Hybrid combination settings.
    pub hybrid: HybridConfig,
    /// Score-matrix factorization settings.
    pub factorization: FactorizationConfig,
    /// Learner analytics thresholds.
    pub analytics: AnalyticsConfig,
}

/// Collaborative filtering settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollaborativeConfig {
    /// Neighbors that vote on a prediction.
    pub neighbors: usize,
    /// Recommendations returned.
    pub max_results: usize,
    /// A current score below this is weak.
    pub weak_threshold: f64,
    /// A prediction above this is strong.
    pub strong_threshold: f64,
}

impl Default for CollaborativeConfig {
    fn default() -> Self {
        Self {
            neighbors: 5,
            max_results: 5,
            weak_threshold: 70.0,
            strong_threshold: 80.0,
        }
    }
}

/// Content-based settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// TF-IDF vocabulary cap.
    pub max_features: usize,
    /// Minimum rating for a profile item to act as a seed.
    pub seed_threshold: f64,
    /// Recommendations returned.
    pub max_results: usize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            max_features: DEFAULT_MAX_FEATURES,
            seed_threshold: 4.0,
            max_results: 5,
        }
    }
}

/// Hybrid combination settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HybridConfig {
    /// Default source weights.
    pub weights: HybridWeights,
    /// Blended or collaborative-only.
    pub mode: HybridMode,
    /// Recommendations returned.
    pub max_results: usize,
}

impl Default for HybridConfig {
    fn default() -> Self {
        Self {
            weights: HybridWeights::default(),
            mode: HybridMode::default(),
            max_results: 5,
        }
    }
}

/// Score-matrix factorization settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorizationConfig {
    /// Fit NMF alongside collaborative requests.
    pub enabled: bool,
    /// Factorization rank.
    pub n_components: usize,
    /// Maximum update rounds.
    pub max_iter: usize,
    /// Relative convergence tolerance.
    pub tol: f64,
    /// Initialization seed.
    pub random_state: u64,
}

impl Default for FactorizationConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            n_components: 10,
            max_iter: 200,
            tol: 1e-4,
            random_state: 42,
        }
    }
}

/// Learner analytics thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// A subject average below this is weak.
    pub weak_threshold: f64,
    /// `time_taken / duration` above this counts as running out of time.
    pub time_utilization: f64,
    /// How far above the prior mean the latest score must be to count as
    /// improving.
    pub improvement_margin: f64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            weak_threshold: 70.0,
            time_utilization: 0.9,
            improvement_margin: 10.0,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            record_limit: 1000,
            collaborative: CollaborativeConfig::default(),
            content: ContentConfig::default(),
            hybrid: HybridConfig::default(),
            factorization: FactorizationConfig::default(),
            analytics: AnalyticsConfig::default(),
        }
    }
}

fn non_zero(param: &str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(RecommendError::invalid_param(param, value, ">= 1"));
    }
    Ok(())
}

fn finite(param: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(RecommendError::invalid_param(param, value, "finite"));
    }
    Ok(())
}

impl EngineConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// `Config` on malformed TOML, `InvalidHyperparameter` on bad values.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(toml_str).map_err(|e| RecommendError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// `Io` if the file cannot be read, otherwise as
    /// [`EngineConfig::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Sets the per-request record limit.
    #[must_use]
    pub fn with_record_limit(mut self, limit: usize) -> Self {
        self.record_limit = limit;
        self
    }

    /// Sets the number of voting neighbors.
    #[must_use]
    pub fn with_neighbors(mut self, neighbors: usize) -> Self {
        self.collaborative.neighbors = neighbors;
        self
    }

    /// Sets the default hybrid weights.
    #[must_use]
    pub fn with_hybrid_weights(mut self, weights: HybridWeights) -> Self {
        self.hybrid.weights = weights;
        self
    }

    /// Sets the hybrid mode.
    #[must_use]
    pub fn with_hybrid_mode(mut self, mode: HybridMode) -> Self {
        self.hybrid.mode = mode;
        self
    }

    /// Turns factorization on or off.
    #[must_use]
    pub fn with_factorization(mut self, enabled: bool) -> Self {
        self.factorization.enabled = enabled;
        self
    }

    /// Checks every value is usable.
    ///
    /// # Errors
    ///
    /// Returns `InvalidHyperparameter` naming the first bad value.
    pub fn validate(&self) -> Result<()> {
        non_zero("record_limit", self.record_limit)?;

        let collaborative = &self.collaborative;
        non_zero("collaborative.neighbors", collaborative.neighbors)?;
        finite("collaborative.weak_threshold", collaborative.weak_threshold)?;
        finite("collaborative.strong_threshold", collaborative.strong_threshold)?;

        non_zero("content.max_features", self.content.max_features)?;
        finite("content.seed_threshold", self.content.seed_threshold)?;

        self.hybrid.weights.validate()?;

        let factorization = &self.factorization;
        if factorization.enabled {
            non_zero("factorization.n_components", factorization.n_components)?;
            non_zero("factorization.max_iter", factorization.max_iter)?;
            if !(factorization.tol.is_finite() && factorization.tol >= 0.0) {
                return Err(RecommendError::invalid_param(
                    "factorization.tol",
                    factorization.tol,
                    "finite and >= 0",
                ));
            }
        }

        let analytics = &self.analytics;
        finite("analytics.weak_threshold", analytics.weak_threshold)?;
        finite("analytics.improvement_margin", analytics.improvement_margin)?;
        if !(analytics.time_utilization > 0.0 && analytics.time_utilization.is_finite()) {
            return Err(RecommendError::invalid_param(
                "analytics.time_utilization",
                analytics.time_utilization,
                "finite and > 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
