//! Request-level façade over the recommenders.
//!
//! Each call fetches a fresh snapshot from the [`RecordSource`], builds its
//! own matrices, and returns. The engine keeps no state between calls, so
//! one instance can serve concurrent requests from many threads.

use crate::analytics::{self, LearnerInsights, PerformanceTrends};
use crate::config::EngineConfig;
use crate::data::{parse_results, ExamResultRecord, ItemRecord, UserProfile};
use crate::decomposition::{Nmf, NmfSummary};
use crate::error::{RecommendError, Result};
use crate::recommend::{
    content_similarity, extract_features, related_subjects, similar_learners,
    CollaborativeRecommender, ContentRecommender, HybridCombiner, HybridMode, HybridWeights,
    Recommendation, RelatedSubject, ScoreMatrix, SimilarLearner, SimilarityMatrix,
};
use crate::source::{RecordSource, SourceError};
use crate::traits::Transformer;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Collaborative recommendations for one learner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollaborativeReport {
    /// Learner the recommendations are for.
    pub learner_id: String,
    /// Weak-but-promising subjects, best first.
    pub recommendations: Vec<Recommendation>,
    /// Valid result records the matrix was built from.
    pub total_records_analyzed: usize,
    /// Fit summary of the score-matrix factorization, when enabled.
    ///
    /// Informational only: no recommendation reads the factors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factorization: Option<NmfSummary>,
}

/// Hybrid recommendations for one learner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HybridReport {
    /// Learner the recommendations are for.
    pub learner_id: String,
    /// Combined ranking, best first.
    pub recommendations: Vec<Recommendation>,
    /// Weights used.
    pub weights: HybridWeights,
    /// Combination mode used.
    pub mode: HybridMode,
}

/// Stateless recommendation service.
///
/// # Examples
///
/// ```
/// use subject_recommender::prelude::*;
///
/// let source = InMemorySource::new().with_records(&[
///     ExamResultRecord::new("A", "Math", 50.0),
///     ExamResultRecord::new("B", "Math", 95.0),
///     ExamResultRecord::new("C", "Math", 90.0),
///     ExamResultRecord::new("A", "Science", 80.0),
/// ]);
/// let engine = RecommendationEngine::new(source);
///
/// let neighbors = engine.similar_learners("B").expect("source is available");
/// assert_eq!(neighbors[0].learner_id, "C");
/// ```
#[derive(Debug, Clone)]
pub struct RecommendationEngine<S> {
    source: S,
    config: EngineConfig,
}

impl<S: RecordSource> RecommendationEngine<S> {
    /// Creates an engine with the default configuration.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            config: EngineConfig::default(),
        }
    }

    /// Creates an engine with a validated configuration.
    ///
    /// # Errors
    ///
    /// Fails if `config` does not validate.
    pub fn with_config(source: S, config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { source, config })
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The record collaborator.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    fn upstream(&self, err: SourceError) -> RecommendError {
        warn!(collaborator = self.source.name(), error = %err, "record source failed");
        RecommendError::Upstream {
            collaborator: self.source.name().to_string(),
            message: err.to_string(),
        }
    }

    fn load_results(&self) -> Result<Vec<ExamResultRecord>> {
        let docs = self
            .source
            .exam_results(self.config.record_limit)
            .map_err(|e| self.upstream(e))?;
        let records = parse_results(&docs);
        debug!(documents = docs.len(), records = records.len(), "loaded exam results");
        Ok(records)
    }

    fn load_items(&self) -> Result<Vec<ItemRecord>> {
        let docs = self.source.content_items().map_err(|e| self.upstream(e))?;
        Ok(docs.iter().map(ItemRecord::from_document).collect())
    }

    fn collaborative_recommender(&self) -> CollaborativeRecommender {
        let settings = &self.config.collaborative;
        CollaborativeRecommender::new()
            .with_neighbors(settings.neighbors)
            .with_weak_threshold(settings.weak_threshold)
            .with_strong_threshold(settings.strong_threshold)
    }

    fn factorize(&self, scores: &ScoreMatrix) -> Option<NmfSummary> {
        let settings = &self.config.factorization;
        if !settings.enabled {
            return None;
        }
        let mut nmf = Nmf::new(settings.n_components)
            .with_max_iter(settings.max_iter)
            .with_tol(settings.tol)
            .with_random_state(settings.random_state);
        match nmf.fit(scores.matrix()) {
            Ok(()) => nmf.summary(),
            Err(err) => {
                warn!(error = %err, "score matrix factorization failed");
                None
            }
        }
    }

    fn collaborative_from(
        &self,
        learner_id: &str,
        records: &[ExamResultRecord],
    ) -> (Vec<Recommendation>, Option<NmfSummary>) {
        let Some(scores) = ScoreMatrix::from_records(records) else {
            return (Vec::new(), None);
        };
        let similarity = SimilarityMatrix::learners(&scores);
        let factorization = self.factorize(&scores);
        let recommendations = self.collaborative_recommender().recommend(
            learner_id,
            &scores,
            &similarity,
            self.config.collaborative.max_results,
        );
        (recommendations, factorization)
    }

    /// Subjects where `learner_id` is weak and similar learners are strong.
    ///
    /// # Errors
    ///
    /// `Upstream` if the record source fails.
    pub fn collaborative(&self, learner_id: &str) -> Result<CollaborativeReport> {
        let records = self.load_results()?;
        let (recommendations, factorization) = self.collaborative_from(learner_id, &records);
        info!(
            learner_id,
            records = records.len(),
            recommendations = recommendations.len(),
            "collaborative recommendations computed"
        );
        Ok(CollaborativeReport {
            learner_id: learner_id.to_string(),
            recommendations,
            total_records_analyzed: records.len(),
            factorization,
        })
    }

    /// Learners whose score profiles are closest to `learner_id`'s.
    ///
    /// # Errors
    ///
    /// `Upstream` if the record source fails.
    pub fn similar_learners(&self, learner_id: &str) -> Result<Vec<SimilarLearner>> {
        let records = self.load_results()?;
        let Some(scores) = ScoreMatrix::from_records(&records) else {
            return Ok(Vec::new());
        };
        let similarity = SimilarityMatrix::learners(&scores);
        Ok(similar_learners(
            learner_id,
            &similarity,
            self.config.collaborative.max_results,
        ))
    }

    /// Subjects whose score columns are closest to `subject`'s.
    ///
    /// # Errors
    ///
    /// `Upstream` if the record source fails.
    pub fn related_subjects(&self, subject: &str) -> Result<Vec<RelatedSubject>> {
        let records = self.load_results()?;
        let Some(scores) = ScoreMatrix::from_records(&records) else {
            return Ok(Vec::new());
        };
        let similarity = SimilarityMatrix::subjects(&scores);
        Ok(related_subjects(
            subject,
            &similarity,
            self.config.collaborative.max_results,
        ))
    }

    fn content_from(&self, items: &[ItemRecord], profile: &UserProfile) -> Vec<Recommendation> {
        let settings = &self.config.content;
        let Some(features) = extract_features(items) else {
            return Vec::new();
        };
        let Some(similarity) = content_similarity(&features, settings.max_features) else {
            return Vec::new();
        };
        ContentRecommender::new()
            .with_seed_threshold(settings.seed_threshold)
            .recommend_for_profile(profile, &features, &similarity, settings.max_results)
    }

    /// Items similar to the ones `profile` rates highly.
    ///
    /// # Errors
    ///
    /// `Upstream` if the record source fails.
    pub fn content_based(&self, profile: &UserProfile) -> Result<Vec<Recommendation>> {
        let items = self.load_items()?;
        let recommendations = self.content_from(&items, profile);
        info!(
            items = items.len(),
            rated = profile.len(),
            recommendations = recommendations.len(),
            "content-based recommendations computed"
        );
        Ok(recommendations)
    }

    /// Collaborative and content-based results merged with `weights`
    /// (the configured weights when `None`).
    ///
    /// # Errors
    ///
    /// `InvalidHyperparameter` for bad weights, `Upstream` if the record
    /// source fails.
    pub fn hybrid(
        &self,
        learner_id: &str,
        profile: &UserProfile,
        weights: Option<HybridWeights>,
    ) -> Result<HybridReport> {
        let weights = weights.unwrap_or(self.config.hybrid.weights);
        weights.validate()?;

        let records = self.load_results()?;
        let items = self.load_items()?;
        let (collaborative, _) = self.collaborative_from(learner_id, &records);
        let content = self.content_from(&items, profile);

        let combiner = HybridCombiner::new(weights).with_mode(self.config.hybrid.mode);
        let combined = combiner.combine(&collaborative, &content, self.config.hybrid.max_results);
        info!(
            learner_id,
            collaborative = collaborative.len(),
            content = content.len(),
            combined = combined.recommendations.len(),
            "hybrid recommendations computed"
        );

        Ok(HybridReport {
            learner_id: learner_id.to_string(),
            recommendations: combined.recommendations,
            weights: combined.weights,
            mode: combiner.mode(),
        })
    }

    /// Weak subjects, time pressure, trend and peer standing of a learner.
    ///
    /// # Errors
    ///
    /// `Upstream` if the record source fails.
    pub fn insights(&self, learner_id: &str) -> Result<LearnerInsights> {
        let records = self.load_results()?;
        Ok(analytics::learner_insights(
            learner_id,
            &records,
            &self.config.analytics,
        ))
    }

    /// Per-subject monthly averages over all learners.
    ///
    /// # Errors
    ///
    /// `Upstream` if the record source fails.
    pub fn performance_trends(&self) -> Result<PerformanceTrends> {
        let records = self.load_results()?;
        Ok(analytics::performance_trends(&records))
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
