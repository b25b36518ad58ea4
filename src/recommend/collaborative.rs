//! Collaborative filtering over the learner × subject score matrix.

use super::neighbors::rank_neighbors;
use super::{Recommendation, ScoreMatrix, SimilarityMatrix};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Weighted-neighbor recommender.
///
/// For a learner, the `n_neighbors` most similar other learners predict each
/// subject score as `Σ(sim·score) / Σ sim`. A subject is recommended when the
/// learner is weak there (`current < weak_threshold`) while the neighbors
/// are strong (`prediction > strong_threshold`). Results are ranked by
/// improvement potential, `prediction − current`.
///
/// # Examples
///
/// ```
/// use subject_recommender::data::ExamResultRecord;
/// use subject_recommender::recommend::{CollaborativeRecommender, ScoreMatrix, SimilarityMatrix};
///
/// let scores = ScoreMatrix::from_records(&[
///     ExamResultRecord::new("A", "Math", 50.0),
///     ExamResultRecord::new("A", "Art", 90.0),
///     ExamResultRecord::new("B", "Math", 95.0),
///     ExamResultRecord::new("B", "Art", 85.0),
/// ]).expect("non-empty");
/// let similarity = SimilarityMatrix::learners(&scores);
///
/// let recs = CollaborativeRecommender::new().recommend("A", &scores, &similarity, 5);
/// assert_eq!(recs.len(), 1);
/// assert_eq!(recs[0].subject, "Math");
/// assert!((recs[0].ranking_score() - 45.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollaborativeRecommender {
    n_neighbors: usize,
    weak_threshold: f64,
    strong_threshold: f64,
}

impl Default for CollaborativeRecommender {
    fn default() -> Self {
        Self::new()
    }
}

impl CollaborativeRecommender {
    /// Five neighbors, weak below 70, strong above 80.
    #[must_use]
    pub fn new() -> Self {
        Self {
            n_neighbors: 5,
            weak_threshold: 70.0,
            strong_threshold: 80.0,
        }
    }

    /// Sets how many neighbors vote.
    #[must_use]
    pub fn with_neighbors(mut self, n_neighbors: usize) -> Self {
        self.n_neighbors = n_neighbors;
        self
    }

    /// Sets the score below which the learner counts as weak.
    #[must_use]
    pub fn with_weak_threshold(mut self, threshold: f64) -> Self {
        self.weak_threshold = threshold;
        self
    }

    /// Sets the prediction above which neighbors count as strong.
    #[must_use]
    pub fn with_strong_threshold(mut self, threshold: f64) -> Self {
        self.strong_threshold = threshold;
        self
    }

    /// Number of voting neighbors.
    #[must_use]
    pub fn n_neighbors(&self) -> usize {
        self.n_neighbors
    }

    /// Similarity-weighted neighbor prediction for every subject, in column
    /// order.
    ///
    /// `None` when the learner is unknown or the selected neighbors'
    /// similarities sum to zero.
    #[must_use]
    pub fn predict_scores(
        &self,
        learner_id: &str,
        scores: &ScoreMatrix,
        similarity: &SimilarityMatrix,
    ) -> Option<Vec<f64>> {
        scores.learner_index(learner_id)?;

        let neighbors: Vec<(f64, &[f64])> =
            rank_neighbors(similarity, learner_id, self.n_neighbors)
                .into_iter()
                .filter_map(|(idx, sim)| Some((sim, scores.row(&similarity.labels()[idx])?)))
                .collect();

        let weight_sum: f64 = neighbors.iter().map(|(sim, _)| sim).sum();
        if weight_sum == 0.0 {
            debug!(learner_id, neighbors = neighbors.len(), "neighbor similarities sum to zero");
            return None;
        }

        let predictions = (0..scores.subjects().len())
            .map(|col| {
                let weighted: f64 = neighbors.iter().map(|(sim, row)| sim * row[col]).sum();
                weighted / weight_sum
            })
            .collect();
        Some(predictions)
    }

    /// Up to `n` subjects where the learner is weak and similar learners are
    /// strong, by descending improvement potential (ties in column order).
    #[must_use]
    pub fn recommend(
        &self,
        learner_id: &str,
        scores: &ScoreMatrix,
        similarity: &SimilarityMatrix,
        n: usize,
    ) -> Vec<Recommendation> {
        let Some(current) = scores.row(learner_id) else {
            debug!(learner_id, "learner not in score matrix");
            return Vec::new();
        };
        let Some(predicted) = self.predict_scores(learner_id, scores, similarity) else {
            return Vec::new();
        };

        let mut recommendations: Vec<Recommendation> = scores
            .subjects()
            .iter()
            .zip(current.iter().zip(&predicted))
            .filter(|&(_, (&cur, &pred))| {
                cur < self.weak_threshold && pred > self.strong_threshold
            })
            .map(|(subject, (&cur, &pred))| {
                Recommendation::collaborative(subject.as_str(), pred, cur)
            })
            .collect();

        recommendations.sort_by(|a, b| b.ranking_score().total_cmp(&a.ranking_score()));
        recommendations.truncate(n);
        recommendations
    }
}

#[cfg(test)]
#[path = "collaborative_tests.rs"]
mod tests;
