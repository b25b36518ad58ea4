//! Output shapes shared by every recommender.

use serde::{Deserialize, Serialize};

/// Which strategy produced a [`Recommendation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationSource {
    /// Weighted-neighbor prediction over the score matrix.
    Collaborative,
    /// Similarity to highly rated items.
    ContentBased,
    /// Weighted merge of the two.
    Hybrid,
}

/// One recommended subject (or item).
///
/// Only the score fields relevant to the producing strategy are set; the
/// rest are omitted when serialized.
///
/// ```
/// use subject_recommender::recommend::Recommendation;
///
/// let rec = Recommendation::collaborative("Math", 85.0, 60.0);
/// let json = serde_json::to_value(&rec).expect("serializable");
/// assert_eq!(json["type"], "collaborative");
/// assert_eq!(json["improvement_potential"], 25.0);
/// assert!(json.get("hybrid_score").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Subject name.
    pub subject: String,
    /// Recommended item, for content-based results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
    /// Similarity-weighted neighbor score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predicted_score: Option<f64>,
    /// The learner's own score (0.0 when never attempted).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_score: Option<f64>,
    /// `predicted_score - current_score`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improvement_potential: Option<f64>,
    /// Accumulated seed similarity × rating.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation_score: Option<f64>,
    /// Weighted combination of the source scores.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hybrid_score: Option<f64>,
    /// Producing strategy.
    #[serde(rename = "type")]
    pub source: RecommendationSource,
}

impl Recommendation {
    fn empty(subject: impl Into<String>, source: RecommendationSource) -> Self {
        Self {
            subject: subject.into(),
            item_id: None,
            predicted_score: None,
            current_score: None,
            improvement_potential: None,
            recommendation_score: None,
            hybrid_score: None,
            source,
        }
    }

    /// A collaborative recommendation; the improvement potential is derived.
    #[must_use]
    pub fn collaborative(subject: impl Into<String>, predicted: f64, current: f64) -> Self {
        Self {
            predicted_score: Some(predicted),
            current_score: Some(current),
            improvement_potential: Some(predicted - current),
            ..Self::empty(subject, RecommendationSource::Collaborative)
        }
    }

    /// A content-based recommendation.
    #[must_use]
    pub fn content_based(subject: impl Into<String>, score: f64) -> Self {
        Self {
            recommendation_score: Some(score),
            ..Self::empty(subject, RecommendationSource::ContentBased)
        }
    }

    /// Attaches the recommended item's id.
    #[must_use]
    pub fn with_item_id(mut self, item_id: impl Into<String>) -> Self {
        self.item_id = Some(item_id.into());
        self
    }

    /// A hybrid recommendation.
    #[must_use]
    pub fn hybrid(subject: impl Into<String>, score: f64) -> Self {
        Self {
            hybrid_score: Some(score),
            ..Self::empty(subject, RecommendationSource::Hybrid)
        }
    }

    /// The score this recommendation is ranked by within its source.
    #[must_use]
    pub fn ranking_score(&self) -> f64 {
        let score = match self.source {
            RecommendationSource::Collaborative => self.improvement_potential,
            RecommendationSource::ContentBased => self.recommendation_score,
            RecommendationSource::Hybrid => self.hybrid_score,
        };
        score.unwrap_or(0.0)
    }
}

/// A neighbor in learner-similarity space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarLearner {
    /// Neighbor id.
    pub learner_id: String,
    /// Cosine similarity to the query learner.
    pub similarity_score: f64,
}

/// A neighbor in subject-similarity space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedSubject {
    /// Neighbor subject.
    pub subject: String,
    /// Cosine similarity of the two subjects' score columns.
    pub similarity_score: f64,
}
