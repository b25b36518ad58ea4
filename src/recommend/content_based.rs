//! Content-based recommendation from item text.
//!
//! Items are featurized into text, vectorized with TF-IDF (English stop
//! words removed, vocabulary capped), and compared by cosine similarity.
//! A learner's highly rated items then vote for similar unrated items.

use super::{Recommendation, SimilarityMatrix};
use crate::data::{ItemRecord, UserProfile};
use crate::text::vectorize::TfidfVectorizer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Default vocabulary cap for item featurization.
pub const DEFAULT_MAX_FEATURES: usize = 100;

/// An item ready for vectorization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Item id, when the source supplied one.
    pub id: Option<String>,
    /// Trimmed subject the item belongs to.
    pub subject: String,
    /// Subject, title and description joined by spaces.
    pub feature_text: String,
}

impl ContentItem {
    /// Label of the item in a content similarity table: its id, or
    /// `position` when it has none.
    #[must_use]
    pub fn label(&self, position: usize) -> String {
        self.id.clone().unwrap_or_else(|| position.to_string())
    }
}

/// Builds feature text for every item that has a subject.
///
/// Returns `None` when no item survives.
///
/// ```
/// use subject_recommender::data::ItemRecord;
/// use subject_recommender::recommend::extract_features;
///
/// let items = vec![
///     ItemRecord::new("e1", "Physics").with_title("Kinematics"),
///     ItemRecord { title: Some("No subject".into()), ..ItemRecord::default() },
/// ];
/// let features = extract_features(&items).expect("one item has a subject");
/// assert_eq!(features.len(), 1);
/// assert_eq!(features[0].feature_text, "Physics Kinematics");
/// ```
#[must_use]
pub fn extract_features(items: &[ItemRecord]) -> Option<Vec<ContentItem>> {
    let featurized: Vec<ContentItem> = items
        .iter()
        .filter_map(|item| {
            let subject = item.subject.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
            let feature_text = std::iter::once(subject)
                .chain(item.title.as_deref().map(str::trim))
                .chain(item.description.as_deref().map(str::trim))
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(" ");
            Some(ContentItem {
                id: item.id.clone(),
                subject: subject.to_string(),
                feature_text,
            })
        })
        .collect();

    if featurized.is_empty() {
        debug!(items = items.len(), "no item has a subject to featurize");
        return None;
    }
    Some(featurized)
}

/// Pairwise TF-IDF cosine similarity between items.
///
/// Items are labelled by id, or by their position in `items` when they have
/// none. Vectorizer failures (empty input, a vocabulary of stop words only)
/// yield `None`.
#[must_use]
pub fn content_similarity(items: &[ContentItem], max_features: usize) -> Option<SimilarityMatrix> {
    let labels: Vec<String> = items
        .iter()
        .enumerate()
        .map(|(idx, item)| item.label(idx))
        .collect();
    let texts: Vec<&str> = items.iter().map(|item| item.feature_text.as_str()).collect();

    let mut vectorizer = TfidfVectorizer::new()
        .with_stop_words_english()
        .with_max_features(max_features);
    let features = match vectorizer.fit_transform(&texts) {
        Ok(features) => features,
        Err(err) => {
            debug!(error = %err, items = items.len(), "content vectorization failed");
            return None;
        }
    };

    SimilarityMatrix::from_features(labels, &features).ok()
}

/// Ranks unrated items by similarity to the learner's highly rated ones.
///
/// Every seed (an item rated at least `seed_threshold`) adds
/// `similarity(seed, item) × rating(seed)` to each item outside the profile.
/// Contributions from several seeds add up.
///
/// # Examples
///
/// ```
/// use subject_recommender::data::{ItemRecord, UserProfile};
/// use subject_recommender::recommend::{content_similarity, extract_features, ContentRecommender};
///
/// let items = vec![
///     ItemRecord::new("algebra", "Math").with_description("linear algebra matrices"),
///     ItemRecord::new("calculus", "Math").with_description("derivatives integrals"),
///     ItemRecord::new("poetry", "Literature").with_description("sonnets meter"),
/// ];
/// let features = extract_features(&items).expect("items have subjects");
/// let similarity = content_similarity(&features, 100).expect("non-degenerate vocabulary");
///
/// let profile: UserProfile = [("algebra", 5.0)].into_iter().collect();
/// let recs = ContentRecommender::new().recommend_for_profile(&profile, &features, &similarity, 5);
/// assert_eq!(recs[0].item_id.as_deref(), Some("calculus"));
/// assert_eq!(recs[0].subject, "Math");
/// assert!(recs.iter().all(|r| r.item_id.as_deref() != Some("algebra")));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContentRecommender {
    seed_threshold: f64,
}

impl Default for ContentRecommender {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentRecommender {
    /// Items rated 4 or higher act as seeds.
    #[must_use]
    pub fn new() -> Self {
        Self { seed_threshold: 4.0 }
    }

    /// Sets the minimum rating for an item to act as a seed.
    #[must_use]
    pub fn with_seed_threshold(mut self, threshold: f64) -> Self {
        self.seed_threshold = threshold;
        self
    }

    /// Minimum seed rating.
    #[must_use]
    pub fn seed_threshold(&self) -> f64 {
        self.seed_threshold
    }

    /// Up to `n` items outside `profile`, by descending accumulated score
    /// (ties in similarity-table order).
    ///
    /// Each result carries the item's subject from `items` and the item's
    /// table label as `item_id`. A label with no matching item keeps the
    /// label as its subject.
    #[must_use]
    pub fn recommend_for_profile(
        &self,
        profile: &UserProfile,
        items: &[ContentItem],
        similarity: &SimilarityMatrix,
        n: usize,
    ) -> Vec<Recommendation> {
        let labels = similarity.labels();
        let mut scores: Vec<Option<f64>> = vec![None; labels.len()];
        let mut seeds_used = 0usize;

        for (seed, rating) in profile.seeds(self.seed_threshold) {
            let Some(row) = similarity.row(seed) else {
                continue;
            };
            seeds_used += 1;
            for ((label, score), &sim) in labels.iter().zip(scores.iter_mut()).zip(row) {
                if profile.contains(label) {
                    continue;
                }
                *score.get_or_insert(0.0) += sim * rating;
            }
        }
        debug!(seeds = seeds_used, items = labels.len(), "content scores accumulated");

        let subjects: HashMap<String, &str> = items
            .iter()
            .enumerate()
            .map(|(idx, item)| (item.label(idx), item.subject.as_str()))
            .collect();

        let mut recommendations: Vec<Recommendation> = labels
            .iter()
            .zip(scores)
            .filter_map(|(label, score)| {
                let subject = subjects.get(label).copied().unwrap_or(label.as_str());
                Some(Recommendation::content_based(subject, score?).with_item_id(label.as_str()))
            })
            .collect();
        recommendations.sort_by(|a, b| b.ranking_score().total_cmp(&a.ranking_score()));
        recommendations.truncate(n);
        recommendations
    }
}

#[cfg(test)]
#[path = "content_based_tests.rs"]
mod tests;
