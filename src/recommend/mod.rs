//! Recommendation algorithms.
//!
//! Everything here is a pure function of its inputs: callers build a
//! [`ScoreMatrix`] and similarity tables per request and pass them down.
//!
//! # Algorithms
//!
//! - **Collaborative**: similarity-weighted neighbor prediction over the
//!   learner × subject score matrix ([`CollaborativeRecommender`])
//! - **Content-based**: TF-IDF cosine similarity between items, seeded by a
//!   learner's highly rated items ([`ContentRecommender`])
//! - **Hybrid**: weighted merge of both rankings ([`HybridCombiner`])
//!
//! # Quick Start
//!
//! ```
//! use subject_recommender::data::ExamResultRecord;
//! use subject_recommender::recommend::{similar_learners, ScoreMatrix, SimilarityMatrix};
//!
//! let records = vec![
//!     ExamResultRecord::new("A", "Math", 50.0),
//!     ExamResultRecord::new("B", "Math", 95.0),
//!     ExamResultRecord::new("C", "Math", 90.0),
//!     ExamResultRecord::new("A", "Science", 80.0),
//! ];
//! let scores = ScoreMatrix::from_records(&records).expect("non-empty");
//! let similarity = SimilarityMatrix::learners(&scores);
//!
//! let neighbors = similar_learners("B", &similarity, 5);
//! assert_eq!(neighbors[0].learner_id, "C");
//! assert_eq!(neighbors[0].similarity_score, 1.0);
//! ```

mod collaborative;
mod content_based;
mod hybrid;
mod neighbors;
mod score_matrix;
mod similarity;
mod types;

pub use collaborative::CollaborativeRecommender;
pub use content_based::{
    content_similarity, extract_features, ContentItem, ContentRecommender, DEFAULT_MAX_FEATURES,
};
pub use hybrid::{HybridCombiner, HybridMode, HybridRecommendations, HybridWeights};
pub use neighbors::{rank_neighbors, related_subjects, similar_learners};
pub use score_matrix::ScoreMatrix;
pub use similarity::{cosine_similarity, pairwise_cosine, SimilarityMatrix};
pub use types::{Recommendation, RecommendationSource, RelatedSubject, SimilarLearner};
