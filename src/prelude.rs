//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use subject_recommender::prelude::*;
//! ```

pub use crate::analytics::{LearnerInsights, PerformanceTrends, Trend};
pub use crate::config::EngineConfig;
pub use crate::data::{ExamResultRecord, ItemRecord, UserProfile};
pub use crate::decomposition::Nmf;
pub use crate::engine::{CollaborativeReport, HybridReport, RecommendationEngine};
pub use crate::error::{RecommendError, Result};
pub use crate::primitives::{Matrix, Vector};
pub use crate::recommend::{
    CollaborativeRecommender, ContentRecommender, HybridCombiner, HybridMode, HybridWeights,
    Recommendation, RecommendationSource, ScoreMatrix, SimilarityMatrix,
};
pub use crate::scoring::{Measurement, OptimalityScorer};
pub use crate::source::{InMemorySource, RecordSource, SourceError};
pub use crate::traits::Transformer;
