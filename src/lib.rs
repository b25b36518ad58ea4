//! Subject recommendations for learners, in pure Rust.
//!
//! Given exam results (learner, subject, score) and item descriptions,
//! the crate suggests what a learner should study next:
//!
//! - collaborative filtering over a learner × subject score table,
//! - content-based filtering over TF-IDF features of item text,
//! - a weighted hybrid of the two,
//! - per-learner analytics (weak subjects, pacing, trend, peer standing).
//!
//! # Quick Start
//!
//! ```
//! use subject_recommender::prelude::*;
//!
//! let records = vec![
//!     ExamResultRecord::new("A", "Math", 50.0),
//!     ExamResultRecord::new("B", "Math", 95.0),
//!     ExamResultRecord::new("C", "Math", 90.0),
//!     ExamResultRecord::new("A", "Science", 80.0),
//! ];
//! let engine = RecommendationEngine::new(InMemorySource::new().with_records(&records));
//!
//! let report = engine.collaborative("A").expect("in-memory source never fails");
//! assert_eq!(report.recommendations[0].subject, "Math");
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Vector and Matrix types
//! - [`data`]: Exam-result and item records, user profiles
//! - [`recommend`]: Score tables, cosine similarity, the three recommenders
//! - [`text`]: Tokenization, stop words, TF-IDF vectorization
//! - [`decomposition`]: Non-negative matrix factorization
//! - [`analytics`]: Learner insights and cohort trends
//! - [`scoring`]: Solution optimality scoring
//! - [`engine`]: Request-level service over a [`source::RecordSource`]
//! - [`config`]: TOML-backed engine settings

pub mod analytics;
pub mod config;
pub mod data;
pub mod decomposition;
pub mod engine;
pub mod error;
pub mod prelude;
pub mod primitives;
pub mod recommend;
pub mod scoring;
pub mod source;
pub mod text;
pub mod traits;

pub use engine::RecommendationEngine;
pub use error::{RecommendError, Result};
pub use primitives::{Matrix, Vector};
pub use traits::Transformer;
