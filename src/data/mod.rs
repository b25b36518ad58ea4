//! Typed input records and boundary validation.
//!
//! Record collaborators hand over loosely shaped JSON documents. Each document
//! is validated into a typed record here; documents missing a required field
//! (or carrying an out-of-range score) are skipped, never fatal.
//!
//! # Examples
//!
//! ```
//! use serde_json::json;
//! use subject_recommender::data::{parse_results, ExamResultRecord};
//!
//! let docs = vec![
//!     json!({"learner_id": "A", "subject": "math", "score": 50.0}),
//!     json!({"student": "B", "exam": {"subject": "math"}, "percentage": 95.0}),
//!     json!({"learner_id": "C", "score": 70.0}), // no subject: skipped
//! ];
//! let records = parse_results(&docs);
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[1], ExamResultRecord::new("B", "math", 95.0));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// One exam outcome for one learner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamResultRecord {
    /// Learner identifier (matrix row label).
    pub learner_id: String,
    /// Subject name (matrix column label).
    pub subject: String,
    /// Percentage score in `[0, 100]`.
    pub score: f64,
    /// When the attempt was recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taken_at: Option<DateTime<Utc>>,
    /// Minutes the learner spent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_taken_minutes: Option<f64>,
    /// Minutes the exam allowed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<f64>,
}

impl ExamResultRecord {
    /// Creates a record with only the required fields.
    #[must_use]
    pub fn new(learner_id: impl Into<String>, subject: impl Into<String>, score: f64) -> Self {
        Self {
            learner_id: learner_id.into(),
            subject: subject.into(),
            score,
            taken_at: None,
            time_taken_minutes: None,
            duration_minutes: None,
        }
    }

    /// Sets the attempt timestamp.
    #[must_use]
    pub fn with_taken_at(mut self, taken_at: DateTime<Utc>) -> Self {
        self.taken_at = Some(taken_at);
        self
    }

    /// Sets time spent and time allowed, in minutes.
    #[must_use]
    pub fn with_timing(mut self, time_taken_minutes: f64, duration_minutes: f64) -> Self {
        self.time_taken_minutes = Some(time_taken_minutes);
        self.duration_minutes = Some(duration_minutes);
        self
    }

    /// Validates a raw result document.
    ///
    /// Accepted shapes: `learner_id` or `student` (string, number, or an
    /// object carrying `_id`/`$oid`); `subject` or `exam.subject`;
    /// `percentage` (preferred) or `score`. Returns `None` when any required
    /// field is missing, the subject is blank, or the score is not a finite
    /// number within `[0, 100]`.
    #[must_use]
    pub fn from_document(doc: &Value) -> Option<Self> {
        let learner_id = doc
            .get("learner_id")
            .or_else(|| doc.get("student"))
            .and_then(id_string)?;

        let subject = doc
            .get("subject")
            .or_else(|| doc.get("exam").and_then(|exam| exam.get("subject")))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())?
            .to_string();

        let score = doc
            .get("percentage")
            .or_else(|| doc.get("score"))
            .and_then(Value::as_f64)
            .filter(|s| s.is_finite() && (0.0..=100.0).contains(s))?;

        let taken_at = doc
            .get("taken_at")
            .or_else(|| doc.get("createdAt"))
            .and_then(Value::as_str)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc));

        let time_taken_minutes = doc
            .get("time_taken_minutes")
            .or_else(|| doc.get("timeTaken"))
            .and_then(Value::as_f64)
            .filter(|t| t.is_finite() && *t >= 0.0);

        let duration_minutes = doc
            .get("duration_minutes")
            .or_else(|| doc.get("exam").and_then(|exam| exam.get("duration")))
            .and_then(Value::as_f64)
            .filter(|d| d.is_finite() && *d > 0.0);

        Some(Self {
            learner_id,
            subject,
            score,
            taken_at,
            time_taken_minutes,
            duration_minutes,
        })
    }
}

/// Validates a batch of result documents, skipping malformed ones.
#[must_use]
pub fn parse_results(docs: &[Value]) -> Vec<ExamResultRecord> {
    let records: Vec<ExamResultRecord> = docs
        .iter()
        .filter_map(ExamResultRecord::from_document)
        .collect();
    let skipped = docs.len() - records.len();
    if skipped > 0 {
        debug!(
            skipped,
            kept = records.len(),
            "skipped malformed exam result documents"
        );
    }
    records
}

/// A describable item (an exam or subject) before featurization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Item identifier, if the collaborator supplied one.
    pub id: Option<String>,
    /// Subject/category; items without one cannot be featurized.
    pub subject: Option<String>,
    /// Optional title.
    pub title: Option<String>,
    /// Optional free-text description.
    pub description: Option<String>,
}

impl ItemRecord {
    /// Creates an item with an id and subject.
    #[must_use]
    pub fn new(id: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            subject: Some(subject.into()),
            ..Self::default()
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Reads an item document. Every field is optional at this stage;
    /// featurization decides what is usable.
    #[must_use]
    pub fn from_document(doc: &Value) -> Self {
        let text = |key: &str| doc.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            id: doc.get("id").or_else(|| doc.get("_id")).and_then(id_string),
            subject: text("subject"),
            title: text("title"),
            description: text("description"),
        }
    }
}

/// Explicit item ratings used as content-based input.
///
/// Backed by a `BTreeMap` so seed iteration order (and therefore float
/// accumulation order) is deterministic.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserProfile {
    ratings: BTreeMap<String, f64>,
}

impl UserProfile {
    /// Creates an empty profile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a rating, replacing any previous one. Non-finite ratings are
    /// ignored.
    pub fn rate(&mut self, item: impl Into<String>, rating: f64) {
        if rating.is_finite() {
            self.ratings.insert(item.into(), rating);
        }
    }

    /// Rating for an item, if rated.
    #[must_use]
    pub fn rating(&self, item: &str) -> Option<f64> {
        self.ratings.get(item).copied()
    }

    /// Whether the item is rated at all.
    #[must_use]
    pub fn contains(&self, item: &str) -> bool {
        self.ratings.contains_key(item)
    }

    /// Items rated at or above `threshold`, in item order.
    pub fn seeds(&self, threshold: f64) -> impl Iterator<Item = (&str, f64)> {
        self.ratings
            .iter()
            .filter(move |(_, rating)| **rating >= threshold)
            .map(|(item, &r)| (item.as_str(), r))
    }

    /// Number of rated items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    /// Whether no item is rated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for UserProfile {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut profile = Self::new();
        for (item, rating) in iter {
            profile.rate(item, rating);
        }
        profile
    }
}

fn id_string(value: &Value) -> Option<String> {
    let id = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Object(map) => return map.get("_id").or_else(|| map.get("$oid")).and_then(id_string),
        _ => return None,
    };
    (!id.is_empty()).then_some(id)
}

#[cfg(test)]
mod tests;
