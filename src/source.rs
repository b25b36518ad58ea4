//! Record collaborators.
//!
//! The engine never talks to a database itself: a [`RecordSource`] hands it
//! raw JSON documents, which are validated in [`crate::data`].

use crate::data::{ExamResultRecord, ItemRecord};
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// A collaborator failed to supply records.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct SourceError {
    message: String,
}

impl SourceError {
    /// Creates an error with a description.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Failure description.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Supplier of raw result and item documents.
///
/// An `Ok` with an empty list means "no records"; an `Err` means the store
/// could not be queried, and is reported to callers as an upstream failure.
pub trait RecordSource: Send + Sync {
    /// Name used in error reports.
    fn name(&self) -> &str {
        "record-source"
    }

    /// Up to `limit` exam-result documents.
    ///
    /// # Errors
    ///
    /// Fails if the store is unavailable.
    fn exam_results(&self, limit: usize) -> Result<Vec<Value>, SourceError>;

    /// Every item (exam/subject) document.
    ///
    /// # Errors
    ///
    /// Fails if the store is unavailable.
    fn content_items(&self) -> Result<Vec<Value>, SourceError>;
}

impl<S: RecordSource + ?Sized> RecordSource for Arc<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn exam_results(&self, limit: usize) -> Result<Vec<Value>, SourceError> {
        (**self).exam_results(limit)
    }

    fn content_items(&self) -> Result<Vec<Value>, SourceError> {
        (**self).content_items()
    }
}

/// A fixed snapshot of documents held in memory.
///
/// ```
/// use subject_recommender::data::ExamResultRecord;
/// use subject_recommender::source::{InMemorySource, RecordSource};
///
/// let source = InMemorySource::new()
///     .with_records(&[ExamResultRecord::new("A", "Math", 50.0)]);
/// assert_eq!(source.exam_results(10).expect("in memory").len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    results: Vec<Value>,
    items: Vec<Value>,
}

impl InMemorySource {
    /// An empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends raw result documents.
    #[must_use]
    pub fn with_result_documents(mut self, docs: impl IntoIterator<Item = Value>) -> Self {
        self.results.extend(docs);
        self
    }

    /// Appends typed results as documents.
    #[must_use]
    pub fn with_records(mut self, records: &[ExamResultRecord]) -> Self {
        self.results
            .extend(records.iter().filter_map(|r| serde_json::to_value(r).ok()));
        self
    }

    /// Appends raw item documents.
    #[must_use]
    pub fn with_item_documents(mut self, docs: impl IntoIterator<Item = Value>) -> Self {
        self.items.extend(docs);
        self
    }

    /// Appends typed items as documents.
    #[must_use]
    pub fn with_items(mut self, items: &[ItemRecord]) -> Self {
        self.items
            .extend(items.iter().filter_map(|i| serde_json::to_value(i).ok()));
        self
    }
}

impl RecordSource for InMemorySource {
    fn name(&self) -> &str {
        "in-memory"
    }

    fn exam_results(&self, limit: usize) -> Result<Vec<Value>, SourceError> {
        Ok(self.results.iter().take(limit).cloned().collect())
    }

    fn content_items(&self) -> Result<Vec<Value>, SourceError> {
        Ok(self.items.clone())
    }
}
