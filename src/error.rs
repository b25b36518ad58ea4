//! Error types for recommendation operations.
//!
//! "Nothing to recommend" is never an error: empty inputs, unknown ids and
//! degenerate similarities produce empty results. Errors are reserved for
//! invalid configuration, malformed numeric inputs handed to the primitives,
//! and failures of the collaborators that supply records.

use thiserror::Error;

/// Main error type for the crate.
///
/// # Examples
///
/// ```
/// use subject_recommender::error::RecommendError;
///
/// let err = RecommendError::DimensionMismatch {
///     expected: "3x3".to_string(),
///     actual: "3x2".to_string(),
/// };
/// assert!(err.to_string().contains("dimension mismatch"));
/// ```
#[derive(Debug, Error)]
pub enum RecommendError {
    /// Matrix/vector dimensions don't match for the operation.
    #[error("Matrix dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions description
        expected: String,
        /// Actual dimensions found
        actual: String,
    },

    /// Invalid hyperparameter or configuration value.
    #[error("Invalid hyperparameter: {param} = {value}, expected {constraint}")]
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// A record/item collaborator (document store) failed.
    ///
    /// Distinct from an empty result: callers must not treat it as
    /// "no recommendations exist".
    #[error("Upstream collaborator '{collaborator}' failed: {message}")]
    Upstream {
        /// Collaborator name
        collaborator: String,
        /// Failure description
        message: String,
    },

    /// Configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error (config file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with string message.
    #[error("{0}")]
    Other(String),
}

impl From<&str> for RecommendError {
    fn from(msg: &str) -> Self {
        RecommendError::Other(msg.to_string())
    }
}

impl From<String> for RecommendError {
    fn from(msg: String) -> Self {
        RecommendError::Other(msg)
    }
}

impl RecommendError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create an invalid hyperparameter error
    #[must_use]
    pub fn invalid_param(param: &str, value: impl ToString, constraint: &str) -> Self {
        Self::InvalidHyperparameter {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }

    /// Create an empty input error
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::Other(format!("empty input: {context}"))
    }

    /// Whether this error came from an external collaborator.
    #[must_use]
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream { .. })
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, RecommendError>;
