//! Learner × subject score matrix.

use crate::data::ExamResultRecord;
use crate::primitives::Matrix;
use std::collections::HashMap;
use tracing::debug;

/// Dense learner × subject matrix of observed scores.
///
/// Rows and columns are ordered by first appearance in the input. A pair
/// that appears more than once keeps its last score; a pair that never
/// appears is `0.0`.
///
/// # Examples
///
/// ```
/// use subject_recommender::data::ExamResultRecord;
/// use subject_recommender::recommend::ScoreMatrix;
///
/// let records = vec![
///     ExamResultRecord::new("A", "Math", 50.0),
///     ExamResultRecord::new("B", "Math", 95.0),
///     ExamResultRecord::new("A", "Science", 80.0),
/// ];
/// let matrix = ScoreMatrix::from_records(&records).expect("non-empty");
/// assert_eq!(matrix.learners(), &["A", "B"]);
/// assert_eq!(matrix.subjects(), &["Math", "Science"]);
/// assert_eq!(matrix.score("B", "Science"), Some(0.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix {
    learners: Vec<String>,
    subjects: Vec<String>,
    scores: Matrix<f64>,
}

/// Interns labels in first-appearance order.
#[derive(Default)]
struct Axis {
    labels: Vec<String>,
    index: HashMap<String, usize>,
}

impl Axis {
    fn intern(&mut self, label: &str) -> usize {
        if let Some(&idx) = self.index.get(label) {
            return idx;
        }
        let idx = self.labels.len();
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), idx);
        idx
    }
}

impl ScoreMatrix {
    /// Pivots records into a matrix.
    ///
    /// Records without a learner or subject, or whose score is not a finite
    /// value in `[0, 100]`, are skipped as malformed. Returns `None` when no
    /// record survives.
    #[must_use]
    pub fn from_records(records: &[ExamResultRecord]) -> Option<Self> {
        let mut learners = Axis::default();
        let mut subjects = Axis::default();
        let mut cells: Vec<(usize, usize, f64)> = Vec::with_capacity(records.len());

        let mut skipped = 0usize;

        for record in records {
            let valid_score = record.score.is_finite() && (0.0..=100.0).contains(&record.score);
            if record.learner_id.is_empty() || record.subject.is_empty() || !valid_score {
                skipped += 1;
                continue;
            }
            let row = learners.intern(&record.learner_id);
            let col = subjects.intern(&record.subject);
            cells.push((row, col, record.score));
        }

        if skipped > 0 {
            debug!(skipped, "skipped malformed records while building score matrix");
        }
        if cells.is_empty() {
            return None;
        }

        let mut scores = Matrix::zeros(learners.labels.len(), subjects.labels.len());
        // input order, so the last duplicate wins
        for (row, col, score) in cells {
            scores.set(row, col, score);
        }

        Some(Self {
            learners: learners.labels,
            subjects: subjects.labels,
            scores,
        })
    }

    /// Row labels.
    #[must_use]
    pub fn learners(&self) -> &[String] {
        &self.learners
    }

    /// Column labels.
    #[must_use]
    pub fn subjects(&self) -> &[String] {
        &self.subjects
    }

    /// Row index of a learner.
    #[must_use]
    pub fn learner_index(&self, learner_id: &str) -> Option<usize> {
        self.learners.iter().position(|l| l == learner_id)
    }

    /// Column index of a subject.
    #[must_use]
    pub fn subject_index(&self, subject: &str) -> Option<usize> {
        self.subjects.iter().position(|s| s == subject)
    }

    /// Score of one pair (`0.0` if the pair was never observed).
    #[must_use]
    pub fn score(&self, learner_id: &str, subject: &str) -> Option<f64> {
        Some(
            self.scores
                .get(self.learner_index(learner_id)?, self.subject_index(subject)?),
        )
    }

    /// A learner's scores in column order.
    #[must_use]
    pub fn row(&self, learner_id: &str) -> Option<&[f64]> {
        self.learner_index(learner_id)
            .map(|idx| self.scores.row_slice(idx))
    }

    /// The underlying numeric matrix.
    #[must_use]
    pub fn matrix(&self) -> &Matrix<f64> {
        &self.scores
    }

    /// `(learner, subject)` pairs with a non-zero score, row-major.
    #[must_use]
    pub fn nonzero_pairs(&self) -> Vec<(&str, &str)> {
        let mut pairs = Vec::new();
        for (i, learner) in self.learners.iter().enumerate() {
            for (j, subject) in self.subjects.iter().enumerate() {
                if self.scores.get(i, j) != 0.0 {
                    pairs.push((learner.as_str(), subject.as_str()));
                }
            }
        }
        pairs
    }
}

#[cfg(test)]
#[path = "score_matrix_tests.rs"]
mod tests;
