//! Nearest neighbors in a similarity table.

use super::{RelatedSubject, SimilarLearner, SimilarityMatrix};

/// The `n` labels most similar to `label`, excluding itself.
///
/// Returned as `(index, similarity)` in descending similarity; equal
/// similarities keep label order. Unknown `label` yields an empty list.
#[must_use]
pub fn rank_neighbors(similarity: &SimilarityMatrix, label: &str, n: usize) -> Vec<(usize, f64)> {
    let Some(target) = similarity.index_of(label) else {
        return Vec::new();
    };
    let Some(row) = similarity.row(label) else {
        return Vec::new();
    };

    let mut ranked: Vec<(usize, f64)> = row
        .iter()
        .copied()
        .enumerate()
        .filter(|&(idx, _)| idx != target)
        .collect();
    // stable: ties stay in label order
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(n);
    ranked
}

/// The `n` learners most similar to `learner_id`.
///
/// ```
/// use subject_recommender::data::ExamResultRecord;
/// use subject_recommender::recommend::{similar_learners, ScoreMatrix, SimilarityMatrix};
///
/// let scores = ScoreMatrix::from_records(&[
///     ExamResultRecord::new("A", "Math", 50.0),
///     ExamResultRecord::new("B", "Math", 95.0),
///     ExamResultRecord::new("A", "Science", 80.0),
/// ]).expect("non-empty");
/// let similarity = SimilarityMatrix::learners(&scores);
///
/// let neighbors = similar_learners("A", &similarity, 5);
/// assert_eq!(neighbors.len(), 1);
/// assert_eq!(neighbors[0].learner_id, "B");
/// ```
#[must_use]
pub fn similar_learners(
    learner_id: &str,
    similarity: &SimilarityMatrix,
    n: usize,
) -> Vec<SimilarLearner> {
    rank_neighbors(similarity, learner_id, n)
        .into_iter()
        .map(|(idx, similarity_score)| SimilarLearner {
            learner_id: similarity.labels()[idx].clone(),
            similarity_score,
        })
        .collect()
}

/// The `n` subjects whose score columns are most similar to `subject`'s.
#[must_use]
pub fn related_subjects(
    subject: &str,
    similarity: &SimilarityMatrix,
    n: usize,
) -> Vec<RelatedSubject> {
    rank_neighbors(similarity, subject, n)
        .into_iter()
        .map(|(idx, similarity_score)| RelatedSubject {
            subject: similarity.labels()[idx].clone(),
            similarity_score,
        })
        .collect()
}

#[cfg(test)]
#[path = "neighbors_tests.rs"]
mod tests;
