use super::*;
use crate::data::ExamResultRecord;
use crate::primitives::Matrix;
use crate::recommend::RecommendationSource;

/// L plus five neighbors N1..N5 with fixed similarities to L.
fn weighted_fixture() -> (ScoreMatrix, SimilarityMatrix) {
    let sims = [0.9, 0.8, 0.7, 0.6, 0.5];
    let neighbor_math = [90.0, 85.0, 88.0, 82.0, 80.0];

    let mut records = vec![ExamResultRecord::new("L", "Math", 60.0)];
    for (i, score) in neighbor_math.iter().enumerate() {
        records.push(ExamResultRecord::new(format!("N{}", i + 1), "Math", *score));
    }
    let scores = ScoreMatrix::from_records(&records).expect("non-empty");

    let n = 6;
    let mut values = Matrix::zeros(n, n);
    for i in 0..n {
        values.set(i, i, 1.0);
    }
    for (j, sim) in sims.iter().enumerate() {
        values.set(0, j + 1, *sim);
        values.set(j + 1, 0, *sim);
    }
    let similarity =
        SimilarityMatrix::from_parts(scores.learners().to_vec(), values).expect("square");
    (scores, similarity)
}

#[test]
fn test_weighted_prediction_matches_formula() {
    let (scores, similarity) = weighted_fixture();
    let predictions = CollaborativeRecommender::new()
        .predict_scores("L", &scores, &similarity)
        .expect("non-zero weights");

    let expected = (0.9 * 90.0 + 0.8 * 85.0 + 0.7 * 88.0 + 0.6 * 82.0 + 0.5 * 80.0)
        / (0.9 + 0.8 + 0.7 + 0.6 + 0.5);
    assert!((predictions[0] - expected).abs() < 1e-9);
    assert!((predictions[0] - 85.657_142_857).abs() < 1e-6);
}

#[test]
fn test_weak_learner_gets_recommendation() {
    let (scores, similarity) = weighted_fixture();
    let recs = CollaborativeRecommender::new().recommend("L", &scores, &similarity, 5);

    assert_eq!(recs.len(), 1);
    let rec = &recs[0];
    assert_eq!(rec.subject, "Math");
    assert_eq!(rec.source, RecommendationSource::Collaborative);
    assert_eq!(rec.current_score, Some(60.0));
    let predicted = rec.predicted_score.expect("set");
    let potential = rec.improvement_potential.expect("set");
    assert!((potential - (predicted - 60.0)).abs() < 1e-12);
}

#[test]
fn test_zero_similarity_sum_is_empty() {
    let scores = ScoreMatrix::from_records(&[
        ExamResultRecord::new("A", "Math", 10.0),
        ExamResultRecord::new("B", "Art", 95.0),
        ExamResultRecord::new("C", "Art", 90.0),
    ])
    .expect("non-empty");
    // A is orthogonal to everyone
    let similarity = SimilarityMatrix::learners(&scores);
    let recommender = CollaborativeRecommender::new();
    assert!(recommender.predict_scores("A", &scores, &similarity).is_none());
    assert!(recommender.recommend("A", &scores, &similarity, 5).is_empty());
}

#[test]
fn test_unknown_learner_is_empty() {
    let (scores, similarity) = weighted_fixture();
    assert!(CollaborativeRecommender::new()
        .recommend("nobody", &scores, &similarity, 5)
        .is_empty());
}

#[test]
fn test_single_learner_is_empty() {
    let scores =
        ScoreMatrix::from_records(&[ExamResultRecord::new("A", "Math", 10.0)]).expect("non-empty");
    let similarity = SimilarityMatrix::learners(&scores);
    assert!(CollaborativeRecommender::new()
        .recommend("A", &scores, &similarity, 5)
        .is_empty());
}

#[test]
fn test_dual_gate() {
    // A is strong in Art already; Music neighbors are not strong enough.
    let scores = ScoreMatrix::from_records(&[
        ExamResultRecord::new("A", "Math", 40.0),
        ExamResultRecord::new("A", "Art", 90.0),
        ExamResultRecord::new("A", "Music", 30.0),
        ExamResultRecord::new("B", "Math", 95.0),
        ExamResultRecord::new("B", "Art", 95.0),
        ExamResultRecord::new("B", "Music", 60.0),
    ])
    .expect("non-empty");
    let similarity = SimilarityMatrix::learners(&scores);
    let recs = CollaborativeRecommender::new().recommend("A", &scores, &similarity, 5);
    let subjects: Vec<&str> = recs.iter().map(|r| r.subject.as_str()).collect();
    assert_eq!(subjects, vec!["Math"]);
}

#[test]
fn test_never_attempted_subject_counts_as_zero() {
    let scores = ScoreMatrix::from_records(&[
        ExamResultRecord::new("A", "Math", 60.0),
        ExamResultRecord::new("B", "Math", 60.0),
        ExamResultRecord::new("B", "Physics", 90.0),
    ])
    .expect("non-empty");
    let similarity = SimilarityMatrix::learners(&scores);
    let recs = CollaborativeRecommender::new().recommend("A", &scores, &similarity, 5);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].subject, "Physics");
    assert_eq!(recs[0].current_score, Some(0.0));
}

#[test]
fn test_sorted_by_improvement_with_column_ties() {
    let scores = ScoreMatrix::from_records(&[
        ExamResultRecord::new("A", "Math", 50.0),
        ExamResultRecord::new("A", "Art", 60.0),
        ExamResultRecord::new("A", "Chem", 50.0),
        ExamResultRecord::new("B", "Math", 90.0),
        ExamResultRecord::new("B", "Art", 90.0),
        ExamResultRecord::new("B", "Chem", 90.0),
    ])
    .expect("non-empty");
    let similarity = SimilarityMatrix::learners(&scores);
    let recs = CollaborativeRecommender::new().recommend("A", &scores, &similarity, 5);
    let subjects: Vec<&str> = recs.iter().map(|r| r.subject.as_str()).collect();
    assert_eq!(subjects, vec!["Math", "Chem", "Art"]);

    let truncated = CollaborativeRecommender::new().recommend("A", &scores, &similarity, 1);
    assert_eq!(truncated.len(), 1);
    assert_eq!(truncated[0].subject, "Math");
}

#[test]
fn test_builder_thresholds() {
    let recommender = CollaborativeRecommender::new()
        .with_neighbors(3)
        .with_weak_threshold(50.0)
        .with_strong_threshold(90.0);
    assert_eq!(recommender.n_neighbors(), 3);

    let (scores, similarity) = weighted_fixture();
    // 60 is no longer weak
    assert!(recommender.recommend("L", &scores, &similarity, 5).is_empty());
}
