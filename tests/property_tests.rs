//! Property-based tests using proptest.
//!
//! These tests verify invariants of the score table, the similarity
//! tables and the recommenders across generated inputs.

use proptest::prelude::*;
use std::collections::{BTreeSet, HashMap};
use subject_recommender::prelude::*;
use subject_recommender::recommend::{content_similarity, extract_features, pairwise_cosine};

const LEARNERS: [&str; 6] = ["L0", "L1", "L2", "L3", "L4", "L5"];
const SUBJECTS: [&str; 5] = ["Math", "Physics", "History", "Art", "Biology"];
const WORDS: [&str; 8] = [
    "algebra", "motion", "empire", "painting", "cells", "energy", "treaty", "colour",
];

fn record_strategy() -> impl Strategy<Value = ExamResultRecord> {
    (0..LEARNERS.len(), 0..SUBJECTS.len(), 0.0f64..=100.0)
        .prop_map(|(l, s, score)| ExamResultRecord::new(LEARNERS[l], SUBJECTS[s], score))
}

fn records_strategy() -> impl Strategy<Value = Vec<ExamResultRecord>> {
    proptest::collection::vec(record_strategy(), 1..40)
}

fn matrix_strategy(rows: usize, cols: usize) -> impl Strategy<Value = Matrix<f64>> {
    proptest::collection::vec(0.0f64..100.0, rows * cols)
        .prop_map(move |data| Matrix::from_vec(rows, cols, data).expect("matching length"))
}

fn items_strategy() -> impl Strategy<Value = Vec<ItemRecord>> {
    proptest::collection::vec(
        (0..SUBJECTS.len(), proptest::collection::vec(0..WORDS.len(), 1..4)),
        2..8,
    )
    .prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (subject, words))| {
                let description: Vec<&str> = words.into_iter().map(|w| WORDS[w]).collect();
                ItemRecord::new(format!("item{i}"), SUBJECTS[subject])
                    .with_description(description.join(" "))
            })
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn pairwise_cosine_is_symmetric_and_bounded(m in matrix_strategy(5, 4)) {
        let sim = pairwise_cosine(&m);
        prop_assert_eq!(sim.shape(), (5, 5));
        for i in 0..5 {
            for j in 0..5 {
                prop_assert!((sim.get(i, j) - sim.get(j, i)).abs() < 1e-12);
                prop_assert!(sim.get(i, j) >= -1e-12 && sim.get(i, j) <= 1.0 + 1e-12);
            }
        }
    }

    #[test]
    fn pairwise_cosine_has_unit_diagonal_for_nonzero_rows(m in matrix_strategy(4, 3)) {
        let sim = pairwise_cosine(&m);
        for i in 0..4 {
            let nonzero = m.row_slice(i).iter().any(|&v| v != 0.0);
            let expected = if nonzero { 1.0 } else { 0.0 };
            prop_assert!((sim.get(i, i) - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn score_matrix_round_trips_nonzero_scores(records in records_strategy()) {
        let scores = ScoreMatrix::from_records(&records).expect("non-empty records");
        for (learner, subject) in scores.nonzero_pairs() {
            let last = records
                .iter()
                .rev()
                .find(|r| r.learner_id == learner && r.subject == subject)
                .map(|r| r.score);
            prop_assert_eq!(scores.score(learner, subject), last);
        }

        let mut last_scores: HashMap<(&str, &str), f64> = HashMap::new();
        for r in &records {
            last_scores.insert((r.learner_id.as_str(), r.subject.as_str()), r.score);
        }
        let expected: BTreeSet<(&str, &str)> = last_scores
            .into_iter()
            .filter(|&(_, score)| score != 0.0)
            .map(|(pair, _)| pair)
            .collect();
        let recovered: BTreeSet<(&str, &str)> = scores.nonzero_pairs().into_iter().collect();
        prop_assert_eq!(recovered, expected);

        prop_assert!(scores.learners().len() <= LEARNERS.len());
        prop_assert!(scores.subjects().len() <= SUBJECTS.len());
    }

    #[test]
    fn score_matrix_build_is_idempotent(records in records_strategy()) {
        let first = ScoreMatrix::from_records(&records).expect("non-empty records");
        let second = ScoreMatrix::from_records(&records).expect("non-empty records");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn collaborative_recommendations_respect_gates(records in records_strategy(), n in 1usize..6) {
        let scores = ScoreMatrix::from_records(&records).expect("non-empty records");
        let similarity = SimilarityMatrix::learners(&scores);
        let recommender = CollaborativeRecommender::new();
        for learner in scores.learners() {
            let recs = recommender.recommend(learner, &scores, &similarity, n);
            prop_assert!(recs.len() <= n);
            for pair in recs.windows(2) {
                prop_assert!(pair[0].ranking_score() >= pair[1].ranking_score());
            }
            for rec in &recs {
                let current = rec.current_score.expect("collaborative field");
                let predicted = rec.predicted_score.expect("collaborative field");
                prop_assert!(current < 70.0);
                prop_assert!(predicted > 80.0);
                prop_assert_eq!(scores.score(learner, &rec.subject), Some(current));
            }
        }
    }

    #[test]
    fn similar_learners_exclude_self(records in records_strategy(), n in 1usize..8) {
        let scores = ScoreMatrix::from_records(&records).expect("non-empty records");
        let similarity = SimilarityMatrix::learners(&scores);
        for learner in scores.learners() {
            let neighbors =
                subject_recommender::recommend::similar_learners(learner, &similarity, n);
            prop_assert!(neighbors.len() <= n);
            prop_assert!(neighbors.iter().all(|s| &s.learner_id != learner));
        }
    }

    #[test]
    fn content_never_recommends_rated_items(
        items in items_strategy(),
        ratings in proptest::collection::vec((0usize..8, 1.0f64..=5.0), 0..5),
    ) {
        let features = extract_features(&items).expect("every item has a subject");
        let Some(similarity) = content_similarity(&features, 100) else {
            return Ok(());
        };
        let profile: UserProfile = ratings
            .into_iter()
            .filter(|(i, _)| *i < items.len())
            .map(|(i, r)| (format!("item{i}"), r))
            .collect();
        let recs = ContentRecommender::new()
            .recommend_for_profile(&profile, &features, &similarity, 10);
        for rec in &recs {
            let item_id = rec.item_id.as_deref().expect("content results name their item");
            prop_assert!(!profile.contains(item_id));
            prop_assert!(SUBJECTS.contains(&rec.subject.as_str()));
        }
        for pair in recs.windows(2) {
            prop_assert!(pair[0].ranking_score() >= pair[1].ranking_score());
        }
    }

    #[test]
    fn hybrid_scores_are_weighted_sums(
        a in 0.0f64..50.0,
        b in 0.0f64..5.0,
        wc in 0.0f64..1.0,
        wt in 0.0f64..1.0,
    ) {
        let collaborative = vec![Recommendation::collaborative("Math", 80.0 + a, 80.0)];
        let content = vec![Recommendation::content_based("Math", b)];
        let weights = HybridWeights::new(wc, wt).expect("non-negative weights");
        let combined = HybridCombiner::new(weights).combine(&collaborative, &content, 5);
        prop_assert_eq!(combined.recommendations.len(), 1);
        let expected = wc * a + wt * b;
        prop_assert!((combined.recommendations[0].ranking_score() - expected).abs() < 1e-9);
    }

    #[test]
    fn optimality_scores_are_bounded(
        t_opt in 0.0f64..100.0,
        t_sub in 0.0f64..100.0,
        m_opt in 0.0f64..100.0,
        m_sub in 0.0f64..100.0,
    ) {
        let score = OptimalityScorer::new()
            .score(Measurement::new(t_opt, m_opt), Measurement::new(t_sub, m_sub))
            .expect("finite non-negative inputs");
        prop_assert!((0.0..=1.0).contains(&score.time_score));
        prop_assert!((0.0..=1.0).contains(&score.space_score));
        prop_assert!((0.0..=1.0).contains(&score.overall));
    }
}
