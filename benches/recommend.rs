use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use subject_recommender::data::{ExamResultRecord, ItemRecord, UserProfile};
use subject_recommender::recommend::{
    content_similarity, extract_features, CollaborativeRecommender, ContentRecommender,
    ScoreMatrix, SimilarityMatrix, DEFAULT_MAX_FEATURES,
};

const SUBJECTS: [&str; 10] = [
    "Math",
    "Physics",
    "Chemistry",
    "Biology",
    "History",
    "Geography",
    "Literature",
    "Art",
    "Music",
    "Economics",
];

fn generate_results(n_learners: usize) -> Vec<ExamResultRecord> {
    (0..n_learners)
        .flat_map(|i| {
            SUBJECTS.iter().enumerate().filter_map(move |(j, subject)| {
                // Leave roughly a third of the table empty.
                if (i + j) % 3 == 0 {
                    return None;
                }
                let score = 40.0 + ((i * 7 + j * 13) % 60) as f64;
                Some(ExamResultRecord::new(format!("learner_{i}"), *subject, score))
            })
        })
        .collect()
}

fn generate_items(n: usize) -> Vec<ItemRecord> {
    let levels = ["intro", "intermediate", "advanced", "revision", "mock"];
    let topics = [
        "equations",
        "forces",
        "reactions",
        "cells",
        "empires",
        "climate",
        "novels",
        "painting",
        "harmony",
        "markets",
    ];
    (0..n)
        .map(|i| {
            let subject = SUBJECTS[i % SUBJECTS.len()];
            let level = levels[(i / 10) % levels.len()];
            let topic = topics[(i / 50) % topics.len()];
            ItemRecord::new(format!("exam_{i}"), subject)
                .with_title(format!("{level} {subject}"))
                .with_description(format!("{level} paper on {topic} for {subject} students"))
        })
        .collect()
}

fn bench_score_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("score_matrix_build");

    for size in [100, 1_000, 5_000].iter() {
        let records = generate_results(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| ScoreMatrix::from_records(black_box(&records)));
        });
    }

    group.finish();
}

fn bench_collaborative(c: &mut Criterion) {
    let mut group = c.benchmark_group("collaborative_recommend");
    group.sample_size(20);

    for size in [100, 500, 1_000].iter() {
        let records = generate_results(*size);
        let Some(scores) = ScoreMatrix::from_records(&records) else {
            continue;
        };
        let similarity = SimilarityMatrix::learners(&scores);
        let recommender = CollaborativeRecommender::new();

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| recommender.recommend(black_box("learner_0"), &scores, &similarity, 5));
        });
    }

    group.finish();
}

fn bench_content_similarity(c: &mut Criterion) {
    let mut group = c.benchmark_group("content_similarity");
    group.sample_size(20);

    for size in [100, 500, 1_000].iter() {
        let Some(features) = extract_features(&generate_items(*size)) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| content_similarity(black_box(&features), DEFAULT_MAX_FEATURES));
        });
    }

    group.finish();
}

fn bench_content_recommend(c: &mut Criterion) {
    let Some(features) = extract_features(&generate_items(1_000)) else {
        return;
    };
    let Some(similarity) = content_similarity(&features, DEFAULT_MAX_FEATURES) else {
        return;
    };
    let profile: UserProfile = [("exam_0", 5.0), ("exam_17", 4.5), ("exam_230", 2.0)]
        .into_iter()
        .collect();
    let recommender = ContentRecommender::new();

    c.bench_function("content_recommend_1k", |b| {
        b.iter(|| {
            recommender.recommend_for_profile(black_box(&profile), &features, &similarity, 10)
        });
    });
}

criterion_group!(
    benches,
    bench_score_matrix,
    bench_collaborative,
    bench_content_similarity,
    bench_content_recommend
);
criterion_main!(benches);
