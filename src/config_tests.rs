use super::*;
use std::io::Write;

#[test]
fn test_defaults_match_documented_constants() {
    let config = EngineConfig::default();
    assert_eq!(config.record_limit, 1000);
    assert_eq!(config.collaborative.neighbors, 5);
    assert_eq!(config.collaborative.weak_threshold, 70.0);
    assert_eq!(config.collaborative.strong_threshold, 80.0);
    assert_eq!(config.content.max_features, 100);
    assert_eq!(config.content.seed_threshold, 4.0);
    assert_eq!(config.hybrid.weights, HybridWeights::default());
    assert_eq!(config.hybrid.mode, HybridMode::Blended);
    assert_eq!(config.hybrid.max_results, 5);
    assert_eq!(config.factorization.n_components, 10);
    assert_eq!(config.factorization.random_state, 42);
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_toml_keeps_defaults() {
    let config = EngineConfig::from_toml_str(
        r#"
        record_limit = 250

        [collaborative]
        neighbors = 8

        [hybrid]
        mode = "collaborative_only"
        "#,
    )
    .expect("valid toml");

    assert_eq!(config.record_limit, 250);
    assert_eq!(config.collaborative.neighbors, 8);
    assert_eq!(config.collaborative.max_results, 5);
    assert_eq!(config.hybrid.mode, HybridMode::CollaborativeOnly);
    assert_eq!(config.hybrid.max_results, 5);
    assert_eq!(config.content, ContentConfig::default());
}

#[test]
fn test_empty_toml_is_default() {
    let config = EngineConfig::from_toml_str("").expect("empty toml");
    assert_eq!(config, EngineConfig::default());
}

#[test]
fn test_malformed_toml_is_config_error() {
    let err = EngineConfig::from_toml_str("record_limit = [").expect_err("malformed");
    assert!(matches!(err, RecommendError::Config(_)));
}

#[test]
fn test_invalid_values_rejected() {
    let err = EngineConfig::from_toml_str("record_limit = 0").expect_err("zero limit");
    assert!(matches!(err, RecommendError::InvalidHyperparameter { .. }));

    let toml = "[hybrid.weights]\ncollaborative = -1.0\ncontent_based = 0.5";
    let err = EngineConfig::from_toml_str(toml).expect_err("negative weight");
    assert!(err.to_string().contains("collaborative_weight"));

    let bad = EngineConfig::default().with_neighbors(0);
    assert!(bad.validate().is_err());
}

#[test]
fn test_disabled_factorization_skips_its_checks() {
    let mut config = EngineConfig::default().with_factorization(false);
    config.factorization.n_components = 0;
    assert!(config.validate().is_ok());
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "[content]\nmax_features = 50\nseed_threshold = 3.5").expect("write");

    let config = EngineConfig::from_file(file.path()).expect("load");
    assert_eq!(config.content.max_features, 50);
    assert_eq!(config.content.seed_threshold, 3.5);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = EngineConfig::from_file(dir.path().join("absent.toml")).expect_err("missing");
    assert!(matches!(err, RecommendError::Io(_)));
}

#[test]
fn test_builders() {
    let weights = HybridWeights::new(0.7, 0.3).expect("valid");
    let config = EngineConfig::default()
        .with_record_limit(10)
        .with_hybrid_weights(weights)
        .with_hybrid_mode(HybridMode::CollaborativeOnly);
    assert_eq!(config.record_limit, 10);
    assert_eq!(config.hybrid.weights, weights);
    assert_eq!(config.hybrid.mode, HybridMode::CollaborativeOnly);
}

#[test]
fn test_toml_round_trip() {
    let config = EngineConfig::default().with_record_limit(42);
    let text = toml::to_string(&config).expect("serialize");
    assert_eq!(EngineConfig::from_toml_str(&text).expect("parse"), config);
}
