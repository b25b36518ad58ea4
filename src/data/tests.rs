use super::*;
use serde_json::json;

#[test]
fn test_result_document_plain_shape() {
    let doc = json!({"learner_id": "A", "subject": "Math", "score": 50.0});
    let record = ExamResultRecord::from_document(&doc).expect("valid document");
    assert_eq!(record, ExamResultRecord::new("A", "Math", 50.0));
}

#[test]
fn test_result_document_populated_shape() {
    let doc = json!({
        "student": {"$oid": "64f0c0ffee"},
        "exam": {"subject": "dsa", "duration": 60.0},
        "score": 17.0,
        "percentage": 85.0,
        "timeTaken": 58.0,
        "createdAt": "2024-03-05T10:00:00Z"
    });
    let record = ExamResultRecord::from_document(&doc).expect("valid document");
    assert_eq!(record.learner_id, "64f0c0ffee");
    assert_eq!(record.subject, "dsa");
    // percentage wins over raw points
    assert!((record.score - 85.0).abs() < 1e-12);
    assert_eq!(record.time_taken_minutes, Some(58.0));
    assert_eq!(record.duration_minutes, Some(60.0));
    assert!(record.taken_at.is_some());
}

#[test]
fn test_result_document_numeric_learner_id() {
    let doc = json!({"learner_id": 42, "subject": "aptitude", "score": 10});
    let record = ExamResultRecord::from_document(&doc).expect("valid document");
    assert_eq!(record.learner_id, "42");
}

#[test]
fn test_malformed_documents_are_rejected() {
    let docs = [
        json!({"subject": "math", "score": 50.0}),
        json!({"learner_id": "A", "score": 50.0}),
        json!({"learner_id": "A", "subject": "   ", "score": 50.0}),
        json!({"learner_id": "A", "subject": "math"}),
        json!({"learner_id": "A", "subject": "math", "score": "high"}),
        json!({"learner_id": "A", "subject": "math", "score": 130.0}),
        json!({"learner_id": "A", "subject": "math", "score": -1.0}),
        json!({"learner_id": "", "subject": "math", "score": 1.0}),
    ];
    for doc in &docs {
        assert!(
            ExamResultRecord::from_document(doc).is_none(),
            "should reject {doc}"
        );
    }
}

#[test]
fn test_bad_optional_fields_do_not_reject() {
    let doc = json!({
        "learner_id": "A",
        "subject": "math",
        "score": 40.0,
        "createdAt": "yesterday",
        "timeTaken": -3.0
    });
    let record = ExamResultRecord::from_document(&doc).expect("optional fields are optional");
    assert!(record.taken_at.is_none());
    assert!(record.time_taken_minutes.is_none());
}

#[test]
fn test_parse_results_skips_and_keeps_order() {
    let docs = vec![
        json!({"learner_id": "A", "subject": "Math", "score": 50.0}),
        json!({"learner_id": "B"}),
        json!({"learner_id": "C", "subject": "Science", "score": 90.0}),
    ];
    let records = parse_results(&docs);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].learner_id, "A");
    assert_eq!(records[1].learner_id, "C");
}

#[test]
fn test_item_document() {
    let doc = json!({"_id": "exam-1", "subject": "dsa", "title": "Graphs", "extra": true});
    let item = ItemRecord::from_document(&doc);
    assert_eq!(item.id.as_deref(), Some("exam-1"));
    assert_eq!(item.subject.as_deref(), Some("dsa"));
    assert_eq!(item.title.as_deref(), Some("Graphs"));
    assert!(item.description.is_none());

    let anonymous = ItemRecord::from_document(&json!({"subject": "aptitude"}));
    assert!(anonymous.id.is_none());
}

#[test]
fn test_user_profile_seeds() {
    let profile: UserProfile = vec![("dsa", 5.0), ("aptitude", 3.0), ("networks", 4.0)]
        .into_iter()
        .collect();
    assert_eq!(profile.len(), 3);
    assert!(profile.contains("aptitude"));
    assert_eq!(profile.rating("dsa"), Some(5.0));

    let seeds: Vec<(&str, f64)> = profile.seeds(4.0).collect();
    assert_eq!(seeds, vec![("dsa", 5.0), ("networks", 4.0)]);
}

#[test]
fn test_user_profile_ignores_non_finite() {
    let mut profile = UserProfile::new();
    profile.rate("dsa", f64::NAN);
    assert!(profile.is_empty());
}

#[test]
fn test_user_profile_deserializes_from_map() {
    let profile: UserProfile =
        serde_json::from_value(json!({"dsa": 5, "os": 2})).expect("map of ratings");
    assert_eq!(profile.rating("os"), Some(2.0));
}
