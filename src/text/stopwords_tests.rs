use super::*;

#[test]
fn test_english_filter_basic() {
    let filter = StopWordsFilter::english();
    let filtered = filter.filter(&["the", "binary", "search", "of", "trees"]);
    assert_eq!(filtered, vec!["binary", "search", "trees"]);
}

#[test]
fn test_case_insensitive_but_case_preserving() {
    let filter = StopWordsFilter::english();
    let filtered = filter.filter(&["The", "Operating", "SYSTEMS", "AND", "kernels"]);
    assert_eq!(filtered, vec!["Operating", "SYSTEMS", "kernels"]);
}

#[test]
fn test_exam_boilerplate_is_filtered() {
    let filter = StopWordsFilter::english();
    let filtered = filter.filter(&["Intro", "Exam", "dynamic", "programming"]);
    assert_eq!(filtered, vec!["dynamic", "programming"]);
}

#[test]
fn test_custom_stop_words() {
    let filter = StopWordsFilter::new(vec!["Foo", "bar"]);
    assert_eq!(filter.len(), 2);
    assert!(filter.is_stop_word("FOO"));
    assert_eq!(filter.filter(&["foo", "data", "bar"]), vec!["data"]);
}

#[test]
fn test_empty_filter() {
    let filter = StopWordsFilter::new(Vec::<String>::new());
    assert!(filter.is_empty());
    assert_eq!(filter.filter(&["the"]), vec!["the"]);
}

#[test]
fn test_english_list_has_no_duplicates() {
    let filter = StopWordsFilter::english();
    assert_eq!(filter.len(), ENGLISH_STOP_WORDS.len());
}
