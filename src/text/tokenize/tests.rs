use super::*;

#[test]
fn test_splits_on_punctuation_and_whitespace() {
    let tokens = WordTokenizer::new()
        .tokenize("Intro to DSA:\tarrays,\nlinked-lists!")
        .expect("tokenize should succeed");
    assert_eq!(tokens, vec!["Intro", "to", "DSA", "arrays", "linked", "lists"]);
}

#[test]
fn test_drops_short_tokens() {
    let tokens = WordTokenizer::new()
        .tokenize("a b cd 1 23")
        .expect("tokenize should succeed");
    assert_eq!(tokens, vec!["cd", "23"]);
}

#[test]
fn test_min_len_one_keeps_everything() {
    let tokenizer = WordTokenizer::new().with_min_len(0);
    assert_eq!(tokenizer.min_len(), 1);
    let tokens = tokenizer.tokenize("a b").expect("tokenize should succeed");
    assert_eq!(tokens, vec!["a", "b"]);
}

#[test]
fn test_unicode_words() {
    let tokens = WordTokenizer::new()
        .tokenize("théorie des graphes")
        .expect("tokenize should succeed");
    assert_eq!(tokens, vec!["théorie", "des", "graphes"]);
}

#[test]
fn test_empty_input() {
    let tokens = WordTokenizer::new()
        .tokenize("  ,,  ")
        .expect("tokenize should succeed");
    assert!(tokens.is_empty());
}
