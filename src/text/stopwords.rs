//! English stop words.
//!
//! Matching is case-insensitive. The list covers articles, pronouns,
//! prepositions, conjunctions, auxiliaries and filler adverbs, plus a few
//! words that show up in exam titles without saying anything about the
//! subject ("introduction", "test", "exam").

use std::collections::HashSet;

/// Stop-word set with case-insensitive lookup.
///
/// # Examples
///
/// ```
/// use subject_recommender::text::stopwords::StopWordsFilter;
///
/// let filter = StopWordsFilter::english();
/// assert!(filter.is_stop_word("The"));
/// assert!(!filter.is_stop_word("recursion"));
///
/// let kept = filter.filter(&["an", "Intro", "to", "recursion"]);
/// assert_eq!(kept, vec!["recursion"]);
/// ```
#[derive(Debug, Clone)]
pub struct StopWordsFilter {
    words: HashSet<String>,
}

impl StopWordsFilter {
    /// Creates a filter from custom words (stored lowercase).
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// The built-in English list.
    #[must_use]
    pub fn english() -> Self {
        Self::new(ENGLISH_STOP_WORDS)
    }

    /// Whether `word` is a stop word.
    #[must_use]
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Keeps the tokens that are not stop words, preserving their case.
    #[must_use]
    pub fn filter<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .iter()
            .map(|t| t.as_ref())
            .filter(|t| !self.is_stop_word(t))
            .map(str::to_string)
            .collect()
    }

    /// Number of stop words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Built-in English stop words.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    // articles, pronouns
    "a", "an", "the", "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you",
    "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she", "her",
    "hers", "herself", "it", "its", "itself", "they", "them", "their", "theirs",
    "themselves", "what", "which", "who", "whom", "whose", "this", "that", "these", "those",
    // prepositions, conjunctions
    "about", "above", "after", "against", "along", "among", "around", "at", "before",
    "below", "between", "by", "down", "during", "for", "from", "in", "into", "of", "off",
    "on", "onto", "out", "over", "through", "to", "toward", "under", "until", "up", "upon",
    "with", "within", "without", "and", "as", "because", "but", "if", "nor", "or", "since",
    "so", "than", "though", "unless", "while", "whether",
    // auxiliaries
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "doing", "would", "should", "could", "can", "may", "might", "must",
    "will", "shall",
    // adverbs, quantifiers
    "all", "any", "both", "each", "few", "more", "most", "much", "no", "not", "only", "other",
    "own", "same", "some", "such", "very", "too", "then", "there", "here", "just", "now",
    "also", "again", "when", "where", "why", "how",
    // exam boilerplate
    "introduction", "intro", "basic", "basics", "test", "exam", "quiz", "part",
];

#[cfg(test)]
#[path = "stopwords_tests.rs"]
mod tests;
