//! Word tokenization.
//!
//! Tokens are maximal runs of alphanumeric characters (underscore included);
//! everything else separates tokens. Tokens shorter than the minimum length
//! (2 by default) are dropped, which discards stray initials and single
//! digits the way word-level TF-IDF pipelines conventionally do.

use crate::error::Result;
use crate::text::Tokenizer;

/// Alphanumeric word tokenizer with a minimum token length.
///
/// # Examples
///
/// ```
/// use subject_recommender::text::{Tokenizer, tokenize::WordTokenizer};
///
/// let tokenizer = WordTokenizer::new();
/// let tokens = tokenizer.tokenize("data_structures: trees & graphs (v2)").expect("tokenize");
/// assert_eq!(tokens, vec!["data_structures", "trees", "graphs", "v2"]);
/// ```
#[derive(Debug, Clone)]
pub struct WordTokenizer {
    min_len: usize,
}

impl WordTokenizer {
    /// Creates a tokenizer that keeps tokens of two or more characters.
    #[must_use]
    pub fn new() -> Self {
        Self { min_len: 2 }
    }

    /// Sets the minimum token length in characters (at least 1).
    #[must_use]
    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len.max(1);
        self
    }

    /// Minimum token length in characters.
    #[must_use]
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    fn is_word_char(c: char) -> bool {
        c.is_alphanumeric() || c == '_'
    }
}

impl Default for WordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for WordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text
            .split(|c: char| !Self::is_word_char(c))
            .filter(|token| token.chars().count() >= self.min_len)
            .map(str::to_string)
            .collect())
    }
}

#[cfg(test)]
mod tests;
