//! Text featurization for content-based similarity.
//!
//! - [`tokenize`]: word tokenization
//! - [`stopwords`]: English stop-word filtering
//! - [`vectorize`]: term counts and TF-IDF weighting

pub mod stopwords;
pub mod tokenize;
pub mod vectorize;

use crate::error::Result;

/// Splits text into tokens.
///
/// # Examples
///
/// ```
/// use subject_recommender::text::{Tokenizer, tokenize::WordTokenizer};
///
/// let tokens = WordTokenizer::new().tokenize("Graph algorithms, part 2").expect("tokenize");
/// assert_eq!(tokens, vec!["Graph", "algorithms", "part"]);
/// ```
pub trait Tokenizer: Send + Sync {
    /// Tokenizes `text`.
    ///
    /// # Errors
    ///
    /// Implementations may reject input they cannot process.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;
}
