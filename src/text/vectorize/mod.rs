//! Text vectorization: term counts and TF-IDF weighting.

mod tfidf_vectorizer;

pub use tfidf_vectorizer::{CountVectorizer, TfidfVectorizer};
