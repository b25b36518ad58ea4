use crate::error::{RecommendError, Result};
use crate::primitives::Matrix;
use crate::text::stopwords::StopWordsFilter;
use crate::text::tokenize::WordTokenizer;
use crate::text::Tokenizer;
use std::collections::HashMap;

/// Bag-of-words vectorizer producing a term count matrix.
///
/// The vocabulary keeps the `max_features` most frequent terms across the
/// corpus (ties broken alphabetically); column indices are assigned in
/// alphabetical order of the kept terms.
///
/// # Examples
///
/// ```
/// use subject_recommender::text::vectorize::CountVectorizer;
///
/// let docs = vec!["graphs trees", "trees heaps"];
/// let mut vectorizer = CountVectorizer::new();
/// let counts = vectorizer.fit_transform(&docs).expect("fit_transform should succeed");
/// assert_eq!(counts.shape(), (2, 3));
/// ```
pub struct CountVectorizer {
    tokenizer: Box<dyn Tokenizer>,
    vocabulary: HashMap<String, usize>,
    lowercase: bool,
    max_features: Option<usize>,
    stop_words: Option<StopWordsFilter>,
}

impl std::fmt::Debug for CountVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CountVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("lowercase", &self.lowercase)
            .field("max_features", &self.max_features)
            .field("stop_words", &self.stop_words.is_some())
            .finish()
    }
}

impl CountVectorizer {
    /// Creates a vectorizer with the word tokenizer, lowercasing on, no
    /// stop words and an unbounded vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokenizer: Box::new(WordTokenizer::new()),
            vocabulary: HashMap::new(),
            lowercase: true,
            max_features: None,
            stop_words: None,
        }
    }

    /// Replaces the tokenizer.
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Drops English stop words before counting.
    #[must_use]
    pub fn with_stop_words_english(mut self) -> Self {
        self.stop_words = Some(StopWordsFilter::english());
        self
    }

    /// Sets whether tokens are lowercased.
    #[must_use]
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Caps the vocabulary at the `max_features` most frequent terms.
    #[must_use]
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = Some(max_features);
        self
    }

    fn terms(&self, text: &str) -> Result<Vec<String>> {
        Ok(self
            .tokenizer
            .tokenize(text)?
            .into_iter()
            .map(|t| if self.lowercase { t.to_lowercase() } else { t })
            .filter(|t| {
                self.stop_words
                    .as_ref()
                    .map_or(true, |sw| !sw.is_stop_word(t))
            })
            .collect())
    }

    /// Learns the vocabulary.
    ///
    /// # Errors
    ///
    /// Fails on an empty corpus, or when no term survives tokenization and
    /// stop-word filtering (degenerate vocabulary).
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        if documents.is_empty() {
            return Err(RecommendError::empty_input("documents"));
        }

        let mut term_freq: HashMap<String, usize> = HashMap::new();
        for doc in documents {
            for term in self.terms(doc.as_ref())? {
                *term_freq.entry(term).or_insert(0) += 1;
            }
        }

        if term_freq.is_empty() {
            return Err("empty vocabulary: documents contain only stop words".into());
        }

        let mut ranked: Vec<(String, usize)> = term_freq.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        if let Some(max_features) = self.max_features {
            ranked.truncate(max_features);
        }

        let mut kept: Vec<String> = ranked.into_iter().map(|(term, _)| term).collect();
        kept.sort();
        self.vocabulary = kept
            .into_iter()
            .enumerate()
            .map(|(idx, term)| (term, idx))
            .collect();

        Ok(())
    }

    /// Counts vocabulary terms per document.
    ///
    /// # Errors
    ///
    /// Fails on an empty corpus or before `fit`.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<Matrix<f64>> {
        if documents.is_empty() {
            return Err(RecommendError::empty_input("documents"));
        }
        if self.vocabulary.is_empty() {
            return Err("Vocabulary is empty. Call fit() first".into());
        }

        let vocab_size = self.vocabulary.len();
        let mut data = vec![0.0; documents.len() * vocab_size];
        for (doc_idx, doc) in documents.iter().enumerate() {
            for term in self.terms(doc.as_ref())? {
                if let Some(&term_idx) = self.vocabulary.get(&term) {
                    data[doc_idx * vocab_size + term_idx] += 1.0;
                }
            }
        }

        Matrix::from_vec(documents.len(), vocab_size, data)
    }

    /// `fit` followed by `transform`.
    ///
    /// # Errors
    ///
    /// See [`CountVectorizer::fit`].
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<Matrix<f64>> {
        self.fit(documents)?;
        self.transform(documents)
    }

    /// Learned term → column index mapping.
    #[must_use]
    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocabulary
    }

    /// Number of learned terms.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

impl Default for CountVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

/// TF-IDF vectorizer.
///
/// ```text
/// tfidf(t, d) = tf(t, d) × idf(t)
/// idf(t) = ln((1 + N) / (1 + df(t))) + 1     (smooth, default)
/// idf(t) = ln(N / df(t)) + 1                 (unsmoothed)
/// ```
///
/// Rows are L2-normalized by default, so a dot product between two rows is
/// their cosine similarity.
///
/// # Examples
///
/// ```
/// use subject_recommender::text::vectorize::TfidfVectorizer;
///
/// let docs = vec!["sorting algorithms", "graph algorithms", "operating systems"];
/// let mut vectorizer = TfidfVectorizer::new().with_stop_words_english();
/// let tfidf = vectorizer.fit_transform(&docs).expect("fit_transform should succeed");
/// assert_eq!(tfidf.n_rows(), 3);
/// ```
#[derive(Debug)]
pub struct TfidfVectorizer {
    count_vectorizer: CountVectorizer,
    idf_values: Vec<f64>,
    smooth_idf: bool,
    sublinear_tf: bool,
    normalize: bool,
}

impl TfidfVectorizer {
    /// Creates a vectorizer with smooth IDF and L2 row normalization.
    #[must_use]
    pub fn new() -> Self {
        Self {
            count_vectorizer: CountVectorizer::new(),
            idf_values: Vec::new(),
            smooth_idf: true,
            sublinear_tf: false,
            normalize: true,
        }
    }

    /// Replaces the tokenizer.
    #[must_use]
    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.count_vectorizer = self.count_vectorizer.with_tokenizer(tokenizer);
        self
    }

    /// Drops English stop words.
    #[must_use]
    pub fn with_stop_words_english(mut self) -> Self {
        self.count_vectorizer = self.count_vectorizer.with_stop_words_english();
        self
    }

    /// Caps the vocabulary size.
    #[must_use]
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.count_vectorizer = self.count_vectorizer.with_max_features(max_features);
        self
    }

    /// Adds one to document frequencies (as if an extra document contained
    /// every term), preventing zero divisions.
    #[must_use]
    pub fn with_smooth_idf(mut self, smooth_idf: bool) -> Self {
        self.smooth_idf = smooth_idf;
        self
    }

    /// Uses `1 + ln(tf)` instead of raw counts.
    #[must_use]
    pub fn with_sublinear_tf(mut self, sublinear_tf: bool) -> Self {
        self.sublinear_tf = sublinear_tf;
        self
    }

    /// Sets whether rows are L2-normalized.
    #[must_use]
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Learns vocabulary and IDF weights.
    ///
    /// # Errors
    ///
    /// See [`CountVectorizer::fit`].
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        self.count_vectorizer.fit(documents)?;
        let counts = self.count_vectorizer.transform(documents)?;

        let n_docs = counts.n_rows() as f64;
        let (smooth, offset) = if self.smooth_idf { (1.0, 1.0) } else { (0.0, 0.0) };
        self.idf_values = (0..counts.n_cols())
            .map(|col| {
                let df = counts
                    .column(col)
                    .as_slice()
                    .iter()
                    .filter(|&&c| c > 0.0)
                    .count() as f64;
                ((n_docs + offset) / (df + smooth)).ln() + 1.0
            })
            .collect();

        Ok(())
    }

    /// Transforms documents to TF-IDF rows.
    ///
    /// # Errors
    ///
    /// Fails on an empty corpus or before `fit`.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<Matrix<f64>> {
        let mut matrix = self.count_vectorizer.transform(documents)?;
        let n_cols = matrix.n_cols();

        for (idx, value) in matrix.as_mut_slice().iter_mut().enumerate() {
            if *value > 0.0 {
                let tf = if self.sublinear_tf {
                    1.0 + value.ln()
                } else {
                    *value
                };
                *value = tf * self.idf_values[idx % n_cols];
            }
        }

        if self.normalize {
            for row in matrix.as_mut_slice().chunks_mut(n_cols) {
                let norm = row.iter().map(|x| x * x).sum::<f64>().sqrt();
                if norm > 0.0 {
                    row.iter_mut().for_each(|x| *x /= norm);
                }
            }
        }

        Ok(matrix)
    }

    /// `fit` followed by `transform`.
    ///
    /// # Errors
    ///
    /// See [`TfidfVectorizer::fit`].
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<Matrix<f64>> {
        self.fit(documents)?;
        self.transform(documents)
    }

    /// Learned IDF weight per vocabulary column.
    #[must_use]
    pub fn idf_values(&self) -> &[f64] {
        &self.idf_values
    }

    /// Learned term → column index mapping.
    #[must_use]
    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        self.count_vectorizer.vocabulary()
    }

    /// Number of learned terms.
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.count_vectorizer.vocabulary_size()
    }

    /// Vocabulary terms in column order.
    #[must_use]
    pub fn feature_names(&self) -> Vec<String> {
        let mut names: Vec<(&String, &usize)> = self.vocabulary().iter().collect();
        names.sort_by_key(|(_, idx)| **idx);
        names.into_iter().map(|(term, _)| term.clone()).collect()
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}
