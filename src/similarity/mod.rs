pub mod preprocess;
pub mod stop_words;
pub mod vectorizer;

pub use preprocess::preprocess;
pub use vectorizer::{SparseVector, TfIdfVectorizer, VectorizeError};

pub trait SimilarityScorer {
    /// Highest similarity between `candidate` and any text in `corpus`,
    /// in `[0.0, 1.0]`. An empty corpus scores 0.0.
    fn max_similarity(&self, candidate: &str, corpus: &[&str]) -> Result<f64, VectorizeError>;
}

/// Preprocess, fit TF-IDF on `{candidate} ∪ corpus`, take the best cosine.
#[derive(Debug, Clone, Default)]
pub struct TfIdfScorer {
    vectorizer: TfIdfVectorizer,
}

impl TfIdfScorer {
    pub fn new(max_features: usize) -> Self {
        Self {
            vectorizer: TfIdfVectorizer::new(max_features),
        }
    }
}

impl SimilarityScorer for TfIdfScorer {
    fn max_similarity(&self, candidate: &str, corpus: &[&str]) -> Result<f64, VectorizeError> {
        if corpus.is_empty() {
            return Ok(0.0);
        }

        let mut documents = Vec::with_capacity(corpus.len() + 1);
        documents.push(preprocess(candidate));
        documents.extend(corpus.iter().map(|text| preprocess(text)));

        let vectors = self.vectorizer.fit_transform(documents.as_slice())?;
        let (query, existing) = vectors.split_first().ok_or(VectorizeError::EmptyVocabulary)?;

        let best = existing
            .iter()
            .map(|v| query.cosine(v))
            .fold(0.0_f64, f64::max);

        debug_assert!((0.0..=1.0 + 1e-9).contains(&best), "similarity {best} out of range");
        Ok(best.min(1.0))
    }
}
