use std::collections::{BTreeMap, HashMap, HashSet};

use thiserror::Error;

use super::preprocess::text_patterns;
use super::stop_words::is_stop_word;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VectorizeError {
    #[error("Empty vocabulary: every document is empty or contains only stop words")]
    EmptyVocabulary,
}

/// Sparse, L2-normalized document vector keyed by vocabulary index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    weights: BTreeMap<usize, f64>,
}

impl SparseVector {
    pub fn is_zero(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn norm(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    pub fn dot(&self, other: &SparseVector) -> f64 {
        // Iterate the shorter side.
        let (small, large) = if self.weights.len() <= other.weights.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .weights
            .iter()
            .filter_map(|(idx, w)| large.weights.get(idx).map(|o| w * o))
            .sum()
    }

    /// Cosine of the angle between two vectors. Zero vectors score 0.0.
    pub fn cosine(&self, other: &SparseVector) -> f64 {
        let denom = self.norm() * other.norm();
        if denom == 0.0 {
            return 0.0;
        }
        self.dot(other) / denom
    }
}

/// TF-IDF over word n-grams with English stop words removed.
///
/// Tokens are runs of two or more word characters. Stop words are dropped
/// before n-grams are formed. IDF is smoothed:
/// `idf(t) = ln((1 + n) / (1 + df(t))) + 1`.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    ngram_min: usize,
    ngram_max: usize,
    max_features: usize,
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self::new(1000)
    }
}

impl TfIdfVectorizer {
    /// Unigrams and bigrams, vocabulary capped at `max_features`.
    pub fn new(max_features: usize) -> Self {
        Self {
            ngram_min: 1,
            ngram_max: 2,
            max_features,
        }
    }

    /// Lowercased tokens minus stop words, expanded into n-grams.
    pub fn analyze(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = match text_patterns() {
            Some(p) => p.token.find_iter(&lowered).map(|m| m.as_str()).collect(),
            None => lowered
                .split(|c: char| !c.is_alphanumeric() && c != '_')
                .filter(|t| t.chars().count() >= 2)
                .collect(),
        };
        let tokens: Vec<&str> = tokens.into_iter().filter(|t| !is_stop_word(t)).collect();

        let mut terms = Vec::new();
        for n in self.ngram_min..=self.ngram_max {
            if n == 0 || tokens.len() < n {
                continue;
            }
            for window in tokens.windows(n) {
                terms.push(window.join(" "));
            }
        }
        terms
    }

    /// Fit a vocabulary on `documents` and return one vector per document,
    /// in input order.
    pub fn fit_transform<S: AsRef<str>>(
        &self,
        documents: &[S],
    ) -> Result<Vec<SparseVector>, VectorizeError> {
        let analyzed: Vec<Vec<String>> = documents
            .iter()
            .map(|d| self.analyze(d.as_ref()))
            .collect();

        // term -> (corpus frequency, document frequency)
        let mut stats: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        for terms in &analyzed {
            let mut seen: Vec<&str> = Vec::with_capacity(terms.len());
            for term in terms {
                let entry = stats.entry(term.as_str()).or_insert((0, 0));
                entry.0 += 1;
                if !seen.contains(&term.as_str()) {
                    seen.push(term.as_str());
                    entry.1 += 1;
                }
            }
        }

        if stats.is_empty() {
            return Err(VectorizeError::EmptyVocabulary);
        }

        if stats.len() > self.max_features {
            let mut ranked: Vec<(&str, usize)> =
                stats.iter().map(|(t, (freq, _))| (*t, *freq)).collect();
            // Most frequent first, ties by term.
            ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
            ranked.truncate(self.max_features);
            let keep: HashSet<&str> = ranked.into_iter().map(|(t, _)| t).collect();
            stats.retain(|t, _| keep.contains(t));
        }

        let n_docs = documents.len() as f64;
        let vocabulary: HashMap<&str, (usize, f64)> = stats
            .iter()
            .enumerate()
            .map(|(idx, (term, (_, df)))| {
                let idf = ((1.0 + n_docs) / (1.0 + *df as f64)).ln() + 1.0;
                (*term, (idx, idf))
            })
            .collect();

        let vectors = analyzed
            .iter()
            .map(|terms| {
                let mut weights: BTreeMap<usize, f64> = BTreeMap::new();
                for term in terms {
                    if let Some((idx, idf)) = vocabulary.get(term.as_str()) {
                        *weights.entry(*idx).or_insert(0.0) += idf;
                    }
                }
                let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
                if norm > 0.0 {
                    for w in weights.values_mut() {
                        *w /= norm;
                    }
                }
                SparseVector { weights }
            })
            .collect();

        Ok(vectors)
    }
}
