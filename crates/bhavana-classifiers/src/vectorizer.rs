//! Fitted TF-IDF vectorizer artifact

use bhavana_core::{Error, Result};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;

/// Token pattern the vocabulary was fitted with: Unicode word tokens of two
/// or more characters. `\w` covers Devanagari letters and combining marks.
const TOKEN_PATTERN: &str = r"\b\w\w+\b";

/// Sparse feature vector in the vectorizer's vocabulary space.
///
/// Indices are strictly increasing; absent columns are zero.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    indices: Vec<usize>,
    values: Vec<f64>,
    dim: usize,
}

impl FeatureVector {
    /// Build from parallel index/value lists. Indices must be sorted,
    /// unique, and within `dim`.
    pub fn new(indices: Vec<usize>, values: Vec<f64>, dim: usize) -> Result<Self> {
        if indices.len() != values.len() {
            return Err(Error::vectorizer(format!(
                "index/value length mismatch: {} vs {}",
                indices.len(),
                values.len()
            )));
        }
        if indices.windows(2).any(|w| w[0] >= w[1]) {
            return Err(Error::vectorizer("feature indices must be strictly increasing"));
        }
        if indices.last().is_some_and(|&last| last >= dim) {
            return Err(Error::vectorizer(format!(
                "feature index out of range for dimension {dim}"
            )));
        }
        Ok(Self {
            indices,
            values,
            dim,
        })
    }

    /// Zero vector of the given dimension
    pub fn zeros(dim: usize) -> Self {
        Self {
            indices: Vec::new(),
            values: Vec::new(),
            dim,
        }
    }

    /// Dimension of the full feature space
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of non-zero entries
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    /// Whether the vector is all zeros
    pub fn is_zero(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate over (column, value) pairs of non-zero entries
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    /// Dot product against a dense row of the same dimension
    pub fn dot(&self, row: &[f64]) -> f64 {
        self.iter().map(|(idx, value)| value * row[idx]).sum()
    }

    /// Euclidean norm
    pub fn l2_norm(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum::<f64>().sqrt()
    }
}

/// Serialized form of the fitted vectorizer
#[derive(Debug, Deserialize)]
struct TfidfVectorizerData {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

/// Fitted TF-IDF vectorizer: a vocabulary mapping tokens to feature columns
/// plus the inverse-document-frequency weight learned for each column.
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    token_pattern: Regex,
}

impl std::fmt::Debug for TfidfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfidfVectorizer")
            .field("n_features", &self.idf.len())
            .finish()
    }
}

impl TfidfVectorizer {
    /// Assemble a vectorizer from its fitted parts
    pub fn from_parts(vocabulary: HashMap<String, usize>, idf: Vec<f64>) -> Result<Self> {
        if vocabulary.len() != idf.len() {
            return Err(Error::artifact(format!(
                "vectorizer vocabulary has {} terms but idf has {} weights",
                vocabulary.len(),
                idf.len()
            )));
        }
        if let Some((term, &idx)) = vocabulary.iter().find(|(_, &idx)| idx >= idf.len()) {
            return Err(Error::artifact(format!(
                "vocabulary term '{term}' maps to column {idx}, outside the {} idf weights",
                idf.len()
            )));
        }

        let token_pattern = Regex::new(TOKEN_PATTERN)
            .map_err(|e| Error::internal(format!("failed to compile token pattern: {e}")))?;

        Ok(Self {
            vocabulary,
            idf,
            token_pattern,
        })
    }

    /// Deserialize a fitted vectorizer from its JSON artifact
    pub fn from_json(json: &str) -> Result<Self> {
        let data: TfidfVectorizerData = serde_json::from_str(json)
            .map_err(|e| Error::artifact(format!("corrupt vectorizer artifact: {e}")))?;
        Self::from_parts(data.vocabulary, data.idf)
    }

    /// Dimension of the feature space shared with the classifiers
    pub fn n_features(&self) -> usize {
        self.idf.len()
    }

    /// Split text into the lowercased word tokens the vocabulary was built on
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.token_pattern
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Transform one raw text into an L2-normalized TF-IDF feature vector.
    ///
    /// Pure function of the input and the fitted state. Out-of-vocabulary
    /// tokens are ignored; empty or fully out-of-vocabulary input yields
    /// the zero vector rather than an error.
    pub fn transform(&self, text: &str) -> FeatureVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in self.tokenize(text) {
            if let Some(&idx) = self.vocabulary.get(&token) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        if counts.is_empty() {
            return FeatureVector::zeros(self.n_features());
        }

        let mut entries: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(idx, tf)| (idx, tf * self.idf[idx]))
            .collect();
        entries.sort_unstable_by_key(|&(idx, _)| idx);

        let norm = entries.iter().map(|(_, v)| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, value) in &mut entries {
                *value /= norm;
            }
        }

        let (indices, values) = entries.into_iter().unzip();
        FeatureVector {
            indices,
            values,
            dim: self.n_features(),
        }
    }
}
