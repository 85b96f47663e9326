//! TF-IDF vector-space model with cosine similarity.
//!
//! Built per call over a small, fixed document set (a resume/job pair, or a resume plus
//! every catalog profile) and never shared between requests.
//!
//! Weighting: raw term counts × smoothed idf `ln((1 + n) / (1 + df)) + 1`, rows
//! L2-normalized. Terms are lowercase word-character runs of two or more characters.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static TERM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("valid term regex"));

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VectorizeError {
    #[error("empty vocabulary; documents contain no terms")]
    EmptyVocabulary,
}

/// Sparse document vector keyed by vocabulary index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector(BTreeMap<usize, f64>);

impl SparseVector {
    pub fn is_zero(&self) -> bool {
        self.0.values().all(|w| *w == 0.0)
    }

    fn dot(&self, other: &SparseVector) -> f64 {
        // iterate the smaller side
        let (small, large) = if self.0.len() <= other.0.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .0
            .iter()
            .filter_map(|(idx, w)| large.0.get(idx).map(|o| w * o))
            .sum()
    }

    fn norm(&self) -> f64 {
        self.0.values().map(|w| w * w).sum::<f64>().sqrt()
    }
}

/// Cosine similarity in 0..=1 (weights are non-negative). Zero vectors score 0.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let denom = a.norm() * b.norm();
    if denom == 0.0 {
        0.0
    } else {
        (a.dot(b) / denom).clamp(0.0, 1.0)
    }
}

pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TERM_RE
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// A fitted vocabulary with idf weights.
#[derive(Debug, Clone)]
pub struct TfidfModel {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfModel {
    /// Fits vocabulary and idf over `documents`.
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Result<Self, VectorizeError> {
        let tokenized: Vec<BTreeSet<String>> = documents
            .iter()
            .map(|doc| tokenize(doc.as_ref()).into_iter().collect())
            .collect();

        let mut doc_freq: BTreeMap<String, usize> = BTreeMap::new();
        for terms in &tokenized {
            for term in terms {
                *doc_freq.entry(term.clone()).or_insert(0) += 1;
            }
        }

        if doc_freq.is_empty() {
            return Err(VectorizeError::EmptyVocabulary);
        }

        let n = documents.len() as f64;
        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(doc_freq.len());
        for (idx, (term, df)) in doc_freq.into_iter().enumerate() {
            idf.push(((1.0 + n) / (1.0 + df as f64)).ln() + 1.0);
            vocabulary.insert(term, idx);
        }

        Ok(Self { vocabulary, idf })
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// L2-normalized tf-idf vector of `document`. Out-of-vocabulary terms are ignored.
    pub fn transform(&self, document: &str) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in tokenize(document) {
            if let Some(&idx) = self.vocabulary.get(&term) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut weights: BTreeMap<usize, f64> = counts
            .into_iter()
            .map(|(idx, tf)| (idx, tf * self.idf[idx]))
            .collect();

        let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for w in weights.values_mut() {
                *w /= norm;
            }
        }
        SparseVector(weights)
    }
}

/// Fits a model over exactly `[a, b]` and returns their cosine similarity as a percentage.
pub fn pair_similarity_pct(a: &str, b: &str) -> Result<f64, VectorizeError> {
    let model = TfidfModel::fit(&[a, b])?;
    let va = model.transform(a);
    let vb = model.transform(b);
    Ok(cosine_similarity(&va, &vb) * 100.0)
}
