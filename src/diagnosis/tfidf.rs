use std::collections::HashMap;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::artifacts::Vectorizer;
use crate::core::error::{AdvisorError, Result};

lazy_static! {
    static ref WORD_TOKEN: Regex = Regex::new(r"\b\w\w+\b").expect("valid regex");
}


#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    #[default]
    L2,
    None,
}


/// Exported TF-IDF vectorizer: fixed vocabulary and idf weights from training.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    #[serde(default = "default_ngram_range")]
    ngram_range: (usize, usize),
    #[serde(default)]
    sublinear_tf: bool,
    #[serde(default)]
    norm: Norm,
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

impl TfidfVectorizer {
    pub fn new(vocabulary: HashMap<String, usize>, idf: Vec<f64>) -> Self {
        Self {
            vocabulary,
            idf,
            ngram_range: default_ngram_range(),
            sublinear_tf: false,
            norm: Norm::L2,
        }
    }

    #[must_use]
    pub fn with_ngram_range(mut self, min_n: usize, max_n: usize) -> Self {
        self.ngram_range = (min_n, max_n);
        self
    }

    #[must_use]
    pub fn with_sublinear_tf(mut self, sublinear_tf: bool) -> Self {
        self.sublinear_tf = sublinear_tf;
        self
    }

    #[must_use]
    pub fn with_norm(mut self, norm: Norm) -> Self {
        self.norm = norm;
        self
    }

    pub fn validate(&self) -> Result<()> {
        let (min_n, max_n) = self.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(AdvisorError::model_unavailable(format!(
                "invalid ngram range ({min_n}, {max_n})"
            )));
        }
        if let Some((term, index)) = self.vocabulary.iter().find(|(_, i)| **i >= self.idf.len()) {
            return Err(AdvisorError::model_unavailable(format!(
                "vocabulary term {term:?} maps to column {index} beyond {} idf weights",
                self.idf.len()
            )));
        }
        Ok(())
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let words: Vec<&str> = WORD_TOKEN.find_iter(&lowered).map(|m| m.as_str()).collect();
        let (min_n, max_n) = self.ngram_range;

        let mut terms = Vec::new();
        for n in min_n..=max_n {
            if n > words.len() {
                break;
            }
            terms.extend(words.windows(n).map(|w| w.join(" ")));
        }
        terms
    }
}

impl Vectorizer for TfidfVectorizer {
    fn dimension(&self) -> usize {
        self.idf.len()
    }

    fn transform(&self, text: &str) -> Vec<f64> {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in self.tokenize(text) {
            if let Some(&column) = self.vocabulary.get(&term) {
                *counts.entry(column).or_insert(0.0) += 1.0;
            }
        }

        let mut features = vec![0.0; self.dimension()];
        for (column, count) in counts {
            let tf = if self.sublinear_tf { 1.0 + count.ln() } else { count };
            if let (Some(slot), Some(idf)) = (features.get_mut(column), self.idf.get(column)) {
                *slot = tf * idf;
            }
        }

        if self.norm == Norm::L2 {
            let magnitude = features.iter().map(|v| v * v).sum::<f64>().sqrt();
            if magnitude > 0.0 {
                features.iter_mut().for_each(|v| *v /= magnitude);
            }
        }

        features
    }
}
