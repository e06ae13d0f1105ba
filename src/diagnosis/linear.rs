use serde::{Deserialize, Serialize};

use super::artifacts::{Classifier, LabelDecoder};
use crate::core::error::{AdvisorError, Result};


/// One-vs-rest linear model: `argmax(coef · x + intercept)`.
///
/// A two-class model exported with a single coefficient row uses the sign
/// of its decision value, as binary linear models do.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearClassifier {
    coef: Vec<Vec<f64>>,
    intercept: Vec<f64>,
    classes: Vec<i64>,
}

impl LinearClassifier {
    pub fn new(coef: Vec<Vec<f64>>, intercept: Vec<f64>, classes: Vec<i64>) -> Self {
        Self {
            coef,
            intercept,
            classes,
        }
    }

    pub fn decision_function(&self, features: &[f64]) -> Vec<f64> {
        self.coef
            .iter()
            .zip(&self.intercept)
            .map(|(row, bias)| row.iter().zip(features).map(|(w, x)| w * x).sum::<f64>() + bias)
            .collect()
    }
}

impl Classifier for LinearClassifier {
    fn n_features(&self) -> usize {
        self.coef.first().map_or(0, Vec::len)
    }

    fn classes(&self) -> &[i64] {
        &self.classes
    }

    fn validate(&self) -> Result<()> {
        let width = self.n_features();
        if self.coef.is_empty() || self.coef.iter().any(|row| row.len() != width) {
            return Err(AdvisorError::model_unavailable(
                "classifier coefficients must be a non-empty rectangular matrix",
            ));
        }
        if self.intercept.len() != self.coef.len() {
            return Err(AdvisorError::model_unavailable(format!(
                "classifier has {} coefficient rows but {} intercepts",
                self.coef.len(),
                self.intercept.len()
            )));
        }
        let binary = self.coef.len() == 1 && self.classes.len() == 2;
        if !binary && self.coef.len() != self.classes.len() {
            return Err(AdvisorError::model_unavailable(format!(
                "classifier has {} coefficient rows for {} classes",
                self.coef.len(),
                self.classes.len()
            )));
        }
        Ok(())
    }

    fn predict(&self, features: &[f64]) -> i64 {
        let scores = self.decision_function(features);

        if self.coef.len() == 1 && self.classes.len() == 2 {
            let positive = scores.first().is_some_and(|s| *s > 0.0);
            return self.classes[usize::from(positive)];
        }

        let mut best = 0;
        for (i, score) in scores.iter().enumerate() {
            if *score > scores[best] {
                best = i;
            }
        }
        self.classes.get(best).copied().unwrap_or_default()
    }
}


/// Index-to-name vocabulary saved alongside the classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    pub fn new(classes: Vec<String>) -> Self {
        Self { classes }
    }
}

impl LabelDecoder for LabelEncoder {
    fn decode(&self, label: i64) -> Option<&str> {
        usize::try_from(label)
            .ok()
            .and_then(|i| self.classes.get(i))
            .map(String::as_str)
    }

    fn len(&self) -> usize {
        self.classes.len()
    }
}
