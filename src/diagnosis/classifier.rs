use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use super::artifacts::ArtifactBundle;
use crate::core::error::{AdvisorError, Result};
use crate::symptoms::{normalize, SymptomSet};
use crate::utils::title_case;


/// Diagnosis as decoded by the model. Casing is whatever the label vocabulary uses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionLabel(String);

impl ConditionLabel {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Title-cased form used as the knowledge base key.
    pub fn lookup_key(&self) -> String {
        title_case(&self.0)
    }
}

impl fmt::Display for ConditionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lookup_key())
    }
}


pub struct DiseaseClassifier {
    artifacts: Arc<ArtifactBundle>,
}

impl DiseaseClassifier {
    pub fn new(artifacts: Arc<ArtifactBundle>) -> Self {
        Self { artifacts }
    }

    /// One label per input text, in input order.
    pub fn classify<S: AsRef<str>>(&self, symptom_texts: &[S]) -> Result<Vec<ConditionLabel>> {
        let labels = symptom_texts
            .iter()
            .map(|text| self.classify_one(text.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        info!("Classified {} symptom texts", labels.len());
        Ok(labels)
    }

    /// Empty text yields the model's own fallback class (the zero vector's prediction).
    pub fn classify_one(&self, symptom_text: &str) -> Result<ConditionLabel> {
        let cleaned = normalize(symptom_text);
        let features = self.artifacts.vectorizer().transform(&cleaned);

        let expected = self.artifacts.classifier().n_features();
        if features.len() != expected {
            return Err(AdvisorError::model_unavailable(format!(
                "vectorizer produced {} features, classifier expects {}",
                features.len(),
                expected
            )));
        }

        let label = self.artifacts.classifier().predict(&features);
        let condition = self.artifacts.decoder().decode(label).ok_or_else(|| {
            AdvisorError::model_unavailable(format!("classifier emitted undecodable label {label}"))
        })?;

        debug!("Classified {:?} as {} (label {})", cleaned, condition, label);
        Ok(ConditionLabel::new(condition))
    }

    pub fn classify_set(&self, symptoms: &SymptomSet) -> Result<ConditionLabel> {
        self.classify_one(&symptoms.canonical())
    }

    /// Boundary form for loosely typed callers: a string or an array of strings.
    pub fn classify_value(&self, input: &Value) -> Result<Vec<ConditionLabel>> {
        match input {
            Value::String(text) => Ok(vec![self.classify_one(text)?]),
            Value::Array(items) => {
                let texts = items
                    .iter()
                    .map(|item| {
                        item.as_str().ok_or_else(|| {
                            AdvisorError::invalid_input(format!(
                                "symptom list items must be strings, got {item}"
                            ))
                        })
                    })
                    .collect::<Result<Vec<_>>>()?;
                self.classify(texts.as_slice())
            }
            other => Err(AdvisorError::invalid_input(format!(
                "expected a string or a list of strings, got {other}"
            ))),
        }
    }
}
