use std::fmt;

use crate::core::error::{AdvisorError, Result};
use super::linear::{LabelEncoder, LinearClassifier};
use super::tfidf::TfidfVectorizer;


/// Text to fixed-dimension features.
pub trait Vectorizer: Send + Sync {

    fn dimension(&self) -> usize;


    fn transform(&self, text: &str) -> Vec<f64>;
}


/// Features to an integer class label.
pub trait Classifier: Send + Sync {

    fn n_features(&self) -> usize;


    fn classes(&self) -> &[i64];

    /// Checks that the fitted parameters agree with `classes`.
    fn validate(&self) -> Result<()> {
        Ok(())
    }


    fn predict(&self, features: &[f64]) -> i64;
}


/// Integer class label to condition name.
pub trait LabelDecoder: Send + Sync {

    fn decode(&self, label: i64) -> Option<&str>;


    fn len(&self) -> usize;
}


/// The fitted vectorizer, classifier and decoder, checked for shape agreement.
pub struct ArtifactBundle {
    vectorizer: Box<dyn Vectorizer>,
    classifier: Box<dyn Classifier>,
    decoder: Box<dyn LabelDecoder>,
}

impl ArtifactBundle {
    pub fn new(
        vectorizer: Box<dyn Vectorizer>,
        classifier: Box<dyn Classifier>,
        decoder: Box<dyn LabelDecoder>,
    ) -> Result<Self> {
        classifier.validate()?;

        if vectorizer.dimension() != classifier.n_features() {
            return Err(AdvisorError::model_unavailable(format!(
                "vectorizer produces {} features but classifier expects {}",
                vectorizer.dimension(),
                classifier.n_features()
            )));
        }

        if let Some(label) = classifier.classes().iter().find(|l| decoder.decode(**l).is_none()) {
            return Err(AdvisorError::model_unavailable(format!(
                "class {} is outside the decoder vocabulary of {} labels",
                label,
                decoder.len()
            )));
        }

        Ok(Self {
            vectorizer,
            classifier,
            decoder,
        })
    }

    /// Builds the bundle from the JSON exports of the three fitted artifacts.
    pub fn from_json(vectorizer: &str, classifier: &str, label_encoder: &str) -> Result<Self> {
        let vectorizer: TfidfVectorizer = parse_artifact("vectorizer", vectorizer)?;
        let classifier: LinearClassifier = parse_artifact("classifier", classifier)?;
        let decoder: LabelEncoder = parse_artifact("label encoder", label_encoder)?;

        vectorizer.validate()?;

        Self::new(Box::new(vectorizer), Box::new(classifier), Box::new(decoder))
    }

    pub fn vectorizer(&self) -> &dyn Vectorizer {
        self.vectorizer.as_ref()
    }

    pub fn classifier(&self) -> &dyn Classifier {
        self.classifier.as_ref()
    }

    pub fn decoder(&self) -> &dyn LabelDecoder {
        self.decoder.as_ref()
    }
}

impl fmt::Debug for ArtifactBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArtifactBundle")
            .field("features", &self.vectorizer.dimension())
            .field("classes", &self.classifier.classes().len())
            .field("labels", &self.decoder.len())
            .finish()
    }
}

fn parse_artifact<T: serde::de::DeserializeOwned>(kind: &str, json: &str) -> Result<T> {
    serde_json::from_str(json)
        .map_err(|e| AdvisorError::model_unavailable(format!("invalid {kind} artifact: {e}")))
}
