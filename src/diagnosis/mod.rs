

pub mod artifacts;
pub mod classifier;
pub mod linear;
pub mod tfidf;

pub use artifacts::{ArtifactBundle, Classifier, LabelDecoder, Vectorizer};
pub use classifier::{ConditionLabel, DiseaseClassifier};
pub use linear::{LabelEncoder, LinearClassifier};
pub use tfidf::{Norm, TfidfVectorizer};
