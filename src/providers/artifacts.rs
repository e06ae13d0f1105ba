use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use crate::core::error::{AdvisorError, Result};
use crate::diagnosis::ArtifactBundle;

pub const VECTORIZER_FILE: &str = "vectorizer.json";
pub const CLASSIFIER_FILE: &str = "classifier.json";
pub const LABEL_ENCODER_FILE: &str = "label_encoder.json";


#[async_trait]
pub trait ArtifactProvider: Send + Sync {

    async fn load(&self) -> Result<ArtifactBundle>;
}


/// Reads the three exported artifacts from one directory.
pub struct DirectoryArtifactProvider {
    dir: PathBuf,
}

impl DirectoryArtifactProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    async fn read(&self, file: &str) -> Result<String> {
        let path = self.dir.join(file);
        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| AdvisorError::model_unavailable(format!("cannot read {}: {e}", path.display())))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl ArtifactProvider for DirectoryArtifactProvider {
    async fn load(&self) -> Result<ArtifactBundle> {
        let (vectorizer, classifier, encoder) = tokio::try_join!(
            self.read(VECTORIZER_FILE),
            self.read(CLASSIFIER_FILE),
            self.read(LABEL_ENCODER_FILE),
        )?;

        let bundle = ArtifactBundle::from_json(&vectorizer, &classifier, &encoder)?;
        info!("Loaded model artifacts from {}: {:?}", self.dir.display(), bundle);
        Ok(bundle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnosis::Vectorizer;

    async fn write_artifacts(dir: &Path, encoder: &str) {
        tokio::fs::create_dir_all(dir).await.unwrap();
        tokio::fs::write(
            dir.join(VECTORIZER_FILE),
            r#"{"vocabulary": {"ear": 0, "throat": 1}, "idf": [1.0, 1.2]}"#,
        )
        .await
        .unwrap();
        tokio::fs::write(
            dir.join(CLASSIFIER_FILE),
            r#"{"coef": [[1.0, 0.0], [0.0, 1.0]], "intercept": [0.0, 0.0], "classes": [0, 1]}"#,
        )
        .await
        .unwrap();
        tokio::fs::write(dir.join(LABEL_ENCODER_FILE), encoder).await.unwrap();
    }

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("ent-advisor-models-{}", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn test_directory_provider_loads_bundle() {
        let dir = temp_dir();
        write_artifacts(&dir, r#"{"classes": ["otitis media", "pharyngitis"]}"#).await;

        let bundle = DirectoryArtifactProvider::new(&dir).load().await.unwrap();
        tokio::fs::remove_dir_all(&dir).await.ok();

        assert_eq!(bundle.vectorizer().dimension(), 2);
    }

    #[tokio::test]
    async fn test_directory_provider_missing_files() {
        let err = DirectoryArtifactProvider::new(temp_dir()).load().await.unwrap_err();
        assert!(matches!(err, AdvisorError::ModelUnavailable(_)));
    }

    #[test]
    fn test_directory_provider_incompatible_encoder() {
        let dir = temp_dir();
        let result = tokio_test::block_on(async {
            write_artifacts(&dir, r#"{"classes": ["otitis media"]}"#).await;
            DirectoryArtifactProvider::new(&dir).load().await
        });
        std::fs::remove_dir_all(&dir).ok();

        assert!(matches!(result, Err(AdvisorError::ModelUnavailable(_))));
    }
}
