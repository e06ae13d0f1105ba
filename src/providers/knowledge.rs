use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

use crate::core::error::{AdvisorError, Result};
use crate::drugs::KnowledgeBase;


#[async_trait]
pub trait KnowledgeProvider: Send + Sync {

    async fn load(&self) -> Result<KnowledgeBase>;


    fn source(&self) -> String;
}


pub struct FileKnowledgeProvider {
    path: PathBuf,
}

impl FileKnowledgeProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl KnowledgeProvider for FileKnowledgeProvider {
    async fn load(&self) -> Result<KnowledgeBase> {
        debug!("Reading knowledge base from {}", self.path.display());

        let json = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            AdvisorError::KnowledgeBase(format!("cannot read {}: {e}", self.path.display()))
        })?;
        let kb = KnowledgeBase::from_json(&json).map_err(|e| {
            AdvisorError::KnowledgeBase(format!("cannot parse {}: {e}", self.path.display()))
        })?;

        info!(
            "Loaded {} conditions and {} drugs from {}",
            kb.len(),
            kb.drug_count(),
            self.path.display()
        );
        Ok(kb)
    }

    fn source(&self) -> String {
        self.path.display().to_string()
    }
}


pub struct HttpKnowledgeProvider {
    url: Url,
    client: Client,
}

impl HttpKnowledgeProvider {
    pub fn new(url: &str, timeout_secs: u64) -> Result<Self> {
        let url = Url::parse(url)
            .map_err(|e| AdvisorError::Config(format!("invalid knowledge base url {url:?}: {e}")))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(AdvisorError::Config(format!(
                "unsupported knowledge base url scheme {:?}",
                url.scheme()
            )));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self { url, client })
    }
}

#[async_trait]
impl KnowledgeProvider for HttpKnowledgeProvider {
    async fn load(&self) -> Result<KnowledgeBase> {
        debug!("Fetching knowledge base from {}", self.url);

        let response = self
            .client
            .get(self.url.clone())
            .header("accept", "application/json")
            .send()
            .await?
            .error_for_status()?;

        let json = response.text().await?;
        let kb = KnowledgeBase::from_json(&json)
            .map_err(|e| AdvisorError::KnowledgeBase(format!("cannot parse {}: {e}", self.url)))?;

        info!("Fetched {} conditions from {}", kb.len(), self.url);
        Ok(kb)
    }

    fn source(&self) -> String {
        self.url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("ent-advisor-kb-{}.json", uuid::Uuid::new_v4()))
    }

    #[tokio::test]
    async fn test_file_provider_loads() {
        let path = temp_path();
        tokio::fs::write(
            &path,
            r#"{"Otitis Media": {"Amoxicillin": {"indications_and_usage": ["ear", "infection"]}}}"#,
        )
        .await
        .unwrap();

        let kb = FileKnowledgeProvider::new(&path).load().await.unwrap();
        tokio::fs::remove_file(&path).await.ok();

        assert_eq!(kb.len(), 1);
        assert!(kb.drugs_for("Otitis Media").unwrap().get("Amoxicillin").is_some());
    }

    #[tokio::test]
    async fn test_file_provider_missing_file() {
        let err = FileKnowledgeProvider::new(temp_path()).load().await.unwrap_err();
        assert!(matches!(err, AdvisorError::KnowledgeBase(_)));
    }

    #[tokio::test]
    async fn test_file_provider_malformed_json() {
        let path = temp_path();
        tokio::fs::write(&path, "{ not json").await.unwrap();

        let err = FileKnowledgeProvider::new(&path).load().await.unwrap_err();
        tokio::fs::remove_file(&path).await.ok();

        assert!(err.to_string().contains("cannot parse"));
    }

    #[test]
    fn test_http_provider_rejects_bad_urls() {
        assert!(matches!(
            HttpKnowledgeProvider::new("not a url", 5),
            Err(AdvisorError::Config(_))
        ));
        assert!(matches!(
            HttpKnowledgeProvider::new("ftp://example.org/kb.json", 5),
            Err(AdvisorError::Config(_))
        ));

        let provider = HttpKnowledgeProvider::new("https://example.org/ent_drug_data.json", 5).unwrap();
        assert_eq!(provider.source(), "https://example.org/ent_drug_data.json");
    }
}
