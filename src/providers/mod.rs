

pub mod artifacts;
pub mod knowledge;

pub use artifacts::{ArtifactProvider, DirectoryArtifactProvider};
pub use knowledge::{FileKnowledgeProvider, HttpKnowledgeProvider, KnowledgeProvider};

use crate::core::config::AdvisorConfig;
use crate::core::error::Result;


pub struct ProviderFactory;

impl ProviderFactory {
    /// A configured URL wins over the local path.
    pub fn knowledge(config: &AdvisorConfig) -> Result<Box<dyn KnowledgeProvider>> {
        match &config.knowledge_base_url {
            Some(url) => Ok(Box::new(HttpKnowledgeProvider::new(url, config.http_timeout)?)),
            None => Ok(Box::new(FileKnowledgeProvider::new(&config.knowledge_base_path))),
        }
    }

    #[must_use]
    pub fn artifacts(config: &AdvisorConfig) -> Box<dyn ArtifactProvider> {
        Box::new(DirectoryArtifactProvider::new(&config.model_dir))
    }
}
