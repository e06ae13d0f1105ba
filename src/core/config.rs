use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{AdvisorError, Result};
use crate::{DEFAULT_MIN_SYMPTOMS, DEFAULT_TOP_K, MAX_DESCRIPTION_CHARS};

const ENV_PREFIX: &str = "ENT_ADVISOR";


#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AdvisorConfig {

    pub knowledge_base_path: String,
    pub knowledge_base_url: Option<String>,


    pub model_dir: String,


    pub top_k: usize,
    pub max_description_chars: usize,
    pub min_symptoms: usize,


    pub http_timeout: u64,
}

impl AdvisorConfig {

    pub fn new(knowledge_base_path: &str, model_dir: &str) -> Self {
        Self {
            knowledge_base_path: knowledge_base_path.to_string(),
            knowledge_base_url: None,
            model_dir: model_dir.to_string(),
            top_k: DEFAULT_TOP_K,
            max_description_chars: MAX_DESCRIPTION_CHARS,
            min_symptoms: DEFAULT_MIN_SYMPTOMS,
            http_timeout: 30,
        }
    }


    /// Layers an optional config file (toml/json/yaml) under `ENT_ADVISOR_*` variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config: Self = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.model_dir.trim().is_empty() {
            return Err(AdvisorError::Config("model_dir must not be empty".to_string()));
        }
        if self.knowledge_base_path.trim().is_empty() && self.knowledge_base_url.is_none() {
            return Err(AdvisorError::Config(
                "either knowledge_base_path or knowledge_base_url is required".to_string(),
            ));
        }
        if self.max_description_chars == 0 {
            return Err(AdvisorError::Config(
                "max_description_chars must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self::new("data/ent_drug_data.json", "models")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AdvisorConfig::default();
        assert_eq!(config.top_k, 3);
        assert_eq!(config.max_description_chars, 500);
        assert_eq!(config.min_symptoms, 2);
        assert!(config.knowledge_base_url.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_knowledge_source() {
        let mut config = AdvisorConfig::default();
        config.knowledge_base_path = String::new();
        assert!(matches!(config.validate(), Err(AdvisorError::Config(_))));

        config.knowledge_base_url = Some("https://example.org/kb.json".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("ent-advisor-{}.toml", uuid::Uuid::new_v4()));
        std::fs::write(&path, "model_dir = \"artifacts\"\ntop_k = 5\n").unwrap();

        let config = AdvisorConfig::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.model_dir, "artifacts");
        assert_eq!(config.top_k, 5);
        assert_eq!(config.knowledge_base_path, "data/ent_drug_data.json");
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = AdvisorConfig::load(None).unwrap();
        assert_eq!(config.top_k, 3);
        assert_eq!(config.model_dir, "models");
    }

    #[test]
    fn test_load_missing_file_fails() {
        let path = std::env::temp_dir().join(format!("ent-advisor-{}.toml", uuid::Uuid::new_v4()));
        assert!(matches!(AdvisorConfig::load(Some(&path)), Err(AdvisorError::Config(_))));
    }
}
