use tracing::debug;

use super::models::{DrugMap, KnowledgeBase};
use crate::utils::title_case;

static NO_DRUGS: DrugMap = DrugMap::new();


/// Drugs recorded for `condition`. Unknown conditions yield an empty map.
pub fn lookup<'kb>(condition: &str, kb: &'kb KnowledgeBase) -> &'kb DrugMap {
    let key = title_case(condition);

    match kb.drugs_for(&key) {
        Some(drugs) => {
            debug!("Found {} drugs for {}", drugs.len(), key);
            drugs
        }
        None => {
            debug!("No knowledge base entry for {}", key);
            &NO_DRUGS
        }
    }
}
