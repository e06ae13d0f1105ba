use serde::{Deserialize, Serialize};

use super::aggregator::{aggregate, SymptomSet};
use super::normalizer::split_symptom_list;


/// Cross-turn conversation state. Owned by the calling layer, threaded through each turn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub symptoms: SymptomSet,

    pub raw_mentions: Vec<String>,

    pub turns: u32,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn record_turn<S: AsRef<str>>(self, mentions: &[S]) -> Self {
        let Self {
            symptoms,
            mut raw_mentions,
            turns,
        } = self;

        raw_mentions.extend(
            mentions
                .iter()
                .map(|m| m.as_ref().trim().to_string())
                .filter(|m| !m.is_empty()),
        );

        Self {
            symptoms: aggregate(symptoms, mentions),
            raw_mentions,
            turns: turns + 1,
        }
    }

    /// Same as [`record_turn`](Self::record_turn) for a single comma-separated extraction.
    #[must_use]
    pub fn record_extraction(self, extracted: &str) -> Self {
        self.record_turn(&split_symptom_list(extracted))
    }
}
