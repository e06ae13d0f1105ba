

pub mod advice;
pub mod outcome;
pub mod response;

pub use advice::advice_for;
pub use outcome::{ConsultationOutcome, ConsultationReport, OutcomeKind};
pub use response::render_response;

use std::sync::Arc;

use tracing::{debug, info};

use crate::core::config::AdvisorConfig;
use crate::core::error::Result;
use crate::diagnosis::{ArtifactBundle, DiseaseClassifier};
use crate::drugs::{lookup, rank, select_top, DrugInfoFormatter, DrugMap, KnowledgeBase};
use crate::symptoms::{SessionState, SymptomSet};


/// Runs the whole pipeline for one turn. Holds only read-only shared data.
pub struct Advisor {
    classifier: DiseaseClassifier,
    knowledge: Arc<KnowledgeBase>,
    formatter: DrugInfoFormatter,
    top_k: usize,
    min_symptoms: usize,
}

impl Advisor {
    pub fn new(
        artifacts: Arc<ArtifactBundle>,
        knowledge: Arc<KnowledgeBase>,
        config: &AdvisorConfig,
    ) -> Self {
        Self {
            classifier: DiseaseClassifier::new(artifacts),
            knowledge,
            formatter: DrugInfoFormatter::new(config.max_description_chars),
            top_k: config.top_k,
            min_symptoms: config.min_symptoms,
        }
    }

    pub fn classifier(&self) -> &DiseaseClassifier {
        &self.classifier
    }

    /// Folds this turn's mentions into the session and evaluates the result.
    pub fn consult<S: AsRef<str>>(
        &self,
        state: SessionState,
        mentions: &[S],
    ) -> Result<(SessionState, ConsultationReport)> {
        let state = state.record_turn(mentions);
        let outcome = self.evaluate(&state.symptoms)?;

        let kind: &'static str = outcome.kind().into();
        info!(
            "Turn {} concluded {} with {} symptoms",
            state.turns,
            kind,
            state.symptoms.len()
        );

        let symptoms = state.symptoms.iter().map(str::to_string).collect();
        Ok((state, ConsultationReport::new(symptoms, outcome)))
    }

    pub fn evaluate(&self, symptoms: &SymptomSet) -> Result<ConsultationOutcome> {
        if symptoms.is_empty() {
            return Ok(ConsultationOutcome::NoSymptoms);
        }
        if symptoms.len() < self.min_symptoms {
            return Ok(ConsultationOutcome::InsufficientSymptoms {
                have: symptoms.len(),
                need: self.min_symptoms,
            });
        }

        let condition = self.classifier.classify_set(symptoms)?;
        let drugs = lookup(condition.raw(), &self.knowledge);
        if drugs.is_empty() {
            return Ok(ConsultationOutcome::NoDrugsFound { condition });
        }

        let ranked = rank(drugs, symptoms);
        let shortlist = if ranked.is_empty() {
            debug!("No drug for {} mentions the symptoms, keeping source order", condition);
            drugs.clone()
        } else {
            // The formatter caps at top_k after dropping near-duplicate names.
            select_top(drugs, &ranked, ranked.len())
        };

        let formatted = self.recommend(&shortlist, &condition.lookup_key());
        Ok(ConsultationOutcome::Recommendation {
            condition,
            ranked,
            formatted,
        })
    }

    fn recommend(&self, drugs: &DrugMap, condition: &str) -> String {
        self.formatter.format(drugs, condition, self.top_k)
    }
}
