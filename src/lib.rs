

pub mod advisor;
pub mod core;
pub mod diagnosis;
pub mod drugs;
pub mod providers;
pub mod symptoms;
pub mod utils;

pub use utils::{safe_truncate, title_case};


pub use advisor::{Advisor, ConsultationOutcome, ConsultationReport, OutcomeKind, render_response};
pub use crate::core::config::AdvisorConfig;
pub use crate::core::error::{AdvisorError, Result};
pub use diagnosis::{ArtifactBundle, ConditionLabel, DiseaseClassifier};
pub use drugs::{DrugEntry, DrugMap, KnowledgeBase, RankedDrug, TextOrList};
pub use symptoms::{SessionState, SymptomSet};


pub const DEFAULT_TOP_K: usize = 3;


pub const MAX_DESCRIPTION_CHARS: usize = 500;


pub const DEFAULT_MIN_SYMPTOMS: usize = 2;
