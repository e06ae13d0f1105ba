use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};
use uuid::Uuid;

use crate::diagnosis::ConditionLabel;
use crate::drugs::RankedDrug;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumString, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OutcomeKind {
    NoSymptoms,
    InsufficientSymptoms,
    NoDrugsFound,
    Recommendation,
}


/// What one consultation turn concluded. None of these are errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConsultationOutcome {
    /// Nothing usable was mentioned yet.
    NoSymptoms,

    /// Too few symptoms to classify.
    InsufficientSymptoms { have: usize, need: usize },

    /// The condition is known but nothing is recorded for it.
    NoDrugsFound { condition: ConditionLabel },

    Recommendation {
        condition: ConditionLabel,
        ranked: Vec<RankedDrug>,
        formatted: String,
    },
}

impl ConsultationOutcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Self::NoSymptoms => OutcomeKind::NoSymptoms,
            Self::InsufficientSymptoms { .. } => OutcomeKind::InsufficientSymptoms,
            Self::NoDrugsFound { .. } => OutcomeKind::NoDrugsFound,
            Self::Recommendation { .. } => OutcomeKind::Recommendation,
        }
    }

    pub fn condition(&self) -> Option<&ConditionLabel> {
        match self {
            Self::NoDrugsFound { condition } | Self::Recommendation { condition, .. } => Some(condition),
            _ => None,
        }
    }
}


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsultationReport {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub symptoms: Vec<String>,
    pub outcome: ConsultationOutcome,
}

impl ConsultationReport {
    pub fn new(symptoms: Vec<String>, outcome: ConsultationOutcome) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            symptoms,
            outcome,
        }
    }
}
