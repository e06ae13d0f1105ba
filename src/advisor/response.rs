use super::advice::advice_for;
use super::outcome::ConsultationOutcome;
use crate::diagnosis::ConditionLabel;

pub const NO_MEDICATIONS: &str = "No specific medications found for this condition.";
pub const DISCLAIMER: &str = "*Note: Consult a healthcare professional before taking any medication.*";


/// Markdown reply for the chat surface.
pub fn render_response(outcome: &ConsultationOutcome) -> String {
    match outcome {
        ConsultationOutcome::NoSymptoms => {
            "Please describe your ear, nose or throat symptoms so I can help.".to_string()
        }
        ConsultationOutcome::InsufficientSymptoms { have, need } => format!(
            "I need at least {need} symptoms before suggesting a condition (so far I have {have}). \
             Could you describe anything else you are experiencing?"
        ),
        ConsultationOutcome::NoDrugsFound { condition } => render_diagnosis(condition, NO_MEDICATIONS),
        ConsultationOutcome::Recommendation {
            condition,
            formatted,
            ..
        } => render_diagnosis(
            condition,
            &format!("### Recommended Medications\n{formatted}\n"),
        ),
    }
}

fn render_diagnosis(condition: &ConditionLabel, drug_section: &str) -> String {
    let name = condition.lookup_key();
    format!(
        "### Predicted Condition\n\
         **Disease:** {name}\n\n\
         {drug_section}\n\
         ### Medical Advice\n\
         {advice}\n\n\
         {DISCLAIMER}",
        advice = advice_for(&name),
    )
}
