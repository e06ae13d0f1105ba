use std::collections::HashMap;

use lazy_static::lazy_static;

pub const DEFAULT_ADVICE: &str = "Consult a doctor for an accurate diagnosis and treatment plan.";

lazy_static! {
    static ref ADVICE_BY_CONDITION: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("Common Cold", "Stay hydrated, rest, and take over-the-counter cold medications.");
        m.insert("Flu", "Drink plenty of fluids, rest, and consult a doctor if symptoms persist.");
        m.insert("Otitis Media", "If ear pain persists, consult an ENT specialist immediately.");
        m.insert("Allergic Rhinitis", "Avoid allergens, use antihistamines, and keep indoor air clean.");
        m
    };
}


/// General guidance for a title-cased condition name.
pub fn advice_for(condition: &str) -> &'static str {
    ADVICE_BY_CONDITION.get(condition).copied().unwrap_or(DEFAULT_ADVICE)
}
