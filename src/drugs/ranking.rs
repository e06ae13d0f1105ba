use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::models::{DrugMap, RankedDrug};
use crate::symptoms::SymptomSet;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").expect("valid regex");
}


/// Whitespace-collapsed, lowercased text of every section of a drug.
pub fn searchable_text(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").to_lowercase()
}


/// Number of symptoms found in `text`. Whitespace runs are collapsed on both sides.
pub fn relevance_score(text: &str, symptoms: &SymptomSet) -> usize {
    let haystack = searchable_text(text);
    symptoms
        .iter()
        .filter(|s| haystack.contains(&*WHITESPACE_RUN.replace_all(s, " ")))
        .count()
}


/// Drugs mentioning at least one symptom, best first. Ties keep knowledge base order.
pub fn rank(drugs: &DrugMap, symptoms: &SymptomSet) -> Vec<RankedDrug> {
    let mut ranked: Vec<RankedDrug> = drugs
        .iter()
        .filter_map(|(name, entry)| {
            let score = relevance_score(&entry.combined_text(), symptoms);
            (score > 0).then(|| RankedDrug {
                name: name.to_string(),
                score,
            })
        })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));

    debug!(
        "Ranked {} of {} drugs against {} symptoms",
        ranked.len(),
        drugs.len(),
        symptoms.len()
    );
    ranked
}


/// First `k` ranked drugs as an ordered map for the formatter.
pub fn select_top(drugs: &DrugMap, ranked: &[RankedDrug], k: usize) -> DrugMap {
    ranked
        .iter()
        .take(k)
        .filter_map(|r| drugs.get(&r.name).map(|entry| (r.name.as_str(), entry.clone())))
        .collect()
}
