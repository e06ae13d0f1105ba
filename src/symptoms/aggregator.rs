use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::normalizer::normalize;


/// Deduplicated symptom phrases of one conversation, stored in normalized form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SymptomSet {
    phrases: BTreeSet<String>,
}

impl SymptomSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the phrase was new.
    pub fn insert(&mut self, phrase: &str) -> bool {
        let normalized = normalize(phrase);
        if normalized.is_empty() {
            return false;
        }
        self.phrases.insert(normalized)
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.phrases.contains(&normalize(phrase))
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }

    /// Sorted, comma-joined form fed to the classifier.
    #[must_use]
    pub fn canonical(&self) -> String {
        self.phrases.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
    }
}

impl<S: AsRef<str>> FromIterator<S> for SymptomSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for phrase in iter {
            set.insert(phrase.as_ref());
        }
        set
    }
}

impl From<Vec<String>> for SymptomSet {
    fn from(phrases: Vec<String>) -> Self {
        phrases.into_iter().collect()
    }
}

impl From<SymptomSet> for Vec<String> {
    fn from(set: SymptomSet) -> Self {
        set.phrases.into_iter().collect()
    }
}


pub fn aggregate<S: AsRef<str>>(existing: SymptomSet, newly_mentioned: &[S]) -> SymptomSet {
    let mut merged = existing;
    let before = merged.len();

    for phrase in newly_mentioned {
        merged.insert(phrase.as_ref());
    }

    debug!(
        "Aggregated {} mentions: {} -> {} symptoms",
        newly_mentioned.len(),
        before,
        merged.len()
    );
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregate_collapses_duplicates() {
        let set = aggregate(SymptomSet::new(), &["ear pain", "fever", "fever"]);
        assert_eq!(set.len(), 2);
        assert!(set.contains("Ear Pain!"));
    }

    #[test]
    fn test_aggregate_skips_empty_after_normalization() {
        let set = aggregate(SymptomSet::new(), &["", "123", "!!", "dizziness"]);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_aggregate_idempotent() {
        let once = aggregate(SymptomSet::new(), &["sore throat"]);
        let twice = aggregate(once.clone(), &["sore throat"]);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_aggregate_order_independent() {
        let first = aggregate(aggregate(SymptomSet::new(), &["a", "b"]), &["c"]);
        let second = aggregate(aggregate(SymptomSet::new(), &["c", "b"]), &["a"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_aggregate_stores_normalized_form() {
        let set = aggregate(SymptomSet::new(), &["Ear Pain.", "ear pain"]);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["ear pain"]);
    }

    #[test]
    fn test_deserialize_renormalizes() {
        let set: SymptomSet = serde_json::from_str(r#"["Fever!", "fever", "  "]"#).unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.contains("fever"));
    }

    #[test]
    fn test_canonical_is_sorted() {
        let set: SymptomSet = ["tinnitus", "ear pain", "fever"].into_iter().collect();
        assert_eq!(set.canonical(), "ear pain, fever, tinnitus");
        assert_eq!(SymptomSet::new().canonical(), "");
    }
}
