use std::collections::HashSet;

use tracing::debug;

use super::cleaner::{clean_label_text, remove_duplicate_sentences};
use super::models::DrugMap;
use crate::symptoms::canonical_drug_name;
use crate::utils::{safe_truncate, title_case};
use crate::MAX_DESCRIPTION_CHARS;


pub struct DrugInfoFormatter {
    max_chars: usize,
}

impl DrugInfoFormatter {
    #[must_use]
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    pub fn header(condition: &str) -> String {
        format!("Recommended Drugs for {}:\n", title_case(condition))
    }

    /// Cleaned, sentence-deduplicated text capped at `max_chars` characters.
    /// The cap may cut a word in half.
    pub fn summarize(&self, raw: &str) -> String {
        let cleaned = remove_duplicate_sentences(&clean_label_text(raw));
        safe_truncate(&cleaned, self.max_chars)
    }

    /// Numbered Markdown list of at most `top_k` drugs, skipping near-duplicate names.
    pub fn format(&self, drugs: &DrugMap, condition: &str, top_k: usize) -> String {
        let mut lines = vec![Self::header(condition)];
        let mut seen = HashSet::new();
        let mut emitted = 0;

        for (name, entry) in drugs.iter() {
            if emitted >= top_k {
                break;
            }
            if !seen.insert(canonical_drug_name(name)) {
                debug!("Skipping near-duplicate drug {}", name);
                continue;
            }

            emitted += 1;
            let summary = self.summarize(&entry.combined_text());
            lines.push(format!("{}. **{}**\n   - {}\n", emitted, title_case(name), summary));
        }

        lines.join("\n")
    }
}

impl Default for DrugInfoFormatter {
    fn default() -> Self {
        Self::new(MAX_DESCRIPTION_CHARS)
    }
}


pub fn format_drug_info(drugs: &DrugMap, condition: &str, top_k: usize) -> String {
    DrugInfoFormatter::default().format(drugs, condition, top_k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drugs::models::DrugEntry;

    fn fixture() -> DrugMap {
        DrugMap::new()
            .with_drug(
                "Paracetamol",
                DrugEntry::new()
                    .with_section("indications_and_usage", "Used for pain and fever. Used for pain and fever.")
                    .with_section("warnings_and_cautions", vec!["May cause liver issues.", "Avoid alcohol."]),
            )
            .with_drug(
                "Ibuprofen",
                DrugEntry::new()
                    .with_section("indications_and_usage", "Pain relief. Also helps with inflammation.")
                    .with_section("adverse_reactions", "Stomach upset and bleeding possible."),
            )
            .with_drug(
                "Anti-Itch",
                DrugEntry::new()
                    .with_section("indications_and_usage", "Relieves itching. Relieves itching.")
                    .with_section("warnings_and_cautions", "Use externally only."),
            )
            .with_drug(
                "anti itch",
                DrugEntry::new().with_section("indications_and_usage", "Duplicate label."),
            )
    }

    fn entry_count(formatted: &str) -> usize {
        formatted.lines().filter(|l| l.contains(". **")).count()
    }

    #[test]
    fn test_format_layout() {
        let formatted = format_drug_info(&fixture(), "otitis media", 2);

        assert_eq!(
            formatted,
            "Recommended Drugs for Otitis Media:\n\n\
             1. **Paracetamol**\n   - Used for pain and fever. May cause liver issues. Avoid alcohol.\n\n\
             2. **Ibuprofen**\n   - Pain relief. Also helps with inflammation. Stomach upset and bleeding possible.\n"
        );
    }

    #[test]
    fn test_format_skips_near_duplicate_names() {
        let formatted = format_drug_info(&fixture(), "Otitis Media", 10);

        assert!(formatted.contains("3. **Anti-Itch**"));
        assert!(!formatted.contains("Duplicate label"));
        assert_eq!(entry_count(&formatted), 3);
    }

    #[test]
    fn test_format_caps_at_top_k() {
        let drugs: DrugMap = ["A", "B", "C", "D", "E"]
            .into_iter()
            .map(|name| (name, DrugEntry::new().with_section("s", "text")))
            .collect();

        let formatted = format_drug_info(&drugs, "Sinusitis", 3);
        assert_eq!(entry_count(&formatted), 3);
        assert!(formatted.contains("3. **C**"));
        assert!(!formatted.contains("4. **D**"));

        assert_eq!(entry_count(&format_drug_info(&drugs, "Sinusitis", 0)), 0);
    }

    #[test]
    fn test_format_truncates_each_description() {
        let long = "word ".repeat(400);
        let drugs = DrugMap::new()
            .with_drug("Long", DrugEntry::new().with_section("description", long.as_str()));

        let formatted = format_drug_info(&drugs, "Tinnitus", 3);
        let description = formatted
            .lines()
            .find_map(|l| l.strip_prefix("   - "))
            .unwrap();
        assert_eq!(description.chars().count(), 500);
    }

    #[test]
    fn test_format_empty_drugs_is_header_only() {
        let formatted = format_drug_info(&DrugMap::new(), "rare condition", 3);
        assert_eq!(formatted, "Recommended Drugs for Rare Condition:\n");
    }

    #[test]
    fn test_summarize_custom_cap() {
        let formatter = DrugInfoFormatter::new(10);
        assert_eq!(formatter.summarize("Relieves ear pain. Relieves ear pain."), "Relieves e");
    }
}
