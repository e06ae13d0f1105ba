use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_LETTER: Regex = Regex::new(r"[^a-zA-Z\s]").expect("valid regex");
    static ref LIST_SEPARATOR: Regex = Regex::new(r"[,;\n]").expect("valid regex");
}


/// Lowercases, drops everything but ASCII letters and whitespace, trims.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    NON_LETTER.replace_all(&lowered, "").trim().to_string()
}


pub fn canonical_drug_name(name: &str) -> String {
    name.to_lowercase().replace(['-', ' '], "")
}


/// Splits an extracted symptom list ("ear pain, fever; dizziness") into phrases.
pub fn split_symptom_list(text: &str) -> Vec<String> {
    LIST_SEPARATOR
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_punctuation_and_digits() {
        assert_eq!(normalize("  Ear-Pain (3 days)! "), "earpain  days");
        assert_eq!(normalize("Sore Throat."), "sore throat");
    }

    #[test]
    fn test_normalize_drops_non_latin() {
        assert_eq!(normalize("fièvre"), "fivre");
        assert_eq!(normalize("ушная боль"), "");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   123 !!"), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        let inputs = [
            "I have ringing in my ears and dizziness.",
            "  NASAL   congestion\t",
            "ear pain, fever; 38.5C",
            "Ünïcödé text",
            "",
        ];
        for input in inputs {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_canonical_drug_name() {
        assert_eq!(canonical_drug_name("Anti-Itch"), "antiitch");
        assert_eq!(canonical_drug_name("Anti Itch"), "antiitch");
        assert_eq!(canonical_drug_name("IBUPROFEN"), "ibuprofen");
    }

    #[test]
    fn test_split_symptom_list() {
        assert_eq!(
            split_symptom_list("ear pain, fever;  dizziness ,"),
            vec!["ear pain", "fever", "dizziness"]
        );
        assert!(split_symptom_list(" , ").is_empty());
    }
}
