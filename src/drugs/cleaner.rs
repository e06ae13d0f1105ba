use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").expect("valid regex");
    static ref ESCAPED_UNICODE: Regex = Regex::new(r"\\u[0-9a-fA-F]{4}").expect("valid regex");
    static ref SENTENCE_END: Regex = Regex::new(r"[.!?]\s+").expect("valid regex");
}

/// Fragments that leak out of label PDFs and carry no meaning.
const STRAY_FRAGMENTS: &[&str] = &["\u{10}", "\u{5}1", "\u{2022}"];

/// Private-use glyph that label extraction emits in place of a list dash.
const CORRUPTED_BULLET: char = '\u{100051}';


pub fn clean_label_text(raw: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(raw, " ");
    let mut cleaned = ESCAPED_UNICODE.replace_all(collapsed.trim(), "").into_owned();

    for fragment in STRAY_FRAGMENTS {
        cleaned = cleaned.replace(fragment, "");
    }

    cleaned.replace(CORRUPTED_BULLET, "-")
}


/// Splits after `.`, `!` or `?` followed by whitespace.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_END.find_iter(text) {
        // punctuation is ASCII, so +1 stays on a char boundary
        sentences.push(&text[start..m.start() + 1]);
        start = m.end();
    }
    sentences.push(&text[start..]);

    sentences
}


/// Keeps the first occurrence of each sentence, rejoined with single spaces.
pub fn remove_duplicate_sentences(text: &str) -> String {
    let mut seen = HashSet::new();

    split_sentences(text)
        .into_iter()
        .filter(|sentence| seen.insert(*sentence))
        .collect::<Vec<_>>()
        .join(" ")
}
