//! Text normalization shared by the comparators.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{N}]+(?:['’][\p{L}\p{N}]+)*").unwrap());
static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+(?:\s+|$)|\n+").unwrap());

/// Collapse runs of whitespace into single spaces and trim the ends
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").trim().to_string()
}

/// Distinct lower-cased word tokens
pub fn word_tokens(text: &str) -> BTreeSet<String> {
    WORD.find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Sentences with normalized whitespace, empty fragments dropped
pub fn sentences(text: &str) -> Vec<String> {
    SENTENCE_BREAK
        .split(text)
        .map(normalize_whitespace)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Jaccard index of two token sets scaled to 0-100.
///
/// Two empty sets are identical (100); one empty set shares nothing (0).
pub fn jaccard_percent(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 100.0;
    }
    let intersection = a.intersection(b).count();
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    intersection as f64 / union as f64 * 100.0
}
