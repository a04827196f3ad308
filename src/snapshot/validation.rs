//! Invariant checks for snapshots handed to the comparators.
//!
//! Violations are accumulated so a producer sees every problem with a
//! snapshot in one error instead of fixing them one at a time.

use super::{AnalysisSnapshot, StructuredDataFormat};
use crate::errors::{Error, Result};

/// Validate a snapshot, reporting every violated invariant.
pub fn validate_snapshot(snapshot: &AnalysisSnapshot) -> Result<()> {
    let violations = collect_violations(snapshot);
    if violations.is_empty() {
        return Ok(());
    }

    let subject = if snapshot.url.is_empty() {
        "snapshot".to_string()
    } else {
        format!("snapshot for {}", snapshot.url)
    };
    Err(Error::precondition(format!(
        "{} violates {} invariant(s): {}",
        subject,
        violations.len(),
        violations.join("; ")
    )))
}

/// Pure function: collect all invariant violations of a snapshot
pub fn collect_violations(snapshot: &AnalysisSnapshot) -> Vec<String> {
    let mut violations = Vec::new();

    for (index, heading) in snapshot.structure.headings.iter().enumerate() {
        if !(1..=6).contains(&heading.level) {
            violations.push(format!(
                "heading #{} has level {} (expected 1-6)",
                index + 1,
                heading.level
            ));
        }
    }

    for framework in &snapshot.scripts.frameworks {
        if !framework.confidence.is_finite() || !(0.0..=1.0).contains(&framework.confidence) {
            violations.push(format!(
                "framework '{}' has confidence {} (expected 0.0-1.0)",
                framework.name, framework.confidence
            ));
        }
    }

    let content = &snapshot.content;
    if content.character_count > 0 && content.word_count > content.character_count {
        violations.push(format!(
            "word count {} exceeds character count {}",
            content.word_count, content.character_count
        ));
    }

    if snapshot.crawler.robots_allows && !snapshot.crawler.has_robots_txt {
        violations.push("robots.txt marked as allowing but not present".to_string());
    }

    for item in &snapshot.meta.structured_data {
        if item.format == StructuredDataFormat::JsonLd
            && !(item.payload.is_null() || item.payload.is_object() || item.payload.is_array())
        {
            violations.push(format!(
                "JSON-LD block '{}' payload must be an object or array",
                item.schema_type
            ));
        }
    }

    violations
}
