//! Similarity measures shared by the content and site comparators.

use crate::snapshot::text::{jaccard_percent, word_tokens};
use crate::snapshot::AnalysisSnapshot;

/// Structural counts compared between two snapshots, in a fixed order
pub fn structure_counts(snapshot: &AnalysisSnapshot) -> [(&'static str, u64); 8] {
    let content = &snapshot.content;
    let structure = &snapshot.structure;
    [
        ("elements", u64::from(structure.total_elements)),
        ("headings", structure.headings.len() as u64),
        ("links", u64::from(content.links)),
        ("paragraphs", u64::from(content.paragraphs)),
        ("images", u64::from(content.images)),
        ("tables", u64::from(content.tables)),
        ("lists", u64::from(content.lists)),
        ("semantic elements", structure.semantic_elements.len() as u64),
    ]
}

/// `1 - |a - b| / max(a, b)`, or 1 when both are zero
pub fn relative_similarity(a: u64, b: u64) -> f64 {
    let max = a.max(b);
    if max == 0 {
        return 1.0;
    }
    1.0 - a.abs_diff(b) as f64 / max as f64
}

/// Mean relative similarity of the structural counts, scaled to 0-100
pub fn structure_similarity(a: &AnalysisSnapshot, b: &AnalysisSnapshot) -> f64 {
    let left = structure_counts(a);
    let right = structure_counts(b);
    let total: f64 = left
        .iter()
        .zip(right.iter())
        .map(|((_, x), (_, y))| relative_similarity(*x, *y))
        .sum();
    total / left.len() as f64 * 100.0
}

/// Jaccard overlap of the extracted text's word tokens, scaled to 0-100.
///
/// When neither snapshot carries extracted text, the reported word counts
/// stand in for it, then the character counts when both word counts are zero.
pub fn text_similarity(a: &AnalysisSnapshot, b: &AnalysisSnapshot) -> f64 {
    let left = word_tokens(&a.content.text_content);
    let right = word_tokens(&b.content.text_content);
    if left.is_empty() && right.is_empty() {
        return reported_size_similarity(a, b) * 100.0;
    }
    jaccard_percent(&left, &right)
}

fn reported_size_similarity(a: &AnalysisSnapshot, b: &AnalysisSnapshot) -> f64 {
    let (a, b) = (&a.content, &b.content);
    if a.word_count == 0 && b.word_count == 0 {
        relative_similarity(u64::from(a.character_count), u64::from(b.character_count))
    } else {
        relative_similarity(u64::from(a.word_count), u64::from(b.word_count))
    }
}
