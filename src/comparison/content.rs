//! Static vs rendered comparison of one page.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, info};

use super::similarity::{structure_similarity, text_similarity};
use crate::config::ContentComparisonConfig;
use crate::errors::{Error, Result};
use crate::priority::Score0To1;
use crate::snapshot::text::sentences;
use crate::snapshot::AnalysisSnapshot;

/// How strongly a page relies on JavaScript to show its content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DependencyLevel {
    Minimal,
    Low,
    Moderate,
    High,
    Critical,
}

impl DependencyLevel {
    pub fn from_score(score: Score0To1) -> Self {
        let value = score.value();
        if value < 0.1 {
            DependencyLevel::Minimal
        } else if value < 0.3 {
            DependencyLevel::Low
        } else if value < 0.6 {
            DependencyLevel::Moderate
        } else if value < 0.8 {
            DependencyLevel::High
        } else {
            DependencyLevel::Critical
        }
    }

    pub fn verdict(&self) -> &'static str {
        match self {
            DependencyLevel::Minimal => "Excellent for scrapers: minimal JavaScript dependency",
            DependencyLevel::Low => "Good for scrapers: most content is available without JavaScript",
            DependencyLevel::Moderate => {
                "Moderate scraper accessibility: some content requires JavaScript"
            }
            DependencyLevel::High => {
                "Poor scraper accessibility: significant content depends on JavaScript"
            }
            DependencyLevel::Critical => "Critical: most content requires JavaScript execution",
        }
    }
}

impl fmt::Display for DependencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DependencyLevel::Minimal => "Minimal",
            DependencyLevel::Low => "Low",
            DependencyLevel::Moderate => "Moderate",
            DependencyLevel::High => "High",
            DependencyLevel::Critical => "Critical",
        };
        f.write_str(label)
    }
}

/// Outcome of comparing a static snapshot with its rendered counterpart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentComparisonResult {
    /// Word-token overlap, 0-100
    pub text_similarity_score: f64,
    /// Mean relative similarity of structural counts, 0-100
    pub structure_similarity_score: f64,
    /// Rendered-only sentences, longest first
    pub missing_in_static: Vec<String>,
    pub is_js_dependent: bool,
    /// Characters of extracted text in each snapshot
    pub static_content_length: u64,
    pub rendered_content_length: u64,
    /// Rendered minus static length; negative when rendering removes text
    pub content_difference: i64,
    /// Structural additions made by rendering, e.g. "2 additional H2 heading(s)"
    pub added_elements: Vec<String>,
}

impl ContentComparisonResult {
    /// 0.0 (no dependency) to 1.0 (fully dependent).
    ///
    /// Weighted 70/30 between text dissimilarity and the share of rendered
    /// text the static HTML lacks.
    pub fn dependency_score(&self) -> Score0To1 {
        if self.rendered_content_length == 0 {
            return Score0To1::new(0.0);
        }
        if self.static_content_length == 0 {
            return Score0To1::new(1.0);
        }
        let from_similarity = 1.0 - self.text_similarity_score / 100.0;
        let content_ratio = (self.content_difference as f64 / self.rendered_content_length as f64)
            .clamp(0.0, 1.0);
        Score0To1::new(from_similarity * 0.7 + content_ratio * 0.3)
    }

    pub fn dependency_level(&self) -> DependencyLevel {
        DependencyLevel::from_score(self.dependency_score())
    }

    pub fn verdict(&self) -> &'static str {
        self.dependency_level().verdict()
    }
}

/// Measures what a headless render adds to the static HTML
#[derive(Debug, Clone, Default)]
pub struct ContentComparator {
    config: ContentComparisonConfig,
}

impl ContentComparator {
    pub fn new(config: ContentComparisonConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ContentComparisonConfig {
        &self.config
    }

    /// Compare two captures of the same page.
    ///
    /// Both snapshots must satisfy the data-model invariants, and their URLs
    /// must match when both are recorded.
    pub fn compare(
        &self,
        static_snapshot: &AnalysisSnapshot,
        rendered: &AnalysisSnapshot,
    ) -> Result<ContentComparisonResult> {
        static_snapshot.validate()?;
        rendered.validate()?;
        check_same_page(static_snapshot, rendered)?;

        let text_similarity_score = text_similarity(static_snapshot, rendered);
        let structure_similarity_score = structure_similarity(static_snapshot, rendered);
        let is_js_dependent = text_similarity_score < self.config.js_dependency_threshold;

        let static_content_length = content_length(static_snapshot);
        let rendered_content_length = content_length(rendered);
        let content_difference = i64::try_from(rendered_content_length)
            .unwrap_or(i64::MAX)
            .saturating_sub(i64::try_from(static_content_length).unwrap_or(i64::MAX));

        let result = ContentComparisonResult {
            text_similarity_score,
            structure_similarity_score,
            missing_in_static: self.missing_fragments(static_snapshot, rendered),
            is_js_dependent,
            static_content_length,
            rendered_content_length,
            content_difference,
            added_elements: added_elements(static_snapshot, rendered),
        };

        info!(
            url = %rendered.url,
            text_similarity = result.text_similarity_score,
            structure_similarity = result.structure_similarity_score,
            js_dependent = result.is_js_dependent,
            "compared static and rendered content"
        );

        Ok(result)
    }

    fn missing_fragments(
        &self,
        static_snapshot: &AnalysisSnapshot,
        rendered: &AnalysisSnapshot,
    ) -> Vec<String> {
        let known: BTreeSet<String> = sentences(&static_snapshot.content.text_content)
            .into_iter()
            .collect();
        let fresh: BTreeSet<String> = sentences(&rendered.content.text_content)
            .into_iter()
            .filter(|s| !known.contains(s))
            .filter(|s| s.chars().count() > self.config.min_fragment_length)
            .collect();

        let mut missing: Vec<String> = fresh.into_iter().collect();
        // Longest first; the set already ordered equal lengths lexically
        missing.sort_by_key(|s| std::cmp::Reverse(s.chars().count()));
        missing.truncate(self.config.max_missing_fragments);

        debug!(count = missing.len(), "rendered-only fragments");
        missing
    }
}

fn normalized_url(url: &str) -> &str {
    url.trim().trim_end_matches('/')
}

fn check_same_page(a: &AnalysisSnapshot, b: &AnalysisSnapshot) -> Result<()> {
    if a.url.trim().is_empty() || b.url.trim().is_empty() {
        return Ok(());
    }
    if normalized_url(&a.url) != normalized_url(&b.url) {
        return Err(Error::precondition(format!(
            "static and rendered snapshots describe different pages: {} vs {}",
            a.url, b.url
        )));
    }
    Ok(())
}

/// Characters of extracted text, falling back to the reported count
fn content_length(snapshot: &AnalysisSnapshot) -> u64 {
    let text = snapshot.content.text_content.trim();
    if text.is_empty() {
        u64::from(snapshot.content.character_count)
    } else {
        text.chars().count() as u64
    }
}

/// Structural elements the rendered snapshot has beyond the static one
fn added_elements(static_snapshot: &AnalysisSnapshot, rendered: &AnalysisSnapshot) -> Vec<String> {
    let mut added = Vec::new();

    for level in 1..=6u8 {
        let before = static_snapshot.structure.heading_count(level);
        let after = rendered.structure.heading_count(level);
        if after > before {
            added.push(format!("{} additional H{} heading(s)", after - before, level));
        }
    }

    let before = &static_snapshot.content;
    let after = &rendered.content;
    let counts = [
        ("paragraph", before.paragraphs, after.paragraphs),
        ("link", before.links, after.links),
        ("image", before.images, after.images),
        ("table", before.tables, after.tables),
        ("list", before.lists, after.lists),
    ];
    for (label, before, after) in counts {
        if after > before {
            added.push(format!("{} additional {}(s)", after - before, label));
        }
    }

    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Heading;

    fn page(url: &str, text: &str) -> AnalysisSnapshot {
        let mut snapshot = AnalysisSnapshot {
            url: url.to_string(),
            ..Default::default()
        };
        snapshot.content.text_content = text.to_string();
        snapshot.content.word_count = text.split_whitespace().count() as u32;
        snapshot.content.character_count = text.chars().count() as u32;
        snapshot
    }

    #[test]
    fn identical_snapshots_are_not_js_dependent() {
        let snapshot = page("https://example.com", "Pricing starts at ten dollars per month.");
        let result = ContentComparator::default()
            .compare(&snapshot, &snapshot)
            .unwrap();
        assert_eq!(result.text_similarity_score, 100.0);
        assert_eq!(result.structure_similarity_score, 100.0);
        assert!(!result.is_js_dependent);
        assert!(result.missing_in_static.is_empty());
        assert!(result.added_elements.is_empty());
        assert_eq!(result.dependency_level(), DependencyLevel::Minimal);
    }

    #[test]
    fn rendered_only_sentences_are_reported_longest_first() {
        let static_page = page("https://example.com/", "Welcome to the shop.");
        let rendered = page(
            "https://example.com",
            "Welcome to the shop. Short one. Our catalogue lists four hundred products. Free shipping on every order above fifty dollars.",
        );
        let result = ContentComparator::default()
            .compare(&static_page, &rendered)
            .unwrap();
        assert_eq!(
            result.missing_in_static,
            vec![
                "Free shipping on every order above fifty dollars".to_string(),
                "Our catalogue lists four hundred products".to_string(),
            ]
        );
        assert!(result.is_js_dependent);
        assert!(result.content_difference > 0);
    }

    #[test]
    fn empty_static_shell_is_fully_dependent() {
        let static_page = page("https://app.example.com", "");
        let rendered = page("https://app.example.com", "Dashboard with live metrics and charts.");
        let result = ContentComparator::default()
            .compare(&static_page, &rendered)
            .unwrap();
        assert_eq!(result.text_similarity_score, 0.0);
        assert_eq!(result.dependency_score().value(), 1.0);
        assert_eq!(result.dependency_level(), DependencyLevel::Critical);
        assert!(result.verdict().starts_with("Critical"));
    }

    #[test]
    fn counts_only_rendered_page_agrees_on_dependency() {
        let static_page = AnalysisSnapshot::default();
        let mut rendered = AnalysisSnapshot::default();
        rendered.content.word_count = 2000;
        rendered.content.character_count = 12000;
        rendered.content.paragraphs = 40;

        let result = ContentComparator::default()
            .compare(&static_page, &rendered)
            .unwrap();
        assert_eq!(result.text_similarity_score, 0.0);
        assert!(result.is_js_dependent);
        assert_eq!(result.rendered_content_length, 12000);
        assert_eq!(result.dependency_level(), DependencyLevel::Critical);
    }

    #[test]
    fn counts_only_pages_of_equal_size_are_not_dependent() {
        let mut page = AnalysisSnapshot::default();
        page.content.word_count = 300;
        page.content.character_count = 1800;

        let result = ContentComparator::default().compare(&page, &page).unwrap();
        assert_eq!(result.text_similarity_score, 100.0);
        assert!(!result.is_js_dependent);
        assert_eq!(result.dependency_level(), DependencyLevel::Minimal);
    }

    #[test]
    fn different_urls_are_rejected() {
        let a = page("https://a.example.com", "text");
        let b = page("https://b.example.com", "text");
        let err = ContentComparator::default().compare(&a, &b).unwrap_err();
        assert!(err.is_precondition());
    }

    #[test]
    fn unknown_url_skips_the_page_check() {
        let a = page("", "text");
        let b = page("https://b.example.com", "text");
        assert!(ContentComparator::default().compare(&a, &b).is_ok());
    }

    #[test]
    fn invalid_snapshot_is_rejected() {
        let mut rendered = page("https://example.com", "text");
        rendered.structure.headings.push(Heading::new(9, "bad"));
        let err = ContentComparator::default()
            .compare(&page("https://example.com", "text"), &rendered)
            .unwrap_err();
        assert!(err.is_precondition());
    }

    #[test]
    fn structural_additions_are_listed() {
        let static_page = page("", "Docs");
        let mut rendered = page("", "Docs");
        rendered.structure.headings = vec![Heading::new(2, "a"), Heading::new(2, "b")];
        rendered.content.links = 3;
        let added = added_elements(&static_page, &rendered);
        assert_eq!(
            added,
            vec!["2 additional H2 heading(s)".to_string(), "3 additional link(s)".to_string()]
        );
    }

    #[test]
    fn dependency_score_blends_similarity_and_growth() {
        let result = ContentComparisonResult {
            text_similarity_score: 50.0,
            static_content_length: 50,
            rendered_content_length: 100,
            content_difference: 50,
            ..Default::default()
        };
        // 0.5 * 0.7 + 0.5 * 0.3
        assert!((result.dependency_score().value() - 0.5).abs() < 1e-9);
        assert_eq!(result.dependency_level(), DependencyLevel::Moderate);
    }
}
