//! Normalized page snapshots consumed by the scoring engine.
//!
//! A snapshot is produced by an external fetch/parse/render pipeline and
//! describes one page under one render mode. Every field has an explicit
//! default, so a collaborator that could not determine a signal leaves the
//! default in place and the scorers treat it as lost points rather than an
//! error.
//!
//! # Example
//!
//! ```rust
//! use crawlability::snapshot::AnalysisSnapshot;
//!
//! let snapshot = AnalysisSnapshot::from_json(r#"{
//!     "url": "https://example.com",
//!     "content": { "word_count": 640, "paragraphs": 7 }
//! }"#).unwrap();
//!
//! assert_eq!(snapshot.content.word_count, 640);
//! assert_eq!(snapshot.content.links, 0);
//! assert!(!snapshot.crawler.has_robots_txt);
//! ```

pub mod text;
pub mod validation;

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::errors::{Error, Result};

pub use validation::validate_snapshot;

/// How the snapshot was captured
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Raw HTML as served, no script execution
    #[default]
    Static,
    /// DOM after a headless browser executed the page's scripts
    Rendered,
}

/// Immutable record of one page's extractable attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSnapshot {
    /// Page URL; empty when the producer did not record it
    pub url: String,
    pub render_mode: RenderMode,
    pub content: ContentSignals,
    pub structure: StructureSignals,
    pub meta: MetaSignals,
    pub scripts: ScriptSignals,
    pub crawler: CrawlerSignals,
}

impl AnalysisSnapshot {
    /// Deserialize a snapshot from JSON and check its invariants.
    ///
    /// Negative counts are rejected by deserialization (counts are
    /// unsigned); the remaining invariants are checked by
    /// [`validate_snapshot`].
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: AnalysisSnapshot = serde_json::from_str(json)
            .map_err(|e| Error::precondition(format!("snapshot is not well-formed: {}", e)))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Serialize the snapshot to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the data-model invariants of this snapshot
    pub fn validate(&self) -> Result<()> {
        validate_snapshot(self)
    }
}

/// Text and element counts extracted from the page body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentSignals {
    pub text_content: String,
    pub character_count: u32,
    pub word_count: u32,
    pub estimated_tokens: u32,
    pub paragraphs: u32,
    pub links: u32,
    pub images: u32,
    pub tables: u32,
    pub lists: u32,
}

impl ContentSignals {
    /// Whether the page carries images, tables or lists
    pub fn has_rich_media(&self) -> bool {
        self.images > 0 || self.tables > 0 || self.lists > 0
    }

    /// Estimated tokens per word, `None` when either count is unknown
    pub fn token_word_ratio(&self) -> Option<f64> {
        if self.estimated_tokens == 0 || self.word_count == 0 {
            return None;
        }
        Some(self.estimated_tokens as f64 / self.word_count as f64)
    }
}

/// One heading in document order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// 1 for `<h1>` through 6 for `<h6>`
    pub level: u8,
    #[serde(default)]
    pub text: String,
}

impl Heading {
    pub fn new(level: u8, text: impl Into<String>) -> Self {
        Self {
            level,
            text: text.into(),
        }
    }
}

/// Document structure signals
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructureSignals {
    /// Distinct semantic element names present (`header`, `main`, `article`, ...)
    pub semantic_elements: BTreeSet<String>,
    /// Headings in document order
    pub headings: Vec<Heading>,
    pub total_elements: u32,
    pub dom_depth: u32,
    pub has_proper_structure: bool,
}

impl StructureSignals {
    /// Number of headings at the given level
    pub fn heading_count(&self, level: u8) -> usize {
        self.headings.iter().filter(|h| h.level == level).count()
    }
}

/// Structured data vocabularies recognized on a page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StructuredDataFormat {
    JsonLd,
    Microdata,
    Rdfa,
}

impl StructuredDataFormat {
    pub fn label(&self) -> &'static str {
        match self {
            StructuredDataFormat::JsonLd => "JSON-LD",
            StructuredDataFormat::Microdata => "Microdata",
            StructuredDataFormat::Rdfa => "RDFa",
        }
    }
}

/// One structured data block with its declared Schema.org type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredDataItem {
    pub format: StructuredDataFormat,
    /// Schema.org `@type`, empty when the block declares none
    #[serde(default)]
    pub schema_type: String,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl StructuredDataItem {
    pub fn new(format: StructuredDataFormat, schema_type: impl Into<String>) -> Self {
        Self {
            format,
            schema_type: schema_type.into(),
            payload: serde_json::Value::Null,
        }
    }
}

/// Meta tags and structured data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaSignals {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub open_graph: BTreeMap<String, String>,
    pub twitter_card: BTreeMap<String, String>,
    pub structured_data: Vec<StructuredDataItem>,
    pub has_json_ld: bool,
    pub has_microdata: bool,
    pub has_rdfa: bool,
}

impl MetaSignals {
    /// Presence flag for a format, or any attached payload of that format
    pub fn has_format(&self, format: StructuredDataFormat) -> bool {
        let flag = match format {
            StructuredDataFormat::JsonLd => self.has_json_ld,
            StructuredDataFormat::Microdata => self.has_microdata,
            StructuredDataFormat::Rdfa => self.has_rdfa,
        };
        flag || self.structured_data.iter().any(|item| item.format == format)
    }

    /// Whether any structured data format is present
    pub fn has_structured_data(&self) -> bool {
        [
            StructuredDataFormat::JsonLd,
            StructuredDataFormat::Microdata,
            StructuredDataFormat::Rdfa,
        ]
        .iter()
        .any(|format| self.has_format(*format))
    }

    /// Distinct non-empty Schema.org types declared across all blocks
    pub fn schema_types(&self) -> BTreeSet<&str> {
        self.structured_data
            .iter()
            .map(|item| item.schema_type.trim())
            .filter(|t| !t.is_empty())
            .collect()
    }

    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    pub fn has_description(&self) -> bool {
        !self.description.trim().is_empty()
    }

    pub fn has_canonical_url(&self) -> bool {
        !self.canonical_url.trim().is_empty()
    }
}

/// A client-side framework reported by the detection collaborator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectedFramework {
    pub name: String,
    /// Detection confidence in `[0.0, 1.0]`
    pub confidence: f64,
}

impl DetectedFramework {
    pub fn new(name: impl Into<String>, confidence: f64) -> Self {
        Self {
            name: name.into(),
            confidence,
        }
    }
}

/// Script usage and rendering indicators
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptSignals {
    pub inline_scripts: u32,
    pub external_scripts: u32,
    pub frameworks: Vec<DetectedFramework>,
    pub is_spa: bool,
    pub has_ajax: bool,
    pub dynamic_content_detected: bool,
}

impl ScriptSignals {
    pub fn total_scripts(&self) -> u32 {
        self.inline_scripts.saturating_add(self.external_scripts)
    }

    /// Frameworks detected with at least the given confidence, most confident first
    pub fn confirmed_frameworks(&self, min_confidence: f64) -> Vec<&DetectedFramework> {
        let mut confirmed: Vec<&DetectedFramework> = self
            .frameworks
            .iter()
            .filter(|f| f.confidence >= min_confidence)
            .collect();
        confirmed.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.name.cmp(&b.name))
        });
        confirmed
    }
}

/// Crawler directive files reachable from the page's origin
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrawlerSignals {
    pub has_robots_txt: bool,
    /// robots.txt does not disallow the page for generic crawlers
    pub robots_allows: bool,
    pub has_sitemap: bool,
    pub has_llms_txt: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_all_defaults() {
        let snapshot = AnalysisSnapshot::from_json("{}").unwrap();
        assert_eq!(snapshot, AnalysisSnapshot::default());
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.render_mode, RenderMode::Static);
    }

    #[test]
    fn negative_counts_are_rejected() {
        let err = AnalysisSnapshot::from_json(r#"{"content": {"word_count": -3}}"#).unwrap_err();
        assert!(err.is_precondition());
        assert!(err.to_string().contains("not well-formed"));
    }

    #[test]
    fn format_presence_uses_flags_and_payloads() {
        let meta = MetaSignals {
            has_microdata: true,
            structured_data: vec![StructuredDataItem::new(
                StructuredDataFormat::JsonLd,
                "Organization",
            )],
            ..Default::default()
        };
        assert!(meta.has_format(StructuredDataFormat::JsonLd));
        assert!(meta.has_format(StructuredDataFormat::Microdata));
        assert!(!meta.has_format(StructuredDataFormat::Rdfa));
        assert!(meta.has_structured_data());
    }

    #[test]
    fn schema_types_are_distinct_and_trimmed() {
        let meta = MetaSignals {
            structured_data: vec![
                StructuredDataItem::new(StructuredDataFormat::JsonLd, " Article "),
                StructuredDataItem::new(StructuredDataFormat::JsonLd, "Article"),
                StructuredDataItem::new(StructuredDataFormat::Microdata, ""),
            ],
            ..Default::default()
        };
        let types: Vec<&str> = meta.schema_types().into_iter().collect();
        assert_eq!(types, vec!["Article"]);
    }

    #[test]
    fn token_ratio_requires_both_counts() {
        let mut content = ContentSignals {
            estimated_tokens: 300,
            ..Default::default()
        };
        assert_eq!(content.token_word_ratio(), None);
        content.word_count = 250;
        assert_eq!(content.token_word_ratio(), Some(1.2));
    }

    #[test]
    fn confirmed_frameworks_sorted_by_confidence() {
        let scripts = ScriptSignals {
            frameworks: vec![
                DetectedFramework::new("Vue", 0.6),
                DetectedFramework::new("jQuery", 0.2),
                DetectedFramework::new("React", 0.9),
            ],
            ..Default::default()
        };
        let names: Vec<&str> = scripts
            .confirmed_frameworks(0.5)
            .into_iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, vec!["React", "Vue"]);
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let snapshot = AnalysisSnapshot {
            url: "https://example.com/docs".to_string(),
            render_mode: RenderMode::Rendered,
            structure: StructureSignals {
                headings: vec![Heading::new(1, "Docs"), Heading::new(2, "Install")],
                ..Default::default()
            },
            ..Default::default()
        };
        let json = snapshot.to_json().unwrap();
        assert!(json.contains("\"rendered\""));
        assert_eq!(AnalysisSnapshot::from_json(&json).unwrap(), snapshot);
    }
}
