//! Tier tables for the six component scorers.
//!
//! Every scorer reads its thresholds and point values from these tables
//! instead of hard-coding them, so the scraper and LLM profiles share one
//! set of rule semantics and differ only in how raw points are scaled.

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};

/// Award `points` when a value is at least `at_least`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    pub at_least: u32,
    pub points: u32,
}

impl Tier {
    pub const fn new(at_least: u32, points: u32) -> Self {
        Self { at_least, points }
    }
}

/// Award `points` when a value is at most `at_most`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CeilingTier {
    pub at_most: u32,
    pub points: u32,
}

impl CeilingTier {
    pub const fn new(at_most: u32, points: u32) -> Self {
        Self { at_most, points }
    }
}

/// First tier (lowest ceiling first) the value stays under
pub fn ceiling_tier(tiers: &[CeilingTier], value: u32) -> Option<&CeilingTier> {
    tiers.iter().find(|tier| value <= tier.at_most)
}

fn top_points(tiers: &[Tier]) -> u32 {
    tiers.first().map(|t| t.points).unwrap_or(0)
}

fn check_floor_tiers(name: &str, tiers: &[Tier], violations: &mut Vec<String>) {
    if tiers.is_empty() {
        violations.push(format!("{} must define at least one tier", name));
        return;
    }
    for pair in tiers.windows(2) {
        if pair[0].at_least <= pair[1].at_least || pair[0].points < pair[1].points {
            violations.push(format!(
                "{} tiers must be ordered from highest threshold to lowest with non-increasing points",
                name
            ));
            return;
        }
    }
    if tiers.iter().any(|t| t.points == 0) {
        violations.push(format!("{} tiers must award positive points", name));
    }
}

/// Static content rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRules {
    #[serde(default = "default_word_tiers")]
    pub word_tiers: Vec<Tier>,

    #[serde(default = "default_paragraph_tiers")]
    pub paragraph_tiers: Vec<Tier>,

    #[serde(default = "default_link_tiers")]
    pub link_tiers: Vec<Tier>,

    #[serde(default = "default_rich_media_points")]
    pub rich_media_points: u32,

    /// Highest tokens-per-word ratio that still counts as efficient
    #[serde(default = "default_max_token_ratio")]
    pub max_token_ratio: f64,

    #[serde(default = "default_token_efficiency_points")]
    pub token_efficiency_points: u32,
}

impl Default for ContentRules {
    fn default() -> Self {
        Self {
            word_tiers: default_word_tiers(),
            paragraph_tiers: default_paragraph_tiers(),
            link_tiers: default_link_tiers(),
            rich_media_points: default_rich_media_points(),
            max_token_ratio: default_max_token_ratio(),
            token_efficiency_points: default_token_efficiency_points(),
        }
    }
}

impl ContentRules {
    pub fn raw_max(&self) -> u32 {
        top_points(&self.word_tiers)
            + top_points(&self.paragraph_tiers)
            + top_points(&self.link_tiers)
            + self.rich_media_points
            + self.token_efficiency_points
    }

    fn collect_violations(&self, violations: &mut Vec<String>) {
        check_floor_tiers("content.word_tiers", &self.word_tiers, violations);
        check_floor_tiers("content.paragraph_tiers", &self.paragraph_tiers, violations);
        check_floor_tiers("content.link_tiers", &self.link_tiers, violations);
        if !self.max_token_ratio.is_finite() || self.max_token_ratio <= 0.0 {
            violations.push("content.max_token_ratio must be a positive number".to_string());
        }
    }
}

fn default_word_tiers() -> Vec<Tier> {
    vec![Tier::new(500, 10), Tier::new(200, 7), Tier::new(50, 4)]
}
fn default_paragraph_tiers() -> Vec<Tier> {
    vec![Tier::new(5, 5), Tier::new(2, 3), Tier::new(1, 1)]
}
fn default_link_tiers() -> Vec<Tier> {
    vec![Tier::new(10, 5), Tier::new(5, 3), Tier::new(1, 1)]
}
fn default_rich_media_points() -> u32 {
    3
}
fn default_max_token_ratio() -> f64 {
    1.5
}
fn default_token_efficiency_points() -> u32 {
    2
}

/// Semantic HTML rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticRules {
    #[serde(default = "default_element_tiers")]
    pub element_tiers: Vec<Tier>,

    #[serde(default = "default_single_h1_points")]
    pub single_h1_points: u32,

    #[serde(default = "default_multiple_h1_points")]
    pub multiple_h1_points: u32,

    #[serde(default = "default_nested_headings_points")]
    pub nested_headings_points: u32,

    #[serde(default = "default_skipped_headings_points")]
    pub skipped_headings_points: u32,

    #[serde(default = "default_proper_structure_points")]
    pub proper_structure_points: u32,

    #[serde(default = "default_max_dom_depth")]
    pub max_dom_depth: u32,

    #[serde(default = "default_dom_depth_points")]
    pub dom_depth_points: u32,
}

impl Default for SemanticRules {
    fn default() -> Self {
        Self {
            element_tiers: default_element_tiers(),
            single_h1_points: default_single_h1_points(),
            multiple_h1_points: default_multiple_h1_points(),
            nested_headings_points: default_nested_headings_points(),
            skipped_headings_points: default_skipped_headings_points(),
            proper_structure_points: default_proper_structure_points(),
            max_dom_depth: default_max_dom_depth(),
            dom_depth_points: default_dom_depth_points(),
        }
    }
}

impl SemanticRules {
    pub fn raw_max(&self) -> u32 {
        top_points(&self.element_tiers)
            + self.single_h1_points.max(self.multiple_h1_points)
            + self.nested_headings_points.max(self.skipped_headings_points)
            + self.proper_structure_points
            + self.dom_depth_points
    }

    fn collect_violations(&self, violations: &mut Vec<String>) {
        check_floor_tiers("semantic.element_tiers", &self.element_tiers, violations);
        if self.multiple_h1_points > self.single_h1_points {
            violations.push("semantic.multiple_h1_points cannot exceed single_h1_points".to_string());
        }
        if self.skipped_headings_points > self.nested_headings_points {
            violations.push(
                "semantic.skipped_headings_points cannot exceed nested_headings_points".to_string(),
            );
        }
    }
}

fn default_element_tiers() -> Vec<Tier> {
    vec![Tier::new(5, 8), Tier::new(3, 6), Tier::new(1, 3)]
}
fn default_single_h1_points() -> u32 {
    3
}
fn default_multiple_h1_points() -> u32 {
    1
}
fn default_nested_headings_points() -> u32 {
    4
}
fn default_skipped_headings_points() -> u32 {
    2
}
fn default_proper_structure_points() -> u32 {
    3
}
fn default_max_dom_depth() -> u32 {
    10
}
fn default_dom_depth_points() -> u32 {
    2
}

/// Structured data rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredDataRules {
    #[serde(default = "default_json_ld_points")]
    pub json_ld_points: u32,

    #[serde(default = "default_microdata_points")]
    pub microdata_points: u32,

    #[serde(default = "default_rdfa_points")]
    pub rdfa_points: u32,

    /// Credit per distinct recognized Schema.org type
    #[serde(default = "default_schema_type_points")]
    pub schema_type_points: u32,

    #[serde(default = "default_max_schema_type_points")]
    pub max_schema_type_points: u32,

    #[serde(default = "default_known_schema_types")]
    pub known_schema_types: Vec<String>,
}

impl Default for StructuredDataRules {
    fn default() -> Self {
        Self {
            json_ld_points: default_json_ld_points(),
            microdata_points: default_microdata_points(),
            rdfa_points: default_rdfa_points(),
            schema_type_points: default_schema_type_points(),
            max_schema_type_points: default_max_schema_type_points(),
            known_schema_types: default_known_schema_types(),
        }
    }
}

impl StructuredDataRules {
    pub fn raw_max(&self) -> u32 {
        self.json_ld_points + self.microdata_points + self.rdfa_points + self.max_schema_type_points
    }

    /// Whether a declared type is a recognized Schema.org type.
    ///
    /// Accepts bare names (`Article`) and vocabulary IRIs
    /// (`https://schema.org/Article`).
    pub fn is_known_type(&self, schema_type: &str) -> bool {
        let name = schema_type
            .trim()
            .rsplit('/')
            .next()
            .unwrap_or_default();
        !name.is_empty() && self.known_schema_types.iter().any(|known| known == name)
    }

    fn collect_violations(&self, violations: &mut Vec<String>) {
        if self.max_schema_type_points > 0 && self.schema_type_points == 0 {
            violations.push(
                "structured_data.schema_type_points must be positive when types earn credit"
                    .to_string(),
            );
        }
    }
}

fn default_json_ld_points() -> u32 {
    12
}
fn default_microdata_points() -> u32 {
    2
}
fn default_rdfa_points() -> u32 {
    2
}
fn default_schema_type_points() -> u32 {
    2
}
fn default_max_schema_type_points() -> u32 {
    4
}

pub fn default_known_schema_types() -> Vec<String> {
    [
        "Article",
        "BlogPosting",
        "Book",
        "BreadcrumbList",
        "Course",
        "Dataset",
        "Event",
        "FAQPage",
        "HowTo",
        "ImageObject",
        "ItemList",
        "JobPosting",
        "LocalBusiness",
        "NewsArticle",
        "Offer",
        "Organization",
        "Person",
        "Place",
        "Product",
        "QAPage",
        "Recipe",
        "Review",
        "Service",
        "SoftwareApplication",
        "TechArticle",
        "VideoObject",
        "WebPage",
        "WebSite",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Meta tag rules; lengths are counted in characters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaRules {
    #[serde(default = "default_title_min")]
    pub title_min_length: usize,

    #[serde(default = "default_title_max")]
    pub title_max_length: usize,

    #[serde(default = "default_description_min")]
    pub description_min_length: usize,

    #[serde(default = "default_description_max")]
    pub description_max_length: usize,

    /// Points for a title or description within its length range
    #[serde(default = "default_in_range_points")]
    pub in_range_points: u32,

    /// Points for a present but out-of-range title or description
    #[serde(default = "default_present_points")]
    pub present_points: u32,

    #[serde(default = "default_open_graph_tiers")]
    pub open_graph_tiers: Vec<Tier>,

    #[serde(default = "default_twitter_card_points")]
    pub twitter_card_points: u32,

    #[serde(default = "default_canonical_points")]
    pub canonical_points: u32,
}

impl Default for MetaRules {
    fn default() -> Self {
        Self {
            title_min_length: default_title_min(),
            title_max_length: default_title_max(),
            description_min_length: default_description_min(),
            description_max_length: default_description_max(),
            in_range_points: default_in_range_points(),
            present_points: default_present_points(),
            open_graph_tiers: default_open_graph_tiers(),
            twitter_card_points: default_twitter_card_points(),
            canonical_points: default_canonical_points(),
        }
    }
}

impl MetaRules {
    pub fn raw_max(&self) -> u32 {
        self.in_range_points * 2
            + top_points(&self.open_graph_tiers)
            + self.twitter_card_points
            + self.canonical_points
    }

    fn collect_violations(&self, violations: &mut Vec<String>) {
        check_floor_tiers("meta.open_graph_tiers", &self.open_graph_tiers, violations);
        if self.title_min_length > self.title_max_length {
            violations.push("meta.title_min_length exceeds title_max_length".to_string());
        }
        if self.description_min_length > self.description_max_length {
            violations.push("meta.description_min_length exceeds description_max_length".to_string());
        }
        if self.present_points > self.in_range_points {
            violations.push("meta.present_points cannot exceed in_range_points".to_string());
        }
    }
}

fn default_title_min() -> usize {
    30
}
fn default_title_max() -> usize {
    60
}
fn default_description_min() -> usize {
    120
}
fn default_description_max() -> usize {
    160
}
fn default_in_range_points() -> u32 {
    4
}
fn default_present_points() -> u32 {
    2
}
fn default_open_graph_tiers() -> Vec<Tier> {
    vec![Tier::new(4, 3), Tier::new(2, 2), Tier::new(1, 1)]
}
fn default_twitter_card_points() -> u32 {
    2
}
fn default_canonical_points() -> u32 {
    2
}

/// JavaScript dependency rules; an inverse component scored from the
/// absence of client-rendering indicators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JavaScriptRules {
    /// Points when no dynamic content markers were found
    #[serde(default = "default_no_dynamic_points")]
    pub no_dynamic_points: u32,

    /// Points for dynamic content on a non-SPA page with few scripts
    #[serde(default = "default_light_dynamic_points")]
    pub light_dynamic_points: u32,

    #[serde(default = "default_light_script_limit")]
    pub light_script_limit: u32,

    #[serde(default = "default_external_script_tiers")]
    pub external_script_tiers: Vec<CeilingTier>,

    #[serde(default = "default_no_ajax_points")]
    pub no_ajax_points: u32,

    #[serde(default = "default_spa_penalty")]
    pub spa_penalty: u32,

    #[serde(default = "default_framework_penalty")]
    pub framework_penalty: u32,

    /// Minimum detection confidence for a framework to count
    #[serde(default = "default_framework_confidence")]
    pub framework_confidence: f64,

    /// Largest deduction when rendering adds content the static HTML lacks
    #[serde(default = "default_rendered_gap_penalty")]
    pub rendered_gap_penalty: u32,
}

impl Default for JavaScriptRules {
    fn default() -> Self {
        Self {
            no_dynamic_points: default_no_dynamic_points(),
            light_dynamic_points: default_light_dynamic_points(),
            light_script_limit: default_light_script_limit(),
            external_script_tiers: default_external_script_tiers(),
            no_ajax_points: default_no_ajax_points(),
            spa_penalty: default_spa_penalty(),
            framework_penalty: default_framework_penalty(),
            framework_confidence: default_framework_confidence(),
            rendered_gap_penalty: default_rendered_gap_penalty(),
        }
    }
}

impl JavaScriptRules {
    pub fn raw_max(&self) -> u32 {
        self.no_dynamic_points
            + self.external_script_tiers.first().map(|t| t.points).unwrap_or(0)
            + self.no_ajax_points
    }

    fn collect_violations(&self, violations: &mut Vec<String>) {
        if self.external_script_tiers.is_empty() {
            violations.push("javascript.external_script_tiers must define at least one tier".to_string());
        }
        for pair in self.external_script_tiers.windows(2) {
            if pair[0].at_most >= pair[1].at_most || pair[0].points < pair[1].points {
                violations.push(
                    "javascript.external_script_tiers must be ordered from lowest ceiling to highest with non-increasing points"
                        .to_string(),
                );
                break;
            }
        }
        if self.light_dynamic_points > self.no_dynamic_points {
            violations.push(
                "javascript.light_dynamic_points cannot exceed no_dynamic_points".to_string(),
            );
        }
        if !(0.0..=1.0).contains(&self.framework_confidence) {
            violations.push("javascript.framework_confidence must be within 0.0-1.0".to_string());
        }
    }
}

fn default_no_dynamic_points() -> u32 {
    4
}
fn default_light_dynamic_points() -> u32 {
    3
}
fn default_light_script_limit() -> u32 {
    3
}
fn default_external_script_tiers() -> Vec<CeilingTier> {
    vec![
        CeilingTier::new(0, 4),
        CeilingTier::new(3, 3),
        CeilingTier::new(8, 2),
    ]
}
fn default_no_ajax_points() -> u32 {
    2
}
fn default_spa_penalty() -> u32 {
    5
}
fn default_framework_penalty() -> u32 {
    2
}
fn default_framework_confidence() -> f64 {
    0.5
}
fn default_rendered_gap_penalty() -> u32 {
    4
}

/// Crawler directive rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrawlerRules {
    /// Points for a robots.txt that does not disallow the page
    #[serde(default = "default_robots_points")]
    pub robots_points: u32,

    #[serde(default = "default_sitemap_points")]
    pub sitemap_points: u32,

    #[serde(default = "default_llms_txt_points")]
    pub llms_txt_points: u32,
}

impl Default for CrawlerRules {
    fn default() -> Self {
        Self {
            robots_points: default_robots_points(),
            sitemap_points: default_sitemap_points(),
            llms_txt_points: default_llms_txt_points(),
        }
    }
}

impl CrawlerRules {
    pub fn raw_max(&self) -> u32 {
        self.robots_points + self.sitemap_points + self.llms_txt_points
    }
}

fn default_robots_points() -> u32 {
    6
}
fn default_sitemap_points() -> u32 {
    2
}
fn default_llms_txt_points() -> u32 {
    2
}

/// Rule tables for all six components
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleSet {
    #[serde(default)]
    pub content: ContentRules,

    #[serde(default)]
    pub semantic: SemanticRules,

    #[serde(default)]
    pub structured_data: StructuredDataRules,

    #[serde(default)]
    pub meta: MetaRules,

    #[serde(default)]
    pub javascript: JavaScriptRules,

    #[serde(default)]
    pub crawler: CrawlerRules,
}

impl RuleSet {
    /// Check every table, reporting all problems at once
    pub fn validate(&self) -> Result<()> {
        let violations = self.collect_violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(Error::invalid_weights("rules", violations.join("; ")))
        }
    }

    pub fn collect_violations(&self) -> Vec<String> {
        let mut violations = Vec::new();
        self.content.collect_violations(&mut violations);
        self.semantic.collect_violations(&mut violations);
        self.structured_data.collect_violations(&mut violations);
        self.meta.collect_violations(&mut violations);
        self.javascript.collect_violations(&mut violations);

        let maxima = [
            ("content", self.content.raw_max()),
            ("semantic", self.semantic.raw_max()),
            ("structured_data", self.structured_data.raw_max()),
            ("meta", self.meta.raw_max()),
            ("javascript", self.javascript.raw_max()),
            ("crawler", self.crawler.raw_max()),
        ];
        for (name, max) in maxima {
            if max == 0 {
                violations.push(format!("{} rules award no points", name));
            }
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_raw_maxima_match_scraper_weights() {
        let rules = RuleSet::default();
        assert_eq!(rules.content.raw_max(), 25);
        assert_eq!(rules.semantic.raw_max(), 20);
        assert_eq!(rules.structured_data.raw_max(), 20);
        assert_eq!(rules.meta.raw_max(), 15);
        assert_eq!(rules.javascript.raw_max(), 10);
        assert_eq!(rules.crawler.raw_max(), 10);
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn ceiling_tier_boundaries_are_inclusive() {
        let tiers = default_external_script_tiers();
        assert_eq!(ceiling_tier(&tiers, 0).map(|t| t.points), Some(4));
        assert_eq!(ceiling_tier(&tiers, 3).map(|t| t.points), Some(3));
        assert_eq!(ceiling_tier(&tiers, 8).map(|t| t.points), Some(2));
        assert_eq!(ceiling_tier(&tiers, 9), None);
    }

    #[test]
    fn unordered_tiers_are_rejected() {
        let mut rules = RuleSet::default();
        rules.content.word_tiers = vec![Tier::new(50, 4), Tier::new(500, 10)];
        let err = rules.validate().unwrap_err();
        assert!(err.is_weight_table());
        assert!(err.to_string().contains("content.word_tiers"));
    }

    #[test]
    fn zero_point_component_is_rejected() {
        let mut rules = RuleSet::default();
        rules.crawler = CrawlerRules {
            robots_points: 0,
            sitemap_points: 0,
            llms_txt_points: 0,
        };
        let violations = rules.collect_violations();
        assert_eq!(violations, vec!["crawler rules award no points".to_string()]);
    }

    #[test]
    fn known_schema_types_accept_iris() {
        let rules = StructuredDataRules::default();
        assert!(rules.is_known_type("Organization"));
        assert!(rules.is_known_type("https://schema.org/Article"));
        assert!(!rules.is_known_type("MadeUpThing"));
        assert!(!rules.is_known_type(""));
    }
}
