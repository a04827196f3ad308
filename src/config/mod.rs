//! Configuration: profile weights, rule tables and comparison settings.
//!
//! Loaded from TOML:
//!
//! ```toml
//! [profiles.llm]
//! static_content = 30
//! semantic_html = 25
//! structured_data = 20
//! meta_tags = 15
//! javascript = 5
//! crawler_access = 5
//!
//! [rules.content]
//! word_tiers = [
//!     { at_least = 800, points = 10 },
//!     { at_least = 300, points = 7 },
//!     { at_least = 50, points = 4 },
//! ]
//!
//! [comparison]
//! js_dependency_threshold = 75.0
//!
//! [site_comparison]
//! checklist_version = 2
//! ```

pub mod comparison;
mod core;
mod loader;
pub mod scoring;
pub mod thresholds;

pub use comparison::{ContentComparisonConfig, SiteComparisonConfig};
pub use self::core::CrawlabilityConfig;
pub use loader::{
    load_config_from_dir, load_config_from_path, parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use scoring::{ComponentWeights, ProfileKind, ProfileWeights, ScoringProfile, TOTAL_POINTS};
pub use thresholds::{
    ceiling_tier, CeilingTier, ContentRules, CrawlerRules, JavaScriptRules, MetaRules, RuleSet,
    SemanticRules, StructuredDataRules, Tier,
};
