use serde::{Deserialize, Serialize};
use tracing::debug;

use super::comparison::{ContentComparisonConfig, SiteComparisonConfig};
use super::scoring::{ProfileWeights, ScoringProfile};
use super::thresholds::RuleSet;
use crate::errors::Result;

/// Root configuration for the scoring and comparison engine.
///
/// Every section is optional in TOML; omitted sections fall back to the
/// built-in tables.
///
/// # Examples
///
/// ```
/// use crawlability::config::CrawlabilityConfig;
///
/// let config = CrawlabilityConfig::default();
/// assert!(config.validate().is_ok());
/// assert_eq!(config.profiles.scraper.static_content, 25);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrawlabilityConfig {
    /// Per-profile component weights
    #[serde(default)]
    pub profiles: ProfileWeights,

    /// Tier tables read by the component scorers
    #[serde(default)]
    pub rules: RuleSet,

    /// Static-vs-rendered comparison settings
    #[serde(default)]
    pub comparison: ContentComparisonConfig,

    /// Cross-site comparison settings
    #[serde(default)]
    pub site_comparison: SiteComparisonConfig,
}

impl CrawlabilityConfig {
    /// Check every section; weight and rule tables fail with
    /// `InvalidWeightTable`, the rest with `Configuration`.
    pub fn validate(&self) -> Result<()> {
        self.profiles.build()?;
        self.rules.validate()?;
        self.comparison.validate()?;
        self.site_comparison.validate()?;
        debug!(
            checklist_version = self.site_comparison.checklist_version,
            "configuration validated"
        );
        Ok(())
    }

    /// Validated scraper and LLM profiles
    pub fn profiles(&self) -> Result<(ScoringProfile, ScoringProfile)> {
        self.profiles.build()
    }
}
