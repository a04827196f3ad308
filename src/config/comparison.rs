use serde::{Deserialize, Serialize};

use crate::comparison::checklist::{KeyAttribute, KeyDifferenceChecklist};
use crate::errors::{Error, Result};

/// Static-vs-rendered comparison settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentComparisonConfig {
    /// Text similarity below which a page counts as JavaScript-dependent
    #[serde(default = "default_js_dependency_threshold")]
    pub js_dependency_threshold: f64,

    /// Rendered-only sentences must be longer than this many characters
    #[serde(default = "default_min_fragment_length")]
    pub min_fragment_length: usize,

    #[serde(default = "default_max_missing_fragments")]
    pub max_missing_fragments: usize,
}

impl Default for ContentComparisonConfig {
    fn default() -> Self {
        Self {
            js_dependency_threshold: default_js_dependency_threshold(),
            min_fragment_length: default_min_fragment_length(),
            max_missing_fragments: default_max_missing_fragments(),
        }
    }
}

impl ContentComparisonConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.js_dependency_threshold) {
            return Err(Error::config(format!(
                "comparison.js_dependency_threshold must be within 0-100, got {}",
                self.js_dependency_threshold
            )));
        }
        Ok(())
    }
}

fn default_js_dependency_threshold() -> f64 {
    80.0
}
fn default_min_fragment_length() -> usize {
    20
}
fn default_max_missing_fragments() -> usize {
    10
}

/// Cross-site comparison settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteComparisonConfig {
    /// Version of the built-in key-difference checklist
    #[serde(default = "default_checklist_version")]
    pub checklist_version: u32,

    /// Explicit attribute list; overrides the built-in list for the version
    #[serde(default)]
    pub attributes: Option<Vec<KeyAttribute>>,

    /// Percentage-point gap at which the trailing site gets a recommendation
    #[serde(default = "default_gap_threshold")]
    pub gap_threshold: f64,

    #[serde(default = "default_max_gap_insights")]
    pub max_gap_insights: usize,
}

impl Default for SiteComparisonConfig {
    fn default() -> Self {
        Self {
            checklist_version: default_checklist_version(),
            attributes: None,
            gap_threshold: default_gap_threshold(),
            max_gap_insights: default_max_gap_insights(),
        }
    }
}

impl SiteComparisonConfig {
    /// Resolve the configured checklist
    pub fn checklist(&self) -> Result<KeyDifferenceChecklist> {
        match &self.attributes {
            Some(attributes) => {
                KeyDifferenceChecklist::custom(self.checklist_version, attributes.clone())
            }
            None => KeyDifferenceChecklist::for_version(self.checklist_version).ok_or_else(|| {
                Error::config(format!(
                    "unknown key-difference checklist version {} (known: {:?})",
                    self.checklist_version,
                    KeyDifferenceChecklist::KNOWN_VERSIONS
                ))
            }),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.checklist()?;
        if !self.gap_threshold.is_finite() || self.gap_threshold < 0.0 {
            return Err(Error::config(format!(
                "site_comparison.gap_threshold must be a non-negative number, got {}",
                self.gap_threshold
            )));
        }
        Ok(())
    }
}

fn default_checklist_version() -> u32 {
    KeyDifferenceChecklist::CURRENT_VERSION
}
fn default_gap_threshold() -> f64 {
    10.0
}
fn default_max_gap_insights() -> usize {
    3
}
