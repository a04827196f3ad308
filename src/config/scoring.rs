//! Scoring profiles and their per-component weight tables.
//!
//! A profile assigns every component a `max_score` in whole points. The
//! points of a profile must sum to [`TOTAL_POINTS`]; the built-in tables
//! are checked at compile time and custom tables when a profile is built.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{Error, Result};
use crate::scoring::ComponentKind;

/// Points every profile distributes across its components
pub const TOTAL_POINTS: u32 = 100;

/// Per-component maximum scores of one profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentWeights {
    pub static_content: u32,
    pub semantic_html: u32,
    pub structured_data: u32,
    pub meta_tags: u32,
    pub javascript: u32,
    pub crawler_access: u32,
}

impl ComponentWeights {
    /// Scraper-friendliness: non-JS crawlers, JavaScript dependency matters more
    pub const SCRAPER: Self = Self {
        static_content: 25,
        semantic_html: 20,
        structured_data: 20,
        meta_tags: 15,
        javascript: 10,
        crawler_access: 10,
    };

    /// LLM accessibility: content and semantics weighted up, JavaScript down
    pub const LLM: Self = Self {
        static_content: 30,
        semantic_html: 25,
        structured_data: 20,
        meta_tags: 15,
        javascript: 5,
        crawler_access: 5,
    };

    pub const fn total(&self) -> u32 {
        self.static_content
            + self.semantic_html
            + self.structured_data
            + self.meta_tags
            + self.javascript
            + self.crawler_access
    }

    pub fn get(&self, kind: ComponentKind) -> u32 {
        match kind {
            ComponentKind::StaticContent => self.static_content,
            ComponentKind::SemanticHtml => self.semantic_html,
            ComponentKind::StructuredData => self.structured_data,
            ComponentKind::MetaTags => self.meta_tags,
            ComponentKind::JavaScript => self.javascript,
            ComponentKind::CrawlerAccess => self.crawler_access,
        }
    }

    // Pure function: Collect every problem with this table
    pub fn collect_violations(&self) -> Vec<String> {
        let mut violations: Vec<String> = ComponentKind::ALL
            .iter()
            .filter(|kind| self.get(**kind) == 0)
            .map(|kind| format!("{} weight must be greater than 0", kind.name()))
            .collect();

        // Widen before summing so absurd inputs cannot overflow
        let total: u64 = ComponentKind::ALL
            .iter()
            .map(|kind| u64::from(self.get(*kind)))
            .sum();
        if total != u64::from(TOTAL_POINTS) {
            violations.push(format!(
                "component weights sum to {}, expected {}",
                total, TOTAL_POINTS
            ));
        }

        violations
    }
}

const _: () = assert!(ComponentWeights::SCRAPER.total() == TOTAL_POINTS);
const _: () = assert!(ComponentWeights::LLM.total() == TOTAL_POINTS);

/// Which audience a breakdown scores for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileKind {
    Scraper,
    Llm,
}

impl ProfileKind {
    pub fn label(&self) -> &'static str {
        match self {
            ProfileKind::Scraper => "Scraper-Friendliness",
            ProfileKind::Llm => "LLM-Accessibility",
        }
    }

    pub fn default_weights(&self) -> ComponentWeights {
        match self {
            ProfileKind::Scraper => ComponentWeights::SCRAPER,
            ProfileKind::Llm => ComponentWeights::LLM,
        }
    }
}

impl fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated weight table bound to its profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoringProfile {
    kind: ProfileKind,
    weights: ComponentWeights,
}

impl ScoringProfile {
    /// Build a profile, rejecting tables that do not sum to [`TOTAL_POINTS`]
    pub fn new(kind: ProfileKind, weights: ComponentWeights) -> Result<Self> {
        let violations = weights.collect_violations();
        if !violations.is_empty() {
            return Err(Error::invalid_weights(kind.label(), violations.join("; ")));
        }
        Ok(Self { kind, weights })
    }

    pub const fn scraper() -> Self {
        Self {
            kind: ProfileKind::Scraper,
            weights: ComponentWeights::SCRAPER,
        }
    }

    pub const fn llm() -> Self {
        Self {
            kind: ProfileKind::Llm,
            weights: ComponentWeights::LLM,
        }
    }

    pub fn kind(&self) -> ProfileKind {
        self.kind
    }

    pub fn weights(&self) -> &ComponentWeights {
        &self.weights
    }

    /// Maximum score of a component under this profile
    pub fn max_score(&self, kind: ComponentKind) -> f64 {
        f64::from(self.weights.get(kind))
    }

    pub fn total_points(&self) -> f64 {
        f64::from(self.weights.total())
    }

    /// Human-readable formula, e.g. `Static Content Quality (25) + ...`
    pub fn scoring_formula(&self) -> String {
        ComponentKind::ALL
            .iter()
            .map(|kind| format!("{} ({})", kind.name(), self.weights.get(*kind)))
            .collect::<Vec<_>>()
            .join(" + ")
    }
}

/// Weight tables for both profiles as they appear in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileWeights {
    #[serde(default = "default_scraper_weights")]
    pub scraper: ComponentWeights,

    #[serde(default = "default_llm_weights")]
    pub llm: ComponentWeights,
}

impl Default for ProfileWeights {
    fn default() -> Self {
        Self {
            scraper: default_scraper_weights(),
            llm: default_llm_weights(),
        }
    }
}

impl ProfileWeights {
    /// Build both profiles, failing on the first invalid table
    pub fn build(&self) -> Result<(ScoringProfile, ScoringProfile)> {
        Ok((
            ScoringProfile::new(ProfileKind::Scraper, self.scraper)?,
            ScoringProfile::new(ProfileKind::Llm, self.llm)?,
        ))
    }
}

pub fn default_scraper_weights() -> ComponentWeights {
    ComponentWeights::SCRAPER
}

pub fn default_llm_weights() -> ComponentWeights {
    ComponentWeights::LLM
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_profiles_are_valid() {
        assert!(ScoringProfile::new(ProfileKind::Scraper, ComponentWeights::SCRAPER).is_ok());
        assert!(ScoringProfile::new(ProfileKind::Llm, ComponentWeights::LLM).is_ok());
        assert_eq!(ScoringProfile::scraper().total_points(), 100.0);
        assert_eq!(ScoringProfile::llm().total_points(), 100.0);
    }

    #[test]
    fn llm_weights_favor_content_over_javascript() {
        let scraper = ScoringProfile::scraper();
        let llm = ScoringProfile::llm();
        assert!(llm.max_score(ComponentKind::StaticContent) > scraper.max_score(ComponentKind::StaticContent));
        assert!(llm.max_score(ComponentKind::SemanticHtml) > scraper.max_score(ComponentKind::SemanticHtml));
        assert!(llm.max_score(ComponentKind::JavaScript) < scraper.max_score(ComponentKind::JavaScript));
    }

    #[test]
    fn wrong_sum_is_rejected() {
        let weights = ComponentWeights {
            static_content: 30,
            ..ComponentWeights::SCRAPER
        };
        let err = ScoringProfile::new(ProfileKind::Scraper, weights).unwrap_err();
        assert!(err.is_weight_table());
        assert!(err.to_string().contains("sum to 105"));
        assert!(err.to_string().contains("Scraper-Friendliness"));
    }

    #[test]
    fn zero_weight_is_rejected_even_when_sum_matches() {
        let weights = ComponentWeights {
            crawler_access: 0,
            javascript: 20,
            ..ComponentWeights::SCRAPER
        };
        let violations = weights.collect_violations();
        assert_eq!(violations.len(), 1);
        assert!(violations[0].contains("Crawler Accessibility"));
    }

    #[test]
    fn huge_weights_do_not_overflow() {
        let weights = ComponentWeights {
            static_content: u32::MAX,
            semantic_html: u32::MAX,
            ..ComponentWeights::SCRAPER
        };
        assert!(ScoringProfile::new(ProfileKind::Llm, weights).is_err());
    }

    #[test]
    fn scoring_formula_lists_components_in_order() {
        let formula = ScoringProfile::llm().scoring_formula();
        assert!(formula.starts_with("Static Content Quality (30) + Semantic HTML Structure (25)"));
        assert!(formula.ends_with("Crawler Accessibility (5)"));
    }

    #[test]
    fn partial_profile_table_keeps_other_default() {
        let weights: ProfileWeights = toml::from_str(
            "[llm]\nstatic_content = 35\nsemantic_html = 25\nstructured_data = 20\nmeta_tags = 10\njavascript = 5\ncrawler_access = 5\n",
        )
        .unwrap();
        assert_eq!(weights.scraper, ComponentWeights::SCRAPER);
        assert_eq!(weights.llm.static_content, 35);
        assert!(weights.build().is_ok());
    }
}
