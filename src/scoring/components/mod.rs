//! Rule evaluation for the six score components.
//!
//! Each submodule turns one slice of a snapshot into raw points out of its
//! rule table's maximum. [`ComponentScorer`] scales those raw points onto
//! the `max_score` its profile assigns to the component, so both profiles
//! run exactly the same rules.

pub mod content;
pub mod crawler;
pub mod javascript;
pub mod meta;
pub mod semantic;
pub mod structured_data;

use crate::comparison::ContentComparisonResult;
use crate::config::{RuleSet, ScoringProfile, Tier};
use crate::errors::Result;
use crate::scoring::component::{ComponentKind, Issue, IssueKind, ScoreComponent};
use crate::snapshot::AnalysisSnapshot;

/// Raw points earned against one rule table, plus the findings behind them
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome {
    pub points: f64,
    pub max_points: f64,
    pub strengths: Vec<String>,
    pub issues: Vec<Issue>,
}

impl RuleOutcome {
    pub fn new(max_points: u32) -> Self {
        Self {
            points: 0.0,
            max_points: f64::from(max_points),
            strengths: Vec::new(),
            issues: Vec::new(),
        }
    }

    pub fn award(&mut self, points: u32) {
        self.points += f64::from(points);
    }

    pub fn deduct(&mut self, points: f64) {
        self.points -= points;
    }

    pub fn strength(&mut self, message: impl Into<String>) {
        self.strengths.push(message.into());
    }

    pub fn issue(&mut self, kind: IssueKind, message: impl Into<String>) {
        self.issues.push(Issue::new(kind, message));
    }

    /// Scale raw points onto a profile's `max_score`
    pub fn into_component(self, kind: ComponentKind, max_score: f64) -> ScoreComponent {
        let points = self.points.clamp(0.0, self.max_points);
        let score = if self.max_points > 0.0 {
            points * max_score / self.max_points
        } else {
            0.0
        };
        ScoreComponent::new(kind, score, max_score, self.strengths, self.issues)
    }
}

/// Where a value landed in a descending tier table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TierHit {
    /// Reached the highest tier
    Top(u32),
    /// Reached a lower tier
    Partial(u32),
    Miss,
}

pub(crate) fn tier_hit(tiers: &[Tier], value: u32) -> TierHit {
    match tiers.iter().position(|tier| value >= tier.at_least) {
        Some(0) => TierHit::Top(tiers[0].points),
        Some(index) => TierHit::Partial(tiers[index].points),
        None => TierHit::Miss,
    }
}

/// Threshold of the highest tier, for "reach N to earn full credit" messages
pub(crate) fn top_threshold(tiers: &[Tier]) -> u32 {
    tiers.first().map(|t| t.at_least).unwrap_or(0)
}

/// Computes one profile's six components from a snapshot
#[derive(Debug, Clone)]
pub struct ComponentScorer {
    profile: ScoringProfile,
    rules: RuleSet,
}

impl ComponentScorer {
    /// Create a scorer, validating the rule tables
    pub fn new(profile: ScoringProfile, rules: RuleSet) -> Result<Self> {
        rules.validate()?;
        Ok(Self { profile, rules })
    }

    /// Scorer with the built-in rule tables
    pub fn with_default_rules(profile: ScoringProfile) -> Self {
        Self {
            profile,
            rules: RuleSet::default(),
        }
    }

    pub fn profile(&self) -> &ScoringProfile {
        &self.profile
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Score all components from static signals only
    pub fn score(&self, snapshot: &AnalysisSnapshot) -> Vec<ScoreComponent> {
        self.score_with_comparison(snapshot, None)
    }

    /// Score all components, letting a static-vs-rendered comparison inform
    /// the JavaScript dependency component
    pub fn score_with_comparison(
        &self,
        snapshot: &AnalysisSnapshot,
        comparison: Option<&ContentComparisonResult>,
    ) -> Vec<ScoreComponent> {
        ComponentKind::ALL
            .iter()
            .map(|kind| self.score_component(*kind, snapshot, comparison))
            .collect()
    }

    pub fn score_component(
        &self,
        kind: ComponentKind,
        snapshot: &AnalysisSnapshot,
        comparison: Option<&ContentComparisonResult>,
    ) -> ScoreComponent {
        let outcome = match kind {
            ComponentKind::StaticContent => {
                content::evaluate(&snapshot.content, &self.rules.content)
            }
            ComponentKind::SemanticHtml => {
                semantic::evaluate(&snapshot.structure, &self.rules.semantic)
            }
            ComponentKind::StructuredData => {
                structured_data::evaluate(&snapshot.meta, &self.rules.structured_data)
            }
            ComponentKind::MetaTags => meta::evaluate(&snapshot.meta, &self.rules.meta),
            ComponentKind::JavaScript => {
                javascript::evaluate(snapshot, comparison, &self.rules.javascript)
            }
            ComponentKind::CrawlerAccess => {
                crawler::evaluate(&snapshot.crawler, &self.rules.crawler)
            }
        };
        outcome.into_component(kind, self.profile.max_score(kind))
    }
}
