//! Aggregation of component scores into a total, grade and breakdown.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::component::{ComponentKind, ScoreComponent};
use super::components::ComponentScorer;
use super::grade::Grade;
use crate::comparison::ContentComparisonResult;
use crate::config::{ProfileKind, RuleSet, ScoringProfile};
use crate::errors::{Error, Result};
use crate::snapshot::AnalysisSnapshot;

/// Total score, grade and the components behind them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub profile: ProfileKind,
    /// Components in evaluation order
    pub components: Vec<ScoreComponent>,
    /// `round(Σscore / Σmax_score * 100, 1)`
    pub total_score: f64,
    pub grade: Grade,
}

impl ScoreBreakdown {
    pub fn component(&self, kind: ComponentKind) -> Option<&ScoreComponent> {
        self.components.iter().find(|c| c.kind == kind)
    }

    /// Percentage of a component, 0 when the breakdown lacks it
    pub fn percentage_of(&self, kind: ComponentKind) -> f64 {
        self.component(kind).map(|c| c.percentage).unwrap_or(0.0)
    }

    pub fn available_points(&self) -> f64 {
        self.components.iter().map(|c| c.max_score).sum()
    }

    /// Components that did not earn full marks
    pub fn deficient_components(&self) -> impl Iterator<Item = &ScoreComponent> {
        self.components.iter().filter(|c| c.percentage < 100.0)
    }

    /// Reject breakdowns whose components or total violate their bounds
    pub fn validate(&self) -> Result<()> {
        let broken: Vec<String> = self
            .components
            .iter()
            .filter(|c| !c.is_consistent())
            .map(|c| format!("{} ({} of {})", c.name, c.score, c.max_score))
            .collect();
        if !broken.is_empty() {
            return Err(Error::precondition(format!(
                "{} breakdown has components outside 0..=max_score: {}",
                self.profile,
                broken.join(", ")
            )));
        }
        if !(0.0..=100.0).contains(&self.total_score) {
            return Err(Error::precondition(format!(
                "{} breakdown total {} is outside 0-100",
                self.profile, self.total_score
            )));
        }
        Ok(())
    }

    /// "Show your work" rendering of the aggregation
    pub fn explain(&self) -> String {
        let terms: Vec<String> = self
            .components
            .iter()
            .map(|c| format!("{} {:.1}/{:.0}", c.name, c.score, c.max_score))
            .collect();
        format!(
            "{} = ({}) / {:.0} * 100 = {:.1} ({})",
            self.profile,
            terms.join(" + "),
            self.available_points(),
            self.total_score,
            self.grade
        )
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Scores snapshots under one profile
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    scorer: ComponentScorer,
}

impl ScoringEngine {
    pub fn new(profile: ScoringProfile, rules: RuleSet) -> Result<Self> {
        Ok(Self {
            scorer: ComponentScorer::new(profile, rules)?,
        })
    }

    pub fn scraper() -> Self {
        Self {
            scorer: ComponentScorer::with_default_rules(ScoringProfile::scraper()),
        }
    }

    pub fn llm() -> Self {
        Self {
            scorer: ComponentScorer::with_default_rules(ScoringProfile::llm()),
        }
    }

    pub fn profile(&self) -> &ScoringProfile {
        self.scorer.profile()
    }

    pub fn scorer(&self) -> &ComponentScorer {
        &self.scorer
    }

    pub fn score(&self, snapshot: &AnalysisSnapshot) -> ScoreBreakdown {
        self.score_with_comparison(snapshot, None)
    }

    pub fn score_with_comparison(
        &self,
        snapshot: &AnalysisSnapshot,
        comparison: Option<&ContentComparisonResult>,
    ) -> ScoreBreakdown {
        let components = self.scorer.score_with_comparison(snapshot, comparison);
        Self::aggregate(self.profile().kind(), components)
    }

    /// Aggregate components into a breakdown.
    ///
    /// A zero total of `max_score` yields a score of 0 instead of failing.
    pub fn aggregate(profile: ProfileKind, components: Vec<ScoreComponent>) -> ScoreBreakdown {
        let earned: f64 = components.iter().map(|c| c.score).sum();
        let available: f64 = components.iter().map(|c| c.max_score).sum();

        let total_score = if available > 0.0 && earned.is_finite() {
            round_one_decimal((earned / available * 100.0).clamp(0.0, 100.0))
        } else {
            0.0
        };
        let grade = Grade::from_score(total_score);

        debug!(
            profile = %profile,
            earned,
            available,
            total_score,
            grade = %grade,
            "aggregated score"
        );

        ScoreBreakdown {
            profile,
            components,
            total_score,
            grade,
        }
    }

    pub fn scoring_formula(&self) -> String {
        self.profile().scoring_formula()
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn total_stays_within_bounds(scores in proptest::collection::vec(0.0..=1.0f64, 6)) {
            let profile = ScoringProfile::scraper();
            let components: Vec<ScoreComponent> = ComponentKind::ALL
                .iter()
                .zip(scores.iter())
                .map(|(kind, fraction)| {
                    let max = profile.max_score(*kind);
                    ScoreComponent::new(*kind, fraction * max, max, vec![], vec![])
                })
                .collect();
            let breakdown = ScoringEngine::aggregate(ProfileKind::Scraper, components);
            prop_assert!((0.0..=100.0).contains(&breakdown.total_score));
            prop_assert_eq!(breakdown.grade, Grade::from_score(breakdown.total_score));
        }
    }
}
