use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use super::templates::{self, RemediationTemplate};
use crate::scoring::{Category, ComponentKind, Issue, ScoreBreakdown, ScoreComponent};

/// Urgency of a recommendation; `Critical` sorts first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    /// Priority of a component's recommendations from its percentage
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage < 40.0 {
            Priority::Critical
        } else if percentage < 60.0 {
            Priority::High
        } else if percentage < 80.0 {
            Priority::Medium
        } else {
            Priority::Low
        }
    }

    /// Priority of a cross-site recommendation from the percentage-point gap
    pub fn from_gap(gap: f64) -> Self {
        if gap >= 40.0 {
            Priority::Critical
        } else if gap >= 25.0 {
            Priority::High
        } else if gap >= 15.0 {
            Priority::Medium
        } else {
            Priority::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Expected effect of a fix; `High` sorts first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Impact {
    High,
    Medium,
    Low,
}

/// An actionable suggestion derived from a lost-points finding
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub difficulty: Difficulty,
    pub impact: Impact,
    pub category: Category,
    pub title: String,
    pub description: String,
    pub code_example: Option<String>,
    pub resource_links: Vec<String>,
    /// Component whose deficiency produced this recommendation
    pub source: ComponentKind,
}

impl Recommendation {
    /// Build from a template, attributing it to `source`
    pub fn from_template(
        template: &RemediationTemplate,
        source: ComponentKind,
        priority: Priority,
        description: String,
    ) -> Self {
        Self {
            priority,
            difficulty: template.difficulty,
            impact: template.impact,
            category: source.category(),
            title: template.title.to_string(),
            description,
            code_example: template.code_example.map(str::to_string),
            resource_links: template
                .resource_links
                .iter()
                .map(|link| link.to_string())
                .collect(),
            source,
        }
    }

    fn for_issue(component: &ScoreComponent, issue: &Issue) -> Self {
        let template = templates::for_issue(issue.kind);
        let description = format!("{}. {}", issue.message, template.description);
        Self::from_template(
            &template,
            component.kind,
            Priority::from_percentage(component.percentage),
            description,
        )
    }
}

/// Derives prioritized recommendations from a score breakdown
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationGenerator;

impl RecommendationGenerator {
    pub fn new() -> Self {
        Self
    }

    /// One recommendation per issue of every component below full marks.
    ///
    /// Sorted by priority, then impact, then component evaluation order,
    /// then issue order, so the result does not depend on the order of
    /// components in the breakdown.
    pub fn generate(&self, breakdown: &ScoreBreakdown) -> Vec<Recommendation> {
        let mut keyed: Vec<(usize, Recommendation)> = breakdown
            .deficient_components()
            .flat_map(|component| {
                component
                    .issues
                    .iter()
                    .enumerate()
                    .map(move |(index, issue)| (index, Recommendation::for_issue(component, issue)))
            })
            .collect();

        keyed.sort_by(|(index_a, a), (index_b, b)| {
            a.priority
                .cmp(&b.priority)
                .then(a.impact.cmp(&b.impact))
                .then(a.source.cmp(&b.source))
                .then(index_a.cmp(index_b))
        });

        debug!(
            profile = %breakdown.profile,
            count = keyed.len(),
            "generated recommendations"
        );

        keyed.into_iter().map(|(_, rec)| rec).collect()
    }
}

/// Count recommendations per priority, in priority order
pub fn priority_counts(recommendations: &[Recommendation]) -> Vec<(Priority, usize)> {
    [Priority::Critical, Priority::High, Priority::Medium, Priority::Low]
        .iter()
        .map(|p| (*p, recommendations.iter().filter(|r| r.priority == *p).count()))
        .collect()
}
