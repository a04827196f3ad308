//! Prioritized remediation advice.

pub mod recommendations;
pub mod score_types;
pub mod templates;

pub use recommendations::{
    priority_counts, Difficulty, Impact, Priority, Recommendation, RecommendationGenerator,
};
pub use score_types::{Score0To1, Score0To100};
pub use templates::RemediationTemplate;
