//! Component scoring and aggregation.
//!
//! [`ComponentScorer`] evaluates the six rule tables against a snapshot and
//! [`ScoringEngine`] folds the resulting components into a
//! [`ScoreBreakdown`] with a total and a letter grade.

pub mod component;
pub mod components;
pub mod engine;
pub mod grade;

pub use component::{Category, ComponentKind, Issue, IssueKind, ScoreComponent};
pub use components::{ComponentScorer, RuleOutcome};
pub use engine::{ScoreBreakdown, ScoringEngine};
pub use grade::Grade;
