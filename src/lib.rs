//! Scraper-friendliness and LLM-accessibility scoring for web page snapshots.
//!
//! The crate consumes normalized [`AnalysisSnapshot`] values produced by an
//! external fetch, parse and render pipeline, and turns them into:
//!
//! - a weighted [`ScoreBreakdown`] per scoring profile
//! - prioritized [`Recommendation`]s for every component below full marks
//! - a [`ContentComparisonResult`] measuring JavaScript dependency
//! - a [`SiteComparisonResult`] comparing two analyzed pages
//!
//! All operations are pure over their inputs. Weight and rule tables are
//! validated once, when an engine is built.

// Export modules for library usage
pub mod analyzer;
pub mod comparison;
pub mod config;
pub mod errors;
pub mod priority;
pub mod scoring;
pub mod snapshot;

// Re-export commonly used types
pub use crate::analyzer::{PageAnalysis, PageAnalyzer, PageInput};
pub use crate::comparison::{
    ContentComparator, ContentComparisonResult, DependencyLevel, KeyAttribute,
    KeyDifferenceChecklist, SiteComparisonEngine, SiteComparisonResult, SiteReport,
};
pub use crate::config::{
    load_config_from_dir, load_config_from_path, parse_and_validate_config, CrawlabilityConfig,
    ProfileKind, ScoringProfile,
};
pub use crate::errors::{Error, Result};
pub use crate::priority::{Priority, Recommendation, RecommendationGenerator};
pub use crate::scoring::{
    Category, ComponentKind, Grade, Issue, IssueKind, ScoreBreakdown, ScoreComponent,
    ScoringEngine,
};
pub use crate::snapshot::{AnalysisSnapshot, RenderMode};
