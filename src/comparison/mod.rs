//! Static-vs-rendered and cross-site comparison.
//!
//! [`ContentComparator`] measures how much of a page depends on JavaScript
//! by comparing its static and rendered snapshots. [`SiteComparisonEngine`]
//! compares two independently analyzed pages.

pub mod checklist;
pub mod content;
pub mod similarity;
pub mod site;

pub use checklist::{KeyAttribute, KeyDifference, KeyDifferenceChecklist, Observation};
pub use content::{ContentComparator, ContentComparisonResult, DependencyLevel};
pub use site::{SiteComparisonEngine, SiteComparisonResult, SiteReport};
