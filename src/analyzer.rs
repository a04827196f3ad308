//! Single-page analysis pipeline tying scoring, comparison and
//! recommendations together.
//!
//! # Example
//!
//! ```
//! use crawlability::{AnalysisSnapshot, CrawlabilityConfig, PageAnalyzer};
//!
//! let analyzer = PageAnalyzer::new(&CrawlabilityConfig::default()).unwrap();
//! let analysis = analyzer.analyze(&AnalysisSnapshot::default(), None).unwrap();
//! assert_eq!(analysis.scraper.total_score, 0.0);
//! assert!(analysis.comparison.is_none());
//! ```

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::comparison::{
    ContentComparator, ContentComparisonResult, SiteComparisonEngine, SiteComparisonResult,
    SiteReport,
};
use crate::config::CrawlabilityConfig;
use crate::errors::Result;
use crate::priority::{Recommendation, RecommendationGenerator};
use crate::scoring::{ScoreBreakdown, ScoringEngine};
use crate::snapshot::{validate_snapshot, AnalysisSnapshot};

/// Everything computed for one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageAnalysis {
    pub scraper: ScoreBreakdown,
    pub llm: ScoreBreakdown,
    /// Present only when a rendered snapshot was supplied
    pub comparison: Option<ContentComparisonResult>,
    /// Derived from the scraper breakdown
    pub recommendations: Vec<Recommendation>,
}

impl PageAnalysis {
    /// Borrow this analysis for a cross-site comparison
    pub fn site_report<'a>(&'a self, snapshot: &'a AnalysisSnapshot) -> SiteReport<'a> {
        SiteReport::new(&self.scraper, &self.llm, snapshot)
    }
}

/// A page to analyze: its static snapshot and, optionally, its rendered one
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageInput {
    pub static_snapshot: AnalysisSnapshot,
    #[serde(default)]
    pub rendered_snapshot: Option<AnalysisSnapshot>,
}

impl PageInput {
    pub fn new(static_snapshot: AnalysisSnapshot) -> Self {
        Self {
            static_snapshot,
            rendered_snapshot: None,
        }
    }

    pub fn with_rendered(mut self, rendered: AnalysisSnapshot) -> Self {
        self.rendered_snapshot = Some(rendered);
        self
    }
}

/// Analyzes pages under both profiles with one validated configuration
#[derive(Debug, Clone)]
pub struct PageAnalyzer {
    scraper: ScoringEngine,
    llm: ScoringEngine,
    comparator: ContentComparator,
    site_engine: SiteComparisonEngine,
    generator: RecommendationGenerator,
}

impl PageAnalyzer {
    /// Validate the configuration and build the engines it describes
    pub fn new(config: &CrawlabilityConfig) -> Result<Self> {
        config.validate()?;
        let (scraper_profile, llm_profile) = config.profiles()?;
        let analyzer = Self {
            scraper: ScoringEngine::new(scraper_profile, config.rules.clone())?,
            llm: ScoringEngine::new(llm_profile, config.rules.clone())?,
            comparator: ContentComparator::new(config.comparison.clone())?,
            site_engine: SiteComparisonEngine::new(config.site_comparison.clone())?,
            generator: RecommendationGenerator::new(),
        };
        debug!(
            scraper = %analyzer.scraper.scoring_formula(),
            llm = %analyzer.llm.scoring_formula(),
            "page analyzer ready"
        );
        Ok(analyzer)
    }

    pub fn scraper_engine(&self) -> &ScoringEngine {
        &self.scraper
    }

    pub fn llm_engine(&self) -> &ScoringEngine {
        &self.llm
    }

    /// Score one page; the rendered snapshot, when given, drives the
    /// JavaScript comparison
    pub fn analyze(
        &self,
        static_snapshot: &AnalysisSnapshot,
        rendered: Option<&AnalysisSnapshot>,
    ) -> Result<PageAnalysis> {
        validate_snapshot(static_snapshot)?;
        let comparison = rendered
            .map(|rendered| self.comparator.compare(static_snapshot, rendered))
            .transpose()?;

        let scraper = self
            .scraper
            .score_with_comparison(static_snapshot, comparison.as_ref());
        let llm = self
            .llm
            .score_with_comparison(static_snapshot, comparison.as_ref());
        let recommendations = self.generator.generate(&scraper);

        debug!(
            url = %static_snapshot.url,
            scraper = scraper.total_score,
            llm = llm.total_score,
            recommendations = recommendations.len(),
            "analyzed page"
        );

        Ok(PageAnalysis {
            scraper,
            llm,
            comparison,
            recommendations,
        })
    }

    /// Analyze independent pages in parallel; results keep input order
    pub fn analyze_batch(&self, pages: &[PageInput]) -> Vec<Result<PageAnalysis>> {
        let results: Vec<Result<PageAnalysis>> = pages
            .par_iter()
            .map(|page| self.analyze(&page.static_snapshot, page.rendered_snapshot.as_ref()))
            .collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        info!(pages = pages.len(), failed, "batch analysis complete");
        results
    }

    /// Compare two analyzed pages
    pub fn compare_sites<'a>(
        &self,
        a: SiteReport<'a>,
        b: SiteReport<'a>,
    ) -> Result<SiteComparisonResult<'a>> {
        self.site_engine.compare_sites(a, b)
    }
}
