//! Cross-site comparison of two independently analyzed pages.

use serde::Serialize;
use std::cmp::Ordering;
use tracing::info;

use super::checklist::KeyDifferenceChecklist;
use super::similarity::{structure_similarity, text_similarity};
use crate::config::{ProfileKind, SiteComparisonConfig};
use crate::errors::{Error, Result};
use crate::priority::{templates, Priority, Recommendation, Score0To100};
use crate::scoring::{ComponentKind, ScoreBreakdown};
use crate::snapshot::{validate_snapshot, AnalysisSnapshot};

const CONTENT_TEXT_WEIGHT: f64 = 0.6;
const CONTENT_STRUCTURE_WEIGHT: f64 = 0.4;
const OVERALL_CONTENT_WEIGHT: f64 = 0.4;
const OVERALL_ACCESSIBILITY_WEIGHT: f64 = 0.3;
const OVERALL_TECHNICAL_WEIGHT: f64 = 0.3;
const POINTS_PER_KEY_DIFFERENCE: f64 = 10.0;

/// Share of the larger count two sites may differ by before it is reported
const COUNT_DIFFERENCE_SHARE: f64 = 0.2;
const SEMANTIC_ELEMENT_DIFFERENCE: u64 = 2;

/// One site's analysis, borrowed from the caller
#[derive(Debug, Clone, Copy)]
pub struct SiteReport<'a> {
    pub scraper: &'a ScoreBreakdown,
    pub llm: &'a ScoreBreakdown,
    pub snapshot: &'a AnalysisSnapshot,
}

impl<'a> SiteReport<'a> {
    pub fn new(
        scraper: &'a ScoreBreakdown,
        llm: &'a ScoreBreakdown,
        snapshot: &'a AnalysisSnapshot,
    ) -> Self {
        Self {
            scraper,
            llm,
            snapshot,
        }
    }

    /// URL of the snapshot, or `fallback` when it is unknown
    fn label(&self, fallback: &'static str) -> String {
        if self.snapshot.url.trim().is_empty() {
            fallback.to_string()
        } else {
            self.snapshot.url.clone()
        }
    }

    fn validate(&self, label: &str) -> Result<()> {
        validate_snapshot(self.snapshot)?;
        for (breakdown, expected) in [
            (self.scraper, ProfileKind::Scraper),
            (self.llm, ProfileKind::Llm),
        ] {
            if breakdown.profile != expected {
                return Err(Error::precondition(format!(
                    "{label}: expected a {expected} breakdown, got {}",
                    breakdown.profile
                )));
            }
            breakdown.validate()?;
        }
        Ok(())
    }
}

/// Similarity of two sites, with the breakdowns it was computed from
#[derive(Debug, Clone, Serialize)]
pub struct SiteComparisonResult<'a> {
    pub content_score: f64,
    pub accessibility_score: f64,
    pub technical_score: f64,
    pub overall_similarity: f64,
    pub checklist_version: u32,
    pub key_differences: Vec<String>,
    pub insights: Vec<String>,
    pub recommendations: Vec<Recommendation>,
    pub site_a_scraper: &'a ScoreBreakdown,
    pub site_a_llm: &'a ScoreBreakdown,
    pub site_b_scraper: &'a ScoreBreakdown,
    pub site_b_llm: &'a ScoreBreakdown,
}

impl SiteComparisonResult<'_> {
    pub fn key_difference_count(&self) -> usize {
        self.key_differences.len()
    }

    pub fn similarity_verdict(&self) -> &'static str {
        similarity_verdict(self.overall_similarity)
    }
}

/// `100 - 10 per key difference`, never below zero
pub fn technical_score(key_difference_count: usize) -> f64 {
    let deducted = key_difference_count as f64 * POINTS_PER_KEY_DIFFERENCE;
    Score0To100::new(100.0 - deducted).value()
}

fn similarity_verdict(overall: f64) -> &'static str {
    if overall > 80.0 {
        "Very similar"
    } else if overall > 50.0 {
        "Somewhat similar"
    } else {
        "Quite different"
    }
}

/// Percentage gap on one component between the two sites
#[derive(Debug, Clone, Copy)]
struct ComponentGap {
    kind: ComponentKind,
    percentage_a: f64,
    percentage_b: f64,
}

impl ComponentGap {
    fn magnitude(&self) -> f64 {
        (self.percentage_a - self.percentage_b).abs()
    }
}

/// Compares two single-page analyses
#[derive(Debug, Clone)]
pub struct SiteComparisonEngine {
    checklist: KeyDifferenceChecklist,
    config: SiteComparisonConfig,
}

impl Default for SiteComparisonEngine {
    fn default() -> Self {
        Self {
            checklist: KeyDifferenceChecklist::default(),
            config: SiteComparisonConfig::default(),
        }
    }
}

impl SiteComparisonEngine {
    pub fn new(config: SiteComparisonConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            checklist: config.checklist()?,
            config,
        })
    }

    pub fn checklist(&self) -> &KeyDifferenceChecklist {
        &self.checklist
    }

    pub fn compare_sites<'a>(
        &self,
        a: SiteReport<'a>,
        b: SiteReport<'a>,
    ) -> Result<SiteComparisonResult<'a>> {
        let label_a = a.label("site A");
        let label_b = b.label("site B");
        a.validate(&label_a)?;
        b.validate(&label_b)?;

        let content_score = Score0To100::new(
            text_similarity(a.snapshot, b.snapshot) * CONTENT_TEXT_WEIGHT
                + structure_similarity(a.snapshot, b.snapshot) * CONTENT_STRUCTURE_WEIGHT,
        );
        let accessibility_score = Score0To100::new(
            100.0
                - (a.llm.total_score - b.llm.total_score).abs()
                - (a.scraper.total_score - b.scraper.total_score).abs(),
        );

        let differences = self.checklist.differences(a.snapshot, b.snapshot);
        let technical_score = Score0To100::new(technical_score(differences.len()));

        let overall_similarity = Score0To100::new(
            content_score.value() * OVERALL_CONTENT_WEIGHT
                + accessibility_score.value() * OVERALL_ACCESSIBILITY_WEIGHT
                + technical_score.value() * OVERALL_TECHNICAL_WEIGHT,
        );

        let key_differences: Vec<String> = differences
            .iter()
            .map(|d| d.describe(&label_a, &label_b))
            .collect();

        let gaps = component_gaps(a.scraper, b.scraper);
        let mut insights = self.insights(overall_similarity.value(), &gaps, &label_a, &label_b);
        insights.extend(content_count_insights(a.snapshot, b.snapshot, &label_a, &label_b));
        if !key_differences.is_empty() {
            insights.push(format!(
                "{} key difference(s): {}",
                key_differences.len(),
                key_differences.join("; ")
            ));
        }
        let recommendations = self.gap_recommendations(&gaps, &label_a, &label_b);

        info!(
            site_a = %label_a,
            site_b = %label_b,
            overall = overall_similarity.value(),
            key_differences = key_differences.len(),
            "compared sites"
        );

        Ok(SiteComparisonResult {
            content_score: content_score.value(),
            accessibility_score: accessibility_score.value(),
            technical_score: technical_score.value(),
            overall_similarity: overall_similarity.value(),
            checklist_version: self.checklist.version(),
            key_differences,
            insights,
            recommendations,
            site_a_scraper: a.scraper,
            site_a_llm: a.llm,
            site_b_scraper: b.scraper,
            site_b_llm: b.llm,
        })
    }

    fn insights(
        &self,
        overall: f64,
        gaps: &[ComponentGap],
        label_a: &str,
        label_b: &str,
    ) -> Vec<String> {
        let mut insights = vec![format!(
            "Overall similarity: {:.0}% - {}",
            overall,
            similarity_verdict(overall)
        )];

        insights.extend(
            gaps.iter()
                .filter(|gap| gap.magnitude() > 0.0)
                .take(self.config.max_gap_insights)
                .map(|gap| {
                    let (leader, trailer) = if gap.percentage_a >= gap.percentage_b {
                        (label_a, label_b)
                    } else {
                        (label_b, label_a)
                    };
                    format!(
                        "{}: {} leads {} by {:.0} points ({:.0}% vs {:.0}%)",
                        gap.kind.name(),
                        leader,
                        trailer,
                        gap.magnitude(),
                        gap.percentage_a.max(gap.percentage_b),
                        gap.percentage_a.min(gap.percentage_b)
                    )
                }),
        );
        insights
    }

    fn gap_recommendations(
        &self,
        gaps: &[ComponentGap],
        label_a: &str,
        label_b: &str,
    ) -> Vec<Recommendation> {
        let mut recommendations: Vec<Recommendation> = gaps
            .iter()
            .filter(|gap| gap.magnitude() >= self.config.gap_threshold)
            .map(|gap| {
                let (trailer, trailing, leader, leading) = if gap.percentage_a < gap.percentage_b
                {
                    (label_a, gap.percentage_a, label_b, gap.percentage_b)
                } else {
                    (label_b, gap.percentage_b, label_a, gap.percentage_a)
                };
                let template = templates::for_component(gap.kind);
                let description = format!(
                    "{trailer} scores {trailing:.0}% on {} against {leading:.0}% for {leader}. {}",
                    gap.kind.name(),
                    template.description
                );
                Recommendation::from_template(
                    &template,
                    gap.kind,
                    Priority::from_gap(gap.magnitude()),
                    description,
                )
            })
            .collect();
        recommendations.sort_by(|x, y| {
            x.priority
                .cmp(&y.priority)
                .then(x.impact.cmp(&y.impact))
                .then(x.source.cmp(&y.source))
        });
        recommendations
    }
}

/// Word count, semantic structure and link differences large enough to note
fn content_count_insights(
    a: &AnalysisSnapshot,
    b: &AnalysisSnapshot,
    label_a: &str,
    label_b: &str,
) -> Vec<String> {
    let words = (u64::from(a.content.word_count), u64::from(b.content.word_count));
    let semantic = (
        a.structure.semantic_elements.len() as u64,
        b.structure.semantic_elements.len() as u64,
    );
    let links = (u64::from(a.content.links), u64::from(b.content.links));

    let mut insights = Vec::new();
    if exceeds_share(words.0, words.1) {
        insights.push(count_insight(
            "Significant word count difference",
            "words",
            words,
            label_a,
            label_b,
        ));
    }
    if semantic.0.abs_diff(semantic.1) > SEMANTIC_ELEMENT_DIFFERENCE {
        insights.push(count_insight(
            "Different semantic structure",
            "semantic elements",
            semantic,
            label_a,
            label_b,
        ));
    }
    if exceeds_share(links.0, links.1) {
        insights.push(count_insight("Different link density", "links", links, label_a, label_b));
    }
    insights
}

fn exceeds_share(a: u64, b: u64) -> bool {
    a.abs_diff(b) as f64 > a.max(b) as f64 * COUNT_DIFFERENCE_SHARE
}

fn count_insight(
    heading: &str,
    unit: &str,
    (a, b): (u64, u64),
    label_a: &str,
    label_b: &str,
) -> String {
    let (more, fewer) = if a > b { (label_a, label_b) } else { (label_b, label_a) };
    format!(
        "{heading}: {more} has {} more {unit} than {fewer} ({} vs {})",
        a.abs_diff(b),
        a.max(b),
        a.min(b)
    )
}

/// Per-component gaps, largest first, ties in evaluation order
fn component_gaps(a: &ScoreBreakdown, b: &ScoreBreakdown) -> Vec<ComponentGap> {
    let mut gaps: Vec<ComponentGap> = ComponentKind::ALL
        .iter()
        .map(|kind| ComponentGap {
            kind: *kind,
            percentage_a: a.percentage_of(*kind),
            percentage_b: b.percentage_of(*kind),
        })
        .collect();
    gaps.sort_by(|x, y| {
        y.magnitude()
            .partial_cmp(&x.magnitude())
            .unwrap_or(Ordering::Equal)
            .then(x.kind.cmp(&y.kind))
    });
    gaps
}
