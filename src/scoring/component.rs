//! Score components and the typed findings attached to them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The six scored aspects of a page, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    StaticContent,
    SemanticHtml,
    StructuredData,
    MetaTags,
    JavaScript,
    CrawlerAccess,
}

impl ComponentKind {
    /// All components in evaluation order
    pub const ALL: [ComponentKind; 6] = [
        ComponentKind::StaticContent,
        ComponentKind::SemanticHtml,
        ComponentKind::StructuredData,
        ComponentKind::MetaTags,
        ComponentKind::JavaScript,
        ComponentKind::CrawlerAccess,
    ];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            ComponentKind::StaticContent => "Static Content Quality",
            ComponentKind::SemanticHtml => "Semantic HTML Structure",
            ComponentKind::StructuredData => "Structured Data",
            ComponentKind::MetaTags => "Meta Tag Completeness",
            ComponentKind::JavaScript => "JavaScript Dependency",
            ComponentKind::CrawlerAccess => "Crawler Accessibility",
        }
    }

    pub fn category(&self) -> Category {
        match self {
            ComponentKind::StaticContent => Category::Content,
            ComponentKind::SemanticHtml => Category::Html,
            ComponentKind::StructuredData => Category::StructuredData,
            ComponentKind::MetaTags => Category::Meta,
            ComponentKind::JavaScript => Category::Javascript,
            ComponentKind::CrawlerAccess => Category::Crawler,
        }
    }

    /// Position in evaluation order, used as a deterministic tie-breaker
    pub fn evaluation_index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Domain a component (and its recommendations) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Content,
    Html,
    StructuredData,
    Meta,
    Javascript,
    Crawler,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Content => "content",
            Category::Html => "html",
            Category::StructuredData => "structured_data",
            Category::Meta => "meta",
            Category::Javascript => "javascript",
            Category::Crawler => "crawler",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a lost-points finding is about; selects the remediation template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    // Static content
    ThinContent,
    FewParagraphs,
    FewLinks,
    NoRichMedia,
    TokenInefficient,
    // Semantic HTML
    FewSemanticElements,
    MissingH1,
    MultipleH1,
    HeadingHierarchy,
    PoorStructure,
    ExcessiveDomDepth,
    // Structured data
    MissingJsonLd,
    MissingMicrodata,
    MissingRdfa,
    UnrecognizedSchemaTypes,
    // Meta tags
    MissingTitle,
    TitleLength,
    MissingDescription,
    DescriptionLength,
    IncompleteOpenGraph,
    MissingTwitterCard,
    MissingCanonical,
    // JavaScript
    NoStaticContent,
    DynamicContentWithoutSsr,
    HeavyScripts,
    AjaxContent,
    SpaDetected,
    ClientFramework,
    RenderedContentGap,
    // Crawler access
    MissingRobotsTxt,
    RobotsDisallow,
    MissingSitemap,
    MissingLlmsTxt,
}

/// A lost-points finding with a human-readable explanation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub kind: IssueKind,
    pub message: String,
}

impl Issue {
    pub fn new(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// One scored aspect of a page within a profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub kind: ComponentKind,
    pub name: String,
    pub category: Category,
    pub score: f64,
    pub max_score: f64,
    pub percentage: f64,
    pub strengths: Vec<String>,
    pub issues: Vec<Issue>,
}

impl ScoreComponent {
    /// Build a component, clamping the score into `[0, max_score]`
    pub fn new(
        kind: ComponentKind,
        score: f64,
        max_score: f64,
        strengths: Vec<String>,
        issues: Vec<Issue>,
    ) -> Self {
        let max_score = if max_score.is_finite() && max_score > 0.0 {
            max_score
        } else {
            0.0
        };
        let score = if score.is_finite() {
            score.clamp(0.0, max_score)
        } else {
            0.0
        };
        let percentage = if max_score > 0.0 {
            score / max_score * 100.0
        } else {
            0.0
        };

        Self {
            kind,
            name: kind.name().to_string(),
            category: kind.category(),
            score,
            max_score,
            percentage,
            strengths,
            issues,
        }
    }

    /// Whether the component earned every available point
    pub fn is_full_marks(&self) -> bool {
        self.max_score > 0.0 && self.score >= self.max_score
    }

    /// Whether the stored values satisfy `0 <= score <= max_score`
    pub fn is_consistent(&self) -> bool {
        self.score.is_finite()
            && self.max_score.is_finite()
            && self.max_score > 0.0
            && self.score >= 0.0
            && self.score <= self.max_score + f64::EPSILON
    }
}
