//! Versioned checklist of categorical attributes compared across sites.
//!
//! Every attribute reduces a snapshot to a small categorical observation;
//! two sites differ on an attribute when their observations are unequal.
//! Version 1 holds the five core attributes. Version 2 adds llms.txt and
//! sitemap presence.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::errors::{Error, Result};
use crate::snapshot::AnalysisSnapshot;

/// Minimum confidence for a detected framework to define the family
const FRAMEWORK_CONFIDENCE: f64 = 0.5;

/// Below this many static words, dynamic content means client rendering
const CLIENT_RENDERED_WORD_LIMIT: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAttribute {
    StructuredDataPresence,
    RenderingStrategy,
    FrameworkFamily,
    RobotsPosture,
    MetaCompleteness,
    LlmsTxtPresence,
    SitemapPresence,
}

impl KeyAttribute {
    pub fn label(&self) -> &'static str {
        match self {
            KeyAttribute::StructuredDataPresence => "Structured data",
            KeyAttribute::RenderingStrategy => "Rendering strategy",
            KeyAttribute::FrameworkFamily => "Framework",
            KeyAttribute::RobotsPosture => "robots.txt",
            KeyAttribute::MetaCompleteness => "Meta tags",
            KeyAttribute::LlmsTxtPresence => "llms.txt",
            KeyAttribute::SitemapPresence => "Sitemap",
        }
    }

    pub fn observe(&self, snapshot: &AnalysisSnapshot) -> Observation {
        match self {
            KeyAttribute::StructuredDataPresence => {
                Observation::Presence(snapshot.meta.has_structured_data())
            }
            KeyAttribute::RenderingStrategy => {
                Observation::Rendering(RenderingStrategy::of(snapshot))
            }
            KeyAttribute::FrameworkFamily => Observation::Framework(FrameworkFamily::of(snapshot)),
            KeyAttribute::RobotsPosture => Observation::Robots(RobotsPosture::of(snapshot)),
            KeyAttribute::MetaCompleteness => Observation::Meta(MetaTier::of(snapshot)),
            KeyAttribute::LlmsTxtPresence => Observation::Presence(snapshot.crawler.has_llms_txt),
            KeyAttribute::SitemapPresence => Observation::Presence(snapshot.crawler.has_sitemap),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderingStrategy {
    Server,
    Client,
}

impl RenderingStrategy {
    pub fn of(snapshot: &AnalysisSnapshot) -> Self {
        let scripts = &snapshot.scripts;
        if scripts.is_spa
            || (scripts.dynamic_content_detected
                && snapshot.content.word_count < CLIENT_RENDERED_WORD_LIMIT)
        {
            RenderingStrategy::Client
        } else {
            RenderingStrategy::Server
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameworkFamily {
    None,
    React,
    Vue,
    Angular,
    Svelte,
    Other,
}

impl FrameworkFamily {
    /// Family of the most confident detected framework
    pub fn of(snapshot: &AnalysisSnapshot) -> Self {
        snapshot
            .scripts
            .confirmed_frameworks(FRAMEWORK_CONFIDENCE)
            .first()
            .map(|framework| Self::from_name(&framework.name))
            .unwrap_or(FrameworkFamily::None)
    }

    pub fn from_name(name: &str) -> Self {
        let name = name.to_lowercase();
        if name.contains("react") || name.contains("next") || name.contains("gatsby") {
            FrameworkFamily::React
        } else if name.contains("vue") || name.contains("nuxt") {
            FrameworkFamily::Vue
        } else if name.contains("angular") {
            FrameworkFamily::Angular
        } else if name.contains("svelte") {
            FrameworkFamily::Svelte
        } else {
            FrameworkFamily::Other
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RobotsPosture {
    Missing,
    Allows,
    Disallows,
}

impl RobotsPosture {
    pub fn of(snapshot: &AnalysisSnapshot) -> Self {
        match (snapshot.crawler.has_robots_txt, snapshot.crawler.robots_allows) {
            (false, _) => RobotsPosture::Missing,
            (true, true) => RobotsPosture::Allows,
            (true, false) => RobotsPosture::Disallows,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetaTier {
    Sparse,
    Partial,
    Complete,
}

impl MetaTier {
    /// Tier from how many of title, description, Open Graph, Twitter Card
    /// and canonical URL are present
    pub fn of(snapshot: &AnalysisSnapshot) -> Self {
        let meta = &snapshot.meta;
        let present = [
            meta.has_title(),
            meta.has_description(),
            !meta.open_graph.is_empty(),
            !meta.twitter_card.is_empty(),
            meta.has_canonical_url(),
        ]
        .iter()
        .filter(|p| **p)
        .count();
        match present {
            5 => MetaTier::Complete,
            3 | 4 => MetaTier::Partial,
            _ => MetaTier::Sparse,
        }
    }
}

/// A categorical value observed for one attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Observation {
    Presence(bool),
    Rendering(RenderingStrategy),
    Framework(FrameworkFamily),
    Robots(RobotsPosture),
    Meta(MetaTier),
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Observation::Presence(true) => "present",
            Observation::Presence(false) => "absent",
            Observation::Rendering(RenderingStrategy::Server) => "server-rendered",
            Observation::Rendering(RenderingStrategy::Client) => "client-rendered",
            Observation::Framework(FrameworkFamily::None) => "no framework",
            Observation::Framework(FrameworkFamily::React) => "React",
            Observation::Framework(FrameworkFamily::Vue) => "Vue",
            Observation::Framework(FrameworkFamily::Angular) => "Angular",
            Observation::Framework(FrameworkFamily::Svelte) => "Svelte",
            Observation::Framework(FrameworkFamily::Other) => "other framework",
            Observation::Robots(RobotsPosture::Missing) => "missing",
            Observation::Robots(RobotsPosture::Allows) => "allows crawling",
            Observation::Robots(RobotsPosture::Disallows) => "disallows crawling",
            Observation::Meta(MetaTier::Sparse) => "sparse",
            Observation::Meta(MetaTier::Partial) => "partial",
            Observation::Meta(MetaTier::Complete) => "complete",
        };
        f.write_str(text)
    }
}

/// One attribute on which two sites disagree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDifference {
    pub attribute: KeyAttribute,
    pub site_a: Observation,
    pub site_b: Observation,
}

impl KeyDifference {
    pub fn describe(&self, label_a: &str, label_b: &str) -> String {
        format!(
            "{}: {} ({}) vs {} ({})",
            self.attribute.label(),
            self.site_a,
            label_a,
            self.site_b,
            label_b
        )
    }
}

/// The attributes compared by one checklist version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDifferenceChecklist {
    version: u32,
    attributes: Vec<KeyAttribute>,
}

impl Default for KeyDifferenceChecklist {
    fn default() -> Self {
        Self::v1()
    }
}

impl KeyDifferenceChecklist {
    pub const CURRENT_VERSION: u32 = 1;
    pub const KNOWN_VERSIONS: [u32; 2] = [1, 2];

    pub fn v1() -> Self {
        Self {
            version: 1,
            attributes: vec![
                KeyAttribute::StructuredDataPresence,
                KeyAttribute::RenderingStrategy,
                KeyAttribute::FrameworkFamily,
                KeyAttribute::RobotsPosture,
                KeyAttribute::MetaCompleteness,
            ],
        }
    }

    pub fn v2() -> Self {
        let mut checklist = Self::v1();
        checklist.version = 2;
        checklist
            .attributes
            .extend([KeyAttribute::LlmsTxtPresence, KeyAttribute::SitemapPresence]);
        checklist
    }

    /// Built-in checklist for a version
    pub fn for_version(version: u32) -> Option<Self> {
        match version {
            1 => Some(Self::v1()),
            2 => Some(Self::v2()),
            _ => None,
        }
    }

    /// Checklist with an explicit attribute list
    pub fn custom(version: u32, attributes: Vec<KeyAttribute>) -> Result<Self> {
        if attributes.is_empty() {
            return Err(Error::config("key-difference checklist has no attributes"));
        }
        let distinct: BTreeSet<KeyAttribute> = attributes.iter().copied().collect();
        if distinct.len() != attributes.len() {
            return Err(Error::config(
                "key-difference checklist lists an attribute more than once",
            ));
        }
        Ok(Self {
            version,
            attributes,
        })
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn attributes(&self) -> &[KeyAttribute] {
        &self.attributes
    }

    /// Attributes whose observations differ, in checklist order
    pub fn differences(&self, a: &AnalysisSnapshot, b: &AnalysisSnapshot) -> Vec<KeyDifference> {
        self.attributes
            .iter()
            .filter_map(|attribute| {
                let site_a = attribute.observe(a);
                let site_b = attribute.observe(b);
                (site_a != site_b).then_some(KeyDifference {
                    attribute: *attribute,
                    site_a,
                    site_b,
                })
            })
            .collect()
    }
}
