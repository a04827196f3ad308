// Shared snapshot fixtures for crawlability integration tests
#![allow(dead_code)]

use crawlability::snapshot::{
    DetectedFramework, Heading, StructuredDataFormat, StructuredDataItem,
};
use crawlability::AnalysisSnapshot;
use std::collections::BTreeSet;

/// Repeat a filler sentence until `words` words are produced
pub fn filler_text(words: u32) -> String {
    const SENTENCE: [&str; 10] = [
        "Our", "team", "builds", "durable", "outdoor", "gear", "for", "long", "mountain", "trips.",
    ];
    (0..words as usize)
        .map(|i| SENTENCE[i % SENTENCE.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

/// A snapshot carrying only text content
pub fn text_snapshot(url: &str, text: &str) -> AnalysisSnapshot {
    let mut snapshot = AnalysisSnapshot::default();
    snapshot.url = url.to_string();
    snapshot.content.text_content = text.to_string();
    snapshot.content.word_count = text.split_whitespace().count() as u32;
    snapshot.content.character_count = text.chars().count() as u32;
    snapshot
}

/// A well-built server-rendered page: 600 words, 6 paragraphs, 12 links,
/// one JSON-LD Organization block, complete meta tags, no scripts and a
/// permissive robots.txt with a sitemap
pub fn well_built_page() -> AnalysisSnapshot {
    let mut snapshot = text_snapshot("https://example.com/", &filler_text(600));
    snapshot.content.estimated_tokens = 780;
    snapshot.content.paragraphs = 6;
    snapshot.content.links = 12;
    snapshot.content.images = 3;
    snapshot.content.lists = 1;

    snapshot.structure.semantic_elements = ["header", "nav", "main", "article", "section", "footer"]
        .iter()
        .map(|s| s.to_string())
        .collect::<BTreeSet<_>>();
    snapshot.structure.headings = vec![
        Heading::new(1, "Outdoor gear built to last"),
        Heading::new(2, "Tents"),
        Heading::new(3, "Four-season tents"),
        Heading::new(2, "Packs"),
    ];
    snapshot.structure.total_elements = 240;
    snapshot.structure.dom_depth = 8;
    snapshot.structure.has_proper_structure = true;

    let meta = &mut snapshot.meta;
    meta.title = "Durable outdoor gear for long mountain trips".to_string();
    meta.description = "Tents, packs and sleeping systems designed and tested by guides \
                        for multi-day trips in harsh alpine weather. Free repairs for life."
        .to_string();
    meta.canonical_url = "https://example.com/".to_string();
    for key in ["og:title", "og:description", "og:image", "og:url"] {
        meta.open_graph.insert(key.to_string(), "value".to_string());
    }
    meta.twitter_card
        .insert("twitter:card".to_string(), "summary_large_image".to_string());
    meta.has_json_ld = true;
    meta.structured_data = vec![StructuredDataItem::new(
        StructuredDataFormat::JsonLd,
        "Organization",
    )];

    snapshot.crawler.has_robots_txt = true;
    snapshot.crawler.robots_allows = true;
    snapshot.crawler.has_sitemap = true;
    snapshot
}

/// A client-rendered shell: almost no static text and a confirmed framework
pub fn spa_shell(url: &str) -> AnalysisSnapshot {
    let mut snapshot = text_snapshot(url, "Loading");
    snapshot.scripts.inline_scripts = 2;
    snapshot.scripts.external_scripts = 12;
    snapshot.scripts.is_spa = true;
    snapshot.scripts.has_ajax = true;
    snapshot.scripts.dynamic_content_detected = true;
    snapshot.scripts.frameworks = vec![DetectedFramework::new("React", 0.95)];
    snapshot
}
