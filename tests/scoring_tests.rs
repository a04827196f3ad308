// Integration tests for profile scoring through the public engine API

mod common;

use common::{filler_text, spa_shell, text_snapshot, well_built_page};
use crawlability::config::{ComponentWeights, RuleSet};
use crawlability::{ComponentKind, Grade, ProfileKind, ScoringEngine, ScoringProfile};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn static_content_score(engine: &ScoringEngine, words: u32) -> f64 {
    let snapshot = text_snapshot("", &filler_text(words));
    engine
        .score(&snapshot)
        .component(ComponentKind::StaticContent)
        .map(|c| c.score)
        .unwrap_or_default()
}

#[test]
fn word_count_tier_boundary_is_exact() {
    let scraper = ScoringEngine::scraper();
    assert_eq!(static_content_score(&scraper, 500), 10.0);
    assert_eq!(static_content_score(&scraper, 499), 7.0);
}

#[test]
fn llm_profile_scales_the_same_rules() {
    let llm = ScoringEngine::llm();
    assert_eq!(static_content_score(&llm, 500), 12.0);
    assert_eq!(static_content_score(&llm, 499), 8.4);
}

#[test]
fn components_follow_evaluation_order() {
    let breakdown = ScoringEngine::llm().score(&well_built_page());
    let kinds: Vec<ComponentKind> = breakdown.components.iter().map(|c| c.kind).collect();
    assert_eq!(kinds, ComponentKind::ALL.to_vec());
    assert_eq!(breakdown.profile, ProfileKind::Llm);
    assert_eq!(breakdown.available_points(), 100.0);
}

#[test]
fn spa_shell_loses_javascript_points() {
    let breakdown = ScoringEngine::scraper().score(&spa_shell("https://app.example"));
    let js = breakdown
        .component(ComponentKind::JavaScript)
        .expect("javascript component");
    assert_eq!(js.score, 0.0);
    assert!(breakdown.grade < Grade::DMinus);
}

#[test]
fn custom_profile_must_total_one_hundred() {
    let weights = ComponentWeights {
        crawler_access: 20,
        ..ComponentWeights::SCRAPER
    };
    let err = ScoringProfile::new(ProfileKind::Scraper, weights).unwrap_err();
    assert!(err.is_weight_table());
    assert!(err.to_string().contains("Scraper-Friendliness"));
}

#[test]
fn explain_shows_every_component() {
    let breakdown = ScoringEngine::scraper().score(&well_built_page());
    let explanation = breakdown.explain();
    for component in &breakdown.components {
        assert!(explanation.contains(&component.name));
    }
    assert!(explanation.ends_with("= 92.0 (A-)"));
}

#[test]
fn custom_rules_are_validated_at_construction() {
    let mut rules = RuleSet::default();
    rules.crawler.robots_points = 0;
    rules.crawler.sitemap_points = 0;
    rules.crawler.llms_txt_points = 0;
    assert!(ScoringEngine::new(ScoringProfile::scraper(), rules).is_err());
}

proptest! {
    #[test]
    fn total_stays_in_bounds_and_matches_grade(
        words in 0u32..2000,
        paragraphs in 0u32..20,
        links in 0u32..40,
        external in 0u32..20,
        spa in any::<bool>(),
        robots in any::<bool>(),
    ) {
        let mut snapshot = text_snapshot("", &filler_text(words));
        snapshot.content.paragraphs = paragraphs;
        snapshot.content.links = links;
        snapshot.scripts.external_scripts = external;
        snapshot.scripts.is_spa = spa;
        snapshot.crawler.has_robots_txt = robots;
        snapshot.crawler.robots_allows = robots;

        for engine in [ScoringEngine::scraper(), ScoringEngine::llm()] {
            let breakdown = engine.score(&snapshot);
            prop_assert!((0.0..=100.0).contains(&breakdown.total_score));
            prop_assert_eq!(breakdown.grade, Grade::from_score(breakdown.total_score));
            prop_assert!(breakdown.validate().is_ok());
        }
    }

    #[test]
    fn scoring_is_idempotent(words in 0u32..1000) {
        let snapshot = text_snapshot("", &filler_text(words));
        let engine = ScoringEngine::scraper();
        prop_assert_eq!(engine.score(&snapshot), engine.score(&snapshot));
    }
}
