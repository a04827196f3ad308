// Integration tests for crawlability.toml loading and validation

mod common;

use anyhow::Result;
use common::{filler_text, text_snapshot};
use crawlability::comparison::KeyAttribute;
use crawlability::config::CONFIG_FILE_NAME;
use crawlability::{
    load_config_from_dir, load_config_from_path, parse_and_validate_config, ComponentKind,
    CrawlabilityConfig, PageAnalyzer,
};
use indoc::indoc;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

#[test]
fn missing_file_yields_defaults() -> Result<()> {
    let dir = TempDir::new()?;
    let config = load_config_from_dir(dir.path())?;
    assert_eq!(config, CrawlabilityConfig::default());
    Ok(())
}

#[test]
fn custom_tiers_change_the_word_boundary() -> Result<()> {
    let config = parse_and_validate_config(indoc! {r#"
        [rules.content]
        word_tiers = [
            { at_least = 800, points = 10 },
            { at_least = 300, points = 7 },
            { at_least = 50, points = 4 },
        ]
    "#})?;
    let analyzer = PageAnalyzer::new(&config)?;
    let snapshot = text_snapshot("", &filler_text(600));

    let analysis = analyzer.analyze(&snapshot, None)?;
    let content = analysis
        .scraper
        .component(ComponentKind::StaticContent)
        .map(|c| c.score);
    assert_eq!(content, Some(7.0));
    Ok(())
}

#[test]
fn weights_that_do_not_total_one_hundred_are_fatal() {
    let err = parse_and_validate_config(indoc! {r#"
        [profiles.llm]
        static_content = 40
        semantic_html = 25
        structured_data = 20
        meta_tags = 15
        javascript = 5
        crawler_access = 5
    "#})
    .unwrap_err();
    assert!(err.is_weight_table());
    assert!(err.to_string().contains("LLM-Accessibility"));
}

#[test]
fn loads_site_comparison_section_from_disk() -> Result<()> {
    let dir = TempDir::new()?;
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(
        &path,
        indoc! {r#"
            [comparison]
            js_dependency_threshold = 75.0

            [site_comparison]
            checklist_version = 3
            attributes = ["structured_data_presence", "llms_txt_presence"]
            gap_threshold = 20.0
        "#},
    )?;

    let config = load_config_from_path(&path)?;
    assert_eq!(config.comparison.js_dependency_threshold, 75.0);
    let checklist = config.site_comparison.checklist()?;
    assert_eq!(checklist.version(), 3);
    assert_eq!(
        checklist.attributes(),
        &[KeyAttribute::StructuredDataPresence, KeyAttribute::LlmsTxtPresence]
    );
    assert_eq!(load_config_from_dir(dir.path())?, config);
    Ok(())
}

#[test]
fn unknown_checklist_version_is_rejected() {
    let err = parse_and_validate_config(indoc! {r#"
        [site_comparison]
        checklist_version = 9
    "#})
    .unwrap_err();
    assert!(err.to_string().contains("checklist version 9"));
}

#[test]
fn malformed_toml_reports_the_file_name() {
    let err = parse_and_validate_config("[profiles.scraper\nstatic_content = 1").unwrap_err();
    assert!(err.to_string().contains(CONFIG_FILE_NAME));
}

#[test]
fn unreadable_path_is_a_configuration_error() {
    let dir = TempDir::new().expect("temp dir");
    let err = load_config_from_path(&dir.path().join("absent.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}
