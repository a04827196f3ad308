//! Meta tag completeness.

use super::{tier_hit, top_threshold, RuleOutcome, TierHit};
use crate::config::MetaRules;
use crate::scoring::component::IssueKind;
use crate::snapshot::MetaSignals;

pub fn evaluate(meta: &MetaSignals, rules: &MetaRules) -> RuleOutcome {
    let mut outcome = RuleOutcome::new(rules.raw_max());

    score_length(
        &mut outcome,
        rules,
        "Title",
        &meta.title,
        (rules.title_min_length, rules.title_max_length),
        (IssueKind::MissingTitle, IssueKind::TitleLength),
    );
    score_length(
        &mut outcome,
        rules,
        "Meta description",
        &meta.description,
        (rules.description_min_length, rules.description_max_length),
        (IssueKind::MissingDescription, IssueKind::DescriptionLength),
    );

    let og_tags = u32::try_from(meta.open_graph.len()).unwrap_or(u32::MAX);
    match tier_hit(&rules.open_graph_tiers, og_tags) {
        TierHit::Top(points) => {
            outcome.award(points);
            outcome.strength(format!("Complete Open Graph tags ({})", og_tags));
        }
        TierHit::Partial(points) => {
            outcome.award(points);
            outcome.issue(
                IssueKind::IncompleteOpenGraph,
                format!(
                    "Only {} Open Graph tag(s); {} expected",
                    og_tags,
                    top_threshold(&rules.open_graph_tiers)
                ),
            );
        }
        TierHit::Miss => outcome.issue(IssueKind::IncompleteOpenGraph, "No Open Graph tags"),
    }

    if meta.twitter_card.is_empty() {
        outcome.issue(IssueKind::MissingTwitterCard, "No Twitter Card tags");
    } else {
        outcome.award(rules.twitter_card_points);
        outcome.strength("Twitter Card tags present");
    }

    if meta.has_canonical_url() {
        outcome.award(rules.canonical_points);
        outcome.strength("Canonical URL declared");
    } else {
        outcome.issue(IssueKind::MissingCanonical, "No canonical URL");
    }

    outcome
}

fn score_length(
    outcome: &mut RuleOutcome,
    rules: &MetaRules,
    label: &str,
    value: &str,
    (min, max): (usize, usize),
    (missing, out_of_range): (IssueKind, IssueKind),
) {
    let length = value.trim().chars().count();
    if length == 0 {
        outcome.issue(missing, format!("{} is missing", label));
    } else if (min..=max).contains(&length) {
        outcome.award(rules.in_range_points);
        outcome.strength(format!("{} length is optimal ({} characters)", label, length));
    } else {
        outcome.award(rules.present_points);
        outcome.issue(
            out_of_range,
            format!(
                "{} is {} characters (aim for {}-{})",
                label, length, min, max
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn tags(keys: &[&str]) -> BTreeMap<String, String> {
        keys.iter()
            .map(|k| (k.to_string(), "value".to_string()))
            .collect()
    }

    #[test]
    fn complete_meta_earns_full_points() {
        let meta = MetaSignals {
            title: "A".repeat(45),
            description: "d".repeat(140),
            canonical_url: "https://example.com/".to_string(),
            open_graph: tags(&["og:title", "og:description", "og:image", "og:url"]),
            twitter_card: tags(&["twitter:card"]),
            ..Default::default()
        };
        let outcome = evaluate(&meta, &MetaRules::default());
        assert_eq!(outcome.points, 15.0);
        assert!(outcome.issues.is_empty());
    }

    #[test]
    fn length_bounds_are_inclusive() {
        let rules = MetaRules::default();
        for (len, expected) in [(29, 2.0), (30, 4.0), (60, 4.0), (61, 2.0)] {
            let meta = MetaSignals {
                title: "t".repeat(len),
                ..Default::default()
            };
            let mut outcome = RuleOutcome::new(rules.raw_max());
            score_length(
                &mut outcome,
                &rules,
                "Title",
                &meta.title,
                (rules.title_min_length, rules.title_max_length),
                (IssueKind::MissingTitle, IssueKind::TitleLength),
            );
            assert_eq!(outcome.points, expected, "title length {}", len);
        }
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let meta = MetaSignals {
            title: "é".repeat(40),
            ..Default::default()
        };
        let outcome = evaluate(&meta, &MetaRules::default());
        assert!(outcome.strengths.iter().any(|s| s.contains("40 characters")));
    }

    #[test]
    fn missing_tags_each_raise_an_issue() {
        let outcome = evaluate(&MetaSignals::default(), &MetaRules::default());
        let kinds: Vec<IssueKind> = outcome.issues.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                IssueKind::MissingTitle,
                IssueKind::MissingDescription,
                IssueKind::IncompleteOpenGraph,
                IssueKind::MissingTwitterCard,
                IssueKind::MissingCanonical,
            ]
        );
    }
}
