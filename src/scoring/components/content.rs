//! Static content quality: how much readable text the raw HTML carries.

use super::{tier_hit, top_threshold, RuleOutcome, TierHit};
use crate::config::ContentRules;
use crate::scoring::component::IssueKind;
use crate::snapshot::ContentSignals;

pub fn evaluate(content: &ContentSignals, rules: &ContentRules) -> RuleOutcome {
    let mut outcome = RuleOutcome::new(rules.raw_max());

    let words = content.word_count;
    match tier_hit(&rules.word_tiers, words) {
        TierHit::Top(points) => {
            outcome.award(points);
            outcome.strength(format!("Substantial content: {} words", words));
        }
        TierHit::Partial(points) => {
            outcome.award(points);
            outcome.issue(
                IssueKind::ThinContent,
                format!(
                    "Moderate content: {} words ({}+ earns full credit)",
                    words,
                    top_threshold(&rules.word_tiers)
                ),
            );
        }
        TierHit::Miss => outcome.issue(
            IssueKind::ThinContent,
            format!("Very little static text: {} words", words),
        ),
    }

    let paragraphs = content.paragraphs;
    match tier_hit(&rules.paragraph_tiers, paragraphs) {
        TierHit::Top(points) => {
            outcome.award(points);
            outcome.strength(format!("Well-structured text: {} paragraphs", paragraphs));
        }
        TierHit::Partial(points) => {
            outcome.award(points);
            outcome.issue(
                IssueKind::FewParagraphs,
                format!("Only {} paragraph(s) in the static HTML", paragraphs),
            );
        }
        TierHit::Miss => outcome.issue(
            IssueKind::FewParagraphs,
            "No paragraph elements in the static HTML",
        ),
    }

    let links = content.links;
    match tier_hit(&rules.link_tiers, links) {
        TierHit::Top(points) => {
            outcome.award(points);
            outcome.strength(format!("Good internal linking: {} links", links));
        }
        TierHit::Partial(points) => {
            outcome.award(points);
            outcome.issue(IssueKind::FewLinks, format!("Only {} link(s) found", links));
        }
        TierHit::Miss => outcome.issue(IssueKind::FewLinks, "No crawlable links found"),
    }

    if content.has_rich_media() {
        outcome.award(rules.rich_media_points);
        outcome.strength(format!(
            "Rich content: {} image(s), {} table(s), {} list(s)",
            content.images, content.tables, content.lists
        ));
    } else {
        outcome.issue(
            IssueKind::NoRichMedia,
            "No images, tables or lists in the static HTML",
        );
    }

    match content.token_word_ratio() {
        Some(ratio) if ratio <= rules.max_token_ratio => {
            outcome.award(rules.token_efficiency_points);
            outcome.strength(format!("Token-efficient text: {:.2} tokens per word", ratio));
        }
        Some(ratio) => outcome.issue(
            IssueKind::TokenInefficient,
            format!(
                "Token-heavy text: {:.2} tokens per word (target {:.1} or less)",
                ratio, rules.max_token_ratio
            ),
        ),
        None => outcome.issue(
            IssueKind::TokenInefficient,
            "Token efficiency unknown: no text to estimate tokens from",
        ),
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content(words: u32) -> ContentSignals {
        ContentSignals {
            word_count: words,
            character_count: words * 6,
            ..Default::default()
        }
    }

    #[test]
    fn five_hundred_words_reaches_top_tier() {
        let rules = ContentRules::default();
        let at = evaluate(&content(500), &rules);
        let below = evaluate(&content(499), &rules);
        assert_eq!(at.points, 10.0);
        assert_eq!(below.points, 7.0);
        assert!(at.strengths[0].contains("500 words"));
        assert_eq!(below.issues[0].kind, IssueKind::ThinContent);
    }

    #[test]
    fn full_content_earns_every_point() {
        let signals = ContentSignals {
            word_count: 800,
            character_count: 4800,
            estimated_tokens: 1000,
            paragraphs: 9,
            links: 15,
            images: 2,
            ..Default::default()
        };
        let outcome = evaluate(&signals, &ContentRules::default());
        assert_eq!(outcome.points, 25.0);
        assert!(outcome.issues.is_empty());
        assert_eq!(outcome.strengths.len(), 5);
    }

    #[test]
    fn empty_content_scores_nothing_and_explains_why() {
        let outcome = evaluate(&ContentSignals::default(), &ContentRules::default());
        assert_eq!(outcome.points, 0.0);
        assert_eq!(outcome.issues.len(), 5);
        assert!(outcome.strengths.is_empty());
    }

    #[test]
    fn token_heavy_text_loses_efficiency_points() {
        let signals = ContentSignals {
            word_count: 100,
            estimated_tokens: 200,
            ..Default::default()
        };
        let outcome = evaluate(&signals, &ContentRules::default());
        assert!(outcome
            .issues
            .iter()
            .any(|i| i.kind == IssueKind::TokenInefficient && i.message.contains("2.00")));
    }
}
