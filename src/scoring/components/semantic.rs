//! Semantic HTML structure: landmarks, heading outline and DOM shape.

use super::{tier_hit, RuleOutcome, TierHit};
use crate::config::SemanticRules;
use crate::scoring::component::IssueKind;
use crate::snapshot::{Heading, StructureSignals};

pub fn evaluate(structure: &StructureSignals, rules: &SemanticRules) -> RuleOutcome {
    let mut outcome = RuleOutcome::new(rules.raw_max());

    score_elements(structure, rules, &mut outcome);
    score_h1(structure, rules, &mut outcome);
    score_hierarchy(&structure.headings, rules, &mut outcome);

    if structure.has_proper_structure {
        outcome.award(rules.proper_structure_points);
        outcome.strength("Page uses a recognizable header/main/footer layout");
    } else {
        outcome.issue(
            IssueKind::PoorStructure,
            "No clear document layout (header, main, footer)",
        );
    }

    if structure.total_elements == 0 {
        outcome.issue(IssueKind::PoorStructure, "No DOM elements were reported");
    } else if structure.dom_depth <= rules.max_dom_depth {
        outcome.award(rules.dom_depth_points);
        outcome.strength(format!("Shallow DOM: depth {}", structure.dom_depth));
    } else {
        outcome.issue(
            IssueKind::ExcessiveDomDepth,
            format!(
                "Deeply nested DOM: depth {} (target {} or less)",
                structure.dom_depth, rules.max_dom_depth
            ),
        );
    }

    outcome
}

fn score_elements(structure: &StructureSignals, rules: &SemanticRules, outcome: &mut RuleOutcome) {
    let count = u32::try_from(structure.semantic_elements.len()).unwrap_or(u32::MAX);
    let listed = || {
        structure
            .semantic_elements
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    };
    match tier_hit(&rules.element_tiers, count) {
        TierHit::Top(points) => {
            outcome.award(points);
            outcome.strength(format!("Rich semantic markup: {}", listed()));
        }
        TierHit::Partial(points) => {
            outcome.award(points);
            outcome.issue(
                IssueKind::FewSemanticElements,
                format!("Limited semantic markup: {}", listed()),
            );
        }
        TierHit::Miss => outcome.issue(
            IssueKind::FewSemanticElements,
            "No semantic HTML5 elements (header, nav, main, article, section, footer)",
        ),
    }
}

fn score_h1(structure: &StructureSignals, rules: &SemanticRules, outcome: &mut RuleOutcome) {
    match structure.heading_count(1) {
        0 => outcome.issue(IssueKind::MissingH1, "Missing H1 heading"),
        1 => {
            outcome.award(rules.single_h1_points);
            outcome.strength("Single H1 heading");
        }
        n => {
            outcome.award(rules.multiple_h1_points);
            outcome.issue(IssueKind::MultipleH1, format!("{} H1 headings; use exactly one", n));
        }
    }
}

/// First place the outline jumps more than one level deeper
fn first_skip(headings: &[Heading]) -> Option<(u8, u8)> {
    headings
        .windows(2)
        .find(|pair| pair[1].level > pair[0].level.saturating_add(1))
        .map(|pair| (pair[0].level, pair[1].level))
}

fn score_hierarchy(headings: &[Heading], rules: &SemanticRules, outcome: &mut RuleOutcome) {
    let has_h2 = headings.iter().any(|h| h.level == 2);
    let has_subheadings = headings.iter().any(|h| h.level >= 2);

    match (has_h2, first_skip(headings)) {
        (true, None) => {
            outcome.award(rules.nested_headings_points);
            outcome.strength("Heading levels nest without gaps");
        }
        (_, Some((from, to))) => {
            outcome.award(rules.skipped_headings_points);
            outcome.issue(
                IssueKind::HeadingHierarchy,
                format!("Heading hierarchy skips a level (H{} followed by H{})", from, to),
            );
        }
        (false, None) if has_subheadings => {
            outcome.award(rules.skipped_headings_points);
            outcome.issue(
                IssueKind::HeadingHierarchy,
                "Subheadings start below H2",
            );
        }
        (false, None) => outcome.issue(
            IssueKind::HeadingHierarchy,
            "No H2 subheadings to outline the content",
        ),
    }
}
