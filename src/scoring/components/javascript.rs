//! JavaScript dependency. An inverse component: points come from the
//! absence of client-rendering indicators, and confirmed SPA signals or a
//! rendered-content gap pull the score back toward zero.

use super::RuleOutcome;
use crate::comparison::ContentComparisonResult;
use crate::config::{ceiling_tier, JavaScriptRules};
use crate::scoring::component::IssueKind;
use crate::snapshot::AnalysisSnapshot;

pub fn evaluate(
    snapshot: &AnalysisSnapshot,
    comparison: Option<&ContentComparisonResult>,
    rules: &JavaScriptRules,
) -> RuleOutcome {
    let mut outcome = RuleOutcome::new(rules.raw_max());
    let scripts = &snapshot.scripts;

    // An empty static shell is the strongest sign of client rendering
    if snapshot.content.word_count == 0 {
        outcome.issue(
            IssueKind::NoStaticContent,
            "No text in the static HTML; content appears to require JavaScript",
        );
        return outcome;
    }

    if !scripts.dynamic_content_detected {
        outcome.award(rules.no_dynamic_points);
        outcome.strength("Content is present without dynamic loading");
    } else if !scripts.is_spa && scripts.total_scripts() <= rules.light_script_limit {
        outcome.award(rules.light_dynamic_points);
        outcome.issue(
            IssueKind::DynamicContentWithoutSsr,
            "Some content loads dynamically",
        );
    } else {
        outcome.issue(
            IssueKind::DynamicContentWithoutSsr,
            format!(
                "Dynamic content across {} script(s) without server-side rendering",
                scripts.total_scripts()
            ),
        );
    }

    let external = scripts.external_scripts;
    match ceiling_tier(&rules.external_script_tiers, external) {
        Some(tier) if Some(tier) == rules.external_script_tiers.first() => {
            outcome.award(tier.points);
            outcome.strength(format!("Light script load: {} external script(s)", external));
        }
        Some(tier) => {
            outcome.award(tier.points);
            outcome.issue(
                IssueKind::HeavyScripts,
                format!("{} external scripts", external),
            );
        }
        None => outcome.issue(
            IssueKind::HeavyScripts,
            format!("Heavy script load: {} external scripts", external),
        ),
    }

    if scripts.has_ajax {
        outcome.issue(IssueKind::AjaxContent, "Content is fetched with AJAX after load");
    } else {
        outcome.award(rules.no_ajax_points);
        outcome.strength("No AJAX content loading detected");
    }

    if scripts.is_spa {
        outcome.deduct(f64::from(rules.spa_penalty));
        outcome.issue(
            IssueKind::SpaDetected,
            "Single-page application: crawlers without JavaScript see an empty shell",
        );
    }

    let confirmed = scripts.confirmed_frameworks(rules.framework_confidence);
    if !confirmed.is_empty() {
        outcome.deduct(f64::from(rules.framework_penalty));
        let names: Vec<&str> = confirmed.iter().map(|f| f.name.as_str()).collect();
        outcome.issue(
            IssueKind::ClientFramework,
            format!("Client-side framework detected: {}", names.join(", ")),
        );
    }

    if let Some(comparison) = comparison {
        if comparison.is_js_dependent {
            let dissimilarity = (100.0 - comparison.text_similarity_score).clamp(0.0, 100.0) / 100.0;
            outcome.deduct(f64::from(rules.rendered_gap_penalty) * dissimilarity);
            outcome.issue(
                IssueKind::RenderedContentGap,
                format!(
                    "Rendering changes the content: static text is only {:.0}% similar",
                    comparison.text_similarity_score
                ),
            );
        } else {
            outcome.strength(format!(
                "Static HTML matches the rendered page ({:.0}% similar)",
                comparison.text_similarity_score
            ));
        }
    }

    outcome.points = outcome.points.max(0.0);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{DetectedFramework, ScriptSignals};

    fn snapshot_with(scripts: ScriptSignals) -> AnalysisSnapshot {
        let mut snapshot = AnalysisSnapshot::default();
        snapshot.content.word_count = 300;
        snapshot.content.character_count = 1800;
        snapshot.scripts = scripts;
        snapshot
    }

    #[test]
    fn scriptless_page_earns_full_points() {
        let outcome = evaluate(&snapshot_with(ScriptSignals::default()), None, &JavaScriptRules::default());
        assert_eq!(outcome.points, 10.0);
        assert!(outcome.issues.is_empty());
    }

    #[test]
    fn spa_with_framework_is_driven_to_zero() {
        let scripts = ScriptSignals {
            external_scripts: 12,
            inline_scripts: 4,
            frameworks: vec![DetectedFramework::new("React", 0.95)],
            is_spa: true,
            has_ajax: true,
            dynamic_content_detected: true,
        };
        let outcome = evaluate(&snapshot_with(scripts), None, &JavaScriptRules::default());
        assert_eq!(outcome.points, 0.0);
        let kinds: Vec<IssueKind> = outcome.issues.iter().map(|i| i.kind).collect();
        assert!(kinds.contains(&IssueKind::SpaDetected));
        assert!(kinds.contains(&IssueKind::ClientFramework));
    }

    #[test]
    fn low_confidence_framework_is_ignored() {
        let scripts = ScriptSignals {
            frameworks: vec![DetectedFramework::new("Vue", 0.3)],
            ..Default::default()
        };
        let outcome = evaluate(&snapshot_with(scripts), None, &JavaScriptRules::default());
        assert_eq!(outcome.points, 10.0);
    }

    #[test]
    fn light_dynamic_content_gets_partial_credit() {
        let scripts = ScriptSignals {
            external_scripts: 2,
            dynamic_content_detected: true,
            ..Default::default()
        };
        let outcome = evaluate(&snapshot_with(scripts), None, &JavaScriptRules::default());
        // 3 (light dynamic) + 3 (<= 3 external) + 2 (no AJAX)
        assert_eq!(outcome.points, 8.0);
    }

    #[test]
    fn empty_static_shell_scores_zero() {
        let outcome = evaluate(&AnalysisSnapshot::default(), None, &JavaScriptRules::default());
        assert_eq!(outcome.points, 0.0);
        assert_eq!(outcome.issues[0].kind, IssueKind::NoStaticContent);
        assert!(outcome.strengths.is_empty());
    }

    #[test]
    fn rendered_gap_scales_with_dissimilarity() {
        let comparison = ContentComparisonResult {
            text_similarity_score: 25.0,
            is_js_dependent: true,
            ..Default::default()
        };
        let outcome = evaluate(
            &snapshot_with(ScriptSignals::default()),
            Some(&comparison),
            &JavaScriptRules::default(),
        );
        assert_eq!(outcome.points, 10.0 - 3.0);
        assert!(outcome
            .issues
            .iter()
            .any(|i| i.kind == IssueKind::RenderedContentGap));
    }
}
