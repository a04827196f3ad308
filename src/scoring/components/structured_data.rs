//! Structured data: JSON-LD, Microdata and RDFa plus recognized Schema.org types.

use super::RuleOutcome;
use crate::config::StructuredDataRules;
use crate::scoring::component::IssueKind;
use crate::snapshot::{MetaSignals, StructuredDataFormat};

pub fn evaluate(meta: &MetaSignals, rules: &StructuredDataRules) -> RuleOutcome {
    let mut outcome = RuleOutcome::new(rules.raw_max());

    let formats = [
        (StructuredDataFormat::JsonLd, rules.json_ld_points, IssueKind::MissingJsonLd),
        (StructuredDataFormat::Microdata, rules.microdata_points, IssueKind::MissingMicrodata),
        (StructuredDataFormat::Rdfa, rules.rdfa_points, IssueKind::MissingRdfa),
    ];
    for (format, points, missing) in formats {
        if meta.has_format(format) {
            outcome.award(points);
            outcome.strength(format!("{} structured data present", format.label()));
        } else {
            outcome.issue(missing, format!("No {} structured data", format.label()));
        }
    }

    let declared = meta.schema_types();
    let (known, unknown): (Vec<&str>, Vec<&str>) =
        declared.into_iter().partition(|t| rules.is_known_type(t));
    let earned = u32::try_from(known.len())
        .unwrap_or(u32::MAX)
        .saturating_mul(rules.schema_type_points)
        .min(rules.max_schema_type_points);
    outcome.award(earned);

    if !known.is_empty() {
        outcome.strength(format!("Schema.org types: {}", known.join(", ")));
    }
    if earned < rules.max_schema_type_points {
        let message = match (known.is_empty(), unknown.is_empty()) {
            (true, true) => "No Schema.org types declared".to_string(),
            (true, false) => format!("Unrecognized Schema.org types: {}", unknown.join(", ")),
            (false, _) => format!(
                "Only {} recognized Schema.org type(s); describe more of the page",
                known.len()
            ),
        };
        outcome.issue(IssueKind::UnrecognizedSchemaTypes, message);
    }

    outcome
}
