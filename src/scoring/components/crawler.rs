//! Crawler accessibility: robots.txt, sitemap and llms.txt.

use super::RuleOutcome;
use crate::config::CrawlerRules;
use crate::scoring::component::IssueKind;
use crate::snapshot::CrawlerSignals;

pub fn evaluate(crawler: &CrawlerSignals, rules: &CrawlerRules) -> RuleOutcome {
    let mut outcome = RuleOutcome::new(rules.raw_max());

    match (crawler.has_robots_txt, crawler.robots_allows) {
        (true, true) => {
            outcome.award(rules.robots_points);
            outcome.strength("robots.txt allows crawling");
        }
        (true, false) => outcome.issue(
            IssueKind::RobotsDisallow,
            "robots.txt disallows crawling this page",
        ),
        (false, _) => outcome.issue(IssueKind::MissingRobotsTxt, "No robots.txt found"),
    }

    if crawler.has_sitemap {
        outcome.award(rules.sitemap_points);
        outcome.strength("XML sitemap available");
    } else {
        outcome.issue(IssueKind::MissingSitemap, "No XML sitemap found");
    }

    if crawler.has_llms_txt {
        outcome.award(rules.llms_txt_points);
        outcome.strength("llms.txt provides guidance for AI crawlers");
    } else {
        outcome.issue(IssueKind::MissingLlmsTxt, "No llms.txt found");
    }

    outcome
}
