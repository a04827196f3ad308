//! Remediation templates keyed by issue kind.

use super::recommendations::{Difficulty, Impact};
use crate::scoring::{ComponentKind, IssueKind};

/// Fixed remediation advice for one kind of finding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemediationTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub impact: Impact,
    pub code_example: Option<&'static str>,
    pub resource_links: &'static [&'static str],
}

const STRUCTURED_DATA_GUIDE: &str =
    "https://developers.google.com/search/docs/appearance/structured-data/intro-structured-data";
const SCHEMA_ORG: &str = "https://schema.org/";
const JS_SEO_BASICS: &str =
    "https://developers.google.com/search/docs/crawling-indexing/javascript/javascript-seo-basics";
const HTML_SEMANTICS: &str = "https://developer.mozilla.org/en-US/docs/Glossary/Semantics";
const HEADING_ELEMENTS: &str =
    "https://developer.mozilla.org/en-US/docs/Web/HTML/Element/Heading_Elements";
const ROBOTS_INTRO: &str = "https://developers.google.com/search/docs/crawling-indexing/robots/intro";
const OPEN_GRAPH: &str = "https://ogp.me/";

const fn template(
    title: &'static str,
    description: &'static str,
    difficulty: Difficulty,
    impact: Impact,
    code_example: Option<&'static str>,
    resource_links: &'static [&'static str],
) -> RemediationTemplate {
    RemediationTemplate {
        title,
        description,
        difficulty,
        impact,
        code_example,
        resource_links,
    }
}

/// Template for a single issue
pub fn for_issue(kind: IssueKind) -> RemediationTemplate {
    use super::recommendations::{Difficulty as D, Impact as I};

    match kind {
        IssueKind::ThinContent => template(
            "Add more substantive text content",
            "Pages with several hundred words of server-rendered text give scrapers and LLMs enough context to understand and cite them.",
            D::Medium,
            I::High,
            None,
            &[],
        ),
        IssueKind::FewParagraphs => template(
            "Break content into paragraphs",
            "Split long text blocks into <p> elements so extractors can segment the content.",
            D::Easy,
            I::Medium,
            Some("<p>First idea.</p>\n<p>Second idea.</p>"),
            &[],
        ),
        IssueKind::FewLinks => template(
            "Add descriptive internal links",
            "Links with meaningful anchor text help crawlers discover related pages and understand context.",
            D::Easy,
            I::Low,
            Some("<a href=\"/pricing\">See pricing plans</a>"),
            &[],
        ),
        IssueKind::NoRichMedia => template(
            "Add images, lists or tables",
            "Structured content such as lists and tables is easy for automated consumers to extract; images with alt text add context.",
            D::Easy,
            I::Low,
            Some("<img src=\"diagram.png\" alt=\"Request flow diagram\">"),
            &[],
        ),
        IssueKind::TokenInefficient => template(
            "Reduce boilerplate text",
            "Navigation repeated in the body, inline data and markup noise inflate token counts without adding meaning.",
            D::Medium,
            I::Low,
            None,
            &[],
        ),
        IssueKind::FewSemanticElements => template(
            "Use semantic HTML5 elements",
            "Replace generic <div> wrappers with header, nav, main, article, section and footer so crawlers can find the primary content.",
            D::Medium,
            I::High,
            Some("<header>...</header>\n<main>\n  <article>...</article>\n</main>\n<footer>...</footer>"),
            &[HTML_SEMANTICS],
        ),
        IssueKind::MissingH1 => template(
            "Add a single H1 heading",
            "The H1 names the page's topic for every automated reader.",
            D::Easy,
            I::High,
            Some("<h1>Product documentation</h1>"),
            &[HEADING_ELEMENTS],
        ),
        IssueKind::MultipleH1 => template(
            "Use exactly one H1 heading",
            "Several H1 headings make the page's main topic ambiguous; demote secondary ones to H2.",
            D::Easy,
            I::Medium,
            None,
            &[HEADING_ELEMENTS],
        ),
        IssueKind::HeadingHierarchy => template(
            "Fix the heading hierarchy",
            "Nest headings without skipping levels (H1, then H2, then H3) so the outline mirrors the content structure.",
            D::Easy,
            I::Medium,
            Some("<h1>Guide</h1>\n<h2>Install</h2>\n<h3>Linux</h3>"),
            &[HEADING_ELEMENTS],
        ),
        IssueKind::PoorStructure => template(
            "Give the page a clear layout",
            "Wrap the primary content in <main> and separate it from header and footer regions.",
            D::Medium,
            I::Medium,
            Some("<body>\n  <header>...</header>\n  <main>...</main>\n  <footer>...</footer>\n</body>"),
            &[HTML_SEMANTICS],
        ),
        IssueKind::ExcessiveDomDepth => template(
            "Flatten deeply nested markup",
            "Deep wrapper nesting slows parsing and hides content from extractors with depth limits.",
            D::Hard,
            I::Low,
            None,
            &[],
        ),
        IssueKind::MissingJsonLd => template(
            "Add JSON-LD structured data",
            "JSON-LD is the preferred way to describe a page with Schema.org vocabulary and is read by search engines and LLM pipelines alike.",
            D::Easy,
            I::High,
            Some(
                "<script type=\"application/ld+json\">\n{\n  \"@context\": \"https://schema.org\",\n  \"@type\": \"Organization\",\n  \"name\": \"Example Inc.\",\n  \"url\": \"https://example.com\"\n}\n</script>",
            ),
            &[STRUCTURED_DATA_GUIDE, SCHEMA_ORG],
        ),
        IssueKind::MissingMicrodata => template(
            "Consider Microdata annotations",
            "Inline Microdata attributes tie visible content to Schema.org properties.",
            D::Medium,
            I::Low,
            Some("<div itemscope itemtype=\"https://schema.org/Product\">\n  <span itemprop=\"name\">Widget</span>\n</div>"),
            &[SCHEMA_ORG],
        ),
        IssueKind::MissingRdfa => template(
            "Consider RDFa annotations",
            "RDFa offers another inline vocabulary binding that some consumers read.",
            D::Medium,
            I::Low,
            Some("<div vocab=\"https://schema.org/\" typeof=\"Article\">\n  <h1 property=\"headline\">Title</h1>\n</div>"),
            &[SCHEMA_ORG],
        ),
        IssueKind::UnrecognizedSchemaTypes => template(
            "Declare recognized Schema.org types",
            "Use well-known types such as Organization, Article or Product that describe what the page is about.",
            D::Easy,
            I::Medium,
            None,
            &[SCHEMA_ORG],
        ),
        IssueKind::MissingTitle => template(
            "Add a title tag",
            "The title is the first signal every crawler reads; keep it between 30 and 60 characters.",
            D::Easy,
            I::High,
            Some("<title>Crawlability Guide for Product Teams | Example</title>"),
            &["https://developers.google.com/search/docs/appearance/title-link"],
        ),
        IssueKind::TitleLength => template(
            "Adjust the title length",
            "Titles between 30 and 60 characters are descriptive without being truncated.",
            D::Easy,
            I::Low,
            None,
            &["https://developers.google.com/search/docs/appearance/title-link"],
        ),
        IssueKind::MissingDescription => template(
            "Add a meta description",
            "A 120-160 character summary is used directly by search snippets and LLM previews.",
            D::Easy,
            I::Medium,
            Some("<meta name=\"description\" content=\"A concise summary of the page.\">"),
            &["https://developers.google.com/search/docs/appearance/snippet"],
        ),
        IssueKind::DescriptionLength => template(
            "Adjust the meta description length",
            "Descriptions between 120 and 160 characters summarize the page without truncation.",
            D::Easy,
            I::Low,
            None,
            &["https://developers.google.com/search/docs/appearance/snippet"],
        ),
        IssueKind::IncompleteOpenGraph => template(
            "Complete the Open Graph tags",
            "og:title, og:description, og:image and og:url control how the page is summarized when shared or previewed.",
            D::Easy,
            I::Medium,
            Some("<meta property=\"og:title\" content=\"Page title\">\n<meta property=\"og:description\" content=\"Summary\">\n<meta property=\"og:image\" content=\"https://example.com/og.png\">\n<meta property=\"og:url\" content=\"https://example.com/page\">"),
            &[OPEN_GRAPH],
        ),
        IssueKind::MissingTwitterCard => template(
            "Add Twitter Card tags",
            "Twitter Card metadata gives another machine-readable summary of the page.",
            D::Easy,
            I::Low,
            Some("<meta name=\"twitter:card\" content=\"summary_large_image\">"),
            &[],
        ),
        IssueKind::MissingCanonical => template(
            "Declare a canonical URL",
            "A canonical link tells crawlers which URL is authoritative when the same content is reachable at several addresses.",
            D::Easy,
            I::Medium,
            Some("<link rel=\"canonical\" href=\"https://example.com/page\">"),
            &["https://developers.google.com/search/docs/crawling-indexing/consolidate-duplicate-urls"],
        ),
        IssueKind::NoStaticContent => template(
            "Serve content in the initial HTML",
            "The static HTML carries no text. Render the page on the server or pre-render it so non-JavaScript crawlers see the content.",
            D::Hard,
            I::High,
            None,
            &[JS_SEO_BASICS],
        ),
        IssueKind::DynamicContentWithoutSsr => template(
            "Render dynamic content on the server",
            "Content injected after load is invisible to crawlers that do not execute JavaScript; use SSR or static generation for primary content.",
            D::Hard,
            I::High,
            None,
            &[JS_SEO_BASICS],
        ),
        IssueKind::HeavyScripts => template(
            "Reduce external scripts",
            "Every external script delays rendering; bundle, defer or drop scripts that are not needed for the primary content.",
            D::Medium,
            I::Medium,
            Some("<script src=\"/app.js\" defer></script>"),
            &[],
        ),
        IssueKind::AjaxContent => template(
            "Inline AJAX-loaded content",
            "Content fetched after load should also be present in the initial response.",
            D::Medium,
            I::Medium,
            None,
            &[JS_SEO_BASICS],
        ),
        IssueKind::SpaDetected => template(
            "Add server-side rendering to the SPA",
            "Single-page applications serve an empty shell to crawlers; frameworks such as Next.js, Nuxt or SvelteKit can render the same routes on the server.",
            D::Hard,
            I::High,
            None,
            &[JS_SEO_BASICS],
        ),
        IssueKind::ClientFramework => template(
            "Pre-render framework routes",
            "Client-side frameworks should hydrate server-rendered HTML rather than build the page from scratch in the browser.",
            D::Hard,
            I::Medium,
            None,
            &[JS_SEO_BASICS],
        ),
        IssueKind::RenderedContentGap => template(
            "Close the static vs rendered content gap",
            "Text that only appears after rendering is lost to non-JavaScript crawlers; move it into the server response.",
            D::Hard,
            I::High,
            None,
            &[JS_SEO_BASICS],
        ),
        IssueKind::MissingRobotsTxt => template(
            "Add a robots.txt file",
            "robots.txt tells crawlers what they may fetch and where the sitemap lives.",
            D::Easy,
            I::Medium,
            Some("User-agent: *\nAllow: /\nSitemap: https://example.com/sitemap.xml"),
            &[ROBOTS_INTRO],
        ),
        IssueKind::RobotsDisallow => template(
            "Allow crawlers in robots.txt",
            "robots.txt currently disallows this page, so compliant scrapers and AI crawlers will skip it.",
            D::Easy,
            I::High,
            Some("User-agent: *\nAllow: /"),
            &[ROBOTS_INTRO],
        ),
        IssueKind::MissingSitemap => template(
            "Publish an XML sitemap",
            "A sitemap lists the URLs crawlers should visit.",
            D::Easy,
            I::Low,
            None,
            &["https://www.sitemaps.org/protocol.html"],
        ),
        IssueKind::MissingLlmsTxt => template(
            "Add an llms.txt file",
            "llms.txt gives LLM crawlers a curated, markdown summary of the site's most useful content.",
            D::Easy,
            I::Low,
            Some("# Example Inc.\n\n> Developer tools for crawlable sites.\n\n## Docs\n- [Guide](https://example.com/guide.md)"),
            &["https://llmstxt.org/"],
        ),
    }
}

/// Component-level advice used when one site trails another
pub fn for_component(kind: ComponentKind) -> RemediationTemplate {
    match kind {
        ComponentKind::StaticContent => for_issue(IssueKind::ThinContent),
        ComponentKind::SemanticHtml => for_issue(IssueKind::FewSemanticElements),
        ComponentKind::StructuredData => for_issue(IssueKind::MissingJsonLd),
        ComponentKind::MetaTags => for_issue(IssueKind::IncompleteOpenGraph),
        ComponentKind::JavaScript => for_issue(IssueKind::DynamicContentWithoutSsr),
        ComponentKind::CrawlerAccess => for_issue(IssueKind::MissingRobotsTxt),
    }
}
