//! CSS selectors for page extraction
//!
//! Parsed once at first access and cached forever. Hardcoded selectors should
//! NEVER fail to parse; if they do, it is a bug in this file.

use scraper::Selector;
use std::sync::LazyLock;

fn parse(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("BUG: hardcoded CSS selector '{css}' is invalid: {e}"))
}

pub(crate) static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| parse("title"));

pub(crate) static HEADING_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse("h1, .post-title, .blog-header h1"));

pub(crate) static OG_TITLE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse(r#"meta[property="og:title"]"#));

pub(crate) static META_DESCRIPTION_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse(r#"meta[name="description"]"#));

pub(crate) static OG_DESCRIPTION_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse(r#"meta[property="og:description"]"#));

pub(crate) static META_KEYWORDS_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse(r#"meta[name="keywords"]"#));

pub(crate) static ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| parse("a[href]"));

/// Content regions in priority order; `body` is the last resort.
pub(crate) static CONTENT_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    [
        ".article-body",
        "article",
        "main",
        ".article-container",
        ".post-content",
        ".content",
        "#content",
        "[role='main']",
        "body",
    ]
    .into_iter()
    .map(parse)
    .collect()
});

/// Subtrees never counted as page content.
pub(crate) static STRIP_SELECTORS: LazyLock<Vec<Selector>> = LazyLock::new(|| {
    [
        "nav",
        "aside",
        "header",
        "footer",
        "script",
        "style",
        "noscript",
        "template",
        ".sidebar",
        ".related-posts",
        ".toc",
    ]
    .into_iter()
    .map(parse)
    .collect()
});
