//! Core configuration types for site search
//!
//! This module contains the main `SearchConfig` struct together with the
//! content-type table and scoring weights it carries.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::utils::{
    CONTENT_OCCURRENCE_CAP, CONTENT_OCCURRENCE_WEIGHT, DEFAULT_DEBOUNCE_MS,
    DEFAULT_FETCH_TIMEOUT_SECS, DEFAULT_INDEX_DELAY_MS, DEFAULT_LISTING_PAGE,
    DEFAULT_MAX_CONCURRENT_FETCHES, DEFAULT_SITE_NAME, DEFAULT_SITEMAP_PATH,
    DESCRIPTION_MATCH_WEIGHT, KEYWORD_MATCH_WEIGHT, MIN_CONTENT_CHARS, SNIPPET_RADIUS,
    TITLE_MATCH_WEIGHT,
};

/// Closed set of content categories used to weight and group results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Article,
    Exhibit,
    Portfolio,
    Page,
}

impl ContentKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Exhibit => "exhibit",
            Self::Portfolio => "portfolio",
            Self::Page => "page",
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the content-type table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentTypeRule {
    pub kind: ContentKind,
    /// Human-readable group label shown above results.
    pub label: String,
    /// Inline SVG markup rendered next to results of this type.
    pub icon: String,
    /// Category weight, multiplied into every score contribution.
    pub weight: f32,
    /// Substrings of the site path that select this type (`blogs/`, `portfolio.html`).
    #[serde(default)]
    pub path_patterns: Vec<String>,
}

impl ContentTypeRule {
    /// Check whether a site path belongs to this content type
    #[must_use]
    pub fn matches(&self, site_path: &str) -> bool {
        self.path_patterns
            .iter()
            .any(|pattern| !pattern.is_empty() && site_path.contains(pattern.as_str()))
    }
}

/// Ordered content-type rules plus the rule used when nothing matches
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentTypeTable {
    pub(crate) rules: Vec<ContentTypeRule>,
    pub(crate) fallback: ContentTypeRule,
}

impl ContentTypeTable {
    #[must_use]
    pub fn new(rules: Vec<ContentTypeRule>, fallback: ContentTypeRule) -> Self {
        Self { rules, fallback }
    }

    /// First rule whose path pattern matches, else the fallback rule.
    #[must_use]
    pub fn classify(&self, site_path: &str) -> &ContentTypeRule {
        self.rules
            .iter()
            .find(|rule| rule.matches(site_path))
            .unwrap_or(&self.fallback)
    }

    /// Rule for a kind; kinds missing from the table resolve to the fallback.
    #[must_use]
    pub fn rule(&self, kind: ContentKind) -> &ContentTypeRule {
        self.rules
            .iter()
            .find(|rule| rule.kind == kind)
            .unwrap_or(&self.fallback)
    }

    /// All rules in display order, fallback last.
    pub fn iter(&self) -> impl Iterator<Item = &ContentTypeRule> {
        self.rules.iter().chain(std::iter::once(&self.fallback))
    }

    /// Check whether a path falls under any non-fallback rule
    #[must_use]
    pub fn is_content_path(&self, site_path: &str) -> bool {
        self.rules.iter().any(|rule| rule.matches(site_path))
    }
}

impl Default for ContentTypeTable {
    fn default() -> Self {
        super::content_types::default_table()
    }
}

/// A known page used when neither the site map nor the listing page yields candidates
///
/// The content type comes from the content-type table, like any discovered
/// page. `kind` only overrides it for paths the table cannot classify.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackPage {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ContentKind>,
}

impl FallbackPage {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: None,
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: ContentKind) -> Self {
        self.kind = Some(kind);
        self
    }
}

/// Heuristic field weights for query scoring
///
/// The numbers are tuning policy. What must hold is the ordering
/// `keywords > title > description > content_occurrence` and a cap of at least one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub keywords: f32,
    pub title: f32,
    pub description: f32,
    pub content_occurrence: f32,
    pub occurrence_cap: usize,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            keywords: KEYWORD_MATCH_WEIGHT,
            title: TITLE_MATCH_WEIGHT,
            description: DESCRIPTION_MATCH_WEIGHT,
            content_occurrence: CONTENT_OCCURRENCE_WEIGHT,
            occurrence_cap: CONTENT_OCCURRENCE_CAP,
        }
    }
}

/// Main configuration struct for the search engine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Root of the site. May carry a sub-path (`https://host/site/`).
    pub(crate) site_url: Url,
    /// Page hosting the search box, relative to `site_url`.
    pub(crate) current_page: String,
    pub(crate) sitemap_path: String,
    pub(crate) listing_page: String,
    pub(crate) fallback_pages: Vec<FallbackPage>,
    pub(crate) content_types: ContentTypeTable,
    /// Literal stripped from the end of page titles.
    pub(crate) site_name: String,
    pub(crate) min_content_chars: usize,
    pub(crate) snippet_radius: usize,
    pub(crate) weights: ScoringWeights,
    pub(crate) index_delay_ms: u64,
    pub(crate) debounce_ms: u64,
    pub(crate) fetch_timeout_secs: u64,
    pub(crate) max_concurrent_fetches: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            site_url: default_site_url(),
            current_page: "index.html".to_string(),
            sitemap_path: DEFAULT_SITEMAP_PATH.to_string(),
            listing_page: DEFAULT_LISTING_PAGE.to_string(),
            fallback_pages: super::content_types::default_fallback_pages(),
            content_types: ContentTypeTable::default(),
            site_name: DEFAULT_SITE_NAME.to_string(),
            min_content_chars: MIN_CONTENT_CHARS,
            snippet_radius: SNIPPET_RADIUS,
            weights: ScoringWeights::default(),
            index_delay_ms: DEFAULT_INDEX_DELAY_MS,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
            max_concurrent_fetches: DEFAULT_MAX_CONCURRENT_FETCHES,
        }
    }
}

fn default_site_url() -> Url {
    Url::parse("http://localhost/").expect("BUG: hardcoded default site URL is invalid")
}
