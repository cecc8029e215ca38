//! Core types for crawl operations.
//!
//! A crawl pass turns a site root into a list of `CrawlCandidate`s, then into
//! indexed documents; `IndexingSummary` is what the pass reports back.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::ContentKind;

/// A page scheduled for fetching during an indexing pass
#[derive(Debug, Clone, PartialEq)]
pub struct CrawlCandidate {
    /// Absolute URL actually fetched (same origin as the site).
    pub url: Url,
    /// Path-only form stored in the index.
    pub site_path: String,
    pub kind: ContentKind,
    /// Category weight copied from the content-type table.
    pub weight: f32,
}

/// Which discovery strategy produced the candidate list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscoveryStrategy {
    Sitemap,
    Listing,
    SitemapAndListing,
    Fallback,
}

impl std::fmt::Display for DiscoveryStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Sitemap => "sitemap",
            Self::Listing => "listing page",
            Self::SitemapAndListing => "sitemap + listing page",
            Self::Fallback => "fallback list",
        };
        f.write_str(name)
    }
}

/// Outcome of one indexing pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexingSummary {
    pub strategy: DiscoveryStrategy,
    pub candidates: usize,
    pub indexed: usize,
    /// Pages skipped because their content was below the threshold.
    pub rejected: usize,
    /// Pages skipped because of fetch or parse failures.
    pub failed: usize,
}

impl IndexingSummary {
    #[must_use]
    pub fn new(strategy: DiscoveryStrategy, candidates: usize) -> Self {
        Self {
            strategy,
            candidates,
            indexed: 0,
            rejected: 0,
            failed: 0,
        }
    }

    /// Some candidates failed; the index is still usable.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        self.failed > 0
    }
}
