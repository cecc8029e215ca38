//! Type-safe builder for `SearchConfig` using the typestate pattern
//!
//! The site URL is the only required setting; `build()` only exists once it
//! has been supplied.

use std::marker::PhantomData;
use url::Url;

use super::types::{ContentTypeTable, FallbackPage, ScoringWeights, SearchConfig};
use crate::search::errors::{SearchError, SearchResult};

// Type states for the builder
pub struct WithSiteUrl;

pub struct SearchConfigBuilder<State = ()> {
    pub(crate) site_url: Option<String>,
    pub(crate) current_page: String,
    pub(crate) sitemap_path: String,
    pub(crate) listing_page: String,
    pub(crate) fallback_pages: Vec<FallbackPage>,
    pub(crate) content_types: ContentTypeTable,
    pub(crate) site_name: String,
    pub(crate) min_content_chars: usize,
    pub(crate) snippet_radius: usize,
    pub(crate) weights: ScoringWeights,
    pub(crate) index_delay_ms: u64,
    pub(crate) debounce_ms: u64,
    pub(crate) fetch_timeout_secs: u64,
    pub(crate) max_concurrent_fetches: usize,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for SearchConfigBuilder<()> {
    fn default() -> Self {
        let defaults = SearchConfig::default();
        Self {
            site_url: None,
            current_page: defaults.current_page,
            sitemap_path: defaults.sitemap_path,
            listing_page: defaults.listing_page,
            fallback_pages: defaults.fallback_pages,
            content_types: defaults.content_types,
            site_name: defaults.site_name,
            min_content_chars: defaults.min_content_chars,
            snippet_radius: defaults.snippet_radius,
            weights: defaults.weights,
            index_delay_ms: defaults.index_delay_ms,
            debounce_ms: defaults.debounce_ms,
            fetch_timeout_secs: defaults.fetch_timeout_secs,
            max_concurrent_fetches: defaults.max_concurrent_fetches,
            _phantom: PhantomData,
        }
    }
}

impl SearchConfig {
    /// Create a builder for configuring a `SearchConfig` with a fluent interface
    #[must_use]
    pub fn builder() -> SearchConfigBuilder<()> {
        SearchConfigBuilder::default()
    }
}

impl SearchConfigBuilder<()> {
    pub fn site_url(self, url: impl Into<String>) -> SearchConfigBuilder<WithSiteUrl> {
        SearchConfigBuilder {
            site_url: Some(url.into()),
            current_page: self.current_page,
            sitemap_path: self.sitemap_path,
            listing_page: self.listing_page,
            fallback_pages: self.fallback_pages,
            content_types: self.content_types,
            site_name: self.site_name,
            min_content_chars: self.min_content_chars,
            snippet_radius: self.snippet_radius,
            weights: self.weights,
            index_delay_ms: self.index_delay_ms,
            debounce_ms: self.debounce_ms,
            fetch_timeout_secs: self.fetch_timeout_secs,
            max_concurrent_fetches: self.max_concurrent_fetches,
            _phantom: PhantomData,
        }
    }
}

impl SearchConfigBuilder<WithSiteUrl> {
    pub fn build(self) -> SearchResult<SearchConfig> {
        let raw = self.site_url.unwrap_or_default();
        let site_url = parse_site_url(&raw)?;

        let config = SearchConfig {
            site_url,
            current_page: self.current_page,
            sitemap_path: self.sitemap_path,
            listing_page: self.listing_page,
            fallback_pages: self.fallback_pages,
            content_types: self.content_types,
            site_name: self.site_name,
            min_content_chars: self.min_content_chars,
            snippet_radius: self.snippet_radius,
            weights: self.weights,
            index_delay_ms: self.index_delay_ms,
            debounce_ms: self.debounce_ms,
            fetch_timeout_secs: self.fetch_timeout_secs,
            max_concurrent_fetches: self.max_concurrent_fetches,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Parse a site root, forcing a trailing slash so relative joins stay inside it
pub(crate) fn parse_site_url(raw: &str) -> SearchResult<Url> {
    let mut url = Url::parse(raw)
        .map_err(|e| SearchError::InvalidConfig(format!("site URL '{raw}': {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(SearchError::InvalidConfig(format!(
            "site URL '{raw}' must use http or https"
        )));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

impl SearchConfig {
    /// Check invariants that serde and the builder cannot express in types
    pub fn validate(&self) -> SearchResult<()> {
        if !matches!(self.site_url.scheme(), "http" | "https") {
            return Err(SearchError::InvalidConfig(format!(
                "site URL '{}' must use http or https",
                self.site_url
            )));
        }
        let w = &self.weights;
        for (name, value) in [
            ("keywords", w.keywords),
            ("title", w.title),
            ("description", w.description),
            ("content_occurrence", w.content_occurrence),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SearchError::InvalidConfig(format!(
                    "weight '{name}' must be positive, got {value}"
                )));
            }
        }
        if !(w.keywords > w.title && w.title > w.description && w.description > w.content_occurrence)
        {
            return Err(SearchError::InvalidConfig(format!(
                "weights must rank keywords > title > description > content_occurrence, got {} / {} / {} / {}",
                w.keywords, w.title, w.description, w.content_occurrence
            )));
        }
        if w.occurrence_cap == 0 {
            return Err(SearchError::InvalidConfig(
                "occurrence_cap must be at least 1".to_string(),
            ));
        }
        if let Some(rule) = self
            .content_types
            .iter()
            .find(|rule| !(rule.weight.is_finite() && rule.weight > 0.0))
        {
            return Err(SearchError::InvalidConfig(format!(
                "category weight for '{}' must be positive",
                rule.kind
            )));
        }
        if self.max_concurrent_fetches == 0 {
            return Err(SearchError::InvalidConfig(
                "max_concurrent_fetches must be at least 1".to_string(),
            ));
        }
        if self.fetch_timeout_secs == 0 {
            return Err(SearchError::InvalidConfig(
                "fetch_timeout_secs must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Load a JSON config file; missing fields take their defaults
    pub fn from_json_file(path: &std::path::Path) -> SearchResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let mut config: SearchConfig = serde_json::from_str(&text)?;
        config.site_url = parse_site_url(config.site_url.as_str())?;
        config.validate()?;
        Ok(config)
    }
}
