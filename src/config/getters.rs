//! Getter methods for `SearchConfig`

use std::time::Duration;
use url::Url;

use super::types::{ContentTypeTable, FallbackPage, ScoringWeights, SearchConfig};

impl SearchConfig {
    #[must_use]
    pub fn site_url(&self) -> &Url {
        &self.site_url
    }

    #[must_use]
    pub fn current_page(&self) -> &str {
        &self.current_page
    }

    #[must_use]
    pub fn sitemap_path(&self) -> &str {
        &self.sitemap_path
    }

    #[must_use]
    pub fn listing_page(&self) -> &str {
        &self.listing_page
    }

    #[must_use]
    pub fn fallback_pages(&self) -> &[FallbackPage] {
        &self.fallback_pages
    }

    #[must_use]
    pub fn content_types(&self) -> &ContentTypeTable {
        &self.content_types
    }

    #[must_use]
    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    #[must_use]
    pub fn min_content_chars(&self) -> usize {
        self.min_content_chars
    }

    #[must_use]
    pub fn snippet_radius(&self) -> usize {
        self.snippet_radius
    }

    #[must_use]
    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    #[must_use]
    pub fn index_delay(&self) -> Duration {
        Duration::from_millis(self.index_delay_ms)
    }

    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    #[must_use]
    pub fn fetch_timeout_secs(&self) -> u64 {
        self.fetch_timeout_secs
    }

    #[must_use]
    pub fn max_concurrent_fetches(&self) -> usize {
        self.max_concurrent_fetches
    }

    /// Override the site root after loading from a file
    pub fn set_site_url(&mut self, raw: &str) -> crate::search::SearchResult<()> {
        self.site_url = super::builder::parse_site_url(raw)?;
        Ok(())
    }

    /// Override the page hosting the search box
    pub fn set_current_page(&mut self, page: impl Into<String>) {
        self.current_page = page.into();
    }
}
