//! Builder methods available for all states

use super::builder::SearchConfigBuilder;
use super::types::{ContentTypeTable, FallbackPage, ScoringWeights};

impl<State> SearchConfigBuilder<State> {
    /// Page hosting the search box, relative to the site root
    #[must_use]
    pub fn current_page(mut self, page: impl Into<String>) -> Self {
        self.current_page = page.into();
        self
    }

    #[must_use]
    pub fn sitemap_path(mut self, path: impl Into<String>) -> Self {
        self.sitemap_path = path.into();
        self
    }

    #[must_use]
    pub fn listing_page(mut self, page: impl Into<String>) -> Self {
        self.listing_page = page.into();
        self
    }

    #[must_use]
    pub fn fallback_pages(mut self, pages: Vec<FallbackPage>) -> Self {
        self.fallback_pages = pages;
        self
    }

    #[must_use]
    pub fn content_types(mut self, table: ContentTypeTable) -> Self {
        self.content_types = table;
        self
    }

    /// Literal stripped from the end of page titles (`"Title - <site name>"`)
    #[must_use]
    pub fn site_name(mut self, name: impl Into<String>) -> Self {
        self.site_name = name.into();
        self
    }

    #[must_use]
    pub fn min_content_chars(mut self, chars: usize) -> Self {
        self.min_content_chars = chars;
        self
    }

    #[must_use]
    pub fn snippet_radius(mut self, chars: usize) -> Self {
        self.snippet_radius = chars;
        self
    }

    #[must_use]
    pub fn weights(mut self, weights: ScoringWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Delay before the first indexing fetch; zero starts immediately
    #[must_use]
    pub fn index_delay_ms(mut self, ms: u64) -> Self {
        self.index_delay_ms = ms;
        self
    }

    #[must_use]
    pub fn debounce_ms(mut self, ms: u64) -> Self {
        self.debounce_ms = ms;
        self
    }

    #[must_use]
    pub fn fetch_timeout_secs(mut self, secs: u64) -> Self {
        self.fetch_timeout_secs = secs;
        self
    }

    #[must_use]
    pub fn max_concurrent_fetches(mut self, n: usize) -> Self {
        self.max_concurrent_fetches = n;
        self
    }
}
