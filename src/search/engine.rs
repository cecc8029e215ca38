//! Site search engine
//!
//! `SiteSearch` owns the configuration, the HTTP fetcher, the document index
//! and the indexing state machine. Queries never wait for indexing: they run
//! against whatever snapshot exists at call time.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use tokio::task::JoinHandle;

use super::errors::{SearchError, SearchResult};
use super::index::{IndexSnapshot, SearchIndex};
use super::query::{group_results, search_documents, tokenize};
use super::types::{IndexingState, ScoredResult, SearchView};
use crate::config::SearchConfig;
use crate::crawl_engine::{
    IndexingSummary, PageFetcher, ProgressReporter, TracingProgress, crawl_site,
};

/// Clears the build-in-progress flag however the build ends
struct BuildGuard<'a>(&'a AtomicBool);

impl Drop for BuildGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Search engine for one site
#[derive(Debug)]
pub struct SiteSearch {
    config: Arc<SearchConfig>,
    fetcher: PageFetcher,
    index: SearchIndex,
    state: RwLock<IndexingState>,
    building: AtomicBool,
}

impl SiteSearch {
    /// Create an engine with an empty index
    ///
    /// Validates the configuration and builds the HTTP client; nothing is
    /// fetched until [`build_index`](Self::build_index) or
    /// [`schedule_indexing`](Self::schedule_indexing) runs.
    pub fn new(config: SearchConfig) -> SearchResult<Arc<Self>> {
        config.validate()?;
        let fetcher = PageFetcher::new(config.fetch_timeout_secs())?;
        let index = SearchIndex::new(config.min_content_chars());
        Ok(Arc::new(Self {
            config: Arc::new(config),
            fetcher,
            index,
            state: RwLock::new(IndexingState::Uninitialized),
            building: AtomicBool::new(false),
        }))
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> IndexingState {
        *self.state.read()
    }

    #[must_use]
    pub fn snapshot(&self) -> IndexSnapshot {
        self.index.snapshot()
    }

    #[must_use]
    pub fn document_count(&self) -> usize {
        self.index.len()
    }

    /// Run the single indexing pass of this engine
    ///
    /// Returns once every discovered candidate has settled. A second call
    /// while the first is running fails with `IndexingInProgress`; a call
    /// after it finished fails with `AlreadyIndexed`.
    pub async fn build_index(
        &self,
        progress: &dyn ProgressReporter,
    ) -> SearchResult<IndexingSummary> {
        if self
            .building
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(SearchError::IndexingInProgress);
        }
        let _guard = BuildGuard(&self.building);

        {
            let mut state = self.state.write();
            if state.is_ready() {
                return Err(SearchError::AlreadyIndexed);
            }
            *state = IndexingState::Indexing;
        }
        tracing::info!(site = %self.config.site_url(), "Building search index");

        let index = &self.index;
        let summary = crawl_site(&self.fetcher, &self.config, progress, |document| {
            index.insert(document)
        })
        .await;

        *self.state.write() = IndexingState::Ready {
            partial: summary.is_partial(),
        };
        Ok(summary)
    }

    /// Build the index in the background after the configured delay
    pub fn schedule_indexing(self: &Arc<Self>) -> JoinHandle<SearchResult<IndexingSummary>> {
        let engine = Arc::clone(self);
        tokio::spawn(async move {
            let delay = engine.config.index_delay();
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            engine.build_index(&TracingProgress).await
        })
    }

    /// Ranked results for a raw query against the current snapshot
    #[must_use]
    pub fn search(&self, raw: &str) -> Vec<ScoredResult> {
        let snapshot = self.index.snapshot();
        search_documents(
            &snapshot,
            raw,
            self.config.weights(),
            self.config.snippet_radius(),
        )
    }

    /// What the results container should show for `raw`
    #[must_use]
    pub fn query(&self, raw: &str) -> SearchView {
        if tokenize(raw).is_empty() {
            return SearchView::Idle;
        }
        let snapshot = self.index.snapshot();
        if snapshot.is_empty() && !self.state().is_ready() {
            return SearchView::Loading;
        }

        let query = raw.trim().to_string();
        let results = search_documents(
            &snapshot,
            raw,
            self.config.weights(),
            self.config.snippet_radius(),
        );
        if results.is_empty() {
            return SearchView::NoResults { query };
        }
        let total = results.len();
        SearchView::Results {
            query,
            total,
            groups: group_results(results, self.config.content_types()),
        }
    }
}
