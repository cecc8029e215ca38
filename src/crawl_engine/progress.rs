//! Progress reporting abstraction for indexing passes
//!
//! Defines the `ProgressReporter` trait for lifecycle event reporting and
//! provides a no-op and a tracing-backed implementation.

use super::crawl_types::{DiscoveryStrategy, IndexingSummary};
use crate::search::errors::IndexingError;

/// Trait for reporting indexing progress at key lifecycle events
pub trait ProgressReporter: Send + Sync {
    /// Report that discovery finished with `count` candidates
    fn report_discovered(&self, count: usize, strategy: DiscoveryStrategy);

    /// Report that a page was added to the index
    fn report_page_indexed(&self, url: &str);

    /// Report that a page was skipped (failure or too-short content)
    fn report_page_skipped(&self, error: &IndexingError);

    /// Report that every candidate has settled
    fn report_completed(&self, summary: &IndexingSummary);
}

/// Progress reporter that does nothing
#[derive(Debug, Clone, Copy)]
pub struct NoOpProgress;

impl ProgressReporter for NoOpProgress {
    #[inline(always)]
    fn report_discovered(&self, _count: usize, _strategy: DiscoveryStrategy) {}

    #[inline(always)]
    fn report_page_indexed(&self, _url: &str) {}

    #[inline(always)]
    fn report_page_skipped(&self, _error: &IndexingError) {}

    #[inline(always)]
    fn report_completed(&self, _summary: &IndexingSummary) {}
}

/// Progress reporter emitting `tracing` events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProgress;

impl ProgressReporter for TracingProgress {
    fn report_discovered(&self, count: usize, strategy: DiscoveryStrategy) {
        tracing::info!(candidates = count, strategy = %strategy, "Discovery complete");
    }

    fn report_page_indexed(&self, url: &str) {
        tracing::debug!(url = %url, "Page indexed");
    }

    fn report_page_skipped(&self, error: &IndexingError) {
        if error.is_failure() {
            tracing::warn!(url = %error.url(), error = %error, "Page skipped");
        } else {
            tracing::debug!(url = %error.url(), reason = %error, "Page not indexed");
        }
    }

    fn report_completed(&self, summary: &IndexingSummary) {
        tracing::info!(
            indexed = summary.indexed,
            rejected = summary.rejected,
            failed = summary.failed,
            candidates = summary.candidates,
            "Search index built"
        );
    }
}
