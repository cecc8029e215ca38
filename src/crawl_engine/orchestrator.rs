//! Indexing pass orchestration
//!
//! Discovery, then bounded-concurrency fetch + extraction of every candidate.
//! Fetches finish in any order; the stream consumer below is the only code
//! that hands documents to the index, so writes are serialized.

use std::panic::AssertUnwindSafe;

use futures::StreamExt;
use futures::stream;

use super::crawl_types::{CrawlCandidate, IndexingSummary};
use super::discovery::discover_candidates;
use super::fetcher::PageFetcher;
use super::progress::ProgressReporter;
use crate::config::SearchConfig;
use crate::page_extractor::PageExtractor;
use crate::search::errors::IndexingError;
use crate::search::types::IndexedDocument;

/// Fetch and extract a single candidate
///
/// A panic inside extraction (hostile markup hitting a parser bug) is caught
/// here and reported as a parse failure for this page only.
pub async fn index_candidate(
    fetcher: &PageFetcher,
    extractor: &PageExtractor,
    candidate: &CrawlCandidate,
) -> Result<IndexedDocument, IndexingError> {
    let html = fetcher.fetch_text(&candidate.url).await?;
    std::panic::catch_unwind(AssertUnwindSafe(|| extractor.extract(&html, candidate)))
        .unwrap_or_else(|_| {
            Err(IndexingError::Parse {
                url: candidate.site_path.clone(),
                reason: "extraction panicked".to_string(),
            })
        })
}

/// Run one complete indexing pass
///
/// `on_document` receives each accepted document as soon as it is extracted
/// and returns whether it was inserted (duplicates return `false`). The pass
/// ends only after every candidate has either succeeded or failed.
pub async fn crawl_site<F>(
    fetcher: &PageFetcher,
    config: &SearchConfig,
    progress: &dyn ProgressReporter,
    mut on_document: F,
) -> IndexingSummary
where
    F: FnMut(IndexedDocument) -> bool,
{
    let (candidates, strategy) = discover_candidates(fetcher, config).await;
    progress.report_discovered(candidates.len(), strategy);

    let extractor = PageExtractor::new(config);
    let mut summary = IndexingSummary::new(strategy, candidates.len());

    let extractor = &extractor;
    let mut results = stream::iter(candidates)
        .map(|candidate| async move { index_candidate(fetcher, extractor, &candidate).await })
        .buffer_unordered(config.max_concurrent_fetches());

    while let Some(result) = results.next().await {
        match result {
            Ok(document) => {
                let url = document.url.clone();
                if on_document(document) {
                    summary.indexed += 1;
                    progress.report_page_indexed(&url);
                }
            }
            Err(error) => {
                if error.is_failure() {
                    summary.failed += 1;
                } else {
                    summary.rejected += 1;
                }
                progress.report_page_skipped(&error);
            }
        }
    }

    progress.report_completed(&summary);
    summary
}
