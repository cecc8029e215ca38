//! Common types used across the search module

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::ContentKind;

/// One crawled page, normalized for matching
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexedDocument {
    /// Site path (`/blogs/x.html`); unique within the index.
    pub url: String,
    pub title: String,
    pub description: String,
    /// Tags flattened to one space-separated string.
    pub keywords: String,
    /// Whitespace-collapsed plain text of the main content region.
    pub content: String,
    pub kind: ContentKind,
    /// Category weight of `kind` at indexing time.
    pub weight: f32,
}

/// A document matched by a query
#[derive(Debug, Clone)]
pub struct ScoredResult {
    pub document: Arc<IndexedDocument>,
    pub score: f32,
    /// HTML-escaped excerpt with `<mark>` around the first matching term.
    pub context: Option<String>,
}

/// Results of one content type, in score order
#[derive(Debug, Clone)]
pub struct ResultGroup {
    pub kind: ContentKind,
    pub label: String,
    pub icon: String,
    pub results: Vec<ScoredResult>,
}

impl ResultGroup {
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// What the results container shows for a given input
#[derive(Debug, Clone)]
pub enum SearchView {
    /// Blank input: prompt the user to type.
    Idle,
    /// Nothing indexed yet; indexing still running.
    Loading,
    NoResults {
        query: String,
    },
    Results {
        query: String,
        total: usize,
        groups: Vec<ResultGroup>,
    },
}

impl SearchView {
    /// Number of matched documents shown
    #[must_use]
    pub fn result_count(&self) -> usize {
        match self {
            SearchView::Results { total, .. } => *total,
            _ => 0,
        }
    }
}

/// Lifecycle of the index owned by one engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum IndexingState {
    Uninitialized,
    Indexing,
    /// Every candidate settled. `partial` when some of them failed.
    Ready { partial: bool },
}

impl IndexingState {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, IndexingState::Ready { .. })
    }
}
