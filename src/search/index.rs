//! In-memory document index
//!
//! Append-only while a pass runs, read through cheap snapshots. Readers never
//! see a half-written entry: every append swaps in a new `Arc<Vec<_>>` if a
//! snapshot is still held.

use parking_lot::RwLock;
use std::sync::Arc;

use super::types::IndexedDocument;

/// Immutable view of the index at one moment
pub type IndexSnapshot = Arc<Vec<Arc<IndexedDocument>>>;

#[derive(Debug)]
pub struct SearchIndex {
    documents: RwLock<IndexSnapshot>,
    min_content_chars: usize,
}

impl SearchIndex {
    #[must_use]
    pub fn new(min_content_chars: usize) -> Self {
        Self {
            documents: RwLock::new(Arc::new(Vec::new())),
            min_content_chars,
        }
    }

    /// Append a document
    ///
    /// Returns `false` (and stores nothing) for content under the minimum
    /// length or a URL already present.
    pub(crate) fn insert(&self, document: IndexedDocument) -> bool {
        let chars = document.content.chars().count();
        if chars < self.min_content_chars {
            tracing::debug!(url = %document.url, chars, "Refusing short document");
            return false;
        }
        let mut guard = self.documents.write();
        if guard.iter().any(|existing| existing.url == document.url) {
            tracing::debug!(url = %document.url, "Document already indexed");
            return false;
        }
        Arc::make_mut(&mut guard).push(Arc::new(document));
        true
    }

    #[must_use]
    pub fn snapshot(&self) -> IndexSnapshot {
        Arc::clone(&self.documents.read())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ContentKind;

    fn doc(url: &str, content: &str) -> IndexedDocument {
        IndexedDocument {
            url: url.to_string(),
            title: String::new(),
            description: String::new(),
            keywords: String::new(),
            content: content.to_string(),
            kind: ContentKind::Page,
            weight: 1.0,
        }
    }

    #[test]
    fn short_content_never_enters_the_index() {
        let index = SearchIndex::new(10);
        assert!(!index.insert(doc("/a.html", "短")));
        assert!(index.is_empty());
        assert!(index.insert(doc("/b.html", "这是一段足够长的正文内容，超过十个字")));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn duplicate_urls_are_ignored() {
        let index = SearchIndex::new(0);
        assert!(index.insert(doc("/a.html", "one")));
        assert!(!index.insert(doc("/a.html", "two")));
        assert_eq!(index.snapshot()[0].content, "one");
    }

    #[test]
    fn snapshots_are_stable_across_appends() {
        let index = SearchIndex::new(0);
        index.insert(doc("/a.html", "one"));
        let before = index.snapshot();
        index.insert(doc("/b.html", "two"));
        assert_eq!(before.len(), 1);
        assert_eq!(index.snapshot().len(), 2);
    }
}
