//! Error types for indexing and search operations
//!
//! `IndexingError` covers a single candidate page and never escapes the
//! indexing pass; `SearchError` is what the engine's public API returns.

use thiserror::Error;

/// Result type alias for search operations
pub type SearchResult<T> = Result<T, SearchError>;

/// Why one candidate page did not make it into the index
#[derive(Debug, Clone, Error)]
pub enum IndexingError {
    /// Network failure while fetching
    #[error("Failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// Server answered with a non-success status
    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    /// Fetch exceeded the configured timeout
    #[error("Fetching {url} timed out after {secs}s")]
    Timeout { url: String, secs: u64 },

    /// Markup could not be turned into a document
    #[error("Failed to parse {url}: {reason}")]
    Parse { url: String, reason: String },

    /// Body text shorter than the indexing threshold
    #[error("Content of {url} too short ({chars} < {min} chars)")]
    EmptyContent { url: String, chars: usize, min: usize },
}

impl IndexingError {
    /// `EmptyContent` is a filtering decision; everything else is a real failure.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        !matches!(self, IndexingError::EmptyContent { .. })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        match self {
            IndexingError::Fetch { url, .. }
            | IndexingError::HttpStatus { url, .. }
            | IndexingError::Timeout { url, .. }
            | IndexingError::Parse { url, .. }
            | IndexingError::EmptyContent { url, .. } => url,
        }
    }
}

/// Error types for engine-level operations
#[derive(Debug, Error)]
pub enum SearchError {
    /// Configuration rejected at build time
    #[error("Invalid search configuration: {0}")]
    InvalidConfig(String),

    /// HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    /// A build is already running on this engine
    #[error("Search index is already being built")]
    IndexingInProgress,

    /// The index was already built for this engine instance
    #[error("Search index has already been built")]
    AlreadyIndexed,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_content_is_not_a_failure() {
        let rejected = IndexingError::EmptyContent {
            url: "/stub.html".into(),
            chars: 3,
            min: 50,
        };
        assert!(!rejected.is_failure());
        assert_eq!(rejected.url(), "/stub.html");

        let missing = IndexingError::HttpStatus {
            url: "/gone.html".into(),
            status: 404,
        };
        assert!(missing.is_failure());
        assert_eq!(missing.to_string(), "HTTP 404 for /gone.html");
    }
}
