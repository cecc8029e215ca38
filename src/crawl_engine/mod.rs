//! Crawl Engine Module
//!
//! Discovers the site's pages, fetches them over HTTP and hands extracted
//! documents to the search index.

// Sub-modules
pub mod content_validator;
pub mod crawl_types;
pub mod discovery;
pub mod fetcher;
pub mod orchestrator;
pub mod page_timeout;
pub mod progress;

// Re-exports for public API
pub use content_validator::validate_response;
pub use crawl_types::{CrawlCandidate, DiscoveryStrategy, IndexingSummary};
pub use discovery::{discover_candidates, parse_sitemap};
pub use fetcher::PageFetcher;
pub use orchestrator::{crawl_site, index_candidate};
pub use page_timeout::with_fetch_timeout;
pub use progress::{NoOpProgress, ProgressReporter, TracingProgress};
