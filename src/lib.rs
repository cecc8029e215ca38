//! Site search: crawl a static site over HTTP, build an in-memory relevance
//! index and answer free-text queries with grouped, highlighted results.

pub mod config;
pub mod crawl_engine;
pub mod page_extractor;
pub mod search;
pub mod utils;

pub use config::{ContentKind, ContentTypeTable, ScoringWeights, SearchConfig};
pub use crawl_engine::{
    DiscoveryStrategy, IndexingSummary, NoOpProgress, ProgressReporter, TracingProgress,
};
pub use page_extractor::PageExtractor;
pub use search::{
    IndexedDocument, IndexingError, IndexingState, QueryDebouncer, ResultGroup, ResultSink,
    ScoredResult, SearchError, SearchResult, SearchView, SiteSearch, render_view,
};
