//! Client-side style site search
//!
//! Indexed documents live in memory inside a [`SiteSearch`] engine. Queries
//! are pure functions over index snapshots; [`QueryDebouncer`] and
//! [`render_view`] adapt them to an interactive results container.

pub mod debounce;
pub mod engine;
pub mod errors;
pub mod index;
pub mod query;
pub mod render;
pub mod types;

pub use debounce::{QueryDebouncer, ResultSink};
pub use engine::SiteSearch;
pub use errors::{IndexingError, SearchError, SearchResult};
pub use index::{IndexSnapshot, SearchIndex};
pub use query::{build_snippet, group_results, search_documents, tokenize};
pub use render::{IDLE_MESSAGE, LOADING_MESSAGE, NO_RESULTS_MESSAGE, render_view};
pub use types::{IndexedDocument, IndexingState, ResultGroup, ScoredResult, SearchView};
