//! Page data extraction.
//!
//! This module turns fetched HTML into normalized index documents using
//! ranked per-field strategies, and pulls content links out of listing pages.

// Sub-modules
pub mod extractors;
pub mod links;
pub mod page_data;
pub(crate) mod selectors;

// Re-exports for public API
pub use extractors::{FieldStrategy, first_match, main_content};
pub use links::extract_listing_links;
pub use page_data::PageExtractor;
