//! Configuration module for site search
//!
//! This module provides the `SearchConfig` struct, its type-safe builder and
//! the content-type table that drives classification, weighting and grouping.

// Sub-modules
pub mod builder;
pub mod content_types;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::{SearchConfigBuilder, WithSiteUrl};
pub use types::{
    ContentKind, ContentTypeRule, ContentTypeTable, FallbackPage, ScoringWeights, SearchConfig,
};
