//! Query tokenization, scoring, snippets and grouping
//!
//! Everything here is a pure function over an index snapshot, so it can be
//! tested without a network or a UI.

pub mod parsing;
pub mod results;
pub mod scoring;
pub mod snippets;

pub use parsing::tokenize;
pub use results::group_results;
pub use scoring::{score_document, search_documents};
pub use snippets::build_snippet;
