//! Query tokenization

use crate::utils::fold_case;

/// Split a raw query into case-folded terms
///
/// No minimum term length: a single CJK character is a meaningful query.
///
/// ```
/// # use site_search::search::query::tokenize;
/// assert_eq!(tokenize("  Rust  冥 "), vec!["rust", "冥"]);
/// assert!(tokenize(" \t ").is_empty());
/// ```
pub fn tokenize(query: &str) -> Vec<String> {
    fold_case(query)
        .split_whitespace()
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}
