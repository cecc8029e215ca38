pub mod constants;
pub mod string_utils;
pub mod url_utils;

pub use constants::*;
pub use string_utils::{collapse_whitespace, fold_case, fold_char, safe_truncate_chars};
pub use url_utils::{compute_base_path, is_indexable_path, same_origin, to_site_path};
