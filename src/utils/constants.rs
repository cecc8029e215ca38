//! Shared configuration constants for site search
//!
//! Default values used by the config builder and the engine so the numbers
//! live in one place.

/// Site name appended to every page title ("冥想之旅 - 筑居思").
pub const DEFAULT_SITE_NAME: &str = "筑居思";

/// Well-known site map location, relative to the site root.
pub const DEFAULT_SITEMAP_PATH: &str = "/sitemap.xml";

/// Listing page whose links seed the crawl when the site map is missing.
pub const DEFAULT_LISTING_PAGE: &str = "blogs.html";

/// Pages with less body text than this (in characters) are not indexed.
///
/// Counted in `char`s so a CJK page is not penalised for being short in bytes.
pub const MIN_CONTENT_CHARS: usize = 50;

/// Characters of context kept on each side of a highlighted match.
pub const SNIPPET_RADIUS: usize = 30;

/// Descriptions longer than this are cut and suffixed with `...`.
pub const MAX_DESCRIPTION_CHARS: usize = 150;

/// Delay between engine start and the first indexing fetch.
pub const DEFAULT_INDEX_DELAY_MS: u64 = 1000;

/// Keystroke debounce window.
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;

/// Per-fetch timeout; a stalled host must not keep the index in `Indexing` forever.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 5;

/// Upper bound on in-flight page fetches during one indexing pass.
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 8;

/// Field weights. Only the ordering keywords > title > description > content matters.
pub const KEYWORD_MATCH_WEIGHT: f32 = 15.0;
pub const TITLE_MATCH_WEIGHT: f32 = 10.0;
pub const DESCRIPTION_MATCH_WEIGHT: f32 = 5.0;
pub const CONTENT_OCCURRENCE_WEIGHT: f32 = 1.0;

/// Content occurrences of one term counted toward a document's score.
pub const CONTENT_OCCURRENCE_CAP: usize = 5;

/// User agent sent with every crawl request.
pub const USER_AGENT: &str = concat!("site-search/", env!("CARGO_PKG_VERSION"));
