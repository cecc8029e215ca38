//! URL and path manipulation utilities.
//!
//! Index entries are keyed by site path (`/blogs/x.html`), while fetching needs
//! absolute URLs. These helpers convert between the two.

use url::Url;

/// Extensions that never hold an indexable page.
const NON_PAGE_EXTENSIONS: &[&str] = &[
    ".xml", ".css", ".js", ".json", ".png", ".jpg", ".jpeg", ".gif", ".svg", ".webp", ".ico",
    ".pdf", ".zip", ".mp3", ".mp4",
];

/// Relative prefix leading from `current_page` back to the site root.
///
/// `current_page` is relative to the site root. A root page gets `""`, a page
/// nested one directory deep gets `"../"`, and so on.
///
/// ```
/// # use site_search::utils::compute_base_path;
/// assert_eq!(compute_base_path("index.html"), "");
/// assert_eq!(compute_base_path("/blogs/meditation-journey.html"), "../");
/// assert_eq!(compute_base_path("a/b/"), "../../");
/// ```
pub fn compute_base_path(current_page: &str) -> String {
    let trimmed = current_page.trim_start_matches('/');
    let depth = trimmed.matches('/').count();
    "../".repeat(depth)
}

/// Reduce a URL to its path-only form (query and fragment dropped).
///
/// Stored index URLs use this form so they work as navigation targets from any
/// page of the same site.
pub fn to_site_path(url: &Url) -> String {
    let path = url.path();
    if path.is_empty() {
        "/".to_string()
    } else {
        path.to_string()
    }
}

/// Check that `candidate` is served from the same scheme/host/port as `site`.
#[must_use]
pub fn same_origin(site: &Url, candidate: &Url) -> bool {
    site.origin() == candidate.origin()
}

/// Check if a site path looks like an HTML page worth fetching
#[must_use]
pub fn is_indexable_path(path: &str) -> bool {
    let lower = path.to_ascii_lowercase();
    !NON_PAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}
