//! Content-link extraction from listing pages

use scraper::Html;
use url::Url;

use super::selectors::ANCHOR_SELECTOR;
use crate::config::ContentTypeTable;
use crate::utils::{same_origin, to_site_path};

/// Extract every same-origin link whose path falls under a content type
///
/// Relative hrefs are resolved against `page_url`. Fragments are dropped;
/// duplicates keep their first position.
pub fn extract_listing_links(
    html: &str,
    page_url: &Url,
    site_url: &Url,
    table: &ContentTypeTable,
) -> Vec<Url> {
    let doc = Html::parse_document(html);
    let mut seen = std::collections::HashSet::new();
    let mut links = Vec::new();

    for anchor in doc.select(&ANCHOR_SELECTOR) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let href = href.trim();
        if href.is_empty() || href.starts_with('#') {
            continue;
        }
        let Ok(mut url) = page_url.join(href) else {
            log::debug!("Skipping unparseable link '{href}' on {page_url}");
            continue;
        };
        url.set_fragment(None);
        url.set_query(None);
        if !same_origin(site_url, &url) {
            continue;
        }
        let path = to_site_path(&url);
        if table.is_content_path(&path) && seen.insert(path) {
            links.push(url);
        }
    }
    links
}
