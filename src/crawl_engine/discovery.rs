//! Candidate URL discovery
//!
//! Three strategies, in order:
//! 1. the site map (`<loc>` entries)
//! 2. content links on the listing page, merged with (1) when both succeed
//! 3. the hard-coded fallback list, only when (1) and (2) produce nothing

use std::collections::HashSet;

use log::{debug, info, warn};
use url::Url;

use super::crawl_types::{CrawlCandidate, DiscoveryStrategy};
use super::fetcher::PageFetcher;
use crate::config::SearchConfig;
use crate::page_extractor::extract_listing_links;
use crate::search::errors::IndexingError;
use crate::utils::{compute_base_path, is_indexable_path, same_origin, to_site_path};

/// Parse site map XML and return every `<loc>` value
pub fn parse_sitemap(xml: &str) -> Result<Vec<String>, roxmltree::Error> {
    let doc = roxmltree::Document::parse(xml)?;
    Ok(doc
        .descendants()
        .filter(|node| node.is_element() && node.tag_name().name() == "loc")
        .filter_map(|node| node.text())
        .map(str::trim)
        .filter(|loc| !loc.is_empty())
        .map(str::to_string)
        .collect())
}

/// Map a site map entry onto the configured site origin
///
/// Site maps list canonical (production) URLs; when the site is served from
/// somewhere else the path is kept and re-anchored on the configured origin.
pub fn anchor_to_site(site_url: &Url, loc: &str) -> Option<Url> {
    let mut url = match Url::parse(loc) {
        Ok(absolute) if same_origin(site_url, &absolute) => absolute,
        Ok(foreign) => site_url.join(foreign.path().trim_start_matches('/')).ok()?,
        Err(_) => site_url.join(loc.trim_start_matches('/')).ok()?,
    };
    url.set_fragment(None);
    url.set_query(None);
    Some(url)
}

/// URL of the page hosting the search box
pub fn current_page_url(config: &SearchConfig) -> Option<Url> {
    config
        .site_url()
        .join(config.current_page().trim_start_matches('/'))
        .ok()
}

/// Resolve a root-relative page name the way the hosting page would
///
/// The hosting page prefixes `relative` with its computed base path
/// (`../` per directory level) and resolves it against its own location.
pub fn resolve_from_current_page(config: &SearchConfig, relative: &str) -> Option<Url> {
    let page_url = current_page_url(config)?;
    let base = compute_base_path(config.current_page());
    page_url
        .join(&format!("{base}{}", relative.trim_start_matches('/')))
        .ok()
}

async fn sitemap_urls(
    fetcher: &PageFetcher,
    config: &SearchConfig,
) -> Result<Vec<Url>, IndexingError> {
    let sitemap_url = config
        .site_url()
        .join(config.sitemap_path().trim_start_matches('/'))
        .map_err(|e| IndexingError::Parse {
            url: config.sitemap_path().to_string(),
            reason: e.to_string(),
        })?;

    let xml = fetcher.fetch_text(&sitemap_url).await?;
    let locs = parse_sitemap(&xml).map_err(|e| IndexingError::Parse {
        url: sitemap_url.to_string(),
        reason: e.to_string(),
    })?;

    Ok(locs
        .iter()
        .filter_map(|loc| anchor_to_site(config.site_url(), loc))
        .collect())
}

async fn listing_urls(
    fetcher: &PageFetcher,
    config: &SearchConfig,
) -> Result<Vec<Url>, IndexingError> {
    let listing_url = resolve_from_current_page(config, config.listing_page()).ok_or_else(|| {
        IndexingError::Parse {
            url: config.listing_page().to_string(),
            reason: "cannot resolve listing page against the current page".to_string(),
        }
    })?;

    let html = fetcher.fetch_text(&listing_url).await?;
    Ok(extract_listing_links(
        &html,
        &listing_url,
        config.site_url(),
        config.content_types(),
    ))
}

/// Turn discovered URLs into unique, classified candidates
pub fn classify_urls(config: &SearchConfig, urls: impl IntoIterator<Item = Url>) -> Vec<CrawlCandidate> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();
    for url in urls {
        if !same_origin(config.site_url(), &url) {
            debug!("Skipping off-site URL {url}");
            continue;
        }
        let site_path = to_site_path(&url);
        if !is_indexable_path(&site_path) || !seen.insert(site_path.clone()) {
            continue;
        }
        let rule = config.content_types().classify(&site_path);
        candidates.push(CrawlCandidate {
            url,
            site_path,
            kind: rule.kind,
            weight: rule.weight,
        });
    }
    candidates
}

/// Candidates from the configured fallback list
pub fn fallback_candidates(config: &SearchConfig) -> Vec<CrawlCandidate> {
    let mut seen = HashSet::new();
    config
        .fallback_pages()
        .iter()
        .filter_map(|page| {
            let url = resolve_from_current_page(config, &page.path)?;
            let site_path = to_site_path(&url);
            if !seen.insert(site_path.clone()) {
                return None;
            }
            let table = config.content_types();
            let rule = match page.kind {
                Some(kind) => table.rule(kind),
                None => table.classify(&site_path),
            };
            Some(CrawlCandidate {
                url,
                site_path,
                kind: rule.kind,
                weight: rule.weight,
            })
        })
        .collect()
}

/// Produce the candidate list for one indexing pass
///
/// Never fails: strategy failures are logged and the next strategy is tried.
pub async fn discover_candidates(
    fetcher: &PageFetcher,
    config: &SearchConfig,
) -> (Vec<CrawlCandidate>, DiscoveryStrategy) {
    let from_sitemap = match sitemap_urls(fetcher, config).await {
        Ok(urls) => {
            info!("Site map listed {} URLs", urls.len());
            urls
        }
        Err(e) => {
            warn!("Site map unavailable: {e}");
            Vec::new()
        }
    };

    let from_listing = match listing_urls(fetcher, config).await {
        Ok(urls) => {
            info!("Listing page linked {} content pages", urls.len());
            urls
        }
        Err(e) => {
            warn!("Listing page unavailable: {e}");
            Vec::new()
        }
    };

    let strategy = match (from_sitemap.is_empty(), from_listing.is_empty()) {
        (false, false) => DiscoveryStrategy::SitemapAndListing,
        (false, true) => DiscoveryStrategy::Sitemap,
        (true, false) => DiscoveryStrategy::Listing,
        (true, true) => DiscoveryStrategy::Fallback,
    };

    let candidates = if strategy == DiscoveryStrategy::Fallback {
        fallback_candidates(config)
    } else {
        classify_urls(config, from_sitemap.into_iter().chain(from_listing))
    };

    if candidates.is_empty() && strategy != DiscoveryStrategy::Fallback {
        // Everything discovered was filtered out (assets, other origins).
        warn!("Discovered URLs were all unindexable, using fallback list");
        return (fallback_candidates(config), DiscoveryStrategy::Fallback);
    }

    (candidates, strategy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ContentKind, FallbackPage};

    fn config(page: &str) -> SearchConfig {
        SearchConfig::builder()
            .current_page(page)
            .site_url("https://example.com/site/")
            .build()
            .unwrap()
    }

    #[test]
    fn sitemap_locs_are_extracted() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
            <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
              <url><loc> https://example.com/site/index.html </loc></url>
              <url><loc>https://example.com/site/blogs/a.html</loc><lastmod>2024-01-01</lastmod></url>
            </urlset>"#;
        assert_eq!(
            parse_sitemap(xml).unwrap(),
            vec![
                "https://example.com/site/index.html",
                "https://example.com/site/blogs/a.html"
            ]
        );
    }

    #[test]
    fn malformed_sitemap_is_an_error() {
        assert!(parse_sitemap("<urlset><url><loc>x</url>").is_err());
    }

    #[test]
    fn foreign_host_is_reanchored() {
        let site = Url::parse("http://127.0.0.1:4000/").unwrap();
        let url = anchor_to_site(&site, "https://prod.example.com/blogs/a.html#x").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:4000/blogs/a.html");

        let nested = Url::parse("http://127.0.0.1:4000/site/").unwrap();
        let foreign = anchor_to_site(&nested, "https://prod.example.com/blogs/a.html").unwrap();
        let relative = anchor_to_site(&nested, "/blogs/a.html").unwrap();
        assert_eq!(foreign.as_str(), "http://127.0.0.1:4000/site/blogs/a.html");
        assert_eq!(foreign, relative);
    }

    #[test]
    fn relative_resolution_uses_base_path() {
        let nested = config("blogs/meditation-journey.html");
        assert_eq!(
            resolve_from_current_page(&nested, "blogs.html").unwrap().as_str(),
            "https://example.com/site/blogs.html"
        );
        let root = config("index.html");
        assert_eq!(
            resolve_from_current_page(&root, "portfolio.html").unwrap().as_str(),
            "https://example.com/site/portfolio.html"
        );
    }

    #[test]
    fn classification_dedupes_and_drops_assets() {
        let cfg = config("index.html");
        let site = cfg.site_url().clone();
        let urls = vec![
            site.join("blogs/a.html").unwrap(),
            site.join("blogs/a.html").unwrap(),
            site.join("sitemap.xml").unwrap(),
            site.join("portfolio.html").unwrap(),
            Url::parse("https://elsewhere.com/blogs/b.html").unwrap(),
        ];
        let candidates = classify_urls(&cfg, urls);
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].site_path, "/site/blogs/a.html");
        assert_eq!(candidates[0].kind, ContentKind::Article);
        assert!((candidates[0].weight - 1.5).abs() < f32::EPSILON);
        assert_eq!(candidates[1].kind, ContentKind::Portfolio);
    }

    #[test]
    fn fallback_list_resolves_every_page() {
        let cfg = config("exhibits/exhibit-001.html");
        let candidates = fallback_candidates(&cfg);
        assert_eq!(candidates.len(), cfg.fallback_pages().len());
        assert!(candidates.iter().all(|c| c.site_path.starts_with("/site/")));
    }

    #[test]
    fn fallback_kinds_follow_the_content_table() {
        let cfg = config("index.html");
        let candidates = fallback_candidates(&cfg);
        for candidate in &candidates {
            let rule = cfg.content_types().classify(&candidate.site_path);
            assert_eq!(candidate.kind, rule.kind, "{}", candidate.site_path);
            assert!((candidate.weight - rule.weight).abs() < f32::EPSILON);
        }
        let cabinet = candidates
            .iter()
            .find(|c| c.site_path == "/site/cabinet.html")
            .unwrap();
        assert_eq!(cabinet.kind, ContentKind::Exhibit);
    }

    #[test]
    fn explicit_fallback_kind_overrides_classification() {
        let cfg = SearchConfig::builder()
            .fallback_pages(vec![FallbackPage::new("about.html").with_kind(ContentKind::Portfolio)])
            .site_url("https://example.com/")
            .build()
            .unwrap();
        let candidates = fallback_candidates(&cfg);
        assert_eq!(candidates[0].kind, ContentKind::Portfolio);
    }
}
