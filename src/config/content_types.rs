//! Built-in content-type table and fallback page list for the site

use super::types::{ContentKind, ContentTypeRule, ContentTypeTable, FallbackPage};

const SVG_OPEN: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#;

const ARTICLE_ICON_BODY: &str = r#"<path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"></path><path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"></path>"#;
const EXHIBIT_ICON_BODY: &str = r#"<rect x="3" y="3" width="18" height="18" rx="2" ry="2"></rect><circle cx="8.5" cy="8.5" r="1.5"></circle><polyline points="21 15 16 10 5 21"></polyline>"#;
const PORTFOLIO_ICON_BODY: &str = r#"<path d="M3 3v18h18"></path><path d="m18.37 8.64 4.63.59-1.25 9.69-4.63-.59"></path><path d="M15.75 10 12 16l-3-4-4 7"></path>"#;
const PAGE_ICON_BODY: &str = r#"<path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"></path><polyline points="14 2 14 8 20 8"></polyline><line x1="16" y1="13" x2="8" y2="13"></line><line x1="16" y1="17" x2="8" y2="17"></line><polyline points="10 9 9 9 8 9"></polyline>"#;

fn icon(body: &str) -> String {
    format!("{SVG_OPEN}{body}</svg>")
}

fn rule(kind: ContentKind, label: &str, icon_body: &str, weight: f32, patterns: &[&str]) -> ContentTypeRule {
    ContentTypeRule {
        kind,
        label: label.to_string(),
        icon: icon(icon_body),
        weight,
        path_patterns: patterns.iter().map(|p| (*p).to_string()).collect(),
    }
}

/// Articles outrank everything else at equal field matches.
pub(crate) fn default_table() -> ContentTypeTable {
    ContentTypeTable::new(
        vec![
            rule(ContentKind::Article, "文章", ARTICLE_ICON_BODY, 1.5, &["blogs/"]),
            rule(
                ContentKind::Exhibit,
                "展品",
                EXHIBIT_ICON_BODY,
                1.0,
                &["exhibits/", "cabinet.html"],
            ),
            rule(
                ContentKind::Portfolio,
                "作品集",
                PORTFOLIO_ICON_BODY,
                1.0,
                &["portfolio.html"],
            ),
        ],
        rule(ContentKind::Page, "页面", PAGE_ICON_BODY, 1.0, &[]),
    )
}

/// Known pages of the site; their types come from [`default_table`].
pub(crate) fn default_fallback_pages() -> Vec<FallbackPage> {
    [
        "index.html",
        "blogs.html",
        "blogs/meditation-journey.html",
        "blogs/life-in-weeks.html",
        "blogs/creativity-thoughts.html",
        "blogs/24-things.html",
        "blogs/talking-to-19-yo-self.html",
        "exhibits/exhibit-001.html",
        "exhibits/exhibit-002.html",
        "exhibits/exhibit-003.html",
        "portfolio.html",
        "cabinet.html",
        "newsletter.html",
    ]
    .into_iter()
    .map(FallbackPage::new)
    .collect()
}
