//! Turn fetched markup into an `IndexedDocument`

use regex::Regex;
use scraper::Html;

use super::extractors::{
    DESCRIPTION_STRATEGIES, KEYWORD_STRATEGIES, TITLE_STRATEGIES, first_match, main_content,
};
use crate::config::SearchConfig;
use crate::crawl_engine::CrawlCandidate;
use crate::search::errors::IndexingError;
use crate::search::types::IndexedDocument;
use crate::utils::{MAX_DESCRIPTION_CHARS, safe_truncate_chars};

/// Maximum HTML input size accepted for extraction (10 MB)
///
/// Personal-site pages are a few hundred KB at most; anything larger is not a
/// page this index wants.
pub(crate) const MAX_HTML_SIZE: usize = 10 * 1024 * 1024;

/// Extraction settings derived once per indexing pass
#[derive(Debug, Clone)]
pub struct PageExtractor {
    title_suffix: Option<Regex>,
    min_content_chars: usize,
}

impl PageExtractor {
    #[must_use]
    pub fn new(config: &SearchConfig) -> Self {
        Self::with_settings(config.site_name(), config.min_content_chars())
    }

    #[must_use]
    pub fn with_settings(site_name: &str, min_content_chars: usize) -> Self {
        let title_suffix = if site_name.trim().is_empty() {
            None
        } else {
            Regex::new(&format!(r"\s*[-–—|]\s*{}\s*$", regex::escape(site_name.trim()))).ok()
        };
        Self {
            title_suffix,
            min_content_chars,
        }
    }

    /// Strip the trailing `- <site name>` from a page title
    #[must_use]
    pub fn clean_title(&self, title: &str) -> String {
        match &self.title_suffix {
            Some(re) => re.replace(title, "").trim().to_string(),
            None => title.trim().to_string(),
        }
    }

    /// Extract a document from one page's markup
    ///
    /// Never touches anything but its inputs. Pages whose main content is
    /// shorter than the configured minimum are rejected with
    /// `IndexingError::EmptyContent`.
    pub fn extract(
        &self,
        html: &str,
        candidate: &CrawlCandidate,
    ) -> Result<IndexedDocument, IndexingError> {
        if html.len() > MAX_HTML_SIZE {
            return Err(IndexingError::Parse {
                url: candidate.site_path.clone(),
                reason: format!("document is {} bytes, limit is {MAX_HTML_SIZE}", html.len()),
            });
        }

        let doc = Html::parse_document(html);

        let title = first_match(&doc, TITLE_STRATEGIES)
            .map(|t| self.clean_title(&t))
            .unwrap_or_default();

        let description = first_match(&doc, DESCRIPTION_STRATEGIES)
            .map(|d| truncate_description(&d))
            .unwrap_or_default();

        let keywords = first_match(&doc, KEYWORD_STRATEGIES).unwrap_or_default();

        let content = main_content(&doc).unwrap_or_default();
        let chars = content.chars().count();
        if chars < self.min_content_chars {
            return Err(IndexingError::EmptyContent {
                url: candidate.site_path.clone(),
                chars,
                min: self.min_content_chars,
            });
        }

        Ok(IndexedDocument {
            url: candidate.site_path.clone(),
            title,
            description,
            keywords,
            content,
            kind: candidate.kind,
            weight: candidate.weight,
        })
    }
}

fn truncate_description(description: &str) -> String {
    let cut = safe_truncate_chars(description, MAX_DESCRIPTION_CHARS);
    if cut.len() < description.len() {
        format!("{cut}...")
    } else {
        description.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ContentKind;
    use url::Url;

    fn candidate(path: &str) -> CrawlCandidate {
        CrawlCandidate {
            url: Url::parse("http://localhost/").unwrap().join(path).unwrap(),
            site_path: path.to_string(),
            kind: ContentKind::Article,
            weight: 1.5,
        }
    }

    fn article(title: &str, body: &str) -> String {
        format!(
            r#"<html><head><title>{title}</title>
            <meta name="description" content="关于冥想的随笔">
            <meta name="keywords" content="冥想,生活">
            </head><body><nav>首页 文章</nav><article>{body}</article></body></html>"#
        )
    }

    #[test]
    fn extracts_all_fields() {
        let extractor = PageExtractor::with_settings("筑居思", 10);
        let body = "每天早晨静坐二十分钟，观察呼吸，让念头来去。";
        let doc = extractor
            .extract(&article("冥想之旅 - 筑居思", body), &candidate("/blogs/meditation.html"))
            .unwrap();

        assert_eq!(doc.url, "/blogs/meditation.html");
        assert_eq!(doc.title, "冥想之旅");
        assert_eq!(doc.description, "关于冥想的随笔");
        assert_eq!(doc.keywords, "冥想 生活");
        assert_eq!(doc.content, body);
        assert_eq!(doc.kind, ContentKind::Article);
    }

    #[test]
    fn suffix_variants_are_stripped() {
        let extractor = PageExtractor::with_settings("筑居思", 0);
        assert_eq!(extractor.clean_title("Notes — 筑居思"), "Notes");
        assert_eq!(extractor.clean_title("Notes | 筑居思 "), "Notes");
        assert_eq!(extractor.clean_title("筑居思 首页"), "筑居思 首页");
    }

    #[test]
    fn short_content_is_rejected() {
        let extractor = PageExtractor::with_settings("筑居思", 50);
        let err = extractor
            .extract(&article("Stub", "太短"), &candidate("/blogs/stub.html"))
            .unwrap_err();
        assert!(matches!(err, IndexingError::EmptyContent { chars: 2, min: 50, .. }));
        assert!(!err.is_failure());
    }

    #[test]
    fn long_description_is_truncated() {
        let long = "字".repeat(200);
        let out = truncate_description(&long);
        assert_eq!(out.chars().count(), MAX_DESCRIPTION_CHARS + 3);
        assert!(out.ends_with("..."));
    }
}
