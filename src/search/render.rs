//! HTML rendering of search views
//!
//! Produces the inner markup of the results container. Titles, descriptions
//! and URLs are escaped here; snippets arrive already escaped with their
//! `<mark>` tags, and icons are trusted SVG from the configuration.

use html_escape::{encode_double_quoted_attribute, encode_text};

use super::types::{ResultGroup, ScoredResult, SearchView};

pub const IDLE_MESSAGE: &str = "开始输入以搜索...";
pub const LOADING_MESSAGE: &str = "搜索索引正在加载，请稍后...";
pub const NO_RESULTS_MESSAGE: &str = "没有找到匹配的结果";

fn message(text: &str) -> String {
    format!(r#"<div class="search-message">{text}</div>"#)
}

fn write_item(out: &mut String, result: &ScoredResult) {
    let doc = &result.document;
    let title = if doc.title.is_empty() { &doc.url } else { &doc.title };
    out.push_str(&format!(
        r#"<a href="{}" class="search-result-item"><div class="search-result-item-content"><h3>{}</h3>"#,
        encode_double_quoted_attribute(&doc.url),
        encode_text(title),
    ));
    match &result.context {
        Some(context) => {
            out.push_str(&format!(r#"<p class="search-context">{context}</p>"#));
        }
        None => {
            out.push_str(&format!(
                r#"<p class="search-description">{}</p>"#,
                encode_text(&doc.description)
            ));
        }
    }
    out.push_str("</div></a>");
}

fn write_group(out: &mut String, group: &ResultGroup) {
    out.push_str(&format!(
        r#"<div class="search-result-group" data-type="{}"><div class="search-result-group-header"><span class="search-result-item-type">{}</span><span class="search-result-group-label">{}</span><span class="search-result-group-count">{}</span></div>"#,
        group.kind,
        group.icon,
        encode_text(&group.label),
        group.len(),
    ));
    for result in &group.results {
        write_item(out, result);
    }
    out.push_str("</div>");
}

/// Inner markup of the results container for `view`
#[must_use]
pub fn render_view(view: &SearchView) -> String {
    match view {
        SearchView::Idle => message(IDLE_MESSAGE),
        SearchView::Loading => message(LOADING_MESSAGE),
        SearchView::NoResults { .. } => message(NO_RESULTS_MESSAGE),
        SearchView::Results { groups, .. } => {
            let mut out = String::from(r#"<div class="search-results-list">"#);
            for group in groups {
                write_group(&mut out, group);
            }
            out.push_str("</div>");
            out
        }
    }
}
