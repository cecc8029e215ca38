//! Field extraction strategies
//!
//! Every field (title, description, keywords, content) has a ranked list of
//! strategies. A strategy is a pure `fn(&Html) -> Option<String>`; the first
//! one returning `Some` wins.

use ego_tree::{NodeId, NodeRef};
use scraper::{ElementRef, Html, Node, Selector};
use std::collections::HashSet;

use super::selectors::{
    CONTENT_SELECTORS, HEADING_SELECTOR, META_DESCRIPTION_SELECTOR, META_KEYWORDS_SELECTOR,
    OG_DESCRIPTION_SELECTOR, OG_TITLE_SELECTOR, STRIP_SELECTORS, TITLE_SELECTOR,
};
use crate::utils::collapse_whitespace;

/// Maximum element nesting followed while collecting text
///
/// Legitimate pages stay well under 30 levels; deeper branches are cut with a
/// warning rather than risking the stack on hostile markup.
pub(crate) const MAX_HTML_NESTING_DEPTH: usize = 100;

/// A single way of reading one field from a parsed page
pub type FieldStrategy = fn(&Html) -> Option<String>;

pub const TITLE_STRATEGIES: &[FieldStrategy] = &[title_tag, top_heading, og_title];
pub const DESCRIPTION_STRATEGIES: &[FieldStrategy] = &[meta_description, og_description];
pub const KEYWORD_STRATEGIES: &[FieldStrategy] = &[meta_keywords];

/// Run strategies in order until one yields a value
pub fn first_match(doc: &Html, strategies: &[FieldStrategy]) -> Option<String> {
    strategies.iter().find_map(|strategy| strategy(doc))
}

fn non_empty(text: String) -> Option<String> {
    let collapsed = collapse_whitespace(&text);
    (!collapsed.is_empty()).then_some(collapsed)
}

fn element_text(doc: &Html, selector: &Selector) -> Option<String> {
    doc.select(selector)
        .next()
        .and_then(|el| non_empty(el.text().collect::<String>()))
}

fn meta_content(doc: &Html, selector: &Selector) -> Option<String> {
    doc.select(selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .and_then(|content| non_empty(content.to_string()))
}

pub fn title_tag(doc: &Html) -> Option<String> {
    element_text(doc, &TITLE_SELECTOR)
}

pub fn top_heading(doc: &Html) -> Option<String> {
    element_text(doc, &HEADING_SELECTOR)
}

pub fn og_title(doc: &Html) -> Option<String> {
    meta_content(doc, &OG_TITLE_SELECTOR)
}

pub fn meta_description(doc: &Html) -> Option<String> {
    meta_content(doc, &META_DESCRIPTION_SELECTOR)
}

pub fn og_description(doc: &Html) -> Option<String> {
    meta_content(doc, &OG_DESCRIPTION_SELECTOR)
}

/// Keywords flattened to a space-separated string
///
/// Both the ASCII comma and the full-width `，` separate tags.
pub fn meta_keywords(doc: &Html) -> Option<String> {
    let raw = meta_content(doc, &META_KEYWORDS_SELECTOR)?;
    let tags: Vec<&str> = raw
        .split([',', '，'])
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .collect();
    (!tags.is_empty()).then(|| tags.join(" "))
}

/// Plain text of the page's main content region
///
/// Picks the first selector in [`CONTENT_SELECTORS`] with a match. All
/// top-level matches of that selector are concatenated; non-content subtrees
/// (navigation, sidebars, scripts) are skipped.
pub fn main_content(doc: &Html) -> Option<String> {
    let regions = CONTENT_SELECTORS.iter().find_map(|selector| {
        let matches: Vec<ElementRef> = doc.select(selector).collect();
        (!matches.is_empty()).then_some(matches)
    })?;

    let region_ids: HashSet<NodeId> = regions.iter().map(|el| el.id()).collect();
    let mut text = String::new();
    for region in &regions {
        let nested = region
            .ancestors()
            .any(|ancestor| region_ids.contains(&ancestor.id()));
        if nested {
            continue;
        }
        let to_remove = strip_set(region);
        collect_text(**region, &to_remove, &mut text, 0);
        text.push(' ');
    }
    non_empty(text)
}

/// Ids of every element under `region` that must not contribute text
fn strip_set(region: &ElementRef) -> HashSet<NodeId> {
    let mut to_remove = HashSet::new();
    for selector in STRIP_SELECTORS.iter() {
        for elem in region.select(selector) {
            if elem.id() != region.id() {
                to_remove.insert(elem.id());
            }
        }
    }
    to_remove
}

fn is_block(name: &str) -> bool {
    matches!(
        name,
        "p" | "div"
            | "li"
            | "ul"
            | "ol"
            | "br"
            | "h1"
            | "h2"
            | "h3"
            | "h4"
            | "h5"
            | "h6"
            | "section"
            | "article"
            | "blockquote"
            | "pre"
            | "tr"
            | "td"
            | "th"
            | "figcaption"
            | "dd"
            | "dt"
    )
}

/// Depth-limited text walk skipping removed subtrees
fn collect_text(
    node: NodeRef<'_, Node>,
    to_remove: &HashSet<NodeId>,
    output: &mut String,
    depth: usize,
) {
    if depth > MAX_HTML_NESTING_DEPTH {
        tracing::warn!(
            max_depth = MAX_HTML_NESTING_DEPTH,
            "HTML nesting too deep, truncating text collection"
        );
        return;
    }
    for child in node.children() {
        match child.value() {
            Node::Text(text) => output.push_str(text),
            Node::Element(element) => {
                if to_remove.contains(&child.id()) {
                    continue;
                }
                let block = is_block(element.name());
                if block {
                    output.push(' ');
                }
                collect_text(child, to_remove, output, depth + 1);
                if block {
                    output.push(' ');
                }
            }
            _ => {}
        }
    }
}
