//! Context snippet generation with match highlighting

use crate::utils::fold_char;
use crate::utils::string_utils::find_chars;

const ELLIPSIS: &str = "...";

fn escaped(chars: &[char]) -> String {
    let text: String = chars.iter().collect();
    html_escape::encode_text(&text).into_owned()
}

/// Build a highlighted excerpt around the first occurrence of `term`
///
/// `term` must already be case-folded. The window spans `radius` characters
/// each side of the first match; every case-insensitive occurrence inside it
/// is wrapped in `<mark>`. Text is HTML-escaped, the original casing is kept.
/// Returns `None` when `term` does not occur.
pub fn build_snippet(content: &str, term: &str, radius: usize) -> Option<String> {
    let raw: Vec<char> = content.chars().collect();
    let folded: Vec<char> = raw.iter().map(|&c| fold_char(c)).collect();
    let needle: Vec<char> = term.chars().collect();

    let first = find_chars(&folded, &needle, 0)?;
    let start = first.saturating_sub(radius);
    let end = first
        .saturating_add(needle.len())
        .saturating_add(radius)
        .min(raw.len());

    let mut out = String::new();
    if start > 0 {
        out.push_str(ELLIPSIS);
    }
    let mut cursor = start;
    while let Some(pos) = find_chars(&folded[..end], &needle, cursor) {
        out.push_str(&escaped(&raw[cursor..pos]));
        out.push_str("<mark>");
        out.push_str(&escaped(&raw[pos..pos + needle.len()]));
        out.push_str("</mark>");
        cursor = pos + needle.len();
    }
    out.push_str(&escaped(&raw[cursor..end]));
    if end < raw.len() {
        out.push_str(ELLIPSIS);
    }
    Some(out)
}
