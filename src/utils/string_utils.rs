//! UTF-8-safe string helpers
//!
//! Everything here works in characters, never bytes, so CJK text and emoji
//! can be windowed and folded without hitting a char boundary panic.

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("BUG: hardcoded whitespace regex is invalid"));

/// Safely truncate a string to a maximum number of CHARACTERS (not bytes).
///
/// # Examples
/// ```
/// # use site_search::utils::string_utils::safe_truncate_chars;
/// assert_eq!(safe_truncate_chars("Hello, World!", 5), "Hello");
/// assert_eq!(safe_truncate_chars("冥想之旅", 2), "冥想");
/// assert_eq!(safe_truncate_chars("Hi", 100), "Hi");
/// ```
#[inline]
pub fn safe_truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        None => s,
        Some((byte_idx, _)) => &s[..byte_idx],
    }
}

/// Collapse every whitespace run to one ASCII space and trim both ends.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").trim().to_string()
}

/// Lower-case a single character, keeping a 1:1 char mapping.
///
/// `char::to_lowercase` can expand (`İ` becomes two chars); only the first is
/// kept so that char offsets in folded text line up with the original.
#[inline]
pub fn fold_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Case-fold a string with [`fold_char`].
pub fn fold_case(text: &str) -> String {
    text.chars().map(fold_char).collect()
}

/// Char offset of the first occurrence of `needle` in `haystack` at or after `from`.
pub(crate) fn find_chars(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    (from..=haystack.len() - needle.len()).find(|&i| haystack[i..i + needle.len()] == *needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_handles_mixed_whitespace() {
        assert_eq!(collapse_whitespace("  a\n\t b \u{3000} c  "), "a b c");
        assert_eq!(collapse_whitespace("\n\n"), "");
    }

    #[test]
    fn fold_keeps_char_count() {
        let raw = "İstanbul Ärger 冥想";
        assert_eq!(fold_case(raw).chars().count(), raw.chars().count());
        assert_eq!(fold_case("ABC"), "abc");
    }

    #[test]
    fn find_chars_respects_start() {
        let hay: Vec<char> = "冥想与冥想".chars().collect();
        let needle: Vec<char> = "冥想".chars().collect();
        assert_eq!(find_chars(&hay, &needle, 0), Some(0));
        assert_eq!(find_chars(&hay, &needle, 1), Some(3));
        assert_eq!(find_chars(&hay, &needle, 4), None);
        assert_eq!(find_chars(&hay, &[], 0), None);
    }
}
