//! HTML title extraction
//!
//! Titles are located with a regular expression rather than a full HTML
//! parse: the first `<title ...>...</title>` span wins, matched
//! case-insensitively, attributes in the opening tag are tolerated and the
//! text may span lines.

use regex::Regex;
use std::sync::OnceLock;

/// Pattern for the first title element in a document
const TITLE_PATTERN: &str = r"(?is)<title[^>]*>(.*?)</title>";

fn title_regex() -> &'static Regex {
    static TITLE_RE: OnceLock<Regex> = OnceLock::new();
    TITLE_RE.get_or_init(|| Regex::new(TITLE_PATTERN).expect("title pattern is a valid regex"))
}

/// Extracts the page title from an HTML document
///
/// Returns the trimmed text of the first title element, or `None` when the
/// document has none. An empty `<title></title>` yields `Some("")`.
///
/// # Example
///
/// ```
/// use title_sweep::crawler::extract_title;
///
/// let html = r#"<html><head><TITLE class="x">  Hello World  </TITLE></head></html>"#;
/// assert_eq!(extract_title(html), Some("Hello World".to_string()));
/// ```
pub fn extract_title(html: &str) -> Option<String> {
    title_regex()
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}
