/// Scheme prepended to inputs that carry none
const DEFAULT_SCHEME_PREFIX: &str = "http://";

/// Ensures a URL string carries an explicit `http://` or `https://` prefix
///
/// Inputs that already start with either prefix are returned unchanged;
/// anything else gets `http://` prepended. No other rewriting happens: case,
/// whitespace, trailing slashes and non-ASCII hosts are left as given.
///
/// # Examples
///
/// ```
/// use title_sweep::url::ensure_scheme;
///
/// assert_eq!(ensure_scheme("example.com"), "http://example.com");
/// assert_eq!(ensure_scheme("https://example.com/"), "https://example.com/");
/// ```
pub fn ensure_scheme(raw: &str) -> String {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("{}{}", DEFAULT_SCHEME_PREFIX, raw)
    }
}
