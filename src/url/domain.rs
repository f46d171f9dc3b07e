use url::Url;

/// Extracts the domain reported for a URL
///
/// This is the host portion of the URL, lowercased by the parser, followed by
/// `:port` when the URL spells out a non-default port. URLs without a host
/// yield an empty string.
///
/// # Arguments
///
/// * `url` - The parsed URL to extract the domain from
///
/// # Examples
///
/// ```
/// use url::Url;
/// use title_sweep::url::domain_of;
///
/// let url = Url::parse("https://EXAMPLE.COM/path").unwrap();
/// assert_eq!(domain_of(&url), "example.com");
///
/// let url = Url::parse("http://127.0.0.1:8080/").unwrap();
/// assert_eq!(domain_of(&url), "127.0.0.1:8080");
/// ```
pub fn domain_of(url: &Url) -> String {
    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.to_string(),
        (None, _) => String::new(),
    }
}

/// Parses a URL string and extracts its domain, or an empty string if it
/// does not parse
pub fn domain_of_str(url: &str) -> String {
    Url::parse(url).map(|u| domain_of(&u)).unwrap_or_default()
}
