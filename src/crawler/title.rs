//! Single-URL title fetching
//!
//! [`TitleFetcher`] turns one raw URL into one [`TitleRecord`]. It never
//! fails: every problem along the way is classified and recorded.

use crate::config::FetchConfig;
use crate::crawler::fetcher::{FetchError, HttpPageSource, PageSource};
use crate::crawler::parser::extract_title;
use crate::record::TitleRecord;
use crate::url::{domain_of, ensure_scheme};
use std::future::Future;
use url::Url;

/// The fetch capability driven by the dispatcher
///
/// Implementations must turn every outcome into a record; the dispatcher
/// never sees an error.
pub trait FetchTitle: Send + Sync + 'static {
    fn fetch(&self, raw_url: &str) -> impl Future<Output = TitleRecord> + Send;
}

/// Fetches a page and extracts its title
#[derive(Debug, Clone)]
pub struct TitleFetcher<S = HttpPageSource> {
    source: S,
}

impl TitleFetcher<HttpPageSource> {
    /// Creates a fetcher that talks HTTP with the configured timeout and
    /// user agent
    pub fn from_config(config: &FetchConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::new(HttpPageSource::from_config(config)?))
    }
}

impl<S: PageSource> TitleFetcher<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: PageSource> FetchTitle for TitleFetcher<S> {
    /// Fetches one URL
    ///
    /// 1. Prefix `http://` when no scheme is present
    /// 2. Parse; an unparsable URL is an unexpected error with an empty domain
    /// 3. GET through the page source
    /// 4. Extract the title from the decoded body
    async fn fetch(&self, raw_url: &str) -> TitleRecord {
        let url = ensure_scheme(raw_url);

        let parsed = match Url::parse(&url) {
            Ok(parsed) => parsed,
            Err(e) => {
                let error = FetchError::Unexpected(format!("invalid URL: {}", e));
                tracing::debug!("Skipping {}: {}", url, error);
                return TitleRecord::failure(url, String::new(), &error);
            }
        };
        let domain = domain_of(&parsed);

        match self.source.get(&parsed).await {
            Ok(page) => {
                let title = extract_title(&page.body);
                if title.is_none() {
                    tracing::debug!("No title element in {}", url);
                }
                TitleRecord::success(url, domain, page.status_code, title)
            }
            Err(error) => {
                tracing::debug!("Fetch of {} failed ({}): {}", url, error.kind(), error);
                TitleRecord::failure(url, domain, &error)
            }
        }
    }
}
