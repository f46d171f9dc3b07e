//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests, including:
//! - Building the HTTP client with a browser user agent and timeout
//! - GET requests with charset-aware body decoding
//! - Error classification into HTTP-level, transport-level and unexpected

use crate::config::FetchConfig;
use reqwest::{redirect::Policy, Client, StatusCode};
use std::error::Error as StdError;
use std::future::Future;
use thiserror::Error;
use url::Url;

/// Charset used when the response does not declare one
pub const DEFAULT_CHARSET: &str = "utf-8";

/// Maximum number of redirects followed transparently
const MAX_REDIRECTS: usize = 10;

/// A decoded 2xx response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// HTTP status code
    pub status_code: u16,

    /// Body decoded to text; invalid sequences are already replaced
    pub body: String,
}

/// Why a fetch produced no usable page
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The server answered with a non-2xx status
    #[error("HTTP Error {status}: {reason}")]
    Http { status: u16, reason: String },

    /// No response was obtained (DNS, connect, TLS, timeout, redirect limit)
    #[error("{0}")]
    Transport(String),

    /// Anything else
    #[error("{0}")]
    Unexpected(String),
}

impl FetchError {
    /// Status code carried into the report, if any
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            Self::Transport(_) | Self::Unexpected(_) => None,
        }
    }

    /// Short name of the error kind, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Http { .. } => "http",
            Self::Transport(_) => "transport",
            Self::Unexpected(_) => "unexpected",
        }
    }
}

/// Something that can retrieve a page body for a URL
///
/// [`HttpPageSource`] is the production implementation; tests substitute
/// their own to avoid the network.
pub trait PageSource: Send + Sync + 'static {
    fn get(&self, url: &Url) -> impl Future<Output = Result<FetchedPage, FetchError>> + Send;
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The fetch configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use title_sweep::config::FetchConfig;
/// use title_sweep::crawler::build_http_client;
///
/// let client = build_http_client(&FetchConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout())
        .redirect(Policy::limited(MAX_REDIRECTS))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Page source backed by a shared `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds the client from configuration and wraps it
    pub fn from_config(config: &FetchConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::new(build_http_client(config)?))
    }
}

impl PageSource for HttpPageSource {
    /// Fetches a URL and decodes its body
    ///
    /// # Response Handling
    ///
    /// | Condition | Result |
    /// |-----------|--------|
    /// | 2xx | `FetchedPage` with body decoded by declared charset (UTF-8 default) |
    /// | Any other status | `FetchError::Http` |
    /// | Timeout, DNS, connect, TLS, redirect limit | `FetchError::Transport` |
    /// | Body read failure (non-timeout) | `FetchError::Unexpected` |
    async fn get(&self, url: &Url) -> Result<FetchedPage, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| classify_request_error(&e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(http_error(status));
        }

        let body = response
            .text_with_charset(DEFAULT_CHARSET)
            .await
            .map_err(|e| classify_body_error(&e))?;

        Ok(FetchedPage {
            status_code: status.as_u16(),
            body,
        })
    }
}

/// Builds the HTTP-level error for a non-success status
fn http_error(status: StatusCode) -> FetchError {
    FetchError::Http {
        status: status.as_u16(),
        reason: status
            .canonical_reason()
            .unwrap_or("Unknown Status")
            .to_string(),
    }
}

/// Classifies an error raised before a response was received
fn classify_request_error(error: &reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Transport(format!("timed out: {}", error_chain(error)))
    } else if error.is_connect() || error.is_request() || error.is_redirect() {
        FetchError::Transport(error_chain(error))
    } else {
        FetchError::Unexpected(error_chain(error))
    }
}

/// Classifies an error raised while reading the response body
fn classify_body_error(error: &reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Transport(format!("timed out reading body: {}", error_chain(error)))
    } else {
        FetchError::Unexpected(format!("failed to read body: {}", error_chain(error)))
    }
}

/// Renders an error together with its sources
///
/// reqwest's own message is terse ("error sending request for url"); the
/// underlying reason (DNS failure, connection refused, ...) lives in the
/// source chain.
fn error_chain(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
