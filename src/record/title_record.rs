use crate::crawler::FetchError;
use crate::record::FetchStatus;

/// Title recorded for a successful fetch whose page has no `<title>`
pub const NO_TITLE: &str = "No title";

/// Title recorded for every failed fetch
pub const FETCH_FAILED_TITLE: &str = "Fetch failed";

/// The outcome of fetching one URL
///
/// Fields are private so that a record can only be built through
/// [`TitleRecord::success`] or [`TitleRecord::failure`]. A success always
/// carries an HTTP status and no error; a failure always carries a non-empty
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleRecord {
    url: String,
    title: String,
    domain: String,
    status: FetchStatus,
    status_code: Option<u16>,
    error: Option<String>,
}

impl TitleRecord {
    /// Builds a successful record
    ///
    /// # Arguments
    ///
    /// * `url` - The normalized URL that was requested
    /// * `domain` - Host component of `url`
    /// * `status_code` - HTTP status of the response
    /// * `title` - Extracted title, or `None` to record [`NO_TITLE`]
    pub fn success(
        url: impl Into<String>,
        domain: impl Into<String>,
        status_code: u16,
        title: Option<String>,
    ) -> Self {
        Self {
            url: url.into(),
            title: title.unwrap_or_else(|| NO_TITLE.to_string()),
            domain: domain.into(),
            status: FetchStatus::Success,
            status_code: Some(status_code),
            error: None,
        }
    }

    /// Builds a failed record from a classified fetch error
    ///
    /// HTTP-level errors keep their status code; every other kind records the
    /// not-applicable sentinel (`None`).
    pub fn failure(url: impl Into<String>, domain: impl Into<String>, error: &FetchError) -> Self {
        let mut message = error.to_string();
        if message.trim().is_empty() {
            message = format!("unknown {} error", error.kind());
        }

        Self {
            url: url.into(),
            title: FETCH_FAILED_TITLE.to_string(),
            domain: domain.into(),
            status: FetchStatus::Error,
            status_code: error.status_code(),
            error: Some(message),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    /// HTTP status code, or `None` when no HTTP response was obtained
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}
