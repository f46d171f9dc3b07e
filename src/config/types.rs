use serde::Deserialize;
use std::time::Duration;

/// Per-request timeout applied when no other value is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Number of concurrent fetches when no other value is configured
pub const DEFAULT_WORKERS: usize = crate::crawler::DEFAULT_MAX_WORKERS;

/// Report path when no other value is configured
pub const DEFAULT_OUTPUT_PATH: &str = "url_titles.csv";

/// Browser User-Agent sent with every request
///
/// Some servers refuse clients that do not look like a browser.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Main configuration structure for Title-Sweep
///
/// Every section and key is optional in the TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
    pub output: OutputConfig,
}

/// HTTP fetch behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Timeout for a single request, in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,

    /// User-Agent header value
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Maximum number of concurrent fetches
    pub workers: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            workers: DEFAULT_WORKERS,
        }
    }
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the CSV report
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_OUTPUT_PATH.to_string(),
        }
    }
}

/// Values given on the command line; each one that is set wins over the file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub workers: Option<usize>,
    pub timeout_secs: Option<u64>,
    pub output_path: Option<String>,
}

impl Config {
    /// Applies command-line overrides on top of this configuration
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(workers) = overrides.workers {
            self.fetch.workers = workers;
        }
        if let Some(timeout_secs) = overrides.timeout_secs {
            self.fetch.timeout_secs = timeout_secs;
        }
        if let Some(path) = overrides.output_path {
            self.output.path = path;
        }
        self
    }
}
