//! Title-Sweep: bulk page title fetcher
//!
//! This crate fetches the HTML `<title>` of many URLs concurrently, bounded by a
//! worker limit, and produces an ordered report with one row per input URL.

pub mod config;
pub mod crawler;
pub mod input;
pub mod output;
pub mod record;
pub mod url;

use thiserror::Error;

/// Main error type for Title-Sweep operations
///
/// Per-URL fetch failures never surface here; they are recorded as data in
/// [`TitleRecord`]. These are the failures that end a run.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Report error: {0}")]
    Report(#[from] output::ReportError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Errors raised while acquiring the URL list
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read URL list {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
}

/// Result type alias for Title-Sweep operations
pub type Result<T> = std::result::Result<T, SweepError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{run, FetchError, FetchTitle, TitleFetcher};
pub use record::{FetchStatus, TitleRecord};
pub use crate::url::{domain_of, ensure_scheme};
