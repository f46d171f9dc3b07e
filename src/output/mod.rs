//! Output module for writing fetch reports
//!
//! This module handles:
//! - Writing the ordered records as a CSV report
//! - Summarizing success and failure counts for the console

mod csv;
pub mod stats;

pub use csv::{format_csv_report, write_csv_report, REPORT_COLUMNS, STATUS_CODE_NOT_APPLICABLE};
pub use stats::{print_summary, summarize, RunSummary};

use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to write report to {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

/// Result type for output operations
pub type ReportResult<T> = Result<T, ReportError>;
