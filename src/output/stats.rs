//! Run summary statistics
//!
//! This module counts outcomes across a finished run and prints the
//! end-of-run summary line.

use crate::record::{TitleRecord, NO_TITLE};

/// Outcome counts for a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of records
    pub total: usize,

    /// Records with status `success`
    pub succeeded: usize,

    /// Records with status `error`
    pub failed: usize,

    /// Failed records that still got an HTTP response
    pub http_errors: usize,

    /// Successful records whose page had no title
    pub untitled: usize,
}

impl RunSummary {
    /// Returns the success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.succeeded as f64 / self.total as f64) * 100.0
    }
}

/// Counts outcomes across the records
pub fn summarize(records: &[TitleRecord]) -> RunSummary {
    records
        .iter()
        .fold(RunSummary::default(), |mut summary, record| {
            summary.total += 1;
            if record.is_success() {
                summary.succeeded += 1;
                if record.title() == NO_TITLE {
                    summary.untitled += 1;
                }
            } else {
                summary.failed += 1;
                if record.status_code().is_some() {
                    summary.http_errors += 1;
                }
            }
            summary
        })
}

/// Prints the summary to stdout
pub fn print_summary(summary: &RunSummary) {
    println!();
    println!(
        "Done! Succeeded: {}, Failed: {}",
        summary.succeeded, summary.failed
    );

    tracing::info!(
        "{} URLs, {:.1}% succeeded ({} without a title), {} HTTP errors, {} without a response",
        summary.total,
        summary.success_rate(),
        summary.untitled,
        summary.http_errors,
        summary.failed - summary.http_errors
    );
}
