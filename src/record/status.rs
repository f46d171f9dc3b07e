//! Outcome classification for a single URL
//!
//! Reported in the `status` column of the report.

use std::fmt;

/// Whether a URL's title was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchStatus {
    /// A 2xx response was received and its body scanned for a title
    Success,

    /// No usable response; the record's `error` explains why
    Error,
}

impl FetchStatus {
    /// Returns true for [`FetchStatus::Success`]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Converts the status to its report string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Glyph used in console progress lines
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✗",
        }
    }
}

impl fmt::Display for FetchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
