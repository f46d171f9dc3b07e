//! URL list acquisition
//!
//! Reads the newline-separated URL list given with `--file`.

use crate::InputError;
use std::path::Path;

/// Reads a URL list file
///
/// Each line is trimmed; blank lines are skipped. Order and duplicates are
/// preserved.
///
/// # Arguments
///
/// * `path` - Path to a UTF-8 text file with one URL per line
///
/// # Returns
///
/// * `Ok(Vec<String>)` - The URLs in file order
/// * `Err(InputError)` - The file could not be read
pub fn read_url_list(path: &Path) -> Result<Vec<String>, InputError> {
    let content = std::fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.display().to_string(),
        source,
    })?;

    Ok(parse_url_list(&content))
}

/// Splits text into URLs, one per non-blank line
pub fn parse_url_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
