//! CSV report generation
//!
//! One header row, then one row per record in input order. Fields are quoted
//! only when they contain a comma, a double quote or a line break.

use crate::output::{ReportError, ReportResult};
use crate::record::TitleRecord;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Report columns, in order
pub const REPORT_COLUMNS: [&str; 6] = ["url", "title", "domain", "status", "status_code", "error"];

/// Written in the `status_code` column when no HTTP response was obtained
pub const STATUS_CODE_NOT_APPLICABLE: &str = "N/A";

/// Writes the records to a CSV file, replacing any existing file
///
/// # Arguments
///
/// * `records` - The ordered records
/// * `output_path` - Where the report should be written
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote the report
/// * `Err(ReportError)` - Failed to create or write the file
pub fn write_csv_report(records: &[TitleRecord], output_path: &Path) -> ReportResult<()> {
    let csv = format_csv_report(records);

    let write_err = |source| ReportError::Write {
        path: output_path.display().to_string(),
        source,
    };

    let mut file = File::create(output_path).map_err(write_err)?;
    file.write_all(csv.as_bytes()).map_err(write_err)?;
    file.flush().map_err(write_err)?;

    tracing::debug!("Wrote {} rows to {}", records.len(), output_path.display());
    Ok(())
}

/// Formats the records as CSV text with a header row
pub fn format_csv_report(records: &[TitleRecord]) -> String {
    let mut csv = String::new();

    push_row(&mut csv, REPORT_COLUMNS);

    for record in records {
        let status_code = record
            .status_code()
            .map(|code| code.to_string())
            .unwrap_or_else(|| STATUS_CODE_NOT_APPLICABLE.to_string());

        push_row(
            &mut csv,
            [
                record.url(),
                record.title(),
                record.domain(),
                record.status().as_str(),
                status_code.as_str(),
                record.error().unwrap_or(""),
            ],
        );
    }

    csv
}

fn push_row<'a>(csv: &mut String, fields: impl IntoIterator<Item = &'a str>) {
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            csv.push(',');
        }
        push_field(csv, field);
    }
    csv.push_str("\r\n");
}

/// Appends one field, quoting it if needed
fn push_field(csv: &mut String, field: &str) {
    if field.contains([',', '"', '\r', '\n']) {
        csv.push('"');
        csv.push_str(&field.replace('"', "\"\""));
        csv.push('"');
    } else {
        csv.push_str(field);
    }
}
