//! File-to-`ParseResult` pipeline.

use std::path::Path;

use listkit_model::ParseResult;
use tracing::{debug, info, info_span, warn};

use crate::csv::read_csv_table;
use crate::error::{IngestError, Result};
use crate::format::FileFormat;
use crate::header::{normalize_headers, unique_headers};
use crate::mapper::map_row;
use crate::options::IngestOptions;
use crate::spreadsheet::read_spreadsheet_table;
use crate::table::RawTable;

/// Normalizes a contact file held in memory, with default options.
pub fn parse_bytes(bytes: &[u8], filename: &str) -> ParseResult {
    parse_bytes_with(bytes, filename, &IngestOptions::default())
}

/// Normalizes a contact file held in memory.
///
/// `filename` is only used for its extension. Never fails: file-level
/// problems come back as a zero-row result with one error message.
pub fn parse_bytes_with(bytes: &[u8], filename: &str, options: &IngestOptions) -> ParseResult {
    let span = info_span!("parse", file = %filename, bytes = bytes.len());
    let _guard = span.enter();

    into_result(read_table(bytes, filename, options))
}

fn into_result(table: Result<RawTable>) -> ParseResult {
    match table {
        Ok(table) => {
            let result = normalize_table(&table);
            info!(
                total_rows = result.total_rows,
                valid_rows = result.valid_rows,
                errors = result.errors.len(),
                "normalized contact file"
            );
            result
        }
        Err(error) => {
            warn!(%error, "contact file rejected");
            ParseResult::failure(error.to_string())
        }
    }
}

fn read_table(bytes: &[u8], filename: &str, options: &IngestOptions) -> Result<RawTable> {
    let format = FileFormat::from_filename(filename)?;
    options.check_size(bytes.len() as u64)?;
    match format {
        FileFormat::Delimited => read_csv_table(bytes),
        FileFormat::Spreadsheet(kind) => read_spreadsheet_table(bytes, kind),
    }
}

/// Maps every record of a table onto contacts or row errors.
pub fn normalize_table(table: &RawTable) -> ParseResult {
    let headers = normalize_headers(&table.headers);
    let mut data = Vec::new();
    let mut errors = Vec::new();

    for record in &table.rows {
        let outcome = record
            .cells
            .as_ref()
            .map_err(Clone::clone)
            .and_then(|cells| map_row(&headers, cells, record.row));
        match outcome {
            Ok(contact) => data.push(contact),
            Err(error) => {
                debug!(row = error.row(), "row rejected");
                errors.push(error.to_string());
            }
        }
    }

    ParseResult {
        total_rows: table.rows.len(),
        valid_rows: data.len(),
        headers: unique_headers(&headers),
        data,
        errors,
    }
}

/// Reads and normalizes a contact file from disk, with default options.
pub async fn parse_file(path: impl AsRef<Path>) -> ParseResult {
    parse_file_with(path, IngestOptions::default()).await
}

/// Reads and normalizes a contact file from disk.
///
/// The extension is checked before any I/O. The parse itself runs on the
/// blocking pool. Like [`parse_bytes_with`], this never fails.
pub async fn parse_file_with(path: impl AsRef<Path>, options: IngestOptions) -> ParseResult {
    let path = path.as_ref();
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    match load_file(path, &filename, &options).await {
        Ok(bytes) => {
            let task =
                tokio::task::spawn_blocking(move || parse_bytes_with(&bytes, &filename, &options));
            match task.await {
                Ok(result) => result,
                Err(e) => {
                    let error = IngestError::Task {
                        message: e.to_string(),
                    };
                    warn!(%error, "parse task failed");
                    ParseResult::failure(error.to_string())
                }
            }
        }
        Err(error) => {
            warn!(path = %path.display(), %error, "contact file rejected");
            ParseResult::failure(error.to_string())
        }
    }
}

async fn load_file(path: &Path, filename: &str, options: &IngestOptions) -> Result<Vec<u8>> {
    FileFormat::from_filename(filename)?;
    let read_error = |source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    };
    let metadata = tokio::fs::metadata(path).await.map_err(read_error)?;
    options.check_size(metadata.len())?;
    tokio::fs::read(path).await.map_err(read_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_table_counts() {
        let mut table = RawTable::new(vec!["Email".to_string(), "First Name".to_string()]);
        table.push_row(2, &["a@b.co", "Ann"]);
        table.push_row(3, &["nope", "Bob"]);
        table
            .rows
            .push(crate::table::RawRecord::unreadable(4, "unterminated quote"));

        let result = normalize_table(&table);
        assert_eq!(result.total_rows, 3);
        assert_eq!(result.valid_rows, 1);
        assert_eq!(result.data[0].name.as_deref(), Some("Ann"));
        assert_eq!(
            result.errors,
            vec!["Row 3: No valid email found", "Row 4: unterminated quote"]
        );
        assert_eq!(result.headers, vec!["email", "firstName"]);
    }

    #[test]
    fn test_empty_spreadsheet_result() {
        let range: calamine::Range<calamine::Data> = calamine::Range::empty();
        let result = into_result(crate::spreadsheet::table_from_range(&range));
        assert_eq!(
            result,
            ParseResult {
                data: vec![],
                errors: vec!["Excel file is empty".to_string()],
                total_rows: 0,
                valid_rows: 0,
                headers: vec![],
            }
        );
    }

    #[test]
    fn test_size_limit_checked_after_format() {
        let options = IngestOptions::new().with_max_file_size(4);
        let result = parse_bytes_with(b"Email\na@b.co\n", "list.csv", &options);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].starts_with("File is too large"));

        let result = parse_bytes_with(b"Email\na@b.co\n", "list.pdf", &options);
        assert_eq!(
            result.errors,
            vec!["Unsupported file format. Please upload CSV, XLS, or XLSX files."]
        );
    }
}
