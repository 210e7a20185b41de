//! Error types for contact file ingestion.
//!
//! The `Display` text of each variant is the message shown to the user, so
//! changing it changes what ends up in `ParseResult::errors`.

use std::path::PathBuf;
use thiserror::Error;

/// File-level failures. Any of these aborts the whole file.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Input Errors ===
    /// Extension is not one of csv, xls, xlsx.
    #[error("Unsupported file format. Please upload CSV, XLS, or XLSX files.")]
    UnsupportedFormat { extension: Option<String> },

    /// File exceeds the configured size limit.
    #[error("File is too large: {size} bytes (limit is {max_size} bytes)")]
    FileTooLarge { size: u64, max_size: u64 },

    /// Failed to read the file from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Background parse task panicked or was cancelled.
    #[error("Failed to parse file: {message}")]
    Task { message: String },

    // === CSV Errors ===
    /// No header row, or a header row with no data rows.
    #[error("CSV file is empty")]
    EmptyCsv,

    /// The delimited text could not be parsed.
    #[error("CSV Parse Error: {message}")]
    CsvParse { message: String },

    // === Spreadsheet Errors ===
    /// First sheet has no header row or no data rows.
    #[error("Excel file is empty")]
    EmptyWorkbook,

    /// The workbook could not be opened or its first sheet read.
    #[error("Excel Parse Error: {message}")]
    ExcelParse { message: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

/// Why a single row did not produce a contact. The batch always continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("Row {row}: No valid email found")]
    NoValidEmail { row: usize },

    /// The reader could not make sense of the row.
    #[error("Row {row}: {message}")]
    Malformed { row: usize, message: String },
}

impl RowError {
    /// 1-based display row number, header row being row 1.
    pub fn row(&self) -> usize {
        match self {
            RowError::NoValidEmail { row } | RowError::Malformed { row, .. } => *row,
        }
    }
}
