//! Contact file ingestion.
//!
//! This crate turns an uploaded contact file (CSV or Excel) into a
//! [`ParseResult`]: the contacts that carry a usable email address plus one
//! error message per rejected row.
//!
//! # Features
//!
//! - **Format Detection**: Choose an adapter from the file extension
//! - **CSV Loading**: Delimiter auto-detection, BOM and legacy encoding handling
//! - **Spreadsheet Loading**: First sheet of an XLSX or XLS workbook
//! - **Header Normalization**: Map header synonyms onto canonical contact fields
//! - **Contact Extraction**: Email discovery and name reconciliation per row
//!
//! Every entry point returns a `ParseResult`; file-level failures become a
//! zero-row result with a single error instead of an `Err`.
//!
//! # Example
//!
//! ```ignore
//! use listkit_ingest::{parse_bytes, parse_file};
//!
//! let result = parse_bytes(b"Email,Name\njane@x.com,Jane Doe\n", "contacts.csv");
//! assert_eq!(result.valid_rows, 1);
//!
//! let result = parse_file("exports/leads.xlsx").await;
//! println!("{} of {} rows usable", result.valid_rows, result.total_rows);
//! ```

mod csv;
mod decode;
mod email;
mod error;
mod format;
mod header;
mod mapper;
mod options;
mod pipeline;
mod spreadsheet;
mod table;

// === Error Types ===
pub use error::{IngestError, Result, RowError};

// === Configuration ===
pub use options::{IngestOptions, MAX_CONTACT_FILE_SIZE};

// === Format Detection ===
pub use format::{FileFormat, SpreadsheetKind};

// === Normalization Building Blocks ===
pub use email::is_valid_email;
pub use header::{canonical_alias, header_aliases, normalize_header, normalize_headers, unique_headers};
pub use mapper::map_row;
pub use table::{RawRecord, RawTable};

// === Pipeline ===
pub use pipeline::{normalize_table, parse_bytes, parse_bytes_with, parse_file, parse_file_with};

pub use listkit_model::{Contact, ParseResult};
