//! File format detection from the declared filename.

use crate::error::{IngestError, Result};

/// Workbook container flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadsheetKind {
    /// Office Open XML workbook (`.xlsx`).
    Xlsx,
    /// Legacy BIFF workbook (`.xls`).
    Xls,
}

/// Which adapter reads a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Delimited text (`.csv`).
    Delimited,
    Spreadsheet(SpreadsheetKind),
}

impl FileFormat {
    /// Picks the format from the filename's extension, case-insensitively.
    ///
    /// The extension is whatever follows the last `.`, so a bare `.csv` counts.
    /// Only the extension is consulted; the bytes are never sniffed.
    pub fn from_filename(filename: &str) -> Result<Self> {
        let extension = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase());
        match extension.as_deref() {
            Some("csv") => Ok(FileFormat::Delimited),
            Some("xlsx") => Ok(FileFormat::Spreadsheet(SpreadsheetKind::Xlsx)),
            Some("xls") => Ok(FileFormat::Spreadsheet(SpreadsheetKind::Xls)),
            _ => Err(IngestError::UnsupportedFormat { extension }),
        }
    }
}
