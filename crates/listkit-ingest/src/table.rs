//! Raw rows as produced by the file adapters.

use crate::error::RowError;

/// One data record read from a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// 1-based display row number (header row is row 1).
    pub row: usize,
    /// Cell text aligned to the header row, or why the row could not be read.
    pub cells: Result<Vec<String>, RowError>,
}

impl RawRecord {
    pub fn new(row: usize, cells: Vec<String>) -> Self {
        Self {
            row,
            cells: Ok(cells),
        }
    }

    pub fn unreadable(row: usize, message: impl Into<String>) -> Self {
        Self {
            row,
            cells: Err(RowError::Malformed {
                row,
                message: message.into(),
            }),
        }
    }
}

/// Original header row plus the data records beneath it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRecord>,
}

impl RawTable {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Appends a record with cells given as string slices.
    pub fn push_row<S: AsRef<str>>(&mut self, row: usize, cells: &[S]) {
        let cells = cells.iter().map(|cell| cell.as_ref().to_string()).collect();
        self.rows.push(RawRecord::new(row, cells));
    }
}
