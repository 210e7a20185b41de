//! CSV reading into raw rows.

use ::csv::ReaderBuilder;

use crate::decode::decode_text;
use crate::error::{IngestError, Result};
use crate::table::{RawRecord, RawTable};

use super::delimiter::detect_delimiter;

/// Reads delimited text into a [`RawTable`].
///
/// The first non-empty record is the header row. Records whose cells are all
/// blank are skipped and do not count as rows. Every cell stays a string.
/// Data rows are numbered from 2, the header being row 1.
pub fn read_csv_table(bytes: &[u8]) -> Result<RawTable> {
    let text = decode_text(bytes);
    if text.trim().is_empty() {
        return Err(IngestError::EmptyCsv);
    }

    let delimiter = detect_delimiter(&text);
    tracing::debug!(delimiter = %char::from(delimiter).escape_default(), "detected delimiter");

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut table: Option<RawTable> = None;
    let mut data_rows = 0usize;

    for result in reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(err) => {
                // A broken header row is fatal; a broken data row is not.
                let Some(table) = table.as_mut() else {
                    return Err(IngestError::CsvParse {
                        message: err.to_string(),
                    });
                };
                data_rows += 1;
                table
                    .rows
                    .push(RawRecord::unreadable(data_rows + 1, err.to_string()));
                continue;
            }
        };
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let cells: Vec<String> = record.iter().map(str::to_string).collect();
        match table.as_mut() {
            Some(table) => {
                data_rows += 1;
                table.rows.push(RawRecord::new(data_rows + 1, cells));
            }
            None => table = Some(RawTable::new(cells)),
        }
    }

    match table {
        Some(table) if !table.rows.is_empty() => Ok(table),
        _ => Err(IngestError::EmptyCsv),
    }
}
