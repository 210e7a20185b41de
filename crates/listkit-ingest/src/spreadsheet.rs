//! Spreadsheet reading (first sheet of an XLSX or XLS workbook).

use std::fmt::Display;
use std::io::{Cursor, Read, Seek};

use calamine::{Data, Range, Reader, Xls, Xlsx};

use crate::error::{IngestError, Result};
use crate::format::SpreadsheetKind;
use crate::table::RawTable;

/// Reads the first sheet of a workbook into a [`RawTable`].
pub fn read_spreadsheet_table(bytes: &[u8], kind: SpreadsheetKind) -> Result<RawTable> {
    let cursor = Cursor::new(bytes);
    let range = match kind {
        SpreadsheetKind::Xlsx => first_sheet::<_, Xlsx<_>>(cursor)?,
        SpreadsheetKind::Xls => first_sheet::<_, Xls<_>>(cursor)?,
    };
    table_from_range(&range)
}

fn first_sheet<RS, R>(reader: RS) -> Result<Range<Data>>
where
    RS: Read + Seek,
    R: Reader<RS>,
    R::Error: Display,
{
    let mut workbook = R::new(reader).map_err(|e| IngestError::ExcelParse {
        message: e.to_string(),
    })?;
    match workbook.worksheet_range_at(0) {
        Some(range) => range.map_err(|e| IngestError::ExcelParse {
            message: e.to_string(),
        }),
        None => Err(IngestError::EmptyWorkbook),
    }
}

/// Converts a sheet range into header and data rows.
///
/// The first row of the range is the header row. Rows whose cells are all
/// empty are skipped. Row numbers are counted from the top of the sheet, so
/// a sheet whose used range starts at A1 numbers its first data row 2.
pub(crate) fn table_from_range(range: &Range<Data>) -> Result<RawTable> {
    let start_row = range.start().map_or(0, |(row, _)| row as usize);
    let mut rows = range.rows().enumerate();

    let Some((_, header_row)) = rows.next() else {
        return Err(IngestError::EmptyWorkbook);
    };
    let mut table = RawTable::new(header_row.iter().map(cell_text).collect());

    for (offset, row) in rows {
        let cells: Vec<String> = row.iter().map(cell_text).collect();
        if cells.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        table.push_row(start_row + offset + 1, &cells);
    }

    if table.rows.is_empty() {
        return Err(IngestError::EmptyWorkbook);
    }
    Ok(table)
}

/// Displayed text of a cell. Whole numbers render without a fraction.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(value) => value.clone(),
        other => other.to_string(),
    }
}
