//! Delimited text reading.

mod delimiter;
mod reader;

pub use reader::read_csv_table;
