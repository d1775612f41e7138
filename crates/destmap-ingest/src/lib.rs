//! CSV ingestion for the destination mapper.
//!
//! Reads delimited text files into raw string tables and writes them back out.
//! Cells are held verbatim: no trimming, no type inference, so a table
//! round-trips with its original text formatting intact. The data file may
//! come from tools that write legacy encodings, so a detecting reader sniffs
//! the encoding (BOM, UTF-8 validation, windows-1252 fallback) before parsing.

mod encoding;
mod error;
mod table;

pub use encoding::{decode_bytes, detect_encoding};
pub use error::{IngestError, Result};
pub use table::{CsvTable, read_csv_table, read_csv_table_detected, write_csv_table};
