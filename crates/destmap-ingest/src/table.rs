//! Raw CSV tables with verbatim string cells.

use std::fs;
use std::io::Read;
use std::path::Path;

use csv::{Reader, ReaderBuilder, WriterBuilder};
use tracing::debug;

use crate::encoding::decode_bytes;
use crate::error::{IngestError, Result};

/// A CSV file held fully in memory as raw strings.
///
/// Headers and cells round-trip unchanged; callers that need exact-match
/// semantics get the text exactly as it appeared in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Index of a column by exact header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    /// Index of a column, failing with `MissingColumn` when absent.
    pub fn require_column(&self, name: &str, path: &Path) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| IngestError::MissingColumn {
                column: name.to_string(),
                path: path.to_path_buf(),
            })
    }

    /// `(key, value)` pairs drawn from two columns, in row order.
    pub fn column_pairs(
        &self,
        key_index: usize,
        value_index: usize,
    ) -> impl Iterator<Item = (String, String)> + '_ {
        self.rows.iter().map(move |row| {
            let key = row.get(key_index).cloned().unwrap_or_default();
            let value = row.get(value_index).cloned().unwrap_or_default();
            (key, value)
        })
    }
}

/// Read a CSV file assumed to be in a default decodable encoding.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .from_path(path)
        .map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
    read_records(path, &mut reader)
}

/// Read a CSV file with best-guess character-encoding detection.
///
/// The whole file is read into memory, decoded (BOM stripped), and parsed
/// from the decoded text. Used for sources that may not be UTF-8.
pub fn read_csv_table_detected(path: &Path) -> Result<CsvTable> {
    let bytes = fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let (text, encoding) = decode_bytes(&bytes);
    debug!(
        path = %path.display(),
        encoding = encoding.name(),
        "detected source encoding"
    );
    let mut reader = ReaderBuilder::new().from_reader(text.as_bytes());
    read_records(path, &mut reader)
}

/// Write a table, overwriting any existing file. No row-index column.
pub fn write_csv_table(path: &Path, table: &CsvTable) -> Result<()> {
    let write_error = |source: csv::Error| IngestError::CsvWrite {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = WriterBuilder::new().from_path(path).map_err(write_error)?;
    writer.write_record(&table.headers).map_err(write_error)?;
    for row in &table.rows {
        writer.write_record(row).map_err(write_error)?;
    }
    writer
        .flush()
        .map_err(|source| write_error(csv::Error::from(source)))?;
    debug!(
        path = %path.display(),
        rows = table.rows.len(),
        "wrote csv table"
    );
    Ok(())
}

fn read_records<R: Read>(path: &Path, reader: &mut Reader<R>) -> Result<CsvTable> {
    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(str::to_string)
        .collect();
    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "read csv table"
    );
    Ok(CsvTable { headers, rows })
}
