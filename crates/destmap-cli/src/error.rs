//! Terminal error kinds for a mapping run.

use std::path::PathBuf;

use destmap_ingest::IngestError;
use thiserror::Error;

/// Failures that end the current run.
///
/// Every variant is terminal: nothing is retried, and the output file is only
/// written after all stages that can produce one of these have passed.
#[derive(Debug, Error)]
pub enum RunError {
    /// A required path parameter was empty.
    #[error("missing required path: {name}")]
    MissingInput { name: &'static str },

    /// An input path does not reference an existing file.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The output directory is missing and could not be created.
    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A source table could not be read or parsed.
    #[error("failed to load table: {source}")]
    DataLoad {
        #[source]
        source: IngestError,
    },

    /// A required column is absent from a loaded table.
    #[error("required column '{column}' not found in {path}")]
    Schema { column: String, path: PathBuf },

    /// The output file could not be written.
    #[error("failed to write output: {source}")]
    Write {
        #[source]
        source: IngestError,
    },
}
