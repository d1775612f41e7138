//! The mapping run pipeline.
//!
//! A run is a linear sequence of hard preconditions: validate the four paths,
//! ensure the output directory, load the dataset (with encoding detection),
//! load and check both mapping tables, resolve every row, then write the
//! augmented dataset. The output file is the only externally visible effect
//! and is opened only after everything before it has succeeded.

use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{info, info_span};

use destmap_ingest::{
    CsvTable, IngestError, read_csv_table, read_csv_table_detected, write_csv_table,
};
use destmap_map::{CountryTable, ResolutionSource, resolve};

use crate::error::RunError;

/// Column the data file must carry.
pub const DESTINATION_COLUMN: &str = "Destination";
/// Column appended to the output.
pub const MAPPED_COLUMN: &str = "MappedDestination";

const CITY_KEY_COLUMN: &str = "name";
const AIRPORT_KEY_COLUMN: &str = "IATA";
const COUNTRY_COLUMN: &str = "Country";

/// The four paths of one mapping run.
#[derive(Debug, Clone)]
pub struct RunRequest {
    pub city_map: PathBuf,
    pub airport_map: PathBuf,
    pub data: PathBuf,
    pub output_dir: PathBuf,
}

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub output_path: PathBuf,
    pub rows: usize,
    pub city_matches: usize,
    pub airport_matches: usize,
    pub passthrough: usize,
}

/// Execute one mapping run.
pub fn run(request: &RunRequest) -> Result<RunResult, RunError> {
    let span = info_span!("map_run", data = %request.data.display());
    let _guard = span.enter();
    let start = Instant::now();

    validate_paths(request)?;
    ensure_output_dir(&request.output_dir)?;

    let data = read_csv_table_detected(&request.data).map_err(load_error)?;
    let destination_index = require_column(&data, DESTINATION_COLUMN, &request.data)?;

    let cities = load_country_table(&request.city_map, CITY_KEY_COLUMN)?;
    let airports = load_country_table(&request.airport_map, AIRPORT_KEY_COLUMN)?;
    info!(
        rows = data.rows.len(),
        city_keys = cities.len(),
        airport_keys = airports.len(),
        "tables loaded"
    );

    let (mapped, counts) = map_destinations(data, destination_index, &cities, &airports);

    let output_path = output_path(&request.data, &request.output_dir);
    write_csv_table(&output_path, &mapped).map_err(|source| RunError::Write { source })?;
    info!(
        output = %output_path.display(),
        rows = mapped.rows.len(),
        city_matches = counts.city,
        airport_matches = counts.airport,
        passthrough = counts.passthrough,
        duration_ms = start.elapsed().as_millis(),
        "mapping run complete"
    );

    Ok(RunResult {
        output_path,
        rows: mapped.rows.len(),
        city_matches: counts.city,
        airport_matches: counts.airport,
        passthrough: counts.passthrough,
    })
}

/// Output file path: `<stem>_updated_dest<.ext>` inside the output directory.
pub fn output_path(data_path: &Path, output_dir: &Path) -> PathBuf {
    let stem = data_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("data");
    let name = match data_path.extension().and_then(|e| e.to_str()) {
        Some(extension) => format!("{stem}_updated_dest.{extension}"),
        None => format!("{stem}_updated_dest"),
    };
    output_dir.join(name)
}

fn validate_paths(request: &RunRequest) -> Result<(), RunError> {
    let parameters = [
        ("city-map", &request.city_map),
        ("airport-map", &request.airport_map),
        ("data", &request.data),
        ("output-dir", &request.output_dir),
    ];
    for (name, path) in parameters {
        if path.as_os_str().is_empty() {
            return Err(RunError::MissingInput { name });
        }
    }
    for path in [&request.city_map, &request.airport_map, &request.data] {
        if !path.is_file() {
            return Err(RunError::FileNotFound { path: path.clone() });
        }
    }
    Ok(())
}

fn ensure_output_dir(dir: &Path) -> Result<(), RunError> {
    if dir.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(dir).map_err(|source| RunError::OutputDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Promote a missing-column failure to the schema kind; everything else is a
/// load failure.
fn load_error(source: IngestError) -> RunError {
    match source {
        IngestError::MissingColumn { column, path } => RunError::Schema { column, path },
        source => RunError::DataLoad { source },
    }
}

fn require_column(table: &CsvTable, name: &str, path: &Path) -> Result<usize, RunError> {
    table.require_column(name, path).map_err(load_error)
}

fn load_country_table(path: &Path, key_column: &str) -> Result<CountryTable, RunError> {
    let table = read_csv_table(path).map_err(load_error)?;
    let key = require_column(&table, key_column, path)?;
    let country = require_column(&table, COUNTRY_COLUMN, path)?;
    Ok(CountryTable::from_pairs(table.column_pairs(key, country)))
}

#[derive(Debug, Default, Clone, Copy)]
struct MatchCounts {
    city: usize,
    airport: usize,
    passthrough: usize,
}

/// Resolve every row's destination and append the result as a new column.
///
/// Rows are visited in order and never filtered or reordered; the only change
/// is the appended column.
fn map_destinations(
    mut data: CsvTable,
    destination_index: usize,
    cities: &CountryTable,
    airports: &CountryTable,
) -> (CsvTable, MatchCounts) {
    let mut counts = MatchCounts::default();
    data.headers.push(MAPPED_COLUMN.to_string());
    for row in &mut data.rows {
        let destination = row.get(destination_index).cloned().unwrap_or_default();
        let resolution = resolve(&destination, cities, airports);
        match resolution.source {
            ResolutionSource::City => counts.city += 1,
            ResolutionSource::Airport => counts.airport += 1,
            ResolutionSource::Passthrough => counts.passthrough += 1,
        }
        let country = resolution.country.to_string();
        row.push(country);
    }
    (data, counts)
}
