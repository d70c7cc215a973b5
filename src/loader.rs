//! CSV source loading utilities.
//!
//! `read_table` is the strict inner function; `load_table_or_empty` wraps it
//! with the pipeline's failure-tolerance contract: a missing or unreadable
//! source degrades to an empty table plus a diagnostic, never an error.

use std::fs::File;
use std::io::{self, Seek};
use std::path::Path;
use std::sync::Arc;

use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;

use crate::config::LoaderConfig;
use crate::error::{EevvError, Result};
use crate::table::RawTable;

/// Open a file for reading, with the path recorded in the error
fn open_source(path: &Path) -> Result<File> {
    if !path.is_file() {
        return Err(EevvError::io(
            path,
            io::Error::new(io::ErrorKind::NotFound, "source file not found"),
        ));
    }
    File::open(path).map_err(|e| EevvError::io(path, e))
}

/// Read a CSV source into a `RawTable`
///
/// Column types are inferred from the first `max_infer_records` rows, so a
/// zero-padded code column stays a string column while a plain numeric code
/// column becomes an integer column. Key normalization downstream makes the
/// two compare equal.
///
/// # Arguments
/// * `path` - Path to the CSV file
/// * `config` - Loader configuration
///
/// # Returns
/// * `Result<RawTable>` - The loaded table, or an error for the caller to absorb
pub fn read_table(path: &Path, config: &LoaderConfig) -> Result<RawTable> {
    let mut file = open_source(path)?;

    let format = Format::default()
        .with_header(config.has_header)
        .with_delimiter(config.delimiter);
    let (schema, _) = format.infer_schema(&mut file, Some(config.max_infer_records))?;
    file.rewind().map_err(|e| EevvError::io(path, e))?;

    let schema = Arc::new(schema);
    let reader = ReaderBuilder::new(schema.clone())
        .with_format(format)
        .build(file)?;

    let mut batches = Vec::new();
    for batch in reader {
        batches.push(batch?);
    }
    let combined = arrow::compute::concat_batches(&schema, &batches)?;

    RawTable::from_batch(combined, config.trim_headers)
}

/// Load a CSV source, absorbing every failure into an empty table
///
/// This is the loader contract the rest of the pipeline is built on: absence
/// or malformation of a source is a supported, non-fatal condition. The only
/// side effect of a failure is a diagnostic naming the path.
#[must_use]
pub fn load_table_or_empty(path: &Path, config: &LoaderConfig) -> RawTable {
    match read_table(path, config) {
        Ok(table) => {
            log::info!(
                "loaded {}: {} rows, {} columns",
                path.display(),
                table.num_rows(),
                table.num_columns()
            );
            table
        }
        Err(e) => {
            log::warn!("could not load {}: {e}", path.display());
            RawTable::empty()
        }
    }
}
