//! Error handling for the EEVV pipeline.
//!
//! The pipeline's failure policy is "always degrade, never crash": loader
//! failures collapse to empty tables, schema misses become `None`, and join
//! or category misses become sentinel labels. The error type below therefore
//! only travels inside the strict inner functions (`read_table`, the GeoJSON
//! probe); the absorbing wrappers turn it into diagnostics.

use std::io;
use std::path::PathBuf;

use arrow::error::ArrowError;
use thiserror::Error;

/// Specialized error type for the EEVV pipeline
#[derive(Debug, Error)]
pub enum EevvError {
    /// Error opening or reading a source file
    #[error("IO error reading {path}: {source}")]
    Io {
        /// Path of the file that failed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },
    /// Error parsing tabular data through Arrow
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),
    /// Error with source schema handling
    #[error("Schema error: {0}")]
    Schema(String),
    /// Error with the optional boundary-geometry file
    #[error("Geometry error: {0}")]
    Geometry(String),
}

impl EevvError {
    /// Build an IO error that names the file it came from
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for EEVV pipeline operations
pub type Result<T> = std::result::Result<T, EevvError>;
