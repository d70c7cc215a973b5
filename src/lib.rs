//! A Rust library for reconciling and aggregating Colombian vital statistics
//! (EEVV) non-fetal mortality microdata.
//!
//! Three loosely-structured tabular sources (mortality records, the Divipola
//! administrative-division reference, and the cause-of-death code table) are
//! loaded, their columns resolved heuristically, joined on normalized keys,
//! labeled, and aggregated into the fixed set of views a dashboard renders.
//! Missing or malformed inputs degrade to sentinels; nothing past the loader
//! is allowed to fail.

pub mod aggregate;
pub mod categorize;
pub mod config;
pub mod context;
pub mod error;
pub mod geo;
pub mod loader;
pub mod models;
pub mod reconcile;
pub mod schema;
pub mod source;
pub mod table;

// Re-export the most common types for easier use
// Core types
pub use config::LoaderConfig;
pub use context::{DashboardView, PipelineContext};
pub use error::{EevvError, Result};
pub use table::RawTable;

// Pipeline stages
pub use categorize::{LifeStage, label_age};
pub use loader::{load_table_or_empty, read_table};
pub use reconcile::{normalize_key, reconcile};
pub use schema::{FieldMap, LogicalField, resolve_column};

// Aggregation
pub use aggregate::{AggregateSet, DepartmentFilter, aggregate};

// Arrow types
pub use arrow::record_batch::RecordBatch;
