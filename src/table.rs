//! In-memory representation of one raw tabular source.

use std::sync::Arc;

use arrow::array::{
    Array, BooleanArray, Float32Array, Float64Array, Int32Array, Int64Array, LargeStringArray,
    StringArray,
};
use arrow::datatypes::{DataType, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::display::array_value_to_string;

use crate::error::Result;

/// One raw source's unmodified content after loading.
///
/// A `RawTable` is an ordered set of named columns of scalar values, backed
/// by an Arrow `RecordBatch`. Column labels are trimmed once at construction
/// so every later lookup is an exact, case-sensitive match. A table with
/// zero rows and zero columns is the loader's degraded output for missing or
/// malformed files, and every downstream stage must behave sanely on it.
#[derive(Debug, Clone)]
pub struct RawTable {
    batch: RecordBatch,
}

impl RawTable {
    /// Create an empty table (zero rows, zero columns)
    #[must_use]
    pub fn empty() -> Self {
        Self {
            batch: RecordBatch::new_empty(Arc::new(Schema::empty())),
        }
    }

    /// Wrap a record batch, optionally trimming surrounding whitespace from
    /// its column labels
    pub fn from_batch(batch: RecordBatch, trim_headers: bool) -> Result<Self> {
        if !trim_headers {
            return Ok(Self { batch });
        }

        let needs_trim = batch
            .schema()
            .fields()
            .iter()
            .any(|f| f.name().trim() != f.name());
        if !needs_trim {
            return Ok(Self { batch });
        }

        let trimmed = batch
            .schema()
            .fields()
            .iter()
            .map(|f| f.as_ref().clone().with_name(f.name().trim()))
            .collect::<Vec<_>>();
        let schema = Arc::new(Schema::new(trimmed));
        let batch = RecordBatch::try_new(schema, batch.columns().to_vec())?;
        Ok(Self { batch })
    }

    /// Number of data rows
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.batch.num_rows()
    }

    /// Number of columns
    #[must_use]
    pub fn num_columns(&self) -> usize {
        self.batch.num_columns()
    }

    /// Whether the table holds no data rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.batch.num_rows() == 0
    }

    /// The (trimmed) column labels, in source order
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.batch
            .schema()
            .fields()
            .iter()
            .map(|f| f.name().clone())
            .collect()
    }

    /// Index of the column with exactly this label, if present
    #[must_use]
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.batch.schema().index_of(name).ok()
    }

    /// Render the scalar at (column, row) as a string, or `None` for nulls.
    ///
    /// Integral floats render without a trailing `.0`, so `5`, `5.0` and
    /// `"5"` all come out as `"5"` and normalize to the same join key.
    #[must_use]
    pub fn value(&self, col: usize, row: usize) -> Option<String> {
        if col >= self.batch.num_columns() || row >= self.batch.num_rows() {
            return None;
        }
        let array = self.batch.column(col);
        if array.is_null(row) {
            return None;
        }

        match array.data_type() {
            DataType::Utf8 => array
                .as_any()
                .downcast_ref::<StringArray>()
                .map(|a| a.value(row).to_string()),
            DataType::LargeUtf8 => array
                .as_any()
                .downcast_ref::<LargeStringArray>()
                .map(|a| a.value(row).to_string()),
            DataType::Int32 => array
                .as_any()
                .downcast_ref::<Int32Array>()
                .map(|a| a.value(row).to_string()),
            DataType::Int64 => array
                .as_any()
                .downcast_ref::<Int64Array>()
                .map(|a| a.value(row).to_string()),
            DataType::Float32 => array
                .as_any()
                .downcast_ref::<Float32Array>()
                .map(|a| render_float(f64::from(a.value(row)))),
            DataType::Float64 => array
                .as_any()
                .downcast_ref::<Float64Array>()
                .map(|a| render_float(a.value(row))),
            DataType::Boolean => array
                .as_any()
                .downcast_ref::<BooleanArray>()
                .map(|a| a.value(row).to_string()),
            _ => array_value_to_string(array, row).ok(),
        }
    }

    /// The underlying Arrow batch
    #[must_use]
    pub fn batch(&self) -> &RecordBatch {
        &self.batch
    }
}

/// Render a float, dropping the fractional part when it is exactly zero
fn render_float(v: f64) -> String {
    if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}
