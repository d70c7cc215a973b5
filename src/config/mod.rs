//! Configuration for the source loader.

/// Configuration for loading raw tabular sources
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Field delimiter of the source files
    pub delimiter: u8,
    /// Whether the first row carries column labels
    pub has_header: bool,
    /// Number of records to scan when inferring column types
    pub max_infer_records: usize,
    /// Trim surrounding whitespace from column labels once at load time
    pub trim_headers: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_header: true,
            max_infer_records: 1000,
            trim_headers: true,
        }
    }
}
