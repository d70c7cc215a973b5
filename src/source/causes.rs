//! The cause-of-death code reference source.
//!
//! Maps ICD-10 codes to human-readable cause names. This source has been
//! observed shipped effectively empty (a lone `Unnamed: 0` column), which is
//! why the export artifact appears among the code candidates and why both
//! fields resolving is a precondition for the join.

use crate::schema::{FieldCandidates, FieldMap, LogicalField};
use crate::table::RawTable;

/// Default file name of the cause-code reference inside the data directory
pub const FILE_NAME: &str = "CodigosDeMuerte.csv";

/// Source name used in diagnostics
pub const SOURCE_NAME: &str = "causes";

/// Cause code, accent and casing variants first, export artifact last
pub const CODE: FieldCandidates = FieldCandidates::new(
    LogicalField::CauseCode,
    &[
        "CÓDIGO",
        "CODIGO",
        "Código",
        "Código_CIE",
        "Código_CIE10",
        "Unnamed: 0",
    ],
);

/// Cause display name
pub const NAME: FieldCandidates = FieldCandidates::new(
    LogicalField::CauseName,
    &[
        "NOMBRE",
        "NOMBRE_CAUSA",
        "DESCRIPCION",
        "NOMBRE_CIE",
        "Descripcion",
        "Nombre",
    ],
);

const ALL: &[FieldCandidates] = &[CODE, NAME];

/// Resolved column indexes of the cause-code reference
#[derive(Debug, Default)]
pub struct CauseColumns {
    /// Cause code column
    pub code: Option<usize>,
    /// Cause name column
    pub name: Option<usize>,
}

impl CauseColumns {
    /// Resolve the cause reference's logical fields against a raw table
    #[must_use]
    pub fn resolve(table: &RawTable) -> Self {
        let map = FieldMap::resolve(table, ALL);
        map.log_summary(SOURCE_NAME, ALL);
        Self {
            code: map.index(LogicalField::CauseCode),
            name: map.index(LogicalField::CauseName),
        }
    }

    /// Whether the source resolved completely enough to join against
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.code.is_some() && self.name.is_some()
    }
}
