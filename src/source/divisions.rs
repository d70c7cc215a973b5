//! The Divipola administrative-division reference source.
//!
//! Maps (department code, municipality code) pairs to display names. The
//! reconciler only joins against this source when all four fields resolve;
//! otherwise every record gets the unknown-division sentinels.

use crate::schema::{FieldCandidates, FieldMap, LogicalField};
use crate::table::RawTable;

/// Default file name of the division reference inside the data directory
pub const FILE_NAME: &str = "Divipola.csv";

/// Source name used in diagnostics
pub const SOURCE_NAME: &str = "divisions";

/// Department code
pub const DEPT_CODE: FieldCandidates = FieldCandidates::new(
    LogicalField::DeptCode,
    &["COD_DEPARTAMENTO", "COD_DEPTO", "COD_DANE"],
);

/// Municipality code
pub const MUNI_CODE: FieldCandidates =
    FieldCandidates::new(LogicalField::MuniCode, &["COD_MUNICIPIO", "COD_MPIO"]);

/// Department display name
pub const DEPT_NAME: FieldCandidates = FieldCandidates::new(
    LogicalField::DeptName,
    &["DEPARTAMENTO", "NOMBRE_DEPARTAMENTO", "NOMBRE_DPT"],
);

/// Municipality display name
pub const MUNI_NAME: FieldCandidates =
    FieldCandidates::new(LogicalField::MuniName, &["MUNICIPIO", "NOMBRE_MUNICIPIO"]);

const ALL: &[FieldCandidates] = &[DEPT_CODE, MUNI_CODE, DEPT_NAME, MUNI_NAME];

/// Resolved column indexes of the division reference
#[derive(Debug, Default)]
pub struct DivisionColumns {
    /// Department code column
    pub dept_code: Option<usize>,
    /// Municipality code column
    pub muni_code: Option<usize>,
    /// Department name column
    pub dept_name: Option<usize>,
    /// Municipality name column
    pub muni_name: Option<usize>,
}

impl DivisionColumns {
    /// Resolve the division reference's logical fields against a raw table
    #[must_use]
    pub fn resolve(table: &RawTable) -> Self {
        let map = FieldMap::resolve(table, ALL);
        map.log_summary(SOURCE_NAME, ALL);
        Self {
            dept_code: map.index(LogicalField::DeptCode),
            muni_code: map.index(LogicalField::MuniCode),
            dept_name: map.index(LogicalField::DeptName),
            muni_name: map.index(LogicalField::MuniName),
        }
    }

    /// Whether the source resolved completely enough to join against
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.dept_code.is_some()
            && self.muni_code.is_some()
            && self.dept_name.is_some()
            && self.muni_name.is_some()
    }
}
