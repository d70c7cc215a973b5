//! The non-fetal mortality source (one row per registered death).

use crate::schema::{FieldCandidates, FieldMap, LogicalField};
use crate::table::RawTable;

/// Default file name of the mortality source inside the data directory
pub const FILE_NAME: &str = "NoFetal2019.csv";

/// Source name used in diagnostics
pub const SOURCE_NAME: &str = "mortality";

/// Department code, most specific name first
pub const DEPT_CODE: FieldCandidates = FieldCandidates::new(
    LogicalField::DeptCode,
    &["COD_DEPARTAMENTO", "COD_DPTO", "COD_DEPTO", "COD_DANE"],
);

/// Municipality code
pub const MUNI_CODE: FieldCandidates = FieldCandidates::new(
    LogicalField::MuniCode,
    &["COD_MUNICIPIO", "COD_MPIO", "COD_MPIO_A", "COD_MUN"],
);

/// Sex of the deceased
pub const SEX: FieldCandidates = FieldCandidates::new(LogicalField::Sex, &["SEXO"]);

/// Month of death
pub const MONTH: FieldCandidates = FieldCandidates::new(LogicalField::Month, &["MES"]);

/// Coded age group
pub const AGE_GROUP_CODE: FieldCandidates =
    FieldCandidates::new(LogicalField::AgeGroupCode, &["GRUPO_EDAD1", "GRUPO_EDAD"]);

/// Cause-of-death code
pub const CAUSE_CODE: FieldCandidates =
    FieldCandidates::new(LogicalField::CauseCode, &["COD_MUERTE", "COD_MUER"]);

const ALL: &[FieldCandidates] = &[DEPT_CODE, MUNI_CODE, SEX, MONTH, AGE_GROUP_CODE, CAUSE_CODE];

/// Resolved column indexes of the mortality source
///
/// Every field is optional: an unresolved field means the corresponding
/// record fields fall back to their sentinel defaults.
#[derive(Debug, Default)]
pub struct MortalityColumns {
    /// Department code column
    pub dept_code: Option<usize>,
    /// Municipality code column
    pub muni_code: Option<usize>,
    /// Sex column
    pub sex: Option<usize>,
    /// Month column
    pub month: Option<usize>,
    /// Age-group code column
    pub age_group: Option<usize>,
    /// Cause code column
    pub cause_code: Option<usize>,
}

impl MortalityColumns {
    /// Resolve the mortality source's logical fields against a raw table
    #[must_use]
    pub fn resolve(table: &RawTable) -> Self {
        let map = FieldMap::resolve(table, ALL);
        map.log_summary(SOURCE_NAME, ALL);
        Self {
            dept_code: map.index(LogicalField::DeptCode),
            muni_code: map.index(LogicalField::MuniCode),
            sex: map.index(LogicalField::Sex),
            month: map.index(LogicalField::Month),
            age_group: map.index(LogicalField::AgeGroupCode),
            cause_code: map.index(LogicalField::CauseCode),
        }
    }
}
