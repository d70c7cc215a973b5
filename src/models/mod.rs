//! Domain model of the reconciled record set.

/// Sentinel values substituted when real data is unavailable.
///
/// These are display-layer contracts: every derived field of a
/// [`ReconciledRecord`] is guaranteed non-empty regardless of source data
/// quality, and these are the values that guarantee rests on.
pub mod sentinels {
    /// Department name when the division join found no match
    pub const UNKNOWN_DEPARTMENT: &str = "Departamento desconocido";
    /// Municipality name when the division join found no match
    pub const UNKNOWN_MUNICIPALITY: &str = "Municipio desconocido";
    /// Cause name when the record carries no cause code at all
    pub const UNCLASSIFIED_CAUSE: &str = "No clasificada";
    /// Age label for unparseable or out-of-range age-group codes
    pub const NO_AGE_INFO: &str = "Sin info";
    /// Sex when the mortality source has no sex column or a null cell
    pub const SEX_UNAVAILABLE: &str = "No disponible";
    /// Group label of the single placeholder row in an empty aggregate
    pub const NO_DATA: &str = "Sin datos";
    /// Filter value meaning "all departments"
    pub const ALL_DEPARTMENTS: &str = "_ALL_";
}

/// One row of the reconciled table: the mortality record joined against the
/// division and cause references, with all display fields populated.
///
/// Created once by the reconciliation pass and immutable thereafter; the
/// full set lives for the process lifetime inside the pipeline context.
#[derive(Debug, Clone)]
pub struct ReconciledRecord {
    /// Normalized department code (empty when the source had none)
    pub dept_key: String,
    /// Normalized municipality code (empty when the source had none)
    pub muni_key: String,
    /// Sex as reported, or [`sentinels::SEX_UNAVAILABLE`]
    pub sex: String,
    /// Month of death, `0` when missing or non-numeric
    pub month: i64,
    /// Raw age-group code as it appeared in the source
    pub age_code: Option<String>,
    /// Trimmed cause code (may be empty)
    pub cause_code: String,
    /// Department display name, never empty
    pub department: String,
    /// Municipality display name, never empty
    pub municipality: String,
    /// Cause display name, never empty
    pub cause_name: String,
    /// Life-stage label, never empty
    pub age_label: &'static str,
}
