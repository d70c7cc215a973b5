//! Heuristic schema resolution for loosely-structured sources.
//!
//! The three raw sources name semantically-equivalent columns inconsistently
//! (`COD_MUNICIPIO` vs `COD_MPIO`, `NOMBRE` vs `DESCRIPCION`). Rather than
//! depending on literal column names, the pipeline resolves each *logical
//! field* once, against an ordered list of acceptable literal names, and all
//! downstream code works from the resolved [`FieldMap`]. A field with no
//! matching candidate is a normal outcome, not an error: every consumer has
//! a documented sentinel fallback.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::table::RawTable;

/// The semantic data elements the pipeline cares about, independent of the
/// literal column name any given source uses for them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalField {
    /// Department (administrative level 1) code
    DeptCode,
    /// Municipality (administrative level 2) code
    MuniCode,
    /// Sex of the deceased
    Sex,
    /// Month of death (1-12)
    Month,
    /// Coded age group (0-29)
    AgeGroupCode,
    /// Cause-of-death code (ICD-10)
    CauseCode,
    /// Department display name
    DeptName,
    /// Municipality display name
    MuniName,
    /// Cause-of-death display name
    CauseName,
}

impl LogicalField {
    /// Stable identifier used in diagnostics
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DeptCode => "DEPT_CODE",
            Self::MuniCode => "MUNI_CODE",
            Self::Sex => "SEX",
            Self::Month => "MONTH",
            Self::AgeGroupCode => "AGE_GROUP_CODE",
            Self::CauseCode => "CAUSE_CODE",
            Self::DeptName => "DEPT_NAME",
            Self::MuniName => "MUNI_NAME",
            Self::CauseName => "CAUSE_NAME",
        }
    }
}

impl fmt::Display for LogicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered list of acceptable literal column names for one logical field
///
/// Order encodes priority: a more specific name must be listed before a
/// generic fallback, and the first candidate present in the table wins.
#[derive(Debug, Clone, Copy)]
pub struct FieldCandidates {
    /// The logical field being resolved
    pub field: LogicalField,
    /// Literal column names, most specific first
    pub candidates: &'static [&'static str],
}

impl FieldCandidates {
    /// Declare a candidate list for a logical field
    #[must_use]
    pub const fn new(field: LogicalField, candidates: &'static [&'static str]) -> Self {
        Self { field, candidates }
    }
}

/// A logical field's resolved position in one raw table
#[derive(Debug, Clone)]
pub struct ResolvedColumn {
    /// The literal column label that matched
    pub name: String,
    /// Column index in the table
    pub index: usize,
}

/// Resolve one logical field against a table's column set
///
/// Matching is case-sensitive and exact; table labels were already trimmed
/// at load time. Returns the first present candidate, or `None` when no
/// candidate matches — the caller substitutes the field's sentinel default.
#[must_use]
pub fn resolve_column(table: &RawTable, candidates: &FieldCandidates) -> Option<ResolvedColumn> {
    for &name in candidates.candidates {
        if let Some(index) = table.column_index(name) {
            return Some(ResolvedColumn {
                name: name.to_string(),
                index,
            });
        }
    }
    None
}

/// Mapping from logical fields to the columns resolved in one raw table
///
/// Built once per source by an explicit resolution pass; at most one
/// resolved column per logical field, deterministic given the table's
/// column set and the candidate lists.
#[derive(Debug, Default)]
pub struct FieldMap {
    entries: FxHashMap<LogicalField, ResolvedColumn>,
}

impl FieldMap {
    /// Resolve all given candidate lists against a table
    #[must_use]
    pub fn resolve(table: &RawTable, candidate_lists: &[FieldCandidates]) -> Self {
        let mut entries = FxHashMap::default();
        for candidates in candidate_lists {
            if let Some(column) = resolve_column(table, candidates) {
                entries.insert(candidates.field, column);
            }
        }
        Self { entries }
    }

    /// The resolved column for a logical field, if any
    #[must_use]
    pub fn get(&self, field: LogicalField) -> Option<&ResolvedColumn> {
        self.entries.get(&field)
    }

    /// The resolved column index for a logical field, if any
    #[must_use]
    pub fn index(&self, field: LogicalField) -> Option<usize> {
        self.entries.get(&field).map(|c| c.index)
    }

    /// Whether a logical field resolved to a column
    #[must_use]
    pub fn is_resolved(&self, field: LogicalField) -> bool {
        self.entries.contains_key(&field)
    }

    /// Log the resolution outcome for a source, one line per logical field
    pub fn log_summary(&self, source: &str, candidate_lists: &[FieldCandidates]) {
        for candidates in candidate_lists {
            match self.get(candidates.field) {
                Some(column) => {
                    log::info!("{source}: {} -> column '{}'", candidates.field, column.name);
                }
                None => {
                    log::info!("{source}: {} unresolved", candidates.field);
                }
            }
        }
    }
}
