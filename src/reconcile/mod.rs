//! Reconciliation of the mortality table against the reference tables.
//!
//! A left join on normalized keys: every mortality row yields exactly one
//! [`ReconciledRecord`], matched or not. A reference table that did not
//! resolve completely simply contributes nothing, and the affected display
//! fields take their sentinel values. This stage never fails; the most
//! degenerate inputs produce an empty record set.

mod keys;

pub use keys::normalize_key;

use rustc_hash::FxHashMap;

use crate::categorize::label_age;
use crate::models::ReconciledRecord;
use crate::models::sentinels;
use crate::source::{CauseColumns, DivisionColumns, MortalityColumns};
use crate::table::RawTable;

/// Render one cell through an optionally-resolved column
fn cell(table: &RawTable, col: Option<usize>, row: usize) -> Option<String> {
    col.and_then(|c| table.value(c, row))
}

/// Index of the division reference: (dept key, muni key) -> display names
///
/// Built only when all four division fields resolved. Duplicate keys are
/// resolved last-row-wins: rows are inserted in source order and a later
/// row overwrites an earlier one. A matched row with a null name cell still
/// yields the unknown-division sentinel.
fn division_index(
    table: &RawTable,
    cols: &DivisionColumns,
) -> Option<FxHashMap<(String, String), (String, String)>> {
    if !cols.is_complete() {
        return None;
    }
    let mut index = FxHashMap::default();
    for row in 0..table.num_rows() {
        let dept_key = cell(table, cols.dept_code, row).map_or_else(String::new, |v| normalize_key(&v));
        let muni_key = cell(table, cols.muni_code, row).map_or_else(String::new, |v| normalize_key(&v));
        let dept_name = cell(table, cols.dept_name, row)
            .map_or_else(|| sentinels::UNKNOWN_DEPARTMENT.to_string(), |v| v.trim().to_string());
        let muni_name = cell(table, cols.muni_name, row)
            .map_or_else(|| sentinels::UNKNOWN_MUNICIPALITY.to_string(), |v| v.trim().to_string());
        index.insert((dept_key, muni_key), (dept_name, muni_name));
    }
    Some(index)
}

/// Index of the cause reference: trimmed code -> display name
///
/// Built only when both cause fields resolved; last row wins on duplicates,
/// same as the division index.
fn cause_index(table: &RawTable, cols: &CauseColumns) -> Option<FxHashMap<String, String>> {
    if !cols.is_complete() {
        return None;
    }
    let mut index = FxHashMap::default();
    for row in 0..table.num_rows() {
        let Some(code) = cell(table, cols.code, row) else {
            continue;
        };
        let code = code.trim().to_string();
        if code.is_empty() {
            continue;
        }
        let name = cell(table, cols.name, row)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| code.clone());
        index.insert(code, name);
    }
    Some(index)
}

/// Pick the display name of a cause: reference name, then the raw code,
/// then the unclassified sentinel for codeless records
fn resolve_cause_name(index: Option<&FxHashMap<String, String>>, code: &str) -> String {
    if let Some(index) = index {
        if let Some(name) = index.get(code) {
            return name.clone();
        }
    }
    if code.is_empty() {
        sentinels::UNCLASSIFIED_CAUSE.to_string()
    } else {
        code.to_string()
    }
}

/// Month as a small integer, `0` for anything non-numeric
fn resolve_month(raw: Option<String>) -> i64 {
    raw.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .map_or(0, |v| v.trunc() as i64)
}

/// Join the mortality table against the reference tables
///
/// Preserves the full mortality row count. Unmatched rows, and all rows when
/// a reference table failed to resolve, get sentinel display values; this is
/// expected behavior for incomplete input, not an error.
#[must_use]
pub fn reconcile(
    mortality: &RawTable,
    divisions: &RawTable,
    causes: &RawTable,
    mortality_cols: &MortalityColumns,
    division_cols: &DivisionColumns,
    cause_cols: &CauseColumns,
) -> Vec<ReconciledRecord> {
    let divisions_by_key = division_index(divisions, division_cols);
    let causes_by_code = cause_index(causes, cause_cols);

    if divisions_by_key.is_none() {
        log::warn!("division reference unavailable; all records get unknown-division labels");
    }
    if causes_by_code.is_none() {
        log::warn!("cause reference unavailable; cause codes double as display names");
    }

    let mut records = Vec::with_capacity(mortality.num_rows());
    for row in 0..mortality.num_rows() {
        let dept_key =
            cell(mortality, mortality_cols.dept_code, row).map_or_else(String::new, |v| normalize_key(&v));
        let muni_key =
            cell(mortality, mortality_cols.muni_code, row).map_or_else(String::new, |v| normalize_key(&v));

        let (department, municipality) = divisions_by_key
            .as_ref()
            .and_then(|index| index.get(&(dept_key.clone(), muni_key.clone())).cloned())
            .unwrap_or_else(|| {
                (
                    sentinels::UNKNOWN_DEPARTMENT.to_string(),
                    sentinels::UNKNOWN_MUNICIPALITY.to_string(),
                )
            });

        let sex = cell(mortality, mortality_cols.sex, row)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| sentinels::SEX_UNAVAILABLE.to_string());

        let month = resolve_month(cell(mortality, mortality_cols.month, row));
        let age_code = cell(mortality, mortality_cols.age_group, row);
        let cause_code = cell(mortality, mortality_cols.cause_code, row)
            .map(|v| v.trim().to_string())
            .unwrap_or_default();

        let cause_name = resolve_cause_name(causes_by_code.as_ref(), &cause_code);
        let age_label = label_age(age_code.as_deref());

        records.push(ReconciledRecord {
            dept_key,
            muni_key,
            sex,
            month,
            age_code,
            cause_code,
            department,
            municipality,
            cause_name,
            age_label,
        });
    }

    log::info!("reconciled {} mortality records", records.len());
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{ArrayRef, Int64Array, StringArray};
    use arrow::datatypes::{DataType, Field, Schema};
    use arrow::record_batch::RecordBatch;
    use std::sync::Arc;

    fn string_table(columns: &[(&str, Vec<Option<&str>>)]) -> RawTable {
        let fields: Vec<Field> = columns
            .iter()
            .map(|(name, _)| Field::new(*name, DataType::Utf8, true))
            .collect();
        let arrays: Vec<ArrayRef> = columns
            .iter()
            .map(|(_, values)| Arc::new(StringArray::from(values.clone())) as ArrayRef)
            .collect();
        let batch = RecordBatch::try_new(Arc::new(Schema::new(fields)), arrays).unwrap();
        RawTable::from_batch(batch, true).unwrap()
    }

    fn divipola() -> (RawTable, DivisionColumns) {
        let table = string_table(&[
            ("COD_DEPARTAMENTO", vec![Some("05"), Some("11")]),
            ("COD_MUNICIPIO", vec![Some("01"), Some("01")]),
            ("DEPARTAMENTO", vec![Some("ANTIOQUIA"), Some("BOGOTA D.C.")]),
            ("MUNICIPIO", vec![Some("MEDELLIN"), Some("BOGOTA")]),
        ]);
        let cols = DivisionColumns::resolve(&table);
        (table, cols)
    }

    fn cause_table() -> (RawTable, CauseColumns) {
        let table = string_table(&[
            ("CODIGO", vec![Some("I10"), Some("X95")]),
            ("NOMBRE", vec![Some("Hipertension"), Some("Agresion con arma de fuego")]),
        ]);
        let cols = CauseColumns::resolve(&table);
        (table, cols)
    }

    #[test]
    fn left_join_preserves_row_count_and_substitutes_sentinels() {
        let mortality = string_table(&[
            ("COD_DEPARTAMENTO", vec![Some("5"), Some("05"), Some("08")]),
            ("COD_MUNICIPIO", vec![Some("1"), Some("01"), Some("01")]),
            ("SEXO", vec![Some("Masculino"), None, Some("Femenino")]),
            ("MES", vec![Some("1"), Some("2"), Some("x")]),
            ("GRUPO_EDAD1", vec![Some("7.0"), Some("29"), None]),
            ("COD_MUERTE", vec![Some("I10"), Some("X95"), Some("")]),
        ]);
        let m_cols = MortalityColumns::resolve(&mortality);
        let (div, d_cols) = divipola();
        let (causes, c_cols) = cause_table();

        let records = reconcile(&mortality, &div, &causes, &m_cols, &d_cols, &c_cols);
        assert_eq!(records.len(), 3);

        // "5" and "05" normalize to the same key and both match ANTIOQUIA
        assert_eq!(records[0].department, "ANTIOQUIA");
        assert_eq!(records[0].municipality, "MEDELLIN");
        assert_eq!(records[1].department, "ANTIOQUIA");
        // "08" has no division entry
        assert_eq!(records[2].department, "Departamento desconocido");
        assert_eq!(records[2].municipality, "Municipio desconocido");

        assert_eq!(records[0].cause_name, "Hipertension");
        assert_eq!(records[1].cause_name, "Agresion con arma de fuego");
        assert_eq!(records[2].cause_name, "No clasificada");

        assert_eq!(records[0].age_label, "Primera infancia 1-4");
        assert_eq!(records[1].age_label, "Edad desconocida / Sin información");
        assert_eq!(records[2].age_label, "Sin info");

        assert_eq!(records[1].sex, "No disponible");
        assert_eq!(records[2].month, 0);
    }

    #[test]
    fn numeric_and_string_key_encodings_join_equally() {
        // mortality codes arrive as integers, the reference as padded strings
        let schema = Arc::new(Schema::new(vec![
            Field::new("COD_DEPARTAMENTO", DataType::Int64, true),
            Field::new("COD_MUNICIPIO", DataType::Int64, true),
        ]));
        let batch = RecordBatch::try_new(
            schema,
            vec![
                Arc::new(Int64Array::from(vec![Some(5)])) as ArrayRef,
                Arc::new(Int64Array::from(vec![Some(1)])) as ArrayRef,
            ],
        )
        .unwrap();
        let mortality = RawTable::from_batch(batch, true).unwrap();
        let m_cols = MortalityColumns::resolve(&mortality);
        let (div, d_cols) = divipola();

        let records = reconcile(
            &mortality,
            &div,
            &RawTable::empty(),
            &m_cols,
            &d_cols,
            &CauseColumns::default(),
        );
        assert_eq!(records[0].department, "ANTIOQUIA");
        assert_eq!(records[0].dept_key, "05");
    }

    #[test]
    fn duplicate_reference_keys_last_row_wins() {
        let div = string_table(&[
            ("COD_DEPARTAMENTO", vec![Some("05"), Some("05")]),
            ("COD_MUNICIPIO", vec![Some("01"), Some("01")]),
            ("DEPARTAMENTO", vec![Some("PRIMERA"), Some("SEGUNDA")]),
            ("MUNICIPIO", vec![Some("UNO"), Some("DOS")]),
        ]);
        let d_cols = DivisionColumns::resolve(&div);
        let mortality = string_table(&[
            ("COD_DEPARTAMENTO", vec![Some("05")]),
            ("COD_MUNICIPIO", vec![Some("01")]),
        ]);
        let m_cols = MortalityColumns::resolve(&mortality);

        let records = reconcile(
            &mortality,
            &div,
            &RawTable::empty(),
            &m_cols,
            &d_cols,
            &CauseColumns::default(),
        );
        assert_eq!(records[0].department, "SEGUNDA");
        assert_eq!(records[0].municipality, "DOS");
    }

    #[test]
    fn unresolved_references_fall_back_entirely() {
        let mortality = string_table(&[
            ("COD_DEPARTAMENTO", vec![Some("05")]),
            ("COD_MUNICIPIO", vec![Some("01")]),
            ("COD_MUERTE", vec![Some("A00")]),
        ]);
        let m_cols = MortalityColumns::resolve(&mortality);

        let records = reconcile(
            &mortality,
            &RawTable::empty(),
            &RawTable::empty(),
            &m_cols,
            &DivisionColumns::default(),
            &CauseColumns::default(),
        );
        assert_eq!(records[0].department, "Departamento desconocido");
        // no cause reference: the raw code doubles as the display name
        assert_eq!(records[0].cause_name, "A00");
    }

    #[test]
    fn empty_mortality_table_yields_no_records() {
        let records = reconcile(
            &RawTable::empty(),
            &RawTable::empty(),
            &RawTable::empty(),
            &MortalityColumns::default(),
            &DivisionColumns::default(),
            &CauseColumns::default(),
        );
        assert!(records.is_empty());
    }
}
