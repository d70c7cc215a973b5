use std::fs;

use eevv_reader::{DepartmentFilter, LoaderConfig, PipelineContext};

use crate::utils::sample_data_dir;

#[test]
fn mixed_width_codes_join_against_the_division_reference() {
    let dir = sample_data_dir();
    let context = PipelineContext::load(dir.path(), &LoaderConfig::default());
    let records = context.records();
    assert_eq!(records.len(), 3);

    // "5" and "05" both normalize to "05" and resolve to ANTIOQUIA
    assert_eq!(records[0].department, "ANTIOQUIA");
    assert_eq!(records[0].municipality, "MEDELLIN");
    assert_eq!(records[1].department, "ANTIOQUIA");

    // "08" has no Divipola entry
    assert_eq!(records[2].department, "Departamento desconocido");
    assert_eq!(records[2].municipality, "Municipio desconocido");

    let set = context.aggregate(&DepartmentFilter::All);
    assert_eq!(set.by_department.len(), 2);
    assert_eq!(set.by_department[0].label, "ANTIOQUIA");
    assert_eq!(set.by_department[0].deaths, 2);
    assert_eq!(set.by_department[1].label, "Departamento desconocido");
    assert_eq!(set.by_department[1].deaths, 1);
}

#[test]
fn cause_names_resolve_with_documented_fallbacks() {
    let dir = sample_data_dir();
    let context = PipelineContext::load(dir.path(), &LoaderConfig::default());
    let records = context.records();

    // matched exactly one reference row
    assert_eq!(records[0].cause_name, "Agresion con disparo de arma de fuego");
    // X91 has no reference row: the raw code doubles as the name
    assert_eq!(records[1].cause_name, "X91");
    assert_eq!(records[2].cause_name, "Hipertension esencial");
}

#[test]
fn age_codes_label_across_encodings() {
    let dir = sample_data_dir();
    let context = PipelineContext::load(dir.path(), &LoaderConfig::default());
    let records = context.records();

    assert_eq!(records[0].age_label, "Primera infancia 1-4");
    assert_eq!(records[1].age_label, "Juventud 20-29");
    assert_eq!(records[2].age_label, "Edad desconocida / Sin información");
}

#[test]
fn missing_division_reference_degrades_to_sentinels() {
    let dir = sample_data_dir();
    fs::remove_file(dir.path().join("Divipola.csv")).unwrap();

    let context = PipelineContext::load(dir.path(), &LoaderConfig::default());
    assert_eq!(context.records().len(), 3);
    for record in context.records() {
        assert_eq!(record.department, "Departamento desconocido");
        assert_eq!(record.municipality, "Municipio desconocido");
    }
}

#[test]
fn missing_cause_reference_keeps_codes_as_names() {
    let dir = sample_data_dir();
    fs::remove_file(dir.path().join("CodigosDeMuerte.csv")).unwrap();

    let context = PipelineContext::load(dir.path(), &LoaderConfig::default());
    let names: Vec<&str> = context
        .records()
        .iter()
        .map(|r| r.cause_name.as_str())
        .collect();
    assert_eq!(names, vec!["X95", "X91", "I10"]);
}

#[test]
fn empty_data_directory_still_produces_a_context() {
    let dir = tempfile::tempdir().unwrap();
    let context = PipelineContext::load(dir.path(), &LoaderConfig::default());
    assert!(context.records().is_empty());

    let set = context.aggregate(&DepartmentFilter::All);
    assert_eq!(set.by_department[0].label, "Sin datos");
    assert_eq!(set.summary.total_records, 0);
}
