use std::fs;

use eevv_reader::{LoaderConfig, load_table_or_empty, read_table};

use crate::utils::sample_data_dir;

#[test]
fn loads_mortality_fixture() {
    let dir = sample_data_dir();
    let table = read_table(&dir.path().join("NoFetal2019.csv"), &LoaderConfig::default())
        .expect("fixture should load");

    assert_eq!(table.num_rows(), 3);
    assert_eq!(table.num_columns(), 6);
    assert_eq!(table.column_index("COD_DEPARTAMENTO"), Some(0));

    // numeric inference renders codes without padding; normalization
    // downstream is what makes them comparable
    let dept = table.column_index("COD_DEPARTAMENTO").unwrap();
    assert_eq!(table.value(dept, 0), Some("5".to_string()));
}

#[test]
fn malformed_file_degrades_to_empty_table() {
    let dir = sample_data_dir();
    let path = dir.path().join("NoFetal2019.csv");
    fs::write(&path, b"\xff\xfe\x00 not a csv at all \xff").unwrap();

    let table = load_table_or_empty(&path, &LoaderConfig::default());
    assert!(table.is_empty());
}

#[test]
fn zero_byte_file_degrades_to_empty_table() {
    let dir = sample_data_dir();
    let path = dir.path().join("CodigosDeMuerte.csv");
    fs::write(&path, "").unwrap();

    let table = load_table_or_empty(&path, &LoaderConfig::default());
    assert!(table.is_empty());
}

#[test]
fn header_only_file_has_columns_but_no_rows() {
    let dir = sample_data_dir();
    let path = dir.path().join("CodigosDeMuerte.csv");
    fs::write(&path, "CODIGO,NOMBRE\n").unwrap();

    let table = load_table_or_empty(&path, &LoaderConfig::default());
    assert!(table.is_empty());
    assert_eq!(table.num_columns(), 2);
    assert_eq!(table.column_index("CODIGO"), Some(0));
}
