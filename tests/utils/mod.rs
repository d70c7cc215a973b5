use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// Write one fixture file into a test data directory
pub fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("writing fixture");
    path
}

/// A data directory with all three tabular sources present.
///
/// Department codes are deliberately mixed-width (`5` vs `05`) and the
/// age-group column mixes decimal and integer encodings, mirroring how the
/// real exports disagree with each other. Department `08` has no Divipola
/// entry and cause `X91` has no code-table entry, so the sentinel fallbacks
/// get exercised on realistic input.
#[must_use]
pub fn sample_data_dir() -> TempDir {
    let dir = TempDir::new().expect("creating temp data dir");

    write_fixture(
        &dir,
        "NoFetal2019.csv",
        "COD_DEPARTAMENTO,COD_MUNICIPIO,SEXO,MES,GRUPO_EDAD1,COD_MUERTE\n\
         5,1,Masculino,1,7.0,X95\n\
         05,01,Femenino,2,12,X91\n\
         08,01,Masculino,3,29,I10\n",
    );

    write_fixture(
        &dir,
        "Divipola.csv",
        "COD_DEPARTAMENTO,COD_MUNICIPIO,DEPARTAMENTO,MUNICIPIO\n\
         05,01,ANTIOQUIA,MEDELLIN\n\
         11,01,BOGOTA D.C.,BOGOTA\n",
    );

    write_fixture(
        &dir,
        "CodigosDeMuerte.csv",
        "CODIGO,NOMBRE\n\
         X95,Agresion con disparo de arma de fuego\n\
         I10,Hipertension esencial\n",
    );

    dir
}

/// A minimal usable boundary-geometry fixture
pub fn write_geometry(dir: &TempDir) -> PathBuf {
    write_fixture(
        dir,
        "colombia_departamentos.geojson",
        r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{"NOMBRE_DPT":"ANTIOQUIA"},"geometry":null},
            {"type":"Feature","properties":{"NOMBRE_DPT":"BOGOTA D.C."},"geometry":null}
        ]}"#,
    )
}
