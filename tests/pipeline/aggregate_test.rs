use eevv_reader::{DepartmentFilter, LoaderConfig, PipelineContext};

use crate::utils::{sample_data_dir, write_geometry};

#[test]
fn violent_municipalities_count_only_x9_codes() {
    let dir = sample_data_dir();
    let context = PipelineContext::load(dir.path(), &LoaderConfig::default());

    let set = context.aggregate(&DepartmentFilter::All);
    // X95 and X91 both land in MEDELLIN; the I10 row is excluded
    assert_eq!(set.top_5_violent_municipalities.len(), 1);
    assert_eq!(set.top_5_violent_municipalities[0].label, "MEDELLIN");
    assert_eq!(set.top_5_violent_municipalities[0].deaths, 2);
}

#[test]
fn department_filter_restricts_every_view() {
    let dir = sample_data_dir();
    let context = PipelineContext::load(dir.path(), &LoaderConfig::default());

    let set = context.aggregate(&DepartmentFilter::parse("ANTIOQUIA"));
    assert_eq!(set.by_department.len(), 1);
    assert_eq!(set.by_department[0].deaths, 2);
    assert_eq!(set.summary.total_records, 2);
    assert_eq!(set.summary.departments, 1);
    assert_eq!(set.summary.municipalities, 1);

    let months: Vec<i64> = set.by_month.iter().map(|r| r.month).collect();
    assert_eq!(months, vec![1, 2]);
}

#[test]
fn filter_matching_no_records_yields_placeholder_rows() {
    let dir = sample_data_dir();
    let context = PipelineContext::load(dir.path(), &LoaderConfig::default());

    let set = context.aggregate(&DepartmentFilter::parse("AMAZONAS"));
    assert_eq!(set.by_department[0].label, "Sin datos");
    assert_eq!(set.by_department[0].deaths, 0);
    assert_eq!(set.by_month[0].month, 0);
    assert_eq!(set.top_10_causes[0].name, "Sin datos");
    assert_eq!(set.summary.total_records, 0);
}

#[test]
fn repeated_aggregation_is_identical() {
    let dir = sample_data_dir();
    let context = PipelineContext::load(dir.path(), &LoaderConfig::default());

    let filter = DepartmentFilter::All;
    assert_eq!(context.aggregate(&filter), context.aggregate(&filter));
}

#[test]
fn geometry_note_tracks_the_boundary_file() {
    let dir = sample_data_dir();

    let without = PipelineContext::load(dir.path(), &LoaderConfig::default());
    let view = without.view(&DepartmentFilter::All);
    assert!(view.geometry_note.unwrap().contains("No se encontró"));

    write_geometry(&dir);
    let with = PipelineContext::load(dir.path(), &LoaderConfig::default());
    let view = with.view(&DepartmentFilter::All);
    assert!(view.geometry_note.is_none());
    assert!(with.geometry().is_available());
}

#[test]
fn department_options_feed_the_dropdown_sorted() {
    let dir = sample_data_dir();
    let context = PipelineContext::load(dir.path(), &LoaderConfig::default());
    assert_eq!(
        context.department_options(),
        vec!["ANTIOQUIA", "Departamento desconocido"]
    );
}
