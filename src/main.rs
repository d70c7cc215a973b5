use std::path::PathBuf;

use anyhow::Context;
use eevv_reader::{DepartmentFilter, LoaderConfig, PipelineContext};
use log::info;

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // eevv-reader [DATA_DIR] [DEPARTMENT|_ALL_] [--json]
    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let mut positional = args.iter().filter(|a| !a.starts_with("--"));
    let data_dir = positional
        .next()
        .map_or_else(|| PathBuf::from("data"), PathBuf::from);
    let filter = positional
        .next()
        .map_or(DepartmentFilter::All, |v| DepartmentFilter::parse(v));

    info!("loading sources from {}", data_dir.display());
    let context = PipelineContext::load(&data_dir, &LoaderConfig::default());
    let view = context.view(&filter);

    if json {
        let rendered =
            serde_json::to_string_pretty(&view).context("serializing dashboard view")?;
        println!("{rendered}");
        return Ok(());
    }

    let summary = view.aggregates.summary;
    println!("Registros totales: {}", summary.total_records);
    println!("Departamentos detectados: {}", summary.departments);
    println!("Municipios detectados: {}", summary.municipalities);

    if let Some(note) = &view.geometry_note {
        println!("\nMapa: {note}");
    }

    println!("\nMuertes por departamento:");
    for row in &view.aggregates.by_department {
        println!("  {:<40} {:>8}", row.label, row.deaths);
    }

    println!("\nMuertes por mes:");
    for row in &view.aggregates.by_month {
        println!("  mes {:>2} {:>8}", row.month, row.deaths);
    }

    println!("\n5 municipios más violentos (códigos X9x):");
    for row in &view.aggregates.top_5_violent_municipalities {
        println!("  {:<40} {:>8}", row.label, row.deaths);
    }

    println!("\n10 municipios con menor mortalidad:");
    for row in &view.aggregates.lowest_10_municipalities {
        println!("  {:<40} {:>8}", row.label, row.deaths);
    }

    println!("\nMuertes por departamento y sexo:");
    for row in &view.aggregates.by_department_and_sex {
        println!("  {:<40} {:<12} {:>8}", row.department, row.sex, row.deaths);
    }

    println!("\nDistribución por grupo de edad:");
    for row in &view.aggregates.by_age_label {
        println!("  {:<40} {:>8}", row.label, row.deaths);
    }

    println!("\nTop 10 causas de muerte:");
    for row in &view.aggregates.top_10_causes {
        println!("  {:<8} {:<48} {:>8}", row.code, row.name, row.deaths);
    }

    Ok(())
}
