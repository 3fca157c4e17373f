use std::path::Path;

use firebeats_core::{
    matrix::{build_run_order, codec, RunOrderMatrix},
    run_card::DirectoryRunCardSource,
    station::StationResolver,
    util::fs::{create_dirs, output_path},
};
use firebeats_geo::beat::{
    beats_to_geojson, bounding_envelope, compile_beats, envelope_to_geojson, read_beats,
    reproject_to_wgs84, source_crs, write_feature_collection, zone_labels,
};

use super::{BeatsConfig, FirebeatsAppError};

/// compiles the run-order matrix, zone table, beat geometry and bounds from a
/// beat boundary dataset and a directory of run cards.
///
/// # Arguments
///
/// * `config` - the `[beats]` configuration
/// * `output_directory` - where outputs are written, the working directory if absent
///
/// # Returns
///
/// the run-order matrix that was written
pub fn run_beats(
    config: &BeatsConfig,
    output_directory: Option<&Path>,
) -> Result<RunOrderMatrix, FirebeatsAppError> {
    if let Some(dir) = output_directory {
        create_dirs(dir)?;
    }

    let boundary_file = Path::new(&config.boundary_file);
    let mut raw = read_beats(boundary_file, config.format, &config.columns)?;
    if let Some(crs) = source_crs(boundary_file, config.source_crs.as_deref())? {
        reproject_to_wgs84(&mut raw, &crs)?;
    }
    let zones = zone_labels(&raw)?;

    let source = DirectoryRunCardSource::new(
        Path::new(&config.run_card_directory),
        config.run_card_prefix.as_deref(),
    );
    let resolver = StationResolver::new(config.facility_rules.clone());
    let matrix = build_run_order(&zones, &source, &resolver)?;

    let outputs = &config.outputs;
    let matrix_path = output_path(output_directory, &outputs.matrix_file);
    codec::write_i32_matrix_file(&matrix_path, &matrix.to_cells(config.layout))?;
    log::info!(
        "wrote {} x {} run-order matrix ({:?}) to {}",
        matrix.height(),
        matrix.width(),
        config.layout,
        matrix_path.display()
    );

    let zones_path = output_path(output_directory, &outputs.zone_table_file);
    matrix.zone_table().write_csv(&zones_path)?;

    if let Some(filename) = &outputs.run_order_csv_file {
        let csv_path = output_path(output_directory, filename);
        matrix.write_run_order_csv(&csv_path)?;
    }

    if let Some(filename) = &outputs.label_matrix_file {
        let labels_path = output_path(output_directory, filename);
        codec::write_string_matrix_file(&labels_path, &matrix.to_label_matrix())?;
        log::debug!("wrote label matrix to {}", labels_path.display());
    }

    let beats = compile_beats(&raw, matrix.zone_table())?;
    let beats_path = output_path(output_directory, &outputs.beats_file);
    write_feature_collection(&beats_path, &beats_to_geojson(&beats))?;
    log::info!("wrote {} beat polygons to {}", beats.len(), beats_path.display());

    let envelope = bounding_envelope(&beats)?;
    let bounds_path = output_path(output_directory, &outputs.bounds_file);
    write_feature_collection(&bounds_path, &envelope_to_geojson(&envelope))?;

    Ok(matrix)
}
