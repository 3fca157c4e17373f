use firebeats_core::{matrix::MatrixLayout, station::FacilityRules};
use firebeats_geo::beat::{BeatColumns, BeatSourceFormat};
use serde::{Deserialize, Serialize};

/// the `[beats]` table of a configuration file.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BeatsConfig {
    /// beat boundary dataset, a `.shp` file or a GeoJSON FeatureCollection
    pub boundary_file: String,
    /// overrides the format implied by the boundary file extension
    #[serde(default)]
    pub format: Option<BeatSourceFormat>,
    #[serde(default)]
    pub columns: BeatColumns,
    /// CRS of the boundary coordinates, e.g. `EPSG:2274`. falls back to the
    /// `.prj` beside the boundary file, otherwise coordinates must be lon/lat
    #[serde(default)]
    pub source_crs: Option<String>,
    /// directory holding one run card file per zone
    pub run_card_directory: String,
    #[serde(default)]
    pub run_card_prefix: Option<String>,
    #[serde(default)]
    pub facility_rules: FacilityRules,
    #[serde(default)]
    pub layout: MatrixLayout,
    #[serde(default)]
    pub outputs: BeatsOutputs,
}

/// output filenames, relative to the output directory.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct BeatsOutputs {
    pub matrix_file: String,
    pub zone_table_file: String,
    pub beats_file: String,
    pub bounds_file: String,
    /// readable `Zone,Run 1..Run N` table of facility names, skipped when unset
    pub run_order_csv_file: Option<String>,
    /// when set, also write the facility-name matrix used for debugging
    pub label_matrix_file: Option<String>,
}

impl Default for BeatsOutputs {
    fn default() -> Self {
        Self {
            matrix_file: String::from("beats.bin"),
            zone_table_file: String::from("zones.csv"),
            beats_file: String::from("beats_shpfile.geojson"),
            bounds_file: String::from("bounds.geojson"),
            run_order_csv_file: Some(String::from("beats.csv")),
            label_matrix_file: None,
        }
    }
}
