mod beat_feature;
mod compiler;
mod envelope;
mod error;
mod output;
mod raw_beat;
mod reader;
mod reproject;

pub use beat_feature::BeatFeature;
pub use compiler::{compile_beats, zone_labels};
pub use envelope::bounding_envelope;
pub use error::BeatError;
pub use output::{beats_to_geojson, envelope_to_geojson, write_feature_collection};
pub use raw_beat::{BeatColumns, RawBeatFeature};
pub use reader::{read_beats, read_geojson, read_shapefile, BeatSourceFormat};
pub use reproject::{reproject_to_wgs84, source_crs, TARGET_CRS};
