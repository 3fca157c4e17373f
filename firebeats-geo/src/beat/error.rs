use std::path::PathBuf;

use firebeats_core::zone::ZoneError;

#[derive(thiserror::Error, Debug)]
pub enum BeatError {
    #[error("failure reading beat boundaries from '{path}': {message}")]
    Read { path: PathBuf, message: String },
    #[error("failed to parse '{path}' due to: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("feature {feature} in '{path}' is missing column {col}")]
    MissingColumn {
        path: PathBuf,
        col: String,
        feature: usize,
    },
    #[error("feature {feature} in '{path}' has unsupported geometry: {message}")]
    UnsupportedGeometry {
        path: PathBuf,
        feature: usize,
        message: String,
    },
    #[error("beat {label} has coordinate ({x}, {y}) outside of lon/lat range and no source CRS is known, provide a .prj file or configure one")]
    NotGeodetic { label: String, x: f64, y: f64 },
    #[error("failure reprojecting beats from '{crs}': {message}")]
    Reproject { crs: String, message: String },
    #[error(transparent)]
    Zone(#[from] ZoneError),
    #[error("no beat geometry to enclose")]
    Empty,
    #[error("failure writing '{path}': {message}")]
    Write { path: PathBuf, message: String },
}
