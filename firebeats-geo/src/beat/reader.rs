use std::path::Path;

use geo::{Geometry, MultiPolygon};
use serde::{Deserialize, Serialize};
use shapefile::dbase::{FieldValue, Record};

use super::{
    raw_beat::{format_number, property_as_string},
    BeatColumns, BeatError, RawBeatFeature,
};

/// file format of the beat boundary dataset
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BeatSourceFormat {
    Shapefile,
    GeoJson,
}

impl BeatSourceFormat {
    /// guesses the format from the file extension, defaulting to shapefile
    pub fn from_path(path: &Path) -> BeatSourceFormat {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("geojson") || ext.eq_ignore_ascii_case("json") => {
                BeatSourceFormat::GeoJson
            }
            _ => BeatSourceFormat::Shapefile,
        }
    }
}

/// reads beat boundaries in the given format, or the format implied by the
/// file extension.
pub fn read_beats(
    path: &Path,
    format: Option<BeatSourceFormat>,
    columns: &BeatColumns,
) -> Result<Vec<RawBeatFeature>, BeatError> {
    match format.unwrap_or_else(|| BeatSourceFormat::from_path(path)) {
        BeatSourceFormat::Shapefile => read_shapefile(path, columns),
        BeatSourceFormat::GeoJson => read_geojson(path, columns),
    }
}

/// reads polygon features and their attribute columns from an ESRI shapefile
/// (the `.shp` path, with its `.dbf` alongside). coordinates must already be
/// lon/lat.
pub fn read_shapefile(path: &Path, columns: &BeatColumns) -> Result<Vec<RawBeatFeature>, BeatError> {
    let mut reader = shapefile::Reader::from_path(path).map_err(|e| BeatError::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let mut features = vec![];
    for (n, result) in reader.iter_shapes_and_records().enumerate() {
        let (shape, record) = result.map_err(|e| BeatError::Parse {
            path: path.to_path_buf(),
            message: format!("feature {n}: {e}"),
        })?;
        let geometry = Geometry::<f64>::try_from(shape).map_err(|e| {
            BeatError::UnsupportedGeometry {
                path: path.to_path_buf(),
                feature: n,
                message: format!("{e:?}"),
            }
        })?;
        let geometry = as_multipolygon(geometry).map_err(|message| {
            BeatError::UnsupportedGeometry {
                path: path.to_path_buf(),
                feature: n,
                message,
            }
        })?;
        let text = |col: &str| -> Result<String, BeatError> {
            record
                .get(col)
                .and_then(field_as_string)
                .ok_or_else(|| BeatError::MissingColumn {
                    path: path.to_path_buf(),
                    col: col.to_string(),
                    feature: n,
                })
        };
        features.push(RawBeatFeature {
            label: text(&columns.name)?,
            category: optional_text(&record, &columns.category),
            beat_type: optional_text(&record, &columns.beat_type),
            geometry,
        });
    }
    log::info!("read {} beat features from {}", features.len(), path.display());
    Ok(features)
}

/// reads polygon features and their properties from a GeoJSON FeatureCollection.
pub fn read_geojson(path: &Path, columns: &BeatColumns) -> Result<Vec<RawBeatFeature>, BeatError> {
    let geojson_str = std::fs::read_to_string(path).map_err(|e| BeatError::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let geojson_value = geojson_str
        .parse::<geojson::GeoJson>()
        .map_err(|e| BeatError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    let feature_collection = match geojson_value {
        geojson::GeoJson::FeatureCollection(fc) => Ok(fc),
        _ => Err(BeatError::Parse {
            path: path.to_path_buf(),
            message: String::from("geojson in file must be a FeatureCollection"),
        }),
    }?;

    let mut features = Vec::with_capacity(feature_collection.features.len());
    for (n, feature) in feature_collection.features.into_iter().enumerate() {
        let property = |col: &str| feature.property(col).and_then(property_as_string);
        let label = property(&columns.name).ok_or_else(|| BeatError::MissingColumn {
            path: path.to_path_buf(),
            col: columns.name.clone(),
            feature: n,
        })?;
        let category = property(&columns.category).unwrap_or_default();
        let beat_type = property(&columns.beat_type).unwrap_or_default();
        let geom_json = feature
            .geometry
            .clone()
            .ok_or_else(|| BeatError::UnsupportedGeometry {
                path: path.to_path_buf(),
                feature: n,
                message: String::from("feature has no geometry"),
            })?;
        let geometry: Geometry<f64> =
            geom_json
                .try_into()
                .map_err(|e: geojson::Error| BeatError::UnsupportedGeometry {
                    path: path.to_path_buf(),
                    feature: n,
                    message: format!("failure decoding GeoJson geometry for beat {label}: {e}"),
                })?;
        let geometry = as_multipolygon(geometry).map_err(|message| {
            BeatError::UnsupportedGeometry {
                path: path.to_path_buf(),
                feature: n,
                message,
            }
        })?;
        features.push(RawBeatFeature {
            label,
            category,
            beat_type,
            geometry,
        });
    }
    log::info!("read {} beat features from {}", features.len(), path.display());
    Ok(features)
}

fn as_multipolygon(geometry: Geometry<f64>) -> Result<MultiPolygon<f64>, String> {
    match geometry {
        Geometry::Polygon(p) => Ok(MultiPolygon::new(vec![p])),
        Geometry::MultiPolygon(mp) => Ok(mp),
        Geometry::Rect(r) => Ok(MultiPolygon::new(vec![r.to_polygon()])),
        other => Err(format!(
            "expected Polygon or MultiPolygon, found {}",
            geometry_type(&other)
        )),
    }
}

fn geometry_type(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}

fn field_as_string(value: &FieldValue) -> Option<String> {
    match value {
        FieldValue::Character(Some(s)) => Some(s.trim().to_string()),
        FieldValue::Memo(s) => Some(s.trim().to_string()),
        FieldValue::Numeric(Some(n)) => Some(format_number(*n)),
        FieldValue::Integer(i) => Some(i.to_string()),
        _ => None,
    }
}

fn optional_text(record: &Record, col: &str) -> String {
    record
        .get(col)
        .and_then(field_as_string)
        .unwrap_or_default()
}
