use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use serde::Serialize;

use super::{StationTimeline, SynthesisError};

/// altitude written into every animated route coordinate
const ALTITUDE: i64 = 0;

/// GeoJSON-shaped document of animated routes. coordinates are
/// `[lon, lat, altitude, timestamp]` with integer altitude and timestamp,
/// which `geojson::Position` cannot express.
#[derive(Serialize, Debug)]
pub struct TimelineCollection {
    #[serde(rename = "type")]
    kind: &'static str,
    features: Vec<TimelineFeature>,
}

#[derive(Serialize, Debug)]
struct TimelineFeature {
    #[serde(rename = "type")]
    kind: &'static str,
    geometry: TimelineGeometry,
    properties: TimelineProperties,
}

#[derive(Serialize, Debug)]
struct TimelineGeometry {
    #[serde(rename = "type")]
    kind: &'static str,
    coordinates: Vec<(f64, f64, i64, i64)>,
}

#[derive(Serialize, Debug)]
struct TimelineProperties {
    station_id: String,
}

impl TimelineCollection {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

pub fn timelines_to_json(timelines: &[StationTimeline]) -> TimelineCollection {
    let features = timelines
        .iter()
        .map(|t| TimelineFeature {
            kind: "Feature",
            geometry: TimelineGeometry {
                kind: "LineString",
                coordinates: t
                    .vertices
                    .iter()
                    .map(|v| (v.lon, v.lat, ALTITUDE, v.timestamp))
                    .collect(),
            },
            properties: TimelineProperties {
                station_id: t.station_id.to_string(),
            },
        })
        .collect();
    TimelineCollection {
        kind: "FeatureCollection",
        features,
    }
}

pub fn write_timelines(path: &Path, timelines: &[StationTimeline]) -> Result<(), SynthesisError> {
    let write_err = |message: String| SynthesisError::Write {
        path: path.display().to_string(),
        message,
    };
    let collection = timelines_to_json(timelines);
    let file = File::create(path).map_err(|e| write_err(e.to_string()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, &collection).map_err(|e| write_err(e.to_string()))?;
    writer.flush().map_err(|e| write_err(e.to_string()))?;
    log::info!(
        "wrote {} animated routes to {}",
        collection.len(),
        path.display()
    );
    Ok(())
}
