use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use firebeats_core::zone::ZoneId;
use geo::Polygon;
use geojson::{Feature, FeatureCollection, JsonObject};
use serde_json::Value;

use super::{BeatError, BeatFeature};

/// property names expected by the dispatch front end
pub const NAME_PROPERTY: &str = "NAME";
pub const ZONE_ID_PROPERTY: &str = "ZONE_ID";
pub const ZONE_PROPERTY: &str = "ZONE";
pub const TYPE_PROPERTY: &str = "TYPE";

/// one Polygon feature per beat part with `NAME`, `ZONE_ID` (-1 when
/// unmapped), `ZONE` and `TYPE` properties.
pub fn beats_to_geojson(beats: &[BeatFeature]) -> FeatureCollection {
    let features = beats
        .iter()
        .map(|beat| {
            let mut properties = JsonObject::new();
            properties.insert(
                NAME_PROPERTY.to_string(),
                Value::from(beat.zone_code.canonical()),
            );
            properties.insert(
                ZONE_ID_PROPERTY.to_string(),
                Value::from(ZoneId::or_unmapped(beat.zone_id.as_ref())),
            );
            properties.insert(ZONE_PROPERTY.to_string(), Value::from(beat.category.clone()));
            properties.insert(TYPE_PROPERTY.to_string(), Value::from(beat.beat_type.clone()));
            polygon_feature(&beat.polygon, Some(properties))
        })
        .collect();
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

/// a collection holding exactly the one envelope polygon
pub fn envelope_to_geojson(envelope: &Polygon<f64>) -> FeatureCollection {
    FeatureCollection {
        bbox: None,
        features: vec![polygon_feature(envelope, Some(JsonObject::new()))],
        foreign_members: None,
    }
}

pub fn write_feature_collection(
    path: &Path,
    collection: &FeatureCollection,
) -> Result<(), BeatError> {
    let write_err = |message: String| BeatError::Write {
        path: path.to_path_buf(),
        message,
    };
    let file = File::create(path).map_err(|e| write_err(e.to_string()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, collection).map_err(|e| write_err(e.to_string()))?;
    writer.flush().map_err(|e| write_err(e.to_string()))
}

fn polygon_feature(polygon: &Polygon<f64>, properties: Option<JsonObject>) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(geojson::Geometry::new(geojson::Value::from(polygon))),
        id: None,
        properties,
        foreign_members: None,
    }
}

#[cfg(test)]
mod test {
    use super::{beats_to_geojson, envelope_to_geojson, write_feature_collection};
    use crate::beat::BeatFeature;
    use firebeats_core::zone::{ZoneCode, ZoneId};
    use geo::polygon;
    use serde_json::json;

    fn beat(label: &str, zone_id: Option<ZoneId>) -> BeatFeature {
        BeatFeature {
            zone_code: ZoneCode::parse(label).expect("test invariant failed: bad label"),
            zone_id,
            category: String::from("CENTRAL"),
            beat_type: String::from("FIRE"),
            polygon: polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0)],
        }
    }

    #[test]
    fn test_beat_properties() {
        let fc = beats_to_geojson(&[beat("7B", Some(ZoneId(4))), beat("9", None)]);
        assert_eq!(fc.features.len(), 2);
        let first = &fc.features[0];
        assert_eq!(first.property("NAME"), Some(&json!("07B")));
        assert_eq!(first.property("ZONE_ID"), Some(&json!(4)));
        assert_eq!(first.property("ZONE"), Some(&json!("CENTRAL")));
        assert_eq!(first.property("TYPE"), Some(&json!("FIRE")));
        assert_eq!(fc.features[1].property("ZONE_ID"), Some(&json!(-1)));
        let geometry = first.geometry.as_ref().expect("has geometry");
        assert!(matches!(geometry.value, geojson::Value::Polygon(_)));
    }

    #[test]
    fn test_envelope_is_single_feature_and_written() {
        let fc = envelope_to_geojson(&polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0)]);
        assert_eq!(fc.features.len(), 1);

        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("bounds.geojson");
        write_feature_collection(&path, &fc).expect("should write");
        let text = std::fs::read_to_string(&path).expect("should read");
        let parsed = text
            .parse::<geojson::GeoJson>()
            .expect("should parse");
        match parsed {
            geojson::GeoJson::FeatureCollection(read_back) => {
                assert_eq!(read_back.features.len(), 1)
            }
            _ => panic!("expected a feature collection"),
        }
    }
}
