use std::collections::BTreeMap;

use firebeats_core::zone::{ZoneCode, ZoneTable};
use geo::{BooleanOps, CoordsIter, MultiPolygon};
use itertools::Itertools;

use super::{BeatError, BeatFeature, RawBeatFeature};

/// canonical, sorted, de-duplicated zones of a boundary dataset. an
/// unparseable label fails the whole compilation.
pub fn zone_labels(raw: &[RawBeatFeature]) -> Result<Vec<ZoneCode>, BeatError> {
    let codes = raw
        .iter()
        .map(|f| ZoneCode::parse(&f.label))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(codes.into_iter().sorted().dedup().collect())
}

/// merges raw boundary features into one polygon feature per connected part
/// of each beat.
///
/// features are grouped by their raw label and unioned. a union that is still
/// a MultiPolygon (a geographically disconnected beat) is split into its
/// polygons, each tagged with the same zone. zones missing from the zone table
/// are kept with no ZoneId so that geometry coverage stays complete.
pub fn compile_beats(
    raw: &[RawBeatFeature],
    zone_table: &ZoneTable,
) -> Result<Vec<BeatFeature>, BeatError> {
    let mut groups: BTreeMap<&str, Vec<&RawBeatFeature>> = BTreeMap::new();
    for feature in raw.iter() {
        groups.entry(feature.label.as_str()).or_default().push(feature);
    }

    let mut beats = vec![];
    for (label, group) in groups.into_iter() {
        let zone_code = ZoneCode::parse(label)?;
        check_geodetic(&zone_code, &group)?;
        let zone_id = zone_table.get(&zone_code).copied();
        if zone_id.is_none() {
            log::warn!("beat {zone_code} has no run-order row, writing it with an unmapped zone id");
        }
        let union = union_all(group.iter().map(|f| &f.geometry));
        if union.0.is_empty() {
            log::warn!("beat {zone_code} has empty geometry, no features written");
            continue;
        }
        let first = group[0];
        log::debug!(
            "beat {zone_code} merged from {} features into {} polygons",
            group.len(),
            union.0.len()
        );
        for polygon in union.0.into_iter() {
            beats.push(BeatFeature {
                zone_code: zone_code.clone(),
                zone_id,
                category: first.category.clone(),
                beat_type: first.beat_type.clone(),
                polygon,
            });
        }
    }
    Ok(beats)
}

fn union_all<'a, I>(geometries: I) -> MultiPolygon<f64>
where
    I: IntoIterator<Item = &'a MultiPolygon<f64>>,
{
    geometries
        .into_iter()
        .fold(MultiPolygon::new(vec![]), |acc, g| acc.union(g))
}

fn check_geodetic(zone_code: &ZoneCode, group: &[&RawBeatFeature]) -> Result<(), BeatError> {
    let out_of_range = group
        .iter()
        .flat_map(|f| f.geometry.coords_iter())
        .find(|c| !(-180.0..=180.0).contains(&c.x) || !(-90.0..=90.0).contains(&c.y));
    match out_of_range {
        Some(c) => Err(BeatError::NotGeodetic {
            label: zone_code.canonical(),
            x: c.x,
            y: c.y,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod test {
    use super::{compile_beats, zone_labels};
    use crate::beat::{BeatError, RawBeatFeature};
    use firebeats_core::zone::{ZoneCode, ZoneId, ZoneTable};
    use geo::{polygon, Area, BooleanOps, MultiPolygon, Polygon};

    fn square(x: f64, y: f64, size: f64) -> Polygon<f64> {
        polygon![
            (x: x, y: y),
            (x: x + size, y: y),
            (x: x + size, y: y + size),
            (x: x, y: y + size),
            (x: x, y: y),
        ]
    }

    /// boolean ops snap coordinates, so areas are compared relative to their size
    fn relative_diff(found: f64, expected: f64) -> f64 {
        (found - expected).abs() / expected.abs()
    }

    fn raw(label: &str, polygons: Vec<Polygon<f64>>) -> RawBeatFeature {
        RawBeatFeature {
            label: label.to_string(),
            category: String::from("EAST"),
            beat_type: String::from("BEAT"),
            geometry: MultiPolygon::new(polygons),
        }
    }

    fn table(labels: &[&str]) -> ZoneTable {
        let codes: Vec<ZoneCode> = labels
            .iter()
            .map(|l| ZoneCode::parse(l).expect("test invariant failed: bad label"))
            .collect();
        ZoneTable::from_sorted_codes(&codes)
    }

    #[test]
    fn test_adjacent_parts_merge_into_one_polygon() {
        let beats = vec![
            raw("3", vec![square(0.0, 0.0, 0.01)]),
            raw("3", vec![square(0.01, 0.0, 0.01)]),
        ];
        let compiled = compile_beats(&beats, &table(&["03"])).expect("should compile");
        assert_eq!(compiled.len(), 1);
        assert_eq!(compiled[0].zone_code.canonical(), "03");
        assert_eq!(compiled[0].zone_id, Some(ZoneId(0)));
        assert!(relative_diff(compiled[0].polygon.unsigned_area(), 0.0002) < 1e-6);
    }

    #[test]
    fn test_disconnected_beat_is_split_with_shared_zone_id() {
        let a = square(0.0, 0.0, 0.01);
        let b = square(0.05, 0.05, 0.01);
        let beats = vec![
            raw("07B", vec![a.clone()]),
            raw("07B", vec![b.clone()]),
            raw("1", vec![square(0.2, 0.2, 0.01)]),
        ];
        let compiled = compile_beats(&beats, &table(&["01", "07B"])).expect("should compile");
        let parts: Vec<_> = compiled
            .iter()
            .filter(|f| f.zone_code.canonical() == "07B")
            .collect();
        assert_eq!(parts.len(), 2);
        assert!(parts.iter().all(|f| f.zone_id == Some(ZoneId(1))));

        let rebuilt = parts
            .iter()
            .fold(MultiPolygon::new(vec![]), |acc, f| acc.union(&f.polygon));
        let original = MultiPolygon::new(vec![a, b]);
        let area = original.unsigned_area();
        assert!(relative_diff(rebuilt.unsigned_area(), area) < 1e-6);
        assert!(rebuilt.difference(&original).unsigned_area() / area < 1e-6);
    }

    #[test]
    fn test_unmapped_zone_is_kept() {
        let beats = vec![raw("12", vec![square(0.0, 0.0, 0.01)])];
        let compiled = compile_beats(&beats, &table(&["01"])).expect("should compile");
        assert_eq!(compiled.len(), 1);
        assert_eq!(compiled[0].zone_id, None);
        assert_eq!(compiled[0].category, "EAST");
    }

    #[test]
    fn test_bad_label_is_fatal() {
        let beats = vec![raw("North", vec![square(0.0, 0.0, 0.01)])];
        assert!(matches!(
            compile_beats(&beats, &table(&[])),
            Err(BeatError::Zone(_))
        ));
        assert!(zone_labels(&beats).is_err());
    }

    #[test]
    fn test_projected_coordinates_are_rejected() {
        let beats = vec![raw("1", vec![square(500000.0, 4000000.0, 10.0)])];
        assert!(matches!(
            compile_beats(&beats, &table(&["01"])),
            Err(BeatError::NotGeodetic { .. })
        ));
    }

    #[test]
    fn test_zone_labels_are_canonical_and_unique() {
        let beats = vec![
            raw("10", vec![]),
            raw("3", vec![]),
            raw("03", vec![]),
            raw("7B", vec![]),
        ];
        let labels: Vec<String> = zone_labels(&beats)
            .expect("should parse")
            .iter()
            .map(|c| c.canonical())
            .collect();
        assert_eq!(labels, vec!["03", "07B", "10"]);
    }
}
