use std::path::Path;

use geo::{Coord, MapCoordsInPlace};
use proj::Proj;

use super::{BeatError, RawBeatFeature};

/// coordinate reference system of every compiled output, lon/lat order
pub const TARGET_CRS: &str = "EPSG:4326";

/// the CRS the boundary coordinates are expressed in. a configured definition
/// wins over the `.prj` sidecar of the boundary file; neither means unknown.
///
/// # Arguments
///
/// * `boundary_file` - path of the beat boundary dataset
/// * `configured` - any definition PROJ accepts: `EPSG:2274`, a PROJ string or WKT
pub fn source_crs(
    boundary_file: &Path,
    configured: Option<&str>,
) -> Result<Option<String>, BeatError> {
    if let Some(crs) = configured.map(str::trim).filter(|c| !c.is_empty()) {
        return Ok(Some(crs.to_string()));
    }
    let prj = boundary_file.with_extension("prj");
    if !prj.is_file() {
        return Ok(None);
    }
    let wkt = std::fs::read_to_string(&prj).map_err(|e| BeatError::Read {
        path: prj.clone(),
        message: e.to_string(),
    })?;
    let wkt = wkt.trim();
    if wkt.is_empty() {
        log::warn!("ignoring empty projection file {}", prj.display());
        return Ok(None);
    }
    log::debug!("using projection of {}", prj.display());
    Ok(Some(wkt.to_string()))
}

/// transforms every beat geometry from `source_crs` into lon/lat.
pub fn reproject_to_wgs84(raw: &mut [RawBeatFeature], source_crs: &str) -> Result<(), BeatError> {
    let reproject_err = |message: String| BeatError::Reproject {
        crs: source_crs.to_string(),
        message,
    };
    let proj = Proj::new_known_crs(source_crs, TARGET_CRS, None)
        .map_err(|e| reproject_err(e.to_string()))?;
    for feature in raw.iter_mut() {
        feature
            .geometry
            .try_map_coords_in_place(|c| {
                proj.convert((c.x, c.y))
                    .map(|(x, y)| Coord { x, y })
                    .map_err(|e| format!("beat {}: {e}", feature.label))
            })
            .map_err(reproject_err)?;
    }
    log::info!("reprojected {} beat features to {TARGET_CRS}", raw.len());
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{reproject_to_wgs84, source_crs};
    use crate::beat::{BeatError, RawBeatFeature};
    use geo::{polygon, CoordsIter, MultiPolygon};
    use std::{fs, path::Path};

    /// one degree of longitude at the equator in web mercator meters
    const MERCATOR_DEGREE: f64 = 111_319.490_793_273_57;

    #[test]
    fn test_configured_crs_wins_over_prj() {
        let dir = tempfile::tempdir().expect("test invariant failed: tempdir");
        let shp = dir.path().join("beats.shp");
        fs::write(dir.path().join("beats.prj"), "PROJCS[\"NAD83 / Tennessee\"]\n")
            .expect("test invariant failed: write");
        let found = source_crs(&shp, None).expect("should read prj");
        assert_eq!(found.as_deref(), Some("PROJCS[\"NAD83 / Tennessee\"]"));
        let found = source_crs(&shp, Some("EPSG:2274")).expect("should use configured");
        assert_eq!(found.as_deref(), Some("EPSG:2274"));
    }

    #[test]
    fn test_no_crs_is_unknown() {
        let dir = tempfile::tempdir().expect("test invariant failed: tempdir");
        let geojson = dir.path().join("beats.geojson");
        assert_eq!(source_crs(&geojson, None).expect("no error"), None);
        assert_eq!(source_crs(Path::new("beats.shp"), Some("  ")).expect("no error"), None);
    }

    #[test]
    fn test_web_mercator_to_lon_lat() {
        let mut raw = vec![RawBeatFeature {
            label: String::from("3"),
            category: String::new(),
            beat_type: String::new(),
            geometry: MultiPolygon::new(vec![polygon![
                (x: 0.0, y: 0.0),
                (x: MERCATOR_DEGREE, y: 0.0),
                (x: MERCATOR_DEGREE, y: MERCATOR_DEGREE),
                (x: 0.0, y: 0.0),
            ]]),
        }];
        reproject_to_wgs84(&mut raw, "EPSG:3857").expect("should reproject");
        let coords: Vec<_> = raw[0].geometry.coords_iter().collect();
        assert!((coords[1].x - 1.0).abs() < 1e-6);
        assert!(coords[1].y.abs() < 1e-6);
        assert!(coords[2].y > 0.99 && coords[2].y < 1.0);
    }

    #[test]
    fn test_unknown_crs_is_an_error() {
        let mut raw = vec![];
        assert!(matches!(
            reproject_to_wgs84(&mut raw, "EPSG:not-a-code"),
            Err(BeatError::Reproject { .. })
        ));
    }
}
