use itertools::Itertools;

use crate::{run_card::RunCardSource, station::StationResolver, zone::ZoneCode};

use super::{MatrixError, RunOrderBuilder, RunOrderMatrix};

/// builds the run-order matrix for every known zone.
///
/// zones are visited in sorted order with duplicates removed. a zone whose
/// run card is missing or unreadable, or whose run card holds a facility that
/// cannot be resolved to a station, is logged and left out of the matrix and
/// the zone table; the batch continues with reduced coverage.
///
/// # Arguments
///
/// * `zones` - every zone known to this compilation, in any order
/// * `source` - run card lookup by zone
/// * `resolver` - facility filter and station resolver
///
/// # Returns
///
/// a rectangular matrix whose height equals the number of zones that produced a row
pub fn build_run_order<S>(
    zones: &[ZoneCode],
    source: &S,
    resolver: &StationResolver,
) -> Result<RunOrderMatrix, MatrixError>
where
    S: RunCardSource + ?Sized,
{
    let mut builder = RunOrderBuilder::new();
    let mut skipped = 0;
    let unique_zones = zones.iter().sorted().dedup().collect_vec();
    for zone in unique_zones.iter() {
        let run_card = match source.run_card(zone) {
            Ok(card) => card,
            Err(e) => {
                log::warn!("skipping zone {zone}: {e}");
                skipped += 1;
                continue;
            }
        };
        match resolver.resolve_facilities(&run_card) {
            Ok(resolved) => {
                log::debug!("zone {zone} resolved {} stations", resolved.len());
                builder.push_zone((*zone).clone(), resolved);
            }
            Err(e) => {
                log::warn!("omitting run order for zone {zone}: {e}");
                skipped += 1;
            }
        }
    }
    log::info!(
        "resolved run orders for {} of {} zones ({skipped} skipped), widest run card has {} stations",
        builder.len(),
        unique_zones.len(),
        builder.max_runs()
    );
    builder.finish()
}

#[cfg(test)]
mod test {
    use std::collections::HashMap;

    use super::build_run_order;
    use crate::{
        matrix::MatrixLayout,
        station::StationResolver,
        zone::{ZoneCode, ZoneId},
    };

    fn zone(label: &str) -> ZoneCode {
        ZoneCode::parse(label).expect("test invariant failed: bad zone label")
    }

    fn card(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_builds_padded_matrix_and_skips_bad_zones() {
        let source: HashMap<ZoneCode, Vec<String>> = HashMap::from([
            (zone("01"), card(&["FD/S01", "FD/SQ01", "FD/S04"])),
            (zone("02"), card(&["FD/S02", "FD/S03", "FD/S05", "FD/S06", "FD/MED41"])),
            (zone("03"), card(&["FD/S07", "FD/X99"])),
            (zone("05A"), card(&["FD/RADIO"])),
        ]);
        // 04 has no run card, 03 has an unresolvable facility
        let zones = vec![zone("5A"), zone("4"), zone("3"), zone("2"), zone("1"), zone("01")];
        let matrix = build_run_order(&zones, &source, &StationResolver::default())
            .expect("should build");

        assert_eq!(matrix.height(), 3);
        assert_eq!(matrix.width(), 4);
        assert_eq!(
            matrix.to_cells(MatrixLayout::ZoneMajor),
            vec![
                vec![0, 3, -1, -1],
                vec![1, 1, 4, 5],
                vec![-1, -1, -1, -1],
            ]
        );
        assert_eq!(matrix.zone_id(&zone("05A")), Some(&ZoneId(2)));
        assert_eq!(matrix.zone_id(&zone("03")), None);
        assert_eq!(matrix.zone_id(&zone("04")), None);
        for row in matrix.to_cells(MatrixLayout::ZoneMajor) {
            assert_eq!(row.len(), matrix.width());
        }
    }

    #[test]
    fn test_no_zones_gives_empty_matrix() {
        let source: HashMap<ZoneCode, Vec<String>> = HashMap::new();
        let matrix =
            build_run_order(&[], &source, &StationResolver::default()).expect("should build");
        assert_eq!(matrix.height(), 0);
        assert_eq!(matrix.width(), 0);
    }
}
