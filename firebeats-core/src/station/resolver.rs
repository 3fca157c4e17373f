use super::{
    facility_rules::STATION_PREFIX, FacilityCode, FacilityRules, StationError, StationId,
};

/// filters a zone's run card down to ground response units and maps each
/// surviving facility to its StationId, preserving run-card order.
#[derive(Clone, Debug, Default)]
pub struct StationResolver {
    rules: FacilityRules,
}

impl StationResolver {
    pub fn new(rules: FacilityRules) -> StationResolver {
        StationResolver { rules }
    }

    pub fn rules(&self) -> &FacilityRules {
        &self.rules
    }

    /// drops ignore-listed codes and codes whose facility segment carries an
    /// excluded marker. order is preserved.
    pub fn retain_ground_units<'a>(&self, codes: &'a [String]) -> Vec<FacilityCode<'a>> {
        codes
            .iter()
            .map(|c| FacilityCode::parse(c))
            .filter(|c| !self.rules.is_ignored(c.raw))
            .filter(|c| !self.rules.has_excluded_marker(c.facility))
            .collect()
    }

    /// resolves a run card to StationIds in response priority order.
    pub fn resolve(&self, codes: &[String]) -> Result<Vec<StationId>, StationError> {
        let resolved = self.resolve_facilities(codes)?;
        Ok(resolved.into_iter().map(|(_, id)| id).collect())
    }

    /// resolves a run card, keeping the canonical facility name (`Station 04`)
    /// next to each StationId.
    pub fn resolve_facilities(
        &self,
        codes: &[String],
    ) -> Result<Vec<(String, StationId)>, StationError> {
        self.retain_ground_units(codes)
            .iter()
            .map(|code| {
                let number = self.station_number(code)?;
                let station_id = self.station_id(code, number)?;
                Ok((format!("{STATION_PREFIX}{number:02}"), station_id))
            })
            .collect()
    }

    /// canonical name of the station a StationId was assigned from. consolidated
    /// stations report the number of the station absorbing them.
    pub fn facility_label(&self, station_id: &StationId) -> String {
        let number = station_id.0.saturating_add(self.rules.station_offset);
        format!("{STATION_PREFIX}{number:02}")
    }

    /// rewrites the one-letter station marker into the `Station ` prefix and
    /// reads the station number that follows it.
    pub fn station_number(&self, code: &FacilityCode) -> Result<u32, StationError> {
        let marker = self.rules.station_marker.as_str();
        let digits = match code.facility.strip_prefix(STATION_PREFIX) {
            Some(rest) => rest,
            None => code
                .facility
                .strip_prefix(marker)
                .filter(|_| !marker.is_empty())
                .ok_or_else(|| StationError::Resolution {
                    code: code.raw.to_string(),
                    message: format!("facility '{}' lacks station marker '{marker}'", code.facility),
                })?,
        }
        .trim();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(StationError::Resolution {
                code: code.raw.to_string(),
                message: format!("'{digits}' is not a station number"),
            });
        }
        digits.parse::<u32>().map_err(|e| StationError::Resolution {
            code: code.raw.to_string(),
            message: e.to_string(),
        })
    }

    fn station_id(&self, code: &FacilityCode, number: u32) -> Result<StationId, StationError> {
        let station_id = match self.rules.consolidated_id(number) {
            Some(station_id) => station_id,
            None => number
                .checked_sub(self.rules.station_offset)
                .map(StationId)
                .ok_or_else(|| StationError::Resolution {
                    code: code.raw.to_string(),
                    message: format!(
                        "station number {number} is below the first station number {}",
                        self.rules.station_offset
                    ),
                })?,
        };
        if !station_id.fits_cell() {
            return Err(StationError::Resolution {
                code: code.raw.to_string(),
                message: format!(
                    "station id {station_id} is larger than the matrix maximum {}",
                    StationId::MAX_CELL
                ),
            });
        }
        Ok(station_id)
    }
}

#[cfg(test)]
mod test {
    use super::StationResolver;
    use crate::station::{FacilityRules, StationError, StationId};

    fn card(codes: &[&str]) -> Vec<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_station_examples() {
        let resolver = StationResolver::default();
        let cases = [("FD/S04", 3), ("FD/S02", 1), ("FD/S03", 1), ("FD/S01", 0), ("FD/S12", 11)];
        for (code, expected) in cases {
            let result = resolver.resolve(&card(&[code])).expect("should resolve");
            assert_eq!(result, vec![StationId(expected)], "code {code}");
        }
    }

    #[test]
    fn test_preserves_run_card_order() {
        let resolver = StationResolver::default();
        let result = resolver
            .resolve(&card(&["FD/S09", "FD/S01", "FD/S05"]))
            .expect("should resolve");
        assert_eq!(result, vec![StationId(8), StationId(0), StationId(4)]);
    }

    #[test]
    fn test_drops_non_ground_units() {
        let resolver = StationResolver::default();
        let result = resolver
            .resolve(&card(&[
                "FD/RADIO", "FD/S04", "FD/FB01", "FD/SQ37", "FD/MED12", "FD/BAR*", "FD/HQ",
                "FD/EN07", "FD/RE03", "FD/ATV2", "FD/TC11", "FD/BT99", "FD/DSOP", "FD/S06",
            ]))
            .expect("should resolve");
        assert_eq!(result, vec![StationId(3), StationId(5)]);
    }

    #[test]
    fn test_keeps_facility_names() {
        let resolver = StationResolver::default();
        let result = resolver
            .resolve_facilities(&card(&["FD/S3", "FD/Station 07"]))
            .expect("should resolve");
        assert_eq!(
            result,
            vec![
                (String::from("Station 03"), StationId(1)),
                (String::from("Station 07"), StationId(6)),
            ]
        );
    }

    #[test]
    fn test_unexpected_format_is_a_resolution_error() {
        let resolver = StationResolver::default();
        match resolver.resolve(&card(&["FD/S04", "FD/L22"])) {
            Err(StationError::Resolution { code, .. }) => assert_eq!(code, "FD/L22"),
            other => panic!("expected resolution error, found {other:?}"),
        }
        assert!(resolver.resolve(&card(&["FD/S4A"])).is_err());
        assert!(resolver.resolve(&card(&["FD/S00"])).is_err());
    }

    #[test]
    fn test_station_ids_beyond_cell_range_are_rejected() {
        let resolver = StationResolver::default();
        let largest = resolver
            .resolve(&card(&["FD/S2147483648"]))
            .expect("should resolve");
        assert_eq!(largest, vec![StationId(i32::MAX as u32)]);
        assert_eq!(largest[0].as_cell(), i32::MAX);
        for code in ["FD/S2147483649", "FD/S4294967295"] {
            match resolver.resolve(&card(&[code])) {
                Err(StationError::Resolution { code: found, .. }) => assert_eq!(found, code),
                other => panic!("expected resolution error for {code}, found {other:?}"),
            }
        }
    }

    #[test]
    fn test_facility_label() {
        let resolver = StationResolver::default();
        assert_eq!(resolver.facility_label(&StationId(3)), "Station 04");
        assert_eq!(resolver.facility_label(&StationId(1)), "Station 02");
        assert_eq!(resolver.facility_label(&StationId(11)), "Station 12");
    }

    #[test]
    fn test_rules_are_swappable() {
        let rules = FacilityRules {
            ignored_codes: vec![],
            excluded_markers: vec![String::from("X")],
            station_marker: String::from("F"),
            station_offset: 1,
            consolidated: vec![],
        };
        let resolver = StationResolver::new(rules);
        let result = resolver
            .resolve(&card(&["CFD/F02", "CFD/FX1", "CFD/F03"]))
            .expect("should resolve");
        assert_eq!(result, vec![StationId(1), StationId(2)]);
    }
}
