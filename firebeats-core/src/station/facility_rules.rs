use serde::{Deserialize, Serialize};

use super::StationId;

/// run-card codes that never describe a ground response unit: radio, dispatch,
/// headquarters, fast-response, squad, tactical, medic, bariatric and brush units.
pub const IGNORED_FACILITY_CODES: [&str; 20] = [
    "FD/RADIO", "FD/FST11", "FD/FST06", "FD/FST09", "FD/FST37", "FD/FAST01", "FD/SQ01", "FD/SQ37",
    "FD/SQ09", "FD/SQ11", "FD/TC05", "FD/DS31", "FD/MED41", "FD/HQ", "FD/BAR*", "FD/DSOP",
    "FD/BT13", "FD/BT22", "FD/BT35", "FD/BT36",
];

/// substrings of a facility segment that mark non-ground apparatus. these
/// overlap (FST/ST, BT/BAR) and must be confirmed with the department before
/// being changed.
pub const EXCLUDED_FACILITY_MARKERS: [&str; 13] = [
    "FST", "FB", "SQ", "MED", "BT", "DSOP", "RADIO", "HQ", "EN", "RE", "ATV", "TC", "BAR",
];

/// one-letter station marker used on run cards, `S04` meaning `Station 04`
pub const STATION_MARKER: &str = "S";

/// prefix of a normalized station facility name
pub const STATION_PREFIX: &str = "Station ";

/// station numbers start at 1, StationIds at 0
pub const STATION_OFFSET: u32 = 1;

/// stations 02 and 03 were consolidated into a single facility that keeps
/// StationId 1.
pub const CONSOLIDATED_STATIONS: [(u32, u32); 2] = [(2, 1), (3, 1)];

/// a station number whose StationId is fixed instead of derived
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct StationConsolidation {
    pub station_number: u32,
    pub station_id: StationId,
}

/// jurisdiction-specific tables driving the facility filter and station
/// resolver. the defaults describe the current department; all fields may be
/// overridden from configuration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct FacilityRules {
    pub ignored_codes: Vec<String>,
    pub excluded_markers: Vec<String>,
    pub station_marker: String,
    pub station_offset: u32,
    pub consolidated: Vec<StationConsolidation>,
}

impl Default for FacilityRules {
    fn default() -> Self {
        Self {
            ignored_codes: IGNORED_FACILITY_CODES
                .iter()
                .map(|c| c.to_string())
                .collect(),
            excluded_markers: EXCLUDED_FACILITY_MARKERS
                .iter()
                .map(|m| m.to_string())
                .collect(),
            station_marker: STATION_MARKER.to_string(),
            station_offset: STATION_OFFSET,
            consolidated: CONSOLIDATED_STATIONS
                .iter()
                .map(|(station_number, station_id)| StationConsolidation {
                    station_number: *station_number,
                    station_id: StationId(*station_id),
                })
                .collect(),
        }
    }
}

impl FacilityRules {
    pub fn is_ignored(&self, code: &str) -> bool {
        self.ignored_codes.iter().any(|c| c == code)
    }

    pub fn has_excluded_marker(&self, facility: &str) -> bool {
        self.excluded_markers
            .iter()
            .any(|m| facility.contains(m.as_str()))
    }

    pub fn consolidated_id(&self, station_number: u32) -> Option<StationId> {
        self.consolidated
            .iter()
            .find(|c| c.station_number == station_number)
            .map(|c| c.station_id)
    }
}
