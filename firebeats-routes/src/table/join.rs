use std::{collections::HashMap, hash::Hash, path::Path};

use chrono::{DateTime, Utc};
use firebeats_core::station::StationId;
use geo::Coord;

use super::{
    read_records, IncidentRecord, IncidentReportRecord, StationRecord, StationReportRecord,
    TableError,
};

/// the four tables describing historical responses
#[derive(Clone, Debug, Default)]
pub struct ResponseTables {
    pub stations: Vec<StationRecord>,
    pub incidents: Vec<IncidentRecord>,
    pub station_reports: Vec<StationReportRecord>,
    pub incident_reports: Vec<IncidentReportRecord>,
}

impl ResponseTables {
    pub fn read(
        stations: &Path,
        incidents: &Path,
        station_reports: &Path,
        incident_reports: &Path,
    ) -> Result<ResponseTables, TableError> {
        Ok(ResponseTables {
            stations: read_records(stations)?,
            incidents: read_records(incidents)?,
            station_reports: read_records(station_reports)?,
            incident_reports: read_records(incident_reports)?,
        })
    }
}

/// a station report joined with its station, incident and resolution.
#[derive(Clone, Debug, PartialEq)]
pub struct ResponseRecord {
    pub station_id: StationId,
    pub incident_id: u64,
    /// station location, x = lon, y = lat
    pub station: Coord<f64>,
    /// incident location, x = lon, y = lat
    pub incident: Coord<f64>,
    pub dispatch_time: DateTime<Utc>,
    pub resolved_time: DateTime<Utc>,
}

/// inner-joins station reports to stations (on StationID), incidents (on
/// IncidentID) and incident reports (on IncidentID). station-report order is
/// preserved; reports missing any side of the join are dropped.
pub fn join_responses(tables: &ResponseTables) -> Result<Vec<ResponseRecord>, TableError> {
    let stations = index_first(&tables.stations, |s| s.station_id, "station");
    let incidents = index_first(&tables.incidents, |i| i.incident_id, "incident");
    let resolutions = index_first(&tables.incident_reports, |r| r.incident_id, "incident report");

    let mut dropped = 0;
    let mut joined = Vec::with_capacity(tables.station_reports.len());
    for report in tables.station_reports.iter() {
        let station = stations.get(&report.station_id);
        let incident = incidents.get(&report.incident_id);
        let resolution = resolutions.get(&report.incident_id);
        match (station, incident, resolution) {
            (Some(s), Some(i), Some(r)) => joined.push(ResponseRecord {
                station_id: report.station_id,
                incident_id: report.incident_id,
                station: Coord { x: s.lon, y: s.lat },
                incident: Coord { x: i.lon, y: i.lat },
                dispatch_time: report.dispatch_time,
                resolved_time: r.resolved,
            }),
            _ => {
                log::debug!(
                    "dropping report for station {} incident {}: station found={}, incident found={}, resolution found={}",
                    report.station_id,
                    report.incident_id,
                    station.is_some(),
                    incident.is_some(),
                    resolution.is_some()
                );
                dropped += 1;
            }
        }
    }
    if dropped > 0 {
        log::warn!("{dropped} station reports could not be joined and were dropped");
    }
    if joined.is_empty() && !tables.station_reports.is_empty() {
        return Err(TableError::EmptyJoin);
    }
    log::info!("joined {} station responses", joined.len());
    Ok(joined)
}

fn index_first<'a, T, K, F>(rows: &'a [T], key: F, desc: &str) -> HashMap<K, &'a T>
where
    K: Eq + Hash + std::fmt::Display,
    F: Fn(&T) -> K,
{
    let mut index = HashMap::with_capacity(rows.len());
    for row in rows.iter() {
        let k = key(row);
        if index.contains_key(&k) {
            log::warn!("duplicate {desc} {k}, keeping the first row");
            continue;
        }
        index.insert(k, row);
    }
    index
}
