use std::path::Path;

use chrono::{DateTime, Utc};
use firebeats_core::station::StationId;
use serde::{de::DeserializeOwned, Deserialize};

use super::{deserialize_utc_datetime, TableError};

/// a row of the station table
#[derive(Deserialize, Clone, Debug)]
pub struct StationRecord {
    #[serde(rename = "StationID")]
    pub station_id: StationId,
    #[serde(rename = "Facility Name", default)]
    pub facility_name: String,
    pub lat: f64,
    pub lon: f64,
}

/// a row of the historical incident table
#[derive(Deserialize, Clone, Debug)]
pub struct IncidentRecord {
    pub incident_id: u64,
    pub lat: f64,
    pub lon: f64,
    #[serde(deserialize_with = "deserialize_utc_datetime")]
    pub datetime: DateTime<Utc>,
}

/// one station's response to one incident
#[derive(Deserialize, Clone, Debug)]
pub struct StationReportRecord {
    #[serde(rename = "StationID")]
    pub station_id: StationId,
    #[serde(rename = "IncidentID")]
    pub incident_id: u64,
    #[serde(rename = "DispatchTime", deserialize_with = "deserialize_utc_datetime")]
    pub dispatch_time: DateTime<Utc>,
}

/// resolution time of an incident
#[derive(Deserialize, Clone, Debug)]
pub struct IncidentReportRecord {
    #[serde(rename = "IncidentID")]
    pub incident_id: u64,
    #[serde(rename = "Resolved", deserialize_with = "deserialize_utc_datetime")]
    pub resolved: DateTime<Utc>,
}

/// reads every row of a CSV file with headers. columns not named by `T` are ignored.
pub fn read_records<T>(path: &Path) -> Result<Vec<T>, TableError>
where
    T: DeserializeOwned,
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| TableError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    let records = reader
        .deserialize::<T>()
        .enumerate()
        .map(|(row, result)| {
            result.map_err(|e| TableError::Deserialize {
                path: path.to_path_buf(),
                row,
                message: e.to_string(),
            })
        })
        .collect::<Result<Vec<T>, TableError>>()?;
    log::debug!("read {} rows from {}", records.len(), path.display());
    Ok(records)
}
