use std::{collections::HashMap, path::Path};

use crate::{
    station::StationId,
    zone::{ZoneCode, ZoneId, ZoneTable},
};

use super::{MatrixError, MatrixLayout};

/// label written to the debug string matrix for a padded cell
pub const NO_STATION_LABEL: &str = "None";

/// first column of the run-order CSV; run columns follow as `Run 1..Run N`
pub const ZONE_COLUMN: &str = "Zone";

/// the resolved run order of one zone. `stations` may be padded with `None`
/// entries; `facilities` holds only the resolved facility names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOrderRow {
    pub zone_code: ZoneCode,
    pub facilities: Vec<String>,
    pub stations: Vec<Option<StationId>>,
}

impl RunOrderRow {
    pub fn new(zone_code: ZoneCode, resolved: Vec<(String, StationId)>) -> RunOrderRow {
        let (facilities, stations): (Vec<String>, Vec<Option<StationId>>) = resolved
            .into_iter()
            .map(|(facility, station_id)| (facility, Some(station_id)))
            .unzip();
        RunOrderRow {
            zone_code,
            facilities,
            stations,
        }
    }

    /// number of run-card positions with a station, ignoring padding
    pub fn resolved_len(&self) -> usize {
        self.facilities.len()
    }

    /// right-pads with the "no station" marker. never truncates or reorders.
    pub fn pad_to(&mut self, width: usize) {
        if self.stations.len() < width {
            self.stations.resize(width, None);
        }
    }

    pub fn cells(&self) -> Vec<i32> {
        self.stations
            .iter()
            .map(|s| s.map(|id| id.as_cell()).unwrap_or(StationId::SENTINEL))
            .collect()
    }
}

/// collects run-order rows zone by zone. the final width is unknown until
/// every zone is scanned, so rows are padded twice: speculatively against the
/// running maximum while collecting, then against the final maximum in
/// [`RunOrderBuilder::finish`].
#[derive(Debug, Default)]
pub struct RunOrderBuilder {
    rows: Vec<RunOrderRow>,
    max_runs: usize,
}

impl RunOrderBuilder {
    pub fn new() -> RunOrderBuilder {
        RunOrderBuilder::default()
    }

    /// records a zone's resolved run order, updating the running maximum.
    pub fn push_zone(&mut self, zone_code: ZoneCode, resolved: Vec<(String, StationId)>) {
        let mut row = RunOrderRow::new(zone_code, resolved);
        self.max_runs = self.max_runs.max(row.resolved_len());
        row.pad_to(self.max_runs);
        self.rows.push(row);
    }

    /// widest run card seen so far
    pub fn max_runs(&self) -> usize {
        self.max_runs
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// re-pads every row to the final width, assigns ZoneIds in zone order
    /// and checks that the result is rectangular.
    pub fn finish(self) -> Result<RunOrderMatrix, MatrixError> {
        let RunOrderBuilder { mut rows, max_runs } = self;
        rows.sort_by(|a, b| a.zone_code.cmp(&b.zone_code));
        if let Some(dup) = rows
            .windows(2)
            .find(|pair| pair[0].zone_code == pair[1].zone_code)
        {
            return Err(MatrixError::DuplicateZone(dup[0].zone_code.canonical()));
        }
        for row in rows.iter_mut() {
            row.pad_to(max_runs);
        }
        // the zone table is derived from the rows, so height equals zone count
        let codes: Vec<ZoneCode> = rows.iter().map(|r| r.zone_code.clone()).collect();
        let zone_table = ZoneTable::from_sorted_codes(&codes);
        let matrix = RunOrderMatrix {
            rows,
            width: max_runs,
            zone_table,
        };
        matrix.validate()?;
        Ok(matrix)
    }
}

/// the zone x run-position table of StationIds, with the zone table that
/// indexes its rows.
#[derive(Clone, Debug)]
pub struct RunOrderMatrix {
    rows: Vec<RunOrderRow>,
    width: usize,
    zone_table: ZoneTable,
}

impl RunOrderMatrix {
    /// number of run positions, the length of the longest resolved run card
    pub fn width(&self) -> usize {
        self.width
    }

    /// number of zones
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[RunOrderRow] {
        &self.rows
    }

    pub fn zone_table(&self) -> &ZoneTable {
        &self.zone_table
    }

    pub fn zone_id(&self, zone_code: &ZoneCode) -> Option<&ZoneId> {
        self.zone_table.get(zone_code)
    }

    /// owned copy of the ZoneCode -> ZoneId assignment
    pub fn zone_ids(&self) -> HashMap<ZoneCode, ZoneId> {
        self.zone_table
            .rows()
            .iter()
            .map(|row| (row.zone_code.clone(), row.zone_id))
            .collect()
    }

    /// run order of a zone without padding, in response priority
    pub fn stations_for(&self, zone_id: &ZoneId) -> Option<Vec<StationId>> {
        self.rows
            .get(zone_id.0)
            .map(|row| row.stations.iter().flatten().copied().collect())
    }

    /// integer cells in the requested orientation
    pub fn to_cells(&self, layout: MatrixLayout) -> Vec<Vec<i32>> {
        let zone_major: Vec<Vec<i32>> = self.rows.iter().map(|r| r.cells()).collect();
        match layout {
            MatrixLayout::ZoneMajor => zone_major,
            MatrixLayout::RunMajor => (0..self.width)
                .map(|col| zone_major.iter().map(|row| row[col]).collect())
                .collect(),
        }
    }

    /// human readable rows of `[ZoneCode, "Station 04", ..., "None"]`
    pub fn to_label_matrix(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                let labels = (0..self.width).map(|col| {
                    row.facilities
                        .get(col)
                        .cloned()
                        .unwrap_or_else(|| NO_STATION_LABEL.to_string())
                });
                std::iter::once(row.zone_code.canonical())
                    .chain(labels)
                    .collect()
            })
            .collect()
    }

    /// writes the label matrix as CSV with a `Zone,Run 1,...,Run N` header
    pub fn write_run_order_csv(&self, path: &Path) -> Result<(), MatrixError> {
        let write_err = |message: String| MatrixError::File {
            path: path.to_path_buf(),
            message,
        };
        let mut writer = csv::Writer::from_path(path).map_err(|e| write_err(e.to_string()))?;
        let header = std::iter::once(ZONE_COLUMN.to_string())
            .chain((1..=self.width).map(|run| format!("Run {run}")));
        writer
            .write_record(header)
            .map_err(|e| write_err(e.to_string()))?;
        for row in self.to_label_matrix().iter() {
            writer
                .write_record(row)
                .map_err(|e| write_err(e.to_string()))?;
        }
        writer.flush().map_err(|e| write_err(e.to_string()))?;
        Ok(())
    }

    fn validate(&self) -> Result<(), MatrixError> {
        for row in self.rows.iter() {
            if row.stations.len() != self.width {
                return Err(MatrixError::Jagged {
                    row: row.zone_code.canonical(),
                    found: row.stations.len(),
                    expected: self.width,
                });
            }
        }
        Ok(())
    }
}
