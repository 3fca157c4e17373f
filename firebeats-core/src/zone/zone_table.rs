use std::{collections::HashMap, path::Path};

use serde::{Deserialize, Serialize};

use super::{ZoneCode, ZoneError, ZoneId};

/// one row of the zone table, as consumed by the dispatch front end.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ZoneTableRow {
    #[serde(rename = "ZoneID")]
    pub zone_id: ZoneId,
    #[serde(rename = "Zone Name")]
    pub zone_code: ZoneCode,
}

/// the ZoneCode -> ZoneId assignment for one compilation run. built once by
/// the run-order matrix builder and only read afterward.
#[derive(Clone, Debug, Default)]
pub struct ZoneTable {
    rows: Vec<ZoneTableRow>,
    lookup: HashMap<ZoneCode, ZoneId>,
}

impl ZoneTable {
    /// assigns ids by position. callers provide codes in sorted order with
    /// duplicates removed.
    pub fn from_sorted_codes(codes: &[ZoneCode]) -> ZoneTable {
        let rows: Vec<ZoneTableRow> = codes
            .iter()
            .enumerate()
            .map(|(idx, code)| ZoneTableRow {
                zone_id: ZoneId(idx),
                zone_code: code.clone(),
            })
            .collect();
        let lookup = rows
            .iter()
            .map(|row| (row.zone_code.clone(), row.zone_id))
            .collect();
        ZoneTable { rows, lookup }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[ZoneTableRow] {
        &self.rows
    }

    pub fn get(&self, zone_code: &ZoneCode) -> Option<&ZoneId> {
        self.lookup.get(zone_code)
    }

    pub fn zone_code(&self, zone_id: &ZoneId) -> Option<&ZoneCode> {
        self.rows.get(zone_id.0).map(|row| &row.zone_code)
    }

    pub fn write_csv(&self, path: &Path) -> Result<(), ZoneError> {
        let write_err = |message: String| ZoneError::Write {
            path: path.to_string_lossy().to_string(),
            message,
        };
        let mut writer = csv::Writer::from_path(path).map_err(|e| write_err(e.to_string()))?;
        for row in self.rows.iter() {
            writer
                .serialize(row)
                .map_err(|e| write_err(format!("zone {}: {e}", row.zone_code)))?;
        }
        writer.flush().map_err(|e| write_err(e.to_string()))?;
        Ok(())
    }
}
