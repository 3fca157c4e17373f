use serde::{Deserialize, Serialize};

/// index of a zone's row in the run-order matrix. assigned fresh on every
/// compilation from the sorted list of zones that produced a row.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZoneId(pub usize);

impl ZoneId {
    /// value written for geometry whose zone has no run-order row
    pub const UNMAPPED: i64 = -1;

    /// renders an optional zone id the way downstream consumers expect it,
    /// using [`ZoneId::UNMAPPED`] in place of a missing id.
    pub fn or_unmapped(zone_id: Option<&ZoneId>) -> i64 {
        zone_id.map(|z| z.0 as i64).unwrap_or(Self::UNMAPPED)
    }
}

impl std::fmt::Display for ZoneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
