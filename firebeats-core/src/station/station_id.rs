use serde::{Deserialize, Serialize};

/// zero-based index of a physical station. "Station 01" is StationId 0.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub u32);

impl StationId {
    /// matrix cell value for "no station assigned"
    pub const SENTINEL: i32 = -1;

    /// largest id that can be stored in a matrix cell
    pub const MAX_CELL: u32 = i32::MAX as u32;

    pub fn fits_cell(&self) -> bool {
        self.0 <= Self::MAX_CELL
    }

    /// cell value of this id. the resolver never produces ids above
    /// [`StationId::MAX_CELL`]; any that reach here are written as the sentinel.
    pub fn as_cell(&self) -> i32 {
        i32::try_from(self.0).unwrap_or(Self::SENTINEL)
    }
}

impl std::fmt::Display for StationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
