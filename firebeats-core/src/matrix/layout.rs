use serde::{Deserialize, Serialize};

/// orientation of the run-order matrix when written to disk.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatrixLayout {
    /// one row per zone, one column per run position
    #[default]
    ZoneMajor,
    /// one row per run position, one column per zone. this is the layout read
    /// by dispatch simulators that fetch a zone's run order as a column.
    RunMajor,
}
