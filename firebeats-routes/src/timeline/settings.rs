use serde::{Deserialize, Serialize};

pub const DEFAULT_SUBSAMPLE_STEP: usize = 10;

/// how the running clock of a station advances between legs.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClockMode {
    /// one clock per station seeded by its first leg, every later leg
    /// continues where the previous one ended
    #[default]
    Continuous,
    /// jump the clock forward to a leg's start time when it lies ahead
    LegStart,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct SynthesisSettings {
    /// keep every n-th route vertex, beginning with the first
    pub subsample_step: usize,
    pub clock_mode: ClockMode,
}

impl Default for SynthesisSettings {
    fn default() -> Self {
        Self {
            subsample_step: DEFAULT_SUBSAMPLE_STEP,
            clock_mode: ClockMode::default(),
        }
    }
}
