mod error;
mod output;
mod settings;
mod synthesize;

pub use error::SynthesisError;
pub use output::{timelines_to_json, write_timelines, TimelineCollection};
pub use settings::{ClockMode, SynthesisSettings, DEFAULT_SUBSAMPLE_STEP};
pub use synthesize::{synthesize, StationTimeline, TimedVertex};
