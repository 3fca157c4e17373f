use firebeats_core::zone::{ZoneCode, ZoneId};
use geo::Polygon;

/// a single beat polygon ready for output. disconnected beats produce several
/// features sharing one zone.
#[derive(Clone, Debug)]
pub struct BeatFeature {
    pub zone_code: ZoneCode,
    /// None when the zone has no row in the run-order matrix
    pub zone_id: Option<ZoneId>,
    pub category: String,
    pub beat_type: String,
    pub polygon: Polygon<f64>,
}
