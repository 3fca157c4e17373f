use geo::{MinimumRotatedRect, MultiPolygon, Polygon};

use super::{BeatError, BeatFeature};

/// the minimum-area oriented rectangle enclosing every beat. the convex hull
/// of the union of the beats equals the convex hull of their parts, so the
/// rectangle is computed directly over the collected polygons.
pub fn bounding_envelope(beats: &[BeatFeature]) -> Result<Polygon<f64>, BeatError> {
    if beats.is_empty() {
        return Err(BeatError::Empty);
    }
    let all = MultiPolygon::new(beats.iter().map(|b| b.polygon.clone()).collect());
    all.minimum_rotated_rect().ok_or(BeatError::Empty)
}
