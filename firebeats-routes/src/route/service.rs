use geo::Coord;

use super::RouteError;

/// a driving route between two points.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    /// vertices in travel order, x = lon, y = lat
    pub geometry: Vec<Coord<f64>>,
    pub duration_seconds: f64,
    pub distance_meters: f64,
}

/// anything that can answer "how do I drive from here to there".
///
/// coordinates are WGS84 with x = longitude and y = latitude.
pub trait RouteService {
    fn route(&self, origin: Coord<f64>, destination: Coord<f64>) -> Result<Route, RouteError>;
}
