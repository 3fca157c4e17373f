use std::time::Duration;

use geo::Coord;
use serde::Deserialize;

use super::{Route, RouteError, RouteService};

pub const DEFAULT_OSRM_TIMEOUT: Duration = Duration::from_secs(10);

/// client for the route endpoint of an OSRM server.
pub struct OsrmRouteService {
    base_url: String,
    client: reqwest::blocking::Client,
}

#[derive(Deserialize, Debug)]
struct OsrmResponse {
    #[serde(default)]
    routes: Vec<OsrmRoute>,
}

#[derive(Deserialize, Debug)]
struct OsrmRoute {
    geometry: OsrmGeometry,
    duration: f64,
    #[serde(default)]
    distance: f64,
}

#[derive(Deserialize, Debug)]
struct OsrmGeometry {
    coordinates: Vec<[f64; 2]>,
}

impl OsrmRouteService {
    pub fn new(base_url: &str, timeout: Duration) -> Result<OsrmRouteService, RouteError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RouteError::Client(e.to_string()))?;
        Ok(OsrmRouteService {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn request_url(&self, origin: Coord<f64>, destination: Coord<f64>) -> String {
        format!(
            "{}/route/v1/driving/{},{};{},{}?geometries=geojson&overview=full",
            self.base_url, origin.x, origin.y, destination.x, destination.y
        )
    }
}

impl RouteService for OsrmRouteService {
    fn route(&self, origin: Coord<f64>, destination: Coord<f64>) -> Result<Route, RouteError> {
        let unavailable = |message: String| RouteError::Unavailable {
            origin,
            destination,
            message,
        };
        let url = self.request_url(origin, destination);
        log::debug!("GET {url}");
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| unavailable(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(unavailable(format!("server responded with status {status}")));
        }
        let body = response.text().map_err(|e| unavailable(e.to_string()))?;
        decode_route(&body).map_err(unavailable)
    }
}

/// takes the first route of an OSRM route response body.
fn decode_route(body: &str) -> Result<Route, String> {
    let response: OsrmResponse =
        serde_json::from_str(body).map_err(|e| format!("failed to decode response: {e}"))?;
    let first = response
        .routes
        .into_iter()
        .next()
        .ok_or_else(|| String::from("response contains no routes"))?;
    let geometry = first
        .geometry
        .coordinates
        .into_iter()
        .map(|[x, y]| Coord { x, y })
        .collect();
    Ok(Route {
        geometry,
        duration_seconds: first.duration,
        distance_meters: first.distance,
    })
}

#[cfg(test)]
mod test {
    use super::{decode_route, OsrmRouteService, DEFAULT_OSRM_TIMEOUT};
    use geo::Coord;

    #[test]
    fn test_request_url() {
        let service = OsrmRouteService::new("http://localhost:5000/", DEFAULT_OSRM_TIMEOUT)
            .expect("client should build");
        let url = service.request_url(Coord { x: -86.5, y: 36.25 }, Coord { x: -86.0, y: 36.0 });
        assert_eq!(
            url,
            "http://localhost:5000/route/v1/driving/-86.5,36.25;-86,36?geometries=geojson&overview=full"
        );
    }

    #[test]
    fn test_decode_osrm_response() {
        let body = r#"{
            "code": "Ok",
            "routes": [{
                "geometry": {"type": "LineString", "coordinates": [[-86.5, 36.25], [-86.4, 36.2], [-86.0, 36.0]]},
                "legs": [],
                "weight_name": "routability",
                "weight": 130.2,
                "duration": 120.5,
                "distance": 2100.0
            }],
            "waypoints": []
        }"#;
        let route = decode_route(body).expect("should decode");
        assert_eq!(route.geometry.len(), 3);
        assert_eq!(route.geometry[1], Coord { x: -86.4, y: 36.2 });
        assert_eq!(route.duration_seconds, 120.5);
        assert_eq!(route.distance_meters, 2100.0);
    }

    #[test]
    fn test_decode_no_routes() {
        let body = r#"{"code": "NoRoute", "message": "Impossible route between points"}"#;
        let error = decode_route(body).expect_err("should fail");
        assert!(error.contains("no routes"));
        assert!(decode_route("<html>bad gateway</html>").is_err());
    }
}
