use std::path::Path;

use firebeats_core::util::fs::{create_dirs, output_path};
use firebeats_routes::{
    route::{route_legs, trip_legs, OsrmRouteService, RouteService},
    table::{join_responses, ResponseTables},
    timeline::{synthesize, write_timelines, StationTimeline},
};

use super::{FirebeatsAppError, RoutesConfig};

/// routes every historical response through OSRM and writes one animated
/// route per station.
pub fn run_routes(
    config: &RoutesConfig,
    output_directory: Option<&Path>,
) -> Result<Vec<StationTimeline>, FirebeatsAppError> {
    let service = OsrmRouteService::new(&config.osrm_url, config.request_timeout()?)?;
    run_routes_with(config, &service, output_directory)
}

/// as [`run_routes`] with any routing service.
pub fn run_routes_with(
    config: &RoutesConfig,
    service: &dyn RouteService,
    output_directory: Option<&Path>,
) -> Result<Vec<StationTimeline>, FirebeatsAppError> {
    if let Some(dir) = output_directory {
        create_dirs(dir)?;
    }
    let delay = config.request_delay()?;
    let tables = ResponseTables::read(
        Path::new(&config.stations_file),
        Path::new(&config.incidents_file),
        Path::new(&config.station_report_file),
        Path::new(&config.incident_report_file),
    )?;
    let responses = join_responses(&tables)?;
    let mut legs = trip_legs(&responses);
    route_legs(&mut legs, service, delay);
    let timelines = synthesize(&legs, &config.synthesis)?;
    let output_file = output_path(output_directory, &config.output_file);
    write_timelines(&output_file, &timelines)?;
    Ok(timelines)
}

#[cfg(test)]
mod test {
    use super::run_routes_with;
    use crate::app::RoutesConfig;
    use firebeats_core::station::StationId;
    use firebeats_routes::{
        route::{Route, RouteError, RouteService},
        timeline::{ClockMode, SynthesisSettings},
    };
    use geo::Coord;
    use std::{fs, path::Path};

    /// drives in a straight line at a fixed 100 seconds per trip
    struct FixedDuration;

    impl RouteService for FixedDuration {
        fn route(&self, origin: Coord<f64>, destination: Coord<f64>) -> Result<Route, RouteError> {
            Ok(Route {
                geometry: vec![origin, destination],
                duration_seconds: 100.0,
                distance_meters: 1500.0,
            })
        }
    }

    fn write(dir: &Path, name: &str, body: &str) -> String {
        let path = dir.join(name);
        fs::write(&path, body).expect("test invariant failed: write");
        path.display().to_string()
    }

    #[test]
    fn test_routes_end_to_end() {
        let dir = tempfile::tempdir().expect("test invariant failed: tempdir");
        let config = RoutesConfig {
            stations_file: write(
                dir.path(),
                "stations.csv",
                "StationID,Facility Name,lat,lon\n0,Station 01,36.0,-86.0\n",
            ),
            incidents_file: write(
                dir.path(),
                "incidents.csv",
                "incident_id,lat,lon,datetime\n10,36.1,-86.1,2024-10-01 08:00:00\n",
            ),
            station_report_file: write(
                dir.path(),
                "station_report.csv",
                "StationID,IncidentID,DispatchTime\n0,10,2024-10-01 08:15:00\n",
            ),
            incident_report_file: write(
                dir.path(),
                "incident_report.csv",
                "IncidentID,Resolved\n10,2024-10-01 09:00:00\n",
            ),
            osrm_url: String::from("http://localhost:5000"),
            request_delay: String::from("0s"),
            request_timeout: String::from("1s"),
            synthesis: SynthesisSettings {
                subsample_step: 1,
                clock_mode: ClockMode::Continuous,
            },
            output_file: String::from("routes.json"),
        };
        let out = dir.path().join("out");
        let timelines =
            run_routes_with(&config, &FixedDuration, Some(&out)).expect("should synthesize");
        assert_eq!(timelines.len(), 1);
        assert_eq!(timelines[0].station_id, StationId(0));
        let stamps = timelines[0]
            .vertices
            .iter()
            .map(|v| v.timestamp - 1_727_770_500)
            .collect::<Vec<_>>();
        // return leg continues from the end of the outbound leg
        assert_eq!(stamps, vec![50, 100, 150, 200]);

        let text = fs::read_to_string(out.join("routes.json")).expect("routes.json");
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(value["features"][0]["properties"]["station_id"], "0");
    }
}
