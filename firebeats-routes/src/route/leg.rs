use std::time::Duration;

use chrono::{DateTime, Utc};
use firebeats_core::station::StationId;
use geo::Coord;
use kdam::{Bar, BarExt};

use super::{Route, RouteService};
use crate::table::ResponseRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegDirection {
    /// station to incident, starting at dispatch
    Outbound,
    /// incident back to station, starting at resolution
    Return,
}

/// one directed trip of a response, with its route once one has been requested.
#[derive(Clone, Debug, PartialEq)]
pub struct TripLeg {
    pub station_id: StationId,
    pub incident_id: u64,
    pub direction: LegDirection,
    pub origin: Coord<f64>,
    pub destination: Coord<f64>,
    pub start: DateTime<Utc>,
    pub route: Option<Route>,
}

/// expands each response into an outbound leg followed by its return leg.
pub fn trip_legs(responses: &[ResponseRecord]) -> Vec<TripLeg> {
    responses
        .iter()
        .flat_map(|r| {
            [
                TripLeg {
                    station_id: r.station_id,
                    incident_id: r.incident_id,
                    direction: LegDirection::Outbound,
                    origin: r.station,
                    destination: r.incident,
                    start: r.dispatch_time,
                    route: None,
                },
                TripLeg {
                    station_id: r.station_id,
                    incident_id: r.incident_id,
                    direction: LegDirection::Return,
                    origin: r.incident,
                    destination: r.station,
                    start: r.resolved_time,
                    route: None,
                },
            ]
        })
        .collect()
}

/// requests a route for every leg in order, sleeping `delay` between calls.
/// a failed request is logged and leaves that leg without a route.
pub fn route_legs(legs: &mut [TripLeg], service: &dyn RouteService, delay: Duration) {
    let mut bar = Bar::builder()
        .total(legs.len())
        .desc("routing trip legs")
        .build()
        .ok();
    let mut failures = 0;
    for (idx, leg) in legs.iter_mut().enumerate() {
        if idx > 0 && !delay.is_zero() {
            std::thread::sleep(delay);
        }
        match service.route(leg.origin, leg.destination) {
            Ok(route) => leg.route = Some(route),
            Err(e) => {
                log::warn!(
                    "station {} incident {} {:?} leg: {e}",
                    leg.station_id,
                    leg.incident_id,
                    leg.direction
                );
                leg.route = None;
                failures += 1;
            }
        }
        if let Some(b) = bar.as_mut() {
            let _ = b.update(1);
        }
    }
    if bar.is_some() {
        eprintln!();
    }
    log::info!(
        "routed {} of {} trip legs",
        legs.len() - failures,
        legs.len()
    );
}
