mod error;
mod leg;
mod osrm;
mod service;

pub use error::RouteError;
pub use leg::{route_legs, trip_legs, LegDirection, TripLeg};
pub use osrm::{OsrmRouteService, DEFAULT_OSRM_TIMEOUT};
pub use service::{Route, RouteService};
