use std::collections::BTreeMap;

use firebeats_core::station::StationId;

use super::{ClockMode, SynthesisError, SynthesisSettings};
use crate::route::TripLeg;

/// a route vertex stamped with the unix time (seconds) a unit passes it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimedVertex {
    pub lon: f64,
    pub lat: f64,
    pub timestamp: i64,
}

/// every routed vertex of every leg of one station, in travel order.
#[derive(Clone, Debug, PartialEq)]
pub struct StationTimeline {
    pub station_id: StationId,
    pub vertices: Vec<TimedVertex>,
}

/// builds one timestamped polyline per station from its routed legs.
///
/// legs are grouped by station (ascending) and keep their order within a
/// group. the clock starts at the start time of the group's first leg. each
/// routed leg is subsampled and its duration is spread evenly across the kept
/// vertices; the clock advances before each vertex is stamped. legs without a
/// route contribute nothing.
pub fn synthesize(
    legs: &[TripLeg],
    settings: &SynthesisSettings,
) -> Result<Vec<StationTimeline>, SynthesisError> {
    let step = settings.subsample_step;
    if step == 0 {
        return Err(SynthesisError::InvalidStep(step));
    }

    let mut groups: BTreeMap<StationId, Vec<&TripLeg>> = BTreeMap::new();
    for leg in legs.iter() {
        groups.entry(leg.station_id).or_default().push(leg);
    }

    let mut timelines = Vec::with_capacity(groups.len());
    for (station_id, group) in groups.into_iter() {
        let Some(first) = group.first() else {
            continue;
        };
        let mut clock = epoch_seconds(first);
        let mut vertices = vec![];
        for leg in group.iter() {
            let Some(route) = &leg.route else {
                continue;
            };
            let kept = route.geometry.iter().step_by(step).collect::<Vec<_>>();
            if kept.is_empty() {
                log::debug!(
                    "station {station_id} incident {} has an empty route geometry",
                    leg.incident_id
                );
                continue;
            }
            if settings.clock_mode == ClockMode::LegStart {
                clock = clock.max(epoch_seconds(leg));
            }
            let increment = route.duration_seconds / kept.len() as f64;
            for coord in kept {
                clock += increment;
                vertices.push(TimedVertex {
                    lon: coord.x,
                    lat: coord.y,
                    timestamp: clock.trunc() as i64,
                });
            }
        }
        if vertices.is_empty() {
            log::info!("station {station_id} has no routed legs, omitting it from the output");
            continue;
        }
        timelines.push(StationTimeline {
            station_id,
            vertices,
        });
    }
    Ok(timelines)
}

fn epoch_seconds(leg: &TripLeg) -> f64 {
    leg.start.timestamp_millis() as f64 / 1000.0
}
