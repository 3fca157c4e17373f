mod error;
mod facility_code;
mod facility_rules;
mod resolver;
mod station_id;

pub use error::StationError;
pub use facility_code::FacilityCode;
pub use facility_rules::{FacilityRules, StationConsolidation};
pub use resolver::StationResolver;
pub use station_id::StationId;
