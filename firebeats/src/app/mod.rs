mod beats;
mod beats_config;
mod config_ops;
mod error;
mod firebeats_app;
mod inspect;
mod routes;
mod routes_config;

pub use beats::run_beats;
pub use beats_config::{BeatsConfig, BeatsOutputs};
pub use config_ops::read_config_key;
pub use error::FirebeatsAppError;
pub use firebeats_app::{FirebeatsApp, FirebeatsOperation};
pub use inspect::{inspect_matrix, MatrixSummary};
pub use routes::{run_routes, run_routes_with};
pub use routes_config::RoutesConfig;
