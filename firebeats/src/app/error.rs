use firebeats_core::{matrix::MatrixError, util::FsError, zone::ZoneError};
use firebeats_geo::beat::BeatError;
use firebeats_routes::{route::RouteError, table::TableError, timeline::SynthesisError};

#[derive(thiserror::Error, Debug)]
pub enum FirebeatsAppError {
    #[error("Invalid input: {0}")]
    InvalidUserInput(String),
    #[error(transparent)]
    Fs(#[from] FsError),
    #[error(transparent)]
    Zone(#[from] ZoneError),
    #[error(transparent)]
    Matrix(#[from] MatrixError),
    #[error(transparent)]
    Beat(#[from] BeatError),
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
}
