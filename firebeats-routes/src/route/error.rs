use geo::Coord;

#[derive(thiserror::Error, Debug)]
pub enum RouteError {
    #[error("no route available from ({},{}) to ({},{}): {message}", .origin.x, .origin.y, .destination.x, .destination.y)]
    Unavailable {
        origin: Coord<f64>,
        destination: Coord<f64>,
        message: String,
    },
    #[error("failed to build routing client: {0}")]
    Client(String),
}
