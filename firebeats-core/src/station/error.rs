#[derive(thiserror::Error, Debug)]
pub enum StationError {
    #[error("facility code '{code}' survived filtering but has no station number: {message}")]
    Resolution { code: String, message: String },
}
