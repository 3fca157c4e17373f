#[derive(thiserror::Error, Debug)]
pub enum SynthesisError {
    #[error("subsample step must be at least 1, found {0}")]
    InvalidStep(usize),
    #[error("failure writing animated routes to '{path}': {message}")]
    Write { path: String, message: String },
}
