use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum TableError {
    #[error("failure reading '{path}': {message}")]
    Read { path: PathBuf, message: String },
    #[error("failed to deserialize row {row} of '{path}' due to: {message}")]
    Deserialize {
        path: PathBuf,
        row: usize,
        message: String,
    },
    #[error("no response records joined, check that the station and incident tables match the reports")]
    EmptyJoin,
}
