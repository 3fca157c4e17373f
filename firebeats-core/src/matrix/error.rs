use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum MatrixError {
    #[error("matrix is not rectangular: row {row} has {found} entries, expected {expected}")]
    Jagged {
        row: String,
        found: usize,
        expected: usize,
    },
    #[error("zone {0} was added to the run-order matrix twice")]
    DuplicateZone(String),
    #[error("matrix dimension {0} does not fit in a 32-bit header")]
    DimensionOverflow(usize),
    #[error("failure decoding matrix: {0}")]
    Decode(String),
    #[error("i/o failure on matrix stream: {0}")]
    Io(#[from] std::io::Error),
    #[error("failure accessing matrix file '{path}': {message}")]
    File { path: PathBuf, message: String },
}
