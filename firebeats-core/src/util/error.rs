use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum FsError {
    #[error("error building output directory '{path}': {message}")]
    CreateDirectory { path: PathBuf, message: String },
}
