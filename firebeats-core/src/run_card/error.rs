use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum RunCardError {
    #[error("run card for zone {zone} not found at '{path}'")]
    MissingSource { zone: String, path: PathBuf },
    #[error("failure reading run card for zone {zone} from '{path}': {message}")]
    Read {
        zone: String,
        path: PathBuf,
        message: String,
    },
}
