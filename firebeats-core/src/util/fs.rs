use std::path::{Path, PathBuf};

use super::FsError;

/// helper function to "mkdir -p path" - make all directories along a path
pub fn create_dirs<P>(path: P) -> Result<(), FsError>
where
    P: AsRef<Path>,
{
    let dirspath = path.as_ref();
    if dirspath.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(dirspath).map_err(|e| FsError::CreateDirectory {
        path: dirspath.to_path_buf(),
        message: e.to_string(),
    })
}

/// resolves an output filename against an optional output directory. if no
/// directory is provided, the current working directory is used.
pub fn output_path(output_directory: Option<&Path>, filename: &str) -> PathBuf {
    match output_directory {
        Some(dir) => dir.join(filename),
        None => PathBuf::from(filename),
    }
}
