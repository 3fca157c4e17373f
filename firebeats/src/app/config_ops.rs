use std::path::Path;

use config::{Config, File};
use serde::de::DeserializeOwned;

use super::FirebeatsAppError;

/// reads one top-level table of a configuration file into `T`.
pub fn read_config_key<T>(configuration_file: &str, key: &str) -> Result<T, FirebeatsAppError>
where
    T: DeserializeOwned,
{
    let filepath = Path::new(configuration_file);
    let config = Config::builder()
        .add_source(File::from(filepath))
        .build()
        .map_err(|e| {
            let msg = format!("file '{configuration_file}' produced error: {e}");
            FirebeatsAppError::InvalidUserInput(msg)
        })?;
    config.get::<T>(key).map_err(|e| {
        let msg = format!("error reading '{key}' key in '{configuration_file}': {e}");
        FirebeatsAppError::InvalidUserInput(msg)
    })
}
