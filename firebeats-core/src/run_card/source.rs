use std::collections::HashMap;

use crate::zone::ZoneCode;

use super::RunCardError;

/// provides the raw run card (ordered facility codes) for a zone.
pub trait RunCardSource {
    fn run_card(&self, zone: &ZoneCode) -> Result<Vec<String>, RunCardError>;
}

/// in-memory run cards, keyed by zone.
impl RunCardSource for HashMap<ZoneCode, Vec<String>> {
    fn run_card(&self, zone: &ZoneCode) -> Result<Vec<String>, RunCardError> {
        self.get(zone)
            .cloned()
            .ok_or_else(|| RunCardError::MissingSource {
                zone: zone.canonical(),
                path: Default::default(),
            })
    }
}
