use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::zone::ZoneCode;

use super::{RunCardError, RunCardSource};

/// a row of a run card export. only the order value is read.
#[derive(Deserialize, Clone, Debug)]
pub struct RunCardRecord {
    #[serde(rename = "OrderValue")]
    pub order_value: String,
}

/// reads run cards exported as one CSV file per zone, named
/// `<prefix><ZoneCode>.csv` (for example `BEAT-07B.csv`).
#[derive(Clone, Debug)]
pub struct DirectoryRunCardSource {
    directory: PathBuf,
    file_prefix: String,
}

impl DirectoryRunCardSource {
    pub const DEFAULT_FILE_PREFIX: &'static str = "BEAT-";

    pub fn new(directory: &Path, file_prefix: Option<&str>) -> DirectoryRunCardSource {
        DirectoryRunCardSource {
            directory: directory.to_path_buf(),
            file_prefix: file_prefix
                .unwrap_or(Self::DEFAULT_FILE_PREFIX)
                .to_string(),
        }
    }

    pub fn path_for(&self, zone: &ZoneCode) -> PathBuf {
        self.directory
            .join(format!("{}{}.csv", self.file_prefix, zone.canonical()))
    }
}

impl RunCardSource for DirectoryRunCardSource {
    fn run_card(&self, zone: &ZoneCode) -> Result<Vec<String>, RunCardError> {
        let path = self.path_for(zone);
        if !path.is_file() {
            return Err(RunCardError::MissingSource {
                zone: zone.canonical(),
                path,
            });
        }
        let read_err = |message: String| RunCardError::Read {
            zone: zone.canonical(),
            path: path.clone(),
            message,
        };
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&path)
            .map_err(|e| read_err(e.to_string()))?;
        reader
            .deserialize::<RunCardRecord>()
            .map(|row| {
                row.map(|r| r.order_value)
                    .map_err(|e| read_err(e.to_string()))
            })
            .filter(|row| !matches!(row, Ok(v) if v.is_empty()))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::DirectoryRunCardSource;
    use crate::{
        run_card::{RunCardError, RunCardSource},
        zone::ZoneCode,
    };

    #[test]
    fn test_reads_order_values_in_file_order() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let contents = "Sequence,OrderValue\n1,FD/S04\n2,FD/SQ01\n3,\n4,FD/S02\n";
        std::fs::write(dir.path().join("BEAT-07B.csv"), contents).expect("should write");
        let source = DirectoryRunCardSource::new(dir.path(), None);
        let zone = ZoneCode::parse("7B").expect("should parse");
        let card = source.run_card(&zone).expect("should read");
        assert_eq!(card, vec!["FD/S04", "FD/SQ01", "FD/S02"]);
    }

    #[test]
    fn test_missing_file_is_reported() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let source = DirectoryRunCardSource::new(dir.path(), Some("CARD_"));
        let zone = ZoneCode::parse("3").expect("should parse");
        match source.run_card(&zone) {
            Err(RunCardError::MissingSource { zone, path }) => {
                assert_eq!(zone, "03");
                assert!(path.ends_with("CARD_03.csv"));
            }
            other => panic!("expected missing source, found {other:?}"),
        }
    }
}
