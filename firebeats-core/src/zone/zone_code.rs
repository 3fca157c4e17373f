use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::ZoneError;

/// canonical identifier for a fire beat, built from a raw zone label such as
/// `"3"`, `"07B"` or `"12 "`. the label's leading run of decimal digits becomes
/// the numeric part and the remainder is kept verbatim as the suffix.
///
/// rendered as the numeric part zero-padded to width 2 followed by the suffix,
/// so `"3"` becomes `"03"` and `"07B"` stays `"07B"`. rendering a parsed code and
/// parsing it again always yields the same code.
///
/// codes order by numeric part first, then suffix, which matches the ordering
/// of the rendered strings for all two-digit beats.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZoneCode {
    numeric: u32,
    suffix: String,
}

impl ZoneCode {
    /// numeric width used when rendering canonical codes
    pub const NUMERIC_WIDTH: usize = 2;

    pub fn new(numeric: u32, suffix: &str) -> ZoneCode {
        ZoneCode {
            numeric,
            suffix: suffix.to_string(),
        }
    }

    /// splits a raw label into its numeric prefix and suffix. surrounding
    /// whitespace is ignored, since DBF text columns arrive space padded.
    pub fn parse(raw: &str) -> Result<ZoneCode, ZoneError> {
        let label = raw.trim();
        let split = label
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(idx, _)| idx)
            .unwrap_or(label.len());
        if split == 0 {
            return Err(ZoneError::Format(raw.to_string()));
        }
        let (digits, suffix) = label.split_at(split);
        let numeric = digits
            .parse::<u32>()
            .map_err(|e| ZoneError::NumericPrefix {
                label: raw.to_string(),
                message: e.to_string(),
            })?;
        Ok(ZoneCode::new(numeric, suffix))
    }

    pub fn numeric(&self) -> u32 {
        self.numeric
    }

    /// alphabetic remainder of the label, empty for purely numeric beats
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl Display for ZoneCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:0width$}{}",
            self.numeric,
            self.suffix,
            width = Self::NUMERIC_WIDTH
        )
    }
}

impl FromStr for ZoneCode {
    type Err = ZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ZoneCode::parse(s)
    }
}

impl TryFrom<&str> for ZoneCode {
    type Error = ZoneError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        ZoneCode::parse(value)
    }
}

impl Serialize for ZoneCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.canonical())
    }
}

impl<'de> Deserialize<'de> for ZoneCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        ZoneCode::parse(&raw).map_err(serde::de::Error::custom)
    }
}
