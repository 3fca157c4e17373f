use geo::MultiPolygon;
use serde_json::Value;

/// one feature of the boundary dataset before grouping. a beat may be split
/// across several raw features.
#[derive(Clone, Debug)]
pub struct RawBeatFeature {
    /// zone label as stored in the boundary dataset, e.g. "7B"
    pub label: String,
    /// zone category column
    pub category: String,
    /// type column
    pub beat_type: String,
    pub geometry: MultiPolygon<f64>,
}

/// names of the attribute columns read from the boundary dataset.
#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct BeatColumns {
    pub name: String,
    pub category: String,
    pub beat_type: String,
}

impl Default for BeatColumns {
    fn default() -> Self {
        Self {
            name: String::from("NAME"),
            category: String::from("ZONE"),
            beat_type: String::from("TYPE"),
        }
    }
}

/// reads a GeoJSON property as text. numeric labels are common in beat
/// datasets, so numbers are rendered without a fractional part when integral.
pub(crate) fn property_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Some(i.to_string()),
            None => n.as_f64().map(format_number),
        },
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

pub(crate) fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}
