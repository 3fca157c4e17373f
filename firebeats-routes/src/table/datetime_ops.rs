use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::Error;
use serde::Deserialize;
use serde::Deserializer;

/// naive formats accepted for report timestamps, read as UTC. `%.f` accepts
/// a missing fractional part.
pub const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
];

/// offset-aware format written by dataframe exports, e.g. `2024-10-01 08:15:00+00:00`
pub const OFFSET_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f%:z";

pub const APP_DATE_FORMAT: &str = "%Y-%m-%d";

/// parses a report timestamp. RFC 3339 and offset-aware values keep their
/// offset; naive values and bare dates are taken as UTC.
pub fn parse_utc_datetime(value: &str) -> Result<DateTime<Utc>, String> {
    let value = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(value, OFFSET_DATETIME_FORMAT) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATETIME_FORMATS.iter() {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }
    NaiveDate::parse_from_str(value, APP_DATE_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| format!("Invalid datetime format: '{value}'"))
}

pub fn deserialize_utc_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let date_str: String = String::deserialize(deserializer)?;
    parse_utc_datetime(&date_str).map_err(D::Error::custom)
}

#[cfg(test)]
mod test {
    use super::parse_utc_datetime;

    #[test]
    fn test_accepted_formats_agree() {
        let expected = 1_727_770_500;
        let values = [
            "2024-10-01 08:15:00",
            "2024-10-01T08:15:00",
            "2024-10-01 08:15",
            "2024-10-01T08:15:00Z",
            "2024-10-01T10:15:00+02:00",
            "2024-10-01 08:15:00+00:00",
            "10/01/2024 08:15:00",
        ];
        for value in values {
            let parsed = parse_utc_datetime(value).expect("should parse");
            assert_eq!(parsed.timestamp(), expected, "value {value}");
        }
    }

    #[test]
    fn test_fractional_seconds_are_kept() {
        let parsed = parse_utc_datetime("2024-10-01 08:15:00.500").expect("should parse");
        assert_eq!(parsed.timestamp_millis(), 1_727_770_500_500);
    }

    #[test]
    fn test_bare_date_is_midnight() {
        let parsed = parse_utc_datetime("2024-10-01").expect("should parse");
        assert_eq!(parsed.timestamp(), 1_727_740_800);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(parse_utc_datetime("yesterday").is_err());
    }
}
