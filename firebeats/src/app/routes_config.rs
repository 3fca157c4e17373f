use std::time::Duration;

use firebeats_routes::timeline::SynthesisSettings;
use serde::{Deserialize, Serialize};

use super::FirebeatsAppError;

/// the `[routes]` table of a configuration file.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RoutesConfig {
    pub stations_file: String,
    pub incidents_file: String,
    pub station_report_file: String,
    pub incident_report_file: String,
    #[serde(default = "default_osrm_url")]
    pub osrm_url: String,
    /// pause between routing requests, such as "100ms"
    #[serde(default = "default_request_delay")]
    pub request_delay: String,
    /// per-request timeout, such as "10s"
    #[serde(default = "default_request_timeout")]
    pub request_timeout: String,
    #[serde(default)]
    pub synthesis: SynthesisSettings,
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

impl RoutesConfig {
    pub fn request_delay(&self) -> Result<Duration, FirebeatsAppError> {
        parse_duration("request_delay", &self.request_delay)
    }

    pub fn request_timeout(&self) -> Result<Duration, FirebeatsAppError> {
        parse_duration("request_timeout", &self.request_timeout)
    }
}

fn parse_duration(key: &str, value: &str) -> Result<Duration, FirebeatsAppError> {
    humantime::parse_duration(value).map_err(|e| {
        FirebeatsAppError::InvalidUserInput(format!("routes.{key} '{value}' is not a duration: {e}"))
    })
}

fn default_osrm_url() -> String {
    String::from("http://localhost:5000")
}

fn default_request_delay() -> String {
    String::from("100ms")
}

fn default_request_timeout() -> String {
    String::from("10s")
}

fn default_output_file() -> String {
    String::from("routes.json")
}

#[cfg(test)]
mod test {
    use super::RoutesConfig;
    use firebeats_routes::timeline::{ClockMode, DEFAULT_SUBSAMPLE_STEP};
    use std::time::Duration;

    fn config(extra: &str) -> RoutesConfig {
        let text = format!(
            r#"{{
                "stations_file": "stations.csv",
                "incidents_file": "incidents.csv",
                "station_report_file": "station_report.csv",
                "incident_report_file": "incident_report.csv"{extra}
            }}"#
        );
        serde_json::from_str(&text).expect("test invariant failed: bad config")
    }

    #[test]
    fn test_defaults() {
        let conf = config("");
        assert_eq!(conf.request_delay().expect("valid"), Duration::from_millis(100));
        assert_eq!(conf.request_timeout().expect("valid"), Duration::from_secs(10));
        assert_eq!(conf.synthesis.subsample_step, DEFAULT_SUBSAMPLE_STEP);
        assert_eq!(conf.synthesis.clock_mode, ClockMode::Continuous);
        assert_eq!(conf.output_file, "routes.json");
    }

    #[test]
    fn test_overrides() {
        let conf = config(
            r#", "request_delay": "1s 500ms", "synthesis": {"subsample_step": 3, "clock_mode": "leg_start"}"#,
        );
        assert_eq!(conf.request_delay().expect("valid"), Duration::from_millis(1500));
        assert_eq!(conf.synthesis.subsample_step, 3);
        assert_eq!(conf.synthesis.clock_mode, ClockMode::LegStart);
    }

    #[test]
    fn test_bad_duration() {
        let conf = config(r#", "request_timeout": "soon""#);
        assert!(conf.request_timeout().is_err());
    }
}
