use thiserror::Error;

use crate::n2yo::DEFAULT_BASE_URL;
use crate::station::GroundStation;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is required")]
    Missing(&'static str),
    #[error("environment variable {0} has an invalid value: {1}")]
    Invalid(&'static str, String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub web: WebConfig,
    pub station: GroundStation,
    pub n2yo: N2yoConfig,
    pub tracking: TrackingConfig,
}

#[derive(Debug, Clone)]
pub struct WebConfig {
    pub bind: String,
}

#[derive(Debug, Clone)]
pub struct N2yoConfig {
    pub api_key: String,
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct TrackingConfig {
    pub default_satellite_id: u32,
    pub above_category_id: u32,
    pub above_radius_deg: u32,
    pub visibility_window_s: u32,
}

impl Config {
    /// Read the whole configuration from the process environment.
    /// Everything except the API key has a usable default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("N2YO_API_KEY").ok_or(ConfigError::Missing("N2YO_API_KEY"))?;

        Ok(Config {
            web: WebConfig {
                bind: lookup("TRACK_BIND").unwrap_or_else(default_bind),
            },
            station: GroundStation {
                latitude_deg: parsed(&lookup, "TRACK_LAT", 0.0)?,
                longitude_deg: parsed(&lookup, "TRACK_LNG", 0.0)?,
                altitude_m: parsed(&lookup, "TRACK_ALT", 0.0)?,
            },
            n2yo: N2yoConfig {
                api_key,
                base_url: lookup("N2YO_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            },
            tracking: TrackingConfig {
                // 25544 is the ISS
                default_satellite_id: parsed(&lookup, "TRACK_SAT_ID", 25544)?,
                above_category_id: parsed(&lookup, "TRACK_ABOVE_CATEGORY", 3)?,
                above_radius_deg: parsed(&lookup, "TRACK_ABOVE_RADIUS", 70)?,
                visibility_window_s: parsed(&lookup, "TRACK_VISIBILITY_WINDOW", 300)?,
            },
        })
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn parsed<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid(name, raw)),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn api_key_is_required() {
        let err = Config::from_lookup(env(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("N2YO_API_KEY")));
    }

    #[test]
    fn defaults_apply_when_only_the_key_is_set() {
        let config = Config::from_lookup(env(&[("N2YO_API_KEY", "SECRET")])).unwrap();
        assert_eq!(config.n2yo.api_key, "SECRET");
        assert_eq!(config.n2yo.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.web.bind, "0.0.0.0:8080");
        assert_eq!(config.station.latitude_deg, 0.0);
        assert_eq!(config.tracking.default_satellite_id, 25544);
        assert_eq!(config.tracking.above_category_id, 3);
        assert_eq!(config.tracking.above_radius_deg, 70);
        assert_eq!(config.tracking.visibility_window_s, 300);
    }

    #[test]
    fn station_coordinates_come_from_the_environment() {
        let config = Config::from_lookup(env(&[
            ("N2YO_API_KEY", "SECRET"),
            ("TRACK_LAT", "54.321358"),
            ("TRACK_LNG", "10.134532"),
            ("TRACK_ALT", "12.5"),
            ("TRACK_SAT_ID", "43017"),
        ]))
        .unwrap();
        assert_eq!(config.station.latitude_deg, 54.321358);
        assert_eq!(config.station.longitude_deg, 10.134532);
        assert_eq!(config.station.altitude_m, 12.5);
        assert_eq!(config.tracking.default_satellite_id, 43017);
    }

    #[test]
    fn unparseable_numbers_are_rejected() {
        let err = Config::from_lookup(env(&[
            ("N2YO_API_KEY", "SECRET"),
            ("TRACK_LAT", "north"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("TRACK_LAT", _)));
    }
}
