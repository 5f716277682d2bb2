use crate::weather::client::DEFAULT_API_BASE;
use std::{env, path::PathBuf, time::Duration};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATA_PATH: &str = "data/storage.json";
const DEFAULT_POLL_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub data_path: PathBuf,
    pub weather_api_base: String,
    pub weather_interval: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            weather_api_base: DEFAULT_API_BASE.to_string(),
            weather_interval: Duration::from_secs(DEFAULT_POLL_SECS),
        }
    }
}

impl AppConfig {
    // Unset or unparsable variables keep their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(defaults.port);

        let data_path = env::var("APP_DATA_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_path);

        let weather_api_base = env::var("WEATHER_API_BASE")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(defaults.weather_api_base);

        let weather_interval = env::var("WEATHER_POLL_SECS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
            .unwrap_or(defaults.weather_interval);

        Self {
            port,
            data_path,
            weather_api_base,
            weather_interval,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_poll_every_two_minutes() {
        let config = AppConfig::default();
        assert_eq!(config.weather_interval, Duration::from_secs(120));
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_path, PathBuf::from("data/storage.json"));
        assert!(config.weather_api_base.starts_with("https://api.open-meteo.com"));
    }
}
