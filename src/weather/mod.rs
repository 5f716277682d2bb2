pub mod client;
pub mod codes;
pub mod poller;
pub mod render;
pub mod types;

pub use client::{Location, WeatherClient, WeatherError};
pub use poller::WeatherService;

#[cfg(test)]
pub(crate) mod fixtures {
    use super::types::ForecastResponse;

    pub fn sample_body() -> serde_json::Value {
        serde_json::json!({
            "current_weather": {"temperature": 21.6, "windspeed": 11.2, "weathercode": 2, "time": "2026-10-17T15:00"},
            "hourly": {
                "time": ["2026-10-17T14:00", "2026-10-17T15:00"],
                "relativehumidity_2m": [70, 64],
                "apparent_temperature": [20.2, 21.5]
            },
            "daily": {
                "time": ["2026-10-17", "2026-10-18"],
                "temperature_2m_max": [24.4, 19.5],
                "temperature_2m_min": [13.1, 11.6],
                "weathercode": [2, 63]
            }
        })
    }

    pub fn sample_forecast() -> ForecastResponse {
        serde_json::from_value(sample_body()).expect("fixture decodes")
    }
}
