use crate::weather::types::ForecastResponse;
use reqwest::Client;
use std::time::Duration;
use tracing::warn;

pub const DEFAULT_API_BASE: &str = "https://api.open-meteo.com/v1/forecast";
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: &'static str,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            latitude: -25.0905,
            longitude: -50.1638,
            timezone: "America/Sao_Paulo",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Erro na API")]
    Api,
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
    location: Location,
}

impl WeatherClient {
    pub fn new(base_url: impl Into<String>, location: Location) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            location,
        })
    }

    pub fn forecast_url(&self) -> String {
        let timezone: String =
            url::form_urlencoded::byte_serialize(self.location.timezone.as_bytes()).collect();
        format!(
            "{}?latitude={}&longitude={}&current_weather=true\
             &hourly=relativehumidity_2m,apparent_temperature\
             &daily=temperature_2m_max,temperature_2m_min,weathercode\
             &timezone={}",
            self.base_url, self.location.latitude, self.location.longitude, timezone
        )
    }

    pub async fn fetch_weather(&self) -> Result<ForecastResponse, WeatherError> {
        let response = self.client.get(self.forecast_url()).send().await?;
        if !response.status().is_success() {
            warn!(status = %response.status(), "weather API returned an error status");
            return Err(WeatherError::Api);
        }
        Ok(response.json().await?)
    }
}
