use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ForecastResponse {
    pub current_weather: CurrentWeather,
    pub hourly: HourlySeries,
    pub daily: DailySeries,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub weathercode: i64,
    pub windspeed: f64,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HourlySeries {
    pub time: Vec<String>,
    pub relativehumidity_2m: Vec<Option<f64>>,
    pub apparent_temperature: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DailySeries {
    pub time: Vec<String>,
    pub temperature_2m_max: Vec<Option<f64>>,
    pub temperature_2m_min: Vec<Option<f64>>,
    pub weathercode: Vec<Option<i64>>,
}

impl HourlySeries {
    pub fn index_of(&self, time: &str) -> Option<usize> {
        self.time.iter().position(|entry| entry == time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_open_meteo_body_with_nulls() {
        let body = r#"{
            "latitude": -25.125,
            "current_weather": {"temperature": 18.4, "windspeed": 9.7, "winddirection": 90, "weathercode": 3, "time": "2026-10-17T14:00"},
            "hourly": {
                "time": ["2026-10-17T13:00", "2026-10-17T14:00"],
                "relativehumidity_2m": [80, null],
                "apparent_temperature": [17.1, null]
            },
            "daily": {
                "time": ["2026-10-17"],
                "temperature_2m_max": [22.3],
                "temperature_2m_min": [12.8],
                "weathercode": [61]
            }
        }"#;

        let parsed: ForecastResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.current_weather.weathercode, 3);
        assert_eq!(parsed.hourly.index_of("2026-10-17T14:00"), Some(1));
        assert_eq!(parsed.hourly.relativehumidity_2m[1], None);
        assert_eq!(parsed.hourly.index_of("2026-10-17T14:15"), None);
        assert_eq!(parsed.daily.weathercode, vec![Some(61)]);
    }
}
