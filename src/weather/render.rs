use crate::document::{Document, escape_html};
use crate::weather::codes::{
    UNKNOWN_ICON, UNKNOWN_TEXT, icon_path, weather_code_to_icon_name, weather_code_to_text,
};
use crate::weather::types::ForecastResponse;
use chrono::{Locale, NaiveDate, NaiveTime};

pub const STATUS_UPDATING: &str = "Atualizando...";
pub const STATUS_FAILED: &str = "Erro ao atualizar";

pub const TEMP_ID: &str = "temp";
pub const WEATHER_ID: &str = "weather";
pub const ICON_ID: &str = "icon";
pub const WIND_ID: &str = "wind";
pub const HUMIDITY_ID: &str = "humidity";
pub const FEELS_ID: &str = "feels";
pub const CARDS_ID: &str = "cards";
pub const UPDATED_ID: &str = "updated";
pub const THEME_TOGGLE_ID: &str = "theme-toggle";

const PLACEHOLDER: &str = "—";

pub fn weather_page() -> Document {
    let mut page = Document::with_ids([
        TEMP_ID,
        WEATHER_ID,
        ICON_ID,
        WIND_ID,
        HUMIDITY_ID,
        FEELS_ID,
        CARDS_ID,
        UPDATED_ID,
        THEME_TOGGLE_ID,
    ]);
    for id in [TEMP_ID, WEATHER_ID, WIND_ID, HUMIDITY_ID, FEELS_ID] {
        page.set_text(id, PLACEHOLDER);
    }
    page.set_attr(ICON_ID, "src", icon_path("unknown"));
    page.set_attr(ICON_ID, "alt", PLACEHOLDER);
    page.set_text(UPDATED_ID, STATUS_UPDATING);
    page
}

// Humidity and feels-like only change on an exact timestamp match.
pub fn render_forecast(page: &mut Document, forecast: &ForecastResponse, now: NaiveTime) {
    let current = &forecast.current_weather;
    let text = weather_code_to_text(current.weathercode);

    page.set_text(TEMP_ID, format!("{} °C", round_half_up(current.temperature)));
    page.set_text(WEATHER_ID, text);
    page.set_attr(
        ICON_ID,
        "src",
        icon_path(weather_code_to_icon_name(current.weathercode)),
    );
    page.set_attr(ICON_ID, "alt", text);
    page.set_text(WIND_ID, format!("Vento: {} m/s", current.windspeed));

    if let Some(index) = forecast.hourly.index_of(&current.time) {
        if let Some(Some(humidity)) = forecast.hourly.relativehumidity_2m.get(index) {
            page.set_text(HUMIDITY_ID, format!("{humidity}%"));
        }
        if let Some(Some(feels)) = forecast.hourly.apparent_temperature.get(index) {
            page.set_text(FEELS_ID, format!("{} °C", round_half_up(*feels)));
        }
    }

    page.replace_children(CARDS_ID, day_cards(forecast));
    page.set_text(UPDATED_ID, updated_label(now));
}

pub fn render_failure(page: &mut Document) {
    page.set_text(UPDATED_ID, STATUS_FAILED);
}

fn day_cards(forecast: &ForecastResponse) -> Vec<String> {
    let daily = &forecast.daily;
    daily
        .time
        .iter()
        .zip(&daily.temperature_2m_max)
        .zip(&daily.temperature_2m_min)
        .zip(&daily.weathercode)
        .map(|(((date, max), min), code)| {
            let text = escape_html(code.map_or(UNKNOWN_TEXT, weather_code_to_text));
            let icon = icon_path(code.map_or(UNKNOWN_ICON, weather_code_to_icon_name));
            format!(
                "<div class=\"day\"><h4>{}</h4><div class=\"day-icon\"><img src=\"{}\" alt=\"{}\"></div>\
                 <p>Máx: {} °C</p><p>Min: {} °C</p></div>",
                escape_html(&day_label(date)),
                escape_html(&icon),
                text,
                round_half_up(max.unwrap_or_default()),
                round_half_up(min.unwrap_or_default())
            )
        })
        .collect()
}

pub fn day_label(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(day) => day
            .format_localized("%a., %-d de %b.", Locale::pt_BR)
            .to_string(),
        Err(_) => date.to_string(),
    }
}

pub fn updated_label(now: NaiveTime) -> String {
    format!("Última atualização: {}", now.format("%H:%M:%S"))
}

// Same as JavaScript's Math.round.
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
