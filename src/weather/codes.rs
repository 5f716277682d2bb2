// WMO codes, see https://open-meteo.com/en/docs#weathervariables

pub const UNKNOWN_TEXT: &str = "—";
pub const UNKNOWN_ICON: &str = "unknown";

pub fn weather_code_to_text(code: i64) -> &'static str {
    match code {
        0 => "Céu limpo",
        1 => "Principalmente limpo",
        2 => "Parcialmente nublado",
        3 => "Nublado",
        45 => "Nevoeiro",
        48 => "Depósito de neblina",
        51 => "Chuvisco leve",
        53 => "Chuvisco",
        55 => "Chuvisco forte",
        61 => "Chuva fraca",
        63 => "Chuva",
        65 => "Chuva forte",
        71 => "Neve fraca",
        73 => "Neve",
        75 => "Neve forte",
        80 => "Aguaceiros",
        81 => "Aguaceiros fortes",
        82 => "Aguaceiros muito fortes",
        95 => "Tempestade",
        _ => UNKNOWN_TEXT,
    }
}

pub fn weather_code_to_icon_name(code: i64) -> &'static str {
    match code {
        0 => "sun",
        1 | 2 => "partly_cloudy",
        3 => "cloudy",
        45 | 48 => "fog",
        51 | 53 | 55 => "drizzle",
        61 | 63 | 80 | 81 => "rain",
        65 | 82 | 95 => "storm",
        71 | 73 | 75 => "snow",
        _ => UNKNOWN_ICON,
    }
}

pub fn icon_path(name: &str) -> String {
    format!("icons/{name}.svg")
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: [(i64, &str, &str); 19] = [
        (0, "Céu limpo", "sun"),
        (1, "Principalmente limpo", "partly_cloudy"),
        (2, "Parcialmente nublado", "partly_cloudy"),
        (3, "Nublado", "cloudy"),
        (45, "Nevoeiro", "fog"),
        (48, "Depósito de neblina", "fog"),
        (51, "Chuvisco leve", "drizzle"),
        (53, "Chuvisco", "drizzle"),
        (55, "Chuvisco forte", "drizzle"),
        (61, "Chuva fraca", "rain"),
        (63, "Chuva", "rain"),
        (65, "Chuva forte", "storm"),
        (71, "Neve fraca", "snow"),
        (73, "Neve", "snow"),
        (75, "Neve forte", "snow"),
        (80, "Aguaceiros", "rain"),
        (81, "Aguaceiros fortes", "rain"),
        (82, "Aguaceiros muito fortes", "storm"),
        (95, "Tempestade", "storm"),
    ];

    #[test]
    fn known_codes_match_table() {
        for (code, text, icon) in TABLE {
            assert_eq!(weather_code_to_text(code), text, "text for {code}");
            assert_eq!(weather_code_to_icon_name(code), icon, "icon for {code}");
        }
    }

    #[test]
    fn unknown_codes_fall_back() {
        assert_eq!(weather_code_to_text(999), "—");
        assert_eq!(weather_code_to_icon_name(999), "unknown");
        assert_eq!(weather_code_to_text(96), UNKNOWN_TEXT);
        assert_eq!(weather_code_to_icon_name(-1), UNKNOWN_ICON);
    }

    #[test]
    fn icon_paths_live_under_icons() {
        assert_eq!(icon_path("storm"), "icons/storm.svg");
    }
}
