use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::scoreboard_page))
        .route("/api/scoreboard", get(handlers::get_scoreboard))
        .route("/api/scoreboard/command", post(handlers::scoreboard_command))
        .route("/scoreboard/control/:id", post(handlers::scoreboard_control))
        .route("/api/simulate", post(handlers::simulate))
        .route("/weather", get(handlers::weather_page))
        .route("/api/weather", get(handlers::get_weather))
        .route("/api/theme/toggle", post(handlers::toggle_theme))
        .route("/theme/toggle", post(handlers::toggle_theme_form))
        .with_state(state)
}
