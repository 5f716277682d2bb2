use crate::controls::{Command, dispatch};
use crate::document::Document;
use crate::errors::AppError;
use crate::models::{CommandRequest, SimulateResponse, ThemeResponse};
use crate::scoreboard::ScoreState;
use crate::simulate::ServerSnapshot;
use crate::state::AppState;
use crate::theme::Theme;
use crate::ui::{render_scoreboard, render_weather};
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Json,
};
use tracing::debug;

pub async fn scoreboard_page(State(state): State<AppState>) -> Html<String> {
    let board = state.scoreboard.lock().await;
    Html(render_scoreboard(board.page(), &state.controls))
}

pub async fn get_scoreboard(State(state): State<AppState>) -> Json<ScoreState> {
    let board = state.scoreboard.lock().await;
    Json(board.state().clone())
}

pub async fn scoreboard_command(
    State(state): State<AppState>,
    Json(payload): Json<CommandRequest>,
) -> Result<Json<ScoreState>, AppError> {
    let mut board = state.scoreboard.lock().await;
    match Command::parse(&payload.action, &payload.target) {
        Some(command) => dispatch(&mut board, &command).await?,
        None => debug!(
            action = %payload.action,
            target = %payload.target,
            "ignoring unrecognized scoreboard command"
        ),
    }
    Ok(Json(board.state().clone()))
}

pub async fn scoreboard_control(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    match state.controls.find(&id) {
        Some(command) => {
            let mut board = state.scoreboard.lock().await;
            dispatch(&mut board, command).await?;
        }
        None => debug!(control = %id, "ignoring unregistered control"),
    }
    Ok(Redirect::to("/"))
}

pub async fn simulate(State(state): State<AppState>) -> Json<SimulateResponse> {
    let snapshot = ServerSnapshot::random(&mut rand::thread_rng());
    let mut board = state.scoreboard.lock().await;
    snapshot.apply(board.page_mut());
    Json(snapshot.into())
}

pub async fn weather_page(State(state): State<AppState>) -> Html<String> {
    let page = state.weather_page.lock().await;
    Html(render_weather(&page))
}

pub async fn get_weather(State(state): State<AppState>) -> Json<Document> {
    let page = state.weather_page.lock().await;
    Json(page.clone())
}

pub async fn toggle_theme(State(state): State<AppState>) -> Result<Json<ThemeResponse>, AppError> {
    let theme = apply_toggle(&state).await?;
    Ok(Json(ThemeResponse { theme }))
}

pub async fn toggle_theme_form(State(state): State<AppState>) -> Result<Redirect, AppError> {
    apply_toggle(&state).await?;
    Ok(Redirect::to("/weather"))
}

async fn apply_toggle(state: &AppState) -> Result<Theme, AppError> {
    let mut theme = state.theme.lock().await;
    let mut page = state.weather_page.lock().await;
    theme.toggle(&mut page).await
}
