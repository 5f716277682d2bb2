use scoreboard_weather::{
    router,
    weather::{Location, WeatherClient, WeatherService},
    AppConfig, AppState, LocalStorage,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::fs;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = AppConfig::from_env();
    if let Some(parent) = config.data_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let storage = LocalStorage::open(&config.data_path).await;
    let state = AppState::load(storage).await;

    let client = WeatherClient::new(config.weather_api_base.clone(), Location::default())?;
    let poller = WeatherService::new(client, Arc::clone(&state.weather_page))
        .spawn_polling(config.weather_interval);

    let app = router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    poller.abort();
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
