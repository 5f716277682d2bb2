pub mod app;
pub mod config;
pub mod controls;
pub mod document;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod scoreboard;
pub mod simulate;
pub mod state;
pub mod storage;
pub mod theme;
pub mod ui;
pub mod weather;

pub use app::router;
pub use config::AppConfig;
pub use state::AppState;
pub use storage::LocalStorage;
