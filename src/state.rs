use crate::controls::ControlTable;
use crate::document::Document;
use crate::scoreboard::Scoreboard;
use crate::storage::LocalStorage;
use crate::theme::ThemeToggle;
use crate::weather::render::weather_page;
use std::sync::Arc;
use tokio::sync::Mutex;

// Lock order: `theme`, then `weather_page`.
#[derive(Clone)]
pub struct AppState {
    pub scoreboard: Arc<Mutex<Scoreboard>>,
    pub controls: Arc<ControlTable>,
    pub weather_page: Arc<Mutex<Document>>,
    pub theme: Arc<Mutex<ThemeToggle>>,
}

impl AppState {
    pub async fn load(storage: LocalStorage) -> Self {
        let scoreboard = Scoreboard::load(storage.clone()).await;
        let theme = ThemeToggle::load(storage).await;

        let mut page = weather_page();
        theme.current().apply(&mut page);

        Self {
            scoreboard: Arc::new(Mutex::new(scoreboard)),
            controls: Arc::new(ControlTable::standard()),
            weather_page: Arc::new(Mutex::new(page)),
            theme: Arc::new(Mutex::new(theme)),
        }
    }
}
