use crate::document::Document;
use crate::errors::AppError;
use crate::storage::LocalStorage;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

pub const STATE_KEY: &str = "cs_state";
pub const DEFAULT_COUNTERS: [&str; 4] = ["kills", "deaths", "scoreA", "scoreB"];

pub const PLAYERS_ID: &str = "players";
pub const UPTIME_ID: &str = "server-uptime";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreState(BTreeMap<String, u64>);

impl Default for ScoreState {
    fn default() -> Self {
        Self(
            DEFAULT_COUNTERS
                .iter()
                .map(|name| (name.to_string(), 0))
                .collect(),
        )
    }
}

impl ScoreState {
    pub fn get(&self, name: &str) -> Option<u64> {
        self.0.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(name, value)| (name.as_str(), *value))
    }

    fn entry(&mut self, name: &str) -> &mut u64 {
        self.0.entry(name.to_string()).or_insert(0)
    }
}

// Mutations are committed to memory and the page only after they persist.
#[derive(Debug)]
pub struct Scoreboard {
    state: ScoreState,
    storage: LocalStorage,
    page: Document,
}

impl Scoreboard {
    pub async fn load(storage: LocalStorage) -> Self {
        let state = load_state(&storage).await;
        let mut page = Document::with_ids(
            DEFAULT_COUNTERS
                .iter()
                .copied()
                .chain([PLAYERS_ID, UPTIME_ID]),
        );
        page.set_text(PLAYERS_ID, "0");
        page.set_text(UPTIME_ID, "Uptime: 0m 0s");

        let mut board = Self {
            state,
            storage,
            page,
        };
        board.render();
        board
    }

    pub fn state(&self) -> &ScoreState {
        &self.state
    }

    pub fn page(&self) -> &Document {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Document {
        &mut self.page
    }

    pub async fn save(&self) -> Result<(), AppError> {
        persist_state(&self.storage, &self.state).await
    }

    pub async fn change(&mut self, target: &str, delta: i64) -> Result<u64, AppError> {
        let mut next = self.state.clone();
        let value = next.entry(target);
        *value = if delta < 0 {
            value.saturating_sub(delta.unsigned_abs())
        } else {
            value.saturating_add(delta.unsigned_abs())
        };
        let updated = *value;

        self.commit(next).await?;
        Ok(updated)
    }

    pub async fn reset(&mut self, target: &str) -> Result<(), AppError> {
        let mut next = self.state.clone();
        *next.entry(target) = 0;
        self.commit(next).await
    }

    async fn commit(&mut self, next: ScoreState) -> Result<(), AppError> {
        persist_state(&self.storage, &next).await?;
        self.state = next;
        self.render();
        Ok(())
    }

    pub fn render(&mut self) {
        for (name, value) in self.state.iter() {
            self.page.set_text(name, value.to_string());
        }
    }
}

async fn persist_state(storage: &LocalStorage, state: &ScoreState) -> Result<(), AppError> {
    let payload = serde_json::to_string(state)?;
    storage.set_item(STATE_KEY, payload).await
}

async fn load_state(storage: &LocalStorage) -> ScoreState {
    let Some(raw) = storage.get_item(STATE_KEY).await else {
        return ScoreState::default();
    };

    match serde_json::from_str(&raw) {
        Ok(state) => state,
        Err(err) => {
            warn!("stored scoreboard state is unreadable, using defaults: {err}");
            ScoreState::default()
        }
    }
}
