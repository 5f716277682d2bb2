use crate::simulate::ServerSnapshot;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CommandRequest {
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub target: String,
}

#[derive(Debug, Serialize)]
pub struct SimulateResponse {
    pub players: u32,
    pub uptime_secs: u32,
    pub uptime: String,
}

impl From<ServerSnapshot> for SimulateResponse {
    fn from(snapshot: ServerSnapshot) -> Self {
        Self {
            players: snapshot.players,
            uptime_secs: snapshot.uptime_secs,
            uptime: snapshot.uptime_label(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ThemeResponse {
    pub theme: Theme,
}
