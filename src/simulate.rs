use crate::document::Document;
use crate::scoreboard::{PLAYERS_ID, UPTIME_ID};
use rand::Rng;

pub const MAX_PLAYERS: u32 = 32;
pub const MAX_UPTIME_SECS: u32 = 3600;

// Display only, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerSnapshot {
    pub players: u32,
    pub uptime_secs: u32,
}

impl ServerSnapshot {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            players: rng.gen_range(0..MAX_PLAYERS),
            uptime_secs: rng.gen_range(0..MAX_UPTIME_SECS),
        }
    }

    pub fn uptime_label(&self) -> String {
        format!(
            "Uptime: {}m {}s",
            self.uptime_secs / 60,
            self.uptime_secs % 60
        )
    }

    pub fn apply(&self, page: &mut Document) {
        page.set_text(PLAYERS_ID, self.players.to_string());
        page.set_text(UPTIME_ID, self.uptime_label());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn random_values_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let snapshot = ServerSnapshot::random(&mut rng);
            assert!(snapshot.players < MAX_PLAYERS);
            assert!(snapshot.uptime_secs < MAX_UPTIME_SECS);
        }
    }

    #[test]
    fn uptime_splits_minutes_and_seconds() {
        let snapshot = ServerSnapshot {
            players: 12,
            uptime_secs: 3599,
        };
        assert_eq!(snapshot.uptime_label(), "Uptime: 59m 59s");

        let short = ServerSnapshot {
            players: 0,
            uptime_secs: 7,
        };
        assert_eq!(short.uptime_label(), "Uptime: 0m 7s");
    }

    #[test]
    fn apply_writes_display_nodes() {
        let mut page = Document::with_ids([PLAYERS_ID, UPTIME_ID]);
        ServerSnapshot {
            players: 31,
            uptime_secs: 125,
        }
        .apply(&mut page);
        assert_eq!(page.text(PLAYERS_ID), Some("31"));
        assert_eq!(page.text(UPTIME_ID), Some("Uptime: 2m 5s"));
    }
}
