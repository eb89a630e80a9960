use serde::{Deserialize, Serialize};

use crate::config::Validate;

/// Match tally kept across games. Stored with the keys `Player`, `AI` and `Draws`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreRecord {
    #[serde(rename = "Player", default)]
    pub player_wins: u32,
    #[serde(rename = "AI", default)]
    pub ai_wins: u32,
    #[serde(rename = "Draws", default)]
    pub draws: u32,
}

impl ScoreRecord {
    pub fn total_games(&self) -> u32 {
        self.player_wins
            .saturating_add(self.ai_wins)
            .saturating_add(self.draws)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Validate for ScoreRecord {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
