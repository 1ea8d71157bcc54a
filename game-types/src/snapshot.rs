use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{Game, Player, Word};

/// Read-only copy of the store handed to presentation code
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GameSnapshot {
    pub game: Option<Game>,
    pub players: Vec<Player>,
    pub current_word: Option<Word>,
}

impl GameSnapshot {
    pub fn is_empty(&self) -> bool {
        self.game.is_none() && self.players.is_empty() && self.current_word.is_none()
    }

    /// Players ordered by score, highest first. Ties keep setup order.
    pub fn standings(&self) -> Vec<Player> {
        let mut standings = self.players.clone();
        standings.sort_by(|a, b| b.score.cmp(&a.score));
        standings
    }

    pub fn winner(&self) -> Option<Player> {
        self.standings().into_iter().next()
    }
}
