use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::PlayerId;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 8;
pub const MAX_NAME_LENGTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub score: u32,
    pub joined_at: String, // ISO 8601 string
    pub is_host: bool,
    pub is_active: bool,
    pub has_guessed_correctly: bool,
}

impl Player {
    /// Sequential id for the player at `index` in the setup order
    pub fn id_for_index(index: usize) -> PlayerId {
        format!("player-{}", index + 1)
    }
}
