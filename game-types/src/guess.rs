use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::PlayerId;

/// A single guess, kept only for the duration of one question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Guess {
    pub player_id: PlayerId,
    pub guess: String,
    /// Milliseconds since the Unix epoch
    pub timestamp: i64,
    pub correct: bool,
    pub points: u32,
}
