use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::{Category, Difficulty, GamePhase};

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GameError {
    #[error("Invalid number of players: {count} (expected {min}-{max})")]
    InvalidPlayerCount { count: usize, min: usize, max: usize },
    #[error("Invalid player name '{name}': {reason}")]
    InvalidPlayerName { name: String, reason: String },
    #[error("No eligible word for {difficulty} {category}")]
    NoEligibleWord {
        difficulty: Difficulty,
        category: Category,
    },
    #[error("Invalid phase transition: {from:?} -> {to:?}")]
    InvalidPhaseTransition { from: GamePhase, to: GamePhase },
    #[error("Unknown difficulty '{value}' (expected easy, medium or hard)")]
    InvalidDifficulty { value: String },
    #[error("Invalid word data: {message}")]
    InvalidWordData { message: String },
}
