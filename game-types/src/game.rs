use crate::{Category, Difficulty, GameId, PlayerId};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub const DEFAULT_QUESTIONS_PER_ROUND: u32 = 10;
pub const DEFAULT_ROUND_DURATION_MS: u32 = 60_000;
pub const DEFAULT_WORD_REVEAL_DURATION_MS: u32 = 3_000;
/// Each player presents this many rounds per game
pub const ROUNDS_PER_PLAYER: u32 = 3;

/// Session phase. `Lobby`, `WordReveal` and `Paused` are part of the declared
/// transition table but the store never enters them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum GamePhase {
    Setup,
    Lobby,
    WordReveal,
    Playing,
    Paused,
    RoundEnd,
    GameOver,
}

impl GamePhase {
    /// Legal successors according to the declared transition table
    pub fn successors(self) -> &'static [GamePhase] {
        use GamePhase::*;

        match self {
            Setup => &[Lobby],
            Lobby => &[WordReveal],
            WordReveal => &[Playing],
            Playing => &[Paused, RoundEnd],
            Paused => &[Playing, RoundEnd],
            RoundEnd => &[WordReveal, GameOver],
            // Replay
            GameOver => &[Setup],
        }
    }

    pub fn can_transition_to(self, next: GamePhase) -> bool {
        self.successors().contains(&next)
    }

    /// Whether a round can be in progress or about to start in this phase
    pub fn is_in_progress(self) -> bool {
        !matches!(self, GamePhase::Setup | GamePhase::GameOver)
    }
}

/// Role of a player during a single question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Role {
    Drawer,
    Explainer,
    Signer,
    Guesser,
}

impl Category {
    /// Role of the presenting player for this category
    pub fn role(self) -> Role {
        match self {
            Category::Draw => Role::Drawer,
            Category::Explain => Role::Explainer,
            Category::Signal => Role::Signer,
        }
    }
}

/// Configuration fixed at setup time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GameSettings {
    pub total_rounds: u32,
    pub difficulty: Difficulty,
    pub categories: Vec<Category>,
    /// Same for every difficulty
    pub round_duration_ms: u32,
    pub word_reveal_duration_ms: u32,
    pub allow_mid_game_join: bool,
}

impl GameSettings {
    pub fn for_players(player_count: usize, difficulty: Difficulty) -> Self {
        Self {
            total_rounds: player_count as u32 * ROUNDS_PER_PLAYER,
            difficulty,
            ..Self::default()
        }
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            total_rounds: 5,
            difficulty: Difficulty::default(),
            categories: Category::ALL.to_vec(),
            round_duration_ms: DEFAULT_ROUND_DURATION_MS,
            word_reveal_duration_ms: DEFAULT_WORD_REVEAL_DURATION_MS,
            allow_mid_game_join: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Game {
    pub id: GameId,
    pub host_player_id: PlayerId,
    pub phase: GamePhase,
    /// Number of completed presenter rounds; never decreases
    pub current_round: u32,
    pub current_player_index: usize,
    pub current_category: Category,
    /// 1-based position inside the current block of questions
    pub current_question_in_round: u32,
    pub questions_per_round: u32,
    pub settings: GameSettings,
    pub created_at: String,         // ISO 8601 string
    pub started_at: Option<String>, // set by the first round start
    pub ended_at: Option<String>,   // set on game over
}

impl Game {
    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// True when the current question is the last one of its block
    pub fn is_last_question_of_round(&self) -> bool {
        self.current_question_in_round >= self.questions_per_round
    }
}
