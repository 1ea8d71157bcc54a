use game_types::{Category, GameId, GamePhase, Player, PlayerId, Word};

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    GameCreated {
        game_id: GameId,
        players: Vec<Player>,
        total_rounds: u32,
    },
    RoundStarted {
        game_id: GameId,
        round: u32,
        question: u32,
        category: Category,
        presenter: Player,
        word: Word,
    },
    RoundEnded {
        game_id: GameId,
        round: u32,
        success: bool,
        guesser: Option<PlayerId>,
        next_phase: GamePhase,
        next_presenter: Option<Player>,
    },
    GameEnded {
        game_id: GameId,
        winner: Option<Player>,
        final_scores: Vec<Player>,
        total_rounds: u32,
    },
    GameReset {
        game_id: GameId,
    },
}

impl GameEvent {
    pub fn game_id(&self) -> GameId {
        match self {
            GameEvent::GameCreated { game_id, .. } => *game_id,
            GameEvent::RoundStarted { game_id, .. } => *game_id,
            GameEvent::RoundEnded { game_id, .. } => *game_id,
            GameEvent::GameEnded { game_id, .. } => *game_id,
            GameEvent::GameReset { game_id } => *game_id,
        }
    }
}

/// Event handler trait for reacting to store transitions
pub trait GameEventHandler {
    fn handle_event(&mut self, event: &GameEvent);
}

/// Simple event bus for distributing game events
pub struct GameEventBus {
    handlers: Vec<Box<dyn GameEventHandler>>,
}

impl GameEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn GameEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn publish(&mut self, event: &GameEvent) {
        for handler in &mut self.handlers {
            handler.handle_event(event);
        }
    }
}

impl Default for GameEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameEventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEventBus")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

/// Handler that writes every event to the `tracing` log
#[derive(Debug, Default)]
pub struct TracingEventHandler;

impl GameEventHandler for TracingEventHandler {
    fn handle_event(&mut self, event: &GameEvent) {
        match event {
            GameEvent::GameCreated { game_id, players, total_rounds } => {
                tracing::info!("Game {} created: {} players, {} rounds", game_id, players.len(), total_rounds);
            }
            GameEvent::RoundStarted { round, question, category, presenter, .. } => {
                tracing::info!(
                    "Round {} question {}: {} presents ({})",
                    round + 1,
                    question,
                    presenter.name,
                    category
                );
            }
            GameEvent::RoundEnded { success, guesser, next_phase, .. } => {
                tracing::info!("Question ended (success: {}, guesser: {:?}) -> {:?}", success, guesser, next_phase);
            }
            GameEvent::GameEnded { winner, .. } => {
                tracing::info!("Game over, winner: {:?}", winner.as_ref().map(|p| p.name.as_str()));
            }
            GameEvent::GameReset { game_id } => {
                tracing::info!("Game {} reset", game_id);
            }
        }
    }
}
