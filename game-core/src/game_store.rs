use game_types::{
    Category, Difficulty, Game, GameError, GamePhase, GameSettings, GameSnapshot, Player, Role,
    Word, WordId, DEFAULT_QUESTIONS_PER_ROUND,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{
    GameEvent, GameEventBus, GameEventHandler, GUESSER_POINTS, PRESENTER_POINTS, PlayerRoster,
    WordBank, WordFilter, category_for_round, next_player_index,
};

/// Phase changes the store itself performs. A subset of the declared table in
/// `GamePhase::successors`, plus the shortcuts the store takes past the
/// `Lobby`/`WordReveal`/`Paused` phases it never enters.
pub fn store_transition_allowed(from: GamePhase, to: GamePhase) -> bool {
    use GamePhase::*;

    match (from, to) {
        // Round start; Playing -> Playing redraws the word
        (Setup | RoundEnd | Playing, Playing) => true,
        // Question end
        (Setup | Playing | RoundEnd, RoundEnd | GameOver) => true,
        // GameOver is only left through reset_game
        _ => false,
    }
}

fn check_transition(from: GamePhase, to: GamePhase) -> Result<(), GameError> {
    if store_transition_allowed(from, to) {
        Ok(())
    } else {
        Err(GameError::InvalidPhaseTransition { from, to })
    }
}

/// Owner of the single game session.
///
/// Holds the canonical `Game`, players and current word. Every operation
/// computes the next state completely before replacing the old one, so a failed
/// operation leaves the store untouched.
#[derive(Debug)]
pub struct GameStore {
    state: GameSnapshot,
    word_bank: WordBank,
    used_word_ids: HashSet<WordId>,
    questions_per_round: u32,
    rng: StdRng,
    event_bus: GameEventBus,
}

impl GameStore {
    pub fn new(word_bank: WordBank) -> Self {
        Self::with_rng(word_bank, StdRng::from_os_rng())
    }

    /// Store with reproducible word draws
    pub fn with_seed(word_bank: WordBank, seed: u64) -> Self {
        Self::with_rng(word_bank, StdRng::seed_from_u64(seed))
    }

    fn with_rng(word_bank: WordBank, rng: StdRng) -> Self {
        Self {
            state: GameSnapshot::default(),
            word_bank,
            used_word_ids: HashSet::new(),
            questions_per_round: DEFAULT_QUESTIONS_PER_ROUND,
            rng,
            event_bus: GameEventBus::new(),
        }
    }

    /// Questions each presenter gets before the turn passes on. Applies to games set up afterwards.
    pub fn with_questions_per_round(mut self, questions: u32) -> Self {
        self.questions_per_round = questions.max(1);
        self
    }

    pub fn add_handler(&mut self, handler: Box<dyn GameEventHandler>) {
        self.event_bus.add_handler(handler);
    }

    pub fn game(&self) -> Option<&Game> {
        self.state.game.as_ref()
    }

    pub fn players(&self) -> &[Player] {
        &self.state.players
    }

    pub fn current_word(&self) -> Option<&Word> {
        self.state.current_word.as_ref()
    }

    pub fn word_bank(&self) -> &WordBank {
        &self.word_bank
    }

    /// Owned copy for presentation code
    pub fn snapshot(&self) -> GameSnapshot {
        self.state.clone()
    }

    pub fn current_presenter(&self) -> Option<&Player> {
        let game = self.state.game.as_ref()?;
        self.state.players.get(game.current_player_index)
    }

    /// Role of a player for the current question; `None` outside of play
    pub fn role_of(&self, player_id: &str) -> Option<Role> {
        let game = self.state.game.as_ref()?;
        if !game.phase.is_in_progress() {
            return None;
        }
        let presenter = self.current_presenter()?;

        if presenter.id == player_id {
            Some(game.current_category.role())
        } else if self.state.players.iter().any(|p| p.id == player_id) {
            Some(Role::Guesser)
        } else {
            None
        }
    }

    fn publish(&mut self, event: &GameEvent) {
        self.event_bus.publish(event);
    }

    /// Start a new game from a validated roster, replacing any previous state
    pub fn setup_game(&mut self, roster: &PlayerRoster, difficulty: Difficulty) -> GameEvent {
        let now = chrono::Utc::now().to_rfc3339();

        let players: Vec<Player> = roster
            .names()
            .iter()
            .enumerate()
            .map(|(index, name)| Player {
                id: Player::id_for_index(index),
                name: name.clone(),
                score: 0,
                joined_at: now.clone(),
                is_host: index == 0,
                is_active: true,
                has_guessed_correctly: false,
            })
            .collect();

        let settings = GameSettings::for_players(players.len(), difficulty);
        let game = Game {
            id: Uuid::new_v4(),
            host_player_id: Player::id_for_index(0),
            phase: GamePhase::Setup,
            current_round: 0,
            current_player_index: 0,
            current_category: Category::Draw,
            current_question_in_round: 1,
            questions_per_round: self.questions_per_round,
            settings,
            created_at: now,
            started_at: None,
            ended_at: None,
        };

        info!(
            "Set up game {} with {} players ({} difficulty, {} rounds)",
            game.id,
            players.len(),
            difficulty,
            game.settings.total_rounds
        );

        let event = GameEvent::GameCreated {
            game_id: game.id,
            players: players.clone(),
            total_rounds: game.settings.total_rounds,
        };

        self.used_word_ids.clear();
        self.state = GameSnapshot {
            game: Some(game),
            players,
            current_word: None,
        };

        self.publish(&event);
        event
    }

    /// Draw a word for the current presenter and enter `Playing`.
    ///
    /// Only phase, category, word and `started_at` change; round, presenter,
    /// question counter and scores are carried over untouched. No-op without a
    /// game or after game over. `NoEligibleWord` leaves the state as it was.
    pub fn start_round(&mut self) -> Result<Option<GameEvent>, GameError> {
        let Some(mut game) = self.state.game.clone() else {
            debug!("start_round ignored: no active game");
            return Ok(None);
        };
        if game.is_over() {
            debug!("start_round ignored: game {} is over", game.id);
            return Ok(None);
        }

        check_transition(game.phase, GamePhase::Playing)?;

        let category =
            category_for_round(game.current_round + 1, &game.settings.categories).unwrap_or(Category::Draw);
        let filter = WordFilter::new(game.settings.difficulty, category)
            .excluding(self.used_word_ids.iter().cloned())
            .after(self.state.current_word.as_ref().map(|w| w.id.clone()));

        let word = match self.word_bank.select(&filter, &mut self.rng) {
            Ok(word) => word,
            Err(e) => {
                warn!("Cannot start round for game {}: {}", game.id, e);
                return Err(e);
            }
        };

        game.phase = GamePhase::Playing;
        game.current_category = category;
        if game.started_at.is_none() {
            game.started_at = Some(chrono::Utc::now().to_rfc3339());
        }

        let presenter = self.state.players.get(game.current_player_index).cloned();
        debug!(
            "Round {} question {}/{}: {:?} presents '{}' ({})",
            game.current_round + 1,
            game.current_question_in_round,
            game.questions_per_round,
            presenter.as_ref().map(|p| p.name.as_str()),
            word.text,
            category
        );

        let event = presenter.map(|presenter| GameEvent::RoundStarted {
            game_id: game.id,
            round: game.current_round,
            question: game.current_question_in_round,
            category,
            presenter,
            word: word.clone(),
        });

        self.used_word_ids.insert(word.id.clone());
        self.state = GameSnapshot {
            game: Some(game),
            players: std::mem::take(&mut self.state.players),
            current_word: Some(word),
        };

        if let Some(event) = &event {
            self.publish(event);
        }
        Ok(event)
    }

    /// Finish the current question.
    ///
    /// On success with a guesser, the presenter gains `PRESENTER_POINTS` and the
    /// guesser `GUESSER_POINTS` (a presenter naming themself only gets presenter
    /// points). Once `questions_per_round` questions are done the turn passes to
    /// the next player and the round counter advances; reaching
    /// `settings.total_rounds` ends the game.
    ///
    /// Returns `GameEnded` when the game finishes, otherwise `RoundEnded`.
    /// No-op without a game or after game over.
    pub fn end_round(
        &mut self,
        success: bool,
        guesser_id: Option<&str>,
    ) -> Result<Option<GameEvent>, GameError> {
        let Some(mut game) = self.state.game.clone() else {
            debug!("end_round ignored: no active game");
            return Ok(None);
        };
        if game.is_over() {
            debug!("end_round ignored: game {} is over", game.id);
            return Ok(None);
        }

        let mut players = self.state.players.clone();
        let presenter_id = players.get(game.current_player_index).map(|p| p.id.clone());

        if let (true, Some(guesser_id)) = (success, guesser_id) {
            if !players.iter().any(|p| p.id == guesser_id) {
                warn!("Unknown guesser {} in game {}", guesser_id, game.id);
            }
            for player in &mut players {
                if Some(&player.id) == presenter_id.as_ref() {
                    player.score += PRESENTER_POINTS;
                } else if player.id == guesser_id {
                    player.score += GUESSER_POINTS;
                }
            }
        }

        let finished_round = game.current_round;
        let next_phase = if game.is_last_question_of_round() {
            game.current_player_index = next_player_index(game.current_player_index, players.len().max(1));
            game.current_round += 1;
            game.current_question_in_round = 1;

            if game.current_round >= game.settings.total_rounds {
                GamePhase::GameOver
            } else {
                GamePhase::RoundEnd
            }
        } else {
            game.current_question_in_round += 1;
            GamePhase::RoundEnd
        };

        check_transition(game.phase, next_phase)?;
        game.phase = next_phase;
        if next_phase == GamePhase::GameOver {
            game.ended_at = Some(chrono::Utc::now().to_rfc3339());
        }

        for player in &mut players {
            player.has_guessed_correctly = false;
        }

        let round_event = GameEvent::RoundEnded {
            game_id: game.id,
            round: finished_round,
            success,
            guesser: guesser_id.filter(|_| success).map(str::to_string),
            next_phase,
            next_presenter: players.get(game.current_player_index).cloned(),
        };

        if finished_round != game.current_round {
            info!("Game {} finished round {}/{}", game.id, game.current_round, game.settings.total_rounds);
        }

        let game_id = game.id;
        let total_rounds = game.settings.total_rounds;
        self.state = GameSnapshot {
            game: Some(game),
            players,
            current_word: self.state.current_word.take(),
        };
        self.publish(&round_event);

        if next_phase == GamePhase::GameOver {
            let final_scores = self.state.standings();
            let event = GameEvent::GameEnded {
                game_id,
                winner: final_scores.first().cloned(),
                final_scores,
                total_rounds,
            };
            info!("Game {} over", game_id);
            self.publish(&event);
            return Ok(Some(event));
        }

        Ok(Some(round_event))
    }

    /// Clear everything back to the empty pre-setup state. Idempotent.
    pub fn reset_game(&mut self) -> Option<GameEvent> {
        let previous = std::mem::take(&mut self.state);
        self.used_word_ids.clear();

        let game = previous.game?;
        info!("Reset game {}", game.id);
        let event = GameEvent::GameReset { game_id: game.id };
        self.publish(&event);
        Some(event)
    }
}
