#![allow(dead_code)]

use game_core::{GameEvent, GameEventHandler, GameStore, PlayerRoster, WordBank};
use game_types::{Difficulty, GamePhase, Player};
use std::sync::{Arc, Mutex};

pub const TEST_SEED: u64 = 7;

/// Small dataset with exactly one word per difficulty and category
pub const TEST_WORDS: &str = r#"{
  "language": "hu",
  "words": [
    {"id": "e-d", "text": "kutya", "difficulty": "easy", "categories": ["draw"]},
    {"id": "e-e", "text": "alma", "difficulty": "easy", "categories": ["explain"]},
    {"id": "e-s", "text": "fut", "difficulty": "easy", "categories": ["signal"]},
    {"id": "m-d", "text": "zsiráf", "difficulty": "medium", "categories": ["draw"]},
    {"id": "m-e", "text": "tanár", "difficulty": "medium", "categories": ["explain"]},
    {"id": "m-s", "text": "úszik", "difficulty": "medium", "categories": ["signal"]},
    {"id": "h-d", "text": "vulkán", "difficulty": "hard", "categories": ["draw"]},
    {"id": "h-e", "text": "szerelem", "difficulty": "hard", "categories": ["explain"]},
    {"id": "h-s", "text": "bűvész", "difficulty": "hard", "categories": ["signal"]}
  ]
}"#;

/// Creates a WordBank with a known set of words
pub fn create_test_bank() -> WordBank {
    WordBank::from_json(TEST_WORDS).unwrap()
}

/// Creates a seeded store over the test word bank
pub fn create_test_store() -> GameStore {
    GameStore::with_seed(create_test_bank(), TEST_SEED)
}

pub fn create_roster(names: &[&str]) -> PlayerRoster {
    PlayerRoster::parse(names).unwrap()
}

/// Store with a freshly set up game
pub fn create_game(names: &[&str], difficulty: Difficulty) -> GameStore {
    let mut store = create_test_store();
    store.setup_game(&create_roster(names), difficulty);
    store
}

/// Creates a standard two player game
pub fn create_standard_game() -> GameStore {
    create_game(&["Alice", "Bob"], Difficulty::Medium)
}

/// Plays one full block of questions, each won by `guesser_id`
pub fn play_full_round(store: &mut GameStore, guesser_id: &str) {
    let questions = store.game().unwrap().questions_per_round;
    for _ in 0..questions {
        store.start_round().unwrap();
        store.end_round(true, Some(guesser_id)).unwrap();
    }
}

pub fn player_by_id<'a>(store: &'a GameStore, id: &str) -> &'a Player {
    store.players().iter().find(|p| p.id == id).unwrap()
}

pub fn assert_phase(store: &GameStore, expected: GamePhase) {
    let actual = store.game().unwrap().phase;
    assert_eq!(actual, expected, "Expected phase {:?}, got {:?}", expected, actual);
}

/// Event collector for testing event emissions
#[derive(Clone, Default)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<GameEvent>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_events(&self) -> Vec<GameEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn has_event_type(&self, check_fn: impl Fn(&GameEvent) -> bool) -> bool {
        self.events.lock().unwrap().iter().any(check_fn)
    }
}

impl GameEventHandler for EventCollector {
    fn handle_event(&mut self, event: &GameEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
