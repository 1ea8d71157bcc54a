use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use sea_orm::DatabaseConnection;
use tracing::{info, warn};

use game_core::{GameStore, TracingEventHandler, WordBank};
use game_persistence::repositories::SetupPreferencesRepository;

pub mod clock;
pub mod config;
pub mod session;

use clock::Clock;
use config::Config;
use session::{GameFlow, Session};

/// Word bank from `WORDS_FILE`, or the embedded Hungarian list
pub fn load_word_bank(config: &Config) -> Result<WordBank> {
    let bank = match &config.words_file {
        Some(path) => {
            info!("Loading words from {}", path.display());
            WordBank::from_file(path)?
        }
        None => WordBank::embedded()?,
    };

    for (difficulty, category) in bank.coverage_gaps() {
        warn!("Word bank has no {} {} words", difficulty, category);
    }
    info!("Loaded {} words ({})", bank.len(), bank.language());
    Ok(bank)
}

pub fn create_store(config: &Config, bank: WordBank) -> GameStore {
    let store = match config.game_seed {
        Some(seed) => GameStore::with_seed(bank, seed),
        None => GameStore::new(bank),
    };
    let mut store = store.with_questions_per_round(config.questions_per_round);
    store.add_handler(Box::new(TracingEventHandler));
    store
}

/// Setup, play and replay until the players quit
pub async fn run<R: BufRead, W: Write>(
    config: &Config,
    db: DatabaseConnection,
    input: R,
    output: W,
    clock: Box<dyn Clock>,
) -> Result<W> {
    let preferences = SetupPreferencesRepository::new(db);
    let mut store = create_store(config, load_word_bank(config)?);
    let mut session = Session::new(input, output).with_clock(clock);

    loop {
        // The cache is a convenience; a broken one never blocks play
        let saved = preferences.load().await.unwrap_or_else(|e| {
            warn!("Could not load setup preferences: {}", e);
            None
        });

        let Some(choice) = session.prompt_setup(saved.as_ref()).context("Setup prompt failed")? else {
            break;
        };

        if let Err(e) = preferences
            .save(choice.roster.names(), choice.difficulty)
            .await
        {
            warn!("Could not save setup preferences: {}", e);
        }

        store.setup_game(&choice.roster, choice.difficulty);

        match session.play_game(&mut store).context("Game loop failed")? {
            GameFlow::Finished => {
                session.show_results(&store.snapshot())?;
                let replay = session.ask_replay()?;
                store.reset_game();
                if !replay {
                    break;
                }
            }
            GameFlow::OutOfWords => {
                // Back to setup so the players can pick another difficulty
                store.reset_game();
            }
            GameFlow::Quit => break,
        }
    }

    store.reset_game();
    info!("Goodbye");
    Ok(session.into_output())
}
