use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use game_core::{GameStore, PlayerRoster};
use game_persistence::repositories::SavedSetup;
use game_types::{Difficulty, GameError, GamePhase, GameSnapshot, Player, Role};
use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};

/// Clears the terminal so the word is gone before the device is passed on
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// What the players chose on the setup screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupChoice {
    pub roster: PlayerRoster,
    pub difficulty: Difficulty,
}

/// How a game left the question loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameFlow {
    Finished,
    OutOfWords,
    Quit,
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::Drawer => "draws",
        Role::Explainer => "explains",
        Role::Signer => "shows with gestures",
        Role::Guesser => "guesses",
    }
}

/// Terminal front end: one shared screen, passed between players
pub struct Session<R, W> {
    input: R,
    output: W,
    clock: Box<dyn Clock>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            clock: Box::new(SystemClock),
        }
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Next trimmed line, `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Ask for names and difficulty until they are valid. `None` when the
    /// players quit or input ends.
    pub fn prompt_setup(&mut self, saved: Option<&SavedSetup>) -> io::Result<Option<SetupChoice>> {
        let saved_names = saved.map(|s| s.player_names.join(", ")).unwrap_or_default();
        let saved_difficulty = saved.map(|s| s.difficulty).unwrap_or_default();

        writeln!(self.output, "\n=== New game ===")?;
        let roster = loop {
            if saved_names.is_empty() {
                write!(self.output, "Player names, comma separated (q to quit): ")?;
            } else {
                write!(self.output, "Player names, comma separated [{}]: ", saved_names)?;
            }
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if line.eq_ignore_ascii_case("q") {
                return Ok(None);
            }
            let line = if line.is_empty() { saved_names.clone() } else { line };

            match PlayerRoster::parse(line.split(',')) {
                Ok(roster) => break roster,
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        };

        let difficulty = loop {
            write!(self.output, "Difficulty (easy/medium/hard) [{}]: ", saved_difficulty)?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if line.is_empty() {
                break saved_difficulty;
            }
            match line.parse::<Difficulty>() {
                Ok(difficulty) => break difficulty,
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        };

        Ok(Some(SetupChoice { roster, difficulty }))
    }

    /// Run questions until the game ends, the word bank runs dry or the players quit
    pub fn play_game(&mut self, store: &mut GameStore) -> io::Result<GameFlow> {
        loop {
            match store.game().map(|g| g.phase) {
                None => return Ok(GameFlow::Quit),
                Some(GamePhase::GameOver) => return Ok(GameFlow::Finished),
                _ => {}
            }

            if let Err(e) = store.start_round() {
                warn!("Stopping game: {}", e);
                writeln!(self.output, "{}", e)?;
                if matches!(e, GameError::NoEligibleWord { .. }) {
                    return Ok(GameFlow::OutOfWords);
                }
                return Ok(GameFlow::Quit);
            }

            if !self.present_question(store)? {
                return Ok(GameFlow::Quit);
            }
        }
    }

    /// Show one question and record the result. `false` when the players quit.
    fn present_question(&mut self, store: &mut GameStore) -> io::Result<bool> {
        let (Some(game), Some(presenter)) = (store.game().cloned(), store.current_presenter().cloned())
        else {
            return Ok(false);
        };
        let role = store.role_of(&presenter.id).unwrap_or(Role::Guesser);

        writeln!(
            self.output,
            "\nRound {}/{}, question {}/{}",
            game.current_round + 1,
            game.settings.total_rounds,
            game.current_question_in_round,
            game.questions_per_round
        )?;
        writeln!(self.output, "{} {} ({})", presenter.name, role_label(role), game.current_category)?;
        write!(self.output, "Pass the device to {} and press Enter to see the word: ", presenter.name)?;
        if self.read_line()?.is_none() {
            return Ok(false);
        }

        // The question timer starts once the word is hidden; a redraw does not restart it
        self.reveal_word(store, game.settings.word_reveal_duration_ms)?;
        let round_duration = Duration::from_millis(u64::from(game.settings.round_duration_ms));
        let started = self.clock.now();

        loop {
            self.print_players(store.players())?;
            let left = round_duration.saturating_sub(self.elapsed_since(started));
            write!(
                self.output,
                "[{}s left] Who guessed it? number, p = nobody, r = new word, q = quit: ",
                left.as_secs()
            )?;

            let Some(line) = self.read_line()? else {
                return Ok(false);
            };
            let choice = line.to_lowercase();
            if choice == "q" {
                return Ok(false);
            }

            if self.elapsed_since(started) >= round_duration {
                info!("Question timed out after {}s", round_duration.as_secs());
                writeln!(self.output, "Time's up! Nobody scores this time.")?;
                self.finish_question(store, false, None)?;
                return Ok(true);
            }

            match choice.as_str() {
                "" | "p" => {
                    self.finish_question(store, false, None)?;
                    return Ok(true);
                }
                "r" => match store.start_round() {
                    Ok(_) => self.reveal_word(store, game.settings.word_reveal_duration_ms)?,
                    Err(e) => writeln!(self.output, "{}", e)?,
                },
                other => match other.parse::<usize>() {
                    Ok(n) if (1..=store.players().len()).contains(&n) => {
                        let guesser = Player::id_for_index(n - 1);
                        self.finish_question(store, true, Some(&guesser))?;
                        return Ok(true);
                    }
                    _ => writeln!(self.output, "Unknown choice '{}'", line)?,
                },
            }
        }
    }

    fn elapsed_since(&self, started: Instant) -> Duration {
        self.clock.now().saturating_duration_since(started)
    }

    /// Show the word to the presenter for the reveal time, then clear it
    fn reveal_word(&mut self, store: &GameStore, reveal_ms: u32) -> io::Result<()> {
        let reveal = Duration::from_millis(u64::from(reveal_ms));
        if let Some(word) = store.current_word() {
            writeln!(self.output, "Word: {} ({})", word.text, word.difficulty.label())?;
        }
        writeln!(self.output, "(hidden in {} seconds)", reveal.as_secs())?;
        self.output.flush()?;

        self.clock.sleep(reveal);
        write!(self.output, "{}", CLEAR_SCREEN)?;
        Ok(())
    }

    fn finish_question(&mut self, store: &mut GameStore, success: bool, guesser: Option<&str>) -> io::Result<()> {
        match store.end_round(success, guesser) {
            Ok(event) => debug!("Question finished: {:?}", event.map(|e| e.game_id())),
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(())
    }

    fn print_players(&mut self, players: &[Player]) -> io::Result<()> {
        for (index, player) in players.iter().enumerate() {
            writeln!(self.output, "  {}. {} ({} points)", index + 1, player.name, player.score)?;
        }
        Ok(())
    }

    pub fn show_results(&mut self, snapshot: &GameSnapshot) -> io::Result<()> {
        writeln!(self.output, "\n=== Game over ===")?;
        for (place, player) in snapshot.standings().iter().enumerate() {
            writeln!(self.output, "{}. {} - {} points", place + 1, player.name, player.score)?;
        }
        if let Some(winner) = snapshot.winner() {
            writeln!(self.output, "Winner: {}", winner.name)?;
        }
        Ok(())
    }

    pub fn ask_replay(&mut self) -> io::Result<bool> {
        write!(self.output, "Play again? (y/n) [n]: ")?;
        Ok(matches!(
            self.read_line()?.as_deref().map(str::to_lowercase).as_deref(),
            Some("y" | "yes")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use game_core::WordBank;
    use std::io::Cursor;

    fn timed_session(input: &str, step: Duration) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
        Session::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
            .with_clock(Box::new(ManualClock::new(step)))
    }

    fn session(input: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
        timed_session(input, Duration::ZERO)
    }

    fn two_player_store() -> GameStore {
        let mut store = GameStore::with_seed(WordBank::embedded().unwrap(), 7);
        store.setup_game(&PlayerRoster::parse(["Anna", "Béla"]).unwrap(), Difficulty::Medium);
        store
    }

    fn output_of(session: Session<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(session.into_output()).unwrap()
    }

    #[test]
    fn test_setup_reprompts_until_valid() {
        let mut session = session("Anna\nAnna, Béla\nimpossible\nhard\n");
        let choice = session.prompt_setup(None).unwrap().unwrap();

        assert_eq!(choice.roster.names(), &["Anna".to_string(), "Béla".to_string()]);
        assert_eq!(choice.difficulty, Difficulty::Hard);

        let output = output_of(session);
        assert!(output.contains("Invalid number of players: 1"));
        assert!(output.contains("Unknown difficulty 'impossible'"));
    }

    #[test]
    fn test_setup_uses_saved_defaults() {
        let saved = SavedSetup {
            player_names: vec!["Cili".to_string(), "Dani".to_string()],
            difficulty: Difficulty::Easy,
        };
        let mut session = session("\n\n");
        let choice = session.prompt_setup(Some(&saved)).unwrap().unwrap();

        assert_eq!(choice.roster.len(), 2);
        assert_eq!(choice.difficulty, Difficulty::Easy);
        assert!(output_of(session).contains("[Cili, Dani]"));
    }

    #[test]
    fn test_setup_quit_and_end_of_input() {
        assert_eq!(session("q\n").prompt_setup(None).unwrap(), None);
        assert_eq!(session("").prompt_setup(None).unwrap(), None);
        assert_eq!(session("Anna, Béla\n").prompt_setup(None).unwrap(), None);
    }

    #[test]
    fn test_play_one_question_then_quit() {
        let mut store = two_player_store();

        // Reveal, Béla guesses, reveal the next word, invalid choice, quit
        let mut session = session("\n2\n\n9\nq\n");
        let flow = session.play_game(&mut store).unwrap();

        assert_eq!(flow, GameFlow::Quit);
        assert_eq!(store.players()[0].score, 1);
        assert_eq!(store.players()[1].score, 2);
        assert_eq!(store.game().unwrap().current_question_in_round, 2);

        let output = output_of(session);
        assert!(output.contains("Anna draws (draw)"));
        assert!(output.contains("Unknown choice '9'"));
        assert!(output.contains("[60s left]"));
    }

    #[test]
    fn test_word_is_cleared_before_guessing() {
        let mut store = two_player_store();
        let mut session = session("\n");
        session.play_game(&mut store).unwrap();

        let output = output_of(session);
        let word = output.find("Word: ").unwrap();
        let cleared = output.find(CLEAR_SCREEN).unwrap();
        let prompt = output.find("Who guessed it?").unwrap();
        assert!(word < cleared && cleared < prompt);
        assert!(output.contains("(hidden in 3 seconds)"));
    }

    #[test]
    fn test_expired_question_scores_nobody() {
        let mut store = two_player_store();

        // Each clock reading is 31 seconds later, so the answer arrives after 62 seconds
        let mut session = timed_session("\n2\n", Duration::from_secs(31));
        assert_eq!(session.play_game(&mut store).unwrap(), GameFlow::Quit);

        assert!(store.players().iter().all(|p| p.score == 0));
        assert_eq!(store.game().unwrap().current_question_in_round, 2);
        assert_eq!(store.game().unwrap().phase, GamePhase::Playing);
        assert!(output_of(session).contains("Time's up!"));
    }

    #[test]
    fn test_redraw_reveals_a_different_word() {
        let mut store = two_player_store();
        let mut session = session("\nr\nq\n");
        session.play_game(&mut store).unwrap();

        let output = output_of(session);
        let words: Vec<&str> = output
            .lines()
            .filter_map(|line| line.split("Word: ").nth(1))
            .collect();
        assert_eq!(words.len(), 2);
        assert_ne!(words[0], words[1]);
    }

    #[test]
    fn test_out_of_words() {
        let bank = WordBank::from_json(
            r#"{"words":[{"id":"only","text":"kutya","difficulty":"easy","categories":["draw"]}]}"#,
        )
        .unwrap();
        let mut store = GameStore::with_seed(bank, 7);
        store.setup_game(&PlayerRoster::parse(["Anna", "Béla"]).unwrap(), Difficulty::Hard);

        let mut session = session("");
        assert_eq!(session.play_game(&mut store).unwrap(), GameFlow::OutOfWords);
        assert!(output_of(session).contains("No eligible word"));
    }

    #[test]
    fn test_ask_replay() {
        assert!(session("y\n").ask_replay().unwrap());
        assert!(session("YES\n").ask_replay().unwrap());
        assert!(!session("\n").ask_replay().unwrap());
        assert!(!session("").ask_replay().unwrap());
    }
}
