use game_types::{Guess, PlayerId};
use std::collections::HashMap;

/// Base points for a correct guess
pub const CORRECT_GUESS_POINTS: u32 = 10;
/// Bonus for a correct guess strictly less than `FAST_GUESS_THRESHOLD_MS` after the round start
pub const FAST_GUESS_BONUS: u32 = 5;
pub const FAST_GUESS_THRESHOLD_MS: i64 = 5_000;
/// Added to every player when all of them guessed correctly
pub const TEAM_BONUS: u32 = 15;

/// Points the store awards when a question ends successfully
pub const PRESENTER_POINTS: u32 = 1;
pub const GUESSER_POINTS: u32 = 2;

pub struct ScoringEngine;

impl ScoringEngine {
    /// Points for a single guess: 0 when wrong, base plus an optional fast bonus when right
    pub fn score_guess(guess: &Guess, round_start_ms: i64) -> u32 {
        if !guess.correct {
            return 0;
        }

        let mut points = CORRECT_GUESS_POINTS;
        if guess.timestamp - round_start_ms < FAST_GUESS_THRESHOLD_MS {
            points += FAST_GUESS_BONUS;
        }
        points
    }

    /// Per-player points for a finished round.
    ///
    /// A player with several correct guesses keeps the points of the last one
    /// processed; scores are overwritten, not summed. The team bonus applies when
    /// the number of correct guesses equals the number of players.
    pub fn score_round(
        guesses: &[Guess],
        player_ids: &[PlayerId],
        round_start_ms: i64,
    ) -> HashMap<PlayerId, u32> {
        let mut scores: HashMap<PlayerId, u32> =
            player_ids.iter().map(|id| (id.clone(), 0)).collect();

        for guess in guesses.iter().filter(|g| g.correct) {
            scores.insert(guess.player_id.clone(), Self::score_guess(guess, round_start_ms));
        }

        let correct_count = guesses.iter().filter(|g| g.correct).count();
        if correct_count == player_ids.len() {
            for id in player_ids {
                if let Some(score) = scores.get_mut(id) {
                    *score += TEAM_BONUS;
                }
            }
        }

        scores
    }

    /// Build a scored guess record from raw input
    pub fn record_guess(
        player_id: PlayerId,
        guess: &str,
        answer: &str,
        timestamp: i64,
        round_start_ms: i64,
    ) -> Guess {
        let mut record = Guess {
            player_id,
            guess: guess.to_string(),
            timestamp,
            correct: crate::is_correct_guess(guess, answer),
            points: 0,
        };
        record.points = Self::score_guess(&record, round_start_ms);
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: i64 = 1_700_000_000_000;

    fn guess(player_id: &str, correct: bool, offset_ms: i64) -> Guess {
        Guess {
            player_id: player_id.to_string(),
            guess: "kutya".to_string(),
            timestamp: START + offset_ms,
            correct,
            points: 0,
        }
    }

    fn ids(ids: &[&str]) -> Vec<PlayerId> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_incorrect_guess_scores_zero() {
        assert_eq!(ScoringEngine::score_guess(&guess("p1", false, 0), START), 0);
        assert_eq!(ScoringEngine::score_guess(&guess("p1", false, 60_000), START), 0);
    }

    #[test]
    fn test_fast_bonus_boundary() {
        assert_eq!(ScoringEngine::score_guess(&guess("p1", true, 4_999), START), 15);
        assert_eq!(ScoringEngine::score_guess(&guess("p1", true, 5_000), START), 10);
        assert_eq!(ScoringEngine::score_guess(&guess("p1", true, 5_001), START), 10);
    }

    #[test]
    fn test_round_initializes_every_player() {
        let scores = ScoringEngine::score_round(&[], &ids(&["p1", "p2"]), START);
        assert_eq!(scores.len(), 2);
        assert!(scores.values().all(|&s| s == 0));
    }

    #[test]
    fn test_team_bonus_only_when_everyone_correct() {
        let players = ids(&["p1", "p2"]);

        let partial = vec![guess("p1", true, 1_000), guess("p2", false, 2_000)];
        let scores = ScoringEngine::score_round(&partial, &players, START);
        assert_eq!(scores["p1"], 15);
        assert_eq!(scores["p2"], 0);

        let everyone = vec![guess("p1", true, 1_000), guess("p2", true, 9_000)];
        let scores = ScoringEngine::score_round(&everyone, &players, START);
        assert_eq!(scores["p1"], 15 + TEAM_BONUS);
        assert_eq!(scores["p2"], 10 + TEAM_BONUS);
    }

    #[test]
    fn test_multiple_correct_guesses_overwrite() {
        let players = ids(&["p1", "p2", "p3"]);
        let guesses = vec![guess("p1", true, 1_000), guess("p1", true, 8_000)];

        let scores = ScoringEngine::score_round(&guesses, &players, START);
        // Last processed guess wins, no accumulation
        assert_eq!(scores["p1"], 10);
    }

    #[test]
    fn test_team_bonus_counts_guesses_not_players() {
        let players = ids(&["p1", "p2"]);
        let guesses = vec![guess("p1", true, 1_000), guess("p1", true, 2_000)];

        let scores = ScoringEngine::score_round(&guesses, &players, START);
        assert_eq!(scores["p1"], 15 + TEAM_BONUS);
        assert_eq!(scores["p2"], TEAM_BONUS);
    }

    #[test]
    fn test_record_guess() {
        let record = ScoringEngine::record_guess("p1".to_string(), "KUTYA", "kutya", START + 100, START);
        assert!(record.correct);
        assert_eq!(record.points, 15);

        let record = ScoringEngine::record_guess("p2".to_string(), "macska", "kutya", START + 100, START);
        assert!(!record.correct);
        assert_eq!(record.points, 0);
    }
}
