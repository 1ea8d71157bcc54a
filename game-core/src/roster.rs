use game_types::{GameError, MAX_NAME_LENGTH, MAX_PLAYERS, MIN_PLAYERS};

/// Validated list of player names, in seating order.
///
/// Holding a `PlayerRoster` is proof that names are trimmed, non-blank, at most
/// `MAX_NAME_LENGTH` characters, and that there are 2 to 8 of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRoster {
    names: Vec<String>,
}

impl PlayerRoster {
    /// Trim names and drop blank ones, then check length and count
    pub fn parse<I, S>(names: I) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        if let Some(name) = names.iter().find(|n| n.chars().count() > MAX_NAME_LENGTH) {
            return Err(GameError::InvalidPlayerName {
                name: name.clone(),
                reason: format!("longer than {} characters", MAX_NAME_LENGTH),
            });
        }

        if names.len() < MIN_PLAYERS || names.len() > MAX_PLAYERS {
            return Err(GameError::InvalidPlayerCount {
                count: names.len(),
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
            });
        }

        Ok(Self { names })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
