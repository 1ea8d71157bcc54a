use std::env;
use std::path::PathBuf;

use game_persistence::connection::DEFAULT_DATABASE_URL;
use game_types::DEFAULT_QUESTIONS_PER_ROUND;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_url: String,
    /// Word dataset to load instead of the embedded one
    pub words_file: Option<PathBuf>,
    /// Fixed seed for reproducible word draws
    pub game_seed: Option<u64>,
    pub questions_per_round: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any variable source; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let game_seed = match var("GAME_SEED") {
            Some(value) => Some(parse_number("GAME_SEED", &value)?),
            None => None,
        };

        let questions_per_round = match var("QUESTIONS_PER_ROUND") {
            Some(value) => match parse_number::<u32>("QUESTIONS_PER_ROUND", &value)? {
                0 => {
                    return Err(ConfigError::InvalidValue {
                        name: "QUESTIONS_PER_ROUND",
                        value,
                    });
                }
                n => n,
            },
            None => DEFAULT_QUESTIONS_PER_ROUND,
        };

        Ok(Self {
            database_url: var("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            words_file: var("WORDS_FILE").map(PathBuf::from),
            game_seed,
            questions_per_round,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            words_file: None,
            game_seed: None,
            questions_per_round: DEFAULT_QUESTIONS_PER_ROUND,
        }
    }
}

fn parse_number<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
    })
}
