use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::{GameError, WordId};

/// Word difficulty. Only affects which words are drawn, never the round timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Numeric level, 1 (easy) through 3 (hard)
    pub fn level(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Medium),
            3 => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" | "1" => Ok(Difficulty::Easy),
            "medium" | "2" => Ok(Difficulty::Medium),
            "hard" | "3" => Ok(Difficulty::Hard),
            _ => Err(GameError::InvalidDifficulty {
                value: s.trim().to_string(),
            }),
        }
    }
}

/// How the presenter conveys the word during a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Category {
    Draw,
    Explain,
    Signal,
}

impl Category {
    /// Rotation order used by the store
    pub const ALL: [Category; 3] = [Category::Draw, Category::Explain, Category::Signal];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Draw => "draw",
            Category::Explain => "explain",
            Category::Signal => "signal",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Subject-matter grouping of a word, independent of the round category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum WordTopic {
    Animals,
    #[default]
    Objects,
    Actions,
    Professions,
    Foods,
    Places,
    Abstract,
    Events,
}

/// A record of the static word dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WordEntry {
    pub id: WordId,
    pub text: String,
    pub difficulty: Difficulty,
    pub categories: Vec<Category>,
    #[serde(default)]
    pub topic: WordTopic,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Character count; derived from `text` when missing
    #[serde(default)]
    pub length: Option<u32>,
}

impl WordEntry {
    pub fn char_length(&self) -> u32 {
        self.length
            .unwrap_or_else(|| self.text.chars().count() as u32)
    }

    pub fn is_playable_as(&self, difficulty: Difficulty, category: Category) -> bool {
        self.difficulty == difficulty && self.categories.contains(&category)
    }
}

/// On-disk shape of a word dataset file
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WordDataset {
    #[serde(default)]
    pub language: Option<String>,
    pub words: Vec<WordEntry>,
}

/// The word chosen for the current question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Word {
    pub id: WordId,
    pub text: String,
    pub category: WordTopic,
    pub difficulty: Difficulty,
    pub length: u32,
    pub language: String,
    pub tags: Vec<String>,
}

impl Word {
    pub fn from_entry(entry: &WordEntry, language: &str) -> Self {
        Self {
            id: entry.id.clone(),
            text: entry.text.clone(),
            category: entry.topic,
            difficulty: entry.difficulty,
            length: entry.char_length(),
            language: language.to_string(),
            tags: entry.tags.clone(),
        }
    }
}
