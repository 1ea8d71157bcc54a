use anyhow::{Context, Result};
use game_types::{Category, Difficulty, GameError, Word, WordDataset, WordEntry, WordId};
use rand::Rng;
use std::collections::HashSet;
use std::path::Path;

use crate::shuffle_with;

/// Dataset shipped with the crate
static EMBEDDED_WORDS: &str = include_str!("../data/words.json");

const DEFAULT_LANGUAGE: &str = "hu";

/// Criteria for drawing a word
#[derive(Debug, Clone, PartialEq)]
pub struct WordFilter {
    pub difficulty: Difficulty,
    pub category: Category,
    /// Preferably avoided; ignored when nothing else is left
    pub exclude_ids: HashSet<WordId>,
    /// Word shown just before; still avoided after relaxing, unless it is the only one
    pub last_word_id: Option<WordId>,
}

impl WordFilter {
    pub fn new(difficulty: Difficulty, category: Category) -> Self {
        Self {
            difficulty,
            category,
            exclude_ids: HashSet::new(),
            last_word_id: None,
        }
    }

    pub fn excluding(mut self, ids: impl IntoIterator<Item = WordId>) -> Self {
        self.exclude_ids.extend(ids);
        self
    }

    pub fn after(mut self, last_word_id: Option<WordId>) -> Self {
        self.last_word_id = last_word_id;
        self
    }
}

/// Read-only word repository, loaded once
#[derive(Debug, Clone)]
pub struct WordBank {
    entries: Vec<WordEntry>,
    language: String,
}

impl WordBank {
    /// Build from already parsed records, rejecting malformed ones
    pub fn from_entries(entries: Vec<WordEntry>, language: &str) -> Result<Self, GameError> {
        let mut seen_ids = HashSet::new();

        for entry in &entries {
            if entry.text.trim().is_empty() {
                return Err(GameError::InvalidWordData {
                    message: format!("word '{}' has empty text", entry.id),
                });
            }
            if entry.categories.is_empty() {
                return Err(GameError::InvalidWordData {
                    message: format!("word '{}' has no categories", entry.id),
                });
            }
            if !seen_ids.insert(entry.id.as_str()) {
                return Err(GameError::InvalidWordData {
                    message: format!("duplicate word id '{}'", entry.id),
                });
            }
        }

        Ok(Self {
            entries,
            language: language.to_string(),
        })
    }

    /// Parse a JSON dataset of the form `{ "language": "hu", "words": [...] }`
    pub fn from_json(json: &str) -> Result<Self> {
        let dataset: WordDataset =
            serde_json::from_str(json).context("Failed to parse word dataset")?;
        let language = dataset.language.as_deref().unwrap_or(DEFAULT_LANGUAGE);
        Ok(Self::from_entries(dataset.words, language)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read word file {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid word file {}", path.display()))
    }

    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_WORDS)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn count_for(&self, difficulty: Difficulty, category: Category) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.is_playable_as(difficulty, category))
            .count()
    }

    /// Difficulty/category pairs that have no word at all
    pub fn coverage_gaps(&self) -> Vec<(Difficulty, Category)> {
        Difficulty::ALL
            .iter()
            .flat_map(|&difficulty| Category::ALL.iter().map(move |&category| (difficulty, category)))
            .filter(|&(difficulty, category)| self.count_for(difficulty, category) == 0)
            .collect()
    }

    fn eligible(&self, filter: &WordFilter, honour_exclusions: bool) -> Vec<&WordEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.is_playable_as(filter.difficulty, filter.category))
            .filter(|entry| !honour_exclusions || !filter.exclude_ids.contains(&entry.id))
            .collect()
    }

    /// Draw a word: filter, shuffle, take the first.
    ///
    /// Excluded ids are dropped from the filter when they would leave nothing to
    /// draw, except `last_word_id` while another word remains. An empty pool is
    /// reported as `NoEligibleWord`.
    pub fn select<R: Rng + ?Sized>(&self, filter: &WordFilter, rng: &mut R) -> Result<Word, GameError> {
        let mut pool = self.eligible(filter, true);

        if pool.is_empty() && !filter.exclude_ids.is_empty() {
            tracing::debug!(
                "All {} {} words used, relaxing exclusion filter",
                filter.difficulty,
                filter.category
            );
            pool = self.eligible(filter, false);
            if pool.len() > 1 {
                if let Some(last) = &filter.last_word_id {
                    pool.retain(|entry| &entry.id != last);
                }
            }
        }

        shuffle_with(&pool, rng)
            .first()
            .map(|entry| Word::from_entry(entry, &self.language))
            .ok_or(GameError::NoEligibleWord {
                difficulty: filter.difficulty,
                category: filter.category,
            })
    }
}
