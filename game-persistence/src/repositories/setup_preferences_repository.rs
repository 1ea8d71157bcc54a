use anyhow::Result;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection, EntityTrait};
use tracing::warn;

use crate::entities::{prelude::*, setup_preferences};
use game_types::Difficulty;

const PREFERENCES_ROW_ID: i32 = 1;

/// Names and difficulty remembered from the previous setup
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SavedSetup {
    pub player_names: Vec<String>,
    pub difficulty: Difficulty,
}

/// Convenience cache for the setup screen. Never holds game state.
pub struct SetupPreferencesRepository {
    db: DatabaseConnection,
}

impl SetupPreferencesRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_setup(model: setup_preferences::Model) -> SavedSetup {
        let player_names = serde_json::from_str::<Vec<String>>(&model.player_names)
            .unwrap_or_else(|e| {
                warn!("Ignoring unreadable saved player names: {}", e);
                Vec::new()
            });

        let difficulty = model.difficulty.parse().unwrap_or_else(|_| {
            warn!("Ignoring unknown saved difficulty '{}'", model.difficulty);
            Difficulty::default()
        });

        SavedSetup {
            player_names,
            difficulty,
        }
    }

    pub async fn load(&self) -> Result<Option<SavedSetup>> {
        let model = SetupPreferences::find_by_id(PREFERENCES_ROW_ID)
            .one(&self.db)
            .await?;
        Ok(model.map(Self::model_to_setup))
    }

    /// Remember the setup. Blank names are dropped; when none remain the
    /// previously saved names are kept and only the difficulty changes.
    pub async fn save(&self, player_names: &[String], difficulty: Difficulty) -> Result<SavedSetup> {
        let names: Vec<String> = player_names
            .iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        let now = chrono::Utc::now().into();

        let existing = SetupPreferences::find_by_id(PREFERENCES_ROW_ID)
            .one(&self.db)
            .await?;

        let saved = match existing {
            Some(model) => {
                let mut active: setup_preferences::ActiveModel = model.into();
                if !names.is_empty() {
                    active.player_names = Set(serde_json::to_string(&names)?);
                }
                active.difficulty = Set(difficulty.as_str().to_string());
                active.updated_at = Set(now);
                active.update(&self.db).await?
            }
            None => {
                let active = setup_preferences::ActiveModel {
                    id: Set(PREFERENCES_ROW_ID),
                    player_names: Set(serde_json::to_string(&names)?),
                    difficulty: Set(difficulty.as_str().to_string()),
                    updated_at: Set(now),
                };
                SetupPreferences::insert(active).exec(&self.db).await?;
                SetupPreferences::find_by_id(PREFERENCES_ROW_ID)
                    .one(&self.db)
                    .await?
                    .ok_or_else(|| anyhow::anyhow!("Failed to retrieve saved setup"))?
            }
        };

        Ok(Self::model_to_setup(saved))
    }

    pub async fn clear(&self) -> Result<()> {
        SetupPreferences::delete_by_id(PREFERENCES_ROW_ID)
            .exec(&self.db)
            .await?;
        Ok(())
    }
}
