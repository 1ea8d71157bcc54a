pub mod setup_preferences_repository;

pub use setup_preferences_repository::{SavedSetup, SetupPreferencesRepository};
