pub use super::setup_preferences::Entity as SetupPreferences;
