pub mod prelude;
pub mod setup_preferences;
