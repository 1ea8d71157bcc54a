pub mod game_events;
pub mod game_store;
pub mod normalization;
pub mod randomization;
pub mod roster;
pub mod rotation;
pub mod scoring;
pub mod word_bank;

// Re-export main components
pub use game_events::*;
pub use game_store::*;
pub use normalization::*;
pub use randomization::*;
pub use roster::*;
pub use rotation::*;
pub use scoring::*;
pub use word_bank::*;
