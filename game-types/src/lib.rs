pub mod errors;
pub mod game;
pub mod guess;
pub mod player;
pub mod snapshot;
pub mod word;

pub type GameId = uuid::Uuid;
pub type PlayerId = String;
pub type WordId = String;

// Re-export all types
pub use errors::*;
pub use game::*;
pub use guess::*;
pub use player::*;
pub use snapshot::*;
pub use word::*;
