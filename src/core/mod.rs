//! Core engine types: phases, player, per-suit storage, state, RNG.

pub mod phase;
pub mod player;
pub mod rng;
pub mod state;
pub mod suit_map;

pub use phase::Phase;
pub use player::{Player, PlayerProfile, ProfileUpdate, STARTING_HEALTH};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Winner, OPENING_DEAL};
pub use suit_map::SuitMap;
