//! # lucky-columns
//!
//! A deterministic rule engine for a solitaire column-building card game
//! played with a 54-card deck (52 standard cards plus two Jokers).
//!
//! ## Design Principles
//!
//! 1. **Single Writer**: All mutation flows through [`GameEngine::apply`].
//!    Drivers read the state, never touch it.
//!
//! 2. **Commands Never Error**: An illegal command leaves the state
//!    untouched and reports why (or is silently ignored). Any command
//!    log replays against any state.
//!
//! 3. **Seeded Determinism**: Every shuffle draws from one [`GameRng`],
//!    so a seed plus a command log reproduces a game exactly.
//!
//! ## Architecture
//!
//! - **Card Conservation**: The 54-card universe is fixed at deal time;
//!   cards move between zones and are never created or destroyed. Debug
//!   builds audit this after every command.
//!
//! - **Persistent Piles**: The draw and discard piles use `im-rs`
//!   vectors for O(1) state snapshots.
//!
//! ## Modules
//!
//! - `cards`: The card universe, activators, and the draw pile
//! - `core`: Game state, player zones, phases, RNG
//! - `zones`: Columns, guarded slots, and zone capacities
//! - `engine`: Commands, handlers, and player-facing messages

pub mod cards;
pub mod core;
pub mod engine;
pub mod zones;

pub use crate::cards::{
    standard_deck, Activator, ActivatorKind, Card, CardId, CardKind, Color, DrawPile, Rank, Suit,
    DECK_SIZE,
};

pub use crate::core::{
    GameRng, GameRngState, GameState, Phase, Player, PlayerProfile, ProfileUpdate, SuitMap,
    Winner, OPENING_DEAL, STARTING_HEALTH,
};

pub use crate::zones::{Column, FaceCards, Origin, HAND_LIMIT, RESERVE_LIMIT};

pub use crate::engine::{
    Command, GameEngine, GameMessage, JokerMode, Outcome, SELECTION_LIMIT, SLOT_POSITION,
};
