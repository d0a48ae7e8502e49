//! Card system: the fixed 54-card catalog, card values, and the draw pile.
//!
//! ## Key Types
//!
//! - `CardId`: stable identity within the 54-card universe
//! - `Card`: immutable `Copy` value (suit, rank, kind, derived color)
//! - `Activator`: tagged seven-or-Joker classification
//! - `DrawPile`: face-down pile with automatic discard recycling

pub mod card;
pub mod deck;

pub use card::{Activator, ActivatorKind, Card, CardId, CardKind, Color, Rank, Suit};
pub use deck::{standard_deck, DrawPile, DECK_SIZE};
