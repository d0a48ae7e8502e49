//! Zone model: the player-side containers and the four suit columns.
//!
//! ## Capacity invariants
//!
//! - Hand holds at most [`HAND_LIMIT`] cards.
//! - Reserve holds at most [`RESERVE_LIMIT`] cards.
//! - Each column's guarded slot holds at most one activator.
//!
//! The discard and draw piles are unbounded. Cards are never created or
//! destroyed after game start; every transfer moves a card from exactly
//! one zone to exactly one other.

pub mod column;

pub use column::{Column, FaceCards};

use serde::{Deserialize, Serialize};

/// Maximum hand size.
pub const HAND_LIMIT: usize = 5;

/// Maximum reserve size.
pub const RESERVE_LIMIT: usize = 2;

/// Which player-side zone a card came from.
///
/// Displaced guarded-slot cards return to the mover's origin zone, so
/// transfers are parameterized by this rather than duplicated per zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Hand,
    Reserve,
}
