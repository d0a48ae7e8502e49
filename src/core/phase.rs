//! Turn phases.
//!
//! The turn loop is `setup -> discard -> draw -> action`, then back to
//! `discard` or `draw` depending on how many cards the player holds.
//! Setup is entered exactly once, at game start.

use serde::{Deserialize, Serialize};

/// Current phase of the turn state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Pick the two starting reserve cards.
    Setup,
    /// Discard down when holding a full seven cards.
    Discard,
    /// Refill hand and reserve from the draw pile.
    Draw,
    /// Play exactly one action, then end the turn.
    Action,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Setup => "setup",
            Phase::Discard => "discard",
            Phase::Draw => "draw",
            Phase::Action => "action",
        };
        write!(f, "{name}")
    }
}
