//! Player state: hand, reserve, discard pile, health, and profile.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, CardId};
use crate::zones::{Origin, HAND_LIMIT, RESERVE_LIMIT};

/// Starting health and maximum health.
pub const STARTING_HEALTH: u32 = 10;

/// Cosmetic player profile. Rule-free: nothing in the engine reads it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    pub epithet: String,
    pub avatar: Option<String>,
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self {
            name: "Player 1".to_string(),
            epithet: "Card Master".to_string(),
            avatar: None,
        }
    }
}

/// Partial profile write. `None` fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub epithet: Option<String>,
    pub avatar: Option<String>,
}

/// The player: bounded hand and reserve, append-only discard pile,
/// health pool, and the per-turn-cycle shuffle flag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Ordered hand, at most [`HAND_LIMIT`] cards.
    pub hand: SmallVec<[Card; HAND_LIMIT]>,

    /// Ordered reserve, at most [`RESERVE_LIMIT`] cards.
    pub reserve: SmallVec<[Card; RESERVE_LIMIT]>,

    /// Append-only discard pile, oldest first.
    pub discard: Vector<Card>,

    pub health: u32,
    pub max_health: u32,

    /// Set when Strategic Shuffle is used; reset at end of turn.
    pub has_used_strategic_shuffle: bool,

    pub profile: PlayerProfile,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    /// Create a player with empty zones and full starting health.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hand: SmallVec::new(),
            reserve: SmallVec::new(),
            discard: Vector::new(),
            health: STARTING_HEALTH,
            max_health: STARTING_HEALTH,
            has_used_strategic_shuffle: false,
            profile: PlayerProfile::default(),
        }
    }

    /// Cards held across hand and reserve.
    #[must_use]
    pub fn held_total(&self) -> usize {
        self.hand.len() + self.reserve.len()
    }

    /// Locate a held card by ID.
    #[must_use]
    pub fn find(&self, id: CardId) -> Option<(Origin, Card)> {
        if let Some(card) = self.hand.iter().find(|c| c.id == id) {
            return Some((Origin::Hand, *card));
        }
        if let Some(card) = self.reserve.iter().find(|c| c.id == id) {
            return Some((Origin::Reserve, *card));
        }
        None
    }

    /// Is this card in hand or reserve?
    #[must_use]
    pub fn holds(&self, id: CardId) -> bool {
        self.find(id).is_some()
    }

    /// Remove a held card, wherever it is.
    ///
    /// Returns the card and the zone it left, or `None` if not held.
    pub fn remove(&mut self, id: CardId) -> Option<(Origin, Card)> {
        if let Some(pos) = self.hand.iter().position(|c| c.id == id) {
            return Some((Origin::Hand, self.hand.remove(pos)));
        }
        if let Some(pos) = self.reserve.iter().position(|c| c.id == id) {
            return Some((Origin::Reserve, self.reserve.remove(pos)));
        }
        None
    }

    /// Add a card to the given zone if its capacity allows.
    ///
    /// Returns false (card untouched by this player) when the zone is full.
    #[must_use]
    pub fn try_add(&mut self, origin: Origin, card: Card) -> bool {
        match origin {
            Origin::Hand => {
                if self.hand.len() >= HAND_LIMIT {
                    return false;
                }
                self.hand.push(card);
            }
            Origin::Reserve => {
                if self.reserve.len() >= RESERVE_LIMIT {
                    return false;
                }
                self.reserve.push(card);
            }
        }
        true
    }

    /// Move a held card to the discard pile.
    ///
    /// Returns false if the card was not held.
    pub fn discard_held(&mut self, id: CardId) -> bool {
        match self.remove(id) {
            Some((_, card)) => {
                self.discard.push_back(card);
                true
            }
            None => false,
        }
    }

    /// Raise maximum health by `amount` and restore health to the new
    /// maximum. All healing effects in the rules work this way.
    pub fn heal(&mut self, amount: u32) {
        self.max_health += amount;
        self.health = self.max_health;
    }

    /// Apply a partial profile write.
    pub fn update_profile(&mut self, update: ProfileUpdate) {
        if let Some(name) = update.name {
            self.profile.name = name;
        }
        if let Some(epithet) = update.epithet {
            self.profile.epithet = epithet;
        }
        if let Some(avatar) = update.avatar {
            self.profile.avatar = Some(avatar);
        }
    }
}
