//! The fixed 54-card catalog and the draw pile.
//!
//! `standard_deck` is deterministic: card IDs are assigned by catalog
//! position (suit-major, then the two Jokers), so the same ID always
//! names the same physical card across sessions.
//!
//! `DrawPile` owns the face-down pile. Drawing past the bottom recycles
//! the discard pile (shuffled) rather than failing; drawing with both
//! piles empty simply yields fewer cards.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::card::{Card, CardId, Color, Rank, Suit};
use crate::core::rng::GameRng;

/// Total cards in the universe: 52 numbered plus 2 Jokers.
pub const DECK_SIZE: usize = 54;

/// Build the full 54-card catalog in deterministic order.
#[must_use]
pub fn standard_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    let mut next_id = 0u8;

    for suit in Suit::COLUMNS {
        for rank in Rank::NUMBERED {
            cards.push(Card::number(CardId::new(next_id), suit, rank));
            next_id += 1;
        }
    }

    cards.push(Card::joker(CardId::new(next_id), Color::Red));
    cards.push(Card::joker(CardId::new(next_id + 1), Color::Black));

    cards
}

/// The face-down draw pile. Top of the pile is the back of the vector.
///
/// Serializes as a plain bottom-to-top card array.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrawPile {
    cards: Vector<Card>,
}

impl DrawPile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pile from cards in bottom-to-top order.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Build a freshly shuffled full pile.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut cards = standard_deck();
        rng.shuffle(&mut cards);
        Self::from_cards(cards)
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Is the pile empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate bottom-to-top.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Draw a single card from the top.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    /// Shuffle the discard pile back in as the new draw pile.
    ///
    /// Only meaningful when this pile is empty; the discard pile is
    /// drained either way.
    pub fn recycle(&mut self, discard: &mut Vector<Card>, rng: &mut GameRng) {
        let mut recovered: Vec<Card> = discard.iter().copied().collect();
        discard.clear();
        rng.shuffle(&mut recovered);
        self.cards.extend(recovered);
    }

    /// Draw up to `n` cards, recycling the discard pile when this one
    /// runs dry. Returns fewer than `n` only when both piles are empty.
    pub fn draw_up_to(
        &mut self,
        n: usize,
        discard: &mut Vector<Card>,
        rng: &mut GameRng,
    ) -> Vec<Card> {
        let mut drawn = Vec::with_capacity(n);

        while drawn.len() < n {
            if self.is_empty() {
                if discard.is_empty() {
                    break;
                }
                self.recycle(discard, rng);
            }
            match self.draw() {
                Some(card) => drawn.push(card),
                None => break,
            }
        }

        drawn
    }
}
