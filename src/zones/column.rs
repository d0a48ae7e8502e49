//! Suit columns.
//!
//! A column is an ascending run of cards seeded by its Ace (the "lucky
//! card"), a guarded slot holding at most one activator, and optional
//! Jack/King attachments. Opening, placement, and exchange rules live in
//! the engine; this type only owns the column's bookkeeping.

use serde::{Deserialize, Serialize};

use crate::cards::{Activator, ActivatorKind, Card, Rank};

/// Optional Jack and King attachments on a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceCards {
    pub jack: Option<Card>,
    pub king: Option<Card>,
}

impl FaceCards {
    /// The attachment slot for a face rank, if `rank` is Jack or King.
    #[must_use]
    pub fn slot(&self, rank: Rank) -> Option<&Option<Card>> {
        match rank {
            Rank::Jack => Some(&self.jack),
            Rank::King => Some(&self.king),
            _ => None,
        }
    }

    /// Mutable attachment slot for a face rank.
    pub fn slot_mut(&mut self, rank: Rank) -> Option<&mut Option<Card>> {
        match rank {
            Rank::Jack => Some(&mut self.jack),
            Rank::King => Some(&mut self.king),
            _ => None,
        }
    }
}

/// One of the four suit columns.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Ascending run, seeded by the Ace when the column is opened.
    pub cards: Vec<Card>,

    /// Guarded slot: the activator protecting the column's final entry.
    pub reserve_slot: Option<Card>,

    /// What kind of activator occupies the guarded slot.
    pub activator_type: Option<ActivatorKind>,

    /// Set when the column has been opened by its Ace.
    pub has_lucky_card: bool,

    /// Locked columns refuse sequential placement.
    pub is_locked: bool,

    /// Set when a seven claims the guarded slot for good.
    pub is_reserve_blocked: bool,

    /// Jack/King attachments.
    pub face_cards: FaceCards,
}

impl Column {
    /// Create an empty, unopened column.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Is the run empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Open the column: seed the run with its Ace and put the activator
    /// in the guarded slot.
    pub fn open(&mut self, ace: Card, activator: Activator) {
        debug_assert_eq!(ace.rank, Rank::Ace);

        self.cards = vec![ace];
        self.has_lucky_card = true;
        self.reserve_slot = Some(activator.card());
        self.activator_type = Some(activator.kind());
    }

    /// Replace the guarded slot occupant, returning the displaced card.
    pub fn swap_guard(&mut self, incoming: Activator) -> Option<Card> {
        let displaced = self.reserve_slot.take();
        self.reserve_slot = Some(incoming.card());
        self.activator_type = Some(incoming.kind());
        displaced
    }

    /// Clear activation state after a Revolution sweep.
    pub fn reset_flags(&mut self) {
        self.has_lucky_card = false;
        self.activator_type = None;
        self.is_locked = false;
        self.is_reserve_blocked = false;
    }

    /// All cards physically in this column, run first, then the guarded
    /// slot and face attachments.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.cards
            .iter()
            .chain(self.reserve_slot.iter())
            .chain(self.face_cards.jack.iter())
            .chain(self.face_cards.king.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Color, Suit};

    fn ace() -> Card {
        Card::number(CardId::new(0), Suit::Hearts, Rank::Ace)
    }

    fn seven() -> Card {
        Card::number(CardId::new(6), Suit::Hearts, Rank::Seven)
    }

    fn joker() -> Card {
        Card::joker(CardId::new(52), Color::Red)
    }

    #[test]
    fn test_open_column() {
        let mut column = Column::new();
        let activator = Activator::from_card(joker()).unwrap();

        column.open(ace(), activator);

        assert_eq!(column.cards, vec![ace()]);
        assert!(column.has_lucky_card);
        assert_eq!(column.reserve_slot, Some(joker()));
        assert_eq!(column.activator_type, Some(ActivatorKind::Joker));
    }

    #[test]
    fn test_swap_guard() {
        let mut column = Column::new();
        column.open(ace(), Activator::from_card(joker()).unwrap());

        let displaced = column.swap_guard(Activator::from_card(seven()).unwrap());

        assert_eq!(displaced, Some(joker()));
        assert_eq!(column.reserve_slot, Some(seven()));
        assert_eq!(column.activator_type, Some(ActivatorKind::Seven));
    }

    #[test]
    fn test_reset_flags_keeps_cards() {
        let mut column = Column::new();
        column.open(ace(), Activator::from_card(seven()).unwrap());
        column.is_reserve_blocked = true;

        column.reset_flags();

        assert!(!column.has_lucky_card);
        assert!(!column.is_locked);
        assert!(!column.is_reserve_blocked);
        assert_eq!(column.activator_type, None);
        // reset_flags does not move cards; Revolution handles those.
        assert_eq!(column.cards, vec![ace()]);
    }

    #[test]
    fn test_all_cards() {
        let mut column = Column::new();
        column.open(ace(), Activator::from_card(seven()).unwrap());
        column.face_cards.king = Some(Card::number(CardId::new(12), Suit::Hearts, Rank::King));

        let ids: Vec<_> = column.all_cards().map(|c| c.id.raw()).collect();
        assert_eq!(ids, vec![0, 6, 12]);
    }

    #[test]
    fn test_face_slot_lookup() {
        let mut faces = FaceCards::default();
        assert!(faces.slot(Rank::Jack).unwrap().is_none());
        assert!(faces.slot(Rank::Queen).is_none());

        *faces.slot_mut(Rank::King).unwrap() =
            Some(Card::number(CardId::new(12), Suit::Hearts, Rank::King));
        assert!(faces.king.is_some());
    }
}
