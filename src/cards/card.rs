//! Card values: suits, ranks, colors, and the activator classification.
//!
//! Cards are immutable values created once at game start. They are never
//! destroyed - commands only move them between zones, so `Card` is `Copy`
//! and identity is carried by `CardId`.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card within the 54-card universe.
///
/// Identifies a specific physical card (e.g., "the seven of hearts"),
/// stable for the whole session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u8);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Card suit. `Special` is reserved for the two Jokers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
    Special,
}

impl Suit {
    /// The four column suits, in catalog order.
    pub const COLUMNS: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Color of a column suit. Panics for `Special` - Jokers carry their
    /// own color in `CardKind`.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
            Suit::Special => panic!("Special suit has no inherent color"),
        }
    }

    /// Column index for the four column suits, `None` for `Special`.
    #[must_use]
    pub fn column_index(self) -> Option<usize> {
        match self {
            Suit::Hearts => Some(0),
            Suit::Diamonds => Some(1),
            Suit::Clubs => Some(2),
            Suit::Spades => Some(3),
            Suit::Special => None,
        }
    }
}

/// Card rank. `Joker` is only carried by the two special cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Joker,
}

impl Rank {
    /// The thirteen ranks of a column suit, ascending.
    pub const NUMBERED: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Ranks swept by a Revolution: Ace through Ten.
    #[must_use]
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            Rank::Ace
                | Rank::Two
                | Rank::Three
                | Rank::Four
                | Rank::Five
                | Rank::Six
                | Rank::Seven
                | Rank::Eight
                | Rank::Nine
                | Rank::Ten
        )
    }

    /// Jack or King - the column face-card attachments.
    #[must_use]
    pub fn is_face(self) -> bool {
        matches!(self, Rank::Jack | Rank::King)
    }
}

/// Card color, derived from the suit for number cards and stored
/// explicitly for Jokers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
}

/// Card kind. Jokers carry their color since `Special` has none.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Number,
    Joker(Color),
}

/// An immutable card value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub suit: Suit,
    pub rank: Rank,
    pub kind: CardKind,
}

impl Card {
    /// Create a number card (anything that is not a Joker).
    #[must_use]
    pub const fn number(id: CardId, suit: Suit, rank: Rank) -> Self {
        Self {
            id,
            suit,
            rank,
            kind: CardKind::Number,
        }
    }

    /// Create one of the two Jokers.
    #[must_use]
    pub const fn joker(id: CardId, color: Color) -> Self {
        Self {
            id,
            suit: Suit::Special,
            rank: Rank::Joker,
            kind: CardKind::Joker(color),
        }
    }

    /// Card color: suit color for number cards, own color for Jokers.
    #[must_use]
    pub fn color(&self) -> Color {
        match self.kind {
            CardKind::Number => self.suit.color(),
            CardKind::Joker(color) => color,
        }
    }

    /// Is this a Joker?
    #[must_use]
    pub fn is_joker(&self) -> bool {
        matches!(self.kind, CardKind::Joker(_))
    }

    /// Is this the red Joker? Only meaningful for Jokers.
    #[must_use]
    pub fn is_red_joker(&self) -> bool {
        matches!(self.kind, CardKind::Joker(Color::Red))
    }

    /// Is this card an activator (a seven or a Joker)?
    #[must_use]
    pub fn is_activator(&self) -> bool {
        Activator::from_card(*self).is_some()
    }
}

/// Which kind of activator occupies a column's guarded slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivatorKind {
    Seven,
    Joker,
}

/// An activator: a seven or a Joker, the only cards that may occupy or
/// exchange into a column's guarded slot.
///
/// Replaces scattered `is joker or seven` checks with one tagged variant
/// and uniform accessors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Activator {
    Seven(Card),
    Joker(Card),
}

impl Activator {
    /// Classify a card as an activator, if it is one.
    #[must_use]
    pub fn from_card(card: Card) -> Option<Self> {
        match (card.rank, card.kind) {
            (Rank::Seven, CardKind::Number) => Some(Activator::Seven(card)),
            (_, CardKind::Joker(_)) => Some(Activator::Joker(card)),
            _ => None,
        }
    }

    /// The underlying card.
    #[must_use]
    pub fn card(&self) -> Card {
        match self {
            Activator::Seven(card) | Activator::Joker(card) => *card,
        }
    }

    /// Which kind of activator this is.
    #[must_use]
    pub fn kind(&self) -> ActivatorKind {
        match self {
            Activator::Seven(_) => ActivatorKind::Seven,
            Activator::Joker(_) => ActivatorKind::Joker,
        }
    }

    /// Uniform color accessor for legality checks.
    #[must_use]
    pub fn color(&self) -> Color {
        self.card().color()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_card_color() {
        let card = Card::number(CardId::new(0), Suit::Hearts, Rank::Ace);
        assert_eq!(card.color(), Color::Red);

        let card = Card::number(CardId::new(30), Suit::Spades, Rank::Five);
        assert_eq!(card.color(), Color::Black);
    }

    #[test]
    fn test_joker_color() {
        let red = Card::joker(CardId::new(52), Color::Red);
        let black = Card::joker(CardId::new(53), Color::Black);

        assert!(red.is_red_joker());
        assert!(!black.is_red_joker());
        assert_eq!(red.color(), Color::Red);
        assert_eq!(black.color(), Color::Black);
    }

    #[test]
    fn test_activator_classification() {
        let seven = Card::number(CardId::new(6), Suit::Hearts, Rank::Seven);
        let joker = Card::joker(CardId::new(52), Color::Red);
        let ace = Card::number(CardId::new(0), Suit::Hearts, Rank::Ace);

        assert_eq!(
            Activator::from_card(seven).map(|a| a.kind()),
            Some(ActivatorKind::Seven)
        );
        assert_eq!(
            Activator::from_card(joker).map(|a| a.kind()),
            Some(ActivatorKind::Joker)
        );
        assert!(Activator::from_card(ace).is_none());

        assert!(seven.is_activator());
        assert!(joker.is_activator());
        assert!(!ace.is_activator());
    }

    #[test]
    fn test_revolution_rank_range() {
        assert!(Rank::Ace.is_numeric());
        assert!(Rank::Ten.is_numeric());
        assert!(!Rank::Jack.is_numeric());
        assert!(!Rank::Queen.is_numeric());
        assert!(!Rank::King.is_numeric());
        assert!(!Rank::Joker.is_numeric());
    }

    #[test]
    fn test_face_ranks() {
        assert!(Rank::Jack.is_face());
        assert!(Rank::King.is_face());
        assert!(!Rank::Queen.is_face());
        assert!(!Rank::Seven.is_face());
    }
}
