//! Per-suit data storage.
//!
//! `SuitMap` holds one value per column suit with O(1) access, backed by
//! a fixed array. Indexing with `Suit::Special` panics - the Jokers have
//! no column.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::cards::Suit;

/// Per-suit data storage with O(1) access.
///
/// One entry per column suit (hearts, diamonds, clubs, spades).
///
/// ## Example
///
/// ```
/// use lucky_columns::cards::Suit;
/// use lucky_columns::core::SuitMap;
///
/// let mut locked: SuitMap<bool> = SuitMap::new(|_| false);
/// locked[Suit::Hearts] = true;
/// assert!(locked[Suit::Hearts]);
/// assert!(!locked[Suit::Spades]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuitMap<T> {
    data: [T; 4],
}

impl<T> SuitMap<T> {
    /// Create with a factory function, called once per column suit.
    pub fn new(factory: impl Fn(Suit) -> T) -> Self {
        Self {
            data: [
                factory(Suit::Hearts),
                factory(Suit::Diamonds),
                factory(Suit::Clubs),
                factory(Suit::Spades),
            ],
        }
    }

    /// Iterate over `(suit, value)` pairs in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Suit, &T)> {
        Suit::COLUMNS.iter().copied().zip(self.data.iter())
    }

    /// Iterate mutably over `(suit, value)` pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Suit, &mut T)> {
        Suit::COLUMNS.iter().copied().zip(self.data.iter_mut())
    }

    /// Iterate over values only.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate mutably over values only.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }
}

impl<T: Default> Default for SuitMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Suit> for SuitMap<T> {
    type Output = T;

    fn index(&self, suit: Suit) -> &T {
        let idx = suit.column_index().expect("no column for special suit");
        &self.data[idx]
    }
}

impl<T> IndexMut<Suit> for SuitMap<T> {
    fn index_mut(&mut self, suit: Suit) -> &mut T {
        let idx = suit.column_index().expect("no column for special suit");
        &mut self.data[idx]
    }
}
