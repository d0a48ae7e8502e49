//! Complete game state.
//!
//! `GameState` is created once per session and mutated exclusively by the
//! engine's command reducer; observers read snapshots. Cloning is cheap -
//! the unbounded piles use `im` persistent vectors and everything else is
//! small and flat.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use serde::{Deserialize, Serialize};

use super::phase::Phase;
use super::player::Player;
use super::rng::GameRng;
use super::suit_map::SuitMap;
use crate::cards::{Activator, Card, CardId, DrawPile, Rank, DECK_SIZE};
use crate::zones::Column;

/// Number of cards dealt to the hand at game start.
pub const OPENING_DEAL: usize = 7;

/// Who won a finished game. Surrender is the only terminal condition, so
/// the only winner the engine ever records is the (absent) opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Opponent,
}

/// Complete game state for one session.
///
/// Serializes in full, the RNG position included, so a saved game
/// resumes with the exact shuffle stream it would have had.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    pub player: Player,
    pub draw_pile: DrawPile,
    pub phase: Phase,

    /// Turn number, starting at 1.
    pub turn: u32,

    /// Provisionally selected cards, at most 2.
    pub selected: SmallVec<[Card; 2]>,

    pub columns: SuitMap<Column>,

    // Per-turn flags, reset at end of turn.
    pub has_discarded: bool,
    pub has_drawn: bool,
    pub has_played_action: bool,

    /// How many cards the last resolved action consumed.
    pub played_cards_last_turn: u8,

    /// The Queen of a pending challenge, if one is open.
    pub queen_challenge: Option<Card>,

    /// Set once the free first Strategic Shuffle has been spent.
    pub has_used_first_strategic_shuffle: bool,

    /// Phase override staged by some actions, consumed by end-of-turn.
    pub next_phase: Option<Phase>,

    pub is_game_over: bool,
    pub winner: Option<Winner>,

    pub rng: GameRng,
}

impl GameState {
    /// Initialize a fresh game: shuffled 54-card pile, seven cards dealt
    /// to the hand, setup phase, turn 1.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let mut draw_pile = DrawPile::shuffled(&mut rng);

        let mut player = Player::new();
        for _ in 0..OPENING_DEAL {
            if let Some(card) = draw_pile.draw() {
                // Setup deal exceeds the in-play hand limit on purpose;
                // two cards move to the reserve before the game starts.
                player.hand.push(card);
            }
        }

        Self {
            player,
            draw_pile,
            phase: Phase::Setup,
            turn: 1,
            selected: SmallVec::new(),
            columns: SuitMap::new(|_| Column::new()),
            has_discarded: false,
            has_drawn: false,
            has_played_action: false,
            played_cards_last_turn: 0,
            queen_challenge: None,
            has_used_first_strategic_shuffle: false,
            next_phase: None,
            is_game_over: false,
            winner: None,
            rng,
        }
    }

    // === Selection ===

    /// Is this card currently selected?
    #[must_use]
    pub fn is_selected(&self, id: CardId) -> bool {
        self.selected.iter().any(|c| c.id == id)
    }

    /// The selected Ace, if any.
    #[must_use]
    pub fn selected_ace(&self) -> Option<Card> {
        self.selected.iter().find(|c| c.rank == Rank::Ace).copied()
    }

    /// The selected Queen, if any.
    #[must_use]
    pub fn selected_queen(&self) -> Option<Card> {
        self.selected.iter().find(|c| c.rank == Rank::Queen).copied()
    }

    /// The selected Jack or King, if any.
    #[must_use]
    pub fn selected_face(&self) -> Option<Card> {
        self.selected.iter().find(|c| c.rank.is_face()).copied()
    }

    /// The selected Joker, if any.
    #[must_use]
    pub fn selected_joker(&self) -> Option<Card> {
        self.selected.iter().find(|c| c.is_joker()).copied()
    }

    /// The selected activator (seven or Joker), if any.
    #[must_use]
    pub fn selected_activator(&self) -> Option<Activator> {
        self.selected.iter().find_map(|c| Activator::from_card(*c))
    }

    /// Drop the provisional selection.
    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// May the turn be ended right now?
    #[must_use]
    pub fn can_end_turn(&self) -> bool {
        self.phase == Phase::Action && self.has_played_action && !self.is_game_over
    }

    // === Invariants ===

    /// Card conservation: every one of the 54 card IDs appears exactly
    /// once across all zones.
    #[must_use]
    pub fn is_conserved(&self) -> bool {
        let mut seen: FxHashSet<CardId> = FxHashSet::default();
        let mut count = 0usize;

        let mut visit = |card: &Card| {
            count += 1;
            seen.insert(card.id)
        };

        for card in self.draw_pile.iter() {
            if !visit(card) {
                return false;
            }
        }
        for card in self.player.hand.iter().chain(self.player.reserve.iter()) {
            if !visit(card) {
                return false;
            }
        }
        for card in self.player.discard.iter() {
            if !visit(card) {
                return false;
            }
        }
        for column in self.columns.values() {
            for card in column.all_cards() {
                if !visit(card) {
                    return false;
                }
            }
        }

        count == DECK_SIZE && seen.len() == DECK_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    #[test]
    fn test_new_game() {
        let state = GameState::new(42);

        assert_eq!(state.phase, Phase::Setup);
        assert_eq!(state.turn, 1);
        assert_eq!(state.player.hand.len(), OPENING_DEAL);
        assert_eq!(state.draw_pile.len(), DECK_SIZE - OPENING_DEAL);
        assert!(state.selected.is_empty());
        assert!(!state.is_game_over);
        assert!(state.is_conserved());
    }

    #[test]
    fn test_new_game_deterministic() {
        let a = GameState::new(42);
        let b = GameState::new(42);

        assert_eq!(a.player.hand, b.player.hand);
    }

    #[test]
    fn test_selection_lookups() {
        let mut state = GameState::new(42);
        let ace = Card::number(CardId::new(0), Suit::Hearts, Rank::Ace);
        let seven = Card::number(CardId::new(6), Suit::Hearts, Rank::Seven);
        state.selected.push(ace);
        state.selected.push(seven);

        assert!(state.is_selected(ace.id));
        assert_eq!(state.selected_ace(), Some(ace));
        assert!(state.selected_activator().is_some());
        assert_eq!(state.selected_queen(), None);

        state.clear_selection();
        assert!(!state.is_selected(ace.id));
    }

    #[test]
    fn test_can_end_turn() {
        let mut state = GameState::new(42);
        assert!(!state.can_end_turn());

        state.phase = Phase::Action;
        assert!(!state.can_end_turn());

        state.has_played_action = true;
        assert!(state.can_end_turn());

        state.is_game_over = true;
        assert!(!state.can_end_turn());
    }

    #[test]
    fn test_state_serde_round_trip() {
        let mut state = GameState::new(42);
        let json = serde_json::to_string(&state).unwrap();
        let mut restored: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.player, state.player);
        assert_eq!(restored.draw_pile, state.draw_pile);
        assert_eq!(restored.phase, state.phase);
        assert!(restored.is_conserved());

        // The restored RNG continues the same stream.
        let mut a: Vec<u32> = (0..20).collect();
        let mut b = a.clone();
        state.rng.shuffle(&mut a);
        restored.rng.shuffle(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_conservation_detects_loss() {
        let mut state = GameState::new(42);
        assert!(state.is_conserved());

        state.player.hand.pop();
        assert!(!state.is_conserved());
    }

    #[test]
    fn test_conservation_detects_duplication() {
        let mut state = GameState::new(42);
        let card = state.player.hand[0];

        state.player.discard.push_back(card);
        assert!(!state.is_conserved());
    }
}
