//! Provisional card selection.
//!
//! Up to two held cards may be selected before resolving an action. The
//! advisory message describes the combination being built; it is display
//! guidance only and carries no rule weight.

use crate::core::GameState;
use crate::cards::CardId;

use super::message::GameMessage;
use super::Outcome;

/// Maximum simultaneous selections.
pub const SELECTION_LIMIT: usize = 2;

/// Toggle a card's selection membership.
///
/// No-op once the turn's action is played. Deselecting always works;
/// selecting past the limit is ignored. Only held cards (hand or
/// reserve) can be selected.
pub(crate) fn select_card(state: &mut GameState, id: CardId) -> Outcome {
    if state.has_played_action {
        return Outcome::ignored();
    }

    if state.is_selected(id) {
        state.selected.retain(|c| c.id != id);
        return Outcome::applied_silent();
    }

    if state.selected.len() >= SELECTION_LIMIT {
        return Outcome::ignored();
    }

    let Some((_, card)) = state.player.find(id) else {
        return Outcome::ignored();
    };

    state.selected.push(card);
    match advisory(state) {
        Some(message) => Outcome::applied(message),
        None => Outcome::applied_silent(),
    }
}

/// Advisory for the current selection, if the combination suggests one.
fn advisory(state: &GameState) -> Option<GameMessage> {
    match state.selected.as_slice() {
        [card] => {
            if card.rank == crate::cards::Rank::Ace {
                Some(GameMessage::SelectActivator)
            } else if card.is_activator() {
                Some(GameMessage::SelectAce)
            } else {
                None
            }
        }
        [_, _] => {
            let combo_ready =
                state.selected_ace().is_some() && state.selected_activator().is_some();
            combo_ready.then_some(GameMessage::TapColumn)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};
    use crate::zones::Origin;

    fn state_holding(cards: &[Card]) -> GameState {
        let mut state = GameState::new(42);
        state.player.hand.clear();
        state.player.reserve.clear();
        // Keep the test focused on selection; conservation is covered
        // by the integration suite.
        for card in cards {
            assert!(state.player.try_add(Origin::Hand, *card));
        }
        state.phase = crate::core::Phase::Action;
        state
    }

    fn ace() -> Card {
        Card::number(CardId::new(0), Suit::Hearts, Rank::Ace)
    }

    fn seven() -> Card {
        Card::number(CardId::new(6), Suit::Hearts, Rank::Seven)
    }

    fn three() -> Card {
        Card::number(CardId::new(2), Suit::Hearts, Rank::Three)
    }

    #[test]
    fn test_toggle() {
        let mut state = state_holding(&[ace()]);

        let out = select_card(&mut state, ace().id);
        assert!(out.applied);
        assert!(state.is_selected(ace().id));

        let out = select_card(&mut state, ace().id);
        assert!(out.applied);
        assert!(!state.is_selected(ace().id));
    }

    #[test]
    fn test_double_toggle_restores_prior_set() {
        let mut state = state_holding(&[ace(), seven()]);
        select_card(&mut state, ace().id);

        let before = state.selected.clone();
        select_card(&mut state, seven().id);
        select_card(&mut state, seven().id);

        assert_eq!(state.selected, before);
    }

    #[test]
    fn test_selection_cap() {
        let mut state = state_holding(&[ace(), seven(), three()]);

        select_card(&mut state, ace().id);
        select_card(&mut state, seven().id);
        let out = select_card(&mut state, three().id);

        assert!(!out.applied);
        assert_eq!(state.selected.len(), 2);
        assert!(!state.is_selected(three().id));
    }

    #[test]
    fn test_advisories() {
        let mut state = state_holding(&[ace(), seven()]);

        let out = select_card(&mut state, ace().id);
        assert_eq!(out.message, Some(GameMessage::SelectActivator));

        let out = select_card(&mut state, seven().id);
        assert_eq!(out.message, Some(GameMessage::TapColumn));
    }

    #[test]
    fn test_activator_first_advisory() {
        let mut state = state_holding(&[seven()]);

        let out = select_card(&mut state, seven().id);
        assert_eq!(out.message, Some(GameMessage::SelectAce));
    }

    #[test]
    fn test_no_select_after_action() {
        let mut state = state_holding(&[ace()]);
        state.has_played_action = true;

        let out = select_card(&mut state, ace().id);
        assert!(!out.applied);
        assert!(state.selected.is_empty());
    }

    #[test]
    fn test_cannot_select_unheld_card() {
        let mut state = state_holding(&[ace()]);

        let out = select_card(&mut state, CardId::new(40));
        assert!(!out.applied);
        assert!(state.selected.is_empty());
    }
}
