//! Turn phase control.
//!
//! Setup zone moves, game start, the discard and draw phases, end of
//! turn, skipping, and surrender. The phase machine is
//! `setup -> discard -> draw -> action`, looping back to `discard` only
//! when the player holds a full seven cards (or an action staged an
//! explicit override).

use crate::cards::CardId;
use crate::core::{GameState, Phase, ProfileUpdate, Winner};
use crate::zones::{HAND_LIMIT, RESERVE_LIMIT};

use super::message::GameMessage;
use super::Outcome;

/// Holding this many cards forces a discard at the start of the turn.
const FULL_HOLDING: usize = HAND_LIMIT + RESERVE_LIMIT;

/// Setup move: hand to reserve.
pub(crate) fn move_to_reserve(state: &mut GameState, id: CardId) -> Outcome {
    if state.phase != Phase::Setup {
        return Outcome::ignored();
    }
    if state.player.reserve.len() >= RESERVE_LIMIT {
        return Outcome::rejected(GameMessage::ReserveLimit);
    }

    let Some(pos) = state.player.hand.iter().position(|c| c.id == id) else {
        return Outcome::ignored();
    };
    let card = state.player.hand.remove(pos);
    state.player.reserve.push(card);
    Outcome::applied_silent()
}

/// Setup move: reserve back to hand.
pub(crate) fn move_to_hand(state: &mut GameState, id: CardId) -> Outcome {
    if state.phase != Phase::Setup {
        return Outcome::ignored();
    }
    if state.player.hand.len() >= HAND_LIMIT {
        return Outcome::rejected(GameMessage::HandLimit);
    }

    let Some(pos) = state.player.reserve.iter().position(|c| c.id == id) else {
        return Outcome::ignored();
    };
    let card = state.player.reserve.remove(pos);
    state.player.hand.push(card);
    Outcome::applied_silent()
}

/// Leave setup once exactly two reserve cards are chosen.
pub(crate) fn start_game(state: &mut GameState) -> Outcome {
    if state.phase != Phase::Setup || state.player.reserve.len() != RESERVE_LIMIT {
        return Outcome::ignored();
    }

    state.phase = Phase::Discard;
    state.has_discarded = false;
    state.has_drawn = false;
    state.has_played_action = false;
    Outcome::applied(GameMessage::DiscardPhase)
}

/// Discard one card, or auto-advance when not over the threshold.
pub(crate) fn discard(state: &mut GameState, id: CardId) -> Outcome {
    if state.phase != Phase::Discard || state.has_discarded {
        return Outcome::ignored();
    }

    // Holding six or fewer cards, no discard is owed this turn.
    if state.player.held_total() < FULL_HOLDING {
        state.phase = Phase::Draw;
        return Outcome::applied(GameMessage::DrawPhase);
    }

    if !state.player.discard_held(id) {
        return Outcome::ignored();
    }

    state.has_discarded = true;
    state.clear_selection();
    state.phase = Phase::Draw;
    Outcome::applied(GameMessage::DrawPhase)
}

/// Refill the hand to five and the reserve to two from the draw pile.
pub(crate) fn draw_up(state: &mut GameState) -> Outcome {
    if state.phase != Phase::Draw || state.has_drawn {
        return Outcome::ignored();
    }

    let hand_space = HAND_LIMIT.saturating_sub(state.player.hand.len());
    let reserve_space = RESERVE_LIMIT.saturating_sub(state.player.reserve.len());
    let needed = hand_space + reserve_space;

    if needed > 0 {
        let drawn =
            state
                .draw_pile
                .draw_up_to(needed, &mut state.player.discard, &mut state.rng);

        // Hand fills first, then the reserve.
        for card in drawn {
            if state.player.hand.len() < HAND_LIMIT {
                state.player.hand.push(card);
            } else {
                state.player.reserve.push(card);
            }
        }
    }

    state.has_drawn = true;
    state.phase = Phase::Action;
    Outcome::applied(GameMessage::ActionPhase)
}

/// End the turn after the action is resolved.
pub(crate) fn end_turn(state: &mut GameState) -> Outcome {
    if state.phase != Phase::Action || !state.has_played_action {
        return Outcome::ignored();
    }

    let next = state.next_phase.take().unwrap_or_else(|| {
        if state.player.held_total() == FULL_HOLDING {
            Phase::Discard
        } else {
            Phase::Draw
        }
    });

    state.phase = next;
    state.has_discarded = false;
    state.has_drawn = false;
    state.has_played_action = false;
    state.player.has_used_strategic_shuffle = false;
    state.queen_challenge = None;
    state.clear_selection();
    state.turn += 1;

    Outcome::applied(match next {
        Phase::Discard => GameMessage::DiscardPhase,
        _ => GameMessage::DrawPhase,
    })
}

/// Spend the turn's action doing nothing.
pub(crate) fn skip_action(state: &mut GameState) -> Outcome {
    if state.phase != Phase::Action || state.has_played_action {
        return Outcome::ignored();
    }

    state.has_played_action = true;
    state.has_discarded = true;
    state.has_drawn = true;
    state.played_cards_last_turn = 0;
    Outcome::applied(GameMessage::ActionSkipped)
}

/// Concede the game. The only terminal transition.
pub(crate) fn surrender(state: &mut GameState) -> Outcome {
    state.is_game_over = true;
    state.winner = Some(Winner::Opponent);
    Outcome::applied(GameMessage::Surrendered)
}

/// Rule-free profile write; legal in every phase, even terminal.
pub(crate) fn update_profile(state: &mut GameState, update: ProfileUpdate) -> Outcome {
    state.player.update_profile(update);
    Outcome::applied(GameMessage::ProfileUpdated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_done(state: &mut GameState) {
        // Move two cards to the reserve and start the game.
        let ids: Vec<_> = state.player.hand.iter().take(2).map(|c| c.id).collect();
        for id in ids {
            assert!(move_to_reserve(state, id).applied);
        }
        assert!(start_game(state).applied);
    }

    #[test]
    fn test_start_game_requires_two_reserve_cards() {
        let mut state = GameState::new(42);

        assert!(!start_game(&mut state).applied);

        let id = state.player.hand[0].id;
        move_to_reserve(&mut state, id);
        assert!(!start_game(&mut state).applied);

        let id = state.player.hand[0].id;
        move_to_reserve(&mut state, id);
        let out = start_game(&mut state);
        assert!(out.applied);
        assert_eq!(state.phase, Phase::Discard);
        assert!(!state.has_discarded);
    }

    #[test]
    fn test_reserve_limit_during_setup() {
        let mut state = GameState::new(42);

        for _ in 0..2 {
            let id = state.player.hand[0].id;
            assert!(move_to_reserve(&mut state, id).applied);
        }

        let id = state.player.hand[0].id;
        let out = move_to_reserve(&mut state, id);
        assert!(!out.applied);
        assert_eq!(out.message, Some(GameMessage::ReserveLimit));
    }

    #[test]
    fn test_move_to_hand_round_trip() {
        let mut state = GameState::new(42);
        let id = state.player.hand[0].id;

        move_to_reserve(&mut state, id);
        assert_eq!(state.player.reserve.len(), 1);

        // Hand is at 6 of 5 after the opening deal, so the move back is
        // refused until there is room.
        let out = move_to_hand(&mut state, id);
        assert!(!out.applied);
        assert_eq!(out.message, Some(GameMessage::HandLimit));

        let other = state.player.hand[0].id;
        move_to_reserve(&mut state, other);
        let out = move_to_hand(&mut state, id);
        assert!(out.applied);
        assert!(state.player.hand.iter().any(|c| c.id == id));
    }

    #[test]
    fn test_discard_full_holding() {
        let mut state = GameState::new(42);
        setup_done(&mut state);
        assert_eq!(state.player.held_total(), 7);

        let id = state.player.hand[0].id;
        let out = discard(&mut state, id);

        assert!(out.applied);
        assert!(state.has_discarded);
        assert_eq!(state.phase, Phase::Draw);
        assert_eq!(state.player.held_total(), 6);
        assert_eq!(state.player.discard.len(), 1);
    }

    #[test]
    fn test_discard_auto_advances_at_six() {
        let mut state = GameState::new(42);
        setup_done(&mut state);
        let parked = state.player.hand.pop().unwrap();
        state.player.discard.push_back(parked);
        assert_eq!(state.player.held_total(), 6);

        let id = state.player.hand[0].id;
        let out = discard(&mut state, id);

        assert!(out.applied);
        assert!(!state.has_discarded);
        assert_eq!(state.phase, Phase::Draw);
        // Nothing was removed.
        assert_eq!(state.player.held_total(), 6);
    }

    #[test]
    fn test_draw_refills_hand_then_reserve() {
        let mut state = GameState::new(42);
        setup_done(&mut state);
        let id = state.player.hand[0].id;
        discard(&mut state, id);

        let pile_before = state.draw_pile.len();
        let out = draw_up(&mut state);

        assert!(out.applied);
        assert_eq!(state.phase, Phase::Action);
        assert!(state.has_drawn);
        assert_eq!(state.player.hand.len(), HAND_LIMIT);
        assert_eq!(state.player.reserve.len(), RESERVE_LIMIT);
        assert_eq!(state.draw_pile.len(), pile_before - 1);
    }

    #[test]
    fn test_draw_rejected_outside_phase() {
        let mut state = GameState::new(42);
        setup_done(&mut state);

        assert!(!draw_up(&mut state).applied);
    }

    #[test]
    fn test_end_turn_requires_action() {
        let mut state = GameState::new(42);
        setup_done(&mut state);
        state.phase = Phase::Action;

        assert!(!end_turn(&mut state).applied);

        state.has_played_action = true;
        let out = end_turn(&mut state);
        assert!(out.applied);
        assert_eq!(state.turn, 2);
        assert!(!state.has_played_action);
        assert!(!state.player.has_used_strategic_shuffle);
    }

    #[test]
    fn test_end_turn_honors_override() {
        let mut state = GameState::new(42);
        setup_done(&mut state);
        state.phase = Phase::Action;
        state.has_played_action = true;
        state.next_phase = Some(Phase::Draw);

        let out = end_turn(&mut state);

        assert!(out.applied);
        assert_eq!(state.phase, Phase::Draw);
        assert!(state.next_phase.is_none());
    }

    #[test]
    fn test_end_turn_full_holding_goes_to_discard() {
        let mut state = GameState::new(42);
        setup_done(&mut state);
        state.phase = Phase::Action;
        state.has_played_action = true;
        assert_eq!(state.player.held_total(), FULL_HOLDING);

        end_turn(&mut state);

        assert_eq!(state.phase, Phase::Discard);
    }

    #[test]
    fn test_skip_action() {
        let mut state = GameState::new(42);
        setup_done(&mut state);
        state.phase = Phase::Action;

        let out = skip_action(&mut state);

        assert!(out.applied);
        assert!(state.has_played_action);
        assert_eq!(state.played_cards_last_turn, 0);

        assert!(!skip_action(&mut state).applied);
    }

    #[test]
    fn test_surrender() {
        let mut state = GameState::new(42);

        let out = surrender(&mut state);

        assert!(out.applied);
        assert!(state.is_game_over);
        assert_eq!(state.winner, Some(Winner::Opponent));
    }

    #[test]
    fn test_update_profile() {
        let mut state = GameState::new(42);

        let out = update_profile(
            &mut state,
            ProfileUpdate {
                name: Some("Ada".to_string()),
                ..ProfileUpdate::default()
            },
        );

        assert!(out.applied);
        assert_eq!(state.player.profile.name, "Ada");
    }
}
