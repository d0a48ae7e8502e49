//! Special-card effects: Joker heal/attack, the Queen's challenge,
//! Strategic Shuffle, and Revolution.

use crate::cards::{Card, CardId, DrawPile, Suit};
use crate::core::{GameState, Phase};
use crate::zones::HAND_LIMIT;

use super::message::GameMessage;
use super::{action_ready, JokerMode, Outcome};

/// Resolve a held Joker, alone or paired with a selected Queen.
///
/// Paired with a Queen, `Heal` grants +4 max health and `Attack` opens
/// the Queen's challenge without consuming the action. A lone Joker
/// heals +2 or performs a plain attack, either way spent to the discard
/// pile.
pub(crate) fn joker_action(state: &mut GameState, joker: CardId, mode: JokerMode) -> Outcome {
    if !action_ready(state) {
        return Outcome::ignored();
    }
    let Some((_, joker_card)) = state.player.find(joker) else {
        return Outcome::ignored();
    };
    if !joker_card.is_joker() {
        return Outcome::ignored();
    }

    if let (Some(queen), Some(paired)) = (state.selected_queen(), state.selected_joker()) {
        return match mode {
            JokerMode::Heal => {
                if !discard_pair(state, queen, paired) {
                    return Outcome::ignored();
                }
                state.player.heal(4);
                state.clear_selection();
                state.has_played_action = true;
                state.played_cards_last_turn = 2;
                Outcome::applied(GameMessage::QueenHeal { amount: 4 })
            }
            JokerMode::Attack => {
                // At most one challenge may be pending.
                if state.queen_challenge.is_some() {
                    return Outcome::ignored();
                }
                state.queen_challenge = Some(queen);
                Outcome::applied(GameMessage::QueenChallengeOpened)
            }
        };
    }

    state.player.remove(joker_card.id);
    state.player.discard.push_back(joker_card);
    state.clear_selection();
    state.has_played_action = true;
    state.played_cards_last_turn = 1;

    match mode {
        JokerMode::Heal => {
            state.player.heal(2);
            Outcome::applied(GameMessage::JokerHeal {
                amount: 2,
                health: state.player.health,
            })
        }
        JokerMode::Attack => Outcome::applied(GameMessage::JokerAttack),
    }
}

/// Settle a pending Queen challenge: +5 max health on a correct guess,
/// +1 otherwise. Queen and Joker are both spent.
pub(crate) fn queen_challenge(state: &mut GameState, correct: bool) -> Outcome {
    if !action_ready(state) || state.queen_challenge.is_none() {
        return Outcome::ignored();
    }
    let (Some(queen), Some(joker)) = (state.selected_queen(), state.selected_joker()) else {
        return Outcome::ignored();
    };

    let amount = if correct { 5 } else { 1 };
    if !discard_pair(state, queen, joker) {
        return Outcome::ignored();
    }
    state.player.heal(amount);
    state.queen_challenge = None;
    state.clear_selection();
    state.has_played_action = true;
    state.played_cards_last_turn = 2;
    Outcome::applied(GameMessage::QueenChallengeResult { amount, correct })
}

/// Spend two held cards to the discard pile.
///
/// Both must still be held; a selection can reference cards that have
/// since left the player's zones. Returns false (nothing moved) when
/// either is gone.
fn discard_pair(state: &mut GameState, first: Card, second: Card) -> bool {
    if !state.player.holds(first.id) || !state.player.holds(second.id) {
        return false;
    }
    state.player.remove(first.id);
    state.player.remove(second.id);
    state.player.discard.push_back(first);
    state.player.discard.push_back(second);
    true
}

/// Strategic Shuffle: fold hand and discard pile into the draw pile,
/// reshuffle, and draw a fresh hand of five. The reserve is untouched.
///
/// Usable only at the very start of a turn, once per turn cycle. The
/// first use of the game is free; every later use consumes the action.
pub(crate) fn strategic_shuffle(state: &mut GameState) -> Outcome {
    let eligible = state.phase == Phase::Discard
        && !state.has_discarded
        && !state.has_drawn
        && !state.has_played_action
        && !state.player.has_used_strategic_shuffle;
    if !eligible {
        return Outcome::ignored();
    }

    // The hand is about to be replaced wholesale; any selection into it
    // is void.
    state.clear_selection();

    let mut pool: Vec<Card> = state.draw_pile.iter().copied().collect();
    pool.extend(state.player.hand.drain(..));
    pool.extend(state.player.discard.iter().copied());
    state.player.discard.clear();
    state.rng.shuffle(&mut pool);

    let hand_count = pool.len().min(HAND_LIMIT);
    let new_hand = pool.split_off(pool.len() - hand_count);
    state.player.hand.extend(new_hand);
    state.draw_pile = DrawPile::from_cards(pool);

    state.player.has_used_strategic_shuffle = true;
    state.phase = Phase::Action;
    state.has_discarded = true;
    state.has_drawn = true;

    if !state.has_used_first_strategic_shuffle {
        state.has_used_first_strategic_shuffle = true;
        Outcome::applied(GameMessage::StrategicShuffleFirst)
    } else {
        state.has_played_action = true;
        Outcome::applied(GameMessage::StrategicShuffleNext)
    }
}

/// Fold hand and discard pile back into the draw pile without
/// redrawing. Marks both the discard and the action spent.
pub(crate) fn confirm_strategic_shuffle(state: &mut GameState) -> Outcome {
    if state.phase != Phase::Discard || state.has_discarded {
        return Outcome::ignored();
    }

    state.clear_selection();

    let mut pool: Vec<Card> = state.draw_pile.iter().copied().collect();
    pool.extend(state.player.hand.drain(..));
    pool.extend(state.player.discard.iter().copied());
    state.player.discard.clear();
    state.rng.shuffle(&mut pool);
    state.draw_pile = DrawPile::from_cards(pool);

    state.has_discarded = true;
    state.has_played_action = true;
    Outcome::applied(GameMessage::StrategicShuffleConfirmed)
}

/// Revolution: every Ace-through-ten leaves the columns for the discard
/// pile, including numbered cards guarding a slot, and every column's
/// flags reset. Face cards and Jokers stay where they are.
pub(crate) fn revolution(state: &mut GameState) -> Outcome {
    if !action_ready(state) {
        return Outcome::ignored();
    }

    for suit in Suit::COLUMNS {
        let column = &mut state.columns[suit];

        let mut kept = Vec::with_capacity(column.cards.len());
        for card in column.cards.drain(..) {
            if card.rank.is_numeric() {
                state.player.discard.push_back(card);
            } else {
                kept.push(card);
            }
        }
        column.cards = kept;

        if let Some(card) = column.reserve_slot {
            if card.rank.is_numeric() {
                column.reserve_slot = None;
                state.player.discard.push_back(card);
            }
        }

        column.reset_flags();
    }

    state.has_played_action = true;
    state.next_phase = Some(if state.player.held_total() >= 7 {
        Phase::Discard
    } else {
        Phase::Draw
    });
    Outcome::applied(GameMessage::Revolution)
}
