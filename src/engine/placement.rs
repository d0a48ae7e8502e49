//! Column placement and the guarded-slot exchange primitive.
//!
//! Every way an activator can enter a column's guarded slot - the lone
//! seven action, a seven tapped onto the slot position, and the explicit
//! activator exchange - funnels through [`exchange_into_slot`], so the
//! legality rules (no identical card, no same-color Joker pair) hold on
//! every path.

use crate::cards::{Activator, ActivatorKind, Card, CardId, Rank, Suit};
use crate::core::{GameState, Phase};

use super::message::GameMessage;
use super::{action_ready, Outcome};

/// Tap position addressing a column's guarded slot. Run positions 0-6
/// hold Ace through seven; the slot guards the final entry.
pub const SLOT_POSITION: usize = 7;

/// Result of the canonical guarded-slot exchange.
enum SlotExchange {
    /// Preconditions not met; nothing changed.
    Ignored,
    /// Legality rule violated; nothing changed.
    Rejected(GameMessage),
    /// Slot swapped. `displaced` is the previous occupant, already
    /// returned to the mover's origin zone (or the discard pile on
    /// overflow).
    Done { displaced: Option<Card> },
}

/// The one primitive that mutates a guarded slot.
///
/// Removes `offered` from the player's hand or reserve, installs it in
/// the column's slot, and routes any displaced occupant back to the
/// offered card's origin zone - overflowing to the discard pile when
/// that zone is full, so the card is never lost and the action never
/// blocks. Consumes the turn's action on success.
fn exchange_into_slot(state: &mut GameState, suit: Suit, offered: CardId, block: bool) -> SlotExchange {
    let Some((origin, card)) = state.player.find(offered) else {
        return SlotExchange::Ignored;
    };
    let Some(incoming) = Activator::from_card(card) else {
        return SlotExchange::Ignored;
    };

    if let Some(current) = state.columns[suit].reserve_slot {
        // Both Jokers share rank and suit, so the color rule must run
        // before the identity rule.
        if current.is_joker() && card.is_joker() {
            if current.color() == card.color() {
                return SlotExchange::Rejected(GameMessage::SameColorJokers);
            }
        } else if current.id == card.id {
            return SlotExchange::Rejected(GameMessage::IdenticalExchange);
        }
    }

    state.player.remove(offered);
    let displaced = state.columns[suit].swap_guard(incoming);
    if block {
        state.columns[suit].is_reserve_blocked = true;
    }

    if let Some(card) = displaced {
        if !state.player.try_add(origin, card) {
            state.player.discard.push_back(card);
        }
    }

    state.clear_selection();
    state.has_played_action = true;
    state.played_cards_last_turn = 1;
    SlotExchange::Done { displaced }
}

/// Resolve a tap on a column.
///
/// Dispatches on the current selection: Ace+activator opens the column,
/// Jack/King+activator attaches a face card, Queen+activator heals, and
/// a lone seven places sequentially or into the guarded slot.
pub(crate) fn place_card(state: &mut GameState, suit: Suit, position: usize) -> Outcome {
    if !action_ready(state) {
        return Outcome::ignored();
    }

    match state.selected.len() {
        2 => {
            if let (Some(ace), Some(activator)) = (state.selected_ace(), state.selected_activator())
            {
                return open_column(state, suit, position, ace, activator);
            }
            if let (Some(face), Some(activator)) =
                (state.selected_face(), state.selected_activator())
            {
                return attach_face_card(state, suit, position, face, activator);
            }
            if let (Some(queen), Some(activator)) =
                (state.selected_queen(), state.selected_activator())
            {
                return queen_heal_combo(state, queen, activator);
            }
            Outcome::ignored()
        }
        1 => {
            let card = state.selected[0];
            if card.rank == Rank::Seven && card.suit == suit {
                return place_seven(state, suit, position, card);
            }
            Outcome::ignored()
        }
        _ => Outcome::ignored(),
    }
}

/// Ace + activator: open the Ace's column.
fn open_column(
    state: &mut GameState,
    suit: Suit,
    position: usize,
    ace: Card,
    activator: Activator,
) -> Outcome {
    if position != 0 || ace.suit != suit {
        return Outcome::ignored();
    }

    let column = &state.columns[suit];
    if !column.is_empty() && column.has_lucky_card {
        return Outcome::ignored();
    }
    // The selection may reference cards no longer held.
    if !state.player.holds(ace.id) || !state.player.holds(activator.card().id) {
        return Outcome::ignored();
    }

    state.player.remove(ace.id);
    state.player.remove(activator.card().id);
    state.columns[suit].open(ace, activator);

    state.clear_selection();
    state.has_played_action = true;
    state.played_cards_last_turn = 2;
    Outcome::applied(GameMessage::ColumnActivated { suit })
}

/// Jack/King + activator: attach the face card to its suit's column.
///
/// The column must already hold its lucky card; the activator is spent
/// to the discard pile, not stored.
fn attach_face_card(
    state: &mut GameState,
    suit: Suit,
    position: usize,
    face: Card,
    activator: Activator,
) -> Outcome {
    if position != 0 || face.suit != suit {
        return Outcome::ignored();
    }
    if !state.columns[suit].has_lucky_card {
        return Outcome::ignored();
    }
    // One attachment per face rank.
    match state.columns[suit].face_cards.slot(face.rank) {
        Some(slot) if slot.is_none() => {}
        _ => return Outcome::ignored(),
    }
    if !state.player.holds(face.id) || !state.player.holds(activator.card().id) {
        return Outcome::ignored();
    }

    state.player.remove(face.id);
    state.player.remove(activator.card().id);
    if let Some(slot) = state.columns[suit].face_cards.slot_mut(face.rank) {
        *slot = Some(face);
    }
    state.player.discard.push_back(activator.card());

    state.clear_selection();
    state.has_played_action = true;
    state.played_cards_last_turn = 2;
    Outcome::applied(GameMessage::FaceCardPlaced { rank: face.rank })
}

/// Queen + activator: immediate heal, both cards discarded.
///
/// +4 paired with a Joker, +2 with a seven. Stages the next-phase
/// override from the remaining holding.
fn queen_heal_combo(state: &mut GameState, queen: Card, activator: Activator) -> Outcome {
    let amount = match activator.kind() {
        ActivatorKind::Joker => 4,
        ActivatorKind::Seven => 2,
    };
    if !state.player.holds(queen.id) || !state.player.holds(activator.card().id) {
        return Outcome::ignored();
    }

    state.player.remove(queen.id);
    state.player.remove(activator.card().id);
    state.player.discard.push_back(queen);
    state.player.discard.push_back(activator.card());
    state.player.heal(amount);

    state.next_phase = Some(if state.player.held_total() == 7 {
        Phase::Discard
    } else {
        Phase::Draw
    });

    state.clear_selection();
    state.has_played_action = true;
    state.played_cards_last_turn = 2;
    Outcome::applied(GameMessage::QueenHeal { amount })
}

/// Lone seven: sequential run placement or the guarded slot.
fn place_seven(state: &mut GameState, suit: Suit, position: usize, seven: Card) -> Outcome {
    if position == SLOT_POSITION {
        return match exchange_into_slot(state, suit, seven.id, true) {
            SlotExchange::Ignored => Outcome::ignored(),
            SlotExchange::Rejected(message) => Outcome::rejected(message),
            SlotExchange::Done { displaced: Some(card) } => {
                Outcome::applied(GameMessage::ActivatorRecovered { rank: card.rank })
            }
            SlotExchange::Done { displaced: None } => {
                Outcome::applied(GameMessage::SevenPlaced { suit })
            }
        };
    }

    // Sequential placement extends the run; the preceding position must
    // already be filled and the column unlocked.
    let column = &state.columns[suit];
    if column.is_locked || position == 0 || position != column.cards.len() {
        return Outcome::ignored();
    }
    if !state.player.holds(seven.id) {
        return Outcome::ignored();
    }

    state.player.remove(seven.id);
    state.columns[suit].cards.push(seven);

    state.clear_selection();
    state.has_played_action = true;
    state.played_cards_last_turn = 1;
    Outcome::applied(GameMessage::SevenPlaced { suit })
}

/// Lone seven straight into its own suit's guarded slot.
pub(crate) fn seven_action(state: &mut GameState, seven: CardId) -> Outcome {
    if !action_ready(state) {
        return Outcome::ignored();
    }
    let Some((_, card)) = state.player.find(seven) else {
        return Outcome::ignored();
    };
    if card.rank != Rank::Seven {
        return Outcome::ignored();
    }

    match exchange_into_slot(state, card.suit, seven, true) {
        SlotExchange::Ignored => Outcome::ignored(),
        SlotExchange::Rejected(message) => Outcome::rejected(message),
        SlotExchange::Done { displaced: Some(displaced) } => {
            Outcome::applied(GameMessage::ActivatorRecovered { rank: displaced.rank })
        }
        SlotExchange::Done { displaced: None } => {
            Outcome::applied(GameMessage::SevenPlaced { suit: card.suit })
        }
    }
}

/// Swap a held activator for the one guarding a column.
pub(crate) fn activator_exchange(
    state: &mut GameState,
    column_card: CardId,
    player_card: CardId,
) -> Outcome {
    if !action_ready(state) {
        return Outcome::ignored();
    }

    // The column is addressed by its current slot occupant.
    let suit = state
        .columns
        .iter()
        .find(|(_, col)| col.reserve_slot.map(|c| c.id) == Some(column_card))
        .map(|(suit, _)| suit);
    let Some(suit) = suit else {
        return Outcome::ignored();
    };

    match exchange_into_slot(state, suit, player_card, false) {
        SlotExchange::Ignored => Outcome::ignored(),
        SlotExchange::Rejected(message) => Outcome::rejected(message),
        SlotExchange::Done { .. } => Outcome::applied(GameMessage::ExchangeComplete),
    }
}
