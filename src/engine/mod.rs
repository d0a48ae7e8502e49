//! Command-driven rule engine.
//!
//! All mutation flows through [`GameEngine::apply`]: a [`Command`] goes
//! in, the handlers rewrite the single [`GameState`], and an [`Outcome`]
//! comes back. Commands never fail with an error - an illegal command
//! is ignored (or rejected with an explanatory message) and the state
//! is left untouched.
//!
//! ## Key Features
//!
//! - **Single writer**: the engine owns the state; callers read through
//!   [`GameEngine::state`] and mutate only via commands.
//! - **Total command surface**: every handler is a total function over
//!   the current state, so a driver can replay any command log.
//! - **Conservation audit**: debug builds assert after every command
//!   that all 54 cards still sit in exactly one zone.

pub mod message;

mod effects;
mod placement;
mod selection;
mod turn;

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, Suit};
use crate::core::{GameState, ProfileUpdate};

pub use message::GameMessage;
pub use placement::SLOT_POSITION;
pub use selection::SELECTION_LIMIT;

/// Which way a resolved Joker is spent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JokerMode {
    Heal,
    Attack,
}

/// Everything a driver can ask the engine to do.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Command {
    /// Toggle a held card in the two-card selection.
    Select { card: CardId },
    /// Setup only: stage a hand card in the reserve.
    MoveToReserve { card: CardId },
    /// Setup only: return a reserve card to the hand.
    MoveToHand { card: CardId },
    /// Leave setup once the reserve holds two cards.
    StartGame,
    /// Discard one held card to open the turn.
    Discard { card: CardId },
    /// Refill hand and reserve from the draw pile.
    DrawUp,
    /// Tap a column position with the current selection.
    PlaceCard { suit: Suit, position: usize },
    /// Swap a held activator for the one guarding a column.
    ActivatorExchange { column_card: CardId, player_card: CardId },
    /// Send a held seven straight into its own column's guarded slot.
    SevenAction { card: CardId },
    /// Resolve a held Joker, alone or with a selected Queen.
    JokerAction { joker: CardId, mode: JokerMode },
    /// Settle a pending Queen challenge.
    QueenChallenge { correct: bool },
    /// Reshuffle hand and discard pile into a fresh hand of five.
    StrategicShuffle,
    /// Fold hand and discard pile into the draw pile without redrawing.
    ConfirmStrategicShuffle,
    /// Discard every numbered card from the columns and reset them.
    Revolution,
    /// Close the turn after the action is resolved.
    EndTurn,
    /// Spend the action doing nothing.
    SkipAction,
    /// Concede the game.
    Surrender,
    /// Rewrite the player profile; legal in every phase.
    UpdateProfile(ProfileUpdate),
}

/// What a command did.
///
/// `applied` is false both for ignored commands (preconditions unmet,
/// no message) and rejected ones (a rule fired, message explains).
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    pub applied: bool,
    pub message: Option<GameMessage>,
}

impl Outcome {
    pub fn applied(message: GameMessage) -> Self {
        Self { applied: true, message: Some(message) }
    }

    pub fn applied_silent() -> Self {
        Self { applied: true, message: None }
    }

    pub fn ignored() -> Self {
        Self { applied: false, message: None }
    }

    pub fn rejected(message: GameMessage) -> Self {
        Self { applied: false, message: Some(message) }
    }
}

/// True once the player may take this turn's action.
pub(crate) fn action_ready(state: &GameState) -> bool {
    state.phase == crate::core::Phase::Action && !state.has_played_action
}

/// The rule engine: owns the state, applies commands.
#[derive(Clone, Debug)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Start a fresh game from a seed: shuffled pile, seven cards dealt,
    /// setup phase.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { state: GameState::new(seed) }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Clone of the full state, for snapshot/restore drivers.
    #[must_use]
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    /// Resume from a previously captured state.
    #[must_use]
    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    /// Apply one command. Never errors; see [`Outcome`].
    pub fn apply(&mut self, command: Command) -> Outcome {
        // Terminal states accept profile edits and nothing else.
        if self.state.is_game_over && !matches!(command, Command::UpdateProfile(_)) {
            return Outcome::ignored();
        }

        let outcome = match command {
            Command::Select { card } => selection::select_card(&mut self.state, card),
            Command::MoveToReserve { card } => turn::move_to_reserve(&mut self.state, card),
            Command::MoveToHand { card } => turn::move_to_hand(&mut self.state, card),
            Command::StartGame => turn::start_game(&mut self.state),
            Command::Discard { card } => turn::discard(&mut self.state, card),
            Command::DrawUp => turn::draw_up(&mut self.state),
            Command::PlaceCard { suit, position } => {
                placement::place_card(&mut self.state, suit, position)
            }
            Command::ActivatorExchange { column_card, player_card } => {
                placement::activator_exchange(&mut self.state, column_card, player_card)
            }
            Command::SevenAction { card } => placement::seven_action(&mut self.state, card),
            Command::JokerAction { joker, mode } => {
                effects::joker_action(&mut self.state, joker, mode)
            }
            Command::QueenChallenge { correct } => {
                effects::queen_challenge(&mut self.state, correct)
            }
            Command::StrategicShuffle => effects::strategic_shuffle(&mut self.state),
            Command::ConfirmStrategicShuffle => {
                effects::confirm_strategic_shuffle(&mut self.state)
            }
            Command::Revolution => effects::revolution(&mut self.state),
            Command::EndTurn => turn::end_turn(&mut self.state),
            Command::SkipAction => turn::skip_action(&mut self.state),
            Command::Surrender => turn::surrender(&mut self.state),
            Command::UpdateProfile(update) => turn::update_profile(&mut self.state, update),
        };

        debug_assert!(self.state.is_conserved(), "card conservation violated");
        outcome
    }
}
