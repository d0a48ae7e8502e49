//! Stable feedback keys.
//!
//! Every accepted or annotated command yields a `GameMessage`: a stable
//! key plus parameters. Rendering these as localized prose is entirely a
//! presentation concern; engine correctness never depends on them.

use serde::{Deserialize, Serialize};

use crate::cards::{Rank, Suit};

/// Feedback emitted by a command, serialized as `{ key, params }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "key", content = "params", rename_all = "kebab-case")]
pub enum GameMessage {
    // Phase prompts
    DiscardPhase,
    DrawPhase,
    ActionPhase,

    // Selection advisories
    SelectActivator,
    SelectAce,
    TapColumn,

    // Placement and exchange
    ColumnActivated { suit: Suit },
    FaceCardPlaced { rank: Rank },
    SevenPlaced { suit: Suit },
    ActivatorRecovered { rank: Rank },
    ExchangeComplete,

    // Special effects
    QueenHeal { amount: u32 },
    QueenChallengeOpened,
    QueenChallengeResult { amount: u32, correct: bool },
    JokerHeal { amount: u32, health: u32 },
    JokerAttack,
    StrategicShuffleFirst,
    StrategicShuffleNext,
    StrategicShuffleConfirmed,
    Revolution,

    // Turn control
    ActionSkipped,
    Surrendered,
    ProfileUpdated,

    // Violation annotations
    HandLimit,
    ReserveLimit,
    IdenticalExchange,
    SameColorJokers,
}

impl GameMessage {
    /// The stable key, matching the serialized `key` field.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            GameMessage::DiscardPhase => "discard-phase",
            GameMessage::DrawPhase => "draw-phase",
            GameMessage::ActionPhase => "action-phase",
            GameMessage::SelectActivator => "select-activator",
            GameMessage::SelectAce => "select-ace",
            GameMessage::TapColumn => "tap-column",
            GameMessage::ColumnActivated { .. } => "column-activated",
            GameMessage::FaceCardPlaced { .. } => "face-card-placed",
            GameMessage::SevenPlaced { .. } => "seven-placed",
            GameMessage::ActivatorRecovered { .. } => "activator-recovered",
            GameMessage::ExchangeComplete => "exchange-complete",
            GameMessage::QueenHeal { .. } => "queen-heal",
            GameMessage::QueenChallengeOpened => "queen-challenge-opened",
            GameMessage::QueenChallengeResult { .. } => "queen-challenge-result",
            GameMessage::JokerHeal { .. } => "joker-heal",
            GameMessage::JokerAttack => "joker-attack",
            GameMessage::StrategicShuffleFirst => "strategic-shuffle-first",
            GameMessage::StrategicShuffleNext => "strategic-shuffle-next",
            GameMessage::StrategicShuffleConfirmed => "strategic-shuffle-confirmed",
            GameMessage::Revolution => "revolution",
            GameMessage::ActionSkipped => "action-skipped",
            GameMessage::Surrendered => "surrendered",
            GameMessage::ProfileUpdated => "profile-updated",
            GameMessage::HandLimit => "hand-limit",
            GameMessage::ReserveLimit => "reserve-limit",
            GameMessage::IdenticalExchange => "identical-exchange",
            GameMessage::SameColorJokers => "same-color-jokers",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_matches_serde_tag() {
        let messages = [
            GameMessage::DiscardPhase,
            GameMessage::ColumnActivated { suit: Suit::Hearts },
            GameMessage::QueenChallengeResult {
                amount: 5,
                correct: true,
            },
            GameMessage::SameColorJokers,
        ];

        for message in messages {
            let json: serde_json::Value = serde_json::to_value(&message).unwrap();
            assert_eq!(json["key"], message.key());
        }
    }

    #[test]
    fn test_params_ride_along() {
        let json = serde_json::to_value(GameMessage::JokerHeal {
            amount: 2,
            health: 12,
        })
        .unwrap();

        assert_eq!(json["key"], "joker-heal");
        assert_eq!(json["params"]["amount"], 2);
        assert_eq!(json["params"]["health"], 12);
    }
}
