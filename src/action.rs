//! Turn actions as a tagged sum type.
//!
//! Every action a player can submit is one variant; execution is a single
//! dispatch in [`crate::game::Game::execute`] rather than a polymorphic
//! class hierarchy.

use crate::communication::{ActionData, ActionExchangePayload, ActionPlacePayload};
use crate::tile::Tile;
use crate::word_finding::WordPlacement;
use serde::{Deserialize, Serialize};

/// Tag identifying an action kind on the wire.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ActionType {
    /// Place tiles on the board.
    Place,
    /// Exchange rack tiles against the reserve.
    Exchange,
    /// Pass the turn.
    Pass,
    /// Ask the word finder for suggestions.
    Hint,
    /// Ask for the command reference.
    Help,
    /// Ask for the reserve contents.
    Reserve,
}

/// A validated action bound to no particular player yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "payload")]
pub enum Action {
    /// Place the given tiles as a word.
    Place(WordPlacement),
    /// Exchange the given tiles.
    Exchange(Vec<Tile>),
    /// Pass.
    Pass,
    /// Request placement hints.
    Hint,
    /// Request the command reference.
    Help,
    /// Request the reserve contents.
    Reserve,
}

/// Errors raised while interpreting submitted action data.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ActionError {
    /// The payload does not match the action type.
    #[display("invalid payload for action '{}'", _0)]
    InvalidPayload(ActionType),
}

impl std::error::Error for ActionError {}

impl Action {
    /// The wire tag for this action.
    pub fn action_type(&self) -> ActionType {
        match self {
            Self::Place(_) => ActionType::Place,
            Self::Exchange(_) => ActionType::Exchange,
            Self::Pass => ActionType::Pass,
            Self::Hint => ActionType::Hint,
            Self::Help => ActionType::Help,
            Self::Reserve => ActionType::Reserve,
        }
    }

    /// Whether executing this action ends the player's turn. The round
    /// manager advances only when it does.
    pub fn will_end_turn(&self) -> bool {
        matches!(self, Self::Place(_) | Self::Exchange(_) | Self::Pass)
    }

    /// Whether this action is a pass, for the consecutive-pass counter.
    pub fn is_pass(&self) -> bool {
        matches!(self, Self::Pass)
    }

    /// Interprets submitted [`ActionData`], validating the payload shape.
    ///
    /// # Errors
    ///
    /// [`ActionError::InvalidPayload`] when the payload is missing or
    /// malformed for the tagged action type.
    pub fn from_data(data: &ActionData) -> Result<Self, ActionError> {
        let invalid = || ActionError::InvalidPayload(data.action_type);
        match data.action_type {
            ActionType::Place => {
                let payload: ActionPlacePayload =
                    serde_json::from_value(data.payload.clone()).map_err(|_| invalid())?;
                if payload.tiles.is_empty() {
                    return Err(invalid());
                }
                Ok(Self::Place(WordPlacement {
                    tiles_to_place: payload.tiles,
                    start_position: payload.start_position,
                    orientation: payload.orientation,
                }))
            }
            ActionType::Exchange => {
                let payload: ActionExchangePayload =
                    serde_json::from_value(data.payload.clone()).map_err(|_| invalid())?;
                if payload.tiles.is_empty() {
                    return Err(invalid());
                }
                Ok(Self::Exchange(payload.tiles))
            }
            ActionType::Pass => Ok(Self::Pass),
            ActionType::Hint => Ok(Self::Hint),
            ActionType::Help => Ok(Self::Help),
            ActionType::Reserve => Ok(Self::Reserve),
        }
    }
}
