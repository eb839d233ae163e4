//! Wire shapes exchanged with the transport layer.
//!
//! These serialize in camelCase so they match what clients already consume;
//! the engine produces and accepts them but never owns the transport.

use crate::action::ActionType;
use crate::board::{Orientation, Position, Square};
use crate::player::Player;
use crate::reserve::TileReserveData;
use crate::round::Round;
use crate::tile::Tile;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Public view of a player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerData {
    /// Player id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Current score.
    pub score: u16,
    /// Current rack.
    pub tiles: Vec<Tile>,
}

impl From<&Player> for PlayerData {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id.clone(),
            name: player.name.clone(),
            score: player.score,
            tiles: player.tiles.clone(),
        }
    }
}

/// A round as transmitted to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundData {
    /// The active player at round start.
    pub player_data: PlayerData,
    /// When the round began.
    pub start_time: DateTime<Utc>,
    /// When the round must resolve by.
    pub limit_time: DateTime<Utc>,
}

impl RoundData {
    /// Builds round data from a round and the matching player.
    pub fn from_round(round: &Round, player: &Player) -> Self {
        Self {
            player_data: PlayerData {
                id: round.player_id.clone(),
                name: player.name.clone(),
                score: player.score,
                tiles: round.rack_snapshot.clone(),
            },
            start_time: round.start_time,
            limit_time: round.limit_time,
        }
    }
}

/// Incremental game state pushed to clients after an action applies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameUpdateData {
    /// Per-player deltas, when racks or scores changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players: Option<Vec<PlayerData>>,
    /// Squares whose contents changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board: Option<Vec<Square>>,
    /// The next round, when the turn advanced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round: Option<RoundData>,
    /// Per-letter reserve counts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tile_reserve: Option<Vec<TileReserveData>>,
    /// Total tiles left in the reserve.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tile_reserve_total: Option<usize>,
    /// Set when the game has ended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_game_over: Option<bool>,
}

/// An action as submitted over the wire: a type tag, a free-form payload,
/// and the raw input string for chat echo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionData {
    /// The action kind.
    #[serde(rename = "type")]
    pub action_type: ActionType,
    /// Kind-specific payload.
    #[serde(default)]
    pub payload: serde_json::Value,
    /// The raw command text the player typed.
    #[serde(default)]
    pub input: String,
}

impl ActionData {
    /// Creates action data.
    pub fn new(action_type: ActionType, payload: serde_json::Value, input: impl Into<String>) -> Self {
        Self {
            action_type,
            payload,
            input: input.into(),
        }
    }

    /// Convenience constructor for a place action.
    pub fn place(tiles: Vec<Tile>, start_position: Position, orientation: Orientation) -> Self {
        let payload = ActionPlacePayload {
            tiles,
            start_position,
            orientation,
        };
        Self::new(
            ActionType::Place,
            serde_json::to_value(payload).expect("payload serializes"),
            "",
        )
    }

    /// Convenience constructor for an exchange action.
    pub fn exchange(tiles: Vec<Tile>) -> Self {
        Self::new(
            ActionType::Exchange,
            serde_json::to_value(ActionExchangePayload { tiles }).expect("payload serializes"),
            "",
        )
    }

    /// Convenience constructor for a pass action.
    pub fn pass() -> Self {
        Self::new(ActionType::Pass, serde_json::Value::Null, "")
    }
}

/// Payload of a place action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPlacePayload {
    /// Tiles to place, in word order.
    pub tiles: Vec<Tile>,
    /// Where the word starts.
    pub start_position: Position,
    /// Axis of the word.
    pub orientation: Orientation,
}

/// Payload of an exchange action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionExchangePayload {
    /// Tiles to exchange.
    pub tiles: Vec<Tile>,
}

/// User-facing messages produced while executing an action. The transport
/// layer decides how to deliver them; the engine only composes them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback {
    /// Message for the acting player.
    pub local_player: Option<String>,
    /// Message for the opponents.
    pub opponents: Option<String>,
    /// End-of-game summary lines, one per player.
    pub end_game: Option<Vec<String>>,
}
