//! A single board square: position, occupying tile, score multiplier.

use super::Position;
use crate::tile::Tile;
use serde::{Deserialize, Serialize};

/// Score bonus attached to a premium square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "factor")]
pub enum ScoreMultiplier {
    /// Multiplies the value of the letter placed on this square.
    Letter(u8),
    /// Multiplies the value of every word passing through this square.
    Word(u8),
}

/// One cell of the board grid.
///
/// A square's multiplier applies only once: `multiplier_used` is flipped when
/// a placement is scored through this square and must never be reset, so a
/// later word passing over the same tile scores it at face value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Square {
    /// The tile occupying this square, if any.
    pub tile: Option<Tile>,
    /// Where this square sits on the board.
    pub position: Position,
    /// Premium multiplier, if this is a bonus square.
    pub multiplier: Option<ScoreMultiplier>,
    /// Whether the multiplier has already been consumed by a scored word.
    pub multiplier_used: bool,
    /// Whether this is the board's single centre square.
    pub is_center: bool,
}

impl Square {
    /// Creates an empty square with no multiplier.
    pub fn empty(position: Position) -> Self {
        Self {
            tile: None,
            position,
            multiplier: None,
            multiplier_used: false,
            is_center: false,
        }
    }

    /// Whether a tile currently occupies this square.
    pub fn has_tile(&self) -> bool {
        self.tile.is_some()
    }
}

/// Expected occupancy state of a square, used by verification probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupancy {
    /// The square should hold a tile.
    Filled,
    /// The square should be empty.
    Empty,
}

impl Occupancy {
    /// Whether `square` matches this expectation.
    pub fn matches(self, square: &Square) -> bool {
        match self {
            Self::Filled => square.has_tile(),
            Self::Empty => !square.has_tile(),
        }
    }
}
