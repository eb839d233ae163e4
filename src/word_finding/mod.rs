//! Virtual-player word search: candidate placements over board anchors.

mod finder;
mod permutation;

pub use finder::{pop_random_square, WordFinder};
pub use permutation::rack_permutations;

use crate::board::{Orientation, Position, Square};
use crate::tile::Tile;
use serde::{Deserialize, Serialize};

/// Inclusive score range a placement should land in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointRange {
    /// Lowest acceptable score.
    pub minimum: u16,
    /// Highest acceptable score.
    pub maximum: u16,
}

impl PointRange {
    /// Creates an inclusive range.
    pub fn new(minimum: u16, maximum: u16) -> Self {
        Self { minimum, maximum }
    }

    /// Whether `score` falls inside the range.
    pub fn contains(&self, score: u16) -> bool {
        (self.minimum..=self.maximum).contains(&score)
    }
}

/// A candidate move: tiles, start square, and orientation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordPlacement {
    /// Tiles to place, in word order.
    pub tiles_to_place: Vec<Tile>,
    /// Where the word starts.
    pub start_position: Position,
    /// Axis the word is laid along.
    pub orientation: Orientation,
}

/// A candidate move with its computed score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredWordPlacement {
    /// The placement itself.
    #[serde(flatten)]
    pub placement: WordPlacement,
    /// Points the placement is worth.
    pub score: u16,
}

/// What the caller wants out of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordFindingUseCase {
    /// The first placement scoring inside the range.
    WithinRange(PointRange),
    /// Up to `count` placements of any score, for hints.
    Hint {
        /// Number of placements to collect before stopping.
        count: usize,
    },
    /// The lowest-scoring placement plus every valid placement found, for
    /// puzzle solutions.
    Puzzle,
}

/// Parameters of one word-finding invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordFindingRequest {
    /// What to search for and when to stop.
    pub use_case: WordFindingUseCase,
}

/// Outcome of a search. Candidates are produced and discarded within a
/// single invocation; nothing here references live board state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordFindingResult {
    /// The selected placement, when the use case selects one.
    pub chosen: Option<ScoredWordPlacement>,
    /// Every other valid placement the use case asked to retain.
    pub candidates: Vec<ScoredWordPlacement>,
}

/// What can be played at one anchor square along one orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovePossibility {
    /// Whether any word is playable here at all.
    pub is_triable: bool,
    /// Fewest tiles that must be placed for the word to connect.
    pub minimum_length: usize,
    /// Most tiles that can be placed before running out of board or rack.
    pub maximum_length: usize,
}

impl MovePossibility {
    /// A possibility that can never be played.
    pub fn not_triable() -> Self {
        Self {
            is_triable: false,
            minimum_length: 0,
            maximum_length: 0,
        }
    }
}

/// Both orientations' possibilities for one anchor square.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareProperties {
    /// The anchor square.
    pub square: Square,
    /// What fits horizontally.
    pub horizontal: MovePossibility,
    /// What fits vertically.
    pub vertical: MovePossibility,
}

impl SquareProperties {
    /// The possibility along `orientation`.
    pub fn possibility(&self, orientation: Orientation) -> &MovePossibility {
        match orientation {
            Orientation::Horizontal => &self.horizontal,
            Orientation::Vertical => &self.vertical,
        }
    }
}
