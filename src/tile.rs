//! Letter tiles and the classic letter distribution.

use serde::{Deserialize, Serialize};

/// Marker letter used for blank (wildcard) tiles.
pub const BLANK_LETTER: char = '*';

/// A letter tile.
///
/// Tiles are owned by whichever rack, reserve, or board square currently
/// holds them; ownership transfers on placement or exchange. Only blanks
/// carry a `played_letter`: the letter the blank currently stands in for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    /// The printed letter, `A`–`Z`, or [`BLANK_LETTER`] for a blank.
    pub letter: char,
    /// Point value of the tile (0 for blanks).
    pub value: u8,
    /// For blanks only: the letter this tile is standing in for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub played_letter: Option<char>,
}

impl Tile {
    /// Creates a tile with the given letter and value.
    pub fn new(letter: char, value: u8) -> Self {
        Self {
            letter,
            value,
            played_letter: None,
        }
    }

    /// Creates a blank tile, optionally already standing in for a letter.
    pub fn blank(played_letter: Option<char>) -> Self {
        Self {
            letter: BLANK_LETTER,
            value: 0,
            played_letter,
        }
    }

    /// Whether this tile is a blank.
    pub fn is_blank(&self) -> bool {
        self.letter == BLANK_LETTER
    }

    /// The letter this tile reads as on the board: the played letter for a
    /// blank, otherwise the printed letter.
    pub fn reading(&self) -> char {
        self.played_letter.unwrap_or(self.letter)
    }
}

/// (letter, point value, count) rows of the classic English distribution.
pub const LETTER_DISTRIBUTION: [(char, u8, u8); 27] = [
    ('A', 1, 9),
    ('B', 3, 2),
    ('C', 3, 2),
    ('D', 2, 4),
    ('E', 1, 12),
    ('F', 4, 2),
    ('G', 2, 3),
    ('H', 4, 2),
    ('I', 1, 9),
    ('J', 8, 1),
    ('K', 5, 1),
    ('L', 1, 4),
    ('M', 3, 2),
    ('N', 1, 6),
    ('O', 1, 8),
    ('P', 3, 2),
    ('Q', 10, 1),
    ('R', 1, 6),
    ('S', 1, 4),
    ('T', 1, 6),
    ('U', 1, 4),
    ('V', 4, 2),
    ('W', 4, 2),
    ('X', 8, 1),
    ('Y', 4, 2),
    ('Z', 10, 1),
    (BLANK_LETTER, 0, 2),
];
