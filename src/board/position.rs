//! Grid coordinates and traversal directions.

use super::Orientation;
use serde::{Deserialize, Serialize};

/// A 0-indexed (row, column) coordinate on the board.
///
/// Positions are plain coordinates; bounds are a property of the board they
/// are used against, so arithmetic that would leave the grid is reported by
/// the board or navigator, never clamped here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub column: usize,
}

impl Position {
    /// Creates a position from row and column indices.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Returns the position `steps` squares forward along `orientation`.
    /// Whether the result still lies on a given board is for the board to
    /// decide.
    pub fn forward(self, orientation: Orientation, steps: usize) -> Self {
        match orientation {
            Orientation::Horizontal => Self::new(self.row, self.column + steps),
            Orientation::Vertical => Self::new(self.row + steps, self.column),
        }
    }

    /// Returns the position `steps` squares backward along `orientation`,
    /// or `None` when that would cross index zero.
    pub fn backward(self, orientation: Orientation, steps: usize) -> Option<Self> {
        match orientation {
            Orientation::Horizontal => {
                self.column.checked_sub(steps).map(|c| Self::new(self.row, c))
            }
            Orientation::Vertical => self.row.checked_sub(steps).map(|r| Self::new(r, self.column)),
        }
    }

    /// Returns the position one square away along `orientation` in the
    /// given direction, or `None` when that would cross index zero.
    pub fn shifted(self, orientation: Orientation, direction: Direction) -> Option<Self> {
        match direction {
            Direction::Forward => Some(self.forward(orientation, 1)),
            Direction::Backward => self.backward(orientation, 1),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Direction of travel along a fixed orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward growing indices (right or down).
    Forward,
    /// Toward index zero (left or up).
    Backward,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_moves_along_orientation() {
        let pos = Position::new(3, 4);
        assert_eq!(pos.forward(Orientation::Horizontal, 2), Position::new(3, 6));
        assert_eq!(pos.forward(Orientation::Vertical, 2), Position::new(5, 4));
    }

    #[test]
    fn backward_stops_at_zero() {
        let pos = Position::new(1, 0);
        assert_eq!(
            pos.backward(Orientation::Vertical, 1),
            Some(Position::new(0, 0))
        );
        assert_eq!(pos.backward(Orientation::Horizontal, 1), None);
    }
}
