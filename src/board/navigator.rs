//! A cursor that walks the grid along a fixed orientation.

use super::board::Board;
use super::square::{Occupancy, Square};
use super::{Direction, Orientation, Position};

/// An ephemeral cursor over a [`Board`].
///
/// The cursor may step past any edge of the grid; [`is_within_bounds`]
/// reports whether it still points at a real square, and the square accessors
/// return `None` once it does not. Cloning produces an independent cursor
/// over the same board, which is how speculative probes (word-length checks,
/// neighbour peeks) run without disturbing the caller's cursor.
///
/// [`is_within_bounds`]: BoardNavigator::is_within_bounds
#[derive(Debug, Clone)]
pub struct BoardNavigator<'a> {
    board: &'a Board,
    row: isize,
    column: isize,
    orientation: Orientation,
}

impl<'a> BoardNavigator<'a> {
    /// Creates a navigator at `position` walking along `orientation`.
    pub fn new(board: &'a Board, position: Position, orientation: Orientation) -> Self {
        Self {
            board,
            row: position.row as isize,
            column: position.column as isize,
            orientation,
        }
    }

    /// The orientation this cursor walks along.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Current position, when the cursor is on the board.
    pub fn position(&self) -> Option<Position> {
        self.is_within_bounds()
            .then(|| Position::new(self.row as usize, self.column as usize))
    }

    /// The square under the cursor, when the cursor is on the board.
    pub fn square(&self) -> Option<&'a Square> {
        let position = self.position()?;
        self.board.square(position).ok()
    }

    /// Whether the cursor currently points at a real square.
    pub fn is_within_bounds(&self) -> bool {
        self.row >= 0
            && self.column >= 0
            && (self.row as usize) < self.board.height()
            && (self.column as usize) < self.board.width()
    }

    /// Moves `steps` squares forward along the orientation.
    pub fn forward(&mut self, steps: usize) -> &mut Self {
        self.step(steps as isize)
    }

    /// Moves `steps` squares backward along the orientation.
    pub fn backward(&mut self, steps: usize) -> &mut Self {
        self.step(-(steps as isize))
    }

    /// Moves one square in `direction` along the orientation.
    pub fn move_direction(&mut self, direction: Direction) -> &mut Self {
        match direction {
            Direction::Forward => self.forward(1),
            Direction::Backward => self.backward(1),
        }
    }

    /// Moves forward one square at a time until `predicate` holds for the
    /// cursor, returning the number of steps taken. Returns `None` when the
    /// cursor walks off the board before the predicate is satisfied.
    pub fn move_until<F>(&mut self, mut predicate: F) -> Option<usize>
    where
        F: FnMut(&BoardNavigator<'_>) -> bool,
    {
        let mut steps = 0;
        loop {
            if !self.is_within_bounds() {
                return None;
            }
            if predicate(self) {
                return Some(steps);
            }
            self.forward(1);
            steps += 1;
        }
    }

    /// Whether the occupancy of the square under the cursor matches
    /// `expectation`. Off-board cursors match nothing.
    pub fn verify(&self, expectation: Occupancy) -> bool {
        match self.square() {
            Some(square) => expectation.matches(square),
            None => false,
        }
    }

    /// Peeks at the two squares adjacent to the cursor along `orientation`
    /// (without moving) and reports whether either matches `expectation`.
    /// Off-board neighbours never match.
    pub fn verify_neighbors(&self, orientation: Orientation, expectation: Occupancy) -> bool {
        [Direction::Backward, Direction::Forward]
            .into_iter()
            .any(|direction| {
                let mut probe = self.clone();
                probe.orientation = orientation;
                probe.move_direction(direction);
                probe.verify(expectation)
            })
    }

    /// Switches the cursor to the perpendicular orientation in place.
    pub fn switch_orientation(&mut self) -> &mut Self {
        self.orientation = self.orientation.opposite();
        self
    }

    fn step(&mut self, delta: isize) -> &mut Self {
        match self.orientation {
            Orientation::Horizontal => self.column += delta,
            Orientation::Vertical => self.row += delta,
        }
        self
    }
}
