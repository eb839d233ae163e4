//! The board grid: authoritative spatial state of one game.

use super::navigator::BoardNavigator;
use super::square::{Occupancy, ScoreMultiplier, Square};
use super::{Orientation, Position};
use crate::tile::Tile;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the classic board.
pub const BOARD_SIZE: usize = 15;

/// Errors raised by spatial operations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// A referenced position lies outside the grid.
    #[display("position {} is outside the board", _0)]
    OutOfBounds(Position),
}

impl std::error::Error for BoardError {}

/// An immutable-size 2-D grid of [`Square`]s.
///
/// Exactly one square is the centre. Created once per game and mutated in
/// place for the game's duration; history snapshots are taken with
/// [`Board::clone`], which has value semantics (no shared tiles).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    grid: Vec<Vec<Square>>,
}

impl Board {
    /// Creates a board from an explicit grid. Rows must be equal length.
    pub fn new(grid: Vec<Vec<Square>>) -> Self {
        debug_assert!(grid.iter().all(|row| row.len() == grid[0].len()));
        Self { grid }
    }

    /// Creates an empty grid of the given size with no premium squares and
    /// the centre marked. Useful for tests and puzzle boards.
    pub fn plain(height: usize, width: usize) -> Self {
        let mut grid: Vec<Vec<Square>> = (0..height)
            .map(|row| {
                (0..width)
                    .map(|column| Square::empty(Position::new(row, column)))
                    .collect()
            })
            .collect();
        grid[height / 2][width / 2].is_center = true;
        Self { grid }
    }

    /// Creates the classic 15×15 board with the standard premium layout.
    pub fn classic() -> Self {
        let mut board = Self::plain(BOARD_SIZE, BOARD_SIZE);
        for (row, column, multiplier) in premium_squares() {
            board.grid[row][column].multiplier = Some(multiplier);
        }
        board
    }

    /// Grid height in squares.
    pub fn height(&self) -> usize {
        self.grid.len()
    }

    /// Grid width in squares.
    pub fn width(&self) -> usize {
        self.grid[0].len()
    }

    /// Whether `position` lies inside the grid.
    pub fn is_within_bounds(&self, position: Position) -> bool {
        position.row < self.height() && position.column < self.width()
    }

    /// Returns the square at `position`.
    ///
    /// # Errors
    ///
    /// [`BoardError::OutOfBounds`] when the position lies outside the grid.
    pub fn square(&self, position: Position) -> Result<&Square, BoardError> {
        self.grid
            .get(position.row)
            .and_then(|row| row.get(position.column))
            .ok_or(BoardError::OutOfBounds(position))
    }

    /// Returns the square at `position` mutably.
    pub fn square_mut(&mut self, position: Position) -> Result<&mut Square, BoardError> {
        self.grid
            .get_mut(position.row)
            .and_then(|row| row.get_mut(position.column))
            .ok_or(BoardError::OutOfBounds(position))
    }

    /// The single centre square of the board.
    pub fn center(&self) -> &Square {
        self.grid
            .iter()
            .flatten()
            .find(|square| square.is_center)
            .expect("board has exactly one center square")
    }

    /// Iterates over every square in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.grid.iter().flatten()
    }

    /// Whether no tile has been placed anywhere yet.
    pub fn is_untouched(&self) -> bool {
        self.squares().all(|square| !square.has_tile())
    }

    /// Places a single tile.
    ///
    /// Returns `false` without mutation when the target square is already
    /// occupied, `true` when the tile was stored.
    ///
    /// # Errors
    ///
    /// [`BoardError::OutOfBounds`] when the position lies outside the grid;
    /// the grid is left untouched.
    #[instrument(skip(self, tile), fields(letter = %tile.reading()))]
    pub fn place_tile(&mut self, tile: Tile, position: Position) -> Result<bool, BoardError> {
        let square = self.square_mut(position)?;
        if square.has_tile() {
            return Ok(false);
        }
        square.tile = Some(tile);
        Ok(true)
    }

    /// Places a word: walks forward from `start_position` along
    /// `orientation`, skipping squares that already hold a tile (anchors the
    /// new word builds around) and consuming one input tile per empty square,
    /// until every input tile is placed.
    ///
    /// Returns `false` without mutating anything when the starting square is
    /// occupied or the walk would leave the grid before all tiles are
    /// consumed. The feasibility check runs in full before any tile is
    /// committed, so a failed placement never partially applies.
    #[instrument(skip(self, tiles), fields(tiles = tiles.len()))]
    pub fn place_word(
        &mut self,
        tiles: Vec<Tile>,
        start_position: Position,
        orientation: Orientation,
    ) -> bool {
        let Some(targets) = self.word_targets(tiles.len(), start_position, orientation) else {
            return false;
        };
        for (tile, position) in tiles.into_iter().zip(targets) {
            let square = self
                .square_mut(position)
                .expect("word targets are in bounds");
            debug_assert!(!square.has_tile());
            square.tile = Some(tile);
        }
        true
    }

    /// Computes the empty squares a word of `tile_count` tiles would fill
    /// from `start_position`, or `None` when the placement does not fit.
    fn word_targets(
        &self,
        tile_count: usize,
        start_position: Position,
        orientation: Orientation,
    ) -> Option<Vec<Position>> {
        let start = self.square(start_position).ok()?;
        if start.has_tile() {
            return None;
        }

        let mut targets = Vec::with_capacity(tile_count);
        let mut navigator = self.navigate(start_position, orientation);
        while targets.len() < tile_count {
            let square = navigator.square()?;
            if !square.has_tile() {
                targets.push(square.position);
            }
            navigator.forward(1);
        }
        Some(targets)
    }

    /// Checks whether the occupancy at `position` matches `expectation`.
    ///
    /// # Errors
    ///
    /// [`BoardError::OutOfBounds`] when the position lies outside the grid.
    pub fn verify_square(
        &self,
        position: Position,
        expectation: Occupancy,
    ) -> Result<bool, BoardError> {
        Ok(expectation.matches(self.square(position)?))
    }

    /// Constructs a navigator bound to this board.
    pub fn navigate(&self, position: Position, orientation: Orientation) -> BoardNavigator<'_> {
        BoardNavigator::new(self, position, orientation)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::classic()
    }
}

/// The standard premium-square layout, one quadrant mirrored four ways.
fn premium_squares() -> Vec<(usize, usize, ScoreMultiplier)> {
    use ScoreMultiplier::{Letter, Word};

    // (row, column) within the top-left quadrant, including the centre lines.
    let quadrant: [(usize, usize, ScoreMultiplier); 17] = [
        (0, 0, Word(3)),
        (0, 7, Word(3)),
        (7, 0, Word(3)),
        (0, 3, Letter(2)),
        (3, 0, Letter(2)),
        (1, 1, Word(2)),
        (1, 5, Letter(3)),
        (5, 1, Letter(3)),
        (2, 2, Word(2)),
        (2, 6, Letter(2)),
        (6, 2, Letter(2)),
        (3, 3, Word(2)),
        (3, 7, Letter(2)),
        (7, 3, Letter(2)),
        (4, 4, Word(2)),
        (5, 5, Letter(3)),
        (6, 6, Letter(2)),
    ];

    let last = BOARD_SIZE - 1;
    let mut cells = Vec::new();
    for (row, column, multiplier) in quadrant {
        for (r, c) in [
            (row, column),
            (row, last - column),
            (last - row, column),
            (last - row, last - column),
        ] {
            if !cells.iter().any(|&(cr, cc, _)| (cr, cc) == (r, c)) {
                cells.push((r, c, multiplier));
            }
        }
    }
    // Centre square doubles the first word played through it.
    cells.push((BOARD_SIZE / 2, BOARD_SIZE / 2, Word(2)));
    cells
}
