//! Derives every word formed by a single tile placement.

use crate::board::{Board, Direction, Occupancy, Orientation, Position, Square};
use crate::tile::Tile;
use tracing::instrument;

/// An extracted word as an ordered sequence of (square, tile) pairs.
///
/// Squares are value snapshots of the board at extraction time, so scoring
/// can consult multipliers without holding a borrow of the live grid.
pub type WordSquares = Vec<(Square, Tile)>;

/// Errors raised while extracting words from a placement.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ExtractionError {
    /// The starting square already holds a tile.
    #[display("square {} is already filled", _0)]
    SquareAlreadyFilled(Position),
    /// The placement runs off the board.
    #[display("placement runs outside the board")]
    OutOfBounds,
    /// The placement forms no word at all (lone tile with no neighbours).
    #[display("placement creates no words")]
    NoWordsCreated,
}

impl std::error::Error for ExtractionError {}

/// Word extraction over a board.
///
/// Extraction is a pure read: the board is never mutated, the supplied tiles
/// are placed only conceptually. Perpendicular words are discovered eagerly,
/// one per gap filled next to existing tiles, and appended in placement
/// order; the main line is appended last.
#[derive(Debug)]
pub struct WordExtraction<'a> {
    board: &'a Board,
}

impl<'a> WordExtraction<'a> {
    /// Creates an extractor over `board`.
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Computes every word formed by placing `tiles` from `start_position`
    /// along `orientation`.
    ///
    /// # Errors
    ///
    /// - [`ExtractionError::SquareAlreadyFilled`] when the starting square is
    ///   occupied.
    /// - [`ExtractionError::OutOfBounds`] when the placement cannot fit.
    /// - [`ExtractionError::NoWordsCreated`] when the placement forms no word
    ///   of two letters or more.
    #[instrument(skip(self, tiles), fields(tiles = tiles.len()))]
    pub fn extract(
        &self,
        tiles: &[Tile],
        start_position: Position,
        orientation: Orientation,
    ) -> Result<Vec<WordSquares>, ExtractionError> {
        if tiles.is_empty() {
            return Err(ExtractionError::NoWordsCreated);
        }
        let mut navigator = self.board.navigate(start_position, orientation);
        if navigator.verify(Occupancy::Filled) {
            return Err(ExtractionError::SquareAlreadyFilled(start_position));
        }
        {
            let mut probe = navigator.clone();
            probe.forward(tiles.len().saturating_sub(1));
            if !probe.is_within_bounds() {
                return Err(ExtractionError::OutOfBounds);
            }
        }

        let mut words_created: Vec<WordSquares> = Vec::new();
        let mut main_word: WordSquares = Vec::new();

        let mut remaining = tiles.iter();
        let mut next_tile = remaining.next();
        while let Some(tile) = next_tile {
            let square = navigator.square().ok_or(ExtractionError::OutOfBounds)?;
            match &square.tile {
                // An anchor letter the new word builds around: pass through
                // without consuming an input tile.
                Some(existing) => main_word.push((square.clone(), existing.clone())),
                None => {
                    main_word.push((square.clone(), tile.clone()));
                    // Filling this gap may complete a word on the other axis.
                    let perpendicular = orientation.opposite();
                    if navigator.verify_neighbors(perpendicular, Occupancy::Filled) {
                        words_created.push(self.word_around_tile(
                            perpendicular,
                            square.position,
                            tile,
                        ));
                    }
                    next_tile = remaining.next();
                }
            }
            navigator.forward(1);
        }
        navigator.backward(1);
        let end_position = navigator
            .position()
            .expect("last consumed square is in bounds");

        let before = self.word_in_direction(orientation, Direction::Backward, start_position);
        let after = self.word_in_direction(orientation, Direction::Forward, end_position);

        let mut word = before;
        word.extend(main_word);
        word.extend(after);
        if word.len() > 1 {
            words_created.push(word);
        }

        if words_created.is_empty() {
            return Err(ExtractionError::NoWordsCreated);
        }
        Ok(words_created)
    }

    /// The full perpendicular word completed by placing `tile` at
    /// `position`: existing letters before, the new tile, existing letters
    /// after.
    fn word_around_tile(
        &self,
        orientation: Orientation,
        position: Position,
        tile: &Tile,
    ) -> WordSquares {
        let mut word = self.word_in_direction(orientation, Direction::Backward, position);
        let square = self
            .board
            .square(position)
            .expect("placement squares are in bounds");
        word.push((square.clone(), tile.clone()));
        word.extend(self.word_in_direction(orientation, Direction::Forward, position));
        word
    }

    /// Contiguous pre-existing tiles next to `position` in `direction`,
    /// returned in reading order.
    fn word_in_direction(
        &self,
        orientation: Orientation,
        direction: Direction,
        position: Position,
    ) -> WordSquares {
        let mut navigator = self.board.navigate(position, orientation);
        let mut word: WordSquares = Vec::new();

        while navigator.move_direction(direction).verify(Occupancy::Filled) {
            let square = navigator.square().expect("verified square is in bounds");
            let tile = square.tile.clone().expect("verified square holds a tile");
            word.push((square.clone(), tile));
        }

        if direction == Direction::Backward {
            word.reverse();
        }
        word
    }
}

/// Joins extracted words into their string forms, blanks reading as the
/// letter they stand for.
pub fn words_to_strings(words: &[WordSquares]) -> Vec<String> {
    words
        .iter()
        .map(|word| word.iter().map(|(_, tile)| tile.reading()).collect())
        .collect()
}
