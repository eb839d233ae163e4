//! The search itself: anchors × orientations × rack permutations.

use super::{
    rack_permutations, MovePossibility, ScoredWordPlacement, SquareProperties, WordFindingRequest,
    WordFindingResult, WordFindingUseCase, WordPlacement,
};
use crate::board::{Board, BoardNavigator, Occupancy, Orientation, Position, Square};
use crate::dictionary::{verify_words, DictionaryLookup, MINIMUM_WORD_LENGTH};
use crate::extraction::{words_to_strings, WordExtraction};
use crate::player::RACK_SIZE;
use crate::scoring::ScoreCalculator;
use crate::tile::Tile;
use rand::Rng;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Removes and returns a uniformly random square from `pool`, or `None`
/// when the pool is exhausted.
pub fn pop_random_square(pool: &mut Vec<Square>) -> Option<Square> {
    if pool.is_empty() {
        return None;
    }
    let index = rand::rng().random_range(0..pool.len());
    Some(pool.swap_remove(index))
}

/// Searches a board for legal scored placements from a rack.
///
/// Dependencies are injected by the caller; the finder performs no I/O and
/// holds no state between invocations.
pub struct WordFinder<'a> {
    board: &'a Board,
    dictionary: &'a dyn DictionaryLookup,
    calculator: &'a ScoreCalculator,
}

impl<'a> WordFinder<'a> {
    /// Creates a finder over `board` with the given collaborators.
    pub fn new(
        board: &'a Board,
        dictionary: &'a dyn DictionaryLookup,
        calculator: &'a ScoreCalculator,
    ) -> Self {
        Self {
            board,
            dictionary,
            calculator,
        }
    }

    /// Runs the search described by `request` with the tiles on `rack`.
    ///
    /// Anchor squares are drawn from the candidate pool uniformly at random,
    /// so repeated invocations explore the board in different orders. The
    /// finder never retries on its own: an empty result is the caller's cue
    /// to fall back to a pass or exchange.
    #[instrument(skip(self, rack), fields(rack = rack.len()))]
    pub fn find_placements(&self, rack: &[Tile], request: &WordFindingRequest) -> WordFindingResult {
        let permutations = rack_permutations(rack);
        let mut pool = self.candidate_squares();
        let mut result = WordFindingResult::default();

        while let Some(square) = pop_random_square(&mut pool) {
            let properties = self.square_properties(&square, rack.len());
            for orientation in Orientation::iter() {
                let possibility = properties.possibility(orientation);
                if !possibility.is_triable {
                    continue;
                }
                for permutation in &permutations {
                    let length = permutation.len();
                    if length < possibility.minimum_length || length > possibility.maximum_length {
                        continue;
                    }
                    let Some(scored) =
                        self.attempt(square.position, orientation, permutation)
                    else {
                        continue;
                    };
                    if self.record(&mut result, scored, &request.use_case) {
                        return result;
                    }
                }
            }
        }
        debug!(
            candidates = result.candidates.len(),
            chosen = result.chosen.is_some(),
            "search exhausted the board"
        );
        result
    }

    /// Folds a valid placement into the running result. Returns `true` when
    /// the use case is satisfied and the search should stop.
    fn record(
        &self,
        result: &mut WordFindingResult,
        scored: ScoredWordPlacement,
        use_case: &WordFindingUseCase,
    ) -> bool {
        match use_case {
            WordFindingUseCase::WithinRange(range) => {
                if range.contains(scored.score) {
                    result.chosen = Some(scored);
                    return true;
                }
                false
            }
            WordFindingUseCase::Hint { count } => {
                result.candidates.push(scored);
                result.candidates.len() >= *count
            }
            WordFindingUseCase::Puzzle => {
                let easier = result
                    .chosen
                    .as_ref()
                    .is_none_or(|easiest| scored.score < easiest.score);
                if easier {
                    result.chosen = Some(scored.clone());
                }
                result.candidates.push(scored);
                false
            }
        }
    }

    /// Validates and scores one candidate placement, or `None` when it is
    /// not a legal move.
    ///
    /// Scores exactly the way the game will on commit: the all-tiles bonus
    /// applies only to a full [`RACK_SIZE`] placement, not to emptying a
    /// shorter rack.
    fn attempt(
        &self,
        start_position: Position,
        orientation: Orientation,
        tiles: &[Tile],
    ) -> Option<ScoredWordPlacement> {
        let words = WordExtraction::new(self.board)
            .extract(tiles, start_position, orientation)
            .ok()?;
        verify_words(&words_to_strings(&words), self.dictionary).ok()?;

        let score =
            self.calculator.score_words(&words) + self.calculator.bonus(tiles.len(), RACK_SIZE);
        Some(ScoredWordPlacement {
            placement: WordPlacement {
                tiles_to_place: tiles.to_vec(),
                start_position,
                orientation,
            },
            score,
        })
    }

    /// The pool of anchor squares: every empty square, or just the center
    /// square on a board nothing has been played on yet.
    fn candidate_squares(&self) -> Vec<Square> {
        if self.board.is_untouched() {
            return vec![self.board.center().clone()];
        }
        self.board
            .squares()
            .filter(|square| !square.has_tile())
            .cloned()
            .collect()
    }

    /// Computes both orientations' move possibilities for one anchor.
    pub fn square_properties(&self, square: &Square, rack_size: usize) -> SquareProperties {
        SquareProperties {
            square: square.clone(),
            horizontal: self.move_possibility(square.position, Orientation::Horizontal, rack_size),
            vertical: self.move_possibility(square.position, Orientation::Vertical, rack_size),
        }
    }

    /// What can be played from `position` along `orientation` with
    /// `rack_size` tiles available. An anchor whose minimum required length
    /// exceeds the rack can never be tried in that orientation.
    fn move_possibility(
        &self,
        position: Position,
        orientation: Orientation,
        rack_size: usize,
    ) -> MovePossibility {
        let navigator = self.board.navigate(position, orientation);
        let Some(minimum_length) = self.minimum_word_length(navigator.clone()) else {
            return MovePossibility::not_triable();
        };
        if minimum_length > rack_size {
            return MovePossibility::not_triable();
        }
        MovePossibility {
            is_triable: true,
            minimum_length,
            maximum_length: self.maximum_word_length(navigator, rack_size),
        }
    }

    /// Fewest tiles to place from the anchor before the word touches an
    /// existing tile, either by reaching a square with a perpendicular
    /// neighbour or by running into a tile on the path itself. `None` when
    /// the walk leaves the board first with nothing to connect to. On an
    /// untouched board the center is the only anchor and the minimum is the
    /// shortest playable word.
    fn minimum_word_length(&self, mut navigator: BoardNavigator<'_>) -> Option<usize> {
        if self.board.is_untouched() {
            return navigator
                .square()
                .is_some_and(|square| square.is_center)
                .then_some(MINIMUM_WORD_LENGTH);
        }

        let mut tiles_needed = 0;
        loop {
            if !navigator.is_within_bounds() {
                return None;
            }
            if navigator.verify(Occupancy::Filled) {
                // The path runs into existing letters; whatever was placed
                // so far joins onto them.
                return Some(tiles_needed.max(1));
            }
            tiles_needed += 1;
            if navigator.verify_neighbors(navigator.orientation().opposite(), Occupancy::Filled) {
                return Some(tiles_needed);
            }
            navigator.forward(1);
        }
    }

    /// Most tiles placeable from the anchor: empty squares reachable before
    /// the edge, capped by the rack.
    fn maximum_word_length(&self, mut navigator: BoardNavigator<'_>, rack_size: usize) -> usize {
        let mut empty_squares = 0;
        while navigator.is_within_bounds() {
            if navigator.verify(Occupancy::Empty) {
                empty_squares += 1;
            }
            navigator.forward(1);
        }
        empty_squares.min(rack_size)
    }
}
