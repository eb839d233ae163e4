//! Tests for the placement search used by hints and virtual players.

use tilecross::{
    rack_permutations, Board, InMemoryDictionary, Orientation, PointRange, Position,
    ScoreCalculator, Tile, WordFinder, WordFindingRequest, WordFindingUseCase, ALL_TILES_BONUS,
    MINIMUM_WORD_LENGTH, RACK_SIZE,
};

fn tiles(word: &str) -> Vec<Tile> {
    word.chars().map(|letter| Tile::new(letter, 1)).collect()
}

fn board_with_cat() -> Board {
    let mut board = Board::classic();
    board.place_word(tiles("cat"), Position::new(7, 7), Orientation::Horizontal);
    board
}

#[test]
fn test_permutations_of_two_tiles() {
    let rack = tiles("at");
    let permutations = rack_permutations(&rack);
    // Both single tiles plus both orderings.
    assert_eq!(permutations.len(), 4);
    assert!(permutations.contains(&tiles("at")));
    assert!(permutations.contains(&tiles("ta")));
}

#[test]
fn test_full_rack_permutation_count() {
    let rack = tiles("abcdefg");
    // Sum over k of 7!/(7-k)! ordered partial arrangements.
    assert_eq!(rack_permutations(&rack).len(), 13_699);
}

#[test]
fn test_untouched_board_anchors_on_center() {
    let board = Board::classic();
    let dictionary = InMemoryDictionary::from_words(["at"]);
    let calculator = ScoreCalculator::new();
    let finder = WordFinder::new(&board, &dictionary, &calculator);

    let properties = finder.square_properties(board.center(), RACK_SIZE);
    assert!(properties.horizontal.is_triable);
    assert_eq!(properties.horizontal.minimum_length, MINIMUM_WORD_LENGTH);
    assert_eq!(properties.horizontal.maximum_length, RACK_SIZE);
}

#[test]
fn test_anchor_next_to_a_word_needs_one_tile() {
    let board = board_with_cat();
    let dictionary = InMemoryDictionary::from_words(["at"]);
    let calculator = ScoreCalculator::new();
    let finder = WordFinder::new(&board, &dictionary, &calculator);

    let anchor = board.square(Position::new(7, 6)).unwrap();
    let properties = finder.square_properties(anchor, RACK_SIZE);
    // One tile to the left of "cat" already joins it.
    assert_eq!(properties.horizontal.minimum_length, 1);
    assert_eq!(properties.vertical.minimum_length, 1);
    // Six empty squares remain on the row from this anchor.
    assert_eq!(properties.horizontal.maximum_length, 6);
}

#[test]
fn test_disconnected_anchor_is_not_triable() {
    let board = board_with_cat();
    let dictionary = InMemoryDictionary::from_words(["at"]);
    let calculator = ScoreCalculator::new();
    let finder = WordFinder::new(&board, &dictionary, &calculator);

    // The top-left corner cannot reach any existing tile going right.
    let anchor = board.square(Position::new(0, 0)).unwrap();
    let properties = finder.square_properties(anchor, RACK_SIZE);
    assert!(!properties.horizontal.is_triable);
}

#[test]
fn test_minimum_beyond_rack_is_not_triable() {
    let board = board_with_cat();
    let dictionary = InMemoryDictionary::from_words(["at"]);
    let calculator = ScoreCalculator::new();
    let finder = WordFinder::new(&board, &dictionary, &calculator);

    // Far left of the word's row: five squares before touching "cat", but
    // only two tiles on the rack.
    let anchor = board.square(Position::new(7, 2)).unwrap();
    let properties = finder.square_properties(anchor, 2);
    assert!(!properties.horizontal.is_triable);
}

#[test]
fn test_finds_a_placement_within_the_requested_range() {
    let board = Board::classic();
    let dictionary = InMemoryDictionary::from_words(["at"]);
    let calculator = ScoreCalculator::new();
    let finder = WordFinder::new(&board, &dictionary, &calculator);

    let result = finder.find_placements(
        &tiles("at"),
        &WordFindingRequest {
            use_case: WordFindingUseCase::WithinRange(PointRange::new(1, 10)),
        },
    );
    let chosen = result.chosen.expect("a playable word exists");
    // "at" on the doubled center square.
    assert_eq!(chosen.score, 4);
    assert!(chosen
        .placement
        .tiles_to_place
        .iter()
        .map(|tile| tile.reading())
        .eq("at".chars()));
}

#[test]
fn test_no_result_when_nothing_fits_the_range() {
    let board = Board::classic();
    let dictionary = InMemoryDictionary::from_words(["at"]);
    let calculator = ScoreCalculator::new();
    let finder = WordFinder::new(&board, &dictionary, &calculator);

    let result = finder.find_placements(
        &tiles("at"),
        &WordFindingRequest {
            use_case: WordFindingUseCase::WithinRange(PointRange::new(50, 60)),
        },
    );
    assert!(result.chosen.is_none());
}

#[test]
fn test_hint_collects_scored_candidates() {
    let board = Board::classic();
    let dictionary = InMemoryDictionary::from_words(["at", "ta"]);
    let calculator = ScoreCalculator::new();
    let finder = WordFinder::new(&board, &dictionary, &calculator);

    let result = finder.find_placements(
        &tiles("at"),
        &WordFindingRequest {
            use_case: WordFindingUseCase::Hint { count: 3 },
        },
    );
    assert!(!result.candidates.is_empty());
    assert!(result.candidates.len() <= 3);
    for candidate in &result.candidates {
        assert!(candidate.score > 0);
    }
}

#[test]
fn test_emptying_a_short_rack_earns_no_bonus() {
    let board = Board::classic();
    let dictionary = InMemoryDictionary::from_words(["at", "ta"]);
    let calculator = ScoreCalculator::new();
    let finder = WordFinder::new(&board, &dictionary, &calculator);

    // Both tiles of a two-tile rack go down; the bonus is reserved for a
    // full seven-tile placement, so every candidate stays at face value.
    let result = finder.find_placements(
        &tiles("at"),
        &WordFindingRequest {
            use_case: WordFindingUseCase::Hint { count: 10 },
        },
    );
    assert!(!result.candidates.is_empty());
    for candidate in &result.candidates {
        assert!(candidate.score < ALL_TILES_BONUS);
    }
}

#[test]
fn test_puzzle_keeps_the_easiest_placement() {
    let board = Board::classic();
    let dictionary = InMemoryDictionary::from_words(["at", "as", "tas"]);
    let calculator = ScoreCalculator::new();
    let finder = WordFinder::new(&board, &dictionary, &calculator);

    // Valid words score 4 ("at"), 6 ("as"), and 8 ("tas") on the doubled
    // center.
    let rack = vec![Tile::new('a', 1), Tile::new('t', 1), Tile::new('s', 2)];
    let result = finder.find_placements(
        &rack,
        &WordFindingRequest {
            use_case: WordFindingUseCase::Puzzle,
        },
    );

    let chosen = result.chosen.expect("playable words exist");
    let minimum = result
        .candidates
        .iter()
        .map(|candidate| candidate.score)
        .min()
        .unwrap();
    let maximum = result
        .candidates
        .iter()
        .map(|candidate| candidate.score)
        .max()
        .unwrap();
    assert_eq!(chosen.score, minimum);
    assert_eq!(chosen.score, 4);
    // Harder placements stay in the candidate list instead of being kept.
    assert_eq!(maximum, 8);
    assert!(result.candidates.len() > 1);
}

#[test]
fn test_empty_rack_finds_nothing() {
    let board = Board::classic();
    let dictionary = InMemoryDictionary::from_words(["at"]);
    let calculator = ScoreCalculator::new();
    let finder = WordFinder::new(&board, &dictionary, &calculator);

    let result = finder.find_placements(
        &[],
        &WordFindingRequest {
            use_case: WordFindingUseCase::Hint { count: 3 },
        },
    );
    assert!(result.candidates.is_empty());
    assert!(result.chosen.is_none());
}
