//! Tilecross - multiplayer crossword-tile game engine
//!
//! The core of a Scrabble-style word game: a premium-square board with a
//! cursor-style navigator, word extraction and dictionary validation, round
//! sequencing with pass-out detection, and computer opponents that search
//! for placements under a deadline.
//!
//! # Architecture
//!
//! - **Board**: grid, squares, multipliers, and the [`BoardNavigator`] cursor
//! - **Extraction**: turns a tile placement into every word it creates
//! - **Rounds**: turn order, timers, and the consecutive-pass game ending
//! - **Word finding**: rack permutation search used for hints and bots
//! - **Session**: registry routing wire actions to concurrent games
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use tilecross::{Game, GameConfig, InMemoryDictionary, Player, SessionManager};
//!
//! let dictionary = Arc::new(InMemoryDictionary::from_words(["hello", "world"]));
//! let game = Game::new(
//!     "game1",
//!     vec![Player::new("p1", "Alice"), Player::new("p2", "Bob")],
//!     dictionary,
//!     GameConfig::default(),
//! );
//!
//! let manager = SessionManager::new();
//! let id = manager.add_game(game).unwrap();
//! assert_eq!(manager.list_games(), vec![id]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod board;
mod communication;
mod dictionary;
mod extraction;
mod game;
mod player;
mod reserve;
mod round;
mod scoring;
mod session;
mod tile;
mod virtual_player;
mod word_finding;

// Crate-level exports - Board
pub use board::{
    Board, BoardError, BoardNavigator, Direction, Occupancy, Orientation, Position,
    ScoreMultiplier, Square, BOARD_SIZE,
};

// Crate-level exports - Tiles and reserve
pub use reserve::{TileReserve, TileReserveData};
pub use tile::{Tile, BLANK_LETTER, LETTER_DISTRIBUTION};

// Crate-level exports - Word extraction
pub use extraction::{words_to_strings, ExtractionError, WordExtraction, WordSquares};

// Crate-level exports - Dictionary
pub use dictionary::{
    verify_words, DictionaryLookup, InMemoryDictionary, WordError, MINIMUM_WORD_LENGTH,
};

// Crate-level exports - Scoring
pub use scoring::{ScoreCalculator, ALL_TILES_BONUS};

// Crate-level exports - Players and actions
pub use action::{Action, ActionError, ActionType};
pub use player::{Player, RACK_SIZE};

// Crate-level exports - Rounds
pub use round::{
    CompletedRound, Round, RoundError, RoundManager, DEFAULT_PASS_THRESHOLD,
};

// Crate-level exports - Word finding
pub use word_finding::{
    rack_permutations, MovePossibility, PointRange, ScoredWordPlacement, SquareProperties,
    WordFinder, WordFindingRequest, WordFindingResult, WordFindingUseCase, WordPlacement,
};

// Crate-level exports - Game
pub use game::{
    ActionOutcome, Game, GameConfig, GameError, HELP_MESSAGE, HINT_COUNT,
    MINIMUM_EXCHANGE_TILE_COUNT,
};

// Crate-level exports - Virtual players
pub use virtual_player::{
    play_turn, VirtualPlayerContext, VirtualPlayerLevel, EXPERT_CANDIDATE_COUNT, FINAL_WAIT,
    PRELIMINARY_WAIT,
};

// Crate-level exports - Communication and session management
pub use communication::{
    ActionData, ActionExchangePayload, ActionPlacePayload, Feedback, GameUpdateData, PlayerData,
    RoundData,
};
pub use session::{GameId, SessionError, SessionManager};
