//! One game instance: board, players, reserve, and round sequencing.

use crate::action::{Action, ActionError};
use crate::board::{Board, BoardError, Square};
use crate::communication::{Feedback, GameUpdateData, PlayerData, RoundData};
use crate::dictionary::{verify_words, DictionaryLookup, WordError};
use crate::extraction::{words_to_strings, ExtractionError, WordExtraction, WordSquares};
use crate::player::{Player, RACK_SIZE};
use crate::reserve::TileReserve;
use crate::round::{RoundError, RoundManager, DEFAULT_PASS_THRESHOLD};
use crate::scoring::ScoreCalculator;
use crate::word_finding::{WordFinder, WordFindingRequest, WordFindingUseCase, WordPlacement};
use chrono::Duration;
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Fewest tiles the reserve must hold for an exchange to be allowed.
pub const MINIMUM_EXCHANGE_TILE_COUNT: usize = 7;

/// Number of placements a hint request collects.
pub const HINT_COUNT: usize = 3;

/// Command reference sent back for a help action.
pub const HELP_MESSAGE: &str = "Available actions: place, exchange, pass, hint, help, reserve.";

/// Errors surfaced while executing a turn action.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::From)]
pub enum GameError {
    /// Spatial error from the board.
    #[display("{}", _0)]
    Board(BoardError),
    /// The placement formed no valid word geometry.
    #[display("{}", _0)]
    Extraction(ExtractionError),
    /// A formed word was rejected by the dictionary.
    #[display("{}", _0)]
    Word(WordError),
    /// Round-state misuse.
    #[display("{}", _0)]
    Round(RoundError),
    /// Malformed action payload.
    #[display("{}", _0)]
    Action(ActionError),
    /// The referenced player is not in this game.
    #[from(ignore)]
    #[display("player '{}' is not in this game", _0)]
    UnknownPlayer(String),
    /// An action arrived from a player whose turn it is not.
    #[from(ignore)]
    #[display("it is not player '{}''s turn", _0)]
    NotPlayerTurn(String),
    /// The game has already ended.
    #[display("the game is over")]
    GameAlreadyOver,
    /// The submitted tiles are not on the player's rack.
    #[display("the played tiles are not on the rack")]
    TilesNotInRack,
    /// Too few tiles remain in the reserve to exchange.
    #[display("cannot exchange with fewer than {} tiles in reserve", _0)]
    #[from(ignore)]
    ExchangeNotAllowed(usize),
}

impl std::error::Error for GameError {}

/// Tunable game parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Maximum duration of one round, in seconds.
    pub max_round_time_secs: i64,
    /// Consecutive passing rounds per player that end the game.
    pub pass_threshold: usize,
    /// Fewest tiles the reserve must hold for exchanges.
    pub minimum_exchange_tiles: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_round_time_secs: 60,
            pass_threshold: DEFAULT_PASS_THRESHOLD,
            minimum_exchange_tiles: MINIMUM_EXCHANGE_TILE_COUNT,
        }
    }
}

/// What executing one action produced: the state delta for clients plus the
/// user-facing messages the transport should deliver.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionOutcome {
    /// Incremental state update.
    pub update: GameUpdateData,
    /// Messages for the players.
    pub feedback: Feedback,
}

/// A single game: exclusively owns its board, players, reserve, and round
/// manager. All state is mutated synchronously within one action at a time;
/// concurrent games never share any of it.
///
/// Collaborators (dictionary, score calculator) are injected at
/// construction; there is no ambient registry.
#[derive(Clone)]
pub struct Game {
    id: String,
    board: Board,
    players: Vec<Player>,
    round_manager: RoundManager,
    tile_reserve: TileReserve,
    dictionary: Arc<dyn DictionaryLookup>,
    calculator: ScoreCalculator,
    config: GameConfig,
    game_over: bool,
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("id", &self.id)
            .field("players", &self.players.len())
            .field("game_over", &self.game_over)
            .finish_non_exhaustive()
    }
}

impl Game {
    /// Creates a game, deals every player a full rack, and begins the first
    /// round.
    #[instrument(skip(players, dictionary, config))]
    pub fn new(
        id: impl Into<String> + std::fmt::Debug,
        mut players: Vec<Player>,
        dictionary: Arc<dyn DictionaryLookup>,
        config: GameConfig,
    ) -> Self {
        debug_assert!(players.len() >= 2);
        let mut tile_reserve = TileReserve::new();
        for player in &mut players {
            player.tiles = tile_reserve.draw(RACK_SIZE);
        }
        let mut round_manager = RoundManager::new(
            players.iter().map(|player| player.id.clone()).collect(),
            Duration::seconds(config.max_round_time_secs),
            config.pass_threshold,
        );
        round_manager.begin_round(&players);

        let id = id.into();
        info!(game = %id, players = players.len(), "game created");
        Self {
            id,
            board: Board::classic(),
            players,
            round_manager,
            tile_reserve,
            dictionary,
            calculator: ScoreCalculator::new(),
            config,
            game_over: false,
        }
    }

    /// The game id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// All players, in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The round manager.
    pub fn round_manager(&self) -> &RoundManager {
        &self.round_manager
    }

    /// The tile reserve.
    pub fn tile_reserve(&self) -> &TileReserve {
        &self.tile_reserve
    }

    /// A shared handle to the game's dictionary.
    pub fn dictionary(&self) -> Arc<dyn DictionaryLookup> {
        Arc::clone(&self.dictionary)
    }

    /// The configured parameters.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Whether the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.game_over || self.round_manager.pass_limit_reached()
    }

    /// Id of the player whose turn it is.
    pub fn active_player_id(&self) -> Option<&str> {
        self.round_manager
            .current_round()
            .map(|round| round.player_id.as_str())
    }

    /// Looks up a player by id.
    ///
    /// # Errors
    ///
    /// [`GameError::UnknownPlayer`] when no player has that id.
    pub fn player(&self, player_id: &str) -> Result<&Player, GameError> {
        self.players
            .iter()
            .find(|player| player.id == player_id)
            .ok_or_else(|| GameError::UnknownPlayer(player_id.to_string()))
    }

    fn player_mut(&mut self, player_id: &str) -> Result<&mut Player, GameError> {
        self.players
            .iter_mut()
            .find(|player| player.id == player_id)
            .ok_or_else(|| GameError::UnknownPlayer(player_id.to_string()))
    }

    /// Marks a player disconnected. The in-progress round is not cancelled;
    /// it resolves or times out on its own.
    #[instrument(skip(self))]
    pub fn disconnect_player(&mut self, player_id: &str) -> Result<(), GameError> {
        self.player_mut(player_id)?.is_connected = false;
        Ok(())
    }

    /// Replaces a player's identity, keeping rack and score, and retargets
    /// the in-progress round if the replaced player was active.
    #[instrument(skip(self))]
    pub fn replace_player(
        &mut self,
        old_id: &str,
        new_id: &str,
        new_name: &str,
    ) -> Result<(), GameError> {
        let player = self.player_mut(old_id)?;
        player.id = new_id.to_string();
        player.name = new_name.to_string();
        player.is_connected = true;
        player.is_virtual = false;
        self.round_manager.replace_player(old_id, new_id)?;
        Ok(())
    }

    /// Executes an action for `player_id`.
    ///
    /// Actions are applied strictly in arrival order; an action from anyone
    /// but the active player is rejected, never queued. When the action ends
    /// the turn, the round advances and game-over conditions are checked.
    ///
    /// # Errors
    ///
    /// Any [`GameError`]; the game state is unchanged on error.
    #[instrument(skip(self, action), fields(game = %self.id, action = %action.action_type()))]
    pub fn execute(&mut self, player_id: &str, action: Action) -> Result<ActionOutcome, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameAlreadyOver);
        }
        self.player(player_id)?;
        if self.active_player_id() != Some(player_id) {
            warn!(player = player_id, "action from non-active player rejected");
            return Err(GameError::NotPlayerTurn(player_id.to_string()));
        }

        let mut outcome = match &action {
            Action::Place(placement) => self.execute_place(player_id, placement)?,
            Action::Exchange(tiles) => self.execute_exchange(player_id, tiles.clone())?,
            Action::Pass => self.execute_pass(player_id),
            Action::Hint => self.execute_hint(player_id)?,
            Action::Help => ActionOutcome {
                feedback: Feedback {
                    local_player: Some(HELP_MESSAGE.to_string()),
                    ..Feedback::default()
                },
                ..ActionOutcome::default()
            },
            Action::Reserve => self.execute_reserve(),
        };

        outcome.update.tile_reserve = Some(self.tile_reserve.tiles_left_per_letter());
        outcome.update.tile_reserve_total = Some(self.tile_reserve.tiles_left());

        if action.will_end_turn() {
            let round = self
                .round_manager
                .next_round(action, &self.board, &self.players);
            let player = self.player(&round.player_id)?.clone();
            outcome.update.round = Some(RoundData::from_round(&round, &player));

            if self.is_game_over() {
                outcome.update.is_game_over = Some(true);
                outcome.feedback.end_game = Some(self.end_of_game());
                outcome.update.players =
                    Some(self.players.iter().map(PlayerData::from).collect());
            }
        }
        Ok(outcome)
    }

    /// Validates, scores, and commits a word placement.
    fn execute_place(
        &mut self,
        player_id: &str,
        placement: &WordPlacement,
    ) -> Result<ActionOutcome, GameError> {
        // Everything up to the rack mutation is a pure read: a rejected
        // placement leaves no trace.
        let words = WordExtraction::new(&self.board).extract(
            &placement.tiles_to_place,
            placement.start_position,
            placement.orientation,
        )?;
        let word_strings = words_to_strings(&words);
        verify_words(&word_strings, self.dictionary.as_ref())?;

        let score = self.calculator.score_words(&words)
            + self
                .calculator
                .bonus(placement.tiles_to_place.len(), RACK_SIZE);

        let player = self.player_mut(player_id)?;
        let tiles = player
            .take_tiles(&placement.tiles_to_place)
            .ok_or(GameError::TilesNotInRack)?;
        let committed =
            self.board
                .place_word(tiles, placement.start_position, placement.orientation);
        debug_assert!(committed, "extraction validated the placement");
        self.consume_multipliers(&words);

        let refill = {
            let missing = RACK_SIZE.saturating_sub(self.player(player_id)?.tiles.len());
            self.tile_reserve.draw(missing)
        };
        let player = self.player_mut(player_id)?;
        player.tiles.extend(refill);
        player.score += score;

        // Emptying the rack with the reserve dry ends the game.
        if !self.player(player_id)?.has_tiles_left() {
            self.game_over = true;
        }

        let player = self.player(player_id)?;
        info!(player = %player.name, score, words = ?word_strings, "word placed");
        Ok(ActionOutcome {
            update: GameUpdateData {
                players: Some(vec![PlayerData::from(player)]),
                board: Some(self.changed_squares(&words)),
                ..GameUpdateData::default()
            },
            feedback: Feedback {
                local_player: Some(format!(
                    "You played {} for {} points",
                    word_strings.join(", "),
                    score
                )),
                opponents: Some(format!(
                    "{} played {} for {} points",
                    player.name,
                    word_strings.join(", "),
                    score
                )),
                end_game: None,
            },
        })
    }

    fn execute_exchange(
        &mut self,
        player_id: &str,
        tiles: Vec<crate::tile::Tile>,
    ) -> Result<ActionOutcome, GameError> {
        if self.tile_reserve.tiles_left() < self.config.minimum_exchange_tiles {
            return Err(GameError::ExchangeNotAllowed(
                self.config.minimum_exchange_tiles,
            ));
        }
        let player = self.player_mut(player_id)?;
        let returned = player.take_tiles(&tiles).ok_or(GameError::TilesNotInRack)?;
        let count = returned.len();
        let drawn = self.tile_reserve.exchange(returned);
        let player = self.player_mut(player_id)?;
        player.tiles.extend(drawn);

        let player = self.player(player_id)?;
        Ok(ActionOutcome {
            update: GameUpdateData {
                players: Some(vec![PlayerData::from(player)]),
                ..GameUpdateData::default()
            },
            feedback: Feedback {
                local_player: Some(format!("You exchanged {count} tiles")),
                opponents: Some(format!("{} exchanged {count} tiles", player.name)),
                end_game: None,
            },
        })
    }

    fn execute_pass(&self, player_id: &str) -> ActionOutcome {
        let name = self
            .player(player_id)
            .map(|player| player.name.clone())
            .unwrap_or_default();
        ActionOutcome {
            feedback: Feedback {
                local_player: Some("You passed your turn".to_string()),
                opponents: Some(format!("{name} passed their turn")),
                end_game: None,
            },
            ..ActionOutcome::default()
        }
    }

    fn execute_hint(&self, player_id: &str) -> Result<ActionOutcome, GameError> {
        let player = self.player(player_id)?;
        let finder = WordFinder::new(&self.board, self.dictionary.as_ref(), &self.calculator);
        let result = finder.find_placements(
            &player.tiles,
            &WordFindingRequest {
                use_case: WordFindingUseCase::Hint { count: HINT_COUNT },
            },
        );

        let message = if result.candidates.is_empty() {
            "No placements found".to_string()
        } else {
            result
                .candidates
                .iter()
                .map(|scored| {
                    let word: String = scored
                        .placement
                        .tiles_to_place
                        .iter()
                        .map(|tile| tile.reading())
                        .collect();
                    format!(
                        "{} at {} {} for {} points",
                        word,
                        scored.placement.start_position,
                        scored.placement.orientation,
                        scored.score
                    )
                })
                .collect::<Vec<_>>()
                .join("; ")
        };
        Ok(ActionOutcome {
            feedback: Feedback {
                local_player: Some(message),
                ..Feedback::default()
            },
            ..ActionOutcome::default()
        })
    }

    fn execute_reserve(&self) -> ActionOutcome {
        let listing = self
            .tile_reserve
            .tiles_left_per_letter()
            .iter()
            .map(|data| format!("{}: {}", data.letter, data.amount))
            .collect::<Vec<_>>()
            .join(", ");
        ActionOutcome {
            feedback: Feedback {
                local_player: Some(listing),
                ..Feedback::default()
            },
            ..ActionOutcome::default()
        }
    }

    /// Marks every multiplier under a scored word as consumed.
    fn consume_multipliers(&mut self, words: &[WordSquares]) {
        for (square, _) in words.iter().flatten() {
            if let Ok(live) = self.board.square_mut(square.position) {
                if live.multiplier.is_some() {
                    live.multiplier_used = true;
                }
            }
        }
    }

    /// Fresh snapshots of every square a placement touched.
    fn changed_squares(&self, words: &[WordSquares]) -> Vec<Square> {
        let mut squares: Vec<Square> = Vec::new();
        for (square, _) in words.iter().flatten() {
            if !squares.iter().any(|seen| seen.position == square.position) {
                if let Ok(live) = self.board.square(square.position) {
                    squares.push(live.clone());
                }
            }
        }
        squares
    }

    /// Applies end-of-game scoring and returns the per-player summary lines.
    ///
    /// Players deduct the value of tiles left on their rack; a player who
    /// emptied theirs collects the sum of everyone else's.
    fn end_of_game(&mut self) -> Vec<String> {
        let leftover: u16 = self.players.iter().map(Player::rack_points).sum();
        for player in &mut self.players {
            if player.has_tiles_left() {
                player.score = player.score.saturating_sub(player.rack_points());
            } else {
                player.score += leftover;
            }
        }
        self.players
            .iter()
            .map(|player| format!("{} : {}", player.name, player.tiles_to_string()))
            .collect()
    }
}
