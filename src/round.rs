//! Turn sequencing, round timing, and game-over detection.

use crate::action::Action;
use crate::board::Board;
use crate::player::Player;
use crate::tile::Tile;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use tracing::{debug, instrument};

/// Consecutive passing rounds per player before the game ends in a
/// stalemate. Multiplied by the player count.
pub const DEFAULT_PASS_THRESHOLD: usize = 3;

/// Errors raised by round-state queries and mutations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RoundError {
    /// No round has begun yet.
    #[display("no first round exists")]
    NoFirstRoundExists,
    /// The referenced player is not part of this game.
    #[display("player '{}' is not in this game", _0)]
    UnknownPlayer(String),
}

impl std::error::Error for RoundError {}

/// The round currently being played.
///
/// Carries a snapshot of the active player's rack at round start;
/// the live rack keeps evolving while the round resolves.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    /// Id of the active player.
    pub player_id: String,
    /// The active player's rack at round start.
    pub rack_snapshot: Vec<Tile>,
    /// When the round began.
    pub start_time: DateTime<Utc>,
    /// When the round must be resolved by.
    pub limit_time: DateTime<Utc>,
}

/// An archived round. Never mutated after completion.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedRound {
    /// The round as it was begun.
    pub round: Round,
    /// When the round completed.
    pub completed_time: DateTime<Utc>,
    /// The action that completed it.
    pub action_played: Action,
    /// Deep snapshot of the board at completion; shares nothing with the
    /// live grid.
    pub board: Board,
}

/// Sequences turns for a fixed player ordering.
///
/// The very first round goes to a uniformly random player; every later round
/// follows strict round-robin over the configured ordering. `completed
/// rounds` is append-only, and the consecutive-pass counter resets on any
/// non-pass completion.
#[derive(Debug, Clone)]
pub struct RoundManager {
    player_ids: Vec<String>,
    current_round: Option<Round>,
    completed_rounds: Vec<CompletedRound>,
    consecutive_passes: usize,
    pass_threshold: usize,
    max_round_time: Duration,
}

impl RoundManager {
    /// Creates a manager for the given player ordering and round duration.
    pub fn new(player_ids: Vec<String>, max_round_time: Duration, pass_threshold: usize) -> Self {
        debug_assert!(!player_ids.is_empty());
        Self {
            player_ids,
            current_round: None,
            completed_rounds: Vec::new(),
            consecutive_passes: 0,
            pass_threshold,
            max_round_time,
        }
    }

    /// The configured maximum round duration.
    pub fn max_round_time(&self) -> Duration {
        self.max_round_time
    }

    /// The round in progress, if any.
    pub fn current_round(&self) -> Option<&Round> {
        self.current_round.as_ref()
    }

    /// Archived rounds, oldest first.
    pub fn completed_rounds(&self) -> &[CompletedRound] {
        &self.completed_rounds
    }

    /// Begins the next round: random uniform player choice for the very
    /// first round, strict round-robin afterwards. `players` supplies the
    /// rack snapshot for whoever is chosen.
    #[instrument(skip(self, players))]
    pub fn begin_round(&mut self, players: &[Player]) -> Round {
        let player_id = self.next_player_id();
        let rack_snapshot = players
            .iter()
            .find(|player| player.id == player_id)
            .map(|player| player.tiles.clone())
            .unwrap_or_default();

        let start_time = Utc::now();
        let round = Round {
            player_id,
            rack_snapshot,
            start_time,
            limit_time: start_time + self.max_round_time,
        };
        debug!(player = %round.player_id, "round begins");
        self.current_round = Some(round.clone());
        round
    }

    /// Archives the round in progress with the action that completed it and
    /// a board snapshot, then begins the next round.
    #[instrument(skip(self, action_played, board, players))]
    pub fn next_round(
        &mut self,
        action_played: Action,
        board: &Board,
        players: &[Player],
    ) -> Round {
        if let Some(round) = self.current_round.clone() {
            self.save_completed_round(round, action_played, board);
        }
        // The just-archived round stays in place until `begin_round` replaces
        // it, so round-robin still knows whose turn ended.
        self.begin_round(players)
    }

    /// When the game's first round started.
    ///
    /// # Errors
    ///
    /// [`RoundError::NoFirstRoundExists`] before any round has begun.
    pub fn game_start_time(&self) -> Result<DateTime<Utc>, RoundError> {
        self.completed_rounds
            .first()
            .map(|completed| completed.round.start_time)
            .or_else(|| self.current_round.as_ref().map(|round| round.start_time))
            .ok_or(RoundError::NoFirstRoundExists)
    }

    /// Swaps a player identity in the turn ordering, retargeting the round
    /// in progress when the replaced player is the active one.
    ///
    /// # Errors
    ///
    /// [`RoundError::UnknownPlayer`] when `old_id` is not in the ordering.
    #[instrument(skip(self))]
    pub fn replace_player(&mut self, old_id: &str, new_id: &str) -> Result<(), RoundError> {
        let slot = self
            .player_ids
            .iter_mut()
            .find(|id| id.as_str() == old_id)
            .ok_or_else(|| RoundError::UnknownPlayer(old_id.to_string()))?;
        *slot = new_id.to_string();

        if let Some(round) = self.current_round.as_mut() {
            if round.player_id == old_id {
                round.player_id = new_id.to_string();
            }
        }
        Ok(())
    }

    /// Whether every player has passed enough times in a row to end the
    /// game in a stalemate.
    pub fn pass_limit_reached(&self) -> bool {
        self.consecutive_passes >= self.pass_threshold * self.player_ids.len()
    }

    fn save_completed_round(&mut self, round: Round, action_played: Action, board: &Board) {
        if action_played.is_pass() {
            self.consecutive_passes += 1;
        } else {
            self.consecutive_passes = 0;
        }
        debug!(
            passes = self.consecutive_passes,
            action = %action_played.action_type(),
            "round archived"
        );
        self.completed_rounds.push(CompletedRound {
            round,
            completed_time: Utc::now(),
            action_played,
            board: board.clone(),
        });
    }

    fn next_player_id(&self) -> String {
        match &self.current_round {
            None => {
                let index = rand::rng().random_range(0..self.player_ids.len());
                self.player_ids[index].clone()
            }
            Some(round) => {
                let current = self
                    .player_ids
                    .iter()
                    .position(|id| *id == round.player_id)
                    .unwrap_or(0);
                self.player_ids[(current + 1) % self.player_ids.len()].clone()
            }
        }
    }
}
