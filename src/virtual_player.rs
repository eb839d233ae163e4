//! Computer-controlled players.
//!
//! A virtual player is an ordinary [`Player`](crate::player::Player) flagged
//! `is_virtual`; the behavior lives here as a strategy function picked by
//! difficulty level rather than on the player itself. Turn computation runs
//! on a blocking thread and races a deadline timer; if the deadline wins the
//! turn resolves to a pass and the late result is discarded.

use crate::action::Action;
use crate::board::Board;
use crate::dictionary::DictionaryLookup;
use crate::game::{Game, GameError};
use crate::tile::Tile;
use crate::word_finding::{
    PointRange, WordFinder, WordFindingRequest, WordFindingUseCase,
};
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Shortest a virtual player waits before acting, so its moves read as
/// deliberate rather than instantaneous.
pub const PRELIMINARY_WAIT: Duration = Duration::from_secs(3);

/// Longest a virtual player may spend on a turn before it passes.
pub const FINAL_WAIT: Duration = Duration::from_secs(20);

/// How many candidates an expert gathers before keeping the best.
pub const EXPERT_CANDIDATE_COUNT: usize = 10;

/// Chance a beginner passes outright.
const PASS_CHANCE: f64 = 0.1;

/// Chance a beginner exchanges instead of playing (rolled after the pass
/// chance, so effectively 0.1 of all turns).
const EXCHANGE_CHANCE: f64 = 0.2;

/// Beginner score brackets with their selection weights.
const BEGINNER_RANGES: [(PointRange, f64); 3] = [
    (PointRange { minimum: 0, maximum: 6 }, 0.4),
    (PointRange { minimum: 7, maximum: 12 }, 0.3),
    (PointRange { minimum: 13, maximum: 18 }, 0.3),
];

/// Difficulty of a computer-controlled player.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum VirtualPlayerLevel {
    /// Aims for modest scores and sometimes passes or exchanges.
    #[default]
    Beginner,
    /// Always plays the highest-scoring placement it finds.
    Expert,
}

/// Everything a turn computation needs, snapshotted from the game so the
/// search can run off-thread without holding any game lock.
#[derive(Clone)]
pub struct VirtualPlayerContext {
    /// Id of the acting virtual player.
    pub player_id: String,
    /// The player's rack at snapshot time.
    pub rack: Vec<Tile>,
    /// Board copy to search on.
    pub board: Board,
    /// Shared dictionary handle.
    pub dictionary: Arc<dyn DictionaryLookup>,
    /// Tiles left in the reserve at snapshot time.
    pub reserve_count: usize,
    /// Fewest reserve tiles required for an exchange.
    pub minimum_exchange_tiles: usize,
    /// Difficulty to play at.
    pub level: VirtualPlayerLevel,
}

impl std::fmt::Debug for VirtualPlayerContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VirtualPlayerContext")
            .field("player_id", &self.player_id)
            .field("level", &self.level)
            .finish_non_exhaustive()
    }
}

impl VirtualPlayerContext {
    /// Snapshots the state a turn computation needs from a game.
    ///
    /// # Errors
    ///
    /// [`GameError::UnknownPlayer`] when the player is not in the game.
    pub fn from_game(
        game: &Game,
        player_id: &str,
        level: VirtualPlayerLevel,
    ) -> Result<Self, GameError> {
        let player = game.player(player_id)?;
        Ok(Self {
            player_id: player_id.to_string(),
            rack: player.tiles.clone(),
            board: game.board().clone(),
            dictionary: game.dictionary(),
            reserve_count: game.tile_reserve().tiles_left(),
            minimum_exchange_tiles: game.config().minimum_exchange_tiles,
            level,
        })
    }

    fn can_exchange(&self) -> bool {
        !self.rack.is_empty() && self.reserve_count >= self.minimum_exchange_tiles
    }

    /// Falls back from a failed word search: exchange when allowed,
    /// otherwise pass.
    fn fallback_action(&self) -> Action {
        if self.can_exchange() {
            let mut rng = rand::rng();
            let count = rng.random_range(1..=self.rack.len());
            let tiles: Vec<Tile> = self
                .rack
                .choose_multiple(&mut rng, count)
                .cloned()
                .collect();
            Action::Exchange(tiles)
        } else {
            Action::Pass
        }
    }

    /// Synchronous turn computation. This is the expensive part; callers run
    /// it through [`play_turn`] to bound its duration.
    pub fn compute_action(&self) -> Action {
        match self.level {
            VirtualPlayerLevel::Beginner => self.beginner_action(),
            VirtualPlayerLevel::Expert => self.expert_action(),
        }
    }

    fn beginner_action(&self) -> Action {
        let roll: f64 = rand::rng().random();
        if roll < PASS_CHANCE {
            return Action::Pass;
        }
        if roll < EXCHANGE_CHANCE && self.can_exchange() {
            return self.fallback_action();
        }

        let calculator = crate::scoring::ScoreCalculator::new();
        let finder = WordFinder::new(&self.board, self.dictionary.as_ref(), &calculator);
        let result = finder.find_placements(
            &self.rack,
            &WordFindingRequest {
                use_case: WordFindingUseCase::WithinRange(self.pick_range()),
            },
        );
        match result.chosen {
            Some(scored) => Action::Place(scored.placement),
            None => self.fallback_action(),
        }
    }

    fn expert_action(&self) -> Action {
        let calculator = crate::scoring::ScoreCalculator::new();
        let finder = WordFinder::new(&self.board, self.dictionary.as_ref(), &calculator);
        let result = finder.find_placements(
            &self.rack,
            &WordFindingRequest {
                use_case: WordFindingUseCase::Hint {
                    count: EXPERT_CANDIDATE_COUNT,
                },
            },
        );
        result
            .candidates
            .into_iter()
            .max_by_key(|scored| scored.score)
            .map(|scored| Action::Place(scored.placement))
            .unwrap_or_else(|| self.fallback_action())
    }

    /// Weighted draw over the beginner score brackets.
    fn pick_range(&self) -> PointRange {
        let roll: f64 = rand::rng().random();
        let mut cumulative = 0.0;
        for (range, weight) in BEGINNER_RANGES {
            cumulative += weight;
            if roll < cumulative {
                return range;
            }
        }
        BEGINNER_RANGES[BEGINNER_RANGES.len() - 1].0
    }
}

/// Computes a virtual player's action, bounded in both directions: never
/// sooner than [`PRELIMINARY_WAIT`], never later than [`FINAL_WAIT`].
///
/// The search runs on a blocking thread and races the deadline. A search
/// that outlives the deadline is aborted and the turn becomes a pass.
#[instrument(skip(context), fields(player = %context.player_id, level = %context.level))]
pub async fn play_turn(context: VirtualPlayerContext) -> Action {
    let started = tokio::time::Instant::now();
    let player_id = context.player_id.clone();
    let mut computation = tokio::task::spawn_blocking(move || context.compute_action());

    let action = tokio::select! {
        joined = &mut computation => match joined {
            Ok(action) => action,
            Err(error) => {
                warn!(player = %player_id, %error, "turn computation failed, passing");
                Action::Pass
            }
        },
        _ = tokio::time::sleep(FINAL_WAIT) => {
            warn!(player = %player_id, "turn computation timed out, passing");
            computation.abort();
            Action::Pass
        }
    };

    if let Some(remaining) = PRELIMINARY_WAIT.checked_sub(started.elapsed()) {
        tokio::time::sleep(remaining).await;
    }
    info!(player = %player_id, action = %action.action_type(), "virtual turn resolved");
    action
}
