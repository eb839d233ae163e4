//! Active-game registry and action routing.
//!
//! Each game sits behind its own lock; concurrent games never contend.
//! Actions are applied strictly in arrival order while the game lock is
//! held, so an action from a non-active player fails fast instead of
//! queueing.

use crate::action::{Action, ActionError};
use crate::communication::ActionData;
use crate::game::{ActionOutcome, Game, GameError};
use crate::virtual_player::{play_turn, VirtualPlayerContext, VirtualPlayerLevel};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, instrument, warn};

/// Unique identifier for a game.
pub type GameId = String;

/// Errors surfaced by the session layer.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::From)]
pub enum SessionError {
    /// No game with this id is registered.
    #[from(ignore)]
    #[display("no active game with id '{}'", _0)]
    GameNotFound(GameId),
    /// A game with this id is already registered.
    #[from(ignore)]
    #[display("a game with id '{}' already exists", _0)]
    GameAlreadyExists(GameId),
    /// The action payload could not be parsed.
    #[display("{}", _0)]
    Action(ActionError),
    /// The game rejected the action.
    #[display("{}", _0)]
    Game(GameError),
}

impl std::error::Error for SessionError {}

/// Registry of all active games.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    games: Arc<Mutex<HashMap<GameId, Arc<Mutex<Game>>>>>,
}

impl SessionManager {
    /// Creates an empty manager.
    #[instrument]
    pub fn new() -> Self {
        info!("creating session manager");
        Self::default()
    }

    /// Registers a game.
    ///
    /// # Errors
    ///
    /// [`SessionError::GameAlreadyExists`] when the id is taken.
    #[instrument(skip(self, game), fields(game = %game.id()))]
    pub fn add_game(&self, game: Game) -> Result<GameId, SessionError> {
        let id = game.id().to_string();
        let mut games = self.games.lock().unwrap();
        if games.contains_key(&id) {
            warn!(game = %id, "game id already registered");
            return Err(SessionError::GameAlreadyExists(id));
        }
        games.insert(id.clone(), Arc::new(Mutex::new(game)));
        info!(game = %id, "game registered");
        Ok(id)
    }

    /// Handle to a registered game.
    ///
    /// # Errors
    ///
    /// [`SessionError::GameNotFound`] when the id is unknown.
    pub fn get_game(&self, id: &str) -> Result<Arc<Mutex<Game>>, SessionError> {
        let games = self.games.lock().unwrap();
        games
            .get(id)
            .cloned()
            .ok_or_else(|| SessionError::GameNotFound(id.to_string()))
    }

    /// Ids of every registered game.
    pub fn list_games(&self) -> Vec<GameId> {
        let games = self.games.lock().unwrap();
        games.keys().cloned().collect()
    }

    /// Drops a game from the registry.
    ///
    /// # Errors
    ///
    /// [`SessionError::GameNotFound`] when the id is unknown.
    #[instrument(skip(self))]
    pub fn remove_game(&self, id: &str) -> Result<(), SessionError> {
        let mut games = self.games.lock().unwrap();
        games
            .remove(id)
            .map(|_| info!(game = %id, "game removed"))
            .ok_or_else(|| SessionError::GameNotFound(id.to_string()))
    }

    /// Parses and executes a wire action for a player.
    ///
    /// # Errors
    ///
    /// [`SessionError::Action`] on a malformed payload, otherwise whatever
    /// the game rejects wrapped in [`SessionError::Game`].
    #[instrument(skip(self, data), fields(action = %data.action_type))]
    pub fn play_action(
        &self,
        game_id: &str,
        player_id: &str,
        data: &ActionData,
    ) -> Result<ActionOutcome, SessionError> {
        let action = Action::from_data(data)?;
        self.execute(game_id, player_id, action)
    }

    /// Forces a pass on the active player, used when a round timer expires.
    #[instrument(skip(self))]
    pub fn substitute_pass(
        &self,
        game_id: &str,
        player_id: &str,
    ) -> Result<ActionOutcome, SessionError> {
        debug!(player = player_id, "substituting a pass");
        self.execute(game_id, player_id, Action::Pass)
    }

    /// Computes and plays a full virtual-player turn.
    ///
    /// The game lock is held only to snapshot inputs and to commit the
    /// result, never across the computation. Should the computed placement
    /// no longer apply when it lands, the turn degrades to a pass.
    #[instrument(skip(self))]
    pub async fn play_virtual_turn(
        &self,
        game_id: &str,
        player_id: &str,
        level: VirtualPlayerLevel,
    ) -> Result<ActionOutcome, SessionError> {
        let context = {
            let game = self.get_game(game_id)?;
            let game = game.lock().unwrap();
            VirtualPlayerContext::from_game(&game, player_id, level).map_err(SessionError::Game)?
        };
        let action = play_turn(context).await;

        match self.execute(game_id, player_id, action) {
            Err(SessionError::Game(error))
                if !matches!(
                    error,
                    GameError::GameAlreadyOver | GameError::NotPlayerTurn(_)
                ) =>
            {
                warn!(player = player_id, %error, "virtual action rejected, passing instead");
                self.execute(game_id, player_id, Action::Pass)
            }
            outcome => outcome,
        }
    }

    /// Marks a player disconnected in their game.
    #[instrument(skip(self))]
    pub fn disconnect_player(&self, game_id: &str, player_id: &str) -> Result<(), SessionError> {
        let game = self.get_game(game_id)?;
        let mut game = game.lock().unwrap();
        game.disconnect_player(player_id).map_err(SessionError::Game)
    }

    /// Replaces a player's identity in their game.
    #[instrument(skip(self))]
    pub fn replace_player(
        &self,
        game_id: &str,
        old_id: &str,
        new_id: &str,
        new_name: &str,
    ) -> Result<(), SessionError> {
        let game = self.get_game(game_id)?;
        let mut game = game.lock().unwrap();
        game.replace_player(old_id, new_id, new_name)
            .map_err(SessionError::Game)
    }

    fn execute(
        &self,
        game_id: &str,
        player_id: &str,
        action: Action,
    ) -> Result<ActionOutcome, SessionError> {
        let game = self.get_game(game_id)?;
        let mut game = game.lock().unwrap();
        game.execute(player_id, action).map_err(SessionError::Game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::InMemoryDictionary;
    use crate::game::GameConfig;
    use crate::player::Player;

    fn sample_game(id: &str) -> Game {
        let dictionary = Arc::new(InMemoryDictionary::from_words(["cat", "at"]));
        Game::new(
            id,
            vec![Player::new("p1", "Alice"), Player::new("p2", "Bob")],
            dictionary,
            GameConfig::default(),
        )
    }

    #[test]
    fn add_and_list_games() {
        let manager = SessionManager::new();
        manager.add_game(sample_game("g1")).unwrap();
        manager.add_game(sample_game("g2")).unwrap();
        let mut ids = manager.list_games();
        ids.sort();
        assert_eq!(ids, vec!["g1".to_string(), "g2".to_string()]);
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let manager = SessionManager::new();
        manager.add_game(sample_game("g1")).unwrap();
        assert!(matches!(
            manager.add_game(sample_game("g1")),
            Err(SessionError::GameAlreadyExists(_))
        ));
    }

    #[test]
    fn unknown_game_is_reported() {
        let manager = SessionManager::new();
        assert!(matches!(
            manager.get_game("missing"),
            Err(SessionError::GameNotFound(_))
        ));
    }

    #[test]
    fn substitute_pass_advances_the_round() {
        let manager = SessionManager::new();
        let id = manager.add_game(sample_game("g1")).unwrap();
        let active = {
            let game = manager.get_game(&id).unwrap();
            let game = game.lock().unwrap();
            game.active_player_id().unwrap().to_string()
        };
        let outcome = manager.substitute_pass(&id, &active).unwrap();
        assert!(outcome.update.round.is_some());

        let game = manager.get_game(&id).unwrap();
        let game = game.lock().unwrap();
        assert_ne!(game.active_player_id(), Some(active.as_str()));
    }

    #[test]
    fn non_active_player_is_rejected_not_queued() {
        let manager = SessionManager::new();
        let id = manager.add_game(sample_game("g1")).unwrap();
        let inactive = {
            let game = manager.get_game(&id).unwrap();
            let game = game.lock().unwrap();
            let active = game.active_player_id().unwrap();
            if active == "p1" { "p2" } else { "p1" }
        };
        assert!(matches!(
            manager.substitute_pass(&id, inactive),
            Err(SessionError::Game(GameError::NotPlayerTurn(_)))
        ));
    }

    #[test]
    fn remove_game_forgets_it() {
        let manager = SessionManager::new();
        let id = manager.add_game(sample_game("g1")).unwrap();
        manager.remove_game(&id).unwrap();
        assert!(manager.get_game(&id).is_err());
    }
}
