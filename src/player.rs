//! Players and their racks.

use crate::tile::Tile;
use serde::{Deserialize, Serialize};

/// Number of tiles a player holds when their rack is full.
pub const RACK_SIZE: usize = 7;

/// A participant in one game: identity, rack, score, connection state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    /// Unique id within the game.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Tiles currently on the rack.
    pub tiles: Vec<Tile>,
    /// Accumulated score.
    pub score: u16,
    /// Whether the player is currently connected. Disconnecting does not
    /// cancel an in-progress round.
    pub is_connected: bool,
    /// Whether this player is driven by the virtual-player strategy.
    pub is_virtual: bool,
}

impl Player {
    /// Creates a connected human player with an empty rack.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            tiles: Vec::new(),
            score: 0,
            is_connected: true,
            is_virtual: false,
        }
    }

    /// Creates a virtual player with an empty rack.
    pub fn virtual_player(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            is_virtual: true,
            ..Self::new(id, name)
        }
    }

    /// Whether any tiles remain on the rack.
    pub fn has_tiles_left(&self) -> bool {
        !self.tiles.is_empty()
    }

    /// Sum of the point values of the tiles still on the rack.
    pub fn rack_points(&self) -> u16 {
        self.tiles.iter().map(|tile| tile.value as u16).sum()
    }

    /// Removes `wanted` tiles from the rack, matching by letter and value.
    /// Returns `None` (and leaves the rack untouched) when any wanted tile
    /// is not on the rack, respecting multiplicity.
    pub fn take_tiles(&mut self, wanted: &[Tile]) -> Option<Vec<Tile>> {
        let mut remaining = self.tiles.clone();
        let mut taken = Vec::with_capacity(wanted.len());
        for tile in wanted {
            let index = remaining
                .iter()
                .position(|held| held.letter == tile.letter && held.value == tile.value)?;
            let mut held = remaining.remove(index);
            held.played_letter = tile.played_letter;
            taken.push(held);
        }
        self.tiles = remaining;
        Some(taken)
    }

    /// The rack as a lowercase string of letters, for end-game summaries.
    pub fn tiles_to_string(&self) -> String {
        self.tiles
            .iter()
            .flat_map(|tile| tile.letter.to_lowercase())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_tiles_respects_multiplicity() {
        let mut player = Player::new("p1", "Ada");
        player.tiles = vec![Tile::new('A', 1), Tile::new('B', 3)];
        assert!(player.take_tiles(&[Tile::new('A', 1), Tile::new('A', 1)]).is_none());
        assert_eq!(player.tiles.len(), 2);

        let taken = player.take_tiles(&[Tile::new('A', 1)]).unwrap();
        assert_eq!(taken.len(), 1);
        assert_eq!(player.tiles, vec![Tile::new('B', 3)]);
    }

    #[test]
    fn rack_points_sums_values() {
        let mut player = Player::new("p1", "Ada");
        player.tiles = vec![Tile::new('Q', 10), Tile::new('Z', 10), Tile::blank(None)];
        assert_eq!(player.rack_points(), 20);
    }
}
