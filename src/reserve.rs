//! The tile reserve: the bag tiles are drawn from and exchanged into.

use crate::tile::{Tile, LETTER_DISTRIBUTION};
use rand::Rng;
use std::collections::BTreeMap;
use tracing::instrument;

/// Per-letter count of tiles left in the reserve, as sent to clients.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileReserveData {
    /// The letter.
    pub letter: char,
    /// How many tiles of that letter remain.
    pub amount: usize,
}

/// The bag of undrawn tiles, exclusively owned by one game.
///
/// All draws and returns go through `&mut self`, so a game's sequence of
/// turns is the only writer; the session layer serializes access across
/// tasks with the game's own lock.
#[derive(Debug, Clone)]
pub struct TileReserve {
    tiles: Vec<Tile>,
}

impl TileReserve {
    /// Creates a full reserve from the classic letter distribution.
    pub fn new() -> Self {
        let tiles = LETTER_DISTRIBUTION
            .iter()
            .flat_map(|&(letter, value, count)| {
                (0..count).map(move |_| Tile::new(letter, value))
            })
            .collect();
        Self { tiles }
    }

    /// Creates a reserve holding exactly `tiles`. Useful for tests and
    /// puzzle setups.
    pub fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Number of tiles left.
    pub fn tiles_left(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the reserve is empty.
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Count of remaining tiles per letter, in letter order.
    pub fn tiles_left_per_letter(&self) -> Vec<TileReserveData> {
        let mut counts: BTreeMap<char, usize> = BTreeMap::new();
        for tile in &self.tiles {
            *counts.entry(tile.letter).or_insert(0) += 1;
        }
        counts
            .into_iter()
            .map(|(letter, amount)| TileReserveData { letter, amount })
            .collect()
    }

    /// Draws up to `amount` tiles uniformly at random. Fewer are returned
    /// when the reserve runs dry.
    #[instrument(skip(self))]
    pub fn draw(&mut self, amount: usize) -> Vec<Tile> {
        let mut rng = rand::rng();
        let mut drawn = Vec::with_capacity(amount.min(self.tiles.len()));
        for _ in 0..amount {
            if self.tiles.is_empty() {
                break;
            }
            let index = rng.random_range(0..self.tiles.len());
            drawn.push(self.tiles.swap_remove(index));
        }
        drawn
    }

    /// Exchanges `returned` tiles: draws replacements first, then folds the
    /// returned tiles back into the bag so a player can never redraw their
    /// own discards in the same exchange.
    #[instrument(skip(self, returned), fields(count = returned.len()))]
    pub fn exchange(&mut self, returned: Vec<Tile>) -> Vec<Tile> {
        let drawn = self.draw(returned.len());
        self.tiles.extend(returned);
        drawn
    }
}

impl Default for TileReserve {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_reserve_holds_one_hundred_tiles() {
        assert_eq!(TileReserve::new().tiles_left(), 100);
    }

    #[test]
    fn draw_never_hands_out_the_same_tile_twice() {
        let mut reserve = TileReserve::new();
        let drawn = reserve.draw(100);
        assert_eq!(drawn.len(), 100);
        assert!(reserve.is_empty());
        assert!(reserve.draw(1).is_empty());
    }

    #[test]
    fn exchange_keeps_reserve_size_constant() {
        let mut reserve = TileReserve::new();
        let rack = reserve.draw(7);
        let before = reserve.tiles_left();
        let redrawn = reserve.exchange(rack);
        assert_eq!(redrawn.len(), 7);
        assert_eq!(reserve.tiles_left(), before);
    }

    #[test]
    fn per_letter_counts_sum_to_total() {
        let mut reserve = TileReserve::new();
        reserve.draw(30);
        let total: usize = reserve
            .tiles_left_per_letter()
            .iter()
            .map(|data| data.amount)
            .sum();
        assert_eq!(total, reserve.tiles_left());
    }
}
