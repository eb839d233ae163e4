//! Scoring of extracted words.

use crate::board::ScoreMultiplier;
use crate::extraction::WordSquares;

/// Bonus for playing every tile on the rack in one placement.
pub const ALL_TILES_BONUS: u16 = 50;

/// Computes point totals for extracted words.
///
/// Each square's multiplier applies exactly once: squares whose
/// `multiplier_used` flag is set score their tile at face value. The flags
/// are consumed (set) by the game after a placement commits, so words formed
/// later over the same squares never re-apply the bonus.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Creates a calculator.
    pub fn new() -> Self {
        Self
    }

    /// Total score of all `words`, before any all-tiles bonus.
    pub fn score_words(&self, words: &[WordSquares]) -> u16 {
        words.iter().map(|word| self.score_word(word)).sum()
    }

    /// Score of a single word: letter values with live letter multipliers,
    /// the sum multiplied by every live word multiplier.
    pub fn score_word(&self, word: &WordSquares) -> u16 {
        let mut letters: u16 = 0;
        let mut word_factor: u16 = 1;

        for (square, tile) in word {
            let mut letter_value = tile.value as u16;
            if !square.multiplier_used {
                match square.multiplier {
                    Some(ScoreMultiplier::Letter(factor)) => letter_value *= factor as u16,
                    Some(ScoreMultiplier::Word(factor)) => word_factor *= factor as u16,
                    None => {}
                }
            }
            letters += letter_value;
        }

        letters * word_factor
    }

    /// Bonus earned by placing `tiles_placed` tiles from a rack of
    /// `rack_size`.
    pub fn bonus(&self, tiles_placed: usize, rack_size: usize) -> u16 {
        if tiles_placed == rack_size {
            ALL_TILES_BONUS
        } else {
            0
        }
    }
}
