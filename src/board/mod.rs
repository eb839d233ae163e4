//! Board grid, squares, and the navigator cursor.

mod board;
mod navigator;
mod orientation;
mod position;
mod square;

pub use board::{Board, BoardError, BOARD_SIZE};
pub use navigator::BoardNavigator;
pub use orientation::Orientation;
pub use position::{Direction, Position};
pub use square::{Occupancy, ScoreMultiplier, Square};
