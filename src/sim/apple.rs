//! The apple: one cell that respawns at random when eaten

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::grid::{Board, Cell};
use super::snake::Snake;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Apple {
    pub position: Cell,
}

impl Apple {
    /// Place a new apple at a random cell
    pub fn spawn<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Self {
        let mut apple = Self {
            position: Cell::ZERO,
        };
        apple.generate_new_apple(board, rng);
        apple
    }

    /// Move to a uniformly random cell. Column and row are drawn independently.
    ///
    /// Cells under the snake are not excluded.
    pub fn generate_new_apple<R: Rng + ?Sized>(&mut self, board: &Board, rng: &mut R) {
        let col = rng.random_range(0..board.columns().max(1));
        let row = rng.random_range(0..board.rows().max(1));
        self.position = Cell::new(col, row) * board.cell_size;
    }

    pub fn is_eaten_by(&self, snake: &Snake) -> bool {
        snake.head() == self.position
    }
}
