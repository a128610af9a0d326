//! Grid geometry shared by the snake and the apple
//!
//! Positions are in board units and always a multiple of the cell size.
//! Screen convention: x grows to the right, y grows downward.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A grid-aligned position
pub type Cell = IVec2;

/// Board dimensions. Not stored by the snake or apple, passed into their operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            cell_size: CELL_SIZE,
        }
    }
}

impl Board {
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    /// Number of cell columns
    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    /// Number of cell rows
    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    /// Whether `cell` lies within [0, width) x [0, height)
    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    /// Whether `cell` sits on a grid line
    pub fn is_aligned(&self, cell: Cell) -> bool {
        cell.x % self.cell_size == 0 && cell.y % self.cell_size == 0
    }

    /// Board center snapped down to the grid
    pub fn center(&self) -> Cell {
        let half = IVec2::new(self.width / 2, self.height / 2);
        half / self.cell_size * self.cell_size
    }

    /// Convert a cell position to (column, row)
    pub fn to_grid(&self, cell: Cell) -> IVec2 {
        cell / self.cell_size
    }
}

/// The four directions a player can steer toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    /// Unit vector for this heading
    pub fn to_vector(self) -> IVec2 {
        match self {
            Heading::Up => IVec2::new(0, -1),
            Heading::Down => IVec2::new(0, 1),
            Heading::Left => IVec2::new(-1, 0),
            Heading::Right => IVec2::new(1, 0),
        }
    }

    pub fn from_vector(v: IVec2) -> Option<Self> {
        match (v.x, v.y) {
            (0, -1) => Some(Heading::Up),
            (0, 1) => Some(Heading::Down),
            (-1, 0) => Some(Heading::Left),
            (1, 0) => Some(Heading::Right),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_snaps_to_grid() {
        assert_eq!(Board::default().center(), IVec2::new(400, 300));
        // 410 / 2 = 205 -> 200, 290 / 2 = 145 -> 140
        let board = Board::new(410, 290, 20);
        assert_eq!(board.center(), IVec2::new(200, 140));
        assert!(board.is_aligned(board.center()));
    }

    #[test]
    fn test_contains_is_half_open() {
        let board = Board::default();
        assert!(board.contains(IVec2::new(0, 0)));
        assert!(board.contains(IVec2::new(780, 580)));
        assert!(!board.contains(IVec2::new(800, 0)));
        assert!(!board.contains(IVec2::new(0, -20)));
    }

    #[test]
    fn test_heading_vectors() {
        for heading in [Heading::Up, Heading::Down, Heading::Left, Heading::Right] {
            assert_eq!(Heading::from_vector(heading.to_vector()), Some(heading));
        }
        assert_eq!(Heading::from_vector(IVec2::new(1, 1)), None);
    }
}
