//! Game state and render snapshot

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::apple::Apple;
use super::grid::{Board, Cell};
use super::snake::Snake;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ticks advance the snake
    Running,
    /// Snake ran into itself. Terminal for the session.
    GameOver,
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub board: Board,
    pub snake: Snake,
    pub apple: Apple,
    pub phase: GamePhase,
    /// Simulation tick counter (stops advancing at game over)
    pub time_ticks: u64,
    /// Apple placement RNG
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// New game: one-segment snake at the board center moving right, random apple
    pub fn new(board: Board, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let apple = Apple::spawn(&board, &mut rng);
        Self {
            seed,
            board,
            snake: Snake::new(board.center()),
            apple,
            phase: GamePhase::Running,
            time_ticks: 0,
            rng,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Respawn the apple using the state's RNG
    pub fn respawn_apple(&mut self) {
        self.apple.generate_new_apple(&self.board, &mut self.rng);
    }

    /// Render-ready copy of the current state
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            segments: self.snake.segments().iter().copied().collect(),
            apple: self.apple.position,
            phase: self.phase,
            time_ticks: self.time_ticks,
            board: self.board,
        }
    }
}

/// What the presentation layer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Head first
    pub segments: Vec<Cell>,
    pub apple: Cell,
    pub phase: GamePhase,
    pub time_ticks: u64,
    pub board: Board,
}

impl Snapshot {
    pub fn head(&self) -> Cell {
        self.segments[0]
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}
