//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per tick, no wall-clock time
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod apple;
pub mod grid;
pub mod snake;
pub mod state;
pub mod tick;

pub use apple::Apple;
pub use grid::{Board, Cell, Heading};
pub use snake::Snake;
pub use state::{GamePhase, GameState, Snapshot};
pub use tick::{GameEvent, TickInput, TickOutcome, tick};
