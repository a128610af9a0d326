//! Bounce Snake - a grid snake that reflects off the walls
//!
//! Core modules:
//! - `sim`: Deterministic simulation (snake, apple, tick, game state)
//! - `speed`: Clamped tick interval and fixed-step clock
//! - `session`: Owns one game and its pending input; what frontends talk to
//! - `settings`: Board/interval configuration loaded from JSON
//! - `platform`: Terminal (native) and canvas (browser) frontends

pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;
pub mod speed;

pub use session::Session;
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Edge length of one grid cell, in board units
    pub const CELL_SIZE: i32 = 20;

    /// Board dimensions (board units, not cells)
    pub const BOARD_WIDTH: i32 = 800;
    pub const BOARD_HEIGHT: i32 = 600;

    /// Tick interval defaults (milliseconds)
    pub const TICK_INTERVAL_MS: u32 = 100;
    pub const MIN_TICK_INTERVAL_MS: u32 = 10;
    pub const MAX_TICK_INTERVAL_MS: u32 = 200;
    /// Interval change applied by one speed-up/slow-down input
    pub const SPEED_STEP_MS: i32 = 40;

    /// Maximum ticks run for one clock update to prevent spiral of death
    pub const MAX_CATCHUP_TICKS: u32 = 4;

    /// Presentation colors (RGB)
    pub const SNAKE_COLOR: (u8, u8, u8) = (128, 0, 128);
    pub const APPLE_COLOR: (u8, u8, u8) = (255, 0, 0);
}
