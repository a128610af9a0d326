//! Game settings
//!
//! Read as JSON: LocalStorage in the browser, a file on native.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Board;
use crate::speed::TickInterval;

/// Why a settings value was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// Cell size must be positive
    CellSize(i32),
    /// Board must be at least one cell on each axis
    BoardTooSmall { width: i32, height: i32, cell_size: i32 },
    /// Board edge is not a whole number of cells
    Unaligned { width: i32, height: i32, cell_size: i32 },
    /// Minimum interval must be positive
    ZeroMinInterval,
    /// min_interval_ms > max_interval_ms
    IntervalBounds { min_ms: u32, max_ms: u32 },
    /// Start interval outside [min, max]
    IntervalOutOfRange { ms: u32, min_ms: u32, max_ms: u32 },
    /// Speed step must be positive
    SpeedStep(i32),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::CellSize(size) => write!(f, "cell size must be positive, got {size}"),
            SettingsError::BoardTooSmall {
                width,
                height,
                cell_size,
            } => write!(
                f,
                "board {width}x{height} is smaller than one {cell_size}-unit cell"
            ),
            SettingsError::Unaligned {
                width,
                height,
                cell_size,
            } => write!(
                f,
                "board {width}x{height} is not a whole number of {cell_size}-unit cells"
            ),
            SettingsError::ZeroMinInterval => write!(f, "minimum tick interval must be positive"),
            SettingsError::IntervalBounds { min_ms, max_ms } => {
                write!(f, "tick interval bounds are reversed ({min_ms} > {max_ms})")
            }
            SettingsError::IntervalOutOfRange { ms, min_ms, max_ms } => {
                write!(f, "tick interval {ms} ms is outside [{min_ms}, {max_ms}]")
            }
            SettingsError::SpeedStep(step) => {
                write!(f, "speed step must be positive, got {step} ms")
            }
        }
    }
}

impl std::error::Error for SettingsError {}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Board ===
    /// Board width in units
    pub board_width: i32,
    /// Board height in units
    pub board_height: i32,
    /// Edge length of one cell
    pub cell_size: i32,

    // === Speed ===
    /// Starting delay between ticks
    pub tick_interval_ms: u32,
    pub min_interval_ms: u32,
    pub max_interval_ms: u32,
    /// Interval change per speed-up/slow-down key press
    pub speed_step_ms: i32,

    /// Fixed RNG seed; random when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_width: BOARD_WIDTH,
            board_height: BOARD_HEIGHT,
            cell_size: CELL_SIZE,

            tick_interval_ms: TICK_INTERVAL_MS,
            min_interval_ms: MIN_TICK_INTERVAL_MS,
            max_interval_ms: MAX_TICK_INTERVAL_MS,
            speed_step_ms: SPEED_STEP_MS,

            seed: None,
        }
    }
}

impl Settings {
    pub fn board(&self) -> Board {
        Board::new(self.board_width, self.board_height, self.cell_size)
    }

    pub fn tick_interval(&self) -> TickInterval {
        TickInterval::new(
            self.tick_interval_ms,
            self.min_interval_ms,
            self.max_interval_ms,
        )
    }

    /// Check that the values describe a playable board and a sane interval range
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.cell_size <= 0 {
            return Err(SettingsError::CellSize(self.cell_size));
        }
        if self.board_width < self.cell_size || self.board_height < self.cell_size {
            return Err(SettingsError::BoardTooSmall {
                width: self.board_width,
                height: self.board_height,
                cell_size: self.cell_size,
            });
        }
        if self.board_width % self.cell_size != 0 || self.board_height % self.cell_size != 0 {
            return Err(SettingsError::Unaligned {
                width: self.board_width,
                height: self.board_height,
                cell_size: self.cell_size,
            });
        }
        if self.min_interval_ms == 0 {
            return Err(SettingsError::ZeroMinInterval);
        }
        if self.min_interval_ms > self.max_interval_ms {
            return Err(SettingsError::IntervalBounds {
                min_ms: self.min_interval_ms,
                max_ms: self.max_interval_ms,
            });
        }
        if !(self.min_interval_ms..=self.max_interval_ms).contains(&self.tick_interval_ms) {
            return Err(SettingsError::IntervalOutOfRange {
                ms: self.tick_interval_ms,
                min_ms: self.min_interval_ms,
                max_ms: self.max_interval_ms,
            });
        }
        if self.speed_step_ms <= 0 {
            return Err(SettingsError::SpeedStep(self.speed_step_ms));
        }
        Ok(())
    }

    /// Parse JSON and validate. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Option<Self> {
        let settings: Settings = match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring unreadable settings: {e}");
                return None;
            }
        };
        if let Err(e) = settings.validate() {
            log::warn!("Ignoring invalid settings: {e}");
            return None;
        }
        Some(settings)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "bounce_snake_settings";

    /// Environment variable naming the native settings file
    pub const PATH_ENV: &'static str = "BOUNCE_SNAKE_SETTINGS";
    /// Native settings file used when the variable is unset
    pub const DEFAULT_PATH: &'static str = "bounce_snake_settings.json";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Path of the native settings file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn path() -> std::path::PathBuf {
        std::env::var_os(Self::PATH_ENV)
            .map(std::path::PathBuf::from)
            .unwrap_or_else(|| std::path::PathBuf::from(Self::DEFAULT_PATH))
    }

    /// Load settings from the native settings file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::load_from(&Self::path())
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from {}", path.display());
                    return settings;
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => log::warn!("Could not read {}: {e}", path.display()),
        }

        log::info!("Using default settings");
        Self::default()
    }
}
