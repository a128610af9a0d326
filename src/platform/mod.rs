//! Platform abstraction layer
//!
//! Presentation frontends around a `Session`:
//! - `terminal`: crossterm renderer and key loop (native)
//! - `web`: canvas 2D renderer driven by requestAnimationFrame (wasm32)
//!
//! Both share the key bindings below.

#[cfg(not(target_arch = "wasm32"))]
pub mod terminal;
#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::session::Session;
use crate::sim::Heading;

/// A player action, independent of where the key press came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Steer(Heading),
    SpeedUp,
    SlowDown,
    Quit,
}

impl Command {
    /// Map a key name (DOM `KeyboardEvent.key` spelling) to a command.
    ///
    /// W/A/S/D steer, the up/down arrows change speed.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "w" | "W" => Some(Command::Steer(Heading::Up)),
            "s" | "S" => Some(Command::Steer(Heading::Down)),
            "a" | "A" => Some(Command::Steer(Heading::Left)),
            "d" | "D" => Some(Command::Steer(Heading::Right)),
            "ArrowUp" => Some(Command::SpeedUp),
            "ArrowDown" => Some(Command::SlowDown),
            "Escape" | "q" | "Q" => Some(Command::Quit),
            _ => None,
        }
    }

    /// Apply to the session. Returns false for `Quit`.
    pub fn apply(self, session: &mut Session) -> bool {
        match self {
            Command::Steer(heading) => session.queue_direction(heading),
            Command::SpeedUp => {
                session.speed_up();
            }
            Command::SlowDown => {
                session.slow_down();
            }
            Command::Quit => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    #[test]
    fn test_key_bindings() {
        assert_eq!(Command::from_key("w"), Some(Command::Steer(Heading::Up)));
        assert_eq!(Command::from_key("D"), Some(Command::Steer(Heading::Right)));
        assert_eq!(Command::from_key("ArrowUp"), Some(Command::SpeedUp));
        assert_eq!(Command::from_key("ArrowDown"), Some(Command::SlowDown));
        assert_eq!(Command::from_key("ArrowLeft"), None);
        assert_eq!(Command::from_key("Escape"), Some(Command::Quit));
    }

    #[test]
    fn test_apply() {
        let settings = Settings {
            seed: Some(1),
            ..Default::default()
        };
        let mut session = Session::new(&settings);
        assert!(Command::SpeedUp.apply(&mut session));
        assert_eq!(session.interval().ms(), 60);
        assert!(Command::SlowDown.apply(&mut session));
        assert_eq!(session.interval().ms(), 100);
        assert!(Command::Steer(Heading::Down).apply(&mut session));
        assert!(!Command::Quit.apply(&mut session));
    }
}
