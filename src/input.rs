//! Keyboard controls for the window runner.
//!
//! Keys are matched by physical position so the bindings do not move with the
//! keyboard layout.
//!
//! | Key | Command |
//! |-----|---------|
//! | Space | pause / resume |
//! | Escape | quit |
//! | S | save a PNG snapshot |
//! | `=` / numpad `+` | double the time scale |
//! | `-` / numpad `-` | halve the time scale |

use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Action requested by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    TogglePause,
    Exit,
    Snapshot,
    SpeedUp,
    SlowDown,
}

impl Command {
    /// Command bound to `key`, if any.
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::Space => Some(Command::TogglePause),
            KeyCode::Escape => Some(Command::Exit),
            KeyCode::KeyS => Some(Command::Snapshot),
            KeyCode::Equal | KeyCode::NumpadAdd => Some(Command::SpeedUp),
            KeyCode::Minus | KeyCode::NumpadSubtract => Some(Command::SlowDown),
            _ => None,
        }
    }

    /// Command for a winit key event; releases and auto-repeat are ignored.
    pub(crate) fn from_event(event: &KeyEvent) -> Option<Self> {
        if event.state != ElementState::Pressed || event.repeat {
            return None;
        }
        match event.physical_key {
            PhysicalKey::Code(code) => Self::from_key(code),
            PhysicalKey::Unidentified(_) => None,
        }
    }
}
