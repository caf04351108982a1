//! Keyboard input handling
//!
//! Maps raw key events to commands. The only state they touch is the paddle
//! direction, read by the next tick.

use serde::{Deserialize, Serialize};

use crate::sim::Direction;

/// Keys the game distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Left,
    Right,
    H,
    L,
    Escape,
    Q,
    Other,
}

impl Key {
    /// Parse a key name as reported by a windowing layer
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowLeft" | "Left" => Key::Left,
            "ArrowRight" | "Right" => Key::Right,
            "h" | "H" => Key::H,
            "l" | "L" => Key::L,
            "Escape" | "Esc" => Key::Escape,
            "q" | "Q" => Key::Q,
            _ => Key::Other,
        }
    }
}

/// A key transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyEvent {
    Pressed(Key),
    Released(Key),
}

/// What the game loop should do in response to input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Set the paddle direction
    Steer(Direction),
    /// Terminate the process
    Exit,
}

/// Translate a key event. Any release stops the paddle.
pub fn command_for(event: KeyEvent) -> Option<Command> {
    match event {
        KeyEvent::Pressed(Key::Escape | Key::Q) => Some(Command::Exit),
        KeyEvent::Pressed(Key::Left | Key::H) => Some(Command::Steer(Direction::Left)),
        KeyEvent::Pressed(Key::Right | Key::L) => Some(Command::Steer(Direction::Right)),
        KeyEvent::Pressed(Key::Other) => None,
        KeyEvent::Released(_) => Some(Command::Steer(Direction::Idle)),
    }
}
