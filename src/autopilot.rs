//! Demo controller
//!
//! Plays the game through the same key events a player would send, so the
//! headless binary exercises the full input path.

use crate::input::{Key, KeyEvent};
use crate::sim::{Ball, Board};

/// Paddle center may drift this far from the target before steering
const DEAD_ZONE: f32 = 8.0;

#[derive(Debug, Default)]
pub struct Autopilot {
    held: Option<Key>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key event to send this tick, if the held key should change
    pub fn decide(&mut self, board: &Board) -> Option<KeyEvent> {
        let wanted = most_dangerous(board).and_then(|ball| {
            let target = ball.pos.x + ball.size.x / 2.0;
            let center = board.paddle.pos.x + board.paddle.size.x / 2.0;
            if center < target - DEAD_ZONE {
                Some(Key::Right)
            } else if center > target + DEAD_ZONE {
                Some(Key::Left)
            } else {
                None
            }
        });

        if wanted == self.held {
            return None;
        }

        let event = match (wanted, self.held) {
            (Some(key), _) => KeyEvent::Pressed(key),
            (None, Some(key)) => KeyEvent::Released(key),
            (None, None) => return None,
        };
        self.held = wanted;
        Some(event)
    }
}

/// Lowest ball still above the paddle and heading down
fn most_dangerous(board: &Board) -> Option<&Ball> {
    let paddle_top = board.paddle.pos.y;
    board
        .balls
        .iter()
        .filter(|b| b.vel.y > 0.0 && b.pos.y < paddle_top)
        .max_by(|a, b| {
            a.pos
                .y
                .partial_cmp(&b.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}
