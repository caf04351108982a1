//! Render boundary
//!
//! Renderers receive a [`Frame`] copied out of the board after each redraw
//! request, plus the status line. They never touch the simulation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Ball, Board, Color, Paddle};

/// A filled rectangle to draw
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: Color,
}

impl Rect {
    /// Area actually filled: one pixel inset on every side
    pub fn fill_area(&self) -> (Vec2, Vec2) {
        (self.pos + Vec2::ONE, self.size - Vec2::splat(2.0))
    }
}

impl From<&Paddle> for Rect {
    fn from(paddle: &Paddle) -> Self {
        Self {
            pos: paddle.pos,
            size: paddle.size,
            color: paddle.color,
        }
    }
}

impl From<&Ball> for Rect {
    fn from(ball: &Ball) -> Self {
        Self {
            pos: ball.pos,
            size: ball.size,
            color: ball.color,
        }
    }
}

/// Read-only snapshot of everything a renderer needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub width: f32,
    pub height: f32,
    pub paddle: Rect,
    /// Same order as the board's balls
    pub balls: Vec<Rect>,
    pub score: u64,
    pub difficulty: u32,
}

impl Frame {
    pub fn capture(board: &Board) -> Self {
        Self {
            width: board.width(),
            height: board.height(),
            paddle: Rect::from(&board.paddle),
            balls: board.balls.iter().map(Rect::from).collect(),
            score: board.score,
            difficulty: board.difficulty,
        }
    }

    pub fn status_line(&self) -> String {
        status_line(self.score, self.difficulty)
    }
}

/// Text shown in the status bar
pub fn status_line(score: u64, difficulty: u32) -> String {
    format!("Points: {score} \n Difficulty: {difficulty}")
}

/// Drawing backend driven by the game loop
pub trait Renderer {
    /// Show the status text
    fn status(&mut self, line: &str);
    /// Draw one frame
    fn draw(&mut self, frame: &Frame);
}

/// Renderer that writes to the log instead of a window
#[derive(Debug, Default)]
pub struct LogRenderer {
    last_status: String,
    pub frames_drawn: u64,
}

impl Renderer for LogRenderer {
    fn status(&mut self, line: &str) {
        if line != self.last_status {
            log::info!("{}", line.replace('\n', "|"));
            self.last_status = line.to_string();
        }
    }

    fn draw(&mut self, frame: &Frame) {
        self.frames_drawn += 1;
        log::trace!(
            "frame {}: paddle at {:?} (#{:06x}), {} balls",
            self.frames_drawn,
            frame.paddle.pos,
            frame.paddle.color.to_rgb_u32(),
            frame.balls.len()
        );
    }
}
