//! Pong - A single-player paddle and ball arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, scoring, difficulty)
//! - `input`: Keyboard boundary (keys to paddle commands)
//! - `render`: Render boundary (read-only frame snapshots, status line)
//! - `driver`: Fixed-interval game loop
//! - `autopilot`: Demo controller for headless runs

pub mod autopilot;
pub mod driver;
pub mod input;
pub mod render;
pub mod sim;

pub use driver::GameLoop;
pub use render::{Frame, Renderer};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (default window size)
    pub const PLAYFIELD_WIDTH: f32 = 600.0;
    pub const PLAYFIELD_HEIGHT: f32 = 400.0;

    /// Fixed tick interval in milliseconds
    pub const TICK_INTERVAL_MS: u64 = 10;
    /// Maximum ticks run per frame to prevent spiral of death
    pub const MAX_CATCH_UP_TICKS: u32 = 8;

    /// Paddle defaults - sits at three quarters of the playfield height
    pub const PADDLE_X: f32 = 15.0;
    pub const PADDLE_Y_FRACTION: f32 = 0.75;
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 5.0;
    pub const PADDLE_SPEED: f32 = 5.0;

    /// Ball spawn point, near the top-left corner
    pub const BALL_SPAWN_X: f32 = 5.0;
    pub const BALL_SPAWN_Y: f32 = 50.0;
    pub const BALL_SIZE: f32 = 10.0;

    /// Paddle width gained per difficulty level, as a fraction of playfield width
    pub const PADDLE_GROWTH_FRACTION: f32 = 0.08;
    /// Paddle speed gained per difficulty level
    pub const PADDLE_SPEED_STEP: f32 = 1.0;
    /// Score threshold base: difficulty rises at multiples of `base * 2^difficulty`
    pub const DIFFICULTY_THRESHOLD_BASE: u64 = 10;
}
