//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only (entity colors)
//! - Stable ball order
//! - No rendering, windowing or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{
    at_difficulty_threshold, fell_through, hits_paddle, hits_side_wall, hits_top_wall,
    paddle_blocked,
};
pub use state::{Ball, Board, BoardConfig, Color, Direction, GameEvent, Paddle};
pub use tick::tick;
