//! Board state and core simulation types
//!
//! The board owns every entity exclusively. Renderers only ever see a
//! [`Frame`](crate::render::Frame) copied out of it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Horizontal movement intent of the paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Idle,
    Left,
    Right,
}

/// Opaque RGB fill color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Draw a color from the given source (each channel in `0..255`)
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            r: rng.random_range(0..255),
            g: rng.random_range(0..255),
            b: rng.random_range(0..255),
        }
    }

    /// Packed `0xRRGGBB`
    pub fn to_rgb_u32(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }
}

/// Things that happened during a tick (for logging, audio, tests)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball at this index bounced off the paddle and scored a point
    PaddleHit { ball: usize },
    /// Difficulty rose to `level`
    DifficultyIncreased { level: u32 },
    /// A ball fell through; the round restarted
    RoundReset { final_score: u64 },
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per tick
    pub speed: f32,
    pub direction: Direction,
    pub color: Color,
    fallback_pos: Vec2,
    fallback_size: Vec2,
    fallback_speed: f32,
}

impl Paddle {
    /// Create a paddle; the given geometry becomes its fallback on reset
    pub fn new(pos: Vec2, size: Vec2, speed: f32, color: Color) -> Self {
        Self {
            pos,
            size,
            speed,
            direction: Direction::Idle,
            color,
            fallback_pos: pos,
            fallback_size: size,
            fallback_speed: speed,
        }
    }

    /// Shift horizontally by `speed` in the current direction. No clamping.
    pub fn update(&mut self) {
        match self.direction {
            Direction::Left => self.pos.x -= self.speed,
            Direction::Right => self.pos.x += self.speed,
            Direction::Idle => {}
        }
    }

    /// Restore construction geometry and pick a new color.
    ///
    /// The paddle comes back already moving left, not idle.
    pub fn reset<R: Rng>(&mut self, rng: &mut R) {
        self.pos = self.fallback_pos;
        self.size = self.fallback_size;
        self.speed = self.fallback_speed;
        self.direction = Direction::Left;
        self.color = Color::random(rng);
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }
}

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    pub color: Color,
}

impl Ball {
    pub fn new(pos: Vec2, size: Vec2, vel: Vec2, color: Color) -> Self {
        Self {
            pos,
            size,
            vel,
            color,
        }
    }

    /// Apply velocity unconditionally
    pub fn update(&mut self) {
        self.pos += self.vel;
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }
}

/// Construction values for a board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub width: f32,
    pub height: f32,
    pub paddle_pos: Vec2,
    pub paddle_size: Vec2,
    pub paddle_speed: f32,
    pub ball_spawn: Vec2,
    pub ball_size: Vec2,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::for_playfield(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT)
    }
}

impl BoardConfig {
    /// Default paddle and ball geometry on a playfield of the given size
    pub fn for_playfield(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            paddle_pos: Vec2::new(PADDLE_X, height * PADDLE_Y_FRACTION),
            paddle_size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            paddle_speed: PADDLE_SPEED,
            ball_spawn: Vec2::new(BALL_SPAWN_X, BALL_SPAWN_Y),
            ball_size: Vec2::splat(BALL_SIZE),
        }
    }
}

/// Complete simulation state: one paddle, a growing list of balls
#[derive(Debug, Clone)]
pub struct Board {
    pub config: BoardConfig,
    pub score: u64,
    /// Starts at 1 each round
    pub difficulty: u32,
    /// Armed by a paddle hit, consumed by a difficulty increase
    pub can_increase_difficulty: bool,
    pub paddle: Paddle,
    /// Stable order for rendering
    pub balls: Vec<Ball>,
    rng: Pcg32,
}

impl Board {
    /// Create a board on the default playfield
    pub fn new(seed: u64) -> Self {
        Self::with_config(BoardConfig::default(), seed)
    }

    /// Create a board with explicit geometry; `seed` drives entity colors
    pub fn with_config(config: BoardConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let paddle = Paddle::new(
            config.paddle_pos,
            config.paddle_size,
            config.paddle_speed,
            Color::random(&mut rng),
        );

        let mut board = Self {
            config,
            score: 0,
            difficulty: 1,
            can_increase_difficulty: false,
            paddle,
            balls: Vec::new(),
            rng,
        };
        board.reset();
        board
    }

    pub fn width(&self) -> f32 {
        self.config.width
    }

    pub fn height(&self) -> f32 {
        self.config.height
    }

    /// Start a fresh round: zero score, difficulty 1, a single new ball
    pub fn reset(&mut self) {
        self.can_increase_difficulty = false;
        self.score = 0;
        self.difficulty = 1;
        self.balls.clear();
        self.add_ball();
        self.paddle.reset(&mut self.rng);
    }

    /// Spawn a ball at the corner start point, faster at higher difficulty
    pub fn add_ball(&mut self) {
        let speed = 1.0 + self.difficulty as f32;
        let color = Color::random(&mut self.rng);
        self.balls.push(Ball::new(
            self.config.ball_spawn,
            self.config.ball_size,
            Vec2::splat(speed),
            color,
        ));
    }

    /// One more ball, wider and faster paddle
    pub fn increase_difficulty(&mut self) {
        self.add_ball();
        self.difficulty += 1;
        self.paddle.size.x += self.config.width * PADDLE_GROWTH_FRACTION;
        self.paddle.speed += PADDLE_SPEED_STEP;
    }
}
