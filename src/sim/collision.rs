//! Collision predicates for axis-aligned paddle and balls
//!
//! All checks read pre-move positions; `tick` applies movement afterwards.

use super::state::{Ball, Direction, Paddle};
use crate::consts::DIFFICULTY_THRESHOLD_BASE;

/// Paddle is pushing into a side wall and must stop this tick
pub fn paddle_blocked(paddle: &Paddle, width: f32) -> bool {
    (paddle.left() <= 0.0 && paddle.direction == Direction::Left)
        || (paddle.right() >= width && paddle.direction == Direction::Right)
}

/// Ball touches the left or right wall
pub fn hits_side_wall(ball: &Ball, width: f32) -> bool {
    ball.pos.x <= 0.0 || ball.pos.x >= width - ball.size.x
}

/// Ball touches the top wall
pub fn hits_top_wall(ball: &Ball) -> bool {
    ball.pos.y <= 0.0
}

/// Ball is crossing the paddle's top edge this tick.
///
/// The horizontal test is lopsided: the ball's left edge is
/// widened by one ball width before comparing against the paddle's right edge.
pub fn hits_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    let crossing = ball.bottom() >= paddle.top() && ball.top() < paddle.top();
    let overlapping =
        ball.right() >= paddle.left() && ball.left() - ball.size.x <= paddle.right();
    crossing && overlapping
}

/// Ball's bottom edge is past the playfield floor
pub fn fell_through(ball: &Ball, height: f32) -> bool {
    ball.bottom() > height
}

/// Score sits on a multiple of `10 * 2^difficulty`
pub fn at_difficulty_threshold(score: u64, difficulty: u32) -> bool {
    2u64.checked_pow(difficulty)
        .and_then(|step| step.checked_mul(DIFFICULTY_THRESHOLD_BASE))
        .is_some_and(|threshold| score % threshold == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Color;
    use glam::Vec2;

    fn ball_at(x: f32, y: f32) -> Ball {
        Ball::new(Vec2::new(x, y), Vec2::splat(10.0), Vec2::splat(2.0), Color::new(0, 0, 0))
    }

    fn paddle_at(x: f32, direction: Direction) -> Paddle {
        let mut paddle = Paddle::new(
            Vec2::new(x, 300.0),
            Vec2::new(100.0, 5.0),
            5.0,
            Color::new(0, 0, 0),
        );
        paddle.direction = direction;
        paddle
    }

    #[test]
    fn test_paddle_blocked_at_walls() {
        assert!(paddle_blocked(&paddle_at(0.0, Direction::Left), 600.0));
        assert!(paddle_blocked(&paddle_at(-3.0, Direction::Left), 600.0));
        assert!(!paddle_blocked(&paddle_at(0.0, Direction::Right), 600.0));
        assert!(!paddle_blocked(&paddle_at(1.0, Direction::Left), 600.0));

        assert!(paddle_blocked(&paddle_at(500.0, Direction::Right), 600.0));
        assert!(!paddle_blocked(&paddle_at(500.0, Direction::Left), 600.0));
        assert!(!paddle_blocked(&paddle_at(499.0, Direction::Right), 600.0));
        assert!(!paddle_blocked(&paddle_at(0.0, Direction::Idle), 600.0));
    }

    #[test]
    fn test_side_and_top_walls() {
        assert!(hits_side_wall(&ball_at(0.0, 100.0), 600.0));
        assert!(hits_side_wall(&ball_at(590.0, 100.0), 600.0));
        assert!(!hits_side_wall(&ball_at(589.0, 100.0), 600.0));
        assert!(hits_top_wall(&ball_at(50.0, 0.0)));
        assert!(hits_top_wall(&ball_at(50.0, -1.0)));
        assert!(!hits_top_wall(&ball_at(50.0, 1.0)));
    }

    #[test]
    fn test_paddle_crossing_window() {
        let paddle = paddle_at(15.0, Direction::Idle);
        assert!(!hits_paddle(&ball_at(50.0, 289.0), &paddle));
        assert!(hits_paddle(&ball_at(50.0, 290.0), &paddle));
        assert!(hits_paddle(&ball_at(50.0, 299.0), &paddle));
        assert!(!hits_paddle(&ball_at(50.0, 300.0), &paddle));
    }

    #[test]
    fn test_paddle_overlap_is_lopsided() {
        let paddle = paddle_at(15.0, Direction::Idle);
        // Left side: ball's right edge must reach the paddle's left edge
        assert!(hits_paddle(&ball_at(5.0, 295.0), &paddle));
        assert!(!hits_paddle(&ball_at(4.0, 295.0), &paddle));
        // Right side: accepted up to one extra ball width past the paddle
        assert!(hits_paddle(&ball_at(125.0, 295.0), &paddle));
        assert!(!hits_paddle(&ball_at(126.0, 295.0), &paddle));
    }

    #[test]
    fn test_fell_through() {
        assert!(!fell_through(&ball_at(50.0, 390.0), 400.0));
        assert!(fell_through(&ball_at(50.0, 391.0), 400.0));
    }

    #[test]
    fn test_difficulty_threshold() {
        assert!(at_difficulty_threshold(0, 1));
        assert!(!at_difficulty_threshold(10, 1));
        assert!(at_difficulty_threshold(20, 1));
        assert!(at_difficulty_threshold(40, 1));
        assert!(!at_difficulty_threshold(20, 2));
        assert!(at_difficulty_threshold(40, 2));
        assert!(!at_difficulty_threshold(1, 64));
    }
}
