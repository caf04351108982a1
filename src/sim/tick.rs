//! Fixed timestep simulation tick
//!
//! Collisions are resolved against the positions from the end of the previous
//! tick, and only then is movement applied.

use super::collision::{
    at_difficulty_threshold, fell_through, hits_paddle, hits_side_wall, hits_top_wall,
    paddle_blocked,
};
use super::state::{Board, Direction, GameEvent};

/// Advance the board by one tick, returning what happened
pub fn tick(board: &mut Board) -> Vec<GameEvent> {
    let mut events = Vec::new();

    check_collisions(board, &mut events);

    board.paddle.update();
    for ball in &mut board.balls {
        ball.update();
    }

    if board.can_increase_difficulty && at_difficulty_threshold(board.score, board.difficulty) {
        board.increase_difficulty();
        board.can_increase_difficulty = false;
        log::info!(
            "Difficulty {} at {} points ({} balls)",
            board.difficulty,
            board.score,
            board.balls.len()
        );
        events.push(GameEvent::DifficultyIncreased {
            level: board.difficulty,
        });
    }

    events
}

fn check_collisions(board: &mut Board, events: &mut Vec<GameEvent>) {
    // Edge guard: stop, don't reposition
    if paddle_blocked(&board.paddle, board.width()) {
        board.paddle.direction = Direction::Idle;
    }

    let width = board.width();
    let height = board.height();

    for index in 0..board.balls.len() {
        let ball = &mut board.balls[index];

        if hits_side_wall(ball, width) {
            ball.vel.x = -ball.vel.x;
        }

        if hits_top_wall(ball) {
            ball.vel.y = -ball.vel.y;
        }

        if hits_paddle(ball, &board.paddle) {
            ball.vel.y = -ball.vel.y;
            board.score += 1;
            board.can_increase_difficulty = true;
            log::debug!("Paddle hit by ball {index}, score {}", board.score);
            events.push(GameEvent::PaddleHit { ball: index });
        }

        if fell_through(&board.balls[index], height) {
            let final_score = board.score;
            board.reset();
            log::info!("Ball {index} fell through at {final_score} points, round reset");
            events.push(GameEvent::RoundReset { final_score });
            // Every ball was replaced; the fresh one waits for the next tick
            break;
        }
    }
}
