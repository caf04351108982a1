//! Fixed-interval game loop
//!
//! Owns the board and a renderer. An outer event loop feeds it key events and
//! elapsed wall time; it runs whole ticks and asks the renderer to redraw.

use std::time::Duration;

use crate::consts::{MAX_CATCH_UP_TICKS, TICK_INTERVAL_MS};
use crate::input::{Command, KeyEvent, command_for};
use crate::render::{Frame, Renderer};
use crate::sim::{Board, GameEvent, tick};

/// Game instance holding all state
pub struct GameLoop<R: Renderer> {
    board: Board,
    renderer: R,
    tick_interval: Duration,
    accumulator: Duration,
    ticks: u64,
    exit_requested: bool,
}

impl<R: Renderer> GameLoop<R> {
    pub fn new(board: Board, renderer: R) -> Self {
        Self {
            board,
            renderer,
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
            accumulator: Duration::ZERO,
            ticks: 0,
            exit_requested: false,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// Total ticks run so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn should_exit(&self) -> bool {
        self.exit_requested
    }

    pub fn frame(&self) -> Frame {
        Frame::capture(&self.board)
    }

    /// Forward a key event; returns the command it produced, if any
    pub fn handle_key(&mut self, event: KeyEvent) -> Option<Command> {
        let command = command_for(event)?;
        self.apply(command);
        Some(command)
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Steer(direction) => self.board.paddle.direction = direction,
            Command::Exit => {
                log::info!("Exit requested after {} ticks", self.ticks);
                self.exit_requested = true;
            }
        }
    }

    /// Run exactly one tick and redraw
    pub fn step(&mut self) -> Vec<GameEvent> {
        let events = self.run_tick();
        self.redraw();
        events
    }

    /// Run as many whole ticks as `elapsed` covers (capped), then redraw once
    pub fn advance(&mut self, elapsed: Duration) -> Vec<GameEvent> {
        let max_backlog = self.tick_interval * MAX_CATCH_UP_TICKS;
        self.accumulator += elapsed.min(max_backlog);

        let mut events = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= self.tick_interval && substeps < MAX_CATCH_UP_TICKS {
            events.extend(self.run_tick());
            self.accumulator -= self.tick_interval;
            substeps += 1;
        }

        if substeps > 0 {
            self.redraw();
        }
        events
    }

    fn run_tick(&mut self) -> Vec<GameEvent> {
        let line = crate::render::status_line(self.board.score, self.board.difficulty);
        self.renderer.status(&line);
        self.ticks += 1;
        tick(&mut self.board)
    }

    fn redraw(&mut self) {
        let frame = Frame::capture(&self.board);
        self.renderer.draw(&frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use crate::sim::Direction;

    #[derive(Default)]
    struct Recorder {
        statuses: Vec<String>,
        frames: Vec<Frame>,
    }

    impl Renderer for Recorder {
        fn status(&mut self, line: &str) {
            self.statuses.push(line.to_string());
        }

        fn draw(&mut self, frame: &Frame) {
            self.frames.push(frame.clone());
        }
    }

    fn game() -> GameLoop<Recorder> {
        GameLoop::new(Board::new(12345), Recorder::default())
    }

    #[test]
    fn test_keys_steer_paddle() {
        let mut game = game();
        game.handle_key(KeyEvent::Pressed(Key::Right));
        assert_eq!(game.board().paddle.direction, Direction::Right);

        game.handle_key(KeyEvent::Released(Key::Right));
        assert_eq!(game.board().paddle.direction, Direction::Idle);

        assert_eq!(game.handle_key(KeyEvent::Pressed(Key::Other)), None);
        assert_eq!(game.board().paddle.direction, Direction::Idle);
    }

    #[test]
    fn test_exit_key() {
        let mut game = game();
        assert!(!game.should_exit());
        game.handle_key(KeyEvent::Pressed(Key::Q));
        assert!(game.should_exit());
    }

    #[test]
    fn test_advance_runs_whole_ticks() {
        let mut game = game();
        game.advance(Duration::from_millis(25));
        assert_eq!(game.ticks(), 2);
        assert_eq!(game.renderer().frames.len(), 1);

        // Leftover 5 ms plus 5 ms makes one more tick
        game.advance(Duration::from_millis(5));
        assert_eq!(game.ticks(), 3);
        assert_eq!(game.renderer().frames.len(), 2);
    }

    #[test]
    fn test_advance_without_full_tick_skips_redraw() {
        let mut game = game();
        game.advance(Duration::from_millis(4));
        assert_eq!(game.ticks(), 0);
        assert!(game.renderer().frames.is_empty());
    }

    #[test]
    fn test_advance_caps_catch_up() {
        let mut game = game();
        game.advance(Duration::from_secs(5));
        assert_eq!(game.ticks(), MAX_CATCH_UP_TICKS as u64);
    }

    #[test]
    fn test_status_published_before_tick() {
        let mut game = game();
        game.step();
        assert_eq!(game.renderer().statuses, vec!["Points: 0 \n Difficulty: 1"]);
        assert_eq!(game.renderer().frames.len(), 1);
        assert_eq!(game.renderer().frames[0], game.frame());
    }
}
