//! Pong entry point
//!
//! Headless native runner: the autopilot plays through the keyboard path in
//! real time while the log renderer reports the status line.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use pong::autopilot::Autopilot;
use pong::input::Command;
use pong::render::LogRenderer;
use pong::sim::Board;
use pong::GameLoop;

/// Demo length in ticks (one minute at the fixed interval)
const DEMO_TICKS: u64 = 6000;

fn main() {
    env_logger::init();
    log::info!("Pong (native) starting...");
    log::info!("No window backend; running autopilot demo for {DEMO_TICKS} ticks");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    log::debug!("Seed {seed}");

    let mut game = GameLoop::new(Board::new(seed), LogRenderer::default());
    let mut pilot = Autopilot::new();
    let mut best_score = 0;
    let mut last_time = Instant::now();

    while !game.should_exit() {
        std::thread::sleep(game.tick_interval());

        if let Some(event) = pilot.decide(game.board()) {
            game.handle_key(event);
        }

        let now = Instant::now();
        game.advance(now.duration_since(last_time));
        last_time = now;

        best_score = best_score.max(game.board().score);
        if game.ticks() >= DEMO_TICKS {
            game.apply(Command::Exit);
        }
    }

    log::info!(
        "Demo finished: best score {best_score}, {} frames drawn",
        game.renderer().frames_drawn
    );

    match serde_json::to_string_pretty(&game.frame()) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("Failed to serialize final frame: {e}"),
    }
}
