//! Worm Wars entry point
//!
//! Runs a headless autopilot session: the demo pilots steer both worms and
//! the scoreboard is reported through the log. Set `RUST_LOG=debug` for
//! wraps and bonus traffic, `WORM_WARS_SETTINGS` to tune the session.

use worm_wars::demo::DemoInput;
use worm_wars::platform::SystemClock;
use worm_wars::renderer::LogRenderer;
use worm_wars::{Game, Settings};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Worm Wars (headless) starting...");

    let settings = Settings::load();
    settings.validate()?;

    let input = DemoInput::new(settings.seed, settings.demo_ticks);
    let renderer = LogRenderer::new(settings.log_every);
    let mut game = Game::new(&settings, input, renderer, SystemClock::new());

    game.run()
}
