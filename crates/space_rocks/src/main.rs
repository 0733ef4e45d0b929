//! Space Rocks headless runner
//!
//! Usage: `space_rocks [config.toml|config.ron]`
//!
//! Plays the game with a scripted pilot and logs each frame. Set `RUST_LOG`
//! to `debug` or `trace` to see frames and draw calls.

use arcade_engine::config::Config;
use arcade_engine::foundation::logging;
use arcade_engine::Engine;
use space_rocks::headless::{AutoPilot, LogSurface};
use space_rocks::{GameConfig, SpaceRocks};
use std::path::PathBuf;

/// Tick limit when the configuration sets none
const DEFAULT_MAX_TICKS: u64 = 600;

fn main() {
    logging::init();

    if let Err(e) = run() {
        log::error!("Space Rocks failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = GameConfig::load_or_default(config_path.as_deref())?;

    let mut engine_config = config.engine_config();
    engine_config.max_ticks = engine_config.max_ticks.or(Some(DEFAULT_MAX_TICKS));

    let mut game = SpaceRocks::new(config).stop_when_finished(true);
    let mut pilot = AutoPilot::new();
    let mut surface = LogSurface::new();

    let ticks = Engine::run(engine_config, &mut game, &mut pilot, &mut surface)?;

    if let Some(stats) = game.stats() {
        println!(
            "{} ticks: {} bullets fired, {} rocks destroyed, {} rocks left, ship {}",
            ticks,
            stats.bullets_fired,
            stats.rocks_destroyed,
            game.world().map_or(0, |world| world.rocks().len()),
            if stats.ship_collisions > 0 { "destroyed" } else { "intact" }
        );
    }
    Ok(())
}
