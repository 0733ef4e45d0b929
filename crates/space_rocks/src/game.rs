//! The game as an engine [`Application`]

use crate::config::GameConfig;
use crate::world::{ShipCommands, World, WorldStats};
use arcade_engine::input::Controls;
use arcade_engine::render::DrawSurface;
use arcade_engine::{AppError, Application, Engine};

/// Space Rocks: translates input into ship commands, steps the world and
/// draws it
pub struct SpaceRocks {
    config: GameConfig,
    world: Option<World>,
    stop_when_finished: bool,
}

impl SpaceRocks {
    /// Create the game; the world is built in [`Application::initialize`]
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            world: None,
            stop_when_finished: false,
        }
    }

    /// Ask the engine to stop once the ship is gone or every rock is
    /// destroyed
    ///
    /// Without this the loop keeps running (rocks keep drifting) until quit.
    pub fn stop_when_finished(mut self, stop: bool) -> Self {
        self.stop_when_finished = stop;
        self
    }

    /// The world, once initialized
    pub fn world(&self) -> Option<&World> {
        self.world.as_ref()
    }

    /// Running totals, once initialized
    pub fn stats(&self) -> Option<&WorldStats> {
        self.world.as_ref().map(World::stats)
    }

    fn initialized_world(&self) -> Result<&World, AppError> {
        self.world
            .as_ref()
            .ok_or_else(|| AppError::GameLogic("world used before initialize".to_string()))
    }

    fn initialized_world_mut(&mut self) -> Result<&mut World, AppError> {
        self.world
            .as_mut()
            .ok_or_else(|| AppError::GameLogic("world used before initialize".to_string()))
    }
}

impl Application for SpaceRocks {
    fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
        self.world = Some(World::new(&self.config)?);
        Ok(())
    }

    fn update(&mut self, engine: &mut Engine, controls: Controls) -> Result<(), AppError> {
        let stop_when_finished = self.stop_when_finished;
        let world = self.initialized_world_mut()?;
        let report = world.step(ShipCommands::from(controls));

        if report.ship_destroyed {
            log::info!("Game over: the ship was hit after {} ticks", world.stats().ticks);
        }
        if report.rocks_destroyed > 0 && world.is_cleared() {
            log::info!("Field cleared after {} ticks", world.stats().ticks);
        }

        if stop_when_finished && (world.is_game_over() || world.is_cleared()) {
            engine.quit();
        }
        Ok(())
    }

    fn render(&mut self, surface: &mut dyn DrawSurface) -> Result<(), AppError> {
        let world = self.initialized_world()?;
        for item in world.renderables() {
            surface.draw(&item);
        }
        Ok(())
    }

    fn cleanup(&mut self, _engine: &mut Engine) {
        if let Some(stats) = self.stats() {
            log::info!(
                "Session over: {} ticks, {} bullets fired, {} rocks destroyed, ship {}",
                stats.ticks,
                stats.bullets_fired,
                stats.rocks_destroyed,
                if stats.ship_collisions > 0 { "destroyed" } else { "intact" }
            );
        }
    }
}
