//! Core engine implementation

use crate::{
    application::{AppEvent, Application, EventSource},
    config::ConfigError,
    foundation::time::{FrameLimiter, Timer},
    input::{Controls, InputManager},
    render::{Color, DrawSurface},
};
use thiserror::Error;

/// Main engine struct
///
/// The engine owns the input state and frame pacing and drives the
/// input, update, draw sequence once per tick on the calling thread.
pub struct Engine {
    /// Input handling system
    pub input: InputManager,

    /// Frame timing
    timer: Timer,

    /// Fixed-rate pacing
    limiter: FrameLimiter,

    /// Engine configuration
    config: EngineConfig,

    /// Ticks completed so far
    ticks: u64,

    /// Whether the engine should continue running
    running: bool,
}

impl Engine {
    /// Create a new engine instance
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        log::info!(
            "Initializing engine for '{}' ({}x{}) at {} ticks/s",
            config.window.title,
            config.window.width,
            config.window.height,
            config.ticks_per_second
        );

        if config.window.width == 0 || config.window.height == 0 {
            return Err(EngineError::InitializationFailed(format!(
                "window size must be positive, got {}x{}",
                config.window.width, config.window.height
            )));
        }

        Ok(Self {
            input: InputManager::new(),
            timer: Timer::new(),
            limiter: FrameLimiter::new(config.ticks_per_second),
            config,
            ticks: 0,
            running: true,
        })
    }

    /// Run the engine main loop with the given application
    ///
    /// Each iteration polls `events`, snapshots input, updates `app`, and
    /// draws it onto `surface`, then sleeps out the rest of the tick. The
    /// loop ends on a quit control, when the application calls
    /// [`Engine::quit`], or after `max_ticks`. Returns the number of ticks
    /// completed.
    pub fn run<A, E, S>(
        config: EngineConfig,
        app: &mut A,
        events: &mut E,
        surface: &mut S,
    ) -> Result<u64, EngineError>
    where
        A: Application,
        E: EventSource,
        S: DrawSurface,
    {
        let mut engine = Self::new(config)?;

        // Initialize application
        app.initialize(&mut engine)
            .map_err(|e| EngineError::ApplicationError(format!("App initialization: {}", e)))?;

        log::info!("Starting main loop...");

        while engine.running {
            for event in events.poll_events() {
                engine.handle_event(event);
            }

            let controls = engine.input.snapshot();
            if controls.contains(Controls::QUIT) {
                engine.quit();
                break;
            }

            // Update application
            app.update(&mut engine, controls)
                .map_err(|e| EngineError::ApplicationError(format!("App update: {}", e)))?;

            // Render
            surface.clear(engine.config.clear_color);
            app.render(surface)
                .map_err(|e| EngineError::ApplicationError(format!("App render: {}", e)))?;
            surface.present()?;

            engine.ticks += 1;
            if engine.config.max_ticks.is_some_and(|max| engine.ticks >= max) {
                log::info!("Tick limit of {} reached", engine.ticks);
                engine.quit();
            }

            engine.limiter.wait();
            engine.timer.update();
        }

        // Cleanup
        app.cleanup(&mut engine);

        log::info!(
            "Engine shutdown complete after {} ticks ({:.1} ticks/s)",
            engine.ticks,
            engine.timer.average_fps()
        );
        Ok(engine.ticks)
    }

    /// Handle an application event
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::WindowCloseRequested => {
                self.input.request_quit();
            }
            AppEvent::KeyInput { key, pressed } => {
                self.input.handle_key_input(key, pressed);
            }
            AppEvent::Focus(false) => {
                // Key-up events are lost while unfocused
                self.input.release_all();
            }
            AppEvent::Focus(true) => {}
        }
    }

    /// Request engine shutdown
    ///
    /// The current tick still finishes drawing.
    pub fn quit(&mut self) {
        if self.running {
            log::info!("Engine shutdown requested");
        }
        self.running = false;
    }

    /// Whether the main loop will run another tick
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Ticks completed so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Get the input manager
    pub fn input(&self) -> &InputManager {
        &self.input
    }
}

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Window configuration
    pub window: WindowConfig,

    /// Fixed simulation rate
    pub ticks_per_second: u32,

    /// Stop after this many ticks (headless runs)
    pub max_ticks: Option<u64>,

    /// Color the surface is cleared to each frame
    pub clear_color: Color,
}

/// Window configuration
#[derive(Debug, Clone)]
pub struct WindowConfig {
    /// Window title
    pub title: String,

    /// Window width
    pub width: u32,

    /// Window height
    pub height: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig {
                title: "Arcade Engine Application".to_string(),
                width: 800,
                height: 600,
            },
            ticks_per_second: 30,
            max_ticks: None,
            clear_color: Color::BLACK,
        }
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Initialization error
    #[error("Engine initialization failed: {0}")]
    InitializationFailed(String),

    /// Application error
    #[error("Application error: {0}")]
    ApplicationError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),
}
