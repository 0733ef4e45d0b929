//! Application trait and lifecycle management

use crate::config::ConfigError;
use crate::engine::{Engine, EngineError};
use crate::input::{Controls, KeyCode};
use crate::render::DrawSurface;
use thiserror::Error;

/// Application lifecycle trait
///
/// Implement this trait to create your game using the engine. The engine
/// calls `update` then `render` once per tick.
pub trait Application {
    /// Initialize the application
    ///
    /// Called once before the first tick. Use this to set up your initial
    /// game state.
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError>;

    /// Advance the application by one fixed tick
    ///
    /// # Arguments
    /// * `engine` - Mutable reference to the engine, e.g. to request shutdown
    /// * `controls` - This tick's input snapshot
    fn update(&mut self, engine: &mut Engine, controls: Controls) -> Result<(), AppError>;

    /// Draw the current state
    ///
    /// The surface has already been cleared when this is called.
    fn render(&mut self, surface: &mut dyn DrawSurface) -> Result<(), AppError>;

    /// Cleanup the application
    ///
    /// Called once after the loop exits.
    fn cleanup(&mut self, engine: &mut Engine);
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Engine error propagated to application level
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Game logic error
    #[error("Game logic error: {0}")]
    GameLogic(String),
}

/// Events delivered by the window layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppEvent {
    /// Window close requested
    WindowCloseRequested,

    /// Key input event
    KeyInput {
        /// The key that was pressed/released
        key: KeyCode,
        /// Whether the key was pressed (true) or released (false)
        pressed: bool,
    },

    /// Window gained or lost focus
    Focus(bool),
}

/// Source of window events, polled once per tick
pub trait EventSource {
    /// Drain all events that arrived since the last poll
    fn poll_events(&mut self) -> Vec<AppEvent>;
}
