//! # Arcade Engine
//!
//! Fixed-step plumbing for small 2D arcade games.
//!
//! ## Features
//!
//! - **Wrapped playfields**: toroidal wrap-around and half-open bounds checks
//! - **Circle collision**: strict-overlap circle tests
//! - **Input tracking**: key state folded into per-tick control snapshots
//! - **Paced main loop**: input, update and draw phases at a fixed tick rate
//!
//! Windowing and pixel work stay outside the engine, behind the
//! [`EventSource`] and [`render::DrawSurface`] traits.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use arcade_engine::prelude::*;
//!
//! struct MyApp;
//!
//! impl Application for MyApp {
//!     fn initialize(&mut self, _engine: &mut Engine) -> Result<(), AppError> {
//!         Ok(())
//!     }
//!
//!     fn update(&mut self, _engine: &mut Engine, _controls: Controls) -> Result<(), AppError> {
//!         Ok(())
//!     }
//!
//!     fn render(&mut self, _surface: &mut dyn DrawSurface) -> Result<(), AppError> {
//!         Ok(())
//!     }
//!
//!     fn cleanup(&mut self, _engine: &mut Engine) {}
//! }
//! ```

pub mod foundation;
pub mod config;
pub mod input;
pub mod physics;
pub mod render;

mod application;
mod engine;

pub use application::{AppError, AppEvent, Application, EventSource};
pub use engine::{Engine, EngineConfig, EngineError, WindowConfig};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        AppError, AppEvent, Application, EventSource,
        Engine, EngineConfig, EngineError, WindowConfig,
        config::{Config, ConfigError},
        foundation::{
            math::{Vec2, UnitVec2},
            time::{FrameLimiter, Timer},
        },
        input::{Controls, InputManager, KeyCode},
        physics::{Circle, Playfield},
        render::{Color, DrawSurface, Renderable, SpriteHandle},
    };
}
