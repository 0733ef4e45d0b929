//! # Space Rocks
//!
//! A small arcade shooter: steer a ship around a wrapped playfield and shoot
//! the drifting rocks before one of them hits you.
//!
//! [`world::World`] holds the whole simulation and advances it one fixed tick
//! at a time. [`game::SpaceRocks`] plugs the world into the
//! [`arcade_engine`] main loop, and [`headless`] supplies a scripted pilot
//! and a logging surface for running without a window.

pub mod config;
pub mod entities;
pub mod game;
pub mod headless;
pub mod sprites;
pub mod world;

pub use config::GameConfig;
pub use game::SpaceRocks;
pub use world::{ShipCommands, StepReport, World, WorldError, WorldStats};
