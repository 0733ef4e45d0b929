//! Game configuration
//!
//! Every value has a default matching the classic tuning, so a config file
//! only needs the settings it changes.

use arcade_engine::config::{Config, ConfigError};
use arcade_engine::physics::Playfield;
use arcade_engine::render::Color;
use arcade_engine::{EngineConfig, WindowConfig};
use serde::{Deserialize, Serialize};

/// Game configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Playfield size
    pub playfield: PlayfieldConfig,

    /// Gameplay tuning
    pub gameplay: GameplayConfig,

    /// Tick rate
    pub timing: TimingConfig,

    /// Sprite sizes
    pub sprites: SpriteConfig,

    /// Window presentation
    pub display: DisplayConfig,
}

/// Playfield configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayfieldConfig {
    /// Playfield width in units (one unit per pixel)
    pub width: f32,

    /// Playfield height in units
    pub height: f32,
}

/// Gameplay configuration
///
/// Speeds are in units per tick and angles in degrees per tick; there is no
/// delta-time scaling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Rocks created at world init
    pub rock_count: usize,

    /// Minimum distance between a new rock and the ship spawn point
    pub min_start_gap: f32,

    /// Slowest rock speed
    pub rock_min_speed: f32,

    /// Fastest rock speed (inclusive)
    pub rock_max_speed: f32,

    /// Ship turn per rotate command
    pub rotation_speed: f32,

    /// Velocity added per thrust command
    pub acceleration: f32,

    /// Bullet speed relative to the ship
    pub bullet_speed: f32,

    /// Placement attempts per rock before giving up
    pub spawn_attempts: u32,

    /// Seed for rock placement; a fresh random seed when unset
    pub seed: Option<u64>,
}

/// Timing configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Fixed simulation rate
    pub ticks_per_second: u32,

    /// Stop after this many ticks
    pub max_ticks: Option<u64>,
}

/// Sprite configuration
///
/// Collision radii are half the sprite widths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteConfig {
    /// Spaceship sprite width
    pub spaceship_width: f32,

    /// Asteroid sprite width
    pub asteroid_width: f32,

    /// Bullet sprite width
    pub bullet_width: f32,
}

/// Display configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Window title
    pub title: String,

    /// Background fill
    pub background: Color,
}

impl Default for PlayfieldConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            rock_count: 6,
            min_start_gap: 250.0,
            rock_min_speed: 1.0,
            rock_max_speed: 3.0,
            rotation_speed: 3.0,
            acceleration: 0.25,
            bullet_speed: 3.0,
            spawn_attempts: 1000,
            seed: None,
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: 30,
            max_ticks: None,
        }
    }
}

impl Default for SpriteConfig {
    fn default() -> Self {
        Self {
            spaceship_width: 48.0,
            asteroid_width: 96.0,
            bullet_width: 8.0,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: "Space Rocks".to_string(),
            background: Color::BLUE,
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be a positive number, got {value}"),
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: format!("must be zero or more, got {value}"),
        })
    }
}

impl Config for GameConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        positive("playfield.width", self.playfield.width)?;
        positive("playfield.height", self.playfield.height)?;

        let gameplay = &self.gameplay;
        non_negative("gameplay.min_start_gap", gameplay.min_start_gap)?;
        non_negative("gameplay.rock_min_speed", gameplay.rock_min_speed)?;
        non_negative("gameplay.rock_max_speed", gameplay.rock_max_speed)?;
        if gameplay.rock_min_speed > gameplay.rock_max_speed {
            return Err(ConfigError::Invalid {
                field: "gameplay.rock_min_speed",
                reason: format!(
                    "exceeds rock_max_speed ({} > {})",
                    gameplay.rock_min_speed, gameplay.rock_max_speed
                ),
            });
        }
        non_negative("gameplay.rotation_speed", gameplay.rotation_speed)?;
        non_negative("gameplay.acceleration", gameplay.acceleration)?;
        non_negative("gameplay.bullet_speed", gameplay.bullet_speed)?;
        if gameplay.spawn_attempts == 0 {
            return Err(ConfigError::Invalid {
                field: "gameplay.spawn_attempts",
                reason: "must be at least 1".to_string(),
            });
        }

        if self.timing.ticks_per_second == 0 {
            return Err(ConfigError::Invalid {
                field: "timing.ticks_per_second",
                reason: "must be at least 1".to_string(),
            });
        }

        positive("sprites.spaceship_width", self.sprites.spaceship_width)?;
        positive("sprites.asteroid_width", self.sprites.asteroid_width)?;
        positive("sprites.bullet_width", self.sprites.bullet_width)?;

        Ok(())
    }
}

impl GameConfig {
    /// Playfield described by this configuration
    ///
    /// # Panics
    ///
    /// Panics if the dimensions are not positive; [`Config::validate`]
    /// rejects such configurations.
    pub fn playfield(&self) -> Playfield {
        Playfield::new(self.playfield.width, self.playfield.height)
    }

    /// Engine settings for running this game
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            window: WindowConfig {
                title: self.display.title.clone(),
                width: self.playfield.width.ceil() as u32,
                height: self.playfield.height.ceil() as u32,
            },
            ticks_per_second: self.timing.ticks_per_second,
            max_ticks: self.timing.max_ticks,
            clear_color: self.display.background,
        }
    }
}
