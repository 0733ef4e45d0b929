//! Game sprite definitions
//!
//! The image files themselves are loaded by the window layer; the simulation
//! only needs each sprite's handle and width.

use crate::config::SpriteConfig;
use arcade_engine::render::SpriteHandle;
use std::path::PathBuf;

/// The sprites the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    /// Player ship, drawn rotated to its heading
    Spaceship,
    /// Rock
    Asteroid,
    /// Projectile
    Bullet,
}

impl SpriteKind {
    /// All sprites, in handle order
    pub const ALL: [Self; 3] = [Self::Spaceship, Self::Asteroid, Self::Bullet];

    /// Asset name
    pub fn name(self) -> &'static str {
        match self {
            Self::Spaceship => "spaceship",
            Self::Asteroid => "asteroid",
            Self::Bullet => "bullet",
        }
    }

    /// Image path relative to the game's asset root
    pub fn path(self) -> PathBuf {
        PathBuf::from("assets/sprites").join(format!("{}.png", self.name()))
    }

    /// Handle passed to the draw surface
    pub fn handle(self) -> SpriteHandle {
        SpriteHandle(self as u32)
    }

    /// Sprite for a handle produced by [`SpriteKind::handle`]
    pub fn from_handle(handle: SpriteHandle) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.handle() == handle)
    }
}

/// Sprite widths used to size collision circles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteCatalog {
    spaceship_width: f32,
    asteroid_width: f32,
    bullet_width: f32,
}

impl SpriteCatalog {
    /// Build the catalog from configuration
    pub fn new(config: &SpriteConfig) -> Self {
        Self {
            spaceship_width: config.spaceship_width,
            asteroid_width: config.asteroid_width,
            bullet_width: config.bullet_width,
        }
    }

    /// Sprite width in playfield units
    pub fn width(&self, kind: SpriteKind) -> f32 {
        match kind {
            SpriteKind::Spaceship => self.spaceship_width,
            SpriteKind::Asteroid => self.asteroid_width,
            SpriteKind::Bullet => self.bullet_width,
        }
    }

    /// Collision radius, half the sprite width
    pub fn radius(&self, kind: SpriteKind) -> f32 {
        self.width(kind) / 2.0
    }
}

impl Default for SpriteCatalog {
    fn default() -> Self {
        Self::new(&SpriteConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_round_trip_and_are_distinct() {
        for kind in SpriteKind::ALL {
            assert_eq!(SpriteKind::from_handle(kind.handle()), Some(kind));
        }
        assert_eq!(SpriteKind::from_handle(SpriteHandle(99)), None);
    }

    #[test]
    fn test_asset_paths() {
        assert_eq!(
            SpriteKind::Spaceship.path(),
            PathBuf::from("assets/sprites/spaceship.png")
        );
    }

    #[test]
    fn test_radius_is_half_width() {
        let catalog = SpriteCatalog::default();
        assert_eq!(catalog.radius(SpriteKind::Spaceship), 24.0);
        assert_eq!(catalog.radius(SpriteKind::Asteroid), 48.0);
        assert_eq!(catalog.radius(SpriteKind::Bullet), 4.0);
    }
}
