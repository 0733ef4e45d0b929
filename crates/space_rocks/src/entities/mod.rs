//! Game objects
//!
//! Ships, rocks and bullets share one record type. Kind-specific state lives
//! in [`EntityKind`] and behavior dispatches on it with a `match`.

mod bullet;
mod rock;
mod ship;

pub use rock::{random_rock_velocity, spawn_rock, SpawnError};
pub use ship::Turn;

use crate::sprites::SpriteKind;
use arcade_engine::foundation::math::{direction_up, UnitVec2, Vec2};
use arcade_engine::physics::{Circle, Playfield};
use arcade_engine::render::Renderable;

/// What an entity is, plus any state only that kind carries
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntityKind {
    /// Player ship
    Ship {
        /// Unit heading
        direction: UnitVec2,
    },
    /// Drifting rock
    Rock,
    /// Projectile fired by the ship
    Bullet,
}

impl EntityKind {
    /// Whether entities of this kind re-enter from the opposite edge
    pub fn wraps(&self) -> bool {
        !matches!(self, Self::Bullet)
    }

    /// Sprite used to draw this kind
    pub fn sprite(&self) -> SpriteKind {
        match self {
            Self::Ship { .. } => SpriteKind::Spaceship,
            Self::Rock => SpriteKind::Asteroid,
            Self::Bullet => SpriteKind::Bullet,
        }
    }
}

/// A simulated object: position, velocity and a collision circle
#[derive(Debug, Clone, PartialEq)]
pub struct GameObject {
    /// Center in playfield coordinates
    pub position: Vec2,
    /// Displacement per tick
    pub velocity: Vec2,
    radius: f32,
    wraps: bool,
    kind: EntityKind,
}

impl GameObject {
    /// Create an entity
    ///
    /// # Panics
    ///
    /// Panics if `radius` is not a positive finite number.
    pub fn new(kind: EntityKind, position: Vec2, velocity: Vec2, radius: f32) -> Self {
        assert!(
            radius.is_finite() && radius > 0.0,
            "entity radius must be positive, got {radius}"
        );
        Self {
            position,
            velocity,
            radius,
            wraps: kind.wraps(),
            kind,
        }
    }

    /// A ship at rest, heading up
    pub fn ship(position: Vec2, radius: f32) -> Self {
        Self::new(
            EntityKind::Ship { direction: direction_up() },
            position,
            Vec2::zeros(),
            radius,
        )
    }

    /// A rock
    pub fn rock(position: Vec2, velocity: Vec2, radius: f32) -> Self {
        Self::new(EntityKind::Rock, position, velocity, radius)
    }

    /// Collision radius
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Whether this entity wraps around the playfield edges
    pub fn wraps(&self) -> bool {
        self.wraps
    }

    /// Entity kind
    pub fn kind(&self) -> &EntityKind {
        &self.kind
    }

    /// Collision circle at the current position
    pub fn bounds(&self) -> Circle {
        Circle::new(self.position, self.radius)
    }

    /// Advance one tick along the velocity
    ///
    /// Wrapping entities are folded back into the playfield. Others keep
    /// moving past the edges; their owner is responsible for pruning them.
    pub fn move_within(&mut self, playfield: &Playfield) {
        let next = self.position + self.velocity;
        self.position = if self.wraps { playfield.wrap(&next) } else { next };
    }

    /// Whether the two collision circles overlap (touching is not enough)
    pub fn collides_with(&self, other: &GameObject) -> bool {
        self.bounds().intersects(&other.bounds())
    }

    /// Draw view of this entity
    pub fn renderable(&self) -> Renderable {
        let facing = match self.kind {
            EntityKind::Ship { direction } => Some(direction),
            EntityKind::Rock | EntityKind::Bullet => None,
        };
        Renderable {
            sprite: self.kind.sprite().handle(),
            position: self.position,
            radius: self.radius,
            facing,
        }
    }
}
