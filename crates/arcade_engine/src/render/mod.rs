//! Rendering boundary
//!
//! The engine never touches pixels. Simulations expose read-only
//! [`Renderable`] views and a [`DrawSurface`] implementation supplied by the
//! window layer does the blitting, including rotating sprite imagery to match
//! a facing direction.

use crate::engine::EngineError;
use crate::foundation::math::{angle_to, direction_up, UnitVec2, Vec2};
use serde::{Deserialize, Serialize};

/// Opaque sprite identifier understood by the draw surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteHandle(pub u32);

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Opaque blue
    pub const BLUE: Self = Self::rgb(0, 0, 255);

    /// Black
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Create a color from its channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Read-only draw view of one live entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Renderable {
    /// Sprite to draw
    pub sprite: SpriteHandle,
    /// Center of the entity in playfield space
    pub position: Vec2,
    /// Collision radius, half the sprite width
    pub radius: f32,
    /// Heading for entities drawn rotated
    pub facing: Option<UnitVec2>,
}

impl Renderable {
    /// Top-left blit origin for an unrotated sprite
    ///
    /// Rotated sprites have a larger bounding box than the art, so surfaces
    /// place them by [`Renderable::position`] instead.
    pub fn top_left(&self) -> Vec2 {
        self.position - Vec2::new(self.radius, self.radius)
    }

    /// Rotation in degrees to apply to upward-drawn sprite art
    ///
    /// This is the signed angle from the heading back to "up", the value a
    /// rotate-and-zoom blitter expects. `None` for entities drawn unrotated.
    pub fn facing_angle(&self) -> Option<f32> {
        self.facing.map(|facing| angle_to(&facing, &direction_up()))
    }
}

/// Pixel output supplied by the window layer
pub trait DrawSurface {
    /// Fill the whole surface with one color
    fn clear(&mut self, color: Color);

    /// Draw one entity
    fn draw(&mut self, item: &Renderable);

    /// Show the finished frame
    fn present(&mut self) -> Result<(), EngineError>;
}
