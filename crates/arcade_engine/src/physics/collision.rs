//! Circle collision primitive
//!
//! Every arcade entity collides as a circle centred on its position.

use crate::foundation::math::{distance, Vec2};

/// A bounding circle for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// The center position of the circle in playfield space
    pub center: Vec2,
    /// The radius of the circle
    pub radius: f32,
}

impl Circle {
    /// Creates a new circle with the given center and radius
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Check if this circle overlaps another
    ///
    /// Circles that merely touch do not count: the distance between centers
    /// must be strictly less than the sum of the radii.
    pub fn intersects(&self, other: &Circle) -> bool {
        distance(&self.center, &other.center) < self.radius + other.radius
    }
}
