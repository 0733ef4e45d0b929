//! Math utilities and types
//!
//! Provides the 2D vector types used by the arcade simulation. Screen space is
//! y-down, so a positive rotation angle turns a vector clockwise on screen.

pub use nalgebra::{Rotation2, Unit, Vector2};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Unit-length 2D vector, used for headings
pub type UnitVec2 = Unit<Vec2>;

/// Heading that points towards the top of the screen
pub fn direction_up() -> UnitVec2 {
    Unit::new_unchecked(Vec2::new(0.0, -1.0))
}

/// Rotate a vector by an angle given in degrees
pub fn rotate_degrees(vector: &Vec2, degrees: f32) -> Vec2 {
    Rotation2::new(utils::deg_to_rad(degrees)) * vector
}

/// Rotate a heading by an angle given in degrees, keeping it unit length
pub fn rotate_heading(heading: &UnitVec2, degrees: f32) -> UnitVec2 {
    Unit::new_normalize(rotate_degrees(heading.as_ref(), degrees))
}

/// Signed angle in degrees that takes `from` onto `to`
///
/// Computed as the difference of the two polar angles, so the result lies in
/// `(-360, 360)`.
pub fn angle_to(from: &Vec2, to: &Vec2) -> f32 {
    utils::rad_to_deg(to.y.atan2(to.x) - from.y.atan2(from.x))
}

/// Euclidean distance between two points
pub fn distance(a: &Vec2, b: &Vec2) -> f32 {
    (a - b).norm()
}

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;

    /// Radians to degrees conversion factor
    pub const RAD_TO_DEG: f32 = 180.0 / PI;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }

    /// Convert radians to degrees
    pub fn rad_to_deg(radians: f32) -> f32 {
        radians * constants::RAD_TO_DEG
    }
}
