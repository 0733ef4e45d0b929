//! Playfield bounds and toroidal wrap-around

use crate::foundation::math::{distance, Vec2};

/// The rectangular simulation area `[0, width) x [0, height)`
///
/// Wrapping entities treat the playfield as a torus: leaving one edge
/// re-enters at the opposite edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    width: f32,
    height: f32,
}

impl Playfield {
    /// Create a playfield of the given size
    ///
    /// # Panics
    ///
    /// Panics if either dimension is not a positive finite number.
    pub fn new(width: f32, height: f32) -> Self {
        assert!(
            width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0,
            "playfield dimensions must be positive, got {width}x{height}"
        );
        Self { width, height }
    }

    /// Playfield width
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Playfield height
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Center of the playfield
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether a point lies inside the half-open rectangle
    pub fn contains(&self, point: &Vec2) -> bool {
        (0.0..self.width).contains(&point.x) && (0.0..self.height).contains(&point.y)
    }

    /// Map a point back into the playfield, each axis modulo its dimension
    pub fn wrap(&self, point: &Vec2) -> Vec2 {
        Vec2::new(wrap_axis(point.x, self.width), wrap_axis(point.y, self.height))
    }

    /// Distance from `point` to the farthest corner of the playfield
    ///
    /// No point of the playfield is farther from `point` than this, which
    /// makes it a cheap feasibility bound for "spawn at least N away" checks.
    pub fn farthest_corner_distance(&self, point: &Vec2) -> f32 {
        [
            Vec2::new(0.0, 0.0),
            Vec2::new(self.width, 0.0),
            Vec2::new(0.0, self.height),
            Vec2::new(self.width, self.height),
        ]
        .iter()
        .map(|corner| distance(point, corner))
        .fold(0.0, f32::max)
    }
}

fn wrap_axis(value: f32, extent: f32) -> f32 {
    let wrapped = value.rem_euclid(extent);
    // rem_euclid rounds tiny negative inputs up to `extent` itself
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn field() -> Playfield {
        Playfield::new(800.0, 600.0)
    }

    #[test]
    fn test_wrap_inside_is_identity() {
        let p = Vec2::new(123.5, 456.25);
        assert_eq!(field().wrap(&p), p);
    }

    #[test]
    fn test_wrap_positive_overshoot() {
        let wrapped = field().wrap(&Vec2::new(805.0, 601.0));
        assert_relative_eq!(wrapped.x, 5.0);
        assert_relative_eq!(wrapped.y, 1.0);
    }

    #[test]
    fn test_wrap_negative_overshoot() {
        let wrapped = field().wrap(&Vec2::new(-3.0, -1.5));
        assert_relative_eq!(wrapped.x, 797.0);
        assert_relative_eq!(wrapped.y, 598.5);
    }

    #[test]
    fn test_wrap_exact_edge() {
        let wrapped = field().wrap(&Vec2::new(800.0, 600.0));
        assert_eq!(wrapped, Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_wrap_tiny_negative_stays_in_range() {
        let wrapped = field().wrap(&Vec2::new(-1e-9, -1e-9));
        assert!(wrapped.x >= 0.0 && wrapped.x < 800.0);
        assert!(wrapped.y >= 0.0 && wrapped.y < 600.0);
    }

    #[test]
    fn test_wrap_range_and_congruence() {
        let playfield = field();
        let samples = [-2405.5_f32, -800.0, -1.0, 0.0, 0.5, 799.9, 800.0, 1234.0, 5000.25];
        for &x in &samples {
            for &y in &samples {
                let wrapped = playfield.wrap(&Vec2::new(x, y));
                assert!((0.0..800.0).contains(&wrapped.x), "x={x} wrapped to {}", wrapped.x);
                assert!((0.0..600.0).contains(&wrapped.y), "y={y} wrapped to {}", wrapped.y);

                let kx = (x - wrapped.x) / 800.0;
                let ky = (y - wrapped.y) / 600.0;
                assert_relative_eq!(kx, kx.round(), epsilon = 1e-4);
                assert_relative_eq!(ky, ky.round(), epsilon = 1e-4);
            }
        }
    }

    #[test]
    fn test_contains_half_open() {
        let playfield = field();
        assert!(playfield.contains(&Vec2::new(0.0, 0.0)));
        assert!(playfield.contains(&Vec2::new(799.0, 300.0)));
        assert!(!playfield.contains(&Vec2::new(800.0, 300.0)));
        assert!(!playfield.contains(&Vec2::new(805.0, 300.0)));
        assert!(!playfield.contains(&Vec2::new(10.0, -0.1)));
    }

    #[test]
    fn test_farthest_corner_distance_from_center() {
        let playfield = field();
        assert_relative_eq!(playfield.farthest_corner_distance(&playfield.center()), 500.0);
    }

    #[test]
    #[should_panic(expected = "playfield dimensions must be positive")]
    fn test_zero_width_panics() {
        let _ = Playfield::new(0.0, 600.0);
    }
}
