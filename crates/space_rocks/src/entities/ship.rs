use super::{EntityKind, GameObject};
use arcade_engine::foundation::math::{rotate_heading, UnitVec2, Vec2};

/// Sense of a ship rotation, as seen on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Turn right
    Clockwise,
    /// Turn left
    CounterClockwise,
}

impl Turn {
    fn sign(self) -> f32 {
        match self {
            Self::Clockwise => 1.0,
            Self::CounterClockwise => -1.0,
        }
    }
}

// Ship-only behavior. Rocks and bullets have no heading, so these are no-ops
// for them.
impl GameObject {
    /// Heading of a ship
    pub fn direction(&self) -> Option<UnitVec2> {
        match self.kind {
            EntityKind::Ship { direction } => Some(direction),
            EntityKind::Rock | EntityKind::Bullet => None,
        }
    }

    /// Turn the heading by `step_degrees`
    pub fn rotate(&mut self, turn: Turn, step_degrees: f32) {
        if let EntityKind::Ship { direction } = &mut self.kind {
            *direction = rotate_heading(direction, step_degrees * turn.sign());
        }
    }

    /// Add `acceleration` along the heading to the velocity
    ///
    /// Speed is not capped and there is no drag.
    pub fn accelerate(&mut self, acceleration: f32) {
        if let Some(direction) = self.direction() {
            self.velocity += direction.into_inner() * acceleration;
        }
    }

    /// Bullet leaving the ship's center along the heading
    ///
    /// The bullet inherits the ship's velocity on top of `bullet_speed`.
    pub fn fire(&self, bullet_speed: f32, bullet_radius: f32) -> Option<GameObject> {
        let direction = self.direction()?;
        let velocity: Vec2 = direction.into_inner() * bullet_speed + self.velocity;
        Some(GameObject::bullet(self.position, velocity, bullet_radius))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use arcade_engine::foundation::math::direction_up;

    fn ship() -> GameObject {
        GameObject::ship(Vec2::new(400.0, 300.0), 24.0)
    }

    #[test]
    fn test_full_turn_returns_to_start() {
        let mut ship = ship();
        for _ in 0..120 {
            ship.rotate(Turn::Clockwise, 3.0);
        }
        let direction = ship.direction().unwrap();
        assert_relative_eq!(direction.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(direction.y, -1.0, epsilon = 1e-4);
        assert_relative_eq!(direction.norm(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_clockwise_and_counter_clockwise_cancel() {
        let mut ship = ship();
        ship.rotate(Turn::Clockwise, 3.0);
        let turned = ship.direction().unwrap();
        // y-down screen: clockwise from up swings the nose towards +x
        assert!(turned.x > 0.0);

        ship.rotate(Turn::CounterClockwise, 3.0);
        let back = ship.direction().unwrap();
        assert_relative_eq!(back.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(back.y, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_accelerate_is_unbounded() {
        let mut ship = ship();
        for _ in 0..100 {
            ship.accelerate(0.25);
        }
        assert_relative_eq!(ship.velocity.x, 0.0);
        assert_relative_eq!(ship.velocity.y, -25.0, epsilon = 1e-4);
    }

    #[test]
    fn test_fire_inherits_ship_velocity() {
        let mut ship = ship();
        ship.velocity = Vec2::new(1.0, 0.5);
        let bullet = ship.fire(3.0, 4.0).unwrap();

        assert_eq!(bullet.position, ship.position);
        assert_relative_eq!(bullet.velocity.x, 1.0);
        assert_relative_eq!(bullet.velocity.y, -2.5);
        assert!(!bullet.wraps());
        assert_eq!(bullet.radius(), 4.0);
    }

    #[test]
    fn test_ship_commands_ignore_other_kinds() {
        let mut rock = GameObject::rock(Vec2::zeros(), Vec2::new(1.0, 1.0), 48.0);
        rock.rotate(Turn::Clockwise, 3.0);
        rock.accelerate(0.25);

        assert_eq!(rock.direction(), None);
        assert_eq!(rock.velocity, Vec2::new(1.0, 1.0));
        assert!(rock.fire(3.0, 4.0).is_none());
    }

    #[test]
    fn test_new_ship_heads_up_at_rest() {
        let ship = ship();
        assert_eq!(ship.direction(), Some(direction_up()));
        assert_eq!(ship.velocity, Vec2::zeros());
    }
}
