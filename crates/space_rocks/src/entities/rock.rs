use super::GameObject;
use crate::config::GameplayConfig;
use arcade_engine::foundation::math::{distance, rotate_degrees, Vec2};
use arcade_engine::physics::Playfield;
use rand::Rng;
use thiserror::Error;

/// Rock placement failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpawnError {
    /// No point of the playfield is far enough from the ship
    #[error("no point of the {width}x{height} playfield is more than {gap} from the ship spawn")]
    NoRoom {
        /// Playfield width
        width: f32,
        /// Playfield height
        height: f32,
        /// Required distance
        gap: f32,
    },

    /// Sampling never produced a valid point
    #[error("no rock position more than {gap} from the ship spawn after {attempts} attempts")]
    AttemptsExhausted {
        /// Samples drawn
        attempts: u32,
        /// Required distance
        gap: f32,
    },
}

/// Place a rock uniformly at random, farther than `min_start_gap` from
/// `ship_spawn`
///
/// Positions are rejection-sampled at most `spawn_attempts` times. A
/// playfield where no valid point exists fails immediately.
pub fn spawn_rock<R: Rng + ?Sized>(
    rng: &mut R,
    playfield: &Playfield,
    ship_spawn: &Vec2,
    gameplay: &GameplayConfig,
    radius: f32,
) -> Result<GameObject, SpawnError> {
    let gap = gameplay.min_start_gap;
    if playfield.farthest_corner_distance(ship_spawn) <= gap {
        return Err(SpawnError::NoRoom {
            width: playfield.width(),
            height: playfield.height(),
            gap,
        });
    }

    for attempt in 1..=gameplay.spawn_attempts {
        let position = Vec2::new(
            rng.gen_range(0.0..playfield.width()),
            rng.gen_range(0.0..playfield.height()),
        );
        if distance(&position, ship_spawn) > gap {
            log::trace!("Rock placed at ({:.1}, {:.1}) after {} attempts", position.x, position.y, attempt);
            let velocity = random_rock_velocity(rng, gameplay);
            return Ok(GameObject::rock(position, velocity, radius));
        }
    }

    log::warn!(
        "Gave up placing a rock after {} attempts (gap {})",
        gameplay.spawn_attempts,
        gap
    );
    Err(SpawnError::AttemptsExhausted {
        attempts: gameplay.spawn_attempts,
        gap,
    })
}

/// Random drift: speed in `[rock_min_speed, rock_max_speed]`, direction in
/// `[0, 360)` degrees
pub fn random_rock_velocity<R: Rng + ?Sized>(rng: &mut R, gameplay: &GameplayConfig) -> Vec2 {
    let speed = rng.gen_range(gameplay.rock_min_speed..=gameplay.rock_max_speed);
    let angle = rng.gen_range(0.0..360.0);
    rotate_degrees(&Vec2::new(speed, 0.0), angle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn field() -> Playfield {
        Playfield::new(800.0, 600.0)
    }

    #[test]
    fn test_rocks_spawn_beyond_gap() {
        let mut rng = StdRng::seed_from_u64(7);
        let gameplay = GameplayConfig::default();
        let center = field().center();

        for _ in 0..500 {
            let rock = spawn_rock(&mut rng, &field(), &center, &gameplay, 48.0).unwrap();
            assert!(distance(&rock.position, &center) > 250.0);
            assert!(field().contains(&rock.position));
        }
    }

    #[test]
    fn test_rock_speed_within_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let gameplay = GameplayConfig::default();

        for _ in 0..500 {
            let speed = random_rock_velocity(&mut rng, &gameplay).norm();
            assert!((1.0 - 1e-4..=3.0 + 1e-4).contains(&speed), "speed {speed}");
        }
    }

    #[test]
    fn test_fixed_speed_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let gameplay = GameplayConfig {
            rock_min_speed: 2.0,
            rock_max_speed: 2.0,
            ..GameplayConfig::default()
        };
        let speed = random_rock_velocity(&mut rng, &gameplay).norm();
        assert!((speed - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_impossible_gap_fails_fast() {
        let mut rng = StdRng::seed_from_u64(1);
        let small = Playfield::new(100.0, 100.0);
        let result = spawn_rock(&mut rng, &small, &small.center(), &GameplayConfig::default(), 48.0);
        assert!(matches!(result, Err(SpawnError::NoRoom { .. })));
    }

    #[test]
    fn test_attempt_budget_is_bounded() {
        let mut rng = StdRng::seed_from_u64(1);
        // Only slivers at the corners are valid, so one attempt nearly always misses
        let gameplay = GameplayConfig {
            min_start_gap: 499.9,
            spawn_attempts: 1,
            ..GameplayConfig::default()
        };
        let center = field().center();
        let failures = (0..50)
            .filter(|_| spawn_rock(&mut rng, &field(), &center, &gameplay, 48.0).is_err())
            .count();
        assert!(failures > 0);
    }
}
