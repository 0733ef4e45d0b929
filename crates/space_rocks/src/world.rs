//! World state and the per-tick simulation step

use crate::config::{GameConfig, GameplayConfig};
use crate::entities::{spawn_rock, EntityKind, GameObject, SpawnError, Turn};
use crate::sprites::{SpriteCatalog, SpriteKind};
use arcade_engine::config::{Config, ConfigError};
use arcade_engine::input::Controls;
use arcade_engine::physics::Playfield;
use arcade_engine::render::Renderable;
use arcade_engine::AppError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

/// World construction errors
#[derive(Error, Debug)]
pub enum WorldError {
    /// The configuration failed validation
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// A rock could not be placed
    #[error("rock placement failed: {0}")]
    Spawn(#[from] SpawnError),
}

impl From<WorldError> for AppError {
    fn from(error: WorldError) -> Self {
        match error {
            WorldError::Config(e) => Self::Config(e),
            WorldError::Spawn(e) => Self::GameLogic(format!("rock placement failed: {e}")),
        }
    }
}

/// Ship intents for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShipCommands {
    /// Rotation to apply, if any
    pub turn: Option<Turn>,
    /// Apply thrust
    pub thrust: bool,
    /// Fire one bullet
    pub fire: bool,
}

impl From<Controls> for ShipCommands {
    fn from(controls: Controls) -> Self {
        // Right wins when both rotation keys are held
        let turn = if controls.contains(Controls::ROTATE_RIGHT) {
            Some(Turn::Clockwise)
        } else if controls.contains(Controls::ROTATE_LEFT) {
            Some(Turn::CounterClockwise)
        } else {
            None
        };
        Self {
            turn,
            thrust: controls.contains(Controls::THRUST),
            fire: controls.contains(Controls::FIRE),
        }
    }
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Bullets spawned by the fire command
    pub bullets_fired: usize,
    /// Bullets removed for leaving the playfield
    pub bullets_pruned: usize,
    /// Rocks destroyed by bullets
    pub rocks_destroyed: usize,
    /// The ship was destroyed this tick
    pub ship_destroyed: bool,
}

/// Running totals since the world was created
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorldStats {
    /// Completed steps
    pub ticks: u64,
    /// Bullets spawned
    pub bullets_fired: u64,
    /// Bullets removed at the playfield edge
    pub bullets_pruned: u64,
    /// Rocks destroyed
    pub rocks_destroyed: u64,
    /// Rock-ship collisions (0 or 1, the ship does not respawn)
    pub ship_collisions: u64,
}

/// The simulation: one optional ship, rocks and bullets on a wrapped
/// playfield
///
/// The world owns every entity. Removal during a step is done in two
/// phases, marking first and compacting afterwards.
#[derive(Debug, Clone)]
pub struct World {
    playfield: Playfield,
    gameplay: GameplayConfig,
    sprites: SpriteCatalog,
    ship: Option<GameObject>,
    rocks: Vec<GameObject>,
    bullets: Vec<GameObject>,
    stats: WorldStats,
}

impl World {
    /// Create a world with the configured number of rocks
    ///
    /// Rock placement is reproducible when `gameplay.seed` is set.
    pub fn new(config: &GameConfig) -> Result<Self, WorldError> {
        match config.gameplay.seed {
            Some(seed) => Self::with_rng(config, &mut StdRng::seed_from_u64(seed)),
            None => Self::with_rng(config, &mut rand::thread_rng()),
        }
    }

    /// Create a world, drawing rock placement from `rng`
    pub fn with_rng<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self, WorldError> {
        let mut world = Self::empty(config)?;
        let ship_spawn = world.playfield.center();
        let radius = world.sprites.radius(SpriteKind::Asteroid);

        for _ in 0..config.gameplay.rock_count {
            let rock = spawn_rock(rng, &world.playfield, &ship_spawn, &world.gameplay, radius)?;
            world.rocks.push(rock);
        }

        log::info!(
            "World created: {} rocks on a {}x{} playfield",
            world.rocks.len(),
            world.playfield.width(),
            world.playfield.height()
        );
        Ok(world)
    }

    /// Create a world with the ship at the center and no rocks
    pub fn empty(config: &GameConfig) -> Result<Self, WorldError> {
        config.validate()?;
        let playfield = config.playfield();
        let sprites = SpriteCatalog::new(&config.sprites);
        let ship = GameObject::ship(playfield.center(), sprites.radius(SpriteKind::Spaceship));

        Ok(Self {
            playfield,
            gameplay: config.gameplay.clone(),
            sprites,
            ship: Some(ship),
            rocks: Vec::new(),
            bullets: Vec::new(),
            stats: WorldStats::default(),
        })
    }

    /// Add a rock
    pub fn add_rock(&mut self, rock: GameObject) {
        debug_assert!(matches!(rock.kind(), EntityKind::Rock));
        self.rocks.push(rock);
    }

    /// Add a bullet
    pub fn add_bullet(&mut self, bullet: GameObject) {
        debug_assert!(matches!(bullet.kind(), EntityKind::Bullet));
        self.bullets.push(bullet);
    }

    /// The playfield
    pub fn playfield(&self) -> &Playfield {
        &self.playfield
    }

    /// The sprite catalog entity sizes come from
    pub fn sprites(&self) -> &SpriteCatalog {
        &self.sprites
    }

    /// The ship, `None` once destroyed
    pub fn ship(&self) -> Option<&GameObject> {
        self.ship.as_ref()
    }

    /// Mutable access to the ship
    pub fn ship_mut(&mut self) -> Option<&mut GameObject> {
        self.ship.as_mut()
    }

    /// Live rocks
    pub fn rocks(&self) -> &[GameObject] {
        &self.rocks
    }

    /// Live bullets
    pub fn bullets(&self) -> &[GameObject] {
        &self.bullets
    }

    /// Running totals
    pub fn stats(&self) -> &WorldStats {
        &self.stats
    }

    /// The ship has been destroyed
    pub fn is_game_over(&self) -> bool {
        self.ship.is_none()
    }

    /// Every rock has been destroyed
    pub fn is_cleared(&self) -> bool {
        self.rocks.is_empty()
    }

    /// Every live entity, rocks first, then bullets, then the ship
    pub fn game_objects(&self) -> impl Iterator<Item = &GameObject> + '_ {
        self.rocks.iter().chain(&self.bullets).chain(self.ship.as_ref())
    }

    /// Draw views of every live entity, in draw order
    pub fn renderables(&self) -> impl Iterator<Item = Renderable> + '_ {
        self.game_objects().map(GameObject::renderable)
    }

    /// Fire one bullet from the ship
    ///
    /// Returns `false` when there is no ship to fire from.
    pub fn shoot(&mut self) -> bool {
        let radius = self.sprites.radius(SpriteKind::Bullet);
        let bullet = self
            .ship
            .as_ref()
            .and_then(|ship| ship.fire(self.gameplay.bullet_speed, radius));

        match bullet {
            Some(bullet) => {
                self.bullets.push(bullet);
                self.stats.bullets_fired += 1;
                true
            }
            None => false,
        }
    }

    /// Advance the simulation by one tick
    ///
    /// In order: apply ship commands, move everything, drop bullets that
    /// left the playfield, resolve bullet-rock hits, then resolve rock-ship
    /// hits. A rock shot this tick can therefore no longer destroy the ship.
    pub fn step(&mut self, commands: ShipCommands) -> StepReport {
        let mut report = StepReport {
            bullets_fired: self.apply_commands(commands),
            ..StepReport::default()
        };

        self.move_entities();
        report.bullets_pruned = self.prune_bullets();
        report.rocks_destroyed = self.resolve_bullet_hits();
        report.ship_destroyed = self.resolve_ship_hit();

        self.stats.ticks += 1;
        self.stats.bullets_pruned += report.bullets_pruned as u64;
        self.stats.rocks_destroyed += report.rocks_destroyed as u64;
        self.stats.ship_collisions += u64::from(report.ship_destroyed);

        log::trace!(
            "Tick {}: {} rocks, {} bullets, ship {}",
            self.stats.ticks,
            self.rocks.len(),
            self.bullets.len(),
            if self.ship.is_some() { "alive" } else { "gone" }
        );
        report
    }

    /// Returns the number of bullets fired
    fn apply_commands(&mut self, commands: ShipCommands) -> usize {
        let Some(ship) = self.ship.as_mut() else {
            return 0;
        };

        if let Some(turn) = commands.turn {
            ship.rotate(turn, self.gameplay.rotation_speed);
        }
        if commands.thrust {
            ship.accelerate(self.gameplay.acceleration);
        }
        usize::from(commands.fire && self.shoot())
    }

    fn move_entities(&mut self) {
        let playfield = self.playfield;
        for object in self
            .ship
            .iter_mut()
            .chain(self.rocks.iter_mut())
            .chain(self.bullets.iter_mut())
        {
            object.move_within(&playfield);
        }
    }

    fn prune_bullets(&mut self) -> usize {
        let playfield = self.playfield;
        let before = self.bullets.len();
        self.bullets.retain(|bullet| !bullet.is_outside(&playfield));

        let pruned = before - self.bullets.len();
        if pruned > 0 {
            log::debug!("Pruned {} bullets outside the playfield", pruned);
        }
        pruned
    }

    /// Each bullet destroys at most the first live rock it overlaps
    fn resolve_bullet_hits(&mut self) -> usize {
        let mut rock_alive = vec![true; self.rocks.len()];
        let mut bullet_alive = vec![true; self.bullets.len()];

        for (bullet, bullet_alive) in self.bullets.iter().zip(bullet_alive.iter_mut()) {
            let hit = self
                .rocks
                .iter()
                .zip(&rock_alive)
                .position(|(rock, &alive)| alive && rock.collides_with(bullet));

            if let Some(index) = hit {
                log::debug!(
                    "Bullet at ({:.1}, {:.1}) destroyed rock {}",
                    bullet.position.x,
                    bullet.position.y,
                    index
                );
                rock_alive[index] = false;
                *bullet_alive = false;
            }
        }

        compact(&mut self.bullets, &bullet_alive);
        compact(&mut self.rocks, &rock_alive)
    }

    fn resolve_ship_hit(&mut self) -> bool {
        let hit = self
            .ship
            .as_ref()
            .is_some_and(|ship| self.rocks.iter().any(|rock| rock.collides_with(ship)));

        if hit {
            if let Some(ship) = self.ship.take() {
                log::info!(
                    "Ship destroyed at ({:.1}, {:.1}) after {} ticks",
                    ship.position.x,
                    ship.position.y,
                    self.stats.ticks + 1
                );
            }
        }
        hit
    }
}

/// Drop the items whose `keep` flag is false, returning how many were dropped
fn compact<T>(items: &mut Vec<T>, keep: &[bool]) -> usize {
    let before = items.len();
    let mut keep = keep.iter().copied();
    items.retain(|_| keep.next().unwrap_or(true));
    before - items.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use arcade_engine::foundation::math::{distance, Vec2};

    fn empty_world() -> World {
        World::empty(&GameConfig::default()).unwrap()
    }

    #[test]
    fn test_new_world_layout() {
        let mut rng = StdRng::seed_from_u64(42);
        let world = World::with_rng(&GameConfig::default(), &mut rng).unwrap();

        assert_eq!(world.rocks().len(), 6);
        assert!(world.bullets().is_empty());
        let ship = world.ship().unwrap();
        assert_eq!(ship.position, Vec2::new(400.0, 300.0));
        for rock in world.rocks() {
            assert!(distance(&rock.position, &ship.position) > 250.0);
        }
    }

    #[test]
    fn test_seeded_worlds_are_identical() {
        let mut config = GameConfig::default();
        config.gameplay.seed = Some(1234);
        let a = World::new(&config).unwrap();
        let b = World::new(&config).unwrap();
        assert_eq!(a.rocks(), b.rocks());
    }

    #[test]
    fn test_unsatisfiable_gap_is_an_error() {
        let mut config = GameConfig::default();
        config.gameplay.min_start_gap = 1000.0;
        let result = World::with_rng(&config, &mut StdRng::seed_from_u64(1));
        assert!(matches!(result, Err(WorldError::Spawn(SpawnError::NoRoom { .. }))));
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let mut config = GameConfig::default();
        config.playfield.width = -1.0;
        assert!(matches!(World::empty(&config), Err(WorldError::Config(_))));
    }

    #[test]
    fn test_controls_to_commands() {
        let commands = ShipCommands::from(Controls::ROTATE_LEFT | Controls::THRUST | Controls::FIRE);
        assert_eq!(commands.turn, Some(Turn::CounterClockwise));
        assert!(commands.thrust);
        assert!(commands.fire);

        let both = ShipCommands::from(Controls::ROTATE_LEFT | Controls::ROTATE_RIGHT);
        assert_eq!(both.turn, Some(Turn::Clockwise));

        assert_eq!(ShipCommands::from(Controls::empty()), ShipCommands::default());
    }

    #[test]
    fn test_thrust_then_move() {
        let mut world = empty_world();
        world.step(ShipCommands { thrust: true, ..ShipCommands::default() });

        let ship = world.ship().unwrap();
        assert_relative_eq!(ship.velocity.y, -0.25);
        assert_relative_eq!(ship.position.y, 299.75);
    }

    #[test]
    fn test_fire_spawns_bullet_that_moves_same_tick() {
        let mut world = empty_world();
        let report = world.step(ShipCommands { fire: true, ..ShipCommands::default() });

        assert_eq!(report.bullets_fired, 1);
        assert_eq!(world.bullets().len(), 1);
        assert_relative_eq!(world.bullets()[0].position.y, 297.0);
        assert_eq!(world.stats().bullets_fired, 1);
    }

    #[test]
    fn test_compact_keeps_order() {
        let mut items = vec![1, 2, 3, 4, 5];
        let removed = compact(&mut items, &[true, false, true, false, true]);
        assert_eq!(removed, 2);
        assert_eq!(items, vec![1, 3, 5]);
    }

    #[test]
    fn test_renderables_cover_every_entity() {
        let mut world = World::with_rng(&GameConfig::default(), &mut StdRng::seed_from_u64(5)).unwrap();
        world.shoot();

        let renderables: Vec<_> = world.renderables().collect();
        assert_eq!(renderables.len(), 6 + 1 + 1);
        let ship_view = renderables.last().unwrap();
        assert_eq!(ship_view.sprite, SpriteKind::Spaceship.handle());
        assert!(ship_view.facing.is_some());
    }
}
