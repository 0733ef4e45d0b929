use super::{EntityKind, GameObject};
use arcade_engine::foundation::math::Vec2;
use arcade_engine::physics::Playfield;

impl GameObject {
    /// A bullet; it does not wrap and is never removed by itself
    pub fn bullet(position: Vec2, velocity: Vec2, radius: f32) -> Self {
        Self::new(EntityKind::Bullet, position, velocity, radius)
    }

    /// Whether the center has left the playfield rectangle
    pub fn is_outside(&self, playfield: &Playfield) -> bool {
        !playfield.contains(&self.position)
    }
}
