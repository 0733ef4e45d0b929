//! Physics module for 2D arcade motion and collision
//!
//! Provides circle collision primitives and the playfield rectangle that
//! entities move within, including toroidal wrap-around.

pub mod collision;
pub mod playfield;

pub use collision::Circle;
pub use playfield::Playfield;
