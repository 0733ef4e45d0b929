//! Windowless event source and draw surface
//!
//! [`AutoPilot`] plays the game with a fixed key script and [`LogSurface`]
//! records frames to the log instead of a window, so the full engine loop
//! runs without a display.

use crate::sprites::SpriteKind;
use arcade_engine::foundation::math::Vec2;
use arcade_engine::input::KeyCode;
use arcade_engine::render::{Color, DrawSurface, Renderable};
use arcade_engine::{AppEvent, EngineError, EventSource};
use std::collections::HashSet;

/// Ticks between shots
const FIRE_PERIOD: u64 = 10;
/// Length of each turning phase
const TURN_PHASE: u64 = 60;
/// Ticks between thrust bursts
const THRUST_PERIOD: u64 = 90;
/// Length of a thrust burst
const THRUST_BURST: u64 = 4;

/// Scripted pilot
///
/// Taps fire every [`FIRE_PERIOD`] ticks, cycles through turning right,
/// turning left and holding course, and gives a short burst of thrust
/// now and then. Emits key press and release events only when the held
/// set changes, like a real window would.
#[derive(Debug, Default)]
pub struct AutoPilot {
    tick: u64,
    held: HashSet<KeyCode>,
}

impl AutoPilot {
    /// Create a pilot at tick zero with no keys held
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys the script holds during `tick`
    pub fn keys_for_tick(tick: u64) -> HashSet<KeyCode> {
        let mut keys = HashSet::new();
        if tick % FIRE_PERIOD == 0 {
            keys.insert(KeyCode::Space);
        }
        match (tick / TURN_PHASE) % 3 {
            0 => {
                keys.insert(KeyCode::Right);
            }
            1 => {
                keys.insert(KeyCode::Left);
            }
            _ => {}
        }
        if tick % THRUST_PERIOD < THRUST_BURST {
            keys.insert(KeyCode::Up);
        }
        keys
    }
}

impl EventSource for AutoPilot {
    fn poll_events(&mut self) -> Vec<AppEvent> {
        let wanted = Self::keys_for_tick(self.tick);
        self.tick += 1;

        let mut events: Vec<AppEvent> = self
            .held
            .difference(&wanted)
            .map(|&key| AppEvent::KeyInput { key, pressed: false })
            .collect();
        events.extend(
            wanted
                .difference(&self.held)
                .map(|&key| AppEvent::KeyInput { key, pressed: true }),
        );

        self.held = wanted;
        events
    }
}

/// Draw surface that logs frames
#[derive(Debug, Default)]
pub struct LogSurface {
    frames: u64,
    draws_this_frame: usize,
    total_draws: u64,
    last_clear: Option<Color>,
    last_anchor: Option<Vec2>,
}

impl LogSurface {
    /// Create an empty surface
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames presented
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Draw calls across all frames
    pub fn total_draws(&self) -> u64 {
        self.total_draws
    }

    /// Color of the most recent clear
    pub fn last_clear(&self) -> Option<Color> {
        self.last_clear
    }

    /// Blit anchor of the most recent draw
    ///
    /// Unrotated sprites are placed by their top-left corner. Rotated
    /// sprites grow when turned, so they are placed by their center.
    pub fn last_anchor(&self) -> Option<Vec2> {
        self.last_anchor
    }
}

impl DrawSurface for LogSurface {
    fn clear(&mut self, color: Color) {
        self.last_clear = Some(color);
        self.draws_this_frame = 0;
    }

    fn draw(&mut self, item: &Renderable) {
        self.draws_this_frame += 1;
        self.total_draws += 1;

        let name = SpriteKind::from_handle(item.sprite).map_or("unknown", SpriteKind::name);
        match item.facing_angle() {
            Some(angle) => {
                let center = item.position;
                log::trace!(
                    "draw {} centered on ({:.1}, {:.1}) rotated {:.1}",
                    name,
                    center.x,
                    center.y,
                    angle
                );
                self.last_anchor = Some(center);
            }
            None => {
                let top_left = item.top_left();
                log::trace!("draw {} at ({:.1}, {:.1})", name, top_left.x, top_left.y);
                self.last_anchor = Some(top_left);
            }
        }
    }

    fn present(&mut self) -> Result<(), EngineError> {
        self.frames += 1;
        log::debug!("Frame {}: {} sprites", self.frames, self.draws_this_frame);
        Ok(())
    }
}
