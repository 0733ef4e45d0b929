//! Input management system
//!
//! Raw key events from the window layer are folded into a [`Controls`]
//! snapshot once per tick. Fire is edge-triggered so that holding the key
//! (or OS key repeat) produces a single shot, and a tap that is pressed and
//! released between two snapshots still fires.

use std::collections::HashSet;

bitflags::bitflags! {
    /// Per-tick input snapshot consumed by the simulation
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Controls: u8 {
        /// Turn counter-clockwise
        const ROTATE_LEFT = 1 << 0;
        /// Turn clockwise
        const ROTATE_RIGHT = 1 << 1;
        /// Apply thrust along the heading
        const THRUST = 1 << 2;
        /// Fire once (only set on the tick the key went down)
        const FIRE = 1 << 3;
        /// Leave the main loop
        const QUIT = 1 << 4;
    }
}

impl Default for Controls {
    fn default() -> Self {
        Self::empty()
    }
}

impl Controls {
    /// Control bound to a key, if any
    pub fn for_key(key: KeyCode) -> Self {
        match key {
            KeyCode::Left | KeyCode::A => Self::ROTATE_LEFT,
            KeyCode::Right | KeyCode::D => Self::ROTATE_RIGHT,
            KeyCode::Up | KeyCode::W => Self::THRUST,
            KeyCode::Space => Self::FIRE,
            KeyCode::Escape => Self::QUIT,
            KeyCode::Enter | KeyCode::Down | KeyCode::S => Self::empty(),
        }
    }
}

/// Input manager
#[derive(Debug, Default)]
pub struct InputManager {
    pressed: HashSet<KeyCode>,
    fire_latched: bool,
    quit_requested: bool,
}

impl InputManager {
    /// Create a new input manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key input
    pub fn handle_key_input(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            // Repeats of a held key are not a new press
            if self.pressed.insert(key) && Controls::for_key(key).contains(Controls::FIRE) {
                self.fire_latched = true;
            }
        } else {
            self.pressed.remove(&key);
        }
    }

    /// Forget every held key
    pub fn release_all(&mut self) {
        self.pressed.clear();
    }

    /// Record a window close request
    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    /// Whether a key is currently held
    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Build this tick's snapshot and consume any pending fire press
    pub fn snapshot(&mut self) -> Controls {
        let held = self
            .pressed
            .iter()
            .fold(Controls::empty(), |acc, &key| acc | Controls::for_key(key));

        let mut controls = held - Controls::FIRE;
        if std::mem::take(&mut self.fire_latched) {
            controls |= Controls::FIRE;
        }
        if self.quit_requested {
            controls |= Controls::QUIT;
        }
        controls
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A key
    A,
    /// D key
    D,
    /// S key
    S,
    /// W key
    W,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_keys_map_to_controls() {
        let mut input = InputManager::new();
        input.handle_key_input(KeyCode::Left, true);
        input.handle_key_input(KeyCode::Up, true);

        let controls = input.snapshot();
        assert_eq!(controls, Controls::ROTATE_LEFT | Controls::THRUST);

        // Held keys keep reporting
        assert_eq!(input.snapshot(), Controls::ROTATE_LEFT | Controls::THRUST);
    }

    #[test]
    fn test_fire_is_edge_triggered() {
        let mut input = InputManager::new();
        input.handle_key_input(KeyCode::Space, true);
        assert!(input.snapshot().contains(Controls::FIRE));
        assert!(!input.snapshot().contains(Controls::FIRE));

        // Key repeat while held does not refire
        input.handle_key_input(KeyCode::Space, true);
        assert!(!input.snapshot().contains(Controls::FIRE));

        input.handle_key_input(KeyCode::Space, false);
        assert!(!input.snapshot().contains(Controls::FIRE));
        input.handle_key_input(KeyCode::Space, true);
        assert!(input.snapshot().contains(Controls::FIRE));
    }

    #[test]
    fn test_tap_between_snapshots_fires_once() {
        let mut input = InputManager::new();
        input.handle_key_input(KeyCode::Space, true);
        input.handle_key_input(KeyCode::Space, false);

        assert_eq!(input.snapshot(), Controls::FIRE);
        assert!(input.snapshot().is_empty());
    }

    #[test]
    fn test_release_clears_control() {
        let mut input = InputManager::new();
        input.handle_key_input(KeyCode::D, true);
        assert!(input.is_pressed(KeyCode::D));
        assert!(input.snapshot().contains(Controls::ROTATE_RIGHT));
        input.handle_key_input(KeyCode::D, false);
        assert!(!input.is_pressed(KeyCode::D));
        assert!(input.snapshot().is_empty());
    }

    #[test]
    fn test_quit_from_escape_or_close_request() {
        let mut input = InputManager::new();
        input.handle_key_input(KeyCode::Escape, true);
        assert!(input.snapshot().contains(Controls::QUIT));

        let mut input = InputManager::new();
        input.request_quit();
        assert!(input.snapshot().contains(Controls::QUIT));
    }
}
