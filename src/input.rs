//! Input state tracking over raw window events.
//!
//! [`Input`] folds the winit event stream into two kinds of state: edge
//! events (a key or button went down this frame) and level state (it is
//! currently held). The host loop feeds every window event in, reads a
//! consistent snapshot once per frame, then calls [`Input::end_frame`]
//! to clear the edges.
//!
//! # Usage
//!
//! ```ignore
//! if input.key_pressed(KeyCode::Escape) {
//!     event_loop.exit();
//! }
//! let pointer = input.pointer();
//! spawner.apply(&mut store, pointer);
//! ```

use glam::Vec2;
use std::collections::HashSet;
use winit::event::{ElementState, MouseButton as WinitMouseButton, WindowEvent};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

use crate::interact::Pointer;

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    fn from_winit(btn: WinitMouseButton) -> Option<Self> {
        match btn {
            WinitMouseButton::Left => Some(MouseButton::Left),
            WinitMouseButton::Right => Some(MouseButton::Right),
            WinitMouseButton::Middle => Some(MouseButton::Middle),
            _ => None,
        }
    }
}

/// The handful of keys the sandbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Escape,
    Space,
    R,
    /// Any key without a binding, carried by its winit code.
    Other(u32),
}

impl From<WinitKeyCode> for KeyCode {
    fn from(key: WinitKeyCode) -> Self {
        match key {
            WinitKeyCode::Escape => KeyCode::Escape,
            WinitKeyCode::Space => KeyCode::Space,
            WinitKeyCode::KeyR => KeyCode::R,
            _ => KeyCode::Other(key as u32),
        }
    }
}

/// Keyboard and mouse state for one window.
#[derive(Debug, Default)]
pub struct Input {
    keys_held: HashSet<KeyCode>,
    keys_pressed: HashSet<KeyCode>,

    buttons_held: HashSet<MouseButton>,
    buttons_pressed: HashSet<MouseButton>,

    cursor: Vec2,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key went down this frame (no auto-repeat).
    pub fn key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Key is currently down.
    pub fn key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    /// Button went down this frame.
    pub fn button_pressed(&self, button: MouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }

    /// Button is currently down.
    pub fn button_held(&self, button: MouseButton) -> bool {
        self.buttons_held.contains(&button)
    }

    /// Cursor position in window pixels, origin top-left.
    #[inline]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// The per-frame pointer snapshot the spawner consumes.
    pub fn pointer(&self) -> Pointer {
        Pointer {
            position: self.cursor,
            left_down: self.button_held(MouseButton::Left),
            right_down: self.button_held(MouseButton::Right),
        }
    }

    /// Clear edge state at the end of a frame. Held state survives.
    pub fn end_frame(&mut self) {
        self.keys_pressed.clear();
        self.buttons_pressed.clear();
    }

    /// Fold one winit window event into the tracked state.
    pub fn handle_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    let key = KeyCode::from(code);
                    match event.state {
                        ElementState::Pressed => {
                            if !self.keys_held.contains(&key) {
                                self.keys_pressed.insert(key);
                            }
                            self.keys_held.insert(key);
                        }
                        ElementState::Released => {
                            self.keys_held.remove(&key);
                        }
                    }
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                if let Some(btn) = MouseButton::from_winit(*button) {
                    match state {
                        ElementState::Pressed => {
                            self.buttons_pressed.insert(btn);
                            self.buttons_held.insert(btn);
                        }
                        ElementState::Released => {
                            self.buttons_held.remove(&btn);
                        }
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
            }

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pressed_clears_but_held_survives_end_frame() {
        let mut input = Input::new();
        input.keys_pressed.insert(KeyCode::Space);
        input.keys_held.insert(KeyCode::Space);

        assert!(input.key_pressed(KeyCode::Space));
        assert!(input.key_held(KeyCode::Space));

        input.end_frame();
        assert!(!input.key_pressed(KeyCode::Space));
        assert!(input.key_held(KeyCode::Space));
    }

    #[test]
    fn test_pointer_snapshot_reflects_held_buttons() {
        let mut input = Input::new();
        input.cursor = Vec2::new(320.0, 240.0);
        input.buttons_held.insert(MouseButton::Right);

        let pointer = input.pointer();
        assert_eq!(pointer.position, Vec2::new(320.0, 240.0));
        assert!(!pointer.left_down);
        assert!(pointer.right_down);
    }

    #[test]
    fn test_unbound_keys_map_through_other() {
        let a = KeyCode::from(WinitKeyCode::KeyA);
        let b = KeyCode::from(WinitKeyCode::KeyB);
        assert_ne!(a, b);
        assert!(matches!(a, KeyCode::Other(_)));
    }
}
