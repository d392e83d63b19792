//! Pointer-driven node spawning.
//!
//! [`Spawner`] turns per-frame pointer state into store mutations: a
//! left-button press puts a free node under the cursor, a right-button
//! press an anchored (locked) one. Spawning is strictly edge-triggered:
//! the spawner remembers the previous frame's button state and only acts
//! on a released-to-pressed transition, so holding a button across any
//! number of frames creates exactly one node.
//!
//! A full store is reported on stderr and the press is otherwise ignored.

use glam::Vec2;

use crate::store::NodeStore;

/// Per-frame pointer snapshot, as the host loop observes it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pointer {
    /// Cursor position in world pixels.
    pub position: Vec2,
    /// Whether the left button is currently down.
    pub left_down: bool,
    /// Whether the right button is currently down.
    pub right_down: bool,
}

/// Edge detector translating pointer input into spawn calls.
#[derive(Debug, Default)]
pub struct Spawner {
    left_was_down: bool,
    right_was_down: bool,
}

impl Spawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one frame of pointer state. Returns the index of the node
    /// spawned this frame, if any.
    pub fn apply(&mut self, store: &mut NodeStore, pointer: Pointer) -> Option<usize> {
        let mut spawned = None;

        if pointer.left_down && !self.left_was_down {
            spawned = self.try_spawn(store, pointer.position, false);
        }
        if pointer.right_down && !self.right_was_down {
            spawned = self.try_spawn(store, pointer.position, true).or(spawned);
        }

        self.left_was_down = pointer.left_down;
        self.right_was_down = pointer.right_down;
        spawned
    }

    fn try_spawn(&self, store: &mut NodeStore, position: Vec2, locked: bool) -> Option<usize> {
        match store.spawn(position, locked) {
            Ok(index) => Some(index),
            Err(_) => {
                eprintln!(
                    "all {} nodes are created, spawn at ({:.0}, {:.0}) ignored",
                    store.capacity(),
                    position.x,
                    position.y
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn held(left: bool, right: bool, x: f32) -> Pointer {
        Pointer {
            position: Vec2::new(x, 50.0),
            left_down: left,
            right_down: right,
        }
    }

    #[test]
    fn test_holding_left_spawns_once() {
        let mut store = NodeStore::with_capacity(16);
        let mut spawner = Spawner::new();

        for frame in 0..10 {
            let spawned = spawner.apply(&mut store, held(true, false, 100.0));
            assert_eq!(spawned.is_some(), frame == 0);
        }

        assert_eq!(store.active_count(), 1);
        assert!(!store.is_locked(0));
    }

    #[test]
    fn test_release_rearms_the_edge() {
        let mut store = NodeStore::with_capacity(16);
        let mut spawner = Spawner::new();

        spawner.apply(&mut store, held(true, false, 100.0));
        spawner.apply(&mut store, held(false, false, 120.0));
        spawner.apply(&mut store, held(true, false, 140.0));

        assert_eq!(store.active_count(), 2);
    }

    #[test]
    fn test_right_button_spawns_locked() {
        let mut store = NodeStore::with_capacity(16);
        let mut spawner = Spawner::new();

        let i = spawner
            .apply(&mut store, held(false, true, 200.0))
            .unwrap();

        assert!(store.is_locked(i));
        assert_eq!(store.nodes()[i].position, Vec2::new(200.0, 50.0));
    }

    #[test]
    fn test_full_store_is_a_no_op() {
        let mut store = NodeStore::with_capacity(1);
        let mut spawner = Spawner::new();

        spawner.apply(&mut store, held(true, false, 10.0));
        spawner.apply(&mut store, held(false, false, 10.0));
        let spawned = spawner.apply(&mut store, held(true, false, 20.0));

        assert_eq!(spawned, None);
        assert_eq!(store.active_count(), 1);
        assert_eq!(store.nodes()[0].position, Vec2::new(10.0, 50.0));
    }
}
