//! Fixed-capacity node storage.
//!
//! All nodes live in a single table allocated up front. A slot is either
//! active (the node participates in simulation and rendering) or free.
//! Spawning claims the first free slot and fully reinitializes it;
//! deactivating releases the slot for reuse. Slots are never compacted,
//! so a node's index stays valid for as long as it is active.
//!
//! # Usage
//!
//! ```ignore
//! let mut store = NodeStore::with_capacity(32);
//!
//! let anchor = store.spawn(Vec2::new(320.0, 40.0), true)?;
//! let bob = store.spawn(Vec2::new(320.0, 100.0), false)?;
//!
//! for i in store.active() {
//!     println!("node {i} at {}", store.nodes()[i].position);
//! }
//! ```

use glam::Vec2;
use std::fmt;

/// A simulated point mass.
///
/// The kinematic fields of an inactive node are meaningless; every
/// consumer must check `active` (or iterate via [`NodeStore::active`])
/// before reading them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// Position in world pixels (origin top-left, y grows downward).
    pub position: Vec2,
    /// Velocity in pixels per second.
    pub velocity: Vec2,
    /// Acceleration accumulator, rewritten at the start of every step.
    pub acceleration: Vec2,
    /// Locked nodes are fixed in space: they exchange spring forces but
    /// are excluded from integration and boundary handling.
    pub locked: bool,
    /// Whether this slot currently holds a live node.
    pub active: bool,
}

impl Node {
    const FREE: Node = Node {
        position: Vec2::ZERO,
        velocity: Vec2::ZERO,
        acceleration: Vec2::ZERO,
        locked: false,
        active: false,
    };
}

/// Returned by [`NodeStore::spawn`] when every slot is active.
///
/// Non-fatal: the caller reports it and carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreFull;

impl fmt::Display for StoreFull {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "all node slots are in use")
    }
}

impl std::error::Error for StoreFull {}

/// Fixed-capacity table of nodes.
///
/// Indices are the only stable handle to a node. Out-of-range indices are
/// caller bugs and panic via slice indexing rather than being recovered.
#[derive(Debug, Clone)]
pub struct NodeStore {
    nodes: Vec<Node>,
}

impl NodeStore {
    /// Create a store with `capacity` free slots.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: vec![Node::FREE; capacity],
        }
    }

    /// Total number of slots, active or not.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.len()
    }

    /// Claim the first free slot for a new node.
    ///
    /// The slot's velocity and acceleration are zeroed and its position
    /// and locked flag set from the arguments, so no state from a prior
    /// occupant leaks through. Returns the slot index, or [`StoreFull`]
    /// if every slot is active (the store is left unchanged).
    pub fn spawn(&mut self, position: Vec2, locked: bool) -> Result<usize, StoreFull> {
        let index = self
            .nodes
            .iter()
            .position(|n| !n.active)
            .ok_or(StoreFull)?;

        self.nodes[index] = Node {
            position,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            locked,
            active: true,
        };
        Ok(index)
    }

    /// Release a slot. Idempotent: deactivating a free slot is a no-op.
    pub fn deactivate(&mut self, index: usize) {
        self.nodes[index].active = false;
    }

    /// Whether the slot at `index` holds a live node.
    #[inline]
    pub fn is_active(&self, index: usize) -> bool {
        self.nodes[index].active
    }

    /// Whether the node at `index` is locked. Meaningless for free slots.
    #[inline]
    pub fn is_locked(&self, index: usize) -> bool {
        self.nodes[index].locked
    }

    /// Number of active nodes.
    pub fn active_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.active).count()
    }

    /// Iterate over the indices of all active nodes, in slot order.
    ///
    /// The iterator borrows the store; restart it by calling again.
    pub fn active(&self) -> impl Iterator<Item = usize> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.active)
            .map(|(i, _)| i)
    }

    /// Read access to the raw slot table.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Mutable access to the raw slot table, for the solver and for
    /// scene setup (e.g. handing a freshly spawned node a velocity).
    #[inline]
    pub fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }
}
