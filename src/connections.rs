//! Spring connections between node pairs.
//!
//! A [`ConnectionSet`] is a symmetric boolean relation over node indices:
//! `joined(i, j)` means a spring-damper acts between nodes `i` and `j`.
//! It is stored as a dense `n x n` matrix, which is the right trade-off
//! at the node counts this crate targets; a set of unordered index pairs
//! would avoid the quadratic memory if capacity ever grew large.
//!
//! The relation says nothing about whether its endpoints are alive;
//! the solver checks both slots for activity before computing a force.

use std::fmt;

/// Symmetric connection matrix over node indices.
#[derive(Clone)]
pub struct ConnectionSet {
    capacity: usize,
    joined: Vec<bool>,
}

impl ConnectionSet {
    /// Create an empty relation over `capacity` node slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            joined: vec![false; capacity * capacity],
        }
    }

    /// Number of node slots the relation covers.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Join `a` and `b` with a spring. Symmetric; self-connections are a
    /// caller bug.
    pub fn connect(&mut self, a: usize, b: usize) {
        assert!(a != b, "a node cannot be connected to itself");
        assert!(a < self.capacity && b < self.capacity, "node index out of range");
        self.joined[a * self.capacity + b] = true;
        self.joined[b * self.capacity + a] = true;
    }

    /// Remove the spring between `a` and `b`, if any.
    pub fn disconnect(&mut self, a: usize, b: usize) {
        assert!(a < self.capacity && b < self.capacity, "node index out of range");
        self.joined[a * self.capacity + b] = false;
        self.joined[b * self.capacity + a] = false;
    }

    /// Whether `a` and `b` are joined.
    #[inline]
    pub fn joined(&self, a: usize, b: usize) -> bool {
        self.joined[a * self.capacity + b]
    }

    /// Iterate over every joined unordered pair exactly once, as
    /// `(i, j)` with `i < j`, in row-major order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.capacity;
        (0..n).flat_map(move |i| {
            (i + 1..n).filter_map(move |j| self.joined(i, j).then_some((i, j)))
        })
    }

    /// Number of joined pairs.
    pub fn pair_count(&self) -> usize {
        self.pairs().count()
    }
}

impl fmt::Debug for ConnectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSet")
            .field("capacity", &self.capacity)
            .field("pairs", &self.pairs().collect::<Vec<_>>())
            .finish()
    }
}
