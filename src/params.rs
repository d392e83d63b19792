//! World parameters shared by every node.
//!
//! One [`WorldParams`] value configures a run and stays fixed for its
//! lifetime. The solver reads it; nodes never carry per-node copies.

use glam::Vec2;

/// What happens when an integrated node leaves the world rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryPolicy {
    /// Clamp the offending coordinate to the wall and flip that velocity
    /// component back toward the interior.
    #[default]
    Reflect,
    /// Deactivate the node; it has left the world for good.
    Cull,
}

/// Scalar configuration for the simulation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldParams {
    /// Spring constant K (Hooke restoring force per pixel of stretch).
    pub stiffness: f32,
    /// Damping coefficient Kd applied to relative velocity along the
    /// spring axis.
    pub damping: f32,
    /// Spring rest length L0, in pixels.
    pub rest_length: f32,
    /// Gravitational acceleration in pixels/s^2. Positive is down the
    /// screen.
    pub gravity: f32,
    /// Multiplicative per-step velocity decay. `1.0` disables drag.
    pub drag: f32,
    /// Fixed time increment per step, in seconds.
    pub dt: f32,
    /// World rectangle extent: nodes live in `[0, bounds.x] x [0, bounds.y]`.
    pub bounds: Vec2,
    /// Boundary-exit policy.
    pub boundary: BoundaryPolicy,
}

impl Default for WorldParams {
    fn default() -> Self {
        Self {
            stiffness: 40.0,
            damping: 1.5,
            rest_length: 60.0,
            gravity: 400.0,
            drag: 0.999,
            dt: 1.0 / 120.0,
            bounds: Vec2::new(1280.0, 720.0),
            boundary: BoundaryPolicy::Reflect,
        }
    }
}

impl WorldParams {
    /// Params with gravity and drag switched off, useful for isolating
    /// spring behavior.
    pub fn frictionless(self) -> Self {
        Self {
            gravity: 0.0,
            drag: 1.0,
            ..self
        }
    }
}
