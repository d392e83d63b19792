//! # springnet - Spring-Mass Particle Sandbox
//!
//! Interactive mass-spring simulations with a simple, declarative API.
//!
//! A springnet world is a fixed-capacity table of point-mass nodes, an
//! optional spring-damper connection between any pair of them, and a
//! deterministic fixed-step solver. The built-in sandbox opens a window,
//! lets you drop nodes with the mouse and watches the structure swing,
//! stretch and bounce off the screen edges.
//!
//! ## Quick Start
//!
//! ```ignore
//! use springnet::prelude::*;
//!
//! fn main() -> Result<(), SandboxError> {
//!     Sandbox::new()
//!         .with_title("pendulum")
//!         .with_capacity(32)
//!         .with_scene(|store, connections| {
//!             let anchor = store.spawn(Vec2::new(640.0, 80.0), true).unwrap();
//!             let bob = store.spawn(Vec2::new(760.0, 80.0), false).unwrap();
//!             connections.connect(anchor, bob);
//!         })
//!         .run()
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Nodes
//!
//! A [`Node`] is a point mass with position, velocity and acceleration.
//! Nodes live in a [`NodeStore`] of fixed capacity; spawning claims the
//! first free slot, deactivating frees it for reuse. A *locked* node is
//! pinned in space and anchors whatever is connected to it.
//!
//! ### Connections
//!
//! A [`ConnectionSet`] declares which node pairs are joined by a
//! spring-damper. Springs pull toward their rest length (Hooke's law)
//! and damp relative motion along their axis.
//!
//! ### The step
//!
//! [`solver::step`] advances the world by one fixed `dt`: gravity,
//! pairwise spring forces, semi-implicit Euler integration, then the
//! configured [`BoundaryPolicy`]: reflect off the walls or cull nodes
//! that leave the world. The step is deterministic: no clock, no
//! randomness.
//!
//! ### Interaction
//!
//! In the sandbox, a left click spawns a free node under the cursor and
//! a right click an anchored one, strictly once per press. `R` rebuilds
//! the scene, `Space` pauses, `Escape` quits.
//!
//! The solver and store have no window or GPU dependency; everything
//! above the sandbox layer is usable headless (that is how the test
//! suite runs).

mod app;
pub mod connections;
pub mod error;
pub mod input;
pub mod interact;
pub mod params;
mod render;
pub mod solver;
pub mod store;
pub mod time;

pub use app::Sandbox;
pub use connections::ConnectionSet;
pub use error::{GpuError, SandboxError};
pub use glam::Vec2;
pub use interact::{Pointer, Spawner};
pub use params::{BoundaryPolicy, WorldParams};
pub use store::{Node, NodeStore, StoreFull};

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use springnet::prelude::*;
/// ```
pub mod prelude {
    pub use crate::connections::ConnectionSet;
    pub use crate::error::SandboxError;
    pub use crate::input::{Input, KeyCode, MouseButton};
    pub use crate::interact::{Pointer, Spawner};
    pub use crate::params::{BoundaryPolicy, WorldParams};
    pub use crate::solver;
    pub use crate::store::{Node, NodeStore, StoreFull};
    pub use crate::time::Time;
    pub use crate::Sandbox;
    pub use crate::Vec2;
}
