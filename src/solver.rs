//! The fixed-step solver.
//!
//! [`step`] advances every active node by exactly one `dt`, in three
//! phases whose order is load-bearing:
//!
//! 1. every active node's acceleration is rewritten to `(0, gravity)`,
//!    discarding anything injected since the previous step;
//! 2. spring-damper forces are accumulated over all joined pairs whose
//!    endpoints are both active, applied equal and opposite;
//! 3. active unlocked nodes integrate (semi-implicit Euler) and the
//!    boundary policy runs. Locked nodes skip phase 3 entirely: they act
//!    as fixed anchors while still exchanging forces in phase 2.
//!
//! Given identical stores, connections and params the step is a pure
//! function of its inputs (no clock, no randomness), so runs replay
//! bit for bit.

use crate::connections::ConnectionSet;
use crate::params::{BoundaryPolicy, WorldParams};
use crate::store::NodeStore;

/// Below this separation a joined pair contributes no force. A
/// zero-length spring has no meaningful axis to push along, and the
/// naive formula would divide by zero.
pub const MIN_SEPARATION: f32 = 1e-6;

/// Advance the world by one fixed time increment.
pub fn step(store: &mut NodeStore, connections: &ConnectionSet, params: &WorldParams) {
    debug_assert_eq!(
        store.capacity(),
        connections.capacity(),
        "store and connection relation must cover the same slots"
    );

    let nodes = store.nodes_mut();

    // Phase 1: force reset + gravity.
    for node in nodes.iter_mut().filter(|n| n.active) {
        node.acceleration.x = 0.0;
        node.acceleration.y = params.gravity;
    }

    // Phase 2: pairwise spring-damper accumulation.
    for (i, j) in connections.pairs() {
        if !nodes[i].active || !nodes[j].active {
            continue;
        }

        let delta = nodes[i].position - nodes[j].position;
        let distance = delta.length();
        if distance <= MIN_SEPARATION {
            continue;
        }
        let axis = delta / distance;

        let stretch = params.stiffness * (distance - params.rest_length);
        let closing = params.damping * axis.dot(nodes[i].velocity - nodes[j].velocity);
        let force = (stretch + closing) * axis;

        nodes[i].acceleration -= force;
        nodes[j].acceleration += force;
    }

    // Phase 3: integration + boundary policy for unlocked nodes.
    for node in nodes.iter_mut().filter(|n| n.active && !n.locked) {
        node.velocity += params.dt * node.acceleration;
        node.velocity *= params.drag;
        node.position += params.dt * node.velocity;

        match params.boundary {
            BoundaryPolicy::Reflect => {
                if node.position.x < 0.0 {
                    node.position.x = 0.0;
                    node.velocity.x = node.velocity.x.abs();
                } else if node.position.x > params.bounds.x {
                    node.position.x = params.bounds.x;
                    node.velocity.x = -node.velocity.x.abs();
                }
                if node.position.y < 0.0 {
                    node.position.y = 0.0;
                    node.velocity.y = node.velocity.y.abs();
                } else if node.position.y > params.bounds.y {
                    node.position.y = params.bounds.y;
                    node.velocity.y = -node.velocity.y.abs();
                }
            }
            BoundaryPolicy::Cull => {
                if node.position.x < 0.0
                    || node.position.x > params.bounds.x
                    || node.position.y < 0.0
                    || node.position.y > params.bounds.y
                {
                    node.active = false;
                }
            }
        }
    }
}
