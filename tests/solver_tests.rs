//! Integration tests for the solver and store.
//!
//! These exercise the headless core: spawn/capacity behavior, both
//! boundary policies, locked anchors, the spring-damper force exchange
//! and determinism of the fixed step.

use springnet::prelude::*;

const TOLERANCE: f32 = 1e-4;

fn frictionless_params() -> WorldParams {
    WorldParams {
        bounds: Vec2::new(800.0, 600.0),
        ..WorldParams::default()
    }
    .frictionless()
}

fn connected_pair(a_pos: Vec2, b_pos: Vec2) -> (NodeStore, ConnectionSet, usize, usize) {
    let mut store = NodeStore::with_capacity(8);
    let mut connections = ConnectionSet::new(8);
    let a = store.spawn(a_pos, false).unwrap();
    let b = store.spawn(b_pos, false).unwrap();
    connections.connect(a, b);
    (store, connections, a, b)
}

#[test]
fn test_pair_conserves_momentum_without_gravity_or_drag() {
    let params = frictionless_params();
    let (mut store, connections, a, b) =
        connected_pair(Vec2::new(200.0, 300.0), Vec2::new(350.0, 320.0));
    store.nodes_mut()[a].velocity = Vec2::new(40.0, -10.0);
    store.nodes_mut()[b].velocity = Vec2::new(-5.0, 25.0);

    // Spring and damping forces are internal, so each step changes the
    // pair's total momentum by at most floating-point noise.
    for _ in 0..10 {
        let before = store.nodes()[a].velocity + store.nodes()[b].velocity;
        solver::step(&mut store, &connections, &params);
        let after = store.nodes()[a].velocity + store.nodes()[b].velocity;
        assert!((before - after).length() < TOLERANCE);
    }
}

#[test]
fn test_pair_at_rest_length_stays_put() {
    let params = frictionless_params();
    let (mut store, connections, a, b) = connected_pair(
        Vec2::new(200.0, 300.0),
        Vec2::new(200.0 + params.rest_length, 300.0),
    );

    solver::step(&mut store, &connections, &params);

    assert_eq!(store.nodes()[a].position, Vec2::new(200.0, 300.0));
    assert_eq!(
        store.nodes()[b].position,
        Vec2::new(200.0 + params.rest_length, 300.0)
    );
    assert_eq!(store.nodes()[a].velocity, Vec2::ZERO);
    assert_eq!(store.nodes()[b].velocity, Vec2::ZERO);
}

#[test]
fn test_locked_node_never_moves_but_still_pulls() {
    let params = WorldParams {
        bounds: Vec2::new(800.0, 600.0),
        ..WorldParams::default()
    };
    let mut store = NodeStore::with_capacity(8);
    let mut connections = ConnectionSet::new(8);

    let anchor_pos = Vec2::new(400.0, 100.0);
    let anchor = store.spawn(anchor_pos, true).unwrap();
    // Hang the bob well past rest length so the spring pulls up against
    // gravity.
    let bob = store
        .spawn(anchor_pos + Vec2::new(0.0, params.rest_length * 3.0), false)
        .unwrap();
    connections.connect(anchor, bob);

    let first_step_pull = {
        let mut probe = store.clone();
        solver::step(&mut probe, &connections, &params);
        probe.nodes()[bob].velocity.y
    };
    // Stretched spring opposes gravity: the bob accelerates upward.
    assert!(first_step_pull < 0.0);

    for _ in 0..200 {
        solver::step(&mut store, &connections, &params);
    }

    let anchor_node = store.nodes()[anchor];
    assert_eq!(anchor_node.position, anchor_pos);
    assert_eq!(anchor_node.velocity, Vec2::ZERO);
}

#[test]
fn test_reflect_clamps_to_wall_and_flips_velocity() {
    let params = WorldParams {
        gravity: 0.0,
        drag: 1.0,
        dt: 1.0,
        bounds: Vec2::new(800.0, 600.0),
        boundary: BoundaryPolicy::Reflect,
        ..WorldParams::default()
    };
    let mut store = NodeStore::with_capacity(4);
    let connections = ConnectionSet::new(4);

    // One step carries it well past the right wall.
    let i = store.spawn(Vec2::new(790.0, 300.0), false).unwrap();
    store.nodes_mut()[i].velocity = Vec2::new(50.0, 0.0);

    solver::step(&mut store, &connections, &params);

    let node = store.nodes()[i];
    assert_eq!(node.position.x, params.bounds.x);
    assert!(node.velocity.x < 0.0);
    assert_eq!(node.velocity.x.abs(), 50.0);
}

#[test]
fn test_reflect_low_edge() {
    let params = WorldParams {
        gravity: 0.0,
        drag: 1.0,
        dt: 1.0,
        bounds: Vec2::new(800.0, 600.0),
        boundary: BoundaryPolicy::Reflect,
        ..WorldParams::default()
    };
    let mut store = NodeStore::with_capacity(4);
    let connections = ConnectionSet::new(4);

    let i = store.spawn(Vec2::new(400.0, 10.0), false).unwrap();
    store.nodes_mut()[i].velocity = Vec2::new(0.0, -40.0);

    solver::step(&mut store, &connections, &params);

    let node = store.nodes()[i];
    assert_eq!(node.position.y, 0.0);
    assert!(node.velocity.y > 0.0);
}

#[test]
fn test_cull_deactivates_and_excludes_from_everything() {
    let params = WorldParams {
        gravity: 0.0,
        damping: 0.0,
        drag: 1.0,
        dt: 1.0,
        bounds: Vec2::new(800.0, 600.0),
        boundary: BoundaryPolicy::Cull,
        ..WorldParams::default()
    };
    let mut store = NodeStore::with_capacity(4);
    let mut connections = ConnectionSet::new(4);

    // Exactly rest length apart, so the spring is slack on the step in
    // which `leaves` exits the world.
    let stays = store
        .spawn(Vec2::new(100.0, 590.0 - params.rest_length), false)
        .unwrap();
    let leaves = store.spawn(Vec2::new(100.0, 590.0), false).unwrap();
    connections.connect(stays, leaves);
    store.nodes_mut()[leaves].velocity = Vec2::new(0.0, 100.0);

    solver::step(&mut store, &connections, &params);

    assert!(!store.is_active(leaves));
    assert_eq!(store.active().collect::<Vec<_>>(), vec![stays]);

    // The dead slot still holds a far-away position; if the pair were
    // still evaluated the stretched spring would accelerate `stays`.
    let before = store.nodes()[stays];
    solver::step(&mut store, &connections, &params);
    assert_eq!(store.nodes()[stays].velocity, before.velocity);
    assert_eq!(store.nodes()[stays].velocity, Vec2::ZERO);
}

#[test]
fn test_spawn_capacity_exactly_n() {
    let capacity = 16;
    let mut store = NodeStore::with_capacity(capacity);

    let mut indices = Vec::new();
    for k in 0..capacity {
        indices.push(store.spawn(Vec2::new(k as f32, 0.0), false).unwrap());
    }

    indices.sort_unstable();
    indices.dedup();
    assert_eq!(indices.len(), capacity);
    assert_eq!(store.active_count(), capacity);

    assert_eq!(store.spawn(Vec2::ZERO, false), Err(StoreFull));
    assert_eq!(store.active_count(), capacity);
}

#[test]
fn test_edge_triggered_spawn_across_held_frames() {
    let mut store = NodeStore::with_capacity(32);
    let mut spawner = Spawner::new();

    let pointer = Pointer {
        position: Vec2::new(111.0, 222.0),
        left_down: true,
        right_down: false,
    };
    for _ in 0..10 {
        spawner.apply(&mut store, pointer);
    }

    assert_eq!(store.active_count(), 1);
}

#[test]
fn test_identical_runs_are_bit_identical() {
    let params = WorldParams {
        bounds: Vec2::new(800.0, 600.0),
        ..WorldParams::default()
    };

    let build = || {
        let mut store = NodeStore::with_capacity(16);
        let mut connections = ConnectionSet::new(16);
        let anchor = store.spawn(Vec2::new(400.0, 50.0), true).unwrap();
        let mut previous = anchor;
        for k in 1..6 {
            let link = store
                .spawn(Vec2::new(400.0 + k as f32 * 10.0, 50.0 + k as f32 * 55.0), false)
                .unwrap();
            connections.connect(previous, link);
            previous = link;
        }
        (store, connections)
    };

    let (mut first, connections_a) = build();
    let (mut second, connections_b) = build();

    for _ in 0..300 {
        solver::step(&mut first, &connections_a, &params);
        solver::step(&mut second, &connections_b, &params);
    }

    for (a, b) in first.nodes().iter().zip(second.nodes()) {
        assert_eq!(a, b);
    }
}

#[test]
fn test_render_shader_is_valid_wgsl() {
    use naga::front::wgsl;
    use naga::valid::{Capabilities, ValidationFlags, Validator};

    let source = include_str!("../src/shader.wgsl");
    let module = wgsl::parse_str(source).expect("shader.wgsl failed to parse");

    let mut validator = Validator::new(ValidationFlags::all(), Capabilities::all());
    validator
        .validate(&module)
        .expect("shader.wgsl failed validation");
}
