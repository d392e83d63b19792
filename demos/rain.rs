//! # Rain Demo
//!
//! Unconnected nodes scattered across the top of the world, falling
//! under gravity with the cull boundary policy: whatever crosses the
//! bottom edge is deactivated, freeing its slot. Keep left-clicking to
//! top the store back up; once every drop has fallen the world is
//! empty again.
//!
//! ## What This Demonstrates
//!
//! - `BoundaryPolicy::Cull` - nodes leaving the world are deactivated
//! - Slot reuse: culled nodes make room for newly spawned ones
//!
//! Run with: `cargo run --example rain`

use rand::Rng;
use springnet::prelude::*;

fn main() {
    let params = WorldParams {
        gravity: 500.0,
        drag: 1.0,
        boundary: BoundaryPolicy::Cull,
        ..WorldParams::default()
    };
    let bounds = params.bounds;

    let result = Sandbox::new()
        .with_title("springnet - rain")
        .with_capacity(128)
        .with_params(params)
        .with_scene(move |store, _connections| {
            let mut rng = rand::thread_rng();
            for _ in 0..80 {
                let pos = Vec2::new(
                    rng.gen_range(0.0..bounds.x),
                    rng.gen_range(0.0..bounds.y / 3.0),
                );
                let i = store.spawn(pos, false).unwrap();
                store.nodes_mut()[i].velocity = Vec2::new(rng.gen_range(-30.0..30.0), 0.0);
            }
        })
        .run();

    if let Err(e) = result {
        eprintln!("rain demo failed to start: {}", e);
        std::process::exit(1);
    }
}
