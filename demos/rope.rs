//! # Rope Demo
//!
//! A slack rope strung between two anchors. The middle sags under
//! gravity and the damped springs settle it into a hanging curve.
//!
//! ## Try This
//!
//! - Left-click to drop loose nodes onto the scene
//! - Right-click mid-air to pin a third anchor
//! - Lower `stiffness` to 15.0 for a stretchier rope
//! - Press `R` to rebuild the rope after making a mess
//!
//! Run with: `cargo run --example rope`

use springnet::prelude::*;

const SEGMENTS: usize = 14;

fn main() {
    let params = WorldParams {
        stiffness: 35.0,
        damping: 2.0,
        rest_length: 50.0,
        ..WorldParams::default()
    };

    let result = Sandbox::new()
        .with_title("springnet - rope")
        .with_capacity(64)
        .with_params(params)
        .with_scene(move |store, connections| {
            let left = Vec2::new(200.0, 160.0);
            let right = Vec2::new(1080.0, 160.0);

            let mut previous = store.spawn(left, true).unwrap();
            for k in 1..SEGMENTS {
                let t = k as f32 / SEGMENTS as f32;
                let locked = k == SEGMENTS - 1;
                let link = store.spawn(left.lerp(right, t), locked).unwrap();
                connections.connect(previous, link);
                previous = link;
            }
        })
        .run();

    if let Err(e) = result {
        eprintln!("rope demo failed to start: {}", e);
        std::process::exit(1);
    }
}
