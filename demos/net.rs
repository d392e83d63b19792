//! # Net Demo
//!
//! A rectangular net pinned along its top row, connected with
//! structural springs (right and down neighbors). Gravity pulls the
//! free rows into a draped sheet.
//!
//! ## Try This
//!
//! - Right-click a hanging corner to pin it mid-drape
//! - Raise `damping` to 4.0 for a cloth that settles almost instantly
//! - Switch `boundary` to `BoundaryPolicy::Cull` and watch torn nodes
//!   vanish at the floor
//!
//! Run with: `cargo run --example net`

use springnet::prelude::*;

const COLS: usize = 9;
const ROWS: usize = 6;
const SPACING: f32 = 55.0;

fn main() {
    let params = WorldParams {
        stiffness: 60.0,
        damping: 2.5,
        rest_length: SPACING,
        gravity: 350.0,
        ..WorldParams::default()
    };

    let result = Sandbox::new()
        .with_title("springnet - net")
        .with_capacity(COLS * ROWS + 16)
        .with_params(params)
        .with_scene(|store, connections| {
            let origin = Vec2::new(420.0, 80.0);
            let mut grid = [[0usize; COLS]; ROWS];

            for row in 0..ROWS {
                for col in 0..COLS {
                    let pos = origin + Vec2::new(col as f32, row as f32) * SPACING;
                    grid[row][col] = store.spawn(pos, row == 0).unwrap();
                }
            }

            for row in 0..ROWS {
                for col in 0..COLS {
                    if col + 1 < COLS {
                        connections.connect(grid[row][col], grid[row][col + 1]);
                    }
                    if row + 1 < ROWS {
                        connections.connect(grid[row][col], grid[row + 1][col]);
                    }
                }
            }
        })
        .run();

    if let Err(e) = result {
        eprintln!("net demo failed to start: {}", e);
        std::process::exit(1);
    }
}
