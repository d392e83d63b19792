use springnet::prelude::*;

/// Default scene: a chain hung from a locked anchor, free to swing.
/// Click anywhere to add loose nodes, right-click to pin new anchors.
fn main() {
    let result = Sandbox::new()
        .with_title("springnet")
        .with_capacity(64)
        .with_scene(|store, connections| {
            let params = WorldParams::default();
            let top = Vec2::new(params.bounds.x / 2.0, 60.0);

            let anchor = store.spawn(top, true).unwrap();
            let mut previous = anchor;
            for k in 1..8 {
                let link = store
                    .spawn(top + Vec2::new(0.0, k as f32 * params.rest_length), false)
                    .unwrap();
                connections.connect(previous, link);
                previous = link;
            }
        })
        .run();

    if let Err(e) = result {
        eprintln!("springnet failed to start: {}", e);
        std::process::exit(1);
    }
}
