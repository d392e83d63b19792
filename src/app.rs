//! Sandbox builder and host loop.
//!
//! [`Sandbox`] wires the pieces together: it owns the node store, the
//! connection relation and the world parameters, and runs the
//! single-threaded loop: poll input, apply pointer interaction, run one
//! solver step, render, cap the frame rate. Configure with method
//! chaining, then call `.run()`.
//!
//! ```ignore
//! Sandbox::new()
//!     .with_title("rope")
//!     .with_capacity(32)
//!     .with_scene(|store, connections| {
//!         let anchor = store.spawn(Vec2::new(640.0, 60.0), true).unwrap();
//!         let bob = store.spawn(Vec2::new(640.0, 130.0), false).unwrap();
//!         connections.connect(anchor, bob);
//!     })
//!     .run()
//! ```
//!
//! Controls: left click spawns a free node, right click an anchored one,
//! `R` rebuilds the scene, `Space` pauses, `Escape` quits.

use std::sync::Arc;
use std::time::Duration;

use glam::Vec2;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::connections::ConnectionSet;
use crate::error::SandboxError;
use crate::input::{Input, KeyCode};
use crate::interact::Spawner;
use crate::params::WorldParams;
use crate::render::Renderer;
use crate::solver;
use crate::store::NodeStore;
use crate::time::Time;

type SceneFn = Box<dyn Fn(&mut NodeStore, &mut ConnectionSet)>;

/// Interactive sandbox builder.
pub struct Sandbox {
    title: String,
    capacity: usize,
    params: WorldParams,
    fps_cap: u32,
    scene: Option<SceneFn>,
}

impl Sandbox {
    /// A sandbox with default parameters and an empty world.
    pub fn new() -> Self {
        Self {
            title: "springnet".to_string(),
            capacity: 64,
            params: WorldParams::default(),
            fps_cap: 60,
            scene: None,
        }
    }

    /// Window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Number of node slots.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// World parameters for the run. The window takes its inner size
    /// from `params.bounds`.
    pub fn with_params(mut self, params: WorldParams) -> Self {
        self.params = params;
        self
    }

    /// Upper bound on the frame rate.
    pub fn with_fps_cap(mut self, fps: u32) -> Self {
        self.fps_cap = fps.max(1);
        self
    }

    /// Initial scene: spawn nodes and declare connections. Also re-run
    /// when the user presses `R`.
    pub fn with_scene<F>(mut self, scene: F) -> Self
    where
        F: Fn(&mut NodeStore, &mut ConnectionSet) + 'static,
    {
        self.scene = Some(Box::new(scene));
        self
    }

    /// Open the window and block until it closes.
    pub fn run(self) -> Result<(), SandboxError> {
        let mut store = NodeStore::with_capacity(self.capacity);
        let mut connections = ConnectionSet::new(self.capacity);
        if let Some(scene) = &self.scene {
            scene(&mut store, &mut connections);
        }

        println!("Creating the event loop...");
        let event_loop = EventLoop::new()?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut app = App {
            title: self.title,
            capacity: self.capacity,
            frame_budget: Duration::from_secs_f64(1.0 / self.fps_cap as f64),
            window: None,
            renderer: None,
            fatal: None,
            store,
            connections,
            params: self.params,
            scene: self.scene,
            spawner: Spawner::new(),
            input: Input::new(),
            time: Time::new(),
        };
        event_loop.run_app(&mut app)?;

        match app.fatal {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for Sandbox {
    fn default() -> Self {
        Self::new()
    }
}

struct App {
    title: String,
    capacity: usize,
    frame_budget: Duration,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    fatal: Option<SandboxError>,
    store: NodeStore,
    connections: ConnectionSet,
    params: WorldParams,
    scene: Option<SceneFn>,
    spawner: Spawner,
    input: Input,
    time: Time,
}

impl App {
    /// One loop iteration: input snapshot, interaction, solver step,
    /// render, frame cap.
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        self.time.update();

        if self.input.key_pressed(KeyCode::Escape) {
            event_loop.exit();
            return;
        }
        if self.input.key_pressed(KeyCode::Space) {
            self.time.toggle_pause();
        }
        if self.input.key_pressed(KeyCode::R) {
            self.rebuild_scene();
        }

        let pointer = self.pointer_in_world();
        let mut snapshot = self.input.pointer();
        snapshot.position = pointer;
        self.spawner.apply(&mut self.store, snapshot);

        if !self.time.is_paused() {
            solver::step(&mut self.store, &self.connections, &self.params);
        }

        if let Some(renderer) = &mut self.renderer {
            match renderer.render(&self.store, &self.connections, pointer) {
                Ok(_) => {}
                Err(wgpu::SurfaceError::Lost) => renderer.resize(winit::dpi::PhysicalSize {
                    width: renderer.config.width,
                    height: renderer.config.height,
                }),
                Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                Err(e) => eprintln!("Render error: {:?}", e),
            }
        }

        if self.time.frame() > 0 && self.time.frame() % 120 == 0 {
            println!("{:.1} fps, {} nodes", self.time.fps(), self.store.active_count());
        }

        self.input.end_frame();
        self.time.cap_frame(self.frame_budget);
    }

    /// Cursor position mapped from window pixels to world coordinates.
    /// The two only differ after the user resizes the window.
    fn pointer_in_world(&self) -> Vec2 {
        let Some(window) = &self.window else {
            return self.input.cursor();
        };
        let size = window.inner_size();
        if size.width == 0 || size.height == 0 {
            return self.input.cursor();
        }
        self.input.cursor() * self.params.bounds
            / Vec2::new(size.width as f32, size.height as f32)
    }

    fn rebuild_scene(&mut self) {
        self.store = NodeStore::with_capacity(self.capacity);
        self.connections = ConnectionSet::new(self.capacity);
        if let Some(scene) = &self.scene {
            scene(&mut self.store, &mut self.connections);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        println!("Creating the window and the renderer...");
        let window_attrs = Window::default_attributes()
            .with_title(&self.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.params.bounds.x as f64,
                self.params.bounds.y as f64,
            ));

        let window = match event_loop.create_window(window_attrs) {
            Ok(window) => Arc::new(window),
            Err(e) => {
                eprintln!("Could not create the window: {}", e);
                self.fatal = Some(e.into());
                event_loop.exit();
                return;
            }
        };

        match pollster::block_on(Renderer::new(
            window.clone(),
            self.params.bounds,
            self.capacity,
        )) {
            Ok(renderer) => {
                println!(" Done.");
                self.window = Some(window);
                self.renderer = Some(renderer);
            }
            Err(e) => {
                eprintln!("Could not initialize the GPU: {}", e);
                self.fatal = Some(e.into());
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        self.input.handle_event(&event);

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size);
                }
            }
            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
