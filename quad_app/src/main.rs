//! Quad demo
//!
//! Opens a window, uploads one hardcoded quad into GPU buffers and redraws
//! it every frame until the window closes. The space bar is polled each
//! frame; shutdown releases every GPU object through the loader.

use quadgl::prelude::*;

/// Corner positions of the quad, three coordinates per vertex
const QUAD_POSITIONS: [f32; 12] = [
    -0.5, 0.5, 0.0, // top left
    -0.5, -0.5, 0.0, // bottom left
    0.5, -0.5, 0.0, // bottom right
    0.5, 0.5, 0.0, // top right
];

/// Two triangles covering the quad
const QUAD_INDICES: [u32; 6] = [
    0, 1, 3, // first triangle
    3, 1, 2, // second triangle
];

/// Size the centering math assumes for the window's client area
const CENTER_SIZE: (u32, u32) = (300, 300);

struct QuadApp {
    window: Window,
    device: GlowDevice,
    input: InputState,
    loader: MeshLoader,
    renderer: Renderer,
    timer: Timer,
    quad: MeshHandle,
}

impl QuadApp {
    fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let config = WindowConfig::default();
        let mut window = Window::new(&config)?;
        window.center_on_primary(CENTER_SIZE.0, CENTER_SIZE.1);

        let device = window.create_gl_device();
        device.enable_depth_test();
        log::info!("OpenGL version: {}", device.version_string());

        window.show();

        let mut loader = MeshLoader::new();
        let quad = loader.upload(&device, &QUAD_POSITIONS, &QUAD_INDICES)?;

        Ok(Self {
            window,
            device,
            input: InputState::new(),
            loader,
            renderer: Renderer::new(),
            timer: Timer::new(),
            quad,
        })
    }

    fn run(&mut self) {
        log::info!("entering main loop");
        while !self.window.should_close() {
            self.update();
            self.render();
            self.timer.update();
        }
        self.shutdown();
    }

    fn update(&mut self) {
        self.window.poll_events();
        for (_, event) in self.window.flush_events() {
            self.input.apply_window_event(&event);
        }

        if self.input.key_down(KeyCode::Space) {
            log::debug!("space bar held");
        }
    }

    fn render(&mut self) {
        self.renderer.prepare_frame(&self.device);
        self.renderer.draw(&self.device, &self.quad);
        self.window.swap_buffers();
        self.renderer.finish_frame(&self.device);
    }

    fn shutdown(&mut self) {
        self.loader.release_all(&self.device);
        log::info!(
            "rendered {} frames in {:.1}s ({:.0} fps average)",
            self.timer.frame_count(),
            self.timer.total_time(),
            self.timer.average_fps()
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("starting quad demo");

    let mut app = QuadApp::new()?;
    app.run();

    log::info!("quad demo finished");
    Ok(())
}
