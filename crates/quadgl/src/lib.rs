//! # quadgl
//!
//! Minimal OpenGL windowing and rendering support for a single-quad demo.
//!
//! ## Features
//!
//! - **GLFW Windowing**: Window plus OpenGL context with v-sync
//! - **One-Time Upload**: Mesh data moves into GPU buffers once, up front
//! - **Tracked Lifetime**: Every GPU object is registered and released at a
//!   single shutdown point, no leaks and no double frees
//! - **Polled Input**: Key state queried per frame instead of callbacks
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use quadgl::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = WindowConfig::default();
//!     let mut window = Window::new(&config)?;
//!     let device = window.create_gl_device();
//!     window.show();
//!
//!     let mut loader = MeshLoader::new();
//!     let triangle = loader.upload(
//!         &device,
//!         &[0.0, 0.5, 0.0, -0.5, -0.5, 0.0, 0.5, -0.5, 0.0],
//!         &[0, 1, 2],
//!     )?;
//!
//!     let renderer = Renderer::new();
//!     while !window.should_close() {
//!         window.poll_events();
//!         renderer.prepare_frame(&device);
//!         renderer.draw(&device, &triangle);
//!         window.swap_buffers();
//!         renderer.finish_frame(&device);
//!     }
//!
//!     loader.release_all(&device);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod input;
pub mod render;
pub mod time;
pub mod window;

/// Common imports for crate users
pub mod prelude {
    pub use crate::{
        config::{Config, WindowConfig},
        input::{InputState, KeyCode},
        render::{GlApi, GlowDevice, MeshHandle, MeshLoader, RenderError, Renderer},
        time::Timer,
        window::{Window, WindowError},
    };
}
