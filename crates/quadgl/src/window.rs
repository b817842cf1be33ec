//! Window management using GLFW
//!
//! Owns the GLFW instance, the window and its event receiver, and hands out
//! the GL function loader once the context is current. Creation failures
//! are fatal for the demo: with no window system there is nothing to fall
//! back to.

use glfw::Context;
use thiserror::Error;

use crate::config::WindowConfig;
use crate::render::GlowDevice;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// GLFW library initialization failed
    #[error("GLFW initialization failed")]
    InitializationFailed,

    /// Window or context creation failed
    #[error("Window creation failed")]
    CreationFailed,
}

/// Result type for window operations
pub type WindowResult<T> = Result<T, WindowError>;

/// GLFW window owning the OpenGL context
pub struct Window {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl Window {
    /// Create the window and make its GL context current
    ///
    /// The window starts hidden so the caller can position it before
    /// [`show`](Self::show). Key events are polled; v-sync follows the
    /// config.
    pub fn new(config: &WindowConfig) -> WindowResult<Self> {
        let mut glfw = glfw::init(glfw::fail_on_errors)
            .map_err(|_| WindowError::InitializationFailed)?;

        glfw.window_hint(glfw::WindowHint::Resizable(config.resizable));
        glfw.window_hint(glfw::WindowHint::Visible(false));

        let (mut window, events) = glfw
            .create_window(
                config.width,
                config.height,
                &config.title,
                glfw::WindowMode::Windowed,
            )
            .ok_or(WindowError::CreationFailed)?;

        window.set_key_polling(true);
        window.make_current();

        if config.vsync {
            glfw.set_swap_interval(glfw::SwapInterval::Sync(1));
        } else {
            glfw.set_swap_interval(glfw::SwapInterval::None);
        }

        log::info!(
            "created {}x{} window \"{}\"",
            config.width,
            config.height,
            config.title
        );

        Ok(Self {
            glfw,
            window,
            events,
        })
    }

    /// Center the window on the primary monitor
    ///
    /// The position math treats the client area as `width` x `height`,
    /// whatever size the window actually has. Without a usable monitor the
    /// window stays where the system put it.
    pub fn center_on_primary(&mut self, width: u32, height: u32) {
        let position = self.glfw.with_primary_monitor(|_, monitor| {
            monitor.and_then(|m| m.get_video_mode()).map(|mode| {
                (
                    (mode.width.saturating_sub(width) / 2) as i32,
                    (mode.height.saturating_sub(height) / 2) as i32,
                )
            })
        });

        if let Some((x, y)) = position {
            self.window.set_pos(x, y);
        }
    }

    /// Make the window visible
    pub fn show(&mut self) {
        self.window.show();
    }

    /// Build a GL device from this window's loader
    ///
    /// The context was made current in [`new`](Self::new), so function
    /// lookup is valid here.
    pub fn create_gl_device(&mut self) -> GlowDevice {
        GlowDevice::from_loader(|symbol| self.window.get_proc_address(symbol) as *const _)
    }

    /// Whether the user has asked the window to close
    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    /// Pump the window system's event queue
    pub fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    /// Drain events gathered by [`poll_events`](Self::poll_events)
    pub fn flush_events(&self) -> glfw::FlushedMessages<'_, (f64, glfw::WindowEvent)> {
        glfw::flush_messages(&self.events)
    }

    /// Present the back buffer
    pub fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }
}
