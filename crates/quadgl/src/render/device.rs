//! OpenGL device
//!
//! Thin safe wrapper over a loaded [`glow::Context`]. Every [`GlApi`]
//! method is a one-line delegation into the raw call; nothing here carries
//! state beyond the context itself.

use glow::HasContext;

use super::gl::GlApi;
use super::{RenderError, RenderResult};

/// OpenGL device backed by a loaded function table
///
/// Construct one with [`from_loader`](Self::from_loader) while the owning
/// window's context is current on this thread; all later calls assume that
/// same context stays current.
pub struct GlowDevice {
    gl: glow::Context,
}

impl GlowDevice {
    /// Load GL function pointers through `loader`
    ///
    /// `loader` is the window system's proc-address lookup. The window's GL
    /// context must be current when this runs.
    pub fn from_loader(loader: impl FnMut(&str) -> *const std::ffi::c_void) -> Self {
        let gl = unsafe { glow::Context::from_loader_function(loader) };
        Self { gl }
    }

    /// Version string reported by the driver
    pub fn version_string(&self) -> String {
        unsafe { self.gl.get_parameter_string(glow::VERSION) }
    }
}

impl GlApi for GlowDevice {
    fn create_vertex_array(&self) -> RenderResult<glow::VertexArray> {
        unsafe {
            self.gl
                .create_vertex_array()
                .map_err(RenderError::CreateVertexArray)
        }
    }

    fn create_buffer(&self) -> RenderResult<glow::Buffer> {
        unsafe { self.gl.create_buffer().map_err(RenderError::CreateBuffer) }
    }

    fn bind_vertex_array(&self, vertex_array: Option<glow::VertexArray>) {
        unsafe { self.gl.bind_vertex_array(vertex_array) }
    }

    fn bind_buffer(&self, target: u32, buffer: Option<glow::Buffer>) {
        unsafe { self.gl.bind_buffer(target, buffer) }
    }

    fn buffer_data_u8_slice(&self, target: u32, data: &[u8], usage: u32) {
        unsafe { self.gl.buffer_data_u8_slice(target, data, usage) }
    }

    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    ) {
        unsafe {
            self.gl
                .vertex_attrib_pointer_f32(index, size, data_type, normalized, stride, offset)
        }
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        unsafe { self.gl.enable_vertex_attrib_array(index) }
    }

    fn disable_vertex_attrib_array(&self, index: u32) {
        unsafe { self.gl.disable_vertex_attrib_array(index) }
    }

    fn draw_elements(&self, mode: u32, count: i32, element_type: u32, offset: i32) {
        unsafe { self.gl.draw_elements(mode, count, element_type, offset) }
    }

    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        unsafe { self.gl.clear_color(red, green, blue, alpha) }
    }

    fn clear(&self, mask: u32) {
        unsafe { self.gl.clear(mask) }
    }

    fn enable_depth_test(&self) {
        unsafe { self.gl.enable(glow::DEPTH_TEST) }
    }

    fn delete_vertex_array(&self, vertex_array: glow::VertexArray) {
        unsafe { self.gl.delete_vertex_array(vertex_array) }
    }

    fn delete_buffer(&self, buffer: glow::Buffer) {
        unsafe { self.gl.delete_buffer(buffer) }
    }
}
