//! GL command seam
//!
//! [`GlApi`] is the narrow slice of OpenGL this crate actually issues. The
//! loader and renderer are written against it instead of a raw context, so
//! a real [`GlowDevice`](super::GlowDevice) drives the GPU at runtime while
//! tests substitute a recording implementation and assert on the command
//! stream.

use glow::{Buffer, VertexArray};

use super::RenderResult;

/// GPU commands used by the loader and renderer
///
/// Targets, usages and modes are plain `glow` constants; the trait narrows
/// the call surface, not the argument vocabulary.
pub trait GlApi {
    /// Allocate a vertex array object
    fn create_vertex_array(&self) -> RenderResult<VertexArray>;

    /// Allocate a buffer object
    fn create_buffer(&self) -> RenderResult<Buffer>;

    /// Bind a vertex array, or unbind with `None`
    fn bind_vertex_array(&self, vertex_array: Option<VertexArray>);

    /// Bind a buffer to `target`, or unbind with `None`
    fn bind_buffer(&self, target: u32, buffer: Option<Buffer>);

    /// Upload `data` into the buffer bound at `target`
    fn buffer_data_u8_slice(&self, target: u32, data: &[u8], usage: u32);

    /// Describe the float attribute layout for slot `index`
    fn vertex_attrib_pointer_f32(
        &self,
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    );

    /// Enable the attribute slot `index`
    fn enable_vertex_attrib_array(&self, index: u32);

    /// Disable the attribute slot `index`
    fn disable_vertex_attrib_array(&self, index: u32);

    /// Draw indexed primitives from the bound vertex array
    fn draw_elements(&self, mode: u32, count: i32, element_type: u32, offset: i32);

    /// Set the clear color applied by [`clear`](Self::clear)
    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32);

    /// Clear the buffers selected by `mask`
    fn clear(&self, mask: u32);

    /// Enable depth testing
    fn enable_depth_test(&self);

    /// Delete a vertex array object
    fn delete_vertex_array(&self, vertex_array: VertexArray);

    /// Delete a buffer object
    fn delete_buffer(&self, buffer: Buffer);
}

/// Scoped vertex array binding
///
/// Binds on construction and restores "no vertex array bound" on drop, so
/// every exit path out of a draw leaves the binding clean.
pub struct VaoBinding<'a, G: GlApi> {
    gl: &'a G,
}

impl<'a, G: GlApi> VaoBinding<'a, G> {
    /// Bind `vertex_array` for the lifetime of the returned guard
    pub fn bind(gl: &'a G, vertex_array: VertexArray) -> Self {
        gl.bind_vertex_array(Some(vertex_array));
        Self { gl }
    }
}

impl<G: GlApi> Drop for VaoBinding<'_, G> {
    fn drop(&mut self) {
        self.gl.bind_vertex_array(None);
    }
}
