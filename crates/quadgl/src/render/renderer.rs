//! Frame preparation and mesh drawing

use super::gl::{GlApi, VaoBinding};
use super::mesh::MeshHandle;
use super::POSITION_ATTRIBUTE;

/// Clear color for every frame, opaque red
pub const CLEAR_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

/// Draws meshes that a [`MeshLoader`](super::MeshLoader) has uploaded
///
/// A frame is `prepare_frame`, any number of `draw` calls, then
/// `finish_frame` once the swapped image is on screen.
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    /// Create a renderer
    pub fn new() -> Self {
        Self
    }

    /// Set the fixed clear color for the upcoming frame
    ///
    /// Only the color state changes here; the actual clear is issued by
    /// [`finish_frame`](Self::finish_frame).
    pub fn prepare_frame(&self, gl: &impl GlApi) {
        gl.clear_color(CLEAR_COLOR[0], CLEAR_COLOR[1], CLEAR_COLOR[2], CLEAR_COLOR[3]);
    }

    /// Draw `mesh` as an indexed triangle list
    ///
    /// The mesh's vertex array is bound only for the duration of this call;
    /// afterwards no vertex array is bound. The handle must come from a
    /// loader whose objects have not been released.
    pub fn draw(&self, gl: &impl GlApi, mesh: &MeshHandle) {
        let _bound = VaoBinding::bind(gl, mesh.vertex_array());
        gl.enable_vertex_attrib_array(POSITION_ATTRIBUTE);
        gl.draw_elements(
            glow::TRIANGLES,
            mesh.element_count() as i32,
            glow::UNSIGNED_INT,
            0,
        );
        gl.disable_vertex_attrib_array(POSITION_ATTRIBUTE);
    }

    /// Clear the color and depth buffers
    ///
    /// Runs after the buffer swap, so it primes the back buffer the next
    /// frame draws into.
    pub fn finish_frame(&self, gl: &impl GlApi) {
        gl.clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT);
    }
}
