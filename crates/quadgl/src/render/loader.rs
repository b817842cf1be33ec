//! Mesh upload and GPU object lifecycle
//!
//! [`MeshLoader::upload`] moves vertex data into freshly allocated GPU
//! buffers; [`MeshLoader::release_all`] gives everything back. In between,
//! the [`BufferRegistry`] owns each allocated object: identifiers are
//! recorded the moment allocation succeeds and deleted exactly once when
//! the registry drains.

use super::gl::{GlApi, VaoBinding};
use super::mesh::MeshHandle;
use super::{RenderResult, POSITION_ATTRIBUTE};

/// Owned record of every GPU object the loader has allocated
///
/// An identifier enters the registry before it is first bound, so a failure
/// partway through an upload still leaves every allocated object reachable
/// for release. Draining deletes each identifier exactly once.
#[derive(Debug, Default)]
pub struct BufferRegistry {
    vertex_arrays: Vec<glow::VertexArray>,
    buffers: Vec<glow::Buffer>,
}

impl BufferRegistry {
    fn record_vertex_array(&mut self, vertex_array: glow::VertexArray) {
        self.vertex_arrays.push(vertex_array);
    }

    fn record_buffer(&mut self, buffer: glow::Buffer) {
        self.buffers.push(buffer);
    }

    /// Number of live vertex array objects
    pub fn vertex_array_count(&self) -> usize {
        self.vertex_arrays.len()
    }

    /// Number of live buffer objects
    pub fn buffer_count(&self) -> usize {
        self.buffers.len()
    }

    /// Whether the registry holds no live objects
    pub fn is_empty(&self) -> bool {
        self.vertex_arrays.is_empty() && self.buffers.is_empty()
    }

    fn release_all(&mut self, gl: &impl GlApi) {
        for vertex_array in self.vertex_arrays.drain(..) {
            gl.delete_vertex_array(vertex_array);
        }
        for buffer in self.buffers.drain(..) {
            gl.delete_buffer(buffer);
        }
    }
}

/// Uploads meshes into GPU buffers and owns the resulting objects
pub struct MeshLoader {
    registry: BufferRegistry,
}

impl MeshLoader {
    /// Create a loader with an empty registry
    pub fn new() -> Self {
        Self {
            registry: BufferRegistry::default(),
        }
    }

    /// Registry of objects currently owned by this loader
    pub fn registry(&self) -> &BufferRegistry {
        &self.registry
    }

    /// Upload one mesh and return a handle for drawing it
    ///
    /// `positions` holds tightly packed x,y,z coordinates, three per vertex,
    /// so its length must be a multiple of three; `indices` selects vertices
    /// in drawing order and fixes the handle's element count. Neither is
    /// validated here: an index outside the vertex range makes later draws
    /// undefined. Data is uploaded once with static usage and never touched
    /// again.
    pub fn upload(
        &mut self,
        gl: &impl GlApi,
        positions: &[f32],
        indices: &[u32],
    ) -> RenderResult<MeshHandle> {
        let vertex_array = gl.create_vertex_array()?;
        self.registry.record_vertex_array(vertex_array);

        {
            let _bound = VaoBinding::bind(gl, vertex_array);
            // The element array binding is part of vertex array state, so
            // the index buffer must be bound while the vertex array still is
            // and must stay bound when the vertex array is unbound.
            self.upload_index_buffer(gl, indices)?;
            self.upload_position_buffer(gl, positions)?;
        }

        log::debug!(
            "uploaded mesh: {} vertices, {} indices",
            positions.len() / 3,
            indices.len()
        );
        Ok(MeshHandle::new(vertex_array, indices.len()))
    }

    fn upload_index_buffer(&mut self, gl: &impl GlApi, indices: &[u32]) -> RenderResult<()> {
        let buffer = gl.create_buffer()?;
        self.registry.record_buffer(buffer);
        gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(buffer));
        gl.buffer_data_u8_slice(
            glow::ELEMENT_ARRAY_BUFFER,
            bytemuck::cast_slice(indices),
            glow::STATIC_DRAW,
        );
        Ok(())
    }

    fn upload_position_buffer(&mut self, gl: &impl GlApi, positions: &[f32]) -> RenderResult<()> {
        let buffer = gl.create_buffer()?;
        self.registry.record_buffer(buffer);
        gl.bind_buffer(glow::ARRAY_BUFFER, Some(buffer));
        gl.buffer_data_u8_slice(
            glow::ARRAY_BUFFER,
            bytemuck::cast_slice(positions),
            glow::STATIC_DRAW,
        );
        gl.vertex_attrib_pointer_f32(POSITION_ATTRIBUTE, 3, glow::FLOAT, false, 0, 0);
        gl.bind_buffer(glow::ARRAY_BUFFER, None);
        Ok(())
    }

    /// Delete every GPU object this loader has allocated
    ///
    /// Handles from this loader must not be drawn afterwards. Calling this
    /// again without further uploads releases nothing.
    pub fn release_all(&mut self, gl: &impl GlApi) {
        let vertex_arrays = self.registry.vertex_array_count();
        let buffers = self.registry.buffer_count();
        self.registry.release_all(gl);
        log::info!(
            "released {} vertex arrays and {} buffers",
            vertex_arrays,
            buffers
        );
    }
}

impl Default for MeshLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for MeshLoader {
    fn drop(&mut self) {
        // Deleting here is not possible without a GL handle, so a loader
        // that still owns objects can only report the leak.
        if !self.registry.is_empty() {
            log::warn!(
                "mesh loader dropped with {} vertex arrays and {} buffers still allocated",
                self.registry.vertex_array_count(),
                self.registry.buffer_count()
            );
        }
    }
}
