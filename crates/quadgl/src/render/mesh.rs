//! Mesh handles

/// Handle to a mesh uploaded to the GPU
///
/// Pairs the vertex array object with the number of index elements to draw.
/// Handles are cheap copies; the GPU objects behind them are owned by the
/// loader's registry and stay valid until `release_all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshHandle {
    vertex_array: glow::VertexArray,
    element_count: usize,
}

impl MeshHandle {
    pub(crate) fn new(vertex_array: glow::VertexArray, element_count: usize) -> Self {
        Self {
            vertex_array,
            element_count,
        }
    }

    /// Vertex array object backing this mesh
    pub fn vertex_array(&self) -> glow::VertexArray {
        self.vertex_array
    }

    /// Number of index elements drawn for this mesh
    pub fn element_count(&self) -> usize {
        self.element_count
    }
}
