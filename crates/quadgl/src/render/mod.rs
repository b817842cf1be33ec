//! Rendering system
//!
//! The pieces split along the upload/draw boundary: [`MeshLoader`] moves
//! vertex data into GPU buffers and owns the resulting objects through its
//! [`BufferRegistry`], while [`Renderer`] draws previously uploaded meshes.
//! Both talk to the GPU through the [`GlApi`] seam so their command streams
//! can be tested without a context.

pub mod device;
pub mod gl;
pub mod loader;
pub mod mesh;
pub mod renderer;

#[cfg(test)]
pub(crate) mod testing;

pub use device::GlowDevice;
pub use gl::{GlApi, VaoBinding};
pub use loader::{BufferRegistry, MeshLoader};
pub use mesh::MeshHandle;
pub use renderer::Renderer;

use thiserror::Error;

/// Vertex attribute slot carrying positions
pub const POSITION_ATTRIBUTE: u32 = 0;

/// Rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// Vertex array allocation failed
    #[error("Vertex array allocation failed: {0}")]
    CreateVertexArray(String),

    /// Buffer allocation failed
    #[error("Buffer allocation failed: {0}")]
    CreateBuffer(String),
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
