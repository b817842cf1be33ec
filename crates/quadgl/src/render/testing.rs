//! Recording GL fake for tests
//!
//! Implements [`GlApi`] by logging every call and tracking the vertex array
//! binding a real driver would hold. Tests drive the loader and renderer
//! against it and assert on the exact command stream, no context required.
//! Handles are fabricated from a counter starting at 1.

use std::cell::{Cell, RefCell};
use std::num::NonZeroU32;

use glow::{Buffer, VertexArray};

use super::gl::GlApi;
use super::{RenderError, RenderResult};

/// One recorded GL call
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateVertexArray(VertexArray),
    CreateBuffer(Buffer),
    BindVertexArray(Option<VertexArray>),
    BindBuffer(u32, Option<Buffer>),
    BufferData {
        target: u32,
        byte_len: usize,
        usage: u32,
    },
    VertexAttribPointer {
        index: u32,
        size: i32,
        data_type: u32,
        normalized: bool,
        stride: i32,
        offset: i32,
    },
    EnableVertexAttribArray(u32),
    DisableVertexAttribArray(u32),
    DrawElements {
        mode: u32,
        count: i32,
        element_type: u32,
        offset: i32,
    },
    ClearColor(f32, f32, f32, f32),
    Clear(u32),
    EnableDepthTest,
    DeleteVertexArray(VertexArray),
    DeleteBuffer(Buffer),
}

/// Recording [`GlApi`] implementation
pub struct RecordingGl {
    calls: RefCell<Vec<Call>>,
    bound_vertex_array: Cell<Option<VertexArray>>,
    next_id: Cell<u32>,
    creates: Cell<u32>,
    fail_create_at: Option<u32>,
}

impl RecordingGl {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            bound_vertex_array: Cell::new(None),
            next_id: Cell::new(1),
            creates: Cell::new(0),
            fail_create_at: None,
        }
    }

    /// Like [`new`](Self::new), but the `n`-th create call (1-based,
    /// counting vertex arrays and buffers together) fails
    pub fn failing_create(n: u32) -> Self {
        Self {
            fail_create_at: Some(n),
            ..Self::new()
        }
    }

    /// Every call recorded so far, in order
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Vertex array currently bound, as a driver would see it
    pub fn bound_vertex_array(&self) -> Option<VertexArray> {
        self.bound_vertex_array.get()
    }

    /// Vertex arrays deleted so far, in deletion order
    pub fn deleted_vertex_arrays(&self) -> Vec<VertexArray> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::DeleteVertexArray(vertex_array) => Some(*vertex_array),
                _ => None,
            })
            .collect()
    }

    /// Buffers deleted so far, in deletion order
    pub fn deleted_buffers(&self) -> Vec<Buffer> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::DeleteBuffer(buffer) => Some(*buffer),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn create_should_fail(&self) -> bool {
        let n = self.creates.get() + 1;
        self.creates.set(n);
        self.fail_create_at == Some(n)
    }

    fn next_handle(&self) -> NonZeroU32 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        NonZeroU32::new(id).unwrap()
    }
}

impl Default for RecordingGl {
    fn default() -> Self {
        Self::new()
    }
}

impl GlApi for RecordingGl {
    fn create_vertex_array(&self) -> RenderResult<VertexArray> {
        if self.create_should_fail() {
            return Err(RenderError::CreateVertexArray("simulated".to_string()));
        }
        let vertex_array = glow::NativeVertexArray(self.next_handle());
        self.record(Call::CreateVertexArray(vertex_array));
        Ok(vertex_array)
    }

    fn create_buffer(&self) -> RenderResult<Buffer> {
        if self.create_should_fail() {
            return Err(RenderError::CreateBuffer("simulated".to_string()));
        }
        let buffer = glow::NativeBuffer(self.next_handle());
        self.record(Call::CreateBuffer(buffer));
        Ok(buffer)
    }

    fn bind_vertex_array(&self, vertex_array: Option<VertexArray>) {
        self.bound_vertex_array.set(vertex_array);
        self.record(Call::BindVertexArray(vertex_array));
    }

    fn bind_buffer(&self, target: u32, buffer: Option<Buffer>) {
        self.record(Call::BindBuffer(target, buffer));
    }

    fn buffer_data_u8_slice(&self, target: u32, data: &[u8], usage: u32) {
        self.record(Call::BufferData {
            target,
            byte_len: data.len(),
            usage,
        });
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
        self.record(Call::VertexAttribPointer {
            index,
            size,
            data_type,
            normalized,
            stride,
            offset,
        });
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.record(Call::EnableVertexAttribArray(index));
    }

    fn disable_vertex_attrib_array(&self, index: u32) {
        self.record(Call::DisableVertexAttribArray(index));
    }

    fn draw_elements(&self, mode: u32, count: i32, element_type: u32, offset: i32) {
        self.record(Call::DrawElements {
            mode,
            count,
            element_type,
            offset,
        });
    }

    fn clear_color(&self, red: f32, green: f32, blue: f32, alpha: f32) {
        self.record(Call::ClearColor(red, green, blue, alpha));
    }

    fn clear(&self, mask: u32) {
        self.record(Call::Clear(mask));
    }

    fn enable_depth_test(&self) {
        self.record(Call::EnableDepthTest);
    }

    fn delete_vertex_array(&self, vertex_array: VertexArray) {
        self.record(Call::DeleteVertexArray(vertex_array));
    }

    fn delete_buffer(&self, buffer: Buffer) {
        self.record(Call::DeleteBuffer(buffer));
    }
}
