use std::rc::Rc;

use crate::device::{BufferTarget, GlDevice, Primitive, VertexAttrib};
use crate::error::BootstrapError;

/// Three-component float position.
pub type Position = [f32; 3];

/// Corner and edge-midpoint positions of the triforce, in clip space.
#[rustfmt::skip]
pub const TRIFORCE_VERTICES: [Position; 6] = [
    [-0.5,  -0.5, 0.0],
    [ 0.0,  -0.5, 0.0],
    [-0.25,  0.0, 0.0],
    [ 0.5,  -0.5, 0.0],
    [ 0.25,  0.0, 0.0],
    [ 0.0,   0.5, 0.0],
];

/// Three triangles: bottom-left, bottom-right, top.
#[rustfmt::skip]
pub const TRIFORCE_INDICES: [u32; 9] = [
    0, 2, 1,
    1, 4, 3,
    2, 5, 4,
];

/// Attribute 0: tightly packed `vec3` positions.
pub const POSITION_ATTRIB: VertexAttrib = VertexAttrib {
    location: 0,
    components: 3,
    stride: std::mem::size_of::<Position>() as i32,
    offset: 0,
};

/// CPU-side indexed geometry.
#[derive(Debug, Copy, Clone)]
pub struct MeshData<'a> {
    pub vertices: &'a [Position],
    pub indices: &'a [u32],
}

impl MeshData<'static> {
    pub const TRIFORCE: MeshData<'static> = MeshData {
        vertices: &TRIFORCE_VERTICES,
        indices: &TRIFORCE_INDICES,
    };
}

fn allocation_failed(what: &'static str) -> impl FnOnce(String) -> BootstrapError {
    move |detail| BootstrapError::Resource { what, detail }
}

/// Vertex array + vertex buffer + index buffer, deleted on drop.
pub struct Mesh<D: GlDevice> {
    device: Rc<D>,
    vertex_array: D::VertexArray,
    vertex_buffer: D::Buffer,
    index_buffer: D::Buffer,
    index_count: i32,
}

impl<D: GlDevice> Mesh<D> {
    /// Uploads `data` as static draw data and records the position layout in a
    /// fresh vertex array.
    ///
    /// Leaves no buffer or vertex array bound.
    pub fn upload(device: Rc<D>, data: &MeshData<'_>) -> Result<Self, BootstrapError> {
        let gl = &*device;

        let vertex_array = gl
            .create_vertex_array()
            .map_err(allocation_failed("vertex array"))?;
        let vertex_buffer = match gl.create_buffer() {
            Ok(buffer) => buffer,
            Err(detail) => {
                gl.delete_vertex_array(vertex_array);
                return Err(allocation_failed("vertex buffer")(detail));
            }
        };
        let index_buffer = match gl.create_buffer() {
            Ok(buffer) => buffer,
            Err(detail) => {
                gl.delete_buffer(vertex_buffer);
                gl.delete_vertex_array(vertex_array);
                return Err(allocation_failed("index buffer")(detail));
            }
        };

        gl.bind_vertex_array(Some(vertex_array));

        gl.bind_buffer(BufferTarget::Array, Some(vertex_buffer));
        gl.buffer_data_static(BufferTarget::Array, bytemuck::cast_slice(data.vertices));

        // The element binding is part of vertex array state and must stay bound.
        gl.bind_buffer(BufferTarget::ElementArray, Some(index_buffer));
        gl.buffer_data_static(BufferTarget::ElementArray, bytemuck::cast_slice(data.indices));

        gl.vertex_attrib_pointer_f32(POSITION_ATTRIB);
        gl.enable_vertex_attrib_array(POSITION_ATTRIB.location);

        gl.bind_buffer(BufferTarget::Array, None);
        gl.bind_vertex_array(None);

        log::debug!(
            "uploaded mesh: {} vertices, {} indices",
            data.vertices.len(),
            data.indices.len()
        );

        let index_count = data.indices.len() as i32;
        Ok(Self {
            device,
            vertex_array,
            vertex_buffer,
            index_buffer,
            index_count,
        })
    }

    /// Binds the vertex array and issues one indexed triangle draw.
    pub fn draw(&self) {
        self.device.bind_vertex_array(Some(self.vertex_array));
        self.device
            .draw_elements_u32(Primitive::Triangles, self.index_count, 0);
    }
}

impl<D: GlDevice> Drop for Mesh<D> {
    fn drop(&mut self) {
        self.device.delete_vertex_array(self.vertex_array);
        self.device.delete_buffer(self.vertex_buffer);
        self.device.delete_buffer(self.index_buffer);
    }
}
