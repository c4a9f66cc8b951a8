use std::fmt::Debug;

use crate::render::Color;

/// Programmable pipeline stage a shader object belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// Human-readable stage name used in diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            ShaderStage::Vertex => "Vertex Shader",
            ShaderStage::Fragment => "Fragment Shader",
        }
    }
}

/// Buffer binding point.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BufferTarget {
    /// `GL_ARRAY_BUFFER`: per-vertex data.
    Array,
    /// `GL_ELEMENT_ARRAY_BUFFER`: index data, captured by the bound vertex array.
    ElementArray,
}

/// Primitive assembly mode for draw calls.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Primitive {
    Triangles,
}

/// Float vertex attribute layout (`glVertexAttribPointer` with `GL_FLOAT`, not normalized).
///
/// `stride` and `offset` are in bytes.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct VertexAttrib {
    pub location: u32,
    pub components: i32,
    pub stride: i32,
    pub offset: i32,
}

/// The GL operations this crate issues.
///
/// Every method assumes the implementation's context is current on the calling
/// thread. Object handles are plain copyable names; ownership is tracked by
/// the wrappers in [`crate::render`].
pub trait GlDevice {
    type Shader: Copy + Eq + Debug;
    type Program: Copy + Eq + Debug;
    type VertexArray: Copy + Eq + Debug;
    type Buffer: Copy + Eq + Debug;

    fn create_shader(&self, stage: ShaderStage) -> Result<Self::Shader, String>;
    fn shader_source(&self, shader: Self::Shader, source: &str);
    fn compile_shader(&self, shader: Self::Shader);
    fn shader_compile_status(&self, shader: Self::Shader) -> bool;
    fn shader_info_log(&self, shader: Self::Shader) -> String;
    fn delete_shader(&self, shader: Self::Shader);

    fn create_program(&self) -> Result<Self::Program, String>;
    fn attach_shader(&self, program: Self::Program, shader: Self::Shader);
    fn link_program(&self, program: Self::Program);
    fn program_link_status(&self, program: Self::Program) -> bool;
    fn program_info_log(&self, program: Self::Program) -> String;
    fn use_program(&self, program: Option<Self::Program>);
    fn delete_program(&self, program: Self::Program);

    fn create_vertex_array(&self) -> Result<Self::VertexArray, String>;
    fn bind_vertex_array(&self, vertex_array: Option<Self::VertexArray>);
    fn delete_vertex_array(&self, vertex_array: Self::VertexArray);

    fn create_buffer(&self) -> Result<Self::Buffer, String>;
    fn bind_buffer(&self, target: BufferTarget, buffer: Option<Self::Buffer>);
    /// Uploads `data` to the buffer bound at `target` with `GL_STATIC_DRAW` usage.
    fn buffer_data_static(&self, target: BufferTarget, data: &[u8]);
    fn delete_buffer(&self, buffer: Self::Buffer);

    fn vertex_attrib_pointer_f32(&self, attrib: VertexAttrib);
    fn enable_vertex_attrib_array(&self, location: u32);

    fn set_clear_color(&self, color: Color);
    fn clear_color_buffer(&self);
    fn viewport(&self, x: i32, y: i32, width: i32, height: i32);
    /// Indexed draw with `GL_UNSIGNED_INT` indices; `offset` is in bytes.
    fn draw_elements_u32(&self, primitive: Primitive, count: i32, offset: i32);
}
