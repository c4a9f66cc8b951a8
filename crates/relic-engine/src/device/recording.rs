//! Test-only `GlDevice` that records calls instead of talking to a driver.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::render::Color;

use super::api::{BufferTarget, GlDevice, Primitive, ShaderStage, VertexAttrib};

/// Every GL call issued through a [`RecordingDevice`], in order.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    CreateShader(ShaderStage, u32),
    ShaderSource(u32),
    CompileShader(u32),
    DeleteShader(u32),
    CreateProgram(u32),
    AttachShader(u32, u32),
    LinkProgram(u32),
    UseProgram(Option<u32>),
    DeleteProgram(u32),
    CreateVertexArray(u32),
    BindVertexArray(Option<u32>),
    DeleteVertexArray(u32),
    CreateBuffer(u32),
    BindBuffer(BufferTarget, Option<u32>),
    BufferData(BufferTarget, Vec<u8>),
    DeleteBuffer(u32),
    VertexAttribPointer(VertexAttrib),
    EnableVertexAttribArray(u32),
    SetClearColor(Color),
    ClearColorBuffer,
    Viewport(i32, i32, i32, i32),
    DrawElements(Primitive, i32, i32),
}

/// Diagnostic the fake compiler emits for a broken source. Deliberately longer
/// than the 511 characters kept by the shader module.
pub(crate) fn syntax_error_log() -> String {
    "0:4(1): error: syntax error, unexpected end of file, expecting '}'\n".repeat(12)
}

/// Records GL calls and fakes compile/link results.
///
/// A source "compiles" when it declares a `#version` and its braces balance.
/// A program links when every attached shader compiled.
#[derive(Default)]
pub(crate) struct RecordingDevice {
    calls: RefCell<Vec<Call>>,
    next_name: Cell<u32>,
    sources: RefCell<HashMap<u32, String>>,
    compiled: RefCell<HashMap<u32, bool>>,
    attached: RefCell<HashMap<u32, Vec<u32>>>,
    linked: RefCell<HashMap<u32, bool>>,
    out_of_names: bool,
}

impl RecordingDevice {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// A device whose object allocations all fail.
    pub(crate) fn out_of_names() -> Self {
        Self {
            out_of_names: true,
            ..Self::default()
        }
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub(crate) fn take_calls(&self) -> Vec<Call> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    pub(crate) fn draw_calls(&self) -> Vec<Call> {
        self.calls
            .borrow()
            .iter()
            .filter(|c| matches!(c, Call::DrawElements(..)))
            .cloned()
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn allocate(&self) -> Result<u32, String> {
        if self.out_of_names {
            return Err("GL_OUT_OF_MEMORY".to_string());
        }
        let name = self.next_name.get() + 1;
        self.next_name.set(name);
        Ok(name)
    }
}

fn fake_compile(source: &str) -> bool {
    let opens = source.matches('{').count();
    let closes = source.matches('}').count();
    source.trim_start().starts_with("#version") && opens == closes
}

impl GlDevice for RecordingDevice {
    type Shader = u32;
    type Program = u32;
    type VertexArray = u32;
    type Buffer = u32;

    fn create_shader(&self, stage: ShaderStage) -> Result<u32, String> {
        let name = self.allocate()?;
        self.record(Call::CreateShader(stage, name));
        Ok(name)
    }

    fn shader_source(&self, shader: u32, source: &str) {
        self.sources.borrow_mut().insert(shader, source.to_string());
        self.record(Call::ShaderSource(shader));
    }

    fn compile_shader(&self, shader: u32) {
        let ok = self
            .sources
            .borrow()
            .get(&shader)
            .is_some_and(|src| fake_compile(src));
        self.compiled.borrow_mut().insert(shader, ok);
        self.record(Call::CompileShader(shader));
    }

    fn shader_compile_status(&self, shader: u32) -> bool {
        self.compiled.borrow().get(&shader).copied().unwrap_or(false)
    }

    fn shader_info_log(&self, shader: u32) -> String {
        if self.shader_compile_status(shader) {
            String::new()
        } else {
            syntax_error_log()
        }
    }

    fn delete_shader(&self, shader: u32) {
        self.record(Call::DeleteShader(shader));
    }

    fn create_program(&self) -> Result<u32, String> {
        let name = self.allocate()?;
        self.record(Call::CreateProgram(name));
        Ok(name)
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        self.attached.borrow_mut().entry(program).or_default().push(shader);
        self.record(Call::AttachShader(program, shader));
    }

    fn link_program(&self, program: u32) {
        let compiled = self.compiled.borrow();
        let ok = self.attached.borrow().get(&program).is_some_and(|shaders| {
            !shaders.is_empty() && shaders.iter().all(|s| compiled.get(s).copied().unwrap_or(false))
        });
        self.linked.borrow_mut().insert(program, ok);
        self.record(Call::LinkProgram(program));
    }

    fn program_link_status(&self, program: u32) -> bool {
        self.linked.borrow().get(&program).copied().unwrap_or(false)
    }

    fn program_info_log(&self, program: u32) -> String {
        if self.program_link_status(program) {
            String::new()
        } else {
            "error: linking with uncompiled/unspecialized shader".to_string()
        }
    }

    fn use_program(&self, program: Option<u32>) {
        self.record(Call::UseProgram(program));
    }

    fn delete_program(&self, program: u32) {
        self.record(Call::DeleteProgram(program));
    }

    fn create_vertex_array(&self) -> Result<u32, String> {
        let name = self.allocate()?;
        self.record(Call::CreateVertexArray(name));
        Ok(name)
    }

    fn bind_vertex_array(&self, vertex_array: Option<u32>) {
        self.record(Call::BindVertexArray(vertex_array));
    }

    fn delete_vertex_array(&self, vertex_array: u32) {
        self.record(Call::DeleteVertexArray(vertex_array));
    }

    fn create_buffer(&self) -> Result<u32, String> {
        let name = self.allocate()?;
        self.record(Call::CreateBuffer(name));
        Ok(name)
    }

    fn bind_buffer(&self, target: BufferTarget, buffer: Option<u32>) {
        self.record(Call::BindBuffer(target, buffer));
    }

    fn buffer_data_static(&self, target: BufferTarget, data: &[u8]) {
        self.record(Call::BufferData(target, data.to_vec()));
    }

    fn delete_buffer(&self, buffer: u32) {
        self.record(Call::DeleteBuffer(buffer));
    }

    fn vertex_attrib_pointer_f32(&self, attrib: VertexAttrib) {
        self.record(Call::VertexAttribPointer(attrib));
    }

    fn enable_vertex_attrib_array(&self, location: u32) {
        self.record(Call::EnableVertexAttribArray(location));
    }

    fn set_clear_color(&self, color: Color) {
        self.record(Call::SetClearColor(color));
    }

    fn clear_color_buffer(&self) {
        self.record(Call::ClearColorBuffer);
    }

    fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.record(Call::Viewport(x, y, width, height));
    }

    fn draw_elements_u32(&self, primitive: Primitive, count: i32, offset: i32) {
        self.record(Call::DrawElements(primitive, count, offset));
    }
}
