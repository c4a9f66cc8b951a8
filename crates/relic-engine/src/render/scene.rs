use std::rc::Rc;

use crate::device::GlDevice;
use crate::error::BootstrapError;

use super::color::Color;
use super::geometry::{Mesh, MeshData};
use super::shader::{Program, ProgramReport, ShaderFailurePolicy, ShaderSources};

/// Background clear color.
pub const BACKGROUND: Color = Color::new(0.4, 0.8, 0.8, 1.0);

/// The one-time GPU setup and the fixed per-frame draw.
///
/// Fields drop in declaration order, program before mesh.
pub struct Scene<D: GlDevice> {
    program: Program<D>,
    mesh: Mesh<D>,
    device: Rc<D>,
    clear_color: Color,
}

impl<D: GlDevice> Scene<D> {
    /// Builds the shader program, then uploads the mesh.
    pub fn new(
        device: Rc<D>,
        sources: &ShaderSources<'_>,
        mesh: &MeshData<'_>,
        clear_color: Color,
        policy: ShaderFailurePolicy,
    ) -> Result<Self, BootstrapError> {
        let program = Program::build(device.clone(), sources, policy)?;
        let mesh = Mesh::upload(device.clone(), mesh)?;

        Ok(Self {
            program,
            mesh,
            device,
            clear_color,
        })
    }

    /// Triforce shaders and geometry over `clear_color`.
    pub fn triforce(
        device: Rc<D>,
        clear_color: Color,
        policy: ShaderFailurePolicy,
    ) -> Result<Self, BootstrapError> {
        Self::new(
            device,
            &ShaderSources::TRIFORCE,
            &MeshData::TRIFORCE,
            clear_color,
            policy,
        )
    }

    pub fn shader_report(&self) -> &ProgramReport {
        self.program.report()
    }

    /// Clears the color buffer and draws the mesh with the program.
    ///
    /// Issues the same calls every time; nothing is mutated.
    pub fn draw(&self) {
        self.device.set_clear_color(self.clear_color);
        self.device.clear_color_buffer();

        self.program.bind();
        self.mesh.draw();
    }
}
