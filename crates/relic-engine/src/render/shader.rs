//! Shader compilation and program linking.
//!
//! Compile and link failures are logged with the driver's diagnostic. Under
//! [`ShaderFailurePolicy::Continue`] the program is still built and returned,
//! possibly unusable; [`ShaderFailurePolicy::FailFast`] turns the first failure
//! into a [`ShaderError`].

use std::rc::Rc;

use thiserror::Error;

use crate::device::{GlDevice, ShaderStage};

/// Maximum number of characters kept from a compile or link log.
pub const INFO_LOG_LIMIT: usize = 511;

const TRIFORCE_VERTEX: &str = r#"#version 330 core
layout (location = 0) in vec3 aPos;
void main()
{
    gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}
"#;

const TRIFORCE_FRAGMENT: &str = r#"#version 330 core
out vec4 FragColor;
void main()
{
    FragColor = vec4(1.0, 0.5, 0.2, 1.0);
}
"#;

/// GLSL sources for one vertex + fragment pair.
#[derive(Debug, Copy, Clone)]
pub struct ShaderSources<'a> {
    pub vertex: &'a str,
    pub fragment: &'a str,
}

impl ShaderSources<'static> {
    /// Pass-through positions, constant opaque orange fill.
    pub const TRIFORCE: ShaderSources<'static> = ShaderSources {
        vertex: TRIFORCE_VERTEX,
        fragment: TRIFORCE_FRAGMENT,
    };
}

/// What to do when a shader stage fails to compile or the program fails to link.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum ShaderFailurePolicy {
    /// Log the diagnostic and keep going with whatever the driver produced.
    #[default]
    Continue,
    /// Log the diagnostic and abort program creation.
    FailFast,
}

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error("Compilation of {} failed!\n{log}", .stage.label())]
    Compile { stage: ShaderStage, log: String },

    #[error("Linking of Shader Program failed!\n{log}")]
    Link { log: String },

    #[error("failed to allocate {what}!\n{detail}")]
    Allocation { what: &'static str, detail: String },
}

/// Outcome of one compile or link step.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct StageReport {
    pub success: bool,
    /// Driver diagnostic, at most [`INFO_LOG_LIMIT`] characters. Empty on success.
    pub log: String,
}

impl StageReport {
    fn passed() -> Self {
        Self {
            success: true,
            log: String::new(),
        }
    }

    fn failed(raw_log: &str) -> Self {
        Self {
            success: false,
            log: truncate_info_log(raw_log),
        }
    }
}

/// Reports for every step that produced a [`Program`].
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ProgramReport {
    pub vertex: StageReport,
    pub fragment: StageReport,
    pub link: StageReport,
}

impl ProgramReport {
    pub fn is_ok(&self) -> bool {
        self.vertex.success && self.fragment.success && self.link.success
    }
}

/// Keeps the first [`INFO_LOG_LIMIT`] characters of a driver log.
///
/// Trailing whitespace and NUL padding are dropped.
pub fn truncate_info_log(raw: &str) -> String {
    let kept: String = raw.chars().take(INFO_LOG_LIMIT).collect();
    kept.trim_end_matches(|c: char| c.is_whitespace() || c == '\0').to_string()
}

/// Intermediate shader object, deleted on drop.
struct ShaderObject<'d, D: GlDevice> {
    device: &'d D,
    raw: D::Shader,
}

impl<D: GlDevice> Drop for ShaderObject<'_, D> {
    fn drop(&mut self) {
        self.device.delete_shader(self.raw);
    }
}

fn compile_stage<'d, D: GlDevice>(
    device: &'d D,
    stage: ShaderStage,
    source: &str,
) -> Result<(ShaderObject<'d, D>, StageReport), ShaderError> {
    let raw = device
        .create_shader(stage)
        .map_err(|detail| ShaderError::Allocation {
            what: stage.label(),
            detail,
        })?;
    let shader = ShaderObject { device, raw };

    device.shader_source(raw, source);
    device.compile_shader(raw);

    let report = if device.shader_compile_status(raw) {
        StageReport::passed()
    } else {
        StageReport::failed(&device.shader_info_log(raw))
    };

    Ok((shader, report))
}

/// Applies the policy to a failed step: log and go on, or hand the error to
/// the caller, which reports it.
fn check_step(
    report: &StageReport,
    policy: ShaderFailurePolicy,
    error: impl FnOnce(String) -> ShaderError,
) -> Result<(), ShaderError> {
    if report.success {
        return Ok(());
    }

    let err = error(report.log.clone());
    match policy {
        ShaderFailurePolicy::Continue => {
            log::error!("OpenGL: Shader: {err}");
            Ok(())
        }
        ShaderFailurePolicy::FailFast => Err(err),
    }
}

/// Linked shader program, deleted on drop.
pub struct Program<D: GlDevice> {
    device: Rc<D>,
    raw: D::Program,
    report: ProgramReport,
}

impl<D: GlDevice> Program<D> {
    /// Compiles both stages and links them.
    ///
    /// The intermediate shader objects are released after the link step
    /// whatever its outcome.
    pub fn build(
        device: Rc<D>,
        sources: &ShaderSources<'_>,
        policy: ShaderFailurePolicy,
    ) -> Result<Self, ShaderError> {
        let gl = &*device;

        let (vertex, vertex_report) = compile_stage(gl, ShaderStage::Vertex, sources.vertex)?;
        check_step(&vertex_report, policy, |log| ShaderError::Compile {
            stage: ShaderStage::Vertex,
            log,
        })?;

        let (fragment, fragment_report) =
            compile_stage(gl, ShaderStage::Fragment, sources.fragment)?;
        check_step(&fragment_report, policy, |log| ShaderError::Compile {
            stage: ShaderStage::Fragment,
            log,
        })?;

        let raw = gl
            .create_program()
            .map_err(|detail| ShaderError::Allocation {
                what: "shader program",
                detail,
            })?;

        gl.attach_shader(raw, vertex.raw);
        gl.attach_shader(raw, fragment.raw);
        gl.link_program(raw);

        let link_report = if gl.program_link_status(raw) {
            StageReport::passed()
        } else {
            StageReport::failed(&gl.program_info_log(raw))
        };

        drop(vertex);
        drop(fragment);

        if let Err(err) = check_step(&link_report, policy, |log| ShaderError::Link { log }) {
            gl.delete_program(raw);
            return Err(err);
        }

        Ok(Self {
            device,
            raw,
            report: ProgramReport {
                vertex: vertex_report,
                fragment: fragment_report,
                link: link_report,
            },
        })
    }

    pub fn raw(&self) -> D::Program {
        self.raw
    }

    pub fn report(&self) -> &ProgramReport {
        &self.report
    }

    /// Makes this program current for subsequent draws.
    pub fn bind(&self) {
        self.device.use_program(Some(self.raw));
    }
}

impl<D: GlDevice> Drop for Program<D> {
    fn drop(&mut self) {
        self.device.delete_program(self.raw);
    }
}
