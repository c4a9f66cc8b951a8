//! Fatal bootstrap errors and their process exit status.

use std::process::ExitCode;

use thiserror::Error;

use crate::render::ShaderError;

/// Exit status reported for any initialization failure (`-1` as an 8-bit status).
pub const EXIT_INIT_FAILURE: u8 = 255;

/// Failures that stop the program before (or instead of) the frame loop.
///
/// The display form is `<subsystem>: <message>` followed by the platform
/// detail on the next line, so a single `log::error!` produces the whole
/// diagnostic.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Video: failed to initialize!\n{0}")]
    Video(#[source] winit::error::EventLoopError),

    #[error("Window: failed to create a new window!\n{0}")]
    Window(String),

    #[error("Context: failed to create the OpenGL context!\n{0}")]
    Context(String),

    #[error("Loader: failed to initialize!\nmissing entry point `{0}`")]
    Loader(String),

    #[error("OpenGL: failed to allocate {what}!\n{detail}")]
    Resource { what: &'static str, detail: String },

    #[error("OpenGL: Shader: {0}")]
    Shader(#[from] ShaderError),

    #[error("Runtime: event loop terminated with error!\n{0:#}")]
    Runtime(anyhow::Error),
}

impl BootstrapError {
    /// Subsystem tag that prefixes the diagnostic line.
    pub fn subsystem(&self) -> &'static str {
        match self {
            BootstrapError::Video(_) => "Video",
            BootstrapError::Window(_) => "Window",
            BootstrapError::Context(_) => "Context",
            BootstrapError::Loader(_) => "Loader",
            BootstrapError::Resource { .. } | BootstrapError::Shader(_) => "OpenGL",
            BootstrapError::Runtime(_) => "Runtime",
        }
    }
}

/// A frame could not be presented.
///
/// Not fatal: the runtime logs it and keeps drawing.
#[derive(Debug, Error)]
#[error("Context: failed to present the frame!\n{0}")]
pub struct PresentError(pub String);

/// Maps the outcome of [`crate::window::Runtime::run`] to a process exit status.
pub fn exit_code(result: &Result<(), BootstrapError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::from(EXIT_INIT_FAILURE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::ShaderStage;

    #[test]
    fn every_fatal_variant_starts_with_its_subsystem() {
        let errors = [
            BootstrapError::Window("no compositor".into()),
            BootstrapError::Context("no matching config".into()),
            BootstrapError::Loader("glCreateShader".into()),
            BootstrapError::Resource {
                what: "vertex array",
                detail: "out of names".into(),
            },
            BootstrapError::Shader(ShaderError::Compile {
                stage: ShaderStage::Vertex,
                log: "0:1: syntax error".into(),
            }),
            BootstrapError::Runtime(anyhow::anyhow!("os error")),
        ];

        for err in &errors {
            let text = err.to_string();
            assert!(
                text.starts_with(&format!("{}: ", err.subsystem())),
                "{text:?} does not start with {}",
                err.subsystem()
            );
        }
    }

    #[test]
    fn diagnostic_is_headline_plus_detail() {
        let err = BootstrapError::Window("wayland: connection refused".into());
        let text = err.to_string();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Window: failed to create a new window!"));
        assert_eq!(lines.next(), Some("wayland: connection refused"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn present_failure_has_its_own_headline() {
        let text = PresentError("EGL_BAD_SURFACE".into()).to_string();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Context: failed to present the frame!"));
        assert_eq!(lines.next(), Some("EGL_BAD_SURFACE"));
        assert!(!text.contains("create"));
    }

    #[test]
    fn failure_maps_to_nonzero_exit() {
        let failed: Result<(), BootstrapError> = Err(BootstrapError::Loader("glDrawElements".into()));
        assert_eq!(exit_code(&failed), ExitCode::from(EXIT_INIT_FAILURE));
        assert_ne!(exit_code(&failed), ExitCode::SUCCESS);
        assert_eq!(exit_code(&Ok(())), ExitCode::SUCCESS);
    }
}
