//! Relic engine crate.
//!
//! Opens a window with an OpenGL 3.3 core context, sets up a fixed shader
//! program and mesh, and redraws it until the user quits.

pub mod core;
pub mod device;
pub mod error;
pub mod input;
pub mod logging;
pub mod render;
pub mod window;

pub use error::{exit_code, BootstrapError, PresentError, EXIT_INIT_FAILURE};
