//! OpenGL resources and drawing.
//!
//! Everything here is generic over [`crate::device::GlDevice`]; GL objects are
//! owned by wrapper types that release them on drop.

mod color;
mod geometry;
mod scene;
mod shader;

pub use crate::device::ShaderStage;
pub use color::Color;
pub use geometry::{Mesh, MeshData, Position, POSITION_ATTRIB, TRIFORCE_INDICES, TRIFORCE_VERTICES};
pub use scene::{Scene, BACKGROUND};
pub use shader::{
    truncate_info_log, Program, ProgramReport, ShaderError, ShaderFailurePolicy, ShaderSources,
    StageReport, INFO_LOG_LIMIT,
};
