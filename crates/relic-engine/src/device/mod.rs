//! OpenGL device layer.
//!
//! - `GlDevice`: the narrow set of GL calls the renderer issues
//! - `GlContext`: window + glutin context/surface + loaded `glow` function table

mod api;
mod context;
mod glow_device;
#[cfg(test)]
pub(crate) mod recording;

pub use api::{BufferTarget, GlDevice, Primitive, ShaderStage, VertexAttrib};
pub use context::{
    first_missing_entry_point, surface_size, GlContext, GlInit, REQUIRED_ENTRY_POINTS,
};
