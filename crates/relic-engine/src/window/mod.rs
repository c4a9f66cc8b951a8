//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the GL window, and wires them to the frame loop.

mod placement;
mod runtime;

pub use placement::centered_position;
pub use runtime::{Runtime, RuntimeConfig};
