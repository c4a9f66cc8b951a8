//! Input subsystem.
//!
//! The frame loop only sees `FrameEvent`s; winit types stay in `platform`.

mod platform;
mod types;

pub use platform::translate_window_event;
pub use types::{FrameEvent, Key, KeyState};
