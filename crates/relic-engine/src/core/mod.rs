//! Frame loop state machine.
//!
//! Platform-independent: the runtime feeds translated events in and presents
//! whatever `FrameLoop::dispatch` asks for.

mod frame_loop;
mod loop_state;

pub use frame_loop::{FrameAction, FrameLoop};
pub use loop_state::LoopState;
