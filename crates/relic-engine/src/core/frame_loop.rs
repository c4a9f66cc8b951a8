use crate::device::GlDevice;
use crate::input::FrameEvent;
use crate::render::Scene;

use super::loop_state::LoopState;

/// What the runtime must do after handing one event to the loop.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FrameAction {
    /// Nothing was drawn and the loop keeps running.
    Idle,
    /// A frame was drawn; present it.
    Present,
    /// The loop is closing; leave the event loop.
    Exit,
}

/// Loop state plus the scene it draws while running.
pub struct FrameLoop<D: GlDevice> {
    state: LoopState,
    scene: Scene<D>,
    frames: u64,
}

impl<D: GlDevice> FrameLoop<D> {
    pub fn new(scene: Scene<D>) -> Self {
        Self {
            state: LoopState::Running,
            scene,
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn scene(&self) -> &Scene<D> {
        &self.scene
    }

    /// Number of frames drawn so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Applies `event`, then draws if it asked for a frame and the loop is
    /// still running.
    pub fn dispatch(&mut self, event: &FrameEvent) -> FrameAction {
        if self.handle_event(event) == LoopState::Closing {
            return FrameAction::Exit;
        }

        if *event == FrameEvent::Redraw && self.redraw() {
            FrameAction::Present
        } else {
            FrameAction::Idle
        }
    }

    fn handle_event(&mut self, event: &FrameEvent) -> LoopState {
        let next = self.state.next(event);
        if next != self.state {
            log::debug!("frame loop {:?} -> {:?} on {event:?}", self.state, next);
        }
        self.state = next;
        next
    }

    fn redraw(&mut self) -> bool {
        if !self.state.is_running() {
            return false;
        }
        self.scene.draw();
        self.frames = self.frames.wrapping_add(1);
        true
    }
}
