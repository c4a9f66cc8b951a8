use crate::input::{FrameEvent, Key, KeyState};

/// Frame loop state. `Closing` is terminal.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum LoopState {
    #[default]
    Running,
    Closing,
}

impl LoopState {
    /// Next state after `event`.
    ///
    /// Quit and an Escape key press close the loop; everything else keeps the
    /// current state.
    pub fn next(self, event: &FrameEvent) -> LoopState {
        match (self, event) {
            (LoopState::Closing, _) => LoopState::Closing,
            (_, FrameEvent::Quit) => LoopState::Closing,
            (
                _,
                FrameEvent::Key {
                    key: Key::Escape,
                    state: KeyState::Pressed,
                    ..
                },
            ) => LoopState::Closing,
            (state, _) => state,
        }
    }

    pub fn is_running(self) -> bool {
        self == LoopState::Running
    }
}
