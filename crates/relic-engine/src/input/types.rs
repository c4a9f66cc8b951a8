/// Keyboard key identifier.
///
/// Only keys the runtime reacts to get a variant; everything else maps to
/// `Key::Unknown` with the platform key code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Platform-agnostic events seen by the frame loop.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameEvent {
    /// The user asked to close the window, or it is gone.
    Quit,

    Key {
        key: Key,
        state: KeyState,
        /// True when event is a key-repeat.
        repeat: bool,
    },

    /// New framebuffer size in physical pixels.
    Resized { width: u32, height: u32 },

    /// The platform wants a new frame.
    Redraw,

    /// Anything the loop does not care about.
    Other,
}

impl FrameEvent {
    pub fn key_down(key: Key) -> Self {
        FrameEvent::Key {
            key,
            state: KeyState::Pressed,
            repeat: false,
        }
    }
}
