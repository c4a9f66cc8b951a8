use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::types::{FrameEvent, Key, KeyState};

/// Translates a winit `WindowEvent` into a `FrameEvent`.
pub fn translate_window_event(event: &WindowEvent) -> FrameEvent {
    match event {
        WindowEvent::CloseRequested | WindowEvent::Destroyed => FrameEvent::Quit,

        WindowEvent::KeyboardInput { event, .. } => {
            let state = match event.state {
                ElementState::Pressed => KeyState::Pressed,
                ElementState::Released => KeyState::Released,
            };

            FrameEvent::Key {
                key: map_key(event.physical_key),
                state,
                repeat: event.repeat,
            }
        }

        WindowEvent::Resized(size) => FrameEvent::Resized {
            width: size.width,
            height: size.height,
        },

        WindowEvent::RedrawRequested => FrameEvent::Redraw,

        _ => FrameEvent::Other,
    }
}

pub(crate) fn map_key(pk: PhysicalKey) -> Key {
    match pk {
        PhysicalKey::Code(code) => match code {
            KeyCode::Escape => Key::Escape,
            other => Key::Unknown(other as u32),
        },

        // NativeKeyCode is not a u32 in winit 0.30; preserve "unknown" without a stable numeric.
        PhysicalKey::Unidentified(_) => Key::Unknown(0),
    }
}
