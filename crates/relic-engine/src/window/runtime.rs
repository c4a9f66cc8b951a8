use anyhow::Context;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::monitor::MonitorHandle;
use winit::window::{Window, WindowAttributes, WindowId};

use crate::core::{FrameAction, FrameLoop, LoopState};
use crate::device::{GlContext, GlInit};
use crate::error::BootstrapError;
use crate::input::translate_window_event;
use crate::render::{Color, Scene, ShaderFailurePolicy, BACKGROUND};

use super::placement::centered_position;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub initial_size: LogicalSize<f64>,
    pub resizable: bool,
    pub gl: GlInit,
    pub clear_color: Color,
    pub shader_failure: ShaderFailurePolicy,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "Relic-Engine".to_string(),
            initial_size: LogicalSize::new(800.0, 800.0),
            resizable: true,
            gl: GlInit::default(),
            clear_color: BACKGROUND,
            shader_failure: ShaderFailurePolicy::Continue,
        }
    }
}

impl RuntimeConfig {
    /// Window attributes, centered on `monitor` when one is known.
    pub fn window_attributes(&self, monitor: Option<&MonitorHandle>) -> WindowAttributes {
        let mut attrs = Window::default_attributes()
            .with_title(self.title.clone())
            .with_inner_size(self.initial_size)
            .with_resizable(self.resizable);

        if let Some(monitor) = monitor {
            let size = self.initial_size.to_physical::<u32>(monitor.scale_factor());
            attrs = attrs.with_position(centered_position(monitor.position(), monitor.size(), size));
        }

        attrs
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, sets up the scene, and runs the frame loop until the
    /// user quits.
    ///
    /// Returns the first fatal bootstrap error, if any.
    pub fn run(config: RuntimeConfig) -> Result<(), BootstrapError> {
        let event_loop = EventLoop::new().map_err(BootstrapError::Video)?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let mut state = AppState::new(config);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")
            .map_err(BootstrapError::Runtime)?;

        match state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Everything that exists once bootstrap succeeded.
///
/// Field order is drop order: GL objects go while the context is still alive.
struct Active {
    frame_loop: FrameLoop<glow::Context>,
    context: GlContext,
}

struct AppState {
    config: RuntimeConfig,
    active: Option<Active>,
    fatal: Option<BootstrapError>,
}

impl AppState {
    fn new(config: RuntimeConfig) -> Self {
        Self {
            config,
            active: None,
            fatal: None,
        }
    }

    fn bootstrap(&self, event_loop: &ActiveEventLoop) -> Result<Active, BootstrapError> {
        let monitor = event_loop.available_monitors().next();
        let attrs = self.config.window_attributes(monitor.as_ref());

        let context = GlContext::new(event_loop, attrs, &self.config.gl)?;

        let scene = Scene::triforce(
            context.gl().clone(),
            self.config.clear_color,
            self.config.shader_failure,
        )?;

        Ok(Active {
            frame_loop: FrameLoop::new(scene),
            context,
        })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: BootstrapError) {
        self.active = None;
        self.fatal = Some(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.active.is_some() || self.fatal.is_some() {
            return;
        }

        match self.bootstrap(event_loop) {
            Ok(active) => {
                log::debug!("bootstrap complete");
                active.context.window().request_redraw();
                self.active = Some(active);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(active) = self.active.as_ref() else {
            return;
        };

        if active.frame_loop.state() == LoopState::Closing {
            event_loop.exit();
            return;
        }

        // Continuous redraw: one frame per pass over the event queue.
        active.context.window().request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(active) = self.active.as_mut() else {
            return;
        };

        if let WindowEvent::Resized(size) = event {
            active.context.resize(size);
        }

        match active.frame_loop.dispatch(&translate_window_event(&event)) {
            FrameAction::Exit => event_loop.exit(),
            FrameAction::Present => {
                if let Err(e) = active.context.swap_buffers() {
                    log::error!("{e}");
                }
            }
            FrameAction::Idle => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(active) = self.active.take() {
            log::debug!("shutting down after {} frames", active.frame_loop.frames());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_triforce_window() {
        let cfg = RuntimeConfig::default();
        assert_eq!(cfg.title, "Relic-Engine");
        assert_eq!(cfg.initial_size, LogicalSize::new(800.0, 800.0));
        assert!(cfg.resizable);
        assert_eq!(cfg.gl.version, (3, 3));
        assert_eq!(cfg.clear_color, Color::new(0.4, 0.8, 0.8, 1.0));
        assert_eq!(cfg.shader_failure, ShaderFailurePolicy::Continue);
    }
}
