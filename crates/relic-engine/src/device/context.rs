use std::ffi::{c_void, CStr};
use std::num::NonZeroU32;
use std::rc::Rc;

use glow::HasContext;
use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use crate::error::{BootstrapError, PresentError};

use super::api::GlDevice;

/// Core entry points the renderer calls. All of them must resolve before the
/// function table is considered loaded.
pub const REQUIRED_ENTRY_POINTS: &[&CStr] = &[
    c"glCreateShader",
    c"glShaderSource",
    c"glCompileShader",
    c"glCreateProgram",
    c"glAttachShader",
    c"glLinkProgram",
    c"glUseProgram",
    c"glGenVertexArrays",
    c"glBindVertexArray",
    c"glGenBuffers",
    c"glBindBuffer",
    c"glBufferData",
    c"glVertexAttribPointer",
    c"glEnableVertexAttribArray",
    c"glClearColor",
    c"glClear",
    c"glDrawElements",
];

/// Context creation parameters.
#[derive(Debug, Clone)]
pub struct GlInit {
    /// Requested core-profile version `(major, minor)`.
    pub version: (u8, u8),

    /// Synchronize buffer swaps with the display refresh.
    ///
    /// Failure to apply it is logged and ignored.
    pub vsync: bool,
}

impl Default for GlInit {
    fn default() -> Self {
        Self {
            version: (3, 3),
            vsync: true,
        }
    }
}

/// Returns the first entry point `resolve` cannot find.
pub fn first_missing_entry_point<'a, F>(entry_points: &[&'a CStr], mut resolve: F) -> Option<&'a CStr>
where
    F: FnMut(&CStr) -> *const c_void,
{
    entry_points
        .iter()
        .copied()
        .find(|name| resolve(name).is_null())
}

// Prefer the config with the fewest samples; MSAA is never requested.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    configs
        .reduce(|best, c| if c.num_samples() < best.num_samples() { c } else { best })
        .expect("glutin reports an error instead of an empty config list")
}

/// Surface dimensions for a resize, or `None` when either side is zero
/// (minimized windows report 0×0).
pub fn surface_size(size: PhysicalSize<u32>) -> Option<(NonZeroU32, NonZeroU32)> {
    Some((NonZeroU32::new(size.width)?, NonZeroU32::new(size.height)?))
}

fn context_failed(err: impl std::fmt::Display) -> BootstrapError {
    BootstrapError::Context(err.to_string())
}

/// Window, GL surface and current context, plus the loaded function table.
///
/// Lives on the event-loop thread; the context is current there for the whole
/// lifetime of this value.
pub struct GlContext {
    gl: Rc<glow::Context>,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    window: Window,
}

impl GlContext {
    /// Creates the window, a core-profile context for it, and loads GL.
    pub fn new(
        event_loop: &ActiveEventLoop,
        attributes: WindowAttributes,
        init: &GlInit,
    ) -> Result<Self, BootstrapError> {
        let (window, config) = DisplayBuilder::new()
            .with_window_attributes(Some(attributes))
            .build(event_loop, ConfigTemplateBuilder::new(), pick_config)
            .map_err(|e| BootstrapError::Window(e.to_string()))?;
        let window = window
            .ok_or_else(|| BootstrapError::Window("display builder returned no window".into()))?;

        let raw_window_handle = window
            .window_handle()
            .map_err(|e| BootstrapError::Window(e.to_string()))?
            .as_raw();

        let display = config.display();
        let (major, minor) = init.version;
        let context_attributes = ContextAttributesBuilder::new()
            .with_profile(GlProfile::Core)
            .with_context_api(ContextApi::OpenGl(Some(Version::new(major, minor))))
            .build(Some(raw_window_handle));

        let not_current = unsafe { display.create_context(&config, &context_attributes) }
            .map_err(context_failed)?;

        let surface_attributes = window
            .build_surface_attributes(Default::default())
            .map_err(context_failed)?;
        let surface = unsafe { display.create_window_surface(&config, &surface_attributes) }
            .map_err(context_failed)?;

        let context = not_current.make_current(&surface).map_err(context_failed)?;

        if init.vsync {
            if let Err(e) = surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN)) {
                log::warn!("vsync unavailable: {e}");
            }
        }

        if let Some(name) =
            first_missing_entry_point(REQUIRED_ENTRY_POINTS, |name| display.get_proc_address(name))
        {
            return Err(BootstrapError::Loader(name.to_string_lossy().into_owned()));
        }

        // SAFETY: the context was made current on this thread just above.
        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|name| display.get_proc_address(name))
        };

        let (version, renderer) = unsafe {
            (
                gl.get_parameter_string(glow::VERSION),
                gl.get_parameter_string(glow::RENDERER),
            )
        };
        log::info!("OpenGL {version} ({renderer})");

        Ok(Self {
            gl: Rc::new(gl),
            surface,
            context,
            window,
        })
    }

    pub fn gl(&self) -> &Rc<glow::Context> {
        &self.gl
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Resizes the surface and the viewport. Zero-sized requests are ignored.
    pub fn resize(&self, size: PhysicalSize<u32>) {
        let Some((width, height)) = surface_size(size) else {
            return;
        };

        self.surface.resize(&self.context, width, height);
        GlDevice::viewport(&*self.gl, 0, 0, size.width as i32, size.height as i32);
    }

    /// Presents the back buffer.
    pub fn swap_buffers(&self) -> Result<(), PresentError> {
        self.window.pre_present_notify();
        self.surface
            .swap_buffers(&self.context)
            .map_err(|e| PresentError(e.to_string()))
    }
}
