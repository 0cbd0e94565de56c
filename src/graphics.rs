use std::ffi::CStr;
use std::num::NonZeroU32;

use anyhow::{anyhow, bail, Context as _, Result};
use glow::HasContext;
use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{Display, GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use log::{debug, warn};
use raw_window_handle::HasWindowHandle;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use crate::monitor::DisplayMode;

pub const WINDOW_TITLE: &str = "Render Window";

/// Teal-gray background the frame is cleared to
pub const CLEAR_COLOR: [f32; 4] = [0.2, 0.3, 0.3, 1.0];

/// Core entry points the loop depends on; bindings loading fails if any of
/// these cannot be resolved against the context
const REQUIRED_SYMBOLS: [&CStr; 4] = [c"glViewport", c"glClearColor", c"glClear", c"glGetString"];

/// Core profile version to request; macOS tops out at 4.1
fn requested_gl_version() -> Version {
    if cfg!(target_os = "macos") {
        Version::new(4, 1)
    } else {
        Version::new(4, 6)
    }
}

/// Create the borderless window at the detected monitor resolution together
/// with the GL config it will be rendered through. Exclusive fullscreen is
/// never requested; the window merely covers the monitor.
pub fn create_window(event_loop: &ActiveEventLoop, mode: DisplayMode) -> Result<(Window, Config)> {
    let window_attributes = Window::default_attributes()
        .with_title(WINDOW_TITLE)
        .with_decorations(false)
        .with_inner_size(PhysicalSize::new(mode.width, mode.height));

    let display_builder = DisplayBuilder::new().with_window_attributes(Some(window_attributes));
    let (window, gl_config) = display_builder
        .build(event_loop, ConfigTemplateBuilder::new(), pick_gl_config)
        .map_err(|err| anyhow!("failed to create window: {err}"))?;

    let window = window.context("display builder returned no window")?;
    debug!("picked GL config with {} samples", gl_config.num_samples());
    Ok((window, gl_config))
}

/// Prefer the config with the most samples, as offered by the platform
fn pick_gl_config(configs: Box<dyn Iterator<Item = Config> + '_>) -> Config {
    configs
        .reduce(|best, config| {
            if config.num_samples() > best.num_samples() {
                config
            } else {
                best
            }
        })
        .expect("platform offered no GL configs")
}

/// Resolve the OpenGL entry points through the display's loader.
///
/// The probe mirrors what a loader generator reports: a required symbol
/// resolving to null means the bindings are unusable.
fn load_bindings(gl_display: &Display) -> Result<glow::Context> {
    for symbol in REQUIRED_SYMBOLS {
        if gl_display.get_proc_address(symbol).is_null() {
            bail!("failed to resolve OpenGL symbol {symbol:?}");
        }
    }
    Ok(unsafe { glow::Context::from_loader_function_cstr(|s| gl_display.get_proc_address(s)) })
}

/// Owns the OpenGL context, the window surface, and the loaded bindings.
/// All rendering the shell does goes through here.
pub struct GlRenderer {
    gl: glow::Context,
    context: PossiblyCurrentContext,
    surface: Surface<WindowSurface>,
}

impl GlRenderer {
    /// Build a current context and surface for the window and load the
    /// OpenGL bindings against it.
    pub fn new(window: &Window, gl_config: &Config) -> Result<Self> {
        let gl_display = gl_config.display();
        let raw_window_handle = window.window_handle()?.as_raw();

        let context_attributes = ContextAttributesBuilder::new()
            .with_profile(GlProfile::Core)
            .with_context_api(ContextApi::OpenGl(Some(requested_gl_version())))
            .build(Some(raw_window_handle));

        let not_current = unsafe { gl_display.create_context(gl_config, &context_attributes) }
            .context("failed to create OpenGL context")?;

        let surface_attributes = window
            .build_surface_attributes(SurfaceAttributesBuilder::<WindowSurface>::new())
            .context("failed to build surface attributes")?;
        let surface = unsafe { gl_display.create_window_surface(gl_config, &surface_attributes) }
            .context("failed to create window surface")?;

        let context = not_current
            .make_current(&surface)
            .context("failed to make the OpenGL context current")?;

        let gl = load_bindings(&gl_display)?;
        let version = unsafe { gl.get_parameter_string(glow::VERSION) };
        debug!("OpenGL version: {version}");

        if let Err(err) = surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN)) {
            warn!("failed to enable vsync: {err}");
        }

        Ok(Self {
            gl,
            context,
            surface,
        })
    }

    /// Map rendering coordinates to the framebuffer, origin at (0, 0)
    pub fn set_viewport(&self, width: u32, height: u32) {
        unsafe {
            self.gl.viewport(0, 0, width as i32, height as i32);
        }
    }

    /// Resize the surface and viewport together. Zero dimensions are
    /// reported while minimized and are skipped.
    pub fn resize(&self, width: u32, height: u32) {
        if let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) {
            self.surface.resize(&self.context, w, h);
            self.set_viewport(width, height);
        }
    }

    /// Clear the back buffer to the fixed background color
    pub fn clear_frame(&self) {
        let [r, g, b, a] = CLEAR_COLOR;
        unsafe {
            self.gl.clear_color(r, g, b, a);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }
    }

    /// Present the cleared frame; blocks on vsync when the driver honors
    /// the swap interval
    pub fn present(&self) -> Result<()> {
        self.surface
            .swap_buffers(&self.context)
            .context("failed to swap buffers")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_color_is_opaque() {
        assert_eq!(CLEAR_COLOR[3], 1.0);
    }

    #[test]
    fn test_clear_color_components_in_range() {
        for component in CLEAR_COLOR {
            assert!((0.0..=1.0).contains(&component));
        }
    }

    #[test]
    fn test_window_title() {
        assert_eq!(WINDOW_TITLE, "Render Window");
    }

    #[test]
    fn test_requested_version_is_core_4x() {
        let version = requested_gl_version();
        assert_eq!(version.major, 4);
        assert!(version.minor == 1 || version.minor == 6);
    }

    #[test]
    fn test_required_symbols_cover_the_loop() {
        let names: Vec<&str> = REQUIRED_SYMBOLS
            .iter()
            .map(|s| s.to_str().unwrap())
            .collect();
        assert!(names.contains(&"glViewport"));
        assert!(names.contains(&"glClearColor"));
        assert!(names.contains(&"glClear"));
    }
}
